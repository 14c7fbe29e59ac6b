use std::ops;

use log::debug;

use crate::{
    basis::{Color, Pos},
    instruction::Instruction,
    raster,
};


/// `Canvas` は描画中の画像を表す. ピクセルは行優先で `pixels` に格納する.
#[derive(Clone, PartialEq, Eq)]
pub struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
}

impl std::fmt::Debug for Canvas {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Canvas")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish()
    }
}

impl Canvas {
    /// 全面を `background` で塗った `width` x `height` のキャンバスを作る.
    pub fn new(width: u32, height: u32, background: Color) -> Self {
        Self {
            width,
            height,
            pixels: vec![background; width as usize * height as usize],
        }
    }

    pub(crate) fn from_pixels(width: u32, height: u32, pixels: Vec<Color>) -> Self {
        assert_eq!(pixels.len(), width as usize * height as usize);
        Self {
            width,
            height,
            pixels,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// 行優先のピクセル列.
    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    pub fn contains(&self, pos: Pos) -> bool {
        0 <= pos.x && pos.x < self.width as i32 && 0 <= pos.y && pos.y < self.height as i32
    }

    fn index_of(&self, pos: Pos) -> Option<usize> {
        if self.contains(pos) {
            Some(pos.y as usize * self.width as usize + pos.x as usize)
        } else {
            None
        }
    }

    pub fn get(&self, pos: Pos) -> Option<Color> {
        self.index_of(pos).map(|i| self.pixels[i])
    }

    /// `pos` を `color` で塗る. 範囲外なら何もしない.
    pub fn set_pixel(&mut self, pos: Pos, color: Color) {
        if let Some(i) = self.index_of(pos) {
            self.pixels[i] = color;
        }
    }

    /// 二つの角を含む矩形を塗る. 角の順序は問わず, はみ出した部分は切り捨てる.
    pub fn fill_rect(&mut self, top_left: Pos, bottom_right: Pos, color: Color) {
        let x0 = top_left.x.min(bottom_right.x).max(0);
        let x1 = top_left.x.max(bottom_right.x).min(self.width as i32 - 1);
        let y0 = top_left.y.min(bottom_right.y).max(0);
        let y1 = top_left.y.max(bottom_right.y).min(self.height as i32 - 1);

        for y in y0..=y1 {
            for x in x0..=x1 {
                self.set_pixel(Pos::new(x, y), color);
            }
        }
    }

    /// 多角形の内部と境界を塗る. 判定方法は [`raster::polygon`] を参照.
    pub fn fill_polygon(&mut self, vertices: &[Pos], color: Color) {
        raster::polygon(vertices, |pos| self.set_pixel(pos, color));
    }

    /// `points` のうち範囲内で `from` の色のピクセルだけ `to` に塗り替える. 塗り替えた数を返す.
    pub fn recolor(&mut self, points: &[Pos], from: Color, to: Color) -> usize {
        let mut count = 0;
        for &pos in points {
            if let Some(i) = self.index_of(pos) {
                if self.pixels[i] == from {
                    self.pixels[i] = to;
                    count += 1;
                }
            }
        }
        count
    }

    pub fn apply(&mut self, instruction: &Instruction) {
        match instruction {
            Instruction::Polygon { vertices, color } => {
                debug!("polygon of {} vertices in {:?}", vertices.len(), color);
                self.fill_polygon(vertices, *color);
            }
            Instruction::Rect {
                top_left,
                bottom_right,
                color,
            } => {
                debug!("rect {:?}-{:?} in {:?}", top_left, bottom_right, color);
                self.fill_rect(*top_left, *bottom_right, *color);
            }
            Instruction::Pixel { pos, color } => {
                if !self.contains(*pos) {
                    debug!("pixel {:?} is out of bounds, skipped", pos);
                }
                self.set_pixel(*pos, *color);
            }
            Instruction::Recolor { points, from, to } => {
                let count = self.recolor(points, *from, *to);
                debug!(
                    "recolored {} of {} points from {:?} to {:?}",
                    count,
                    points.len(),
                    from,
                    to
                );
            }
        }
    }

    /// 最近傍法で `factor` 倍に拡大したキャンバスを返す. 新しい色は生じない.
    pub fn scale(&self, factor: u32) -> Self {
        assert!(factor > 0, "scale factor must be positive");

        let width = self.width * factor;
        let height = self.height * factor;
        let mut pixels = Vec::with_capacity(width as usize * height as usize);

        for y in 0..height {
            let row = (y / factor) as usize * self.width as usize;
            for x in 0..width {
                pixels.push(self.pixels[row + (x / factor) as usize]);
            }
        }

        debug!(
            "scaled {}x{} by {} to {}x{}",
            self.width, self.height, factor, width, height
        );

        Self {
            width,
            height,
            pixels,
        }
    }
}

impl ops::Index<Pos> for Canvas {
    type Output = Color;

    fn index(&self, pos: Pos) -> &Self::Output {
        let i = self
            .index_of(pos)
            .unwrap_or_else(|| panic!("{:?} is out of the canvas", pos));
        &self.pixels[i]
    }
}
