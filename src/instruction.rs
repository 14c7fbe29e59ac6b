use crate::basis::{Color, Pos};

/// `Instruction` はキャンバスに対する描画操作の一つを表す. 順に適用すると後の操作が前の操作を上書きする.
#[derive(Debug, Clone)]
pub enum Instruction {
    /// 多角形を内部と境界ごと塗る.
    Polygon { vertices: Vec<Pos>, color: Color },
    /// `top_left` と `bottom_right` を対角とする矩形を両端を含めて塗る.
    Rect {
        top_left: Pos,
        bottom_right: Pos,
        color: Color,
    },
    /// 一点だけ塗る. 範囲外なら何もしない.
    Pixel { pos: Pos, color: Color },
    /// `points` のうち現在 `from` の色であるピクセルだけを `to` に塗り替える.
    Recolor {
        points: Vec<Pos>,
        from: Color,
        to: Color,
    },
}

impl Instruction {
    pub fn polygon(vertices: &[(i32, i32)], color: Color) -> Self {
        Self::Polygon {
            vertices: vertices.iter().map(|&v| v.into()).collect(),
            color,
        }
    }

    pub fn rect(top_left: (i32, i32), bottom_right: (i32, i32), color: Color) -> Self {
        Self::Rect {
            top_left: top_left.into(),
            bottom_right: bottom_right.into(),
            color,
        }
    }

    pub fn pixel(x: i32, y: i32, color: Color) -> Self {
        Self::Pixel {
            pos: Pos::new(x, y),
            color,
        }
    }

    pub fn recolor(points: &[(i32, i32)], from: Color, to: Color) -> Self {
        Self::Recolor {
            points: points.iter().map(|&p| p.into()).collect(),
            from,
            to,
        }
    }
}
