//! 図形をピクセルの集合に変換する.
//!
//! どの関数もキャンバスの範囲を知らないので, 範囲外の座標も `plot` に渡す.

use crate::basis::Pos;

/// `Edge` は多角形の水平でない辺を表す. `(x0, y0)` は Y 座標が小さい方の端点.
struct Edge {
    x0: f64,
    y0: i32,
    dx: f64,
    ymax: i32,
}

impl Edge {
    fn new(a: Pos, b: Pos) -> Self {
        debug_assert_ne!(a.y, b.y);
        let (lo, hi) = if a.y < b.y { (a, b) } else { (b, a) };
        Self {
            x0: lo.x as f64,
            y0: lo.y,
            dx: (hi.x - lo.x) as f64 / (hi.y - lo.y) as f64,
            ymax: hi.y,
        }
    }

    fn covers(&self, y: i32) -> bool {
        self.y0 <= y && y <= self.ymax
    }

    fn x_at(&self, y: i32) -> f64 {
        (y - self.y0) as f64 * self.dx + self.x0
    }
}

/// 多角形の辺を列挙する. 最後の頂点から最初の頂点への辺も含む.
fn edges(vertices: &[Pos]) -> impl Iterator<Item = (Pos, Pos)> + '_ {
    vertices
        .iter()
        .zip(vertices.iter().cycle().skip(1))
        .map(|(&a, &b)| (a, b))
}

/// 多角形に含まれるピクセルを列挙する.
///
/// 走査線は整数の Y 座標で取り, 交点の組ごとに `ceil(左)..=floor(右)` を塗る (偶奇規則).
/// 各辺は両端の行を含み, 下端の頂点では交点を二重に数えるので, 頂点を通過する走査線でも偶奇が崩れない.
/// 水平な辺はその区間をそのまま塗る. 同じピクセルが複数回渡されることがある.
pub fn polygon(vertices: &[Pos], mut plot: impl FnMut(Pos)) {
    let mut slanted = vec![];
    for (a, b) in edges(vertices) {
        if a.y == b.y {
            for x in a.x.min(b.x)..=a.x.max(b.x) {
                plot(Pos::new(x, a.y));
            }
        } else {
            slanted.push(Edge::new(a, b));
        }
    }

    let (min_y, max_y) = match (
        slanted.iter().map(|e| e.y0).min(),
        slanted.iter().map(|e| e.ymax).max(),
    ) {
        (Some(min), Some(max)) => (min, max),
        _ => return,
    };

    let mut xs = vec![];
    for y in min_y..=max_y {
        xs.clear();
        for edge in slanted.iter().filter(|e| e.covers(y)) {
            let x = edge.x_at(y);
            xs.push(x);
            if y == edge.ymax && y < max_y {
                xs.push(x);
            }
        }
        xs.sort_by(|l, r| l.partial_cmp(r).unwrap_or(std::cmp::Ordering::Equal));

        for span in xs.chunks_exact(2) {
            let from = span[0].ceil() as i32;
            let to = span[1].floor() as i32;
            for x in from..=to {
                plot(Pos::new(x, y));
            }
        }
    }
}
