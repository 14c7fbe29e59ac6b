//! ヒョウモントカゲモドキのスプライト.
//!
//! 座標はすべて 48x36 の原寸キャンバス上のもの.

use log::debug;

use crate::{
    canvas::Canvas,
    instruction::Instruction,
    palette::{BACKGROUND, BELLY, EYE, HIGHLIGHT, OUTLINE, SKIN, SPOT},
};

pub const WIDTH: u32 = 48;
pub const HEIGHT: u32 = 36;
pub const SCALE: u32 = 12;

/// 輪郭を含む胴体全体.
const BODY: &[(i32, i32)] = &[
    (8, 9),
    (6, 9),
    (4, 10),
    (3, 11),
    (2, 13),
    (2, 15),
    (2, 17),
    (3, 19),
    (4, 20),
    (6, 21),
    (8, 22),
    (10, 23),
    (12, 24),
    (14, 25),
    (18, 25),
    (20, 24),
    (22, 23),
    (24, 22),
    (26, 21),
    (28, 20),
    (30, 19),
    (32, 18),
    (34, 16),
    (35, 14),
    (36, 12),
    (37, 10),
    (37, 8),
    (36, 7),
    (35, 7),
    (34, 8),
    (33, 9),
    (31, 10),
    (29, 11),
    (27, 12),
    (25, 13),
    (23, 13),
    (20, 13),
    (17, 12),
    (14, 11),
    (12, 10),
    (10, 9),
];

/// `BODY` の 1 ピクセル内側.
const SKIN_AREA: &[(i32, i32)] = &[
    (8, 10),
    (6, 10),
    (5, 11),
    (4, 12),
    (3, 13),
    (3, 15),
    (3, 17),
    (4, 19),
    (5, 20),
    (7, 21),
    (9, 22),
    (11, 23),
    (13, 24),
    (17, 24),
    (19, 23),
    (21, 22),
    (23, 21),
    (25, 20),
    (27, 19),
    (29, 18),
    (31, 17),
    (33, 15),
    (34, 13),
    (35, 11),
    (36, 9),
    (36, 8),
    (35, 8),
    (34, 9),
    (33, 10),
    (31, 11),
    (29, 12),
    (27, 13),
    (24, 14),
    (21, 14),
    (18, 13),
    (15, 12),
    (13, 11),
    (11, 10),
];

const BELLY_AREA: &[(i32, i32)] = &[
    (4, 17),
    (3, 16),
    (3, 15),
    (4, 17),
    (5, 18),
    (6, 19),
    (7, 20),
    (9, 21),
    (11, 22),
    (14, 23),
    (17, 23),
    (18, 22),
    (16, 22),
    (13, 21),
    (11, 20),
    (9, 19),
    (7, 18),
    (5, 17),
];

const EYE_HIGHLIGHTS: &[(i32, i32)] = &[(4, 13), (5, 13)];
const MOUTH: (i32, i32) = (3, 18);

/// 胴体に散らす斑点. 肌色の上にだけ置く.
pub const SPOTS: &[(i32, i32)] = &[
    (8, 12),
    (10, 11),
    (9, 14),
    (14, 13),
    (17, 14),
    (20, 13),
    (12, 14),
    (16, 12),
    (19, 12),
    (13, 16),
    (16, 15),
    (19, 16),
    (10, 15),
    (15, 14),
    (21, 15),
    (25, 15),
    (27, 14),
    (24, 16),
    (29, 13),
    (31, 12),
    (33, 11),
    (35, 10),
    (30, 15),
    (32, 14),
    (34, 12),
];

/// 脚一本分. 輪郭の多角形, 肌色の矩形, 足先の腹色の矩形, 両端の指の順に描く.
struct Leg {
    left: i32,
    top: i32,
    bottom: i32,
}

impl Leg {
    const FRONT: Self = Self {
        left: 7,
        top: 22,
        bottom: 29,
    };
    const BACK: Self = Self {
        left: 19,
        top: 24,
        bottom: 29,
    };

    fn instructions(&self) -> Vec<Instruction> {
        let right = self.left + 3;
        vec![
            Instruction::polygon(
                &[
                    (self.left, self.top),
                    (right, self.top),
                    (right, self.bottom),
                    (self.left, self.bottom),
                ],
                OUTLINE,
            ),
            Instruction::rect(
                (self.left + 1, self.top + 1),
                (right - 1, self.bottom - 1),
                SKIN,
            ),
            Instruction::rect(
                (self.left + 1, self.bottom - 2),
                (right - 1, self.bottom - 1),
                BELLY,
            ),
            Instruction::pixel(self.left, self.bottom, OUTLINE),
            Instruction::pixel(right, self.bottom, OUTLINE),
        ]
    }
}

/// スプライトを描く操作を描画順に返す. 最後の操作は斑点の塗り替え.
pub fn instructions() -> Vec<Instruction> {
    let mut ops = vec![
        Instruction::polygon(BODY, OUTLINE),
        Instruction::polygon(SKIN_AREA, SKIN),
        Instruction::polygon(BELLY_AREA, BELLY),
    ];

    ops.extend(Leg::FRONT.instructions());
    ops.extend(Leg::BACK.instructions());

    ops.push(Instruction::rect((4, 13), (7, 16), EYE));
    ops.extend(
        EYE_HIGHLIGHTS
            .iter()
            .map(|&(x, y)| Instruction::pixel(x, y, HIGHLIGHT)),
    );
    ops.push(Instruction::pixel(MOUTH.0, MOUTH.1, OUTLINE));

    ops.push(Instruction::recolor(SPOTS, SKIN, SPOT));
    ops
}

/// 原寸のスプライトを描く.
pub fn render_native() -> Canvas {
    let mut canvas = Canvas::new(WIDTH, HEIGHT, BACKGROUND);
    for op in &instructions() {
        canvas.apply(op);
    }
    canvas
}

/// `SCALE` 倍に拡大したスプライトを描く.
pub fn render() -> Canvas {
    let canvas = render_native().scale(SCALE);
    debug!("rendered sprite at {}x{}", canvas.width(), canvas.height());
    canvas
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{basis::Pos, palette};

    #[test]
    fn leg_matches_hand_drawn_layout() {
        let mut canvas = Canvas::new(WIDTH, HEIGHT, BACKGROUND);
        for op in &Leg::FRONT.instructions() {
            canvas.apply(op);
        }

        for y in 22..=29 {
            assert_eq!(canvas[Pos::new(7, y)], OUTLINE);
            assert_eq!(canvas[Pos::new(10, y)], OUTLINE);
        }
        for x in 7..=10 {
            assert_eq!(canvas[Pos::new(x, 22)], OUTLINE);
            assert_eq!(canvas[Pos::new(x, 29)], OUTLINE);
        }
        for x in 8..=9 {
            for y in 23..=26 {
                assert_eq!(canvas[Pos::new(x, y)], SKIN);
            }
            for y in 27..=28 {
                assert_eq!(canvas[Pos::new(x, y)], BELLY);
            }
        }
    }

    #[test]
    fn landmarks() {
        let canvas = render_native();

        assert_eq!(canvas[Pos::new(0, 0)], BACKGROUND);
        assert_eq!(canvas[Pos::new(47, 35)], BACKGROUND);
        assert_eq!(canvas[Pos::new(4, 13)], HIGHLIGHT);
        assert_eq!(canvas[Pos::new(5, 13)], HIGHLIGHT);
        assert_eq!(canvas[Pos::new(6, 13)], EYE);
        assert_eq!(canvas[Pos::new(7, 16)], EYE);
        assert_eq!(canvas[Pos::new(3, 18)], OUTLINE);
        assert_eq!(canvas[Pos::new(19, 29)], OUTLINE);
        assert_eq!(canvas[Pos::new(22, 29)], OUTLINE);
        assert_eq!(canvas[Pos::new(20, 25)], SKIN);
        assert_eq!(canvas[Pos::new(21, 28)], BELLY);
        assert_eq!(canvas[Pos::new(8, 12)], SPOT);
    }

    #[test]
    fn outline_ring_survives_skin_fill() {
        let canvas = render_native();

        // between the diagonal edges of BODY and SKIN_AREA
        let ring = [
            (2, 13),
            (6, 21),
            (12, 10),
            (14, 11),
            (16, 12),
            (19, 13),
            (26, 13),
            (34, 14),
            (35, 12),
            (36, 10),
        ];
        for &(x, y) in &ring {
            assert_eq!(canvas[Pos::new(x, y)], OUTLINE, "({}, {})", x, y);
        }

        // just outside BODY
        for &(x, y) in &[(2, 12), (5, 21), (37, 11)] {
            assert_eq!(canvas[Pos::new(x, y)], BACKGROUND, "({}, {})", x, y);
        }
    }

    #[test]
    fn uses_only_palette_colors() {
        let canvas = render_native();
        assert!(canvas.pixels().iter().all(|&c| palette::contains(c)));
        for color in &[OUTLINE, SKIN, SPOT, BELLY, EYE, HIGHLIGHT] {
            assert!(canvas.pixels().contains(color), "{:?} is missing", color);
        }
    }

    #[test]
    fn spots_only_land_on_skin() {
        let mut ops = instructions();
        let last = ops.pop().unwrap();
        assert!(matches!(last, Instruction::Recolor { .. }));

        let mut canvas = Canvas::new(WIDTH, HEIGHT, BACKGROUND);
        for op in &ops {
            canvas.apply(op);
        }
        let before = canvas.clone();
        canvas.apply(&last);

        for &(x, y) in SPOTS {
            let pos = Pos::new(x, y);
            if before[pos] == SKIN {
                assert_eq!(canvas[pos], SPOT);
            } else {
                assert_eq!(canvas[pos], before[pos]);
            }
        }

        // nothing outside the spot list changes
        let spots = SPOTS.iter().map(|&p| Pos::from(p)).collect::<Vec<_>>();
        for y in 0..HEIGHT as i32 {
            for x in 0..WIDTH as i32 {
                let pos = Pos::new(x, y);
                if !spots.contains(&pos) {
                    assert_eq!(canvas[pos], before[pos]);
                }
            }
        }
    }

    #[test]
    fn render_is_deterministic() {
        assert_eq!(render(), render());
    }

    #[test]
    fn render_is_scaled_native() {
        let native = render_native();
        let big = render();
        assert_eq!(big.width(), WIDTH * SCALE);
        assert_eq!(big.height(), HEIGHT * SCALE);

        for y in 0..big.height() as i32 {
            for x in 0..big.width() as i32 {
                let src = Pos::new(x / SCALE as i32, y / SCALE as i32);
                assert_eq!(big[Pos::new(x, y)], native[src]);
            }
        }
    }
}
