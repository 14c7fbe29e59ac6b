//! スプライトで使う色の一覧.

use crate::basis::Color;

pub const BACKGROUND: Color = Color::new(15, 56, 15);
pub const OUTLINE: Color = Color::new(0, 0, 0);
pub const SKIN: Color = Color::new(232, 197, 71);
pub const SPOT: Color = Color::new(139, 105, 20);
pub const BELLY: Color = Color::new(245, 230, 184);
pub const EYE: Color = Color::new(45, 45, 45);
pub const HIGHLIGHT: Color = Color::new(255, 255, 255);

/// パレットに含まれる全ての色.
pub const ALL: [Color; 7] = [BACKGROUND, OUTLINE, SKIN, SPOT, BELLY, EYE, HIGHLIGHT];

/// `color` の名前を返す. パレット外の色なら `None`.
pub fn name_of(color: Color) -> Option<&'static str> {
    let name = match color {
        BACKGROUND => "background",
        OUTLINE => "outline",
        SKIN => "skin",
        SPOT => "spot",
        BELLY => "belly",
        EYE => "eye",
        HIGHLIGHT => "highlight",
        _ => return None,
    };
    Some(name)
}

pub fn contains(color: Color) -> bool {
    name_of(color).is_some()
}
