use crate::common::{ColorRGBA, ColorValue, Level, GRID_COLS, GRID_ROWS, LEVELS, LEVEL_SCALE, OPAQUE};

pub fn scale_level(level: Level) -> ColorValue {
    debug_assert!(level < LEVELS);
    level * LEVEL_SCALE
}

/// Blue level of a grid cell, selected by quadrant:
///
/// ```text
/// [Q1 | b=0] [Q2 | b=1]
/// [Q3 | b=2] [Q4 | b=3]
/// ```
pub fn blue_level(x: u32, y: u32) -> Level {
    let right = x >= GRID_COLS / 2;
    let bottom = y >= GRID_ROWS / 2;
    match (right, bottom) {
        (false, false) => 0,
        (true, false) => 1,
        (false, true) => 2,
        (true, true) => 3,
    }
}

/// Color of the swatch at grid cell `(x, y)`.
///
/// Within each 4x4 quadrant, red follows the column and green follows the row:
///
/// ```text
///     r00 r01 r10 r11
/// g00 bxx bxx bxx bxx
/// g01 bxx bxx bxx bxx
/// g10 bxx bxx bxx bxx
/// g11 bxx bxx bxx bxx
/// ```
pub fn grid_color(x: u32, y: u32) -> ColorRGBA {
    debug_assert!(x < GRID_COLS && y < GRID_ROWS);
    let levels = LEVELS as u32;
    let r = (x % levels) as Level;
    let g = (y % levels) as Level;
    let b = blue_level(x, y);
    (scale_level(r), scale_level(g), scale_level(b), OPAQUE)
}
