// GIMP palette (.gpl) output
use std::io::Write;

use anyhow::Result;
use itertools::iproduct;

use crate::{
    common::{ColorRGB, LEVELS, PALETTE_NAME},
    helpers::scale_level,
};

/// The 64 palette colors in file order: blue varies slowest, red fastest.
///
/// This is not the order of the swatches in the rendered image, which walks
/// the grid quadrant by quadrant instead.
pub fn palette_entries() -> Vec<ColorRGB> {
    iproduct!(0..LEVELS, 0..LEVELS, 0..LEVELS)
        .map(|(b, g, r)| (scale_level(r), scale_level(g), scale_level(b)))
        .collect()
}

pub fn format_entry((r, g, b): ColorRGB) -> String {
    format!("{:3} {:3} {:3}", r, g, b)
}

pub fn write_gpl<W: Write>(mut out: W) -> Result<()> {
    writeln!(out, "GIMP Palette")?;
    writeln!(out, "Name: {}", PALETTE_NAME)?;
    writeln!(out, "#")?;
    for color in palette_entries() {
        writeln!(out, "{}", format_entry(color))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use itertools::iproduct;

    use super::*;
    use crate::{
        common::{GRID_COLS, GRID_ROWS},
        helpers::grid_color,
    };

    fn gpl_text() -> String {
        let mut bytes: Vec<u8> = vec![];
        write_gpl(&mut bytes).unwrap();
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn header_and_line_count() {
        let text = gpl_text();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 67);
        assert_eq!(lines[0], "GIMP Palette");
        assert_eq!(lines[1], "Name: Sega Master System");
        assert_eq!(lines[2], "#");
        assert_eq!(lines[3], "  0   0   0");
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn entry_order() {
        let lines: Vec<String> = gpl_text().lines().map(str::to_string).collect();
        assert_eq!(lines[4], " 85   0   0");
        assert_eq!(lines[7], "  0  85   0");
        assert_eq!(lines[3 + 16], "  0   0  85");
        assert_eq!(lines[66], "255 255 255");
    }

    #[test]
    fn entries_are_fixed_width() {
        for line in gpl_text().lines().skip(3) {
            assert_eq!(line.len(), 11, "{line:?}");
            let fields: Vec<u8> = line
                .split_whitespace()
                .map(|f| f.parse().unwrap())
                .collect();
            assert_eq!(fields.len(), 3);
            for (i, f) in fields.iter().enumerate() {
                assert_eq!(&line[i * 4..i * 4 + 3], format!("{:3}", f));
            }
        }
    }

    #[test]
    fn same_colors_as_image() {
        let file_colors: HashSet<ColorRGB> = palette_entries().into_iter().collect();
        let image_colors: HashSet<ColorRGB> = iproduct!(0..GRID_ROWS, 0..GRID_COLS)
            .map(|(y, x)| {
                let (r, g, b, _) = grid_color(x, y);
                (r, g, b)
            })
            .collect();
        assert_eq!(palette_entries().len(), 64);
        assert_eq!(file_colors.len(), 64);
        assert_eq!(file_colors, image_colors);
    }

    #[test]
    fn orders_differ() {
        let image_order: Vec<ColorRGB> = iproduct!(0..GRID_ROWS, 0..GRID_COLS)
            .map(|(y, x)| {
                let (r, g, b, _) = grid_color(x, y);
                (r, g, b)
            })
            .collect();
        assert_ne!(image_order, palette_entries());
    }
}
