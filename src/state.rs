use serde::{Deserialize, Serialize};

use crate::{
    common::{ColorRGB, PALETTE_NAME},
    gpl::palette_entries,
};

#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct Palette {
    pub name: String,
    pub colors: Vec<ColorRGB>,
}

impl Default for Palette {
    fn default() -> Self {
        Palette {
            name: PALETTE_NAME.to_string(),
            colors: palette_entries(),
        }
    }
}
