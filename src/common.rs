pub type ColorValue = u8; // Color channel intensity (0-255)
pub type Level = u8; // Quantized channel level (0-3)
pub type ColorRGB = (ColorValue, ColorValue, ColorValue);
pub type ColorRGBA = (ColorValue, ColorValue, ColorValue, ColorValue);

// Grid layout of the palette image:
pub const GRID_COLS: u32 = 8;
pub const GRID_ROWS: u32 = 8;
pub const BLOCK_DIM: u32 = 64;
pub const IMAGE_WIDTH: u32 = GRID_COLS * BLOCK_DIM;
pub const IMAGE_HEIGHT: u32 = GRID_ROWS * BLOCK_DIM;

// The SMS has 2 bits per channel, so 4 levels spread evenly over 0-255:
pub const LEVELS: Level = 4;
pub const LEVEL_SCALE: ColorValue = 85;
pub const OPAQUE: ColorValue = 0xFF;

pub const PALETTE_NAME: &str = "Sega Master System";
pub const PNG_FILENAME: &str = "SegaMasterSystem_Palette.png";
pub const GPL_FILENAME: &str = "SegaMasterSystem.gpl";
pub const JSON_FILENAME: &str = "SegaMasterSystem.json";
