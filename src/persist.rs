use std::{
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use json_pretty_compact::PrettyCompactFormatter;
use log::info;
use serde::Serialize;
use serde_json::Serializer;

use crate::{
    common::{GPL_FILENAME, JSON_FILENAME, PNG_FILENAME},
    gpl::write_gpl,
    render::{encode_png, PaletteImage},
    state::Palette,
};

// Creates (or truncates) `path`, hands a buffered writer to `write`, and
// flushes it so that late write errors are reported. The file is closed
// before returning, on both the success and the error path.
fn save_with<F>(path: &Path, write: F) -> Result<()>
where
    F: FnOnce(&mut BufWriter<File>) -> Result<()>,
{
    info!("Saving {}", path.display());
    let file =
        File::create(path).with_context(|| format!("Unable to create {}", path.display()))?;
    let mut out = BufWriter::new(file);
    write(&mut out).with_context(|| format!("Unable to write {}", path.display()))?;
    out.flush()
        .with_context(|| format!("Unable to flush {}", path.display()))?;
    Ok(())
}

pub fn save_png(dir: &Path, image: &PaletteImage) -> Result<PathBuf> {
    let path = dir.join(PNG_FILENAME);
    save_with(&path, |out| encode_png(image, out))?;
    Ok(path)
}

pub fn save_gpl(dir: &Path) -> Result<PathBuf> {
    let path = dir.join(GPL_FILENAME);
    save_with(&path, |out| write_gpl(out))?;
    Ok(path)
}

pub fn save_json<T: Serialize>(path: &Path, data: &T) -> Result<()> {
    save_with(path, |out| {
        let formatter = PrettyCompactFormatter::new();
        let mut ser = Serializer::with_formatter(&mut *out, formatter);
        data.serialize(&mut ser)?;
        Ok(())
    })
}

pub fn save_palette_json(dir: &Path, palette: &Palette) -> Result<PathBuf> {
    let path = dir.join(JSON_FILENAME);
    save_json(&path, palette)?;
    Ok(path)
}
