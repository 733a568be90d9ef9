use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tiny_skia::{ColorU8, Pixmap};
use tracing::info;

use crate::draw;
use crate::state::ConnectionState;

/// Default tray icon edge length in pixels.
pub const SIZE: u32 = 32;

/// Inset from the canvas edge to the status circle.
const MARGIN: f32 = 4.0;
/// Stroke width of the dark grey ring around the circle.
const OUTLINE_WIDTH: f32 = 2.0;

fn outline_color() -> ColorU8 {
    ColorU8::from_rgba(50, 50, 50, 255)
}

/// Render the status circle for `state` on a transparent canvas.
pub fn render(state: ConnectionState, size: u32) -> Result<Pixmap> {
    let mut pixmap = draw::canvas(size)?;
    let bounds = draw::inset_bounds(size, MARGIN)?;
    draw::ellipse(
        &mut pixmap,
        bounds,
        state.fill(),
        Some((outline_color(), OUTLINE_WIDTH)),
    )?;
    Ok(pixmap)
}

/// Render and save the icon for `state` under its canonical name in `dir`.
pub fn write(dir: &Path, state: ConnectionState, size: u32) -> Result<PathBuf> {
    let path = dir.join(state.file_name());
    let pixmap = render(state, size)?;
    pixmap
        .save_png(&path)
        .with_context(|| format!("write {}", path.display()))?;
    info!("Created {}", path.display());
    Ok(path)
}
