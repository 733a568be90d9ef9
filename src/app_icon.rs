use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tiny_skia::{ColorU8, Pixmap};
use tracing::info;

use crate::draw;

/// Default application icon edge length in pixels.
pub const SIZE: u32 = 256;

/// Where the Debian packaging tree expects the icon, relative to the
/// repository root.
pub const PACKAGING_PATH: &str = "debian/usr/share/icons/hicolor/256x256/apps/preyvpn.png";

/// Render the application icon: a two-tone green disc with a white "V".
///
/// All geometry derives from `size` by integer division, so any size
/// renders with the same proportions.
pub fn render(size: u32) -> Result<Pixmap> {
    let mut pixmap = draw::canvas(size)?;

    // Outer disc with a darker rim
    let margin = (size / 8) as f32;
    draw::ellipse(
        &mut pixmap,
        draw::inset_bounds(size, margin)?,
        ColorU8::from_rgba(0, 150, 0, 255),
        Some((ColorU8::from_rgba(0, 100, 0, 255), 4.0)),
    )?;

    // Lighter inner disc, 20px further in
    draw::ellipse(
        &mut pixmap,
        draw::inset_bounds(size, margin + 20.0)?,
        ColorU8::from_rgba(0, 200, 0, 255),
        None,
    )?;

    // White "V": two strokes meeting below the canvas center
    let center = (size / 2) as f32;
    let v_half = (size / 3 / 2) as f32;
    let v_third = (size / 3 / 3) as f32;
    let stroke_width = (size / 20) as f32;
    let white = ColorU8::from_rgba(255, 255, 255, 255);
    draw::line(
        &mut pixmap,
        (center - v_half, center - v_third),
        (center, center + v_third),
        white,
        stroke_width,
    )?;
    draw::line(
        &mut pixmap,
        (center, center + v_third),
        (center + v_half, center - v_third),
        white,
        stroke_width,
    )?;

    Ok(pixmap)
}

/// Render and save the application icon, creating missing parent directories.
pub fn write(path: &Path, size: u32) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("create {}", parent.display()))?;
        }
    }
    let pixmap = render(size)?;
    pixmap
        .save_png(path)
        .with_context(|| format!("write {}", path.display()))?;
    info!("Created {} ({}x{})", path.display(), size, size);
    Ok(())
}
