//! Drawing primitives over tiny-skia.
//!
//! Everything the icon generators need: a transparent square canvas, a
//! filled ellipse with an optional outline, and a stroked line segment.
//! Rasterization is unantialiased, so a given set of inputs always produces
//! the same pixel buffer.

use anyhow::{bail, ensure, Result};
use tiny_skia::{ColorU8, FillRule, Paint, PathBuilder, Pixmap, Rect, Stroke, Transform};

/// Create a square, fully transparent canvas.
pub fn canvas(size: u32) -> Result<Pixmap> {
    ensure!(size > 0, "Canvas size must be positive");
    match Pixmap::new(size, size) {
        Some(pixmap) => Ok(pixmap),
        None => bail!("Cannot allocate a {}x{} canvas", size, size),
    }
}

/// Bounding rect inset from every edge of a `size` canvas by `margin`.
pub fn inset_bounds(size: u32, margin: f32) -> Result<Rect> {
    let edge = size as f32;
    ensure!(
        margin >= 0.0 && margin < edge / 2.0,
        "Margin {} leaves no drawable area on a {}px canvas",
        margin,
        size
    );
    match Rect::from_ltrb(margin, margin, edge - margin, edge - margin) {
        Some(rect) => Ok(rect),
        None => bail!("Invalid bounds for margin {} on a {}px canvas", margin, size),
    }
}

/// Fill an ellipse inscribed in `bounds`, optionally stroking its outline.
///
/// The outline is stroked just inside `bounds` (inset by half the stroke
/// width), so the finished shape never extends past the bounding rect.
pub fn ellipse(
    pixmap: &mut Pixmap,
    bounds: Rect,
    fill: ColorU8,
    outline: Option<(ColorU8, f32)>,
) -> Result<()> {
    let mut pb = PathBuilder::new();
    pb.push_oval(bounds);
    let path = match pb.finish() {
        Some(path) => path,
        None => bail!("Degenerate ellipse bounds: {:?}", bounds),
    };
    pixmap.fill_path(
        &path,
        &solid(fill),
        FillRule::Winding,
        Transform::identity(),
        None,
    );

    if let Some((color, width)) = outline {
        ensure!(width > 0.0, "Outline width must be positive");
        let inset = match Rect::from_ltrb(
            bounds.left() + width / 2.0,
            bounds.top() + width / 2.0,
            bounds.right() - width / 2.0,
            bounds.bottom() - width / 2.0,
        ) {
            Some(rect) => rect,
            None => bail!("Outline width {} too thick for bounds {:?}", width, bounds),
        };
        let mut pb = PathBuilder::new();
        pb.push_oval(inset);
        let ring = match pb.finish() {
            Some(ring) => ring,
            None => bail!("Degenerate outline bounds: {:?}", inset),
        };
        let stroke = Stroke {
            width,
            ..Stroke::default()
        };
        pixmap.stroke_path(&ring, &solid(color), &stroke, Transform::identity(), None);
    }

    Ok(())
}

/// Stroke a straight segment from `from` to `to` with butt caps.
pub fn line(
    pixmap: &mut Pixmap,
    from: (f32, f32),
    to: (f32, f32),
    color: ColorU8,
    width: f32,
) -> Result<()> {
    ensure!(width > 0.0, "Line width must be positive");
    let mut pb = PathBuilder::new();
    pb.move_to(from.0, from.1);
    pb.line_to(to.0, to.1);
    let path = match pb.finish() {
        Some(path) => path,
        None => bail!("Empty line path from {:?} to {:?}", from, to),
    };
    let stroke = Stroke {
        width,
        ..Stroke::default()
    };
    pixmap.stroke_path(&path, &solid(color), &stroke, Transform::identity(), None);
    Ok(())
}

fn solid(color: ColorU8) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color_rgba8(color.red(), color.green(), color.blue(), color.alpha());
    paint
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canvas_starts_transparent() {
        let pixmap = canvas(8).unwrap();
        assert!(pixmap.data().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_canvas_zero_size_rejected() {
        assert!(canvas(0).is_err());
    }

    #[test]
    fn test_bounds_margin_too_large() {
        assert!(inset_bounds(32, 16.0).is_err());
        assert!(inset_bounds(32, 20.0).is_err());
    }

    #[test]
    fn test_bounds_dimensions() {
        let rect = inset_bounds(32, 4.0).unwrap();
        assert_eq!(rect.left(), 4.0);
        assert_eq!(rect.right(), 28.0);
        assert_eq!(rect.width(), 24.0);
    }

    #[test]
    fn test_ellipse_fills_center() {
        let mut pixmap = canvas(16).unwrap();
        let bounds = inset_bounds(16, 2.0).unwrap();
        ellipse(&mut pixmap, bounds, ColorU8::from_rgba(255, 0, 0, 255), None).unwrap();

        let center = pixmap.pixel(8, 8).unwrap().demultiply();
        assert_eq!(center.red(), 255);
        assert_eq!(center.alpha(), 255);
    }

    #[test]
    fn test_ellipse_outline_too_thick_rejected() {
        let mut pixmap = canvas(16).unwrap();
        let bounds = inset_bounds(16, 2.0).unwrap();
        let result = ellipse(
            &mut pixmap,
            bounds,
            ColorU8::from_rgba(255, 0, 0, 255),
            Some((ColorU8::from_rgba(50, 50, 50, 255), 20.0)),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_line_covers_midpoint() {
        let mut pixmap = canvas(16).unwrap();
        line(
            &mut pixmap,
            (0.0, 8.0),
            (16.0, 8.0),
            ColorU8::from_rgba(255, 255, 255, 255),
            4.0,
        )
        .unwrap();

        let mid = pixmap.pixel(8, 8).unwrap();
        assert_eq!(mid.alpha(), 255);
    }

    #[test]
    fn test_line_zero_width_rejected() {
        let mut pixmap = canvas(16).unwrap();
        let result = line(
            &mut pixmap,
            (0.0, 8.0),
            (16.0, 8.0),
            ColorU8::from_rgba(255, 255, 255, 255),
            0.0,
        );
        assert!(result.is_err());
    }
}
