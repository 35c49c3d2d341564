//! Silhouette drawing primitives
//!
//! Builds closed polygon paths from host-supplied hulls and strokes or
//! fills them onto a pixel buffer.

use tiny_skia::{FillRule, Paint, Path, PathBuilder, PixmapMut, Stroke, Transform};

use hilite_core::Hull;

use crate::utils::color_from_rgba;

/// Closed path for a hull polygon. Hulls with fewer than three vertices
/// have no area and produce no path.
pub fn hull_path(hull: &Hull) -> Option<Path> {
    let (&(x0, y0), rest) = hull.points.split_first()?;
    if rest.len() < 2 {
        return None;
    }

    let mut pb = PathBuilder::new();
    pb.move_to(x0, y0);
    for &(x, y) in rest {
        pb.line_to(x, y);
    }
    pb.close();
    pb.finish()
}

/// Stroke the hull outline.
pub fn stroke_hull(canvas: &mut PixmapMut, hull: &Hull, color: [u8; 4], stroke_width: f32) {
    let Some(path) = hull_path(hull) else {
        return;
    };
    let stroke = Stroke {
        width: stroke_width,
        ..Stroke::default()
    };
    canvas.stroke_path(
        &path,
        &paint_for(color),
        &stroke,
        Transform::identity(),
        None,
    );
}

/// Fill the hull interior.
pub fn fill_hull(canvas: &mut PixmapMut, hull: &Hull, color: [u8; 4]) {
    let Some(path) = hull_path(hull) else {
        return;
    };
    canvas.fill_path(
        &path,
        &paint_for(color),
        FillRule::Winding,
        Transform::identity(),
        None,
    );
}

fn paint_for(color: [u8; 4]) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color(color_from_rgba(color));
    paint.anti_alias = true;
    paint
}

#[cfg(test)]
mod tests {
    use tiny_skia::Pixmap;

    use super::*;

    fn triangle() -> Hull {
        Hull::new(vec![(10.0, 10.0), (90.0, 10.0), (50.0, 90.0)])
    }

    fn painted_pixels(pixmap: &Pixmap) -> usize {
        pixmap.pixels().iter().filter(|p| p.alpha() > 0).count()
    }

    #[test]
    fn test_degenerate_hulls_have_no_path() {
        assert!(hull_path(&Hull::default()).is_none());
        assert!(hull_path(&Hull::new(vec![(1.0, 1.0)])).is_none());
        assert!(hull_path(&Hull::new(vec![(1.0, 1.0), (2.0, 2.0)])).is_none());
        assert!(hull_path(&triangle()).is_some());
    }

    #[test]
    fn test_fill_paints_interior() {
        let mut pixmap = Pixmap::new(100, 100).unwrap();
        fill_hull(&mut pixmap.as_mut(), &triangle(), [255, 0, 0, 255]);

        // Centroid is well inside the triangle
        let pixel = pixmap.pixel(50, 35).unwrap();
        assert_eq!(pixel.red(), 255);
        assert_eq!(pixel.green(), 0);
        assert_eq!(pixel.alpha(), 255);
    }

    #[test]
    fn test_stroke_paints_edge_not_interior() {
        let mut pixmap = Pixmap::new(100, 100).unwrap();
        stroke_hull(&mut pixmap.as_mut(), &triangle(), [0, 255, 0, 255], 2.0);

        assert!(painted_pixels(&pixmap) > 0);
        // Centroid stays untouched by a 2px outline
        assert!(pixmap.pixel(50, 35).unwrap().alpha() == 0);
    }

    #[test]
    fn test_degenerate_hull_draws_nothing() {
        let mut pixmap = Pixmap::new(100, 100).unwrap();
        let line = Hull::new(vec![(0.0, 0.0), (99.0, 99.0)]);
        stroke_hull(&mut pixmap.as_mut(), &line, [255, 255, 255, 255], 3.0);
        fill_hull(&mut pixmap.as_mut(), &line, [255, 255, 255, 255]);

        assert_eq!(painted_pixels(&pixmap), 0);
    }
}
