//! Cairo-based rendering functions for shapes.

use super::color::{Color, SELECTION_DARK, SELECTION_LIGHT};
use super::point::Point;
use super::shape::{Shape, ShapeKind, arrow_half_height};

/// Fills the whole surface with `color`, replacing whatever was there.
///
/// A fully transparent color clears the surface, which is what PNG export
/// relies on to keep the background see-through.
pub fn render_background(ctx: &cairo::Context, color: Color) {
    let _ = ctx.save();
    ctx.set_operator(cairo::Operator::Source);
    set_source(ctx, color);
    let _ = ctx.paint();
    let _ = ctx.restore();
}

/// Renders all shapes in a collection to a Cairo context.
///
/// Shapes are drawn in the order they appear (first shape = bottom layer).
pub fn render_shapes(ctx: &cairo::Context, shapes: &[Shape]) {
    for shape in shapes {
        render_shape(ctx, shape);
    }
}

/// Renders a single shape, including its selection outline when selected.
pub fn render_shape(ctx: &cairo::Context, shape: &Shape) {
    let corner = shape.upper_left();
    let color = shape.color();
    let selected = shape.is_selected();
    ctx.set_line_width(1.0);
    match shape.kind() {
        ShapeKind::Circle { radius } => render_circle(ctx, corner, radius, color, selected),
        ShapeKind::Diamond { height, width } => {
            render_diamond(ctx, corner, height, width, color, selected)
        }
        ShapeKind::Arrow { length, shaft } => {
            render_arrow(ctx, corner, length, shaft, color, selected)
        }
    }
}

fn set_source(ctx: &cairo::Context, color: Color) {
    let (r, g, b, a) = color.to_unit_rgba();
    ctx.set_source_rgba(r, g, b, a);
}

/// Adds a closed polygon through `points` to the current path.
fn polygon_path(ctx: &cairo::Context, points: &[(f64, f64)]) {
    ctx.new_path();
    if let Some(&(x0, y0)) = points.first() {
        ctx.move_to(x0, y0);
        for &(x, y) in &points[1..] {
            ctx.line_to(x, y);
        }
        ctx.close_path();
    }
}

/// Adds an open polyline through `points` to the current path.
fn polyline_path(ctx: &cairo::Context, points: &[(f64, f64)]) {
    ctx.new_path();
    if let Some(&(x0, y0)) = points.first() {
        ctx.move_to(x0, y0);
        for &(x, y) in &points[1..] {
            ctx.line_to(x, y);
        }
    }
}

/// Render a filled disk, with a light and a dark ring when selected
fn render_circle(ctx: &cairo::Context, corner: Point, radius: i32, color: Color, selected: bool) {
    let r = radius as f64;
    let cx = corner.x as f64 + r;
    let cy = corner.y as f64 + r;

    set_source(ctx, color);
    ctx.new_path();
    ctx.arc(cx, cy, r, 0.0, 2.0 * std::f64::consts::PI);
    let _ = ctx.fill();

    if selected {
        set_source(ctx, SELECTION_LIGHT);
        ctx.new_path();
        ctx.arc(cx, cy, r, 0.0, 2.0 * std::f64::consts::PI);
        let _ = ctx.stroke();

        set_source(ctx, SELECTION_DARK);
        ctx.new_path();
        ctx.arc(cx, cy, r + 1.0, 0.0, 2.0 * std::f64::consts::PI);
        let _ = ctx.stroke();
    }
}

/// Render a filled diamond (apex, right, bottom, left)
fn render_diamond(
    ctx: &cairo::Context,
    corner: Point,
    height: i32,
    width: i32,
    color: Color,
    selected: bool,
) {
    let ax = corner.x as f64 + (width / 2) as f64;
    let ay = corner.y as f64;
    let half_w = (width / 2) as f64;
    let half_h = (height / 2) as f64;
    let h = height as f64;

    let outline = |grow: f64| {
        [
            (ax, ay - grow),
            (ax + half_w + grow, ay + half_h),
            (ax, ay + h + grow),
            (ax - half_w - grow, ay + half_h),
        ]
    };

    set_source(ctx, color);
    polygon_path(ctx, &outline(0.0));
    let _ = ctx.fill();

    if selected {
        set_source(ctx, SELECTION_LIGHT);
        polygon_path(ctx, &outline(1.0));
        let _ = ctx.stroke();

        set_source(ctx, SELECTION_DARK);
        polygon_path(ctx, &outline(2.0));
        let _ = ctx.stroke();
    }
}

/// Render a block arrow: shaft rectangle plus triangular head
fn render_arrow(
    ctx: &cairo::Context,
    corner: Point,
    length: i32,
    shaft: i32,
    color: Color,
    selected: bool,
) {
    // Shapes may sit at the edge of the i32 range.
    let half = arrow_half_height(shaft) as i64;
    let (left, top) = (corner.x as i64, corner.y as i64);
    let (length, shaft) = (length as i64, shaft as i64);
    let tip_x = left + length;
    let tip_y = top + half;
    let base_x = tip_x - 2 * shaft;

    set_source(ctx, color);
    ctx.new_path();
    ctx.rectangle(
        left as f64,
        (top + shaft) as f64,
        (length - 2 * shaft) as f64,
        shaft as f64,
    );
    let _ = ctx.fill();

    polygon_path(
        ctx,
        &[
            (tip_x as f64, tip_y as f64),
            (base_x as f64, (tip_y - half) as f64),
            (base_x as f64, (tip_y + half) as f64),
        ],
    );
    let _ = ctx.fill();

    if selected {
        // Silhouette: tail top, head notch, head top, tip, head bottom,
        // head notch, tail bottom, back to tail top.
        let upper_shaft = top + shaft;
        let lower_shaft = tip_y + shaft / 2;
        let silhouette = |grow: i64| -> [(f64, f64); 8] {
            let points = [
                (left - grow, upper_shaft - grow),
                (base_x - grow, tip_y - shaft / 2 - grow),
                (base_x - grow, tip_y - half - grow),
                (tip_x + grow, tip_y),
                (base_x - grow, tip_y + half + grow),
                (base_x - grow, lower_shaft + grow),
                (left - grow, lower_shaft + grow),
                (left - grow, upper_shaft - grow),
            ];
            points.map(|(x, y)| (x as f64, y as f64))
        };

        set_source(ctx, SELECTION_LIGHT);
        polyline_path(ctx, &silhouette(0));
        let _ = ctx.stroke();

        set_source(ctx, SELECTION_DARK);
        polyline_path(ctx, &silhouette(1));
        let _ = ctx.stroke();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::{BLUE, RED, TRANSPARENT, WHITE};

    fn surface(width: i32, height: i32) -> cairo::ImageSurface {
        cairo::ImageSurface::create(cairo::Format::ARgb32, width, height).unwrap()
    }

    /// Reads the (premultiplied) BGRA pixel at `(x, y)`.
    fn pixel(surface: &mut cairo::ImageSurface, x: usize, y: usize) -> [u8; 4] {
        surface.flush();
        let stride = surface.stride() as usize;
        let data = surface.data().unwrap();
        let offset = y * stride + x * 4;
        [data[offset], data[offset + 1], data[offset + 2], data[offset + 3]]
    }

    #[test]
    fn filled_circle_paints_its_center_only() {
        let mut target = surface(100, 100);
        {
            let ctx = cairo::Context::new(&target).unwrap();
            let shape = Shape::circle(Point::new(50, 50), 10, RED).unwrap();
            render_shape(&ctx, &shape);
        }
        assert_eq!(pixel(&mut target, 50, 50), [0, 0, 255, 255]);
        assert_eq!(pixel(&mut target, 5, 5), [0, 0, 0, 0]);
    }

    #[test]
    fn later_shapes_paint_over_earlier_ones() {
        let mut target = surface(100, 100);
        {
            let ctx = cairo::Context::new(&target).unwrap();
            let shapes = vec![
                Shape::circle(Point::new(50, 50), 20, RED).unwrap(),
                Shape::circle(Point::new(50, 50), 5, BLUE).unwrap(),
            ];
            render_shapes(&ctx, &shapes);
        }
        assert_eq!(pixel(&mut target, 50, 50), [255, 0, 0, 255]);
        assert_eq!(pixel(&mut target, 50, 35), [0, 0, 255, 255]);
    }

    #[test]
    fn selection_outline_draws_outside_silhouette() {
        let mut plain = surface(120, 120);
        let mut outlined = surface(120, 120);
        let mut shape = Shape::diamond(Point::new(60, 10), 60, 60, RED).unwrap();
        {
            let ctx = cairo::Context::new(&plain).unwrap();
            render_shape(&ctx, &shape);
        }
        shape.set_selected(true);
        {
            let ctx = cairo::Context::new(&outlined).unwrap();
            render_shape(&ctx, &shape);
        }
        // Just above the apex only the outline reaches.
        assert_eq!(pixel(&mut plain, 60, 8)[3], 0);
        assert_ne!(pixel(&mut outlined, 60, 8)[3], 0);
    }

    #[test]
    fn arrow_fills_shaft_and_head() {
        let mut target = surface(120, 100);
        {
            let ctx = cairo::Context::new(&target).unwrap();
            let shape = Shape::arrow(Point::new(100, 50), 80, 10, BLUE).unwrap();
            render_shape(&ctx, &shape);
        }
        assert_eq!(pixel(&mut target, 40, 50), [255, 0, 0, 255]);
        assert_eq!(pixel(&mut target, 88, 50), [255, 0, 0, 255]);
        assert_eq!(pixel(&mut target, 40, 30), [0, 0, 0, 0]);
    }

    #[test]
    fn background_replaces_existing_pixels() {
        let mut target = surface(10, 10);
        {
            let ctx = cairo::Context::new(&target).unwrap();
            render_background(&ctx, WHITE);
        }
        assert_eq!(pixel(&mut target, 3, 3), [255, 255, 255, 255]);
        {
            let ctx = cairo::Context::new(&target).unwrap();
            render_background(&ctx, TRANSPARENT);
        }
        assert_eq!(pixel(&mut target, 3, 3), [0, 0, 0, 0]);
    }
}
