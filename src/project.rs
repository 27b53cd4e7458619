use crate::core::{Canvas, Point};

/// Map a geographic coordinate onto the canvas with an equirectangular
/// transform. Decorative, not conformal: longitude scales linearly into `x`,
/// latitude linearly into `y` (north up).
///
/// Total over all inputs; out-of-range coordinates land outside the canvas
/// instead of failing.
pub fn project(lat: f64, lon: f64, canvas: Canvas) -> Point {
    let x = (lon + 180.0) / 360.0 * f64::from(canvas.width);
    let y = (90.0 - lat) / 180.0 * f64::from(canvas.height);
    Point::new(x, y)
}
