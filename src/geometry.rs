use crate::point2d::Point2Df;
use crate::point3d::{Point3Df, cross3};

/// Below this, twice the signed area counts as zero. Screen vertices sit on whole
/// pixels, so any real triangle has a doubled area of at least 1.
pub const DEGENERATE_EPSILON: f32 = 1e-2;

/// Returned for degenerate triangles; the negative first weight fails [`is_inside`].
pub const DEGENERATE_WEIGHTS: Point3Df = Point3Df::new(-1.0, 1.0, 1.0);

/// Barycentric weights of `p` relative to the screen-space triangle `a`, `b`, `c`.
///
/// Only x and y of the vertices are used. With `(u, v, area2)` the cross product
/// of `(AB.x, AC.x, PA.x)` and `(AB.y, AC.y, PA.y)`, the result is
/// `(1 - w1 - w2, u / area2, v / area2)`: `w0` weights `a`, `w1` weights `b`
/// and `w2` weights `c`. The weights sum to 1 for any point in the plane.
/// For collinear vertices [`DEGENERATE_WEIGHTS`] is returned instead.
#[inline(always)]
pub fn barycentric(a: Point3Df, b: Point3Df, c: Point3Df, p: Point2Df) -> Point3Df {
    let ab = b.xy() - a.xy();
    let ac = c.xy() - a.xy();
    let pa = a.xy() - p;

    // (u, v, 1) is orthogonal to both rows, i.e. A + u*AB + v*AC = P once scaled
    let v1 = Point3Df::new(ab.x, ac.x, pa.x);
    let v2 = Point3Df::new(ab.y, ac.y, pa.y);
    let cross = cross3(v1, v2);

    if cross.z.abs() < DEGENERATE_EPSILON {
        return DEGENERATE_WEIGHTS;
    }
    // w0 = 1 - w1 - w2, taken on the numerators so that on-edge points of
    // pixel-aligned triangles come out as an exact zero instead of -1e-8
    let w0 = (cross.z - cross.x - cross.y) / cross.z;
    Point3Df::new(w0, cross.x / cross.z, cross.y / cross.z)
}

/// Inclusive inside test: points on an edge count as inside.
#[inline(always)]
pub fn is_inside(weights: Point3Df) -> bool {
    !(weights.x < 0.0 || weights.y < 0.0 || weights.z < 0.0)
}

/// Orthographic world-to-screen mapping of the `[-1, 1]` cube onto the image.
///
/// x and y are rounded to whole pixels; z passes through unscaled as depth.
#[inline(always)]
pub fn vertex_to_screen(vertex: Point3Df, width: u32, height: u32) -> Point3Df {
    let screen_x = ((vertex.x + 1.0) * width as f32 * 0.5).round();
    let screen_y = ((vertex.y + 1.0) * height as f32 * 0.5).round();
    Point3Df { x: screen_x, y: screen_y, z: vertex.z }
}
