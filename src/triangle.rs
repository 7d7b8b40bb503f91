use crate::point2d::Point2Di;
use crate::point3d::Point3Df;

/// Screen-space triangle: x/y in pixels, z kept as depth.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Triangle3D {
    pub a: Point3Df,
    pub b: Point3Df,
    pub c: Point3Df,
}

impl Triangle3D {
    pub fn new(a: Point3Df, b: Point3Df, c: Point3Df) -> Self {
        Triangle3D { a, b, c }
    }

    /// Flat triangle at a single depth from integer pixel positions.
    pub fn from_pixels(pts: [Point2Di; 3], depth: f32) -> Self {
        let lift = |p: Point2Di| {
            let q = p.to_f32();
            Point3Df::new(q.x, q.y, depth)
        };
        Triangle3D { a: lift(pts[0]), b: lift(pts[1]), c: lift(pts[2]) }
    }

    pub fn vertices(&self) -> [Point3Df; 3] {
        [self.a, self.b, self.c]
    }
}
