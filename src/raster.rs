use crate::color::Color;
use crate::depth::DepthBuffer;
use crate::geometry::{barycentric, is_inside};
use crate::point2d::Point2Df;
use crate::point3d::{Point3Df, dot3};
use crate::rectangle::Rect;
use crate::screen::ScreenSpace;
use crate::triangle::Triangle3D;

/// Fills a screen-space triangle into `screen`, depth-tested against `depth`.
///
/// Pixel `(x, y)` is sampled at the lattice point `(x, y)`, and every pixel whose
/// barycentric weights are all non-negative is covered, so pixels on an edge
/// shared by two triangles are visited by both. Depth and texture coordinates
/// are interpolated linearly with the same weights. A pixel is written only if
/// its depth is strictly greater than the stored one, so larger z is closer and
/// the first triangle wins an exact tie. `sample` maps the interpolated texture
/// coordinate to the written color.
///
/// Only pixels inside the clamped bounding box are visited, which keeps every
/// write within the image. Degenerate triangles write nothing.
///
/// Returns the number of pixels written.
pub fn fill_triangle<F>(
    tri: &Triangle3D,
    uvs: &[Point2Df; 3],
    depth: &mut DepthBuffer,
    screen: &mut ScreenSpace,
    sample: F,
) -> usize
where
    F: Fn(Point2Df) -> Color,
{
    debug_assert!(
        depth.width == screen.width && depth.height == screen.height,
        "depth buffer {}x{} does not match screen {}x{}",
        depth.width,
        depth.height,
        screen.width,
        screen.height
    );
    let Some(bb) = Rect::bounding(tri, screen.width, screen.height) else {
        return 0;
    };

    let depths = Point3Df::new(tri.a.z, tri.b.z, tri.c.z);
    let mut written = 0;
    for y in bb.min_y..=bb.max_y {
        for x in bb.min_x..=bb.max_x {
            let p = Point2Df { x: x as f32, y: y as f32 };
            let weights = barycentric(tri.a, tri.b, tri.c, p);
            if !is_inside(weights) {
                continue;
            }

            let z = dot3(depths, weights);
            let texture_coord = Point2Df {
                x: dot3(Point3Df::new(uvs[0].x, uvs[1].x, uvs[2].x), weights),
                y: dot3(Point3Df::new(uvs[0].y, uvs[1].y, uvs[2].y), weights),
            };

            // bounding box is clamped, so the casts are in range
            let (px, py) = (x as u32, y as u32);
            if depth.test_and_set(px, py, z) {
                screen.set_pixel(px, py, sample(texture_coord));
                written += 1;
            }
        }
    }
    written
}
