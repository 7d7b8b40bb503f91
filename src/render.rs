use log::{debug, info, trace};

use crate::color::Color;
use crate::depth::DepthBuffer;
use crate::geometry::vertex_to_screen;
use crate::line::draw_triangle_outline;
use crate::mesh::Mesh;
use crate::point2d::{Point2Df, Point2Di};
use crate::point3d::{Point3Df, cross3, dot3, normalize};
use crate::raster::fill_triangle;
use crate::screen::ScreenSpace;
use crate::triangle::Triangle3D;

pub const DEFAULT_WIDTH: u32 = 800;
pub const DEFAULT_HEIGHT: u32 = 800;
pub const DEFAULT_LIGHT_DIR: Point3Df = Point3Df::new(0.0, 0.0, -1.0);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderConfig {
    pub width: u32,
    pub height: u32,
    /// Direction the light travels; faces lit by it are kept.
    pub light_dir: Point3Df,
    pub clear_color: Color,
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            light_dir: DEFAULT_LIGHT_DIR,
            clear_color: Color::BLACK,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderStats {
    pub faces: usize,
    /// Faces turned away from (or edge-on to) the light.
    pub culled: usize,
    /// Faces whose world-space normal has zero length.
    pub degenerate: usize,
    pub rasterized: usize,
    pub pixels_written: usize,
}

/// One frame's worth of render state: the color target and its depth buffer.
/// The buffers are sized once from the config, which is fixed afterwards.
pub struct Renderer {
    config: RenderConfig,
    depth: DepthBuffer,
    screen: ScreenSpace,
}

impl Renderer {
    pub fn new(config: RenderConfig) -> Self {
        let mut renderer = Renderer {
            config,
            depth: DepthBuffer::new(config.width, config.height),
            screen: ScreenSpace::new(config.width, config.height),
        };
        renderer.begin_frame();
        renderer
    }

    /// Clears the color target and resets depth to negative infinity.
    pub fn begin_frame(&mut self) {
        self.screen.clear(self.config.clear_color);
        self.depth.reset();
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    pub fn screen(&self) -> &ScreenSpace {
        &self.screen
    }

    pub fn depth(&self) -> &DepthBuffer {
        &self.depth
    }

    /// Hands the finished image out, consuming the session.
    pub fn into_screen(self) -> ScreenSpace {
        self.screen
    }

    /// Projects every face orthographically, culls faces the light does not hit
    /// and fills the rest with the diffuse texture scaled by the light intensity.
    ///
    /// Buffers are not reset, so several meshes can be drawn into one frame.
    pub fn render<M: Mesh>(&mut self, mesh: &M) -> RenderStats {
        let mut stats = RenderStats { faces: mesh.face_count(), ..RenderStats::default() };
        let (width, height) = (self.screen.width, self.screen.height);

        for i in 0..mesh.face_count() {
            let world = mesh.face(i).map(|v| mesh.vertex(v));
            let screen_coords = world.map(|v| vertex_to_screen(v, width, height));

            // (w2 - w0) x (w1 - w0): counter-clockwise faces seen from +z point at -z
            let Some(normal) = normalize(cross3(world[2] - world[0], world[1] - world[0])) else {
                trace!("face {i} has no area, skipped");
                stats.degenerate += 1;
                continue;
            };
            let intensity = dot3(normal, self.config.light_dir);
            if !(intensity > 0.0) {
                stats.culled += 1;
                continue;
            }

            let uvs: [Point2Df; 3] = [0, 1, 2].map(|corner| mesh.texture_coord(i, corner));
            let tri = Triangle3D::new(screen_coords[0], screen_coords[1], screen_coords[2]);
            stats.pixels_written += fill_triangle(&tri, &uvs, &mut self.depth, &mut self.screen, |uv| {
                mesh.sample_diffuse(uv).scale(intensity)
            });
            stats.rasterized += 1;
        }

        info!(
            "rendered {} faces: {} rasterized, {} culled, {} degenerate, {} pixels written",
            stats.faces, stats.rasterized, stats.culled, stats.degenerate, stats.pixels_written
        );
        stats
    }

    /// Outlines every projected face. No culling and no depth test.
    pub fn render_wireframe<M: Mesh>(&mut self, mesh: &M, color: Color) {
        let (width, height) = (self.screen.width, self.screen.height);
        for i in 0..mesh.face_count() {
            let pts = mesh.face(i).map(|v| {
                let s = vertex_to_screen(mesh.vertex(v), width, height);
                Point2Di::new(s.x as i32, s.y as i32)
            });
            draw_triangle_outline(&mut self.screen, pts, color);
        }
        debug!("outlined {} faces", mesh.face_count());
    }

    /// Fills one screen-space triangle with a single color, depth-tested like any face.
    pub fn render_flat(&mut self, tri: &Triangle3D, color: Color) -> usize {
        fill_triangle(tri, &[Point2Df::default(); 3], &mut self.depth, &mut self.screen, |_| color)
    }
}

/// The three flat-colored test triangles: red, white and green.
pub fn demo_triangles() -> [(Triangle3D, Color); 3] {
    let tri = |pts: [(i32, i32); 3]| Triangle3D::from_pixels(pts.map(|(x, y)| Point2Di::new(x, y)), 0.0);
    [
        (tri([(10, 70), (50, 160), (70, 80)]), Color::RED),
        (tri([(180, 50), (150, 1), (70, 180)]), Color::WHITE),
        (tri([(180, 150), (120, 160), (130, 180)]), Color::GREEN),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Quad {
        vertices: Vec<Point3Df>,
        faces: Vec<[usize; 3]>,
        color: Color,
    }

    impl Mesh for Quad {
        fn face_count(&self) -> usize {
            self.faces.len()
        }
        fn face(&self, i: usize) -> [usize; 3] {
            self.faces[i]
        }
        fn vertex(&self, i: usize) -> Point3Df {
            self.vertices[i]
        }
        fn texture_coord(&self, _face: usize, _corner: usize) -> Point2Df {
            Point2Df::default()
        }
        fn sample_diffuse(&self, _texel: Point2Df) -> Color {
            self.color
        }
    }

    fn small(width: u32, height: u32) -> Renderer {
        Renderer::new(RenderConfig { width, height, ..RenderConfig::default() })
    }

    #[test]
    fn default_config() {
        let config = RenderConfig::default();
        assert_eq!((config.width, config.height), (800, 800));
        assert_eq!(config.light_dir, Point3Df::new(0.0, 0.0, -1.0));
    }

    #[test]
    fn front_facing_quad_is_fully_lit() {
        let quad = Quad {
            vertices: vec![
                Point3Df::new(-0.5, -0.5, 0.0),
                Point3Df::new(0.5, -0.5, 0.0),
                Point3Df::new(0.5, 0.5, 0.0),
                Point3Df::new(-0.5, 0.5, 0.0),
            ],
            faces: vec![[0, 1, 2], [0, 2, 3]],
            color: Color::rgb(200, 100, 50),
        };
        let mut r = small(20, 20);
        let stats = r.render(&quad);
        assert_eq!(stats.rasterized, 2);
        assert_eq!(stats.culled, 0);
        // screen square [5, 15]^2, diagonal counted once thanks to the depth tie rule
        assert_eq!(stats.pixels_written, 121);
        assert_eq!(r.screen().get_pixel(10, 10), Some(Color::rgb(200, 100, 50)));
        assert_eq!(r.screen().get_pixel(4, 10), Some(Color::BLACK));
        assert_eq!(r.depth().get(7, 12), Some(0.0));
    }

    #[test]
    fn intensity_scales_the_diffuse_color() {
        // tilted 60 degrees about x, so the normal's z is -0.5
        let s = 3f32.sqrt() / 2.0;
        let quad = Quad {
            vertices: vec![
                Point3Df::new(-0.5, -0.5 * 0.5, -0.5 * s),
                Point3Df::new(0.5, -0.5 * 0.5, -0.5 * s),
                Point3Df::new(0.0, 0.5 * 0.5, 0.5 * s),
            ],
            faces: vec![[0, 1, 2]],
            color: Color::rgb(200, 200, 200),
        };
        let mut r = small(40, 40);
        r.render(&quad);
        assert_eq!(r.screen().get_pixel(20, 20), Some(Color::rgb(100, 100, 100)));
    }

    #[test]
    fn back_faces_and_slivers_are_skipped() {
        let mesh = Quad {
            vertices: vec![
                Point3Df::new(-0.5, -0.5, 0.0),
                Point3Df::new(0.5, -0.5, 0.0),
                Point3Df::new(0.0, 0.5, 0.0),
                Point3Df::new(0.0, 0.0, 0.0),
                Point3Df::new(0.0, 0.0, 1.0),
                Point3Df::new(0.5, 0.0, 0.0),
            ],
            // clockwise, then a face standing edge-on in the y = 0 plane, then a single point
            faces: vec![[0, 2, 1], [3, 4, 5], [3, 3, 3]],
            color: Color::WHITE,
        };
        let mut r = small(30, 30);
        let stats = r.render(&mesh);
        assert_eq!(stats, RenderStats { faces: 3, culled: 2, degenerate: 1, rasterized: 0, pixels_written: 0 });
        assert!(r.depth().as_slice().iter().all(|&z| z == f32::NEG_INFINITY));
    }

    #[test]
    fn begin_frame_resets_buffers() {
        let mut r = small(200, 200);
        for (tri, color) in demo_triangles() {
            assert!(r.render_flat(&tri, color) > 0);
        }
        assert_eq!(r.screen().get_pixel(40, 100), Some(Color::RED));
        r.begin_frame();
        assert_eq!(r.screen().get_pixel(40, 100), Some(Color::BLACK));
        assert!(r.depth().as_slice().iter().all(|&z| z == f32::NEG_INFINITY));
    }

    #[test]
    fn projection_spans_the_whole_buffer() {
        let mesh = Quad {
            vertices: vec![Point3Df::new(-1.0, -1.0, 0.0), Point3Df::new(1.0, -1.0, 0.0), Point3Df::new(1.0, 1.0, 0.0)],
            faces: vec![[0, 1, 2]],
            color: Color::WHITE,
        };
        let mut r = small(20, 20);
        assert_eq!((r.config().width, r.config().height), (r.screen().width, r.screen().height));
        let stats = r.render(&mesh);
        assert_eq!(stats.rasterized, 1);
        // lower-right half including the diagonal: 20 + 19 + ... + 1
        assert_eq!(stats.pixels_written, 210);
        assert_eq!(r.screen().get_pixel(19, 0), Some(Color::WHITE));
        assert_eq!(r.screen().get_pixel(19, 19), Some(Color::WHITE));
        assert_eq!(r.screen().get_pixel(0, 19), Some(Color::BLACK));
    }

    #[test]
    fn huge_world_triangle_is_not_degenerate() {
        let far = 1e10;
        let mesh = Quad {
            vertices: vec![Point3Df::new(-far, -far, 0.0), Point3Df::new(far, -far, 0.0), Point3Df::new(far, far, 0.0)],
            faces: vec![[0, 1, 2]],
            color: Color::WHITE,
        };
        let mut r = small(20, 20);
        let stats = r.render(&mesh);
        assert_eq!((stats.degenerate, stats.culled, stats.rasterized), (0, 0, 1));
    }

    #[test]
    fn wireframe_with_far_vertices_stays_on_screen() {
        let far = 1e10;
        let mesh = Quad {
            vertices: vec![Point3Df::new(-far, 0.0, 0.0), Point3Df::new(far, 0.0, 0.0), Point3Df::new(0.0, far, 0.0)],
            faces: vec![[0, 1, 2]],
            color: Color::WHITE,
        };
        let mut r = small(20, 20);
        r.render_wireframe(&mesh, Color::GREEN);
        // the y = 0 edge projects onto row 10
        for x in 0..20 {
            assert_eq!(r.screen().get_pixel(x, 10), Some(Color::GREEN));
        }
        assert_eq!(r.screen().get_pixel(3, 3), Some(Color::BLACK));
    }

    #[test]
    fn wireframe_draws_projected_edges() {
        let mesh = Quad {
            vertices: vec![Point3Df::new(-0.5, -0.5, 0.0), Point3Df::new(0.5, -0.5, 0.0), Point3Df::new(0.0, 0.5, 0.0)],
            faces: vec![[0, 2, 1]],
            color: Color::WHITE,
        };
        let mut r = small(20, 20);
        r.render_wireframe(&mesh, Color::GREEN);
        // drawn even though the face points away from the light
        assert_eq!(r.screen().get_pixel(5, 5), Some(Color::GREEN));
        assert_eq!(r.screen().get_pixel(10, 15), Some(Color::GREEN));
        assert_eq!(r.screen().get_pixel(10, 8), Some(Color::BLACK));
    }
}
