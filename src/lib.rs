//! Orthographic software rasterizer.
//!
//! Meshes are projected onto the image, culled against a single directional
//! light and filled triangle by triangle with barycentric coverage, a per-pixel
//! depth test and diffuse texture lookup.

pub mod color;
pub mod depth;
pub mod geometry;
pub mod line;
pub mod mesh;
pub mod obj;
pub mod point2d;
pub mod point3d;
pub mod raster;
pub mod rectangle;
pub mod render;
pub mod screen;
pub mod texture;
pub mod triangle;

pub use color::Color;
pub use depth::DepthBuffer;
pub use mesh::Mesh;
pub use obj::Model;
pub use point2d::{Axis, Point2D, Point2Df, Point2Di};
pub use point3d::{Point3D, Point3Df, Point3Di};
pub use raster::fill_triangle;
pub use render::{RenderConfig, RenderStats, Renderer};
pub use screen::ScreenSpace;
pub use texture::Texture;
pub use triangle::Triangle3D;
