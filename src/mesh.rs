use crate::color::Color;
use crate::point2d::Point2Df;
use crate::point3d::Point3Df;

/// Triangle mesh with a diffuse texture, as consumed by the render loop.
pub trait Mesh {
    fn face_count(&self) -> usize;

    /// Vertex indices of face `i`.
    fn face(&self, i: usize) -> [usize; 3];

    /// World position of vertex `i`.
    fn vertex(&self, i: usize) -> Point3Df;

    /// Texture coordinate of one corner of a face, in texture pixels.
    fn texture_coord(&self, face: usize, corner: usize) -> Point2Df;

    fn sample_diffuse(&self, texel: Point2Df) -> Color;
}
