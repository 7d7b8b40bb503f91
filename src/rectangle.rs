use crate::triangle::Triangle3D;

/// Inclusive pixel rectangle. `(min_x, min_y)` is the lower-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub min_x: i32,
    pub min_y: i32,
    pub max_x: i32,
    pub max_y: i32,
}

// helper methods
impl Rect {
    pub fn width(&self) -> u32 {
        (self.max_x - self.min_x + 1) as u32
    }
    pub fn height(&self) -> u32 {
        (self.max_y - self.min_y + 1) as u32
    }

    /// Pixel range a triangle can cover, clamped to `[0, width-1] x [0, height-1]`.
    ///
    /// Returns `None` when nothing of the triangle's box lies on the image, so every
    /// coordinate a caller enumerates from the result is a valid pixel.
    pub fn bounding(tri: &Triangle3D, width: u32, height: u32) -> Option<Rect> {
        if width == 0 || height == 0 {
            return None;
        }
        let [a, b, c] = tri.vertices();
        let min_x = a.x.min(b.x).min(c.x).floor();
        let min_y = a.y.min(b.y).min(c.y).floor();
        let max_x = a.x.max(b.x).max(c.x).ceil();
        let max_y = a.y.max(b.y).max(c.y).ceil();
        if !(min_x <= max_x && min_y <= max_y) {
            // NaN coordinates
            return None;
        }

        // Float-to-int casts saturate, so huge coordinates stay well-defined
        let rect = Rect {
            min_x: (min_x as i32).max(0),
            min_y: (min_y as i32).max(0),
            max_x: (max_x as i32).min(width as i32 - 1),
            max_y: (max_y as i32).min(height as i32 - 1),
        };
        if rect.min_x > rect.max_x || rect.min_y > rect.max_y {
            return None;
        }
        Some(rect)
    }
}
