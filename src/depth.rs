/// Per-pixel depth for one frame. Larger values are closer to the viewer,
/// so a fresh buffer holds negative infinity everywhere.
pub struct DepthBuffer {
    pub width: u32,
    pub height: u32,
    depth: Vec<f32>,
}

impl DepthBuffer {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            depth: vec![f32::NEG_INFINITY; (width as usize) * (height as usize)],
        }
    }

    fn index(&self, x: u32, y: u32) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + x as usize)
    }

    /// Stored depth at `(x, y)`; `None` outside the buffer.
    pub fn get(&self, x: u32, y: u32) -> Option<f32> {
        self.index(x, y).map(|i| self.depth[i])
    }

    pub fn set(&mut self, x: u32, y: u32, value: f32) {
        debug_assert!(x < self.width && y < self.height, "depth write ({x}, {y}) outside {}x{}", self.width, self.height);
        if let Some(i) = self.index(x, y) {
            self.depth[i] = value;
        }
    }

    /// Writes `value` only if it is strictly closer than what is stored.
    /// Returns whether the write happened; on a tie the earlier value stays.
    pub fn test_and_set(&mut self, x: u32, y: u32, value: f32) -> bool {
        match self.index(x, y) {
            Some(i) if value > self.depth[i] => {
                self.depth[i] = value;
                true
            }
            _ => false,
        }
    }

    pub fn reset(&mut self) {
        self.depth.fill(f32::NEG_INFINITY);
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.depth
    }
}
