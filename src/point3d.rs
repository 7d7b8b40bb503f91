use std::ops::{Add, Div, Index, IndexMut, Mul, Sub};

use crate::point2d::Point2D;

#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Point3D<T = f32> {
    pub x: T,
    pub y: T,
    pub z: T,
}

pub type Point3Di = Point3D<i32>;
pub type Point3Df = Point3D<f32>;

impl<T> Point3D<T> {
    pub const fn new(x: T, y: T, z: T) -> Self {
        Point3D { x, y, z }
    }
}

impl<T: Copy> Point3D<T> {
    /// Drops the depth component.
    pub fn xy(self) -> Point2D<T> {
        Point2D { x: self.x, y: self.y }
    }
}

impl<T: Add<Output = T>> Add for Point3D<T> {
    type Output = Point3D<T>;
    fn add(self, other: Point3D<T>) -> Point3D<T> {
        Point3D { x: self.x + other.x, y: self.y + other.y, z: self.z + other.z }
    }
}

impl<T: Sub<Output = T>> Sub for Point3D<T> {
    type Output = Point3D<T>;
    fn sub(self, other: Point3D<T>) -> Point3D<T> {
        Point3D { x: self.x - other.x, y: self.y - other.y, z: self.z - other.z }
    }
}

impl<T: Copy + Mul<Output = T>> Mul<T> for Point3D<T> {
    type Output = Point3D<T>;
    fn mul(self, scalar: T) -> Point3D<T> {
        Point3D { x: self.x * scalar, y: self.y * scalar, z: self.z * scalar }
    }
}

impl<T: Copy + Div<Output = T>> Div<T> for Point3D<T> {
    type Output = Point3D<T>;
    fn div(self, scalar: T) -> Point3D<T> {
        Point3D { x: self.x / scalar, y: self.y / scalar, z: self.z / scalar }
    }
}

impl<T> Index<usize> for Point3D<T> {
    type Output = T;
    fn index(&self, i: usize) -> &T {
        match i {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("Point3D index {i} out of range"),
        }
    }
}

impl<T> IndexMut<usize> for Point3D<T> {
    fn index_mut(&mut self, i: usize) -> &mut T {
        match i {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            _ => panic!("Point3D index {i} out of range"),
        }
    }
}

pub fn dot3<T: Copy + Add<Output = T> + Mul<Output = T>>(a: Point3D<T>, b: Point3D<T>) -> T {
    a.x * b.x + a.y * b.y + a.z * b.z
}

pub fn cross3<T: Copy + Sub<Output = T> + Mul<Output = T>>(a: Point3D<T>, b: Point3D<T>) -> Point3D<T> {
    Point3D {
        x: a.y * b.z - a.z * b.y,
        y: a.z * b.x - a.x * b.z,
        z: a.x * b.y - a.y * b.x,
    }
}

/// Unit vector in the direction of `vec`, or `None` when it has no direction.
///
/// The vector is first divided by its largest component so that squaring
/// cannot overflow for large but finite inputs.
pub fn normalize(vec: Point3Df) -> Option<Point3Df> {
    let largest = vec.x.abs().max(vec.y.abs()).max(vec.z.abs());
    if !(largest > 0.0 && largest.is_finite()) {
        return None;
    }
    let scaled = vec / largest;
    let length = dot3(scaled, scaled).sqrt();
    if length.is_finite() { Some(scaled / length) } else { None }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cross_of_axes_follows_right_hand_rule() {
        let x = Point3Di::new(1, 0, 0);
        let y = Point3Di::new(0, 1, 0);
        assert_eq!(cross3(x, y), Point3Di::new(0, 0, 1));
        assert_eq!(cross3(y, x), Point3Di::new(0, 0, -1));
    }

    #[test]
    fn cross_is_orthogonal_to_inputs() {
        let a = Point3Df::new(1.5, -2.0, 0.25);
        let b = Point3Df::new(-3.0, 0.5, 4.0);
        let c = cross3(a, b);
        assert!(dot3(a, c).abs() < 1e-5);
        assert!(dot3(b, c).abs() < 1e-5);
    }

    #[test]
    fn normalize_yields_unit_length() {
        let n = normalize(Point3Df::new(3.0, 0.0, 4.0)).unwrap();
        assert!((dot3(n, n) - 1.0).abs() < 1e-6);
        assert_eq!(n, Point3Df::new(0.6, 0.0, 0.8));
    }

    #[test]
    fn normalize_rejects_zero_length() {
        assert_eq!(normalize(Point3Df::new(0.0, 0.0, 0.0)), None);
        assert_eq!(normalize(Point3Df::new(f32::NAN, 0.0, 0.0)), None);
        assert_eq!(normalize(Point3Df::new(f32::NAN, 1.0, 0.0)), None);
        assert_eq!(normalize(Point3Df::new(f32::INFINITY, 1.0, 0.0)), None);
    }

    #[test]
    fn normalize_survives_huge_components() {
        let n = normalize(Point3Df::new(3e30, 0.0, -4e30)).unwrap();
        assert!((n.x - 0.6).abs() < 1e-6 && (n.z + 0.8).abs() < 1e-6, "{n:?}");
        let tiny = normalize(Point3Df::new(0.0, 1e-30, 0.0)).unwrap();
        assert_eq!(tiny, Point3Df::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn index_and_xy() {
        let p = Point3Df::new(1.0, 2.0, 3.0);
        assert_eq!((p[0], p[1], p[2]), (1.0, 2.0, 3.0));
        assert_eq!(p.xy(), Point2D::new(1.0, 2.0));
        assert_eq!(p * 2.0 - p, p);
    }
}
