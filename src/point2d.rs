use std::ops::{Add, Div, Index, IndexMut, Mul, Sub};

#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Point2D<T = f32> {
    pub x: T,
    pub y: T,
}

pub type Point2Di = Point2D<i32>;
pub type Point2Df = Point2D<f32>;

/// Names a coordinate axis so loops and interpolation can be written once for both.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    pub fn other(self) -> Axis {
        match self {
            Axis::X => Axis::Y,
            Axis::Y => Axis::X,
        }
    }
}

impl<T> Point2D<T> {
    pub const fn new(x: T, y: T) -> Self {
        Point2D { x, y }
    }
}

impl Point2Di {
    pub fn to_f32(self) -> Point2Df {
        Point2D { x: self.x as f32, y: self.y as f32 }
    }
}

impl<T: Add<Output = T>> Add for Point2D<T> {
    type Output = Point2D<T>;
    fn add(self, other: Point2D<T>) -> Point2D<T> {
        Point2D { x: self.x + other.x, y: self.y + other.y }
    }
}

impl<T: Sub<Output = T>> Sub for Point2D<T> {
    type Output = Point2D<T>;
    fn sub(self, other: Point2D<T>) -> Point2D<T> {
        Point2D { x: self.x - other.x, y: self.y - other.y }
    }
}

impl<T: Copy + Mul<Output = T>> Mul<T> for Point2D<T> {
    type Output = Point2D<T>;
    fn mul(self, scalar: T) -> Point2D<T> {
        Point2D { x: self.x * scalar, y: self.y * scalar }
    }
}

impl<T: Copy + Div<Output = T>> Div<T> for Point2D<T> {
    type Output = Point2D<T>;
    fn div(self, scalar: T) -> Point2D<T> {
        Point2D { x: self.x / scalar, y: self.y / scalar }
    }
}

impl<T> Index<usize> for Point2D<T> {
    type Output = T;
    fn index(&self, i: usize) -> &T {
        match i {
            0 => &self.x,
            1 => &self.y,
            _ => panic!("Point2D index {i} out of range"),
        }
    }
}

impl<T> IndexMut<usize> for Point2D<T> {
    fn index_mut(&mut self, i: usize) -> &mut T {
        match i {
            0 => &mut self.x,
            1 => &mut self.y,
            _ => panic!("Point2D index {i} out of range"),
        }
    }
}

impl<T> Index<Axis> for Point2D<T> {
    type Output = T;
    fn index(&self, axis: Axis) -> &T {
        match axis {
            Axis::X => &self.x,
            Axis::Y => &self.y,
        }
    }
}

impl<T> IndexMut<Axis> for Point2D<T> {
    fn index_mut(&mut self, axis: Axis) -> &mut T {
        match axis {
            Axis::X => &mut self.x,
            Axis::Y => &mut self.y,
        }
    }
}

#[inline(always)]
pub fn dot2<T: Copy + Add<Output = T> + Mul<Output = T>>(a: Point2D<T>, b: Point2D<T>) -> T {
    a.x * b.x + a.y * b.y
}
