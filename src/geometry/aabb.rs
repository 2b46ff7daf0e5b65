use num_traits::One;
use std::ops::{Add, Sub};

use nalgebra::{ClosedAddAssign, ClosedDivAssign, Point, Point2, Scalar};

/// Axis aligned box given by its componentwise lower and upper corners.
/// `min <= max` on every axis is expected but not checked.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AABB<Point> {
    pub min: Point,
    pub max: Point,
}

impl<Point> AABB<Point> {
    pub fn new(min: Point, max: Point) -> AABB<Point> {
        AABB { min, max }
    }

    pub fn with_size<S>(min: Point, size: &S) -> AABB<Point>
    where
        for<'a> &'a Point: Add<&'a S, Output = Point>,
    {
        let max = &min + size;
        AABB { min, max }
    }

    pub fn map<Point2, F: FnMut(&Point) -> Point2>(&self, mut f: F) -> AABB<Point2> {
        AABB {
            min: f(&self.min),
            max: f(&self.max),
        }
    }
}

impl<Point: Sub + Copy> AABB<Point> {
    pub fn size(&self) -> Point::Output {
        self.max - self.min
    }
}

impl<T: Scalar + Copy + Sub> AABB<Point2<T>> {
    pub fn width(&self) -> T::Output {
        self.max[0] - self.min[0]
    }

    pub fn height(&self) -> T::Output {
        self.max[1] - self.min[1]
    }
}

impl<T: Scalar + ClosedAddAssign + ClosedDivAssign + One, const D: usize> AABB<Point<T, D>> {
    pub fn center(&self) -> Point<T, D> {
        let two = T::one() + T::one();
        let avg_coords = (&self.min.coords + &self.max.coords) / two;
        Point::from(avg_coords)
    }
}

impl<Point> From<(Point, Point)> for AABB<Point> {
    fn from(value: (Point, Point)) -> Self {
        let (min, max) = value;
        AABB { min, max }
    }
}

#[cfg(test)]
mod tests {
    use assert2::assert;

    use crate::geometry::{ScreenBlock, ScreenPoint, ScreenSize, WorldBox, WorldPoint};

    #[test]
    fn screen_block_dimensions() {
        let block = ScreenBlock::with_size(ScreenPoint::new(10, 20), &ScreenSize::new(64, 32));
        assert!(block.max == ScreenPoint::new(74, 52));
        assert!(block.width() == 64);
        assert!(block.height() == 32);
    }

    #[test]
    fn world_box_center_and_size() {
        let b = WorldBox::new(WorldPoint::new(2.0, 90.0, 2.0), WorldPoint::new(6.0, 110.0, 6.0));
        assert!(b.center() == WorldPoint::new(4.0, 100.0, 4.0));
        assert!(b.size() == (WorldPoint::new(4.0, 20.0, 4.0) - WorldPoint::origin()));
    }
}
