use std::iter::FusedIterator;

use itertools::iproduct;

use crate::geometry::{ScreenBlock, ScreenPoint, ScreenSize};

pub trait ScreenBlockExt {
    fn from_size(size: ScreenSize) -> Self;
    fn is_empty(&self) -> bool;
    fn area(&self) -> u32;
    fn internal_points(&self) -> InternalPoints;
    fn tile_ordering(&self, tile_size: std::num::NonZeroU32) -> Vec<ScreenBlock>;
}

impl ScreenBlockExt for ScreenBlock {
    fn from_size(size: ScreenSize) -> Self {
        ScreenBlock::with_size(ScreenPoint::origin(), &size)
    }

    fn is_empty(&self) -> bool {
        self.max.x <= self.min.x || self.max.y <= self.min.y
    }

    fn area(&self) -> u32 {
        if self.is_empty() {
            0
        } else {
            self.width() * self.height()
        }
    }

    /// Create an iterator over coordinates (x, y) pairs inside the block,
    /// in C order (x changes first, then y)
    fn internal_points(&self) -> InternalPoints {
        if self.is_empty() {
            InternalPoints::empty()
        } else {
            InternalPoints {
                min_x: self.min.x,
                max: self.max,

                cursor: self.min,
            }
        }
    }

    /// Splits the block into tiles of `tile_size` * `tile_size`, clipped at the bottom and right
    /// edges. Tiles are sorted by distance of their center from the block center, so that
    /// the middle of the image gets rendered first.
    fn tile_ordering(&self, tile_size: std::num::NonZeroU32) -> Vec<ScreenBlock> {
        if self.is_empty() {
            return Vec::new();
        }

        let tile_size = tile_size.get();
        let xs = (self.min.x..self.max.x).step_by(tile_size as usize);
        let ys = (self.min.y..self.max.y).step_by(tile_size as usize);

        let mut tiles: Vec<ScreenBlock> = iproduct!(ys, xs)
            .map(|(y, x)| {
                ScreenBlock::new(
                    ScreenPoint::new(x, y),
                    ScreenPoint::new(
                        x.saturating_add(tile_size).min(self.max.x),
                        y.saturating_add(tile_size).min(self.max.y),
                    ),
                )
            })
            .collect();

        let doubled_center = |block: &ScreenBlock| {
            (
                block.min.x as i64 + block.max.x as i64,
                block.min.y as i64 + block.max.y as i64,
            )
        };
        let (cx, cy) = doubled_center(self);
        tiles.sort_by_key(|tile| {
            let (tx, ty) = doubled_center(tile);
            (tx - cx).pow(2) + (ty - cy).pow(2)
        });

        tiles
    }
}

#[derive(Copy, Clone, Debug)]
pub struct InternalPoints {
    min_x: u32,
    max: ScreenPoint,

    cursor: ScreenPoint,
}

impl InternalPoints {
    // Construct an iterator over internal points that returns no points
    fn empty() -> Self {
        InternalPoints {
            min_x: 1,
            max: ScreenPoint::origin(),

            cursor: ScreenPoint::origin(),
        }
    }
}

impl Iterator for InternalPoints {
    type Item = ScreenPoint;

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.len();
        (len, Some(len))
    }

    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor.y >= self.max.y {
            return None;
        }

        let ret = self.cursor;

        debug_assert!(self.cursor.x < self.max.x);
        self.cursor.x += 1;
        if self.cursor.x >= self.max.x {
            self.cursor.x = self.min_x;
            self.cursor.y += 1;
        }

        Some(ret)
    }
}

impl ExactSizeIterator for InternalPoints {
    fn len(&self) -> usize {
        if self.cursor.y >= self.max.y {
            0
        } else {
            let whole_rows =
                ScreenBlock::new(ScreenPoint::new(self.min_x, self.cursor.y + 1), self.max);
            let current_row =
                ScreenBlock::new(self.cursor, ScreenPoint::new(self.max.x, self.cursor.y + 1));
            (whole_rows.area() + current_row.area()) as usize
        }
    }
}

impl FusedIterator for InternalPoints {}
