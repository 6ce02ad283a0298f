//! Geometric primitives: Point, Bounds, Margin

use std::ops::AddAssign;

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };
}

/// Axis-aligned rectangle. Width and height are never negative.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Bounds {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    /// The all-zero rectangle reported by containers without children.
    pub const ZERO: Bounds = Bounds {
        x: 0.0,
        y: 0.0,
        width: 0.0,
        height: 0.0,
    };

    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        debug_assert!(width >= 0.0 && height >= 0.0, "negative bounds size");
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn center_x(&self) -> f32 {
        self.x + self.width / 2.0
    }

    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && y >= self.y && x <= self.right() && y <= self.bottom()
    }

    /// Grows `self` into the smallest rectangle covering both rectangles.
    pub fn extend(&mut self, other: &Bounds) {
        let left = self.x.min(other.x);
        let top = self.y.min(other.y);
        let right = self.right().max(other.right());
        let bottom = self.bottom().max(other.bottom());
        self.x = left;
        self.y = top;
        self.width = right - left;
        self.height = bottom - top;
    }

    /// Folds a sequence of rectangles into their union.
    ///
    /// The first rectangle seeds the fold verbatim, so the origin is never
    /// included unless one of the inputs covers it. Returns `None` for an
    /// empty sequence.
    pub fn union_all<I>(bounds: I) -> Option<Bounds>
    where
        I: IntoIterator<Item = Bounds>,
    {
        let mut iter = bounds.into_iter();
        let mut acc = iter.next()?;
        for next in iter {
            acc.extend(&next);
        }
        Some(acc)
    }
}

/// Horizontal spacing reserved before and after a single leaf.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Margin {
    pub left: f32,
    pub right: f32,
}

impl Margin {
    pub const ZERO: Margin = Margin {
        left: 0.0,
        right: 0.0,
    };

    pub const fn new(left: f32, right: f32) -> Self {
        Self { left, right }
    }

    pub fn is_zero(&self) -> bool {
        self.left == 0.0 && self.right == 0.0
    }

    pub fn horizontal_sum(&self) -> f32 {
        self.left + self.right
    }
}

impl AddAssign for Margin {
    fn add_assign(&mut self, rhs: Self) {
        self.left += rhs.left;
        self.right += rhs.right;
    }
}

#[cfg(test)]
#[path = "tests/geometry_tests.rs"]
mod tests;
