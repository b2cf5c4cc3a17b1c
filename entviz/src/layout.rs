// Copyright 2019-2020 PolkaX. Licensed under MIT or Apache-2.0.

//! Cell geometry for the SVG grid.

use std::fmt;

/// A point in SVG user units.
#[derive(PartialEq, Clone, Copy, Debug)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

impl Point {
    /// Create a point.
    pub const fn new(x: f64, y: f64) -> Point {
        Point { x, y }
    }
}

impl fmt::Display for Point {
    // The SVG polygon `points` attribute form.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

/// A width/height pair in SVG user units.
#[derive(PartialEq, Clone, Copy, Debug)]
pub struct Size {
    /// Horizontal extent.
    pub width: f64,
    /// Vertical extent.
    pub height: f64,
}

impl Size {
    /// Create a size.
    pub const fn new(width: f64, height: f64) -> Size {
        Size { width, height }
    }
}

/// An axis-aligned rectangle.
#[derive(PartialEq, Clone, Copy, Debug)]
pub struct Rect {
    /// The top-left corner.
    pub top_left: Point,
    /// The extent.
    pub size: Size,
}

impl Rect {
    /// Create a rectangle from its top-left corner and size.
    pub const fn new(top_left: Point, size: Size) -> Rect {
        Rect { top_left, size }
    }

    /// The bottom-right corner.
    pub fn bottom_right(&self) -> Point {
        Point::new(self.right(), self.bottom())
    }

    /// The top-right corner.
    pub fn top_right(&self) -> Point {
        Point::new(self.right(), self.top())
    }

    /// The bottom-left corner.
    pub fn bottom_left(&self) -> Point {
        Point::new(self.left(), self.bottom())
    }

    /// The left edge coordinate.
    pub fn left(&self) -> f64 {
        self.top_left.x
    }

    /// The top edge coordinate.
    pub fn top(&self) -> f64 {
        self.top_left.y
    }

    /// The right edge coordinate.
    pub fn right(&self) -> f64 {
        self.left() + self.size.width
    }

    /// The bottom edge coordinate.
    pub fn bottom(&self) -> f64 {
        self.top() + self.size.height
    }

    /// The center point.
    pub fn center(&self) -> Point {
        Point::new(
            self.left() + self.size.width / 2.0,
            self.top() + self.size.height / 2.0,
        )
    }
}

/// A 2:1 cell: a central nucleus rect surrounded by six fixed edge rects.
///
/// Edges 0 and 1 sit above the nucleus, 3 and 4 below, 2 and 5 to its
/// right and left. All edge geometry derives from the quarter-height unit.
#[derive(PartialEq, Clone, Copy, Debug)]
pub struct Cell {
    rect: Rect,
}

impl Cell {
    /// Create a cell. The size must have a 2:1 aspect ratio, up to a small
    /// rounding error.
    pub fn new(top_left: Point, size: Size) -> Cell {
        assert!(
            size.width - size.height * 2.0 < 0.01 * size.width,
            "cell aspect ratio must be 2:1"
        );
        Cell {
            rect: Rect::new(top_left, size),
        }
    }

    /// The cell's bounding rectangle.
    pub fn rect(&self) -> &Rect {
        &self.rect
    }

    /// Height of the edge band, a quarter of the cell height.
    pub fn edge_height(&self) -> f64 {
        self.rect.size.height / 4.0
    }

    /// Width of the edge band, equal to its height.
    pub fn edge_width(&self) -> f64 {
        self.edge_height()
    }

    /// Size of edges 0, 1, 3 and 4 (half the nucleus width, one band tall).
    pub fn edge_0134_size(&self) -> Size {
        Size::new(self.nucleus().size.width / 2.0, self.edge_height())
    }

    /// Size of edges 2 and 5 (one band wide, full nucleus height).
    pub fn edge_25_size(&self) -> Size {
        Size::new(self.edge_width(), self.nucleus().size.height)
    }

    /// The central nucleus rectangle.
    pub fn nucleus(&self) -> Rect {
        let height = self.edge_height() * 2.0;
        let width = self.edge_width() * 6.0;
        Rect::new(
            Point::new(
                self.rect.left() + self.edge_width(),
                self.rect.top() + self.edge_height(),
            ),
            Size::new(width, height),
        )
    }

    /// The rectangle of edge 0 through 5.
    ///
    /// # Panics
    ///
    /// Panics when `edge` is greater than 5.
    pub fn edge_rect(&self, edge: usize) -> Rect {
        let n = self.nucleus();
        match edge {
            0 => Rect::new(Point::new(n.left(), self.rect.top()), self.edge_0134_size()),
            1 => Rect::new(
                Point::new(self.rect.center().x, self.rect.top()),
                self.edge_0134_size(),
            ),
            2 => Rect::new(n.top_right(), self.edge_25_size()),
            3 => Rect::new(
                Point::new(self.rect.center().x, n.bottom()),
                self.edge_0134_size(),
            ),
            4 => Rect::new(Point::new(n.left(), n.bottom()), self.edge_0134_size()),
            5 => Rect::new(Point::new(self.rect.left(), n.top()), self.edge_25_size()),
            _ => panic!("edge must be 0 to 5"),
        }
    }
}
