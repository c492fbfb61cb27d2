/// An immutable point in the 2D plane.
#[derive(Default, PartialEq, Debug, Clone, Copy)]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn origin() -> Self {
        Self::default()
    }

    pub fn with_x(x: f64) -> Self {
        Self {
            x,
            ..Self::default()
        }
    }

    pub fn with_y(y: f64) -> Self {
        Self {
            y,
            ..Self::default()
        }
    }

    pub fn x(self) -> f64 {
        self.x
    }

    pub fn y(self) -> f64 {
        self.y
    }

    pub fn distance_from_origin(&self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Euclidean distance between `p1` and `p2`.
    ///
    /// Non-finite coordinates propagate through the usual floating point rules.
    pub fn distance(p1: &Point, p2: &Point) -> f64 {
        let dx = p1.x - p2.x;
        let dy = p1.y - p2.y;
        (dx * dx + dy * dy).sqrt()
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        Self::distance(self, other)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<[f64; 2]> for Point {
    fn from([x, y]: [f64; 2]) -> Self {
        Self::new(x, y)
    }
}
