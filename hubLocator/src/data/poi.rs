use std::fmt;
use serde::Serialize;

/// Integer position on the survey grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct GridPoint {
    pub x: i32,
    pub y: i32,
}

impl GridPoint {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// L1 distance. Widened to `i64` so opposite extremes of the `i32` range cannot overflow.
    pub fn manhattan_distance(&self, other: &GridPoint) -> i64 {
        let dx = (i64::from(self.x) - i64::from(other.x)).abs();
        let dy = (i64::from(self.y) - i64::from(other.y)).abs();
        dx + dy
    }
}

impl fmt::Display for GridPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

pub trait POI {
    fn get_position(&self) -> &GridPoint;
    fn get_id(&self) -> String;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_is_sum_of_axis_differences() {
        let a = GridPoint::new(1, 2);
        let b = GridPoint::new(4, -2);
        assert_eq!(a.manhattan_distance(&b), 7);
        assert_eq!(b.manhattan_distance(&a), 7);
    }

    #[test]
    fn distance_to_self_is_zero() {
        let a = GridPoint::new(-35, 80);
        assert_eq!(a.manhattan_distance(&a), 0);
    }

    #[test]
    fn distance_across_full_range_does_not_overflow() {
        let a = GridPoint::new(i32::MIN, i32::MIN);
        let b = GridPoint::new(i32::MAX, i32::MAX);
        assert_eq!(a.manhattan_distance(&b), 2 * (u32::MAX as i64));
    }
}
