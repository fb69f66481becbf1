//! Static rectangular obstacles.

use super::{Angle, HasBounds, Rect, Vector};

pub const WALL_LENGTH: f64 = 200.0;
pub const WALL_THICKNESS: f64 = 20.0;

/// Rectangle given by its center, half-extents and a rotation about the center.
#[derive(Clone, Debug, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Obstacle {
    position: Vector,
    half_extents: Vector,
    rotation: Angle,
}

impl Obstacle {
    pub fn new(position: Vector, half_extents: Vector, rotation: Angle) -> Self {
        Self {
            position,
            half_extents: Vector::new(half_extents.x().abs(), half_extents.y().abs()),
            rotation,
        }
    }

    pub fn axis_aligned(position: Vector, half_extents: Vector) -> Self {
        Self::new(position, half_extents, Angle::default())
    }

    /// Wall of the standard size, lying along the x-axis or rotated onto the y-axis.
    pub fn wall(position: Vector, orientation: WallOrientation) -> Self {
        Self::new(
            position,
            Vector::new(WALL_LENGTH / 2.0, WALL_THICKNESS / 2.0),
            match orientation {
                WallOrientation::Horizontal => Angle::default(),
                WallOrientation::Vertical => Angle::RIGHT,
            },
        )
    }

    pub fn position(&self) -> Vector {
        self.position
    }

    pub fn half_extents(&self) -> Vector {
        self.half_extents
    }

    pub fn rotation(&self) -> Angle {
        self.rotation
    }

    /// The obstacle in its own frame: unrotated and centered at the origin.
    pub fn local_rect(&self) -> Rect {
        Rect::from_center(Vector::ZERO, self.half_extents)
    }

    pub fn to_local(&self, position: Vector) -> Vector {
        (position - self.position).rotate(-self.rotation)
    }

    pub fn direction_to_local(&self, direction: Vector) -> Vector {
        direction.rotate(-self.rotation)
    }

    pub fn corners(&self) -> [Vector; 4] {
        self.local_rect()
            .corners()
            .map(|c| self.position + c.rotate(self.rotation))
    }

    pub fn contains(&self, position: Vector) -> bool {
        self.local_rect().contains(self.to_local(position))
    }
}

impl HasBounds for Obstacle {
    fn bounds(&self) -> Rect {
        Rect::enclosing(&self.corners()).unwrap_or_default()
    }
}

/// Direction of the long axis of a wall: a horizontal wall is wide and flat.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WallOrientation {
    #[default]
    Horizontal,
    Vertical,
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_obstacle_normalizes_half_extents() {
        let obstacle = Obstacle::axis_aligned(Vector::new(1.0, 2.0), Vector::new(-3.0, 4.0));
        assert_eq!(obstacle.half_extents(), Vector::new(3.0, 4.0));
        assert_eq!(obstacle.rotation(), Angle::default());
    }

    #[rstest]
    #[case::horizontal(WallOrientation::Horizontal, Vector::new(100.0, 10.0))]
    #[case::vertical(WallOrientation::Vertical, Vector::new(10.0, 100.0))]
    fn test_wall_bounds(#[case] orientation: WallOrientation, #[case] half_extents: Vector) {
        let position = Vector::new(300.0, 200.0);
        let bounds = Obstacle::wall(position, orientation).bounds();
        assert_abs_diff_eq!(bounds.min(), position - half_extents, epsilon = EPSILON);
        assert_abs_diff_eq!(bounds.max(), position + half_extents, epsilon = EPSILON);
    }

    #[test]
    fn test_obstacle_corners_rotated() {
        let obstacle = Obstacle::new(
            Vector::new(10.0, 10.0),
            Vector::new(2.0, 1.0),
            Angle::from_deg(90.0),
        );
        for (corner, expected) in std::iter::zip(
            obstacle.corners(),
            [
                Vector::new(11.0, 8.0),
                Vector::new(11.0, 12.0),
                Vector::new(9.0, 12.0),
                Vector::new(9.0, 8.0),
            ],
        ) {
            assert_abs_diff_eq!(corner, expected, epsilon = EPSILON);
        }
    }

    #[rstest]
    #[case::center(Vector::new(10.0, 10.0), true)]
    #[case::along_rotated_axis(Vector::new(10.0, 11.5), true)]
    #[case::along_unrotated_axis(Vector::new(11.5, 10.0), false)]
    fn test_obstacle_contains(#[case] position: Vector, #[case] expected: bool) {
        let obstacle = Obstacle::new(
            Vector::new(10.0, 10.0),
            Vector::new(2.0, 1.0),
            Angle::from_deg(90.0),
        );
        assert_eq!(obstacle.contains(position), expected);
    }

    #[test]
    fn test_obstacle_to_local() {
        let obstacle = Obstacle::new(Vector::new(5.0, 0.0), Vector::new(1.0, 1.0), Angle::RIGHT);
        assert_abs_diff_eq!(
            obstacle.to_local(Vector::new(5.0, 3.0)),
            Vector::new(3.0, 0.0),
            epsilon = EPSILON
        );
        assert_abs_diff_eq!(
            obstacle.direction_to_local(Vector::new(1.0, 0.0)),
            Vector::new(0.0, -1.0),
            epsilon = EPSILON
        );
    }
}
