//! Rigid body with a position and a unit heading.

use super::{Angle, HasBounds, Rect, Vector};

/// Heading increment of a single `turn`.
pub const TURN_SPEED_DEG: f64 = 0.03;

#[derive(Clone, Debug, PartialEq, PartialOrd)]
pub struct OrientedBody {
    position: Vector,
    heading: Vector,
    half_extents: Vector,
    turn_speed: Angle,
}

impl OrientedBody {
    pub fn new(position: Vector, half_extents: Vector) -> Self {
        Self {
            position,
            heading: Vector::UP,
            half_extents,
            turn_speed: Angle::from_deg(TURN_SPEED_DEG),
        }
    }

    pub fn with_heading(self, heading: Vector) -> Self {
        Self {
            heading: heading.normalize(),
            ..self
        }
    }

    pub fn with_turn_speed(self, turn_speed: Angle) -> Self {
        Self { turn_speed, ..self }
    }

    pub fn position(&self) -> Vector {
        self.position
    }

    pub fn heading(&self) -> Vector {
        self.heading
    }

    pub fn half_extents(&self) -> Vector {
        self.half_extents
    }

    pub fn turn_speed(&self) -> Angle {
        self.turn_speed
    }

    pub fn set_position(&mut self, position: Vector) {
        self.position = position;
    }

    pub fn set_heading(&mut self, heading: Vector) {
        self.heading = heading.normalize();
    }

    pub fn translate(&mut self, delta: Vector) {
        self.position += delta;
    }

    pub fn turn(&mut self, right: bool) {
        self.rotate(if right {
            self.turn_speed
        } else {
            -self.turn_speed
        });
    }

    pub fn turn90(&mut self, right: bool) {
        self.rotate(if right { Angle::RIGHT } else { -Angle::RIGHT });
    }

    fn rotate(&mut self, angle: Angle) {
        self.heading = self.heading.rotate(angle).normalize();
    }

    /// Rotates an offset given relative to the reference pose, heading up, into the current
    /// orientation of the body.
    pub fn orient(&self, offset: Vector) -> Vector {
        let (hx, hy): (f64, f64) = self.heading.into();
        Vector::new(
            -offset.x() * hy - offset.y() * hx,
            offset.x() * hx - offset.y() * hy,
        )
    }

    /// Maps an offset given relative to the reference pose into world coordinates.
    pub fn to_world(&self, offset: Vector) -> Vector {
        self.position + self.orient(offset)
    }

    /// Corners of the body in the order front left, front right, rear right, rear left.
    pub fn corners(&self) -> [Vector; 4] {
        let (w, h): (f64, f64) = self.half_extents.into();
        [
            Vector::new(-w, -h),
            Vector::new(w, -h),
            Vector::new(w, h),
            Vector::new(-w, h),
        ]
        .map(|offset| self.to_world(offset))
    }
}

impl HasBounds for OrientedBody {
    fn bounds(&self) -> Rect {
        Rect::enclosing(&self.corners()).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use pretty_assertions::assert_eq;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;
    use rstest::rstest;

    use super::*;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_body_defaults() {
        let body = OrientedBody::new(Vector::new(1.0, 2.0), Vector::new(3.0, 4.0));
        assert_eq!(body.heading(), Vector::UP);
        assert_abs_diff_eq!(body.turn_speed(), Angle::from_deg(TURN_SPEED_DEG));
    }

    #[test]
    fn test_body_translate() {
        let mut body = OrientedBody::new(Vector::new(1.0, 2.0), Vector::ZERO);
        body.translate(Vector::new(-3.0, 0.5));
        assert_abs_diff_eq!(body.position(), Vector::new(-2.0, 2.5));
        body.set_position(Vector::new(7.0, 7.0));
        assert_abs_diff_eq!(body.position(), Vector::new(7.0, 7.0));
    }

    #[rstest]
    #[case::right(true, Vector::new(1.0, 0.0))]
    #[case::left(false, Vector::new(-1.0, 0.0))]
    fn test_body_turn90(#[case] right: bool, #[case] heading: Vector) {
        let mut body = OrientedBody::new(Vector::ZERO, Vector::ZERO);
        body.turn90(right);
        assert_abs_diff_eq!(body.heading(), heading, epsilon = EPSILON);
    }

    #[test]
    fn test_body_turn_increment() {
        let mut body = OrientedBody::new(Vector::ZERO, Vector::ZERO);
        for _ in 0..3000 {
            body.turn(true);
        }
        assert_abs_diff_eq!(body.heading(), Vector::new(1.0, 0.0), epsilon = 1e-6);
    }

    #[test]
    fn test_body_heading_stays_normalized() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let mut body = OrientedBody::new(Vector::ZERO, Vector::ZERO)
            .with_turn_speed(Angle::from_deg(7.3));
        for _ in 0..100_000 {
            match rng.random_range(0..4) {
                0 => body.turn(true),
                1 => body.turn(false),
                2 => body.turn90(true),
                _ => body.turn90(false),
            }
        }
        assert_abs_diff_eq!(body.heading().norm(), 1.0, epsilon = 1e-5);
    }

    #[rstest]
    #[case::up(Vector::UP, Vector::new(3.0, -1.0))]
    #[case::right(Vector::new(1.0, 0.0), Vector::new(1.0, 3.0))]
    #[case::down(Vector::new(0.0, 1.0), Vector::new(-3.0, 1.0))]
    #[case::left(Vector::new(-1.0, 0.0), Vector::new(-1.0, -3.0))]
    fn test_body_orient(#[case] heading: Vector, #[case] expected: Vector) {
        let body = OrientedBody::new(Vector::new(10.0, 10.0), Vector::ZERO).with_heading(heading);
        assert_abs_diff_eq!(
            body.orient(Vector::new(3.0, -1.0)),
            expected,
            epsilon = EPSILON
        );
        assert_abs_diff_eq!(
            body.to_world(Vector::new(3.0, -1.0)),
            Vector::new(10.0, 10.0) + expected,
            epsilon = EPSILON
        );
    }

    #[test]
    fn test_body_orient_matches_rotation() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        for _ in 0..100 {
            let angle = Angle::from_deg(rng.random_range(-180.0..180.0));
            let offset = Vector::new(rng.random_range(-5.0..5.0), rng.random_range(-5.0..5.0));
            let body = OrientedBody::new(Vector::ZERO, Vector::ZERO)
                .with_heading(Vector::UP.rotate(angle));
            assert_abs_diff_eq!(body.orient(offset), offset.rotate(angle), epsilon = EPSILON);
        }
    }

    #[rstest]
    #[case::overlapping(Rect::new(Vector::new(0.0, 0.0), Vector::new(5.0, 5.0)), true)]
    #[case::apart(Rect::new(Vector::new(20.0, 20.0), Vector::new(25.0, 25.0)), false)]
    #[case::beside_unrotated_extent(Rect::new(Vector::new(3.0, -2.0), Vector::new(5.0, 2.0)), true)]
    fn test_body_intersects_bounds(#[case] rect: Rect, #[case] expected: bool) {
        let body = OrientedBody::new(Vector::ZERO, Vector::new(2.0, 4.0))
            .with_heading(Vector::new(1.0, 0.0));
        assert_eq!(body.intersects_bounds(&rect), expected);
    }
}
