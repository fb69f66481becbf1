//! Range sensor measuring the distance to the closest obstacle along a ray.

use super::{clip_line, Obstacle, OrientedBody, Vector};

#[derive(Clone, Debug, PartialEq, PartialOrd)]
pub struct RangeSensor {
    body: OrientedBody,
    radius: f64,
    distance: f64,
}

impl RangeSensor {
    pub fn new(position: Vector, direction: Vector, radius: f64) -> Self {
        Self {
            body: OrientedBody::new(position, Vector::ZERO).with_heading(direction),
            radius,
            distance: radius,
        }
    }

    pub fn position(&self) -> Vector {
        self.body.position()
    }

    pub fn direction(&self) -> Vector {
        self.body.heading()
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Most recent reading, see [`RangeSensor::update`].
    pub fn distance(&self) -> f64 {
        self.distance
    }

    pub fn set_pose(&mut self, position: Vector, direction: Vector) {
        self.body.set_position(position);
        self.body.set_heading(direction);
    }

    pub fn translate(&mut self, delta: Vector) {
        self.body.translate(delta);
    }

    /// Distance to the closest obstacle boundary hit by the ray, or the radius if no obstacle is
    /// hit within range.
    pub fn measure_distance<'a>(&self, obstacles: impl IntoIterator<Item = &'a Obstacle>) -> f64 {
        obstacles
            .into_iter()
            .filter_map(|o| self.rectangle_distance(o))
            .fold(self.radius, f64::min)
    }

    /// Distance along the ray to the boundary of the obstacle.
    ///
    /// The ray is transformed into the frame of the obstacle, where the obstacle is an
    /// axis-aligned rectangle centered at the origin. Hits behind the origin, including an origin
    /// inside the obstacle, and hits beyond the radius are rejected.
    pub fn rectangle_distance(&self, obstacle: &Obstacle) -> Option<f64> {
        let direction = obstacle.direction_to_local(self.direction());
        let (near, _) = clip_line(
            obstacle.to_local(self.position()),
            direction,
            &obstacle.local_rect(),
            (f64::NEG_INFINITY, f64::INFINITY),
        )?;
        let distance = near * direction.norm();
        (near >= 0.0 && distance <= self.radius).then_some(distance)
    }

    /// Measures and stores the reading.
    pub fn update<'a>(&mut self, obstacles: impl IntoIterator<Item = &'a Obstacle>) -> f64 {
        self.distance = self.measure_distance(obstacles);
        self.distance
    }
}
