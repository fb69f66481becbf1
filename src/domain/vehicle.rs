//! Car with a ring of range sensors and an oriented bounding rectangle.

use std::slice::Iter;

use thiserror::Error;

use super::{
    polygon_overlaps_rect, Angle, Obstacle, OrientedBody, RangeSensor, Rect, Vector,
    TURN_SPEED_DEG,
};

pub const SPEED: f64 = 0.1;
pub const SENSOR_RADIUS: f64 = 200.0;
pub const HALF_WIDTH: f64 = 10.0;
pub const HALF_HEIGHT: f64 = 20.0;

#[derive(Clone, Debug, PartialEq, PartialOrd)]
pub struct Vehicle {
    body: OrientedBody,
    mounts: Vec<SensorMount>,
    sensors: Vec<RangeSensor>,
    corners: [Vector; 4],
    travelled_distance: f64,
    speed: f64,
}

impl Vehicle {
    /// Places a vehicle at the position, heading up. Fails if the config does not validate.
    pub fn new(position: Vector, config: VehicleConfig) -> Result<Self, VehicleError> {
        config.validate()?;
        let body = OrientedBody::new(
            position,
            Vector::new(config.half_width, config.half_height),
        )
        .with_turn_speed(config.turn_speed);
        let sensors = config
            .sensor_mounts
            .iter()
            .map(|mount| {
                RangeSensor::new(
                    body.to_world(mount.offset),
                    body.orient(mount.direction),
                    config.sensor_radius,
                )
            })
            .collect();

        Ok(Self {
            corners: body.corners(),
            body,
            mounts: config.sensor_mounts,
            sensors,
            travelled_distance: 0.0,
            speed: config.speed,
        })
    }

    pub fn position(&self) -> Vector {
        self.body.position()
    }

    pub fn heading(&self) -> Vector {
        self.body.heading()
    }

    pub fn body(&self) -> &OrientedBody {
        &self.body
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    /// Corners of the vehicle in the order front left, front right, rear right, rear left.
    pub fn edges(&self) -> [Vector; 4] {
        self.corners
    }

    pub fn sensors(&self) -> &[RangeSensor] {
        &self.sensors
    }

    pub fn distance_sensor(&self, index: usize) -> Result<&RangeSensor, VehicleError> {
        self.sensors
            .get(index)
            .ok_or(VehicleError::InvalidSensorIndex(index))
    }

    /// Most recent reading of every sensor, in mount order.
    pub fn readings(&self) -> Vec<f64> {
        self.sensors.iter().map(|s| s.distance()).collect()
    }

    /// Returns the distance travelled since the previous call and resets the counter.
    pub fn take_travelled_distance(&mut self) -> f64 {
        std::mem::take(&mut self.travelled_distance)
    }

    /// Translates the vehicle and its sensors.
    pub fn move_by(&mut self, delta: Vector) {
        self.body.translate(delta);
        self.travelled_distance += delta.norm();
        for sensor in &mut self.sensors {
            sensor.translate(delta);
        }
        self.corners = self.body.corners();
    }

    /// Places the vehicle at an absolute position. Does not count as travelled distance.
    pub fn move_to(&mut self, position: Vector) {
        self.body.set_position(position);
        self.update_pose();
    }

    /// Moves along the heading, backwards for negative distances.
    pub fn advance(&mut self, distance: f64) {
        self.move_by(self.heading() * distance);
    }

    pub fn forward(&mut self) {
        self.advance(self.speed);
    }

    pub fn backward(&mut self) {
        self.advance(-self.speed);
    }

    pub fn turn(&mut self, right: bool) {
        self.body.turn(right);
        self.update_pose();
    }

    pub fn turn90(&mut self, right: bool) {
        self.body.turn90(right);
        self.update_pose();
    }

    /// Refreshes the reading of every sensor.
    pub fn update<'a, I>(&mut self, obstacles: I)
    where
        I: IntoIterator<Item = &'a Obstacle> + Clone,
    {
        for sensor in &mut self.sensors {
            sensor.update(obstacles.clone());
        }
    }

    /// Overlap test between the oriented rectangle of the vehicle and an axis-aligned rectangle.
    pub fn collides(&self, rect: &Rect) -> bool {
        polygon_overlaps_rect(&self.corners, rect)
    }

    /// Overlap test against the rotated rectangles of the obstacles.
    pub fn collides_with<'a>(&self, obstacles: impl IntoIterator<Item = &'a Obstacle>) -> bool {
        obstacles.into_iter().any(|obstacle| {
            polygon_overlaps_rect(
                &self.corners.map(|c| obstacle.to_local(c)),
                &obstacle.local_rect(),
            )
        })
    }

    fn update_pose(&mut self) {
        self.corners = self.body.corners();
        for (sensor, mount) in std::iter::zip(&mut self.sensors, &self.mounts) {
            sensor.set_pose(
                self.body.to_world(mount.offset),
                self.body.orient(mount.direction),
            );
        }
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum VehicleError {
    #[error("invalid sensor index {0}")]
    InvalidSensorIndex(usize),
    #[error("invalid vehicle config: {0}")]
    InvalidConfig(&'static str),
}

/// Placement of a sensor relative to the vehicle center in the reference pose, in which the
/// vehicle is heading up along the negative y-axis.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SensorMount {
    pub offset: Vector,
    pub direction: Vector,
}

impl SensorMount {
    pub fn new(offset: Vector, direction: Vector) -> Self {
        Self {
            offset,
            direction: direction.normalize(),
        }
    }

    /// Sensors on the four corners looking diagonally outwards and one in the middle of the
    /// front looking ahead, ordered as [`MountPoint::iter`].
    pub fn layout(half_width: f64, half_height: f64) -> Vec<SensorMount> {
        MountPoint::iter()
            .map(|mount_point| {
                let (offset, degree) = match mount_point {
                    MountPoint::FrontRight => (Vector::new(half_width, -half_height), 45.0),
                    MountPoint::FrontLeft => (Vector::new(-half_width, -half_height), -45.0),
                    MountPoint::RearRight => (Vector::new(half_width, half_height), 135.0),
                    MountPoint::RearLeft => (Vector::new(-half_width, half_height), -135.0),
                    MountPoint::FrontCenter => (Vector::new(0.0, -half_height), 0.0),
                };
                SensorMount::new(offset, Vector::UP.rotate(Angle::from_deg(degree)))
            })
            .collect()
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd)]
pub enum MountPoint {
    FrontRight,
    FrontLeft,
    RearRight,
    RearLeft,
    FrontCenter,
}

impl MountPoint {
    pub fn iter() -> Iter<'static, MountPoint> {
        static MOUNT_POINTS: [MountPoint; 5] = [
            MountPoint::FrontRight,
            MountPoint::FrontLeft,
            MountPoint::RearRight,
            MountPoint::RearLeft,
            MountPoint::FrontCenter,
        ];
        MOUNT_POINTS.iter()
    }
}

impl From<MountPoint> for usize {
    fn from(value: MountPoint) -> Self {
        value as usize
    }
}

impl TryFrom<usize> for MountPoint {
    type Error = VehicleError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        MountPoint::iter()
            .nth(value)
            .copied()
            .ok_or(VehicleError::InvalidSensorIndex(value))
    }
}

/// Geometry and motion parameters. Distances are in the units of the arena, angles in degrees.
#[derive(Clone, Debug, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VehicleConfig {
    pub half_width: f64,
    pub half_height: f64,
    pub turn_speed: Angle,
    pub speed: f64,
    pub sensor_radius: f64,
    pub sensor_mounts: Vec<SensorMount>,
}

impl VehicleConfig {
    pub fn new(half_width: f64, half_height: f64) -> Self {
        Self {
            half_width,
            half_height,
            turn_speed: Angle::from_deg(TURN_SPEED_DEG),
            speed: SPEED,
            sensor_radius: SENSOR_RADIUS,
            sensor_mounts: SensorMount::layout(half_width, half_height),
        }
    }

    pub fn with_turn_speed(self, degree: f64) -> Self {
        Self {
            turn_speed: Angle::from_deg(degree),
            ..self
        }
    }

    pub fn with_speed(self, speed: f64) -> Self {
        Self { speed, ..self }
    }

    pub fn with_sensor_radius(self, sensor_radius: f64) -> Self {
        Self {
            sensor_radius,
            ..self
        }
    }

    pub fn with_sensor_mounts(self, sensor_mounts: Vec<SensorMount>) -> Self {
        Self {
            sensor_mounts,
            ..self
        }
    }

    pub fn validate(&self) -> Result<(), VehicleError> {
        if !(self.half_width.is_finite() && self.half_width > 0.0)
            || !(self.half_height.is_finite() && self.half_height > 0.0)
        {
            return Err(VehicleError::InvalidConfig("half extents must be positive"));
        }
        if !(self.sensor_radius.is_finite() && self.sensor_radius >= 0.0) {
            return Err(VehicleError::InvalidConfig("sensor radius must not be negative"));
        }
        if !f64::from(self.turn_speed).is_finite() || !self.speed.is_finite() {
            return Err(VehicleError::InvalidConfig("speeds must be finite"));
        }
        let finite = |v: Vector| v.x().is_finite() && v.y().is_finite();
        if !self
            .sensor_mounts
            .iter()
            .all(|m| finite(m.offset) && finite(m.direction))
        {
            return Err(VehicleError::InvalidConfig("sensor mounts must be finite"));
        }
        Ok(())
    }
}

impl Default for VehicleConfig {
    fn default() -> Self {
        Self::new(HALF_WIDTH, HALF_HEIGHT)
    }
}
