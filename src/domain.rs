//! The domain module encapsulates the geometric kernel: vector math, oriented bodies, range
//! sensors, the vehicle and the session owning obstacles and vehicles.
//!
//! Nothing in here depends on rendering, input handling or the engine driving the simulation.

mod basis;
mod body;
mod collision;
mod obstacle;
mod sensor;
mod session;
mod vehicle;

pub use basis::{Angle, Vector};
pub use body::{OrientedBody, TURN_SPEED_DEG};
pub use collision::{
    clip_line, convex_polygon_contains, polygon_overlaps_rect, HasBounds, Rect,
};
pub use obstacle::{Obstacle, WallOrientation, WALL_LENGTH, WALL_THICKNESS};
pub use sensor::RangeSensor;
pub use session::{Action, Observation, ObstacleKey, Session, SessionError, VehicleKey};
pub use vehicle::{
    MountPoint, SensorMount, Vehicle, VehicleConfig, VehicleError, HALF_HEIGHT, HALF_WIDTH,
    SENSOR_RADIUS, SPEED,
};
