//! Simulation session owning the obstacles and vehicles of an arena.
//!
//! Obstacles and vehicles are stored in arenas and referred to by stable keys. Sensors borrow the
//! obstacles for the duration of a measurement, so the obstacle set cannot change while a tick is
//! evaluated.

use log::{debug, info, trace};
use slotmap::{new_key_type, SlotMap};
use thiserror::Error;

use super::{Angle, Obstacle, Vector, Vehicle, VehicleConfig, VehicleError, WALL_THICKNESS};

new_key_type! {
    /// Unique ID of an [Obstacle].
    pub struct ObstacleKey;
    /// Unique ID of a [Vehicle].
    pub struct VehicleKey;
}

#[derive(Clone, Debug, Default)]
pub struct Session {
    /// The static obstacles, including the walls enclosing the arena.
    obstacles: SlotMap<ObstacleKey, Obstacle>,
    /// The vehicles being simulated.
    vehicles: SlotMap<VehicleKey, Vehicle>,
    /// The number of completed ticks.
    tick: u64,
}

impl Session {
    pub fn new() -> Self {
        Default::default()
    }

    /// Creates a session whose arena spans from the origin to `(width, height)`, enclosed by walls
    /// lying just outside of it.
    pub fn enclosed(width: f64, height: f64) -> Self {
        let mut session = Self::new();
        let half_thickness = WALL_THICKNESS / 2.0;

        for y in [-half_thickness, height + half_thickness] {
            session.add_obstacle(Obstacle::axis_aligned(
                Vector::new(width / 2.0, y),
                Vector::new(width / 2.0 + WALL_THICKNESS, half_thickness),
            ));
        }
        for x in [-half_thickness, width + half_thickness] {
            session.add_obstacle(Obstacle::new(
                Vector::new(x, height / 2.0),
                Vector::new(height / 2.0 + WALL_THICKNESS, half_thickness),
                Angle::RIGHT,
            ));
        }

        session
    }

    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn add_obstacle(&mut self, obstacle: Obstacle) -> ObstacleKey {
        let key = self.obstacles.insert(obstacle);
        debug!("added obstacle {key:?}");
        key
    }

    pub fn remove_obstacle(&mut self, key: ObstacleKey) -> Result<Obstacle, SessionError> {
        let obstacle = self
            .obstacles
            .remove(key)
            .ok_or(SessionError::MissingObstacle(key))?;
        debug!("removed obstacle {key:?}");
        Ok(obstacle)
    }

    pub fn obstacle(&self, key: ObstacleKey) -> Result<&Obstacle, SessionError> {
        self.obstacles
            .get(key)
            .ok_or(SessionError::MissingObstacle(key))
    }

    pub fn obstacles(&self) -> impl Iterator<Item = (ObstacleKey, &Obstacle)> {
        self.obstacles.iter()
    }

    /// Places a new vehicle and takes its first readings.
    pub fn add_vehicle(
        &mut self,
        position: Vector,
        config: VehicleConfig,
    ) -> Result<VehicleKey, SessionError> {
        let mut vehicle = Vehicle::new(position, config)?;
        vehicle.update(self.obstacles.values());
        let key = self.vehicles.insert(vehicle);
        debug!("added vehicle {key:?} at {position:?}");
        Ok(key)
    }

    pub fn remove_vehicle(&mut self, key: VehicleKey) -> Result<Vehicle, SessionError> {
        let vehicle = self
            .vehicles
            .remove(key)
            .ok_or(SessionError::MissingVehicle(key))?;
        debug!("removed vehicle {key:?}");
        Ok(vehicle)
    }

    pub fn vehicle(&self, key: VehicleKey) -> Result<&Vehicle, SessionError> {
        self.vehicles
            .get(key)
            .ok_or(SessionError::MissingVehicle(key))
    }

    pub fn vehicles(&self) -> impl Iterator<Item = (VehicleKey, &Vehicle)> {
        self.vehicles.iter()
    }

    /// Checks the vehicle against every obstacle.
    pub fn has_collision(&self, key: VehicleKey) -> Result<bool, SessionError> {
        Ok(self.vehicle(key)?.collides_with(self.obstacles.values()))
    }

    /// Teleports the vehicle and refreshes its readings.
    pub fn place_vehicle(&mut self, key: VehicleKey, position: Vector) -> Result<(), SessionError> {
        let vehicle = self
            .vehicles
            .get_mut(key)
            .ok_or(SessionError::MissingVehicle(key))?;
        vehicle.move_to(position);
        vehicle.update(self.obstacles.values());
        Ok(())
    }

    /// Applies the action to the vehicle, then senses and checks for collisions with the new pose.
    pub fn step(&mut self, key: VehicleKey, action: Action) -> Result<Observation, SessionError> {
        let vehicle = self
            .vehicles
            .get_mut(key)
            .ok_or(SessionError::MissingVehicle(key))?;

        match action {
            Action::Idle => {}
            Action::Forward => vehicle.forward(),
            Action::Backward => vehicle.backward(),
            Action::TurnLeft => vehicle.turn(false),
            Action::TurnRight => vehicle.turn(true),
            Action::Turn90Left => vehicle.turn90(false),
            Action::Turn90Right => vehicle.turn90(true),
        }

        vehicle.update(self.obstacles.values());
        let observation = Observation {
            readings: vehicle.readings(),
            collided: vehicle.collides_with(self.obstacles.values()),
            travelled_distance: vehicle.take_travelled_distance(),
        };

        self.tick += 1;
        trace!("tick {} {key:?} {action:?} {observation:?}", self.tick);
        if observation.collided {
            info!(
                "vehicle {key:?} collided at {:?} in tick {}",
                vehicle.position(),
                self.tick
            );
        }

        Ok(observation)
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Action {
    #[default]
    Idle,
    Forward,
    Backward,
    TurnLeft,
    TurnRight,
    Turn90Left,
    Turn90Right,
}

/// What a controller gets to see after a tick.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Observation {
    /// Reading of every sensor, in mount order.
    pub readings: Vec<f64>,
    pub collided: bool,
    /// Distance travelled during the tick.
    pub travelled_distance: f64,
}

#[derive(Error, Debug, PartialEq)]
pub enum SessionError {
    #[error("missing obstacle {0:?}")]
    MissingObstacle(ObstacleKey),
    #[error("missing vehicle {0:?}")]
    MissingVehicle(VehicleKey),
    #[error(transparent)]
    Vehicle(#[from] VehicleError),
}
