//! The resource module encapsulates domain entities for use with Bevy.

use std::ops::{Deref, DerefMut};

use bevy::ecs::system::Resource;

use sensor_car::domain::{self, Action, Observation, VehicleKey};

#[derive(Resource)]
pub struct SessionRes(domain::Session);

impl Deref for SessionRes {
    type Target = domain::Session;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for SessionRes {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl From<domain::Session> for SessionRes {
    fn from(value: domain::Session) -> Self {
        Self(value)
    }
}

/// The vehicle steered by the controller.
#[derive(Resource, Clone, Copy)]
pub struct CarRes(pub VehicleKey);

/// Action chosen by the controller for the next tick.
#[derive(Resource, Default)]
pub struct ActionRes(pub Action);

/// Result of the most recent tick.
#[derive(Resource, Default)]
pub struct ObservationRes(pub Option<Observation>);
