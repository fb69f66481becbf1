//! Controller steering the car.
//!
//! The car drives forward as long as the front sensors report enough free space and otherwise
//! turns towards the side with more room.

use bevy::prelude::*;

use sensor_car::domain::{Action, MountPoint};

use crate::resource::{ActionRes, ObservationRes};

const CLEARANCE: f64 = 60.0;

pub struct Controller;

impl Plugin for Controller {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, control);
    }
}

fn control(observation: Res<ObservationRes>, mut action: ResMut<ActionRes>) {
    action.0 = match &observation.0 {
        Some(observation) => decide(&observation.readings),
        None => Action::Forward,
    };
}

fn decide(readings: &[f64]) -> Action {
    let reading = |mount_point: MountPoint| {
        readings
            .get(usize::from(mount_point))
            .copied()
            .unwrap_or(f64::INFINITY)
    };
    let front_left = reading(MountPoint::FrontLeft);
    let front_right = reading(MountPoint::FrontRight);

    if reading(MountPoint::FrontCenter)
        .min(front_left)
        .min(front_right)
        > CLEARANCE
    {
        Action::Forward
    } else if front_right >= front_left {
        Action::TurnRight
    } else {
        Action::TurnLeft
    }
}
