//! Simulation of the car in an arena with walls.
//!
//! Every frame the action chosen by the controller is applied to the car, after which its
//! sensors are read and collisions are checked. The app exits on the first collision or after a
//! fixed number of ticks.

use std::time::Instant;

use bevy::{app::AppExit, prelude::*};
use once_cell::sync::Lazy;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use sensor_car::domain::{
    HasBounds, Obstacle, Rect, Session, Vector, VehicleConfig, WallOrientation,
};

use crate::resource::{ActionRes, CarRes, ObservationRes, SessionRes};

static EPOCH: Lazy<Instant> = Lazy::new(Instant::now);

const ARENA_WIDTH: f64 = 800.0;
const ARENA_HEIGHT: f64 = 600.0;
const WALL_COUNT: usize = 8;
const MAX_TICKS: u64 = 20_000;
const RNG_SEED: u64 = 19878367467712;

pub struct Simulator;

impl Plugin for Simulator {
    fn build(&self, app: &mut App) {
        Lazy::force(&EPOCH);
        let (session, car) = create_session();

        app.add_systems(Update, simulate)
            .insert_resource(session)
            .insert_resource(car)
            .init_resource::<ActionRes>()
            .init_resource::<ObservationRes>();
    }
}

fn create_session() -> (SessionRes, CarRes) {
    let start = Vector::new(ARENA_WIDTH / 2.0, ARENA_HEIGHT / 2.0);
    let clear_zone = Rect::from_center(start, Vector::new(80.0, 80.0));

    let mut rng = ChaCha8Rng::seed_from_u64(RNG_SEED);
    let mut session = Session::enclosed(ARENA_WIDTH, ARENA_HEIGHT);

    for _ in 0..WALL_COUNT {
        let wall = Obstacle::wall(
            Vector::new(
                rng.random_range(0.0..ARENA_WIDTH),
                rng.random_range(0.0..ARENA_HEIGHT),
            ),
            if rng.random_bool(0.5) {
                WallOrientation::Horizontal
            } else {
                WallOrientation::Vertical
            },
        );
        if !wall.intersects_bounds(&clear_zone) {
            session.add_obstacle(wall);
        }
    }

    let car = session
        .add_vehicle(
            start,
            VehicleConfig::default()
                .with_speed(2.0)
                .with_turn_speed(3.0),
        )
        .expect("demo vehicle config is valid");

    (session.into(), CarRes(car))
}

fn simulate(
    mut session: ResMut<SessionRes>,
    car: Res<CarRes>,
    action: Res<ActionRes>,
    mut observation: ResMut<ObservationRes>,
    mut exit: EventWriter<AppExit>,
) {
    match session.step(car.0, action.0) {
        Ok(o) => {
            let done = o.collided || session.tick() >= MAX_TICKS;
            if done {
                info!(
                    "finished after {} ticks in {:?}, collided: {}",
                    session.tick(),
                    EPOCH.elapsed(),
                    o.collided
                );
                exit.send(AppExit);
            }
            observation.0 = Some(o);
        }
        Err(err) => {
            error!("{err}");
            exit.send(AppExit);
        }
    }
}
