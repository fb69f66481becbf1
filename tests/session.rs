//! Tests that drive a single car through an enclosed arena.

use sensor_car::domain::{Action, MountPoint, Session, Vector, VehicleConfig};

/// Test that a car driving straight ahead senses the wall getting closer until it hits it.
#[test]
fn car_drives_into_wall() {
    let mut sess = Session::enclosed(400.0, 300.0);
    let car = sess
        .add_vehicle(
            Vector::new(200.0, 150.0),
            VehicleConfig::default().with_speed(7.0),
        )
        .unwrap();

    let front = usize::from(MountPoint::FrontCenter);
    let mut reading = sess.vehicle(car).unwrap().readings()[front];
    let mut travelled = 0.0;
    loop {
        let obs = sess.step(car, Action::Forward).unwrap();
        travelled += obs.travelled_distance;
        if obs.collided {
            break;
        }
        assert!(obs.readings[front] < reading);
        reading = obs.readings[front];
    }

    assert_eq!(sess.tick(), 19);
    assert!((travelled - 133.0).abs() < 1e-9);
    assert!(sess.has_collision(car).unwrap());
}

/// Test that a car turning on the spot never collides and never travels.
#[test]
fn car_turns_in_place() {
    let mut sess = Session::enclosed(400.0, 300.0);
    let car = sess
        .add_vehicle(
            Vector::new(200.0, 150.0),
            VehicleConfig::default().with_turn_speed(3.0),
        )
        .unwrap();

    for _ in 0..120 {
        let obs = sess.step(car, Action::TurnRight).unwrap();
        assert!(!obs.collided);
        assert_eq!(obs.travelled_distance, 0.0);
        assert!(obs.readings.iter().all(|r| (0.0..=200.0).contains(r)));
    }

    let heading = sess.vehicle(car).unwrap().heading();
    assert!((heading - Vector::UP).norm() < 1e-6);
}
