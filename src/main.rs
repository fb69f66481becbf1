use bevy::{log::LogPlugin, prelude::*};

mod controller;
mod resource;
mod simulator;

fn main() {
    App::new()
        .add_plugins(MinimalPlugins)
        .add_plugins(LogPlugin::default())
        .add_plugins(controller::Controller)
        .add_plugins(simulator::Simulator)
        .run();
}
