//! Kinematics, range sensing and collision detection for a car driving through an arena of
//! rectangular obstacles.


pub mod domain;
