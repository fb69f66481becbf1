//! Basic building blocks.
//!
//! Coordinates follow screen conventions: the y-axis grows downwards, so a positive angle turns a
//! vector clockwise on screen, i.e. to the right.

use std::{
    f64::consts::PI,
    ops::{Add, AddAssign, Mul, Neg, Sub},
};

use nalgebra::{Rotation2, Vector2};

#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vector {
    x: f64,
    y: f64,
}

impl Vector {
    pub const ZERO: Vector = Vector::new(0.0, 0.0);

    /// Default heading of every body, "up" on screen.
    pub const UP: Vector = Vector::new(0.0, -1.0);

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn norm(&self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Z component of the cross product of both vectors extended to 3D.
    pub fn cross(&self, other: Self) -> f64 {
        self.x * other.y - self.y * other.x
    }

    pub fn rotate(&self, angle: Angle) -> Self {
        (Rotation2::new(angle.0) * Vector2::from(*self)).into()
    }

    /// Returns the unit vector pointing in the same direction. The zero vector is returned
    /// unchanged.
    pub fn normalize(&self) -> Self {
        let magnitude = self.norm();
        if magnitude == 0.0 {
            return Self::ZERO;
        }
        Self::new(self.x / magnitude, self.y / magnitude)
    }
}

impl From<Vector> for (f64, f64) {
    fn from(value: Vector) -> Self {
        (value.x, value.y)
    }
}

impl From<Vector> for Vector2<f64> {
    fn from(value: Vector) -> Self {
        Vector2::new(value.x, value.y)
    }
}

impl From<Vector2<f64>> for Vector {
    fn from(value: Vector2<f64>) -> Self {
        Self::new(value.x, value.y)
    }
}

impl Add for Vector {
    type Output = Vector;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl AddAssign for Vector {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Vector {
    type Output = Vector;

    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

impl Neg for Vector {
    type Output = Vector;

    fn neg(self) -> Self::Output {
        Self::new(-self.x, -self.y)
    }
}

impl Mul<f64> for Vector {
    type Output = Vector;

    fn mul(self, rhs: f64) -> Self::Output {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Angle(f64);

impl Angle {
    pub const RIGHT: Angle = Angle(0.5 * PI);

    pub fn new(radians: f64) -> Self {
        Self(radians)
    }

    pub fn from_deg(degree: f64) -> Self {
        Self(degree * PI / 180.0)
    }

    pub fn to_deg(self) -> f64 {
        (self.0 * (180.0 / PI)).rem_euclid(360.0)
    }
}

impl Neg for Angle {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Angle(-self.0)
    }
}

impl Add for Angle {
    type Output = Angle;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl From<Angle> for f64 {
    fn from(value: Angle) -> Self {
        value.0
    }
}
