//! A deterministic gravitational N-body core.
//!
//! Bodies are generated by [`ics`], accelerated by [`gravity`], advanced by the
//! multistep integrator in [`sim`] and driven in real time by
//! [`sim::Simulation`], which publishes snapshots and decimated orbit trails
//! for whatever presentation layer sits on top.

pub mod config;
pub mod error;
pub mod gravity;
pub mod ics;
pub mod sim;
pub mod sys;
pub mod types;

pub use crate::error::{Error, Result};

pub mod real {
    pub use std::f64::*;
    pub type Real = f64;
}

/// Physical constants, SI units.
pub mod consts {
    use crate::real::Real;

    /// Gravitational constant [N m^2 / kg^2].
    pub const G: Real = 6.6743e-11;
    /// Astronomical unit [m].
    pub const AU: Real = 1.495e11;
    /// Earth mass [kg].
    pub const EARTH_MASS: Real = 5.9722e24;
    /// Solar mass [kg].
    pub const SUN_MASS: Real = 333_000.0 * EARTH_MASS;
    /// Seconds per day.
    pub const DAY: Real = 86_400.0;
}

// -- end of file --
