use crate::{
    error::{Error, Result},
    real::Real,
    sim::adams::History,
    types::Vector3,
};
#[cfg(feature = "serde1")]
use serde::{Deserialize, Serialize};

/// A point mass plus its private multistep history.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
pub struct Body {
    /// Display name
    pub(crate) name: Option<String>,
    /// Mass [kg]
    pub(crate) mass: Real,
    /// Position [m]
    pub(crate) pos: Vector3,
    /// Velocity [m/s]
    pub(crate) vel: Vector3,
    /// Gravitational acceleration of the current tick [m/s^2]
    pub(crate) acc: Vector3,
    pub(crate) history: History,
}

impl Body {
    pub fn new(mass: Real, pos: Vector3, vel: Vector3) -> Result<Self> {
        if !(mass > 0.0 && mass.is_finite()) {
            return Err(Error::NonPositiveMass(mass));
        }
        if !(pos.is_finite() && vel.is_finite()) {
            return Err(Error::NonFiniteState);
        }
        Ok(Body::from_parts(mass, pos, vel))
    }

    /// Build without validation, for tabulated values known to be sane.
    pub(crate) fn from_parts(mass: Real, pos: Vector3, vel: Vector3) -> Self {
        Body {
            name: None,
            mass,
            pos,
            vel,
            acc: Vector3::ZERO,
            history: History::default(),
        }
    }

    pub fn with_name<S: Into<String>>(mut self, name: S) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
    pub fn mass(&self) -> Real {
        self.mass
    }
    pub fn pos(&self) -> Vector3 {
        self.pos
    }
    pub fn vel(&self) -> Vector3 {
        self.vel
    }
    pub fn acc(&self) -> Vector3 {
        self.acc
    }

    /// Linear momentum [kg m/s].
    pub fn momentum(&self) -> Vector3 {
        self.vel * self.mass
    }

    /// Order of the next integration step, in 1..=4.
    pub fn order(&self) -> u8 {
        self.history.order().get()
    }

    /// Time-step the history was built with, if any step was taken.
    pub fn locked_dt(&self) -> Option<Real> {
        self.history.dt()
    }

    /// Forget the multistep history; the next step bootstraps from Euler again
    /// and may use a different time-step.
    pub fn reset_history(&mut self) {
        self.history = History::default();
    }
}


// -- end of file --
