//! Direct-summation Newtonian gravity.
//!
//! Each pass reads one consistent snapshot of `(mass, pos)` for every body and
//! only then writes accelerations back, so no body is ever accelerated from a
//! partially advanced system.

use crate::{
    error::{Error, Result},
    real::Real,
    sys::Body,
    types::Vector3,
};

pub mod acc0;
pub mod energy;

pub use self::{acc0::Acc0, energy::Energy};

/// Fallback to sequential for systems less than or equal to this length.
pub(crate) const PAR_THRESHOLD: usize = 32;

pub trait Compute {
    type Output;
    fn compute(&self, src: &[Body]) -> Self::Output;
}

/// Number of body pairs closer than the clamp distance during one pass.
/// Coincident pairs are included.
pub type Encounters = usize;

/// Gravitational force accumulator.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Gravity {
    min_distance: Real,
}

impl Default for Gravity {
    fn default() -> Self {
        Gravity {
            min_distance: Self::DEFAULT_MIN_DISTANCE,
        }
    }
}

impl Gravity {
    /// Separations below this are clamped [m].
    pub const DEFAULT_MIN_DISTANCE: Real = 1.0e3;

    pub fn new(min_distance: Real) -> Result<Self> {
        if !(min_distance > 0.0 && min_distance.is_finite()) {
            return Err(Error::InvalidMinDistance(min_distance));
        }
        Ok(Gravity { min_distance })
    }

    pub fn min_distance(&self) -> Real {
        self.min_distance
    }

    /// Acceleration on every body due to all others, without touching them.
    pub fn accelerations(&self, bodies: &[Body]) -> (Vec<Vector3>, Encounters) {
        Acc0::new(self.min_distance).compute(bodies)
    }

    /// Overwrite every body's acceleration for the current tick.
    pub fn accumulate(&self, bodies: &mut [Body]) -> Encounters {
        let (acc, encounters) = self.accelerations(bodies);
        bodies.iter_mut().zip(acc).for_each(|(b, a)| b.acc = a);
        if encounters > 0 {
            log::debug!(
                "{} close encounter(s) clamped to {} m",
                encounters,
                self.min_distance
            );
        }
        encounters
    }
}


// -- end of file --
