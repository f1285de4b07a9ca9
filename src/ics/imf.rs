use crate::{
    error::{Error, Result},
    real::{consts, Real},
};
use rand::{distributions::Distribution, Rng};
#[cfg(feature = "serde1")]
use serde::{Deserialize, Serialize};

/// Mean and standard deviation of a normally distributed parameter.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
pub struct Spread {
    pub mean: Real,
    pub std: Real,
}

impl Spread {
    pub const fn new(mean: Real, std: Real) -> Self {
        Spread { mean, std }
    }
}

/// Normal distribution sampled with the Box–Muller transform.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Normal {
    mean: Real,
    std: Real,
}

impl Normal {
    pub fn new(mean: Real, std: Real) -> Result<Self> {
        if !(mean.is_finite() && std.is_finite() && std >= 0.0) {
            return Err(Error::InvalidDistribution { mean, std });
        }
        Ok(Normal { mean, std })
    }

    pub fn mean(&self) -> Real {
        self.mean
    }

    pub fn std(&self) -> Real {
        self.std
    }
}

impl Distribution<Real> for Normal {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Real {
        // (0, 1], keeps ln(u1) finite
        let u1 = 1.0 - rng.gen::<Real>();
        let u2 = 1.0 - rng.gen::<Real>();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * consts::PI * u2).sin();
        self.mean + self.std * z
    }
}

impl TryFrom<Spread> for Normal {
    type Error = Error;
    fn try_from(s: Spread) -> Result<Self> {
        Normal::new(s.mean, s.std)
    }
}

/// Normal distribution restricted to positive values, for masses and radii.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PositiveNormal {
    normal: Normal,
}

impl PositiveNormal {
    const MAX_TRIES: usize = 64;

    pub fn new(mean: Real, std: Real) -> Result<Self> {
        let normal = Normal::new(mean, std)?;
        if mean <= 0.0 {
            return Err(Error::InvalidDistribution { mean, std });
        }
        Ok(PositiveNormal { normal })
    }

    /// Redraw until positive.
    pub fn try_sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Real> {
        (0..Self::MAX_TRIES)
            .map(|_| self.normal.sample(rng))
            .find(|&x| x > 0.0)
            .ok_or(Error::SamplingExhausted)
    }
}

impl TryFrom<Spread> for PositiveNormal {
    type Error = Error;
    fn try_from(s: Spread) -> Result<Self> {
        PositiveNormal::new(s.mean, s.std)
    }
}


// -- end of file --
