use super::{AdamsBashforth, Integrator};
use crate::{
    error::{Error, Result},
    gravity::{Encounters, Gravity},
    real::Real,
    sys::BodySet,
    types::Vector3,
};
#[cfg(feature = "serde1")]
use serde::{Deserialize, Serialize};

/// Public state of one body at the end of a tick.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
pub struct BodyState {
    pub name: Option<String>,
    pub mass: Real,
    pub pos: Vector3,
    pub vel: Vector3,
}

/// Immutable snapshot of the whole system.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
pub struct Frame {
    pub tick: u64,
    /// Simulated time [s]
    pub time: Real,
    pub bodies: Vec<BodyState>,
}

/// Synchronous tick machinery: gravity then integration, for all bodies.
#[derive(Debug)]
pub struct Engine<I = AdamsBashforth> {
    bodies: BodySet,
    gravity: Gravity,
    integrator: I,
    ticks: u64,
    time: Real,
}

impl Engine<AdamsBashforth> {
    pub fn new(bodies: BodySet) -> Result<Self> {
        Self::with_parts(bodies, Gravity::default(), AdamsBashforth)
    }
}

impl<I: Integrator> Engine<I> {
    pub fn with_parts(bodies: BodySet, gravity: Gravity, integrator: I) -> Result<Self> {
        if bodies.is_empty() {
            return Err(Error::EmptySystem);
        }
        Ok(Engine {
            bodies,
            gravity,
            integrator,
            ticks: 0,
            time: 0.0,
        })
    }

    /// Accelerate every body from the current positions, then integrate
    /// every body by `dt`.
    pub fn tick(&mut self, dt: Real) -> Result<Encounters> {
        self.integrator.check(dt, self.bodies.bodies())?;
        let encounters = self.gravity.accumulate(self.bodies.bodies_mut());
        self.integrator.step(dt, self.bodies.bodies_mut())?;
        self.ticks += 1;
        self.time += dt;
        Ok(encounters)
    }

    /// Run `n` ticks, returning the clamped encounters over all of them.
    pub fn run(&mut self, dt: Real, n: u64) -> Result<u64> {
        let mut encounters = 0;
        for _ in 0..n {
            encounters += self.tick(dt)? as u64;
        }
        Ok(encounters)
    }

    pub fn check(&self, dt: Real) -> Result<()> {
        self.integrator.check(dt, self.bodies.bodies())
    }

    pub fn bodies(&self) -> &BodySet {
        &self.bodies
    }
    pub fn into_bodies(self) -> BodySet {
        self.bodies
    }
    pub fn gravity(&self) -> &Gravity {
        &self.gravity
    }
    pub fn ticks(&self) -> u64 {
        self.ticks
    }
    pub fn time(&self) -> Real {
        self.time
    }

    pub fn frame(&self) -> Frame {
        Frame {
            tick: self.ticks,
            time: self.time,
            bodies: self
                .bodies
                .iter()
                .map(|b| BodyState {
                    name: b.name.clone(),
                    mass: b.mass,
                    pos: b.pos,
                    vel: b.vel,
                })
                .collect(),
        }
    }
}


// -- end of file --
