use crate::{error::Result, real::Real, sys::Body};

pub mod adams;
pub mod driver;
pub mod engine;

pub use self::{
    adams::AdamsBashforth,
    driver::{trail_plane_au, Counter, Simulation},
    engine::{BodyState, Engine, Frame},
};

pub trait Integrator {
    /// Fail if `dt` cannot be applied to these bodies.
    fn check(&self, dt: Real, bodies: &[Body]) -> Result<()>;
    /// Advance every body by `dt` from its current acceleration. Either all
    /// bodies are advanced or none is.
    fn step(&self, dt: Real, bodies: &mut [Body]) -> Result<()>;
}

// -- end of file --
