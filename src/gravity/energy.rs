use super::{Compute, Gravity};
use crate::{consts::G, real::Real, sys::Body};
use itertools::Itertools;

/// Kernel for the kinetic and potential energies of a system.
///
/// \\[ KE = \frac{1}{2} \sum_{i} m_{i} v_{i}^{2} \\]
///
/// \\[ PE = -\sum_{i<j} \frac{G m_{i} m_{j}}{\max(r_{ij}, r_{min})} \\]
///
/// The same clamp distance as the force pass keeps the potential finite for
/// coincident bodies.
pub struct Energy {
    min_distance: Real,
}

impl Energy {
    pub fn new(min_distance: Real) -> Self {
        Energy { min_distance }
    }
}

impl Compute for Energy {
    type Output = (Real, Real);

    fn compute(&self, bodies: &[Body]) -> Self::Output {
        let ke = 0.5 * bodies.iter().map(|b| b.mass * b.vel.norm2()).sum::<Real>();
        let pe = -bodies
            .iter()
            .tuple_combinations()
            .map(|(bi, bj)| {
                let r = (bj.pos - bi.pos).norm().max(self.min_distance);
                G * bi.mass * bj.mass / r
            })
            .sum::<Real>();
        (ke, pe)
    }
}

/// Kinetic and potential energies with the default clamp distance.
pub fn energies(bodies: &[Body]) -> (Real, Real) {
    Energy::new(Gravity::DEFAULT_MIN_DISTANCE).compute(bodies)
}


// -- end of file --
