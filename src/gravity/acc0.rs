use super::{Compute, Encounters, PAR_THRESHOLD};
use crate::{consts::G, real::Real, sys::Body, types::Vector3};
use rayon::prelude::*;

#[derive(Copy, Clone, Debug)]
struct Src {
    mass: Real,
    pos: Vector3,
}

/// Kernel for the gravitational acceleration's 0-derivative.
pub struct Acc0 {
    rmin2: Real,
}

impl Acc0 {
    pub fn new(min_distance: Real) -> Self {
        Acc0 {
            rmin2: min_distance * min_distance,
        }
    }

    /// Acceleration on the i-th source due to all others, and the number of
    /// clamped interactions.
    fn p2p(&self, i: usize, src: &[Src]) -> (Vector3, usize) {
        let ri = src[i].pos;
        let mut acc = Vector3::ZERO;
        let mut clamped = 0;
        for (j, sj) in src.iter().enumerate() {
            if j == i {
                continue;
            }
            let dr = sj.pos - ri;
            let dir = match dr.normalize() {
                Some(dir) => dir,
                None => {
                    // coincident: no direction to pull along
                    clamped += 1;
                    continue;
                }
            };
            let mut r2 = dr.norm2();
            if r2 < self.rmin2 {
                r2 = self.rmin2;
                clamped += 1;
            }
            acc += dir * (G * sj.mass / r2);
        }
        (acc, clamped)
    }
}

impl Compute for Acc0 {
    type Output = (Vec<Vector3>, Encounters);

    /// For each body, compute the gravitational acceleration due to all others.
    fn compute(&self, bodies: &[Body]) -> Self::Output {
        let src: Vec<Src> = bodies
            .iter()
            .map(|b| Src {
                mass: b.mass,
                pos: b.pos,
            })
            .collect();

        let kernel = |i| self.p2p(i, &src);
        let res: Vec<(Vector3, usize)> = if src.len() > PAR_THRESHOLD {
            (0..src.len()).into_par_iter().map(kernel).collect()
        } else {
            (0..src.len()).map(kernel).collect()
        };

        let clamped: usize = res.iter().map(|&(_, c)| c).sum();
        let acc = res.into_iter().map(|(a, _)| a).collect();
        // every pair is seen from both ends
        (acc, clamped / 2)
    }
}


// -- end of file --
