pub mod catalog;
pub mod imf;
pub mod sdp;

pub use self::catalog::Catalog;

use self::imf::{Normal, PositiveNormal, Spread};
use crate::{
    consts::{AU, EARTH_MASS, SUN_MASS},
    error::{Error, Result},
    real::{consts::TAU, Real},
    sys::{Body, BodySet},
    types::Vector3,
};
use rand::{distributions::Distribution, Rng};
#[cfg(feature = "serde1")]
use serde::{Deserialize, Serialize};

/// Knobs of the randomized synthesis. All lengths in metres, masses in kg,
/// angles in radians.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde1", serde(default))]
pub struct Params {
    pub star_mass: Spread,
    pub binary_separation: Spread,
    /// Spread of the relative-speed factor around a circular binary
    pub eccentricity_std: Real,
    pub planet_mass: Spread,
    /// Mean radius of planet `i` is `i * planet_spacing`
    pub planet_spacing: Real,
    pub planet_radius_std: Real,
    pub inclination_std: Real,
    /// Place planets at a random azimuth instead of the +x axis
    pub random_phase: bool,
    /// Bring the centre of mass of the whole set to rest at the origin
    pub recenter: bool,
}

impl Default for Params {
    fn default() -> Self {
        Params {
            star_mass: Spread::new(SUN_MASS, 0.1 * SUN_MASS),
            binary_separation: Spread::new(0.25 * AU, 0.05 * AU),
            eccentricity_std: 0.02,
            planet_mass: Spread::new(EARTH_MASS, 0.3 * EARTH_MASS),
            planet_spacing: AU,
            planet_radius_std: 0.1 * AU,
            inclination_std: 0.03,
            random_phase: false,
            recenter: false,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SystemGenerator {
    pub params: Params,
}

impl SystemGenerator {
    pub fn new(params: Params) -> Self {
        SystemGenerator { params }
    }

    /// One or two stars plus `planet_count` planets on near-circular orbits.
    pub fn create<R: Rng + ?Sized>(
        &self,
        star_count: usize,
        planet_count: usize,
        rng: &mut R,
    ) -> Result<BodySet> {
        let p = &self.params;
        let star_mass = PositiveNormal::try_from(p.star_mass)?;

        let mut psys = BodySet::new();
        match star_count {
            1 => {
                let m = star_mass.try_sample(rng)?;
                psys.push(Body::new(m, Vector3::ZERO, Vector3::ZERO)?.with_name("Star"));
            }
            2 => {
                let separation = PositiveNormal::try_from(p.binary_separation)?;
                let boost = Normal::new(1.0, p.eccentricity_std)?;
                let m1 = star_mass.try_sample(rng)?;
                let m2 = star_mass.try_sample(rng)?;
                let a = separation.try_sample(rng)?;
                let [(r1, v1), (r2, v2)] = sdp::binary(m1, m2, a, boost.sample(rng));
                psys.push(Body::new(m1, r1, v1)?.with_name("Star A"));
                psys.push(Body::new(m2, r2, v2)?.with_name("Star B"));
            }
            n => return Err(Error::UnsupportedStarCount(n)),
        }

        let planet_mass = PositiveNormal::try_from(p.planet_mass)?;
        let inclination = Normal::new(0.0, p.inclination_std)?;
        let mut central_mass = psys.com_mass();
        for i in 0..planet_count {
            let mean = (i + 1) as Real * p.planet_spacing;
            let radius = PositiveNormal::new(mean, p.planet_radius_std)?;
            let m = planet_mass.try_sample(rng)?;
            let r = radius.try_sample(rng)?;
            let incl = inclination.sample(rng);
            let phase = if p.random_phase {
                rng.gen_range(0.0..TAU)
            } else {
                0.0
            };
            let (pos, vel) = sdp::circular_orbit(central_mass, r, incl, phase);
            psys.push(Body::new(m, pos, vel)?.with_name(planet_name(i)));
            central_mass += m;
        }

        if p.recenter {
            psys.com_to_origin();
        }
        log::debug!(
            "created {} stars and {} planets, total mass {:e} kg",
            star_count,
            planet_count,
            psys.com_mass()
        );
        Ok(psys)
    }

    pub fn create_catalog(catalog: Catalog) -> BodySet {
        catalog.bodies()
    }
}

/// `Planet A`, `Planet B`, ... then numbered past `Z`.
fn planet_name(i: usize) -> String {
    match u8::try_from(i) {
        Ok(k) if k < 26 => format!("Planet {}", char::from(b'A' + k)),
        _ => format!("Planet {}", i + 1),
    }
}


// -- end of file --
