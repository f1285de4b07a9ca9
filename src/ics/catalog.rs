use super::sdp::inclined;
use crate::{
    consts::{AU, EARTH_MASS},
    real::Real,
    sys::{Body, BodySet},
    types::Vector3,
};
#[cfg(feature = "serde1")]
use serde::{Deserialize, Serialize};

/// Canonical body sets.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
pub enum Catalog {
    /// The Sun and the four inner planets.
    SolarSystem,
    /// The Sun and the Earth alone.
    SunEarth,
}

struct Entry {
    name: &'static str,
    /// [Earth masses]
    mass: Real,
    /// [AU]
    distance: Real,
    /// [m/s]
    speed: Real,
    /// Orbital inclination [deg]
    inclination: Real,
}

const SUN: Entry = Entry {
    name: "Sun",
    mass: 333_000.0,
    distance: 0.0,
    speed: 0.0,
    inclination: 0.0,
};

const MERCURY: Entry = Entry {
    name: "Mercury",
    mass: 0.06,
    distance: 0.39,
    speed: 47.89e3,
    inclination: 7.005,
};

const VENUS: Entry = Entry {
    name: "Venus",
    mass: 0.81,
    distance: 0.72,
    speed: 35.0e3,
    inclination: 3.395,
};

const EARTH: Entry = Entry {
    name: "Earth",
    mass: 1.0,
    distance: 1.0,
    speed: 30.0e3,
    inclination: 0.0,
};

const MARS: Entry = Entry {
    name: "Mars",
    mass: 0.11,
    distance: 1.52,
    speed: 24.13e3,
    inclination: 1.850,
};

impl Entry {
    fn to_body(&self) -> Body {
        let pos = Vector3::new(self.distance * AU, 0.0, 0.0);
        let vel = inclined(
            self.speed,
            Vector3::new(0.0, 0.0, -1.0),
            self.inclination.to_radians(),
        );
        Body::from_parts(self.mass * EARTH_MASS, pos, vel).with_name(self.name)
    }
}

impl Catalog {
    fn entries(self) -> &'static [Entry] {
        match self {
            Catalog::SolarSystem => &[SUN, MERCURY, VENUS, EARTH, MARS],
            Catalog::SunEarth => &[SUN, EARTH],
        }
    }

    pub fn bodies(self) -> BodySet {
        self.entries().iter().map(Entry::to_body).collect::<Vec<_>>().into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::SUN_MASS;

    #[test]
    fn solar_system() {
        let psys = Catalog::SolarSystem.bodies();
        let names: Vec<_> = psys.iter().map(|b| b.name().unwrap()).collect();
        assert_eq!(names, vec!["Sun", "Mercury", "Venus", "Earth", "Mars"]);
        assert_eq!(psys[0].mass(), SUN_MASS);
        assert_eq!(psys[0].vel(), Vector3::ZERO);
        for b in psys.iter().skip(1) {
            assert!(b.pos().x > 0.0);
            assert!(b.vel().z < 0.0);
            assert!(b.vel().y >= 0.0);
        }
        assert!((psys[1].vel().norm() - 47.89e3).abs() < 1e-9);
        assert!(psys[1].vel().y > 0.0);
    }

    #[test]
    fn sun_earth() {
        let psys = Catalog::SunEarth.bodies();
        assert_eq!(psys.len(), 2);
        let earth = &psys[1];
        assert_eq!(earth.mass(), EARTH_MASS);
        assert_eq!(earth.pos(), Vector3::new(AU, 0.0, 0.0));
        assert_eq!(earth.vel(), Vector3::new(0.0, 0.0, -30_000.0));
    }
}

// -- end of file --
