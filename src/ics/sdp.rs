//! Circular-orbit placement.
//!
//! Orbits lie in the x-z plane and run clockwise seen from +y: a body on the
//! +x axis moves towards -z. Inclination tilts the velocity towards +y.

use crate::{consts::G, real::Real, types::Vector3};

/// Speed of a circular orbit of radius `r` around `central_mass`.
pub fn circular_speed(central_mass: Real, r: Real) -> Real {
    (G * central_mass / r).sqrt()
}

/// Velocity of magnitude `speed` along `tangent`, tilted out of the orbital
/// plane by `inclination` radians.
pub fn inclined(speed: Real, tangent: Vector3, inclination: Real) -> Vector3 {
    let (s, c) = inclination.sin_cos();
    tangent * (speed * c) + Vector3::new(0.0, speed * s, 0.0)
}

/// Position and velocity of a circular orbit at azimuth `phase`.
pub fn circular_orbit(
    central_mass: Real,
    r: Real,
    inclination: Real,
    phase: Real,
) -> (Vector3, Vector3) {
    let (s, c) = phase.sin_cos();
    let pos = Vector3::new(r * c, 0.0, r * s);
    let tangent = Vector3::new(s, 0.0, -c);
    (pos, inclined(circular_speed(central_mass, r), tangent, inclination))
}

/// Positions and velocities of a star pair about their common centre of mass,
/// which is left at rest in the origin.
///
/// `boost` scales the circular relative speed; values away from 1 make the
/// orbit eccentric.
pub fn binary(m1: Real, m2: Real, separation: Real, boost: Real) -> [(Vector3, Vector3); 2] {
    let mtot = m1 + m2;
    let pos1 = Vector3::new(-separation * m2 / mtot, 0.0, 0.0);
    let pos2 = Vector3::new(separation * m1 / mtot, 0.0, 0.0);

    let vrel = circular_speed(mtot, separation) * boost;
    let vel2 = Vector3::new(0.0, 0.0, -vrel * m1 / mtot);
    let vel1 = -vel2 * (m2 / m1);

    [(pos1, vel1), (pos2, vel2)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        consts::{AU, SUN_MASS},
        real::consts::FRAC_PI_2,
    };
    use approx::assert_relative_eq;

    #[test]
    fn earth_speed() {
        assert_relative_eq!(circular_speed(SUN_MASS, AU), 29_797.0, max_relative = 1e-3);
    }

    #[test]
    fn inclination_mixes_y_and_z() {
        let v = inclined(10.0, Vector3::new(0.0, 0.0, -1.0), 0.1);
        assert_eq!(v.x, 0.0);
        assert_relative_eq!(v.y, 10.0 * (0.1 as Real).sin());
        assert_relative_eq!(v.z, -10.0 * (0.1 as Real).cos());
        assert_relative_eq!(v.norm(), 10.0);
    }

    #[test]
    fn orbit_is_tangential() {
        for &phase in &[0.0, 0.7, FRAC_PI_2, 4.0] {
            let (r, v) = circular_orbit(SUN_MASS, AU, 0.0, phase);
            assert_relative_eq!(r.norm(), AU, max_relative = 1e-12);
            assert!(r.dot(v).abs() < 1e-9 * r.norm() * v.norm());
            // same sense of rotation everywhere
            assert!(r.cross(v).y > 0.0);
        }
        let (r, v) = circular_orbit(SUN_MASS, AU, 0.0, 0.0);
        assert_eq!(r, Vector3::new(AU, 0.0, 0.0));
        assert!(v.z < 0.0);
    }

    #[test]
    fn binary_pair() {
        let (m1, m2) = (2.0e30, 0.5e30);
        let [(r1, v1), (r2, v2)] = binary(m1, m2, 0.2 * AU, 1.0);
        assert_relative_eq!((r2 - r1).norm(), 0.2 * AU, max_relative = 1e-12);
        assert!((r1 * m1 + r2 * m2).norm() < 1e-12 * m1 * AU);
        assert!((v1 * m1 + v2 * m2).norm() < 1e-12 * m2 * v2.norm());
        assert_relative_eq!(
            (v2 - v1).norm(),
            circular_speed(m1 + m2, 0.2 * AU),
            max_relative = 1e-12
        );
    }
}

// -- end of file --
