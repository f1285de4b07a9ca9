//! Self-starting Adams–Bashforth integration.
//!
//! Position and velocity are advanced as two lock-step multistep recurrences
//! over the per-step increments `v·dt` and `a·dt`. A fresh body has no
//! increments stored, so it bootstraps with Euler and raises its order by one
//! on every step until the fourth-order formula can be used.
//!
//! Stored increments are only meaningful for the step size they were taken
//! with, so the first step locks `dt` for that body.

use super::Integrator;
use crate::{
    error::{Error, Result},
    real::Real,
    sys::Body,
    types::Vector3,
};
#[cfg(feature = "serde1")]
use serde::{Deserialize, Serialize};

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
pub enum Order {
    /// Euler bootstrap
    First = 1,
    Second = 2,
    Third = 3,
    /// Steady state
    Fourth = 4,
}

impl Default for Order {
    fn default() -> Self {
        Order::First
    }
}

impl Order {
    pub fn get(self) -> u8 {
        self as u8
    }

    fn next(self) -> Self {
        match self {
            Order::First => Order::Second,
            Order::Second => Order::Third,
            Order::Third | Order::Fourth => Order::Fourth,
        }
    }

    /// Combine the newest increment with the stored ones, newest first.
    fn combine(self) -> fn(Vector3, &[Vector3; 3]) -> Vector3 {
        match self {
            Order::First => ab1,
            Order::Second => ab2,
            Order::Third => ab3,
            Order::Fourth => ab4,
        }
    }
}

fn ab1(d0: Vector3, _: &[Vector3; 3]) -> Vector3 {
    d0
}

fn ab2(d0: Vector3, d: &[Vector3; 3]) -> Vector3 {
    d0 * (3.0 / 2.0) - d[0] * (1.0 / 2.0)
}

fn ab3(d0: Vector3, d: &[Vector3; 3]) -> Vector3 {
    d0 * (23.0 / 12.0) - d[0] * (16.0 / 12.0) + d[1] * (5.0 / 12.0)
}

fn ab4(d0: Vector3, d: &[Vector3; 3]) -> Vector3 {
    d0 * (55.0 / 24.0) - d[0] * (59.0 / 24.0) + d[1] * (37.0 / 24.0) - d[2] * (9.0 / 24.0)
}

/// Per-body multistep state.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
pub struct History {
    order: Order,
    dt: Option<Real>,
    /// Position increments, newest first
    dpos: [Vector3; 3],
    /// Velocity increments, newest first
    dvel: [Vector3; 3],
}

impl History {
    pub fn order(&self) -> Order {
        self.order
    }

    pub fn dt(&self) -> Option<Real> {
        self.dt
    }

    fn check(&self, dt: Real) -> Result<()> {
        if !(dt > 0.0 && dt.is_finite()) {
            return Err(Error::InvalidTimeStep(dt));
        }
        match self.dt {
            Some(locked) if locked != dt => Err(Error::StepSizeChanged {
                locked,
                requested: dt,
            }),
            _ => Ok(()),
        }
    }

    fn push(&mut self, dpos: Vector3, dvel: Vector3) {
        self.dpos.rotate_right(1);
        self.dvel.rotate_right(1);
        self.dpos[0] = dpos;
        self.dvel[0] = dvel;
    }
}

/// Variable-order (1 to 4) Adams–Bashforth integrator.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct AdamsBashforth;

impl AdamsBashforth {
    /// Advance one body by `dt` using its current acceleration.
    pub fn advance(&self, dt: Real, body: &mut Body) -> Result<()> {
        body.history.check(dt)?;
        Self::commit(dt, body);
        Ok(())
    }

    fn commit(dt: Real, body: &mut Body) {
        let h = &mut body.history;
        let dpos = body.vel * dt;
        let dvel = body.acc * dt;

        let combine = h.order.combine();
        body.pos += combine(dpos, &h.dpos);
        body.vel += combine(dvel, &h.dvel);

        h.push(dpos, dvel);
        h.order = h.order.next();
        h.dt = Some(dt);
    }
}

impl Integrator for AdamsBashforth {
    fn check(&self, dt: Real, bodies: &[Body]) -> Result<()> {
        bodies.iter().try_for_each(|b| b.history.check(dt))
    }

    fn step(&self, dt: Real, bodies: &mut [Body]) -> Result<()> {
        // all or nothing
        self.check(dt, bodies)?;
        bodies.iter_mut().for_each(|b| Self::commit(dt, b));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        consts::{AU, DAY, EARTH_MASS, G, SUN_MASS},
        gravity::Gravity,
    };
    use approx::assert_relative_eq;

    fn body() -> Body {
        Body::new(1.0, Vector3::ZERO, Vector3::new(1.0, 0.0, 0.0)).unwrap()
    }

    #[test]
    fn order_escalates_and_saturates() {
        let mut b = body();
        let orders: Vec<_> = (0..8)
            .map(|_| {
                let o = b.order();
                AdamsBashforth.advance(1.0, &mut b).unwrap();
                o
            })
            .collect();
        assert_eq!(orders, vec![1, 2, 3, 4, 4, 4, 4, 4]);
        assert_eq!(b.order(), 4);
    }

    #[test]
    fn coefficients_are_consistent() {
        // a constant increment is reproduced exactly at every order
        let mut b = body();
        b.acc = Vector3::new(0.0, 2.0, 0.0);
        for n in 1..=10 {
            AdamsBashforth.advance(0.5, &mut b).unwrap();
            assert_relative_eq!(b.vel.y, n as Real, max_relative = 1e-14);
            assert_relative_eq!(b.vel.x, 1.0);
        }
    }

    #[test]
    fn history_is_newest_first() {
        let mut b = Body::new(1.0, Vector3::ZERO, Vector3::new(1.0, 0.0, 0.0)).unwrap();
        let mut vx = Vec::new();
        for &a in &[1.0, 2.0, 4.0, 8.0, 16.0] {
            b.acc = Vector3::new(a, 0.0, 0.0);
            AdamsBashforth.advance(1.0, &mut b).unwrap();
            vx.push(b.vel.x);
        }
        let expected = [
            2.0,
            2.0 + (3.0 * 2.0 - 1.0) / 2.0,
            4.5 + (23.0 * 4.0 - 16.0 * 2.0 + 5.0 * 1.0) / 12.0,
            4.5 + 65.0 / 12.0 + (55.0 * 8.0 - 59.0 * 4.0 + 37.0 * 2.0 - 9.0 * 1.0) / 24.0,
            4.5 + 65.0 / 12.0
                + 269.0 / 24.0
                + (55.0 * 16.0 - 59.0 * 8.0 + 37.0 * 4.0 - 9.0 * 2.0) / 24.0,
        ];
        for (v, e) in vx.iter().zip(expected.iter()) {
            assert_relative_eq!(*v, *e, max_relative = 1e-14);
        }
    }

    #[test]
    fn euler_bootstrap() {
        let mut bodies = vec![
            Body::new(SUN_MASS, Vector3::ZERO, Vector3::ZERO).unwrap(),
            Body::new(
                EARTH_MASS,
                Vector3::new(AU, 0.0, 0.0),
                Vector3::new(0.0, 0.0, -30_000.0),
            )
            .unwrap(),
        ];
        Gravity::default().accumulate(&mut bodies);
        assert_relative_eq!(bodies[1].acc.norm(), 5.937e-3, max_relative = 1e-3);
        assert_relative_eq!(bodies[1].acc.x, -G * SUN_MASS / (AU * AU));

        AdamsBashforth.step(DAY, &mut bodies).unwrap();
        let earth = &bodies[1];
        assert_eq!(earth.pos.x, 1.495e11);
        assert_eq!(earth.pos.y, 0.0);
        assert_relative_eq!(earth.pos.z, -2.592e9, max_relative = 1e-12);
        assert_relative_eq!(earth.vel.x, -512.96, max_relative = 1e-3);
        assert_eq!(earth.vel.y, 0.0);
        assert_eq!(earth.vel.z, -30_000.0);
        assert_eq!(earth.order(), 2);
    }

    #[test]
    fn step_size_is_locked() {
        let mut bodies = vec![body(), body()];
        AdamsBashforth.step(1.0, &mut bodies[..1]).unwrap();
        let before = bodies.clone();
        assert_eq!(
            AdamsBashforth.step(2.0, &mut bodies),
            Err(Error::StepSizeChanged {
                locked: 1.0,
                requested: 2.0
            })
        );
        assert_eq!(bodies, before);

        bodies[0].reset_history();
        assert_eq!(bodies[0].order(), 1);
        AdamsBashforth.step(2.0, &mut bodies).unwrap();
        assert_eq!(bodies[1].locked_dt(), Some(2.0));
    }

    #[test]
    fn rejects_bad_step() {
        let mut b = body();
        assert_eq!(
            AdamsBashforth.advance(0.0, &mut b),
            Err(Error::InvalidTimeStep(0.0))
        );
        assert!(AdamsBashforth.advance(Real::NAN, &mut b).is_err());
        assert_eq!(b.order(), 1);
    }
}

// -- end of file --
