use crate::{gravity::energy, real::Real, sys::Body, types::Vector3};
#[cfg(feature = "serde1")]
use serde::{Deserialize, Serialize};

/// Ordered, fixed-cardinality set of bodies.
#[derive(Clone, Default, Debug, PartialEq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
pub struct BodySet {
    pub(crate) bodies: Vec<Body>,
}

impl BodySet {
    pub fn new() -> Self {
        Default::default()
    }
    pub fn len(&self) -> usize {
        self.bodies.len()
    }
    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }
    pub fn push(&mut self, body: Body) {
        self.bodies.push(body);
    }
    pub fn bodies(&self) -> &[Body] {
        &self.bodies[..]
    }
    pub fn bodies_mut(&mut self) -> &mut [Body] {
        &mut self.bodies[..]
    }
    pub fn iter(&self) -> std::slice::Iter<'_, Body> {
        self.bodies.iter()
    }
    pub fn into_vec(self) -> Vec<Body> {
        self.bodies
    }
}

impl From<Vec<Body>> for BodySet {
    fn from(bodies: Vec<Body>) -> Self {
        BodySet { bodies }
    }
}

impl std::ops::Index<usize> for BodySet {
    type Output = Body;
    fn index(&self, i: usize) -> &Body {
        &self.bodies[i]
    }
}

impl BodySet {
    /// Compute the kinetic and potential energies of the system.
    pub fn energies(&self) -> (Real, Real) {
        energy::energies(&self.bodies[..])
    }
}

/// Methods for center-of-mass determination and adjustment.
impl BodySet {
    /// Get center-of-mass mass (a.k.a. total mass).
    pub fn com_mass(&self) -> Real {
        self.bodies.iter().map(|b| b.mass).sum()
    }
    /// Get center-of-mass position.
    pub fn com_pos(&self) -> Vector3 {
        let rcom: Vector3 = self.bodies.iter().map(|b| b.pos * b.mass).sum();
        rcom / self.com_mass()
    }
    /// Get center-of-mass velocity.
    pub fn com_vel(&self) -> Vector3 {
        self.momentum() / self.com_mass()
    }
    /// Get total linear momentum.
    pub fn momentum(&self) -> Vector3 {
        self.bodies.iter().map(Body::momentum).sum()
    }
    /// Moves center-of-mass by the given offsets. The stored multistep
    /// increments belong to the old frame, so every history is reset.
    pub fn com_move_by(&mut self, dpos: Vector3, dvel: Vector3) {
        for b in self.bodies.iter_mut() {
            b.pos += dpos;
            b.vel += dvel;
            b.reset_history();
        }
    }
    /// Moves center-of-mass to the origin of coordinates, at rest.
    pub fn com_to_origin(&mut self) {
        if self.is_empty() {
            return;
        }
        let rcom = self.com_pos();
        let vcom = self.com_vel();
        self.com_move_by(-rcom, -vcom);
    }
}


// -- end of file --
