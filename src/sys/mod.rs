pub mod body;
pub mod system;

pub use self::{body::Body, system::BodySet};

// -- end of file --
