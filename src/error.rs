use crate::real::Real;
use std::fmt;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// A body was given a mass that is not a positive, finite number.
    NonPositiveMass(Real),
    /// A body was given a non-finite position or velocity.
    NonFiniteState,
    /// A time-step that is not a positive, finite number.
    InvalidTimeStep(Real),
    /// The step size changed after a body's multistep history was built.
    StepSizeChanged { locked: Real, requested: Real },
    /// The gravity clamp distance is not a positive, finite number.
    InvalidMinDistance(Real),
    /// A normal distribution with a negative or non-finite spread.
    InvalidDistribution { mean: Real, std: Real },
    /// A positive draw could not be obtained from a distribution.
    SamplingExhausted,
    /// Only single and binary star systems can be generated.
    UnsupportedStarCount(usize),
    /// A run configuration that cannot drive the loop.
    InvalidConfig(&'static str),
    /// A simulation needs at least one body.
    EmptySystem,
    AlreadyRunning,
    /// The worker thread panicked; its state is lost.
    WorkerPanicked,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::NonPositiveMass(m) => write!(f, "body mass must be positive, got {}", m),
            Error::NonFiniteState => write!(f, "body position and velocity must be finite"),
            Error::InvalidTimeStep(dt) => write!(f, "time-step must be positive, got {}", dt),
            Error::StepSizeChanged { locked, requested } => write!(
                f,
                "time-step changed from {} to {} after multistep history was built",
                locked, requested
            ),
            Error::InvalidMinDistance(d) => {
                write!(f, "minimum distance must be positive, got {}", d)
            }
            Error::InvalidDistribution { mean, std } => write!(
                f,
                "invalid normal distribution (mean: {}, std: {})",
                mean, std
            ),
            Error::SamplingExhausted => write!(f, "could not draw a positive sample"),
            Error::UnsupportedStarCount(n) => {
                write!(f, "unsupported star count {} (expected 1 or 2)", n)
            }
            Error::InvalidConfig(what) => write!(f, "invalid run configuration: {}", what),
            Error::EmptySystem => write!(f, "simulation has no bodies"),
            Error::AlreadyRunning => write!(f, "simulation is already running"),
            Error::WorkerPanicked => write!(f, "simulation worker panicked"),
        }
    }
}

impl std::error::Error for Error {}

// -- end of file --
