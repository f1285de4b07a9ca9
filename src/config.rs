use crate::{
    consts::DAY,
    error::{Error, Result},
    real::Real,
};
#[cfg(feature = "serde1")]
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Pacing of a real-time run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde1", serde(default))]
pub struct RunConfig {
    /// Target ticks per wall-clock second
    pub frames_per_second: u32,
    /// Simulated days per wall-clock second
    pub days_per_second: u32,
    /// Append to the orbit trails every this many ticks. Defaults to 5% of
    /// the frame rate.
    pub sample_every: Option<u32>,
    /// End the run by itself after this many ticks.
    pub max_ticks: Option<u64>,
}

impl Default for RunConfig {
    fn default() -> Self {
        RunConfig {
            frames_per_second: 60,
            days_per_second: 10,
            sample_every: None,
            max_ticks: None,
        }
    }
}

impl RunConfig {
    pub fn new(frames_per_second: u32, days_per_second: u32) -> Self {
        RunConfig {
            frames_per_second,
            days_per_second,
            ..Default::default()
        }
    }

    pub fn with_sample_every(mut self, ticks: u32) -> Self {
        self.sample_every = Some(ticks);
        self
    }

    pub fn with_max_ticks(mut self, ticks: u64) -> Self {
        self.max_ticks = Some(ticks);
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.frames_per_second == 0 {
            return Err(Error::InvalidConfig("frames_per_second must be positive"));
        }
        if self.days_per_second == 0 {
            return Err(Error::InvalidConfig("days_per_second must be positive"));
        }
        if self.sample_every == Some(0) {
            return Err(Error::InvalidConfig("sample_every must be positive"));
        }
        Ok(())
    }

    /// Simulated seconds per tick.
    pub fn dt(&self) -> Real {
        DAY * self.days_per_second as Real / self.frames_per_second as Real
    }

    /// Wall-clock time per tick.
    pub fn frame_budget(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.frames_per_second as f64)
    }

    /// Trail decimation factor.
    pub fn decimation(&self) -> u32 {
        self.sample_every
            .unwrap_or_else(|| (self.frames_per_second / 20).max(1))
    }
}


// -- end of file --
