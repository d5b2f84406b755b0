//! Reference time for cutoff computation
//!
//! Index names carry naive wall-clock timestamps, so "now" is taken as a
//! naive date-time in a fixed frame instead of the process timezone.

use chrono::{Local, NaiveDateTime, Utc};

/// Source of the current reference time
pub trait Clock {
    fn now(&self) -> NaiveDateTime;
}

/// Which frame the system clock reports in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Frame {
    #[default]
    Utc,
    Local,
}

/// Wall clock of the running host
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock {
    frame: Frame,
}

impl SystemClock {
    /// Current time in UTC (default)
    pub fn utc() -> Self {
        Self { frame: Frame::Utc }
    }

    /// Current time in the host's local timezone
    pub fn local() -> Self {
        Self { frame: Frame::Local }
    }
}

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        match self.frame {
            Frame::Utc => Utc::now().naive_utc(),
            Frame::Local => Local::now().naive_local(),
        }
    }
}

/// Clock frozen at a given instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}
