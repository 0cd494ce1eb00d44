//! Run statistics.
//!
//! Counts retired guest instructions and the host time spent executing them,
//! across every `cpu_exec` call of a session.

use std::fmt;
use std::time::Duration;

/// Accumulated execution statistics.
#[derive(Clone, Debug, Default)]
pub struct SimStats {
    /// Guest instructions retired.
    pub instructions_retired: u64,
    /// Host time spent inside `cpu_exec`.
    pub host_time: Duration,
}

impl SimStats {
    /// Guest instructions per host second, if any time has elapsed.
    pub fn frequency(&self) -> Option<u64> {
        let micros = self.host_time.as_micros();
        (micros > 0).then(|| (u128::from(self.instructions_retired) * 1_000_000 / micros) as u64)
    }
}

impl fmt::Display for SimStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "host time spent = {} us", self.host_time.as_micros())?;
        writeln!(f, "total guest instructions = {}", self.instructions_retired)?;
        match self.frequency() {
            Some(freq) => write!(f, "simulation frequency = {freq} inst/s"),
            None => write!(
                f,
                "Finish running in less than 1 us and can not calculate the simulation frequency"
            ),
        }
    }
}
