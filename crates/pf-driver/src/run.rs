//! Fixed-count coupling loop over a [`HeatFluidsDriver`].

use crate::driver::HeatFluidsDriver;
use crate::error::{DriverError, DriverResult};
use pf_core::Timer;
use tracing::info;

/// Outer loop counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSchedule {
    pub timesteps: usize,
    /// Coupling iterations per timestep
    pub iterations: usize,
}

impl Default for RunSchedule {
    fn default() -> Self {
        Self {
            timesteps: 1,
            iterations: 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunOutcome {
    pub solves: usize,
    pub elapsed_s: f64,
}

/// Runs `timesteps x iterations` solves, requesting an intermediate snapshot
/// after each solve and the final snapshot once at the end.
pub fn run_schedule<D: HeatFluidsDriver + ?Sized>(
    driver: &mut D,
    schedule: &RunSchedule,
) -> DriverResult<RunOutcome> {
    if schedule.timesteps == 0 || schedule.iterations == 0 {
        return Err(DriverError::InvalidInput {
            what: "timesteps and iterations must be at least 1".to_string(),
        });
    }

    let timer = Timer::start("run_schedule");
    let mut solves = 0;
    for t in 0..schedule.timesteps {
        driver.init_step()?;
        for i in 0..schedule.iterations {
            driver.solve_step()?;
            solves += 1;
            driver.write_step(t as i64, i as i64)?;
        }
        driver.finalize_step()?;
    }
    let last = schedule.timesteps as i64 - 1;
    driver.write_step(last, -1)?;

    let elapsed_s = timer.stop();
    info!(solves, elapsed_s, "Run complete");
    Ok(RunOutcome { solves, elapsed_s })
}
