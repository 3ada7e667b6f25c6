//! Release velocity estimation for pointer drags.
//!
//! Uses the impulse strategy: the velocity is derived from the kinetic energy
//! the pointer imparted over the last few samples, which is robust to the
//! uneven sample spacing terminal mouse reports produce.

/// Ring buffer size
const HISTORY_SIZE: usize = 20;

/// Only samples this recent take part in the estimate
const HORIZON_MS: i64 = 100;

/// A gap this long between samples means the pointer had stopped
pub const ASSUME_STOPPED_MS: i64 = 40;

#[derive(Debug, Clone, Copy)]
struct Sample {
    time_ms: i64,
    position: f64,
}

/// 1D velocity tracker over absolute positions
#[derive(Debug, Clone)]
pub struct VelocityTracker1D {
    samples: [Option<Sample>; HISTORY_SIZE],
    index: usize,
}

impl Default for VelocityTracker1D {
    fn default() -> Self {
        Self::new()
    }
}

impl VelocityTracker1D {
    pub fn new() -> Self {
        Self {
            samples: [None; HISTORY_SIZE],
            index: 0,
        }
    }

    pub fn add_position(&mut self, time_ms: i64, position: f64) {
        self.index = (self.index + 1) % HISTORY_SIZE;
        self.samples[self.index] = Some(Sample { time_ms, position });
    }

    /// Velocity in position units per second; 0.0 with fewer than two usable samples
    pub fn velocity(&self) -> f64 {
        let Some(newest) = self.samples[self.index] else {
            return 0.0;
        };

        // Newest first
        let mut positions = Vec::with_capacity(HISTORY_SIZE);
        let mut times = Vec::with_capacity(HISTORY_SIZE);
        let mut cursor = self.index;
        let mut previous_time = newest.time_ms;

        while let Some(sample) = self.samples[cursor] {
            let age = newest.time_ms - sample.time_ms;
            let gap = (previous_time - sample.time_ms).abs();
            if age > HORIZON_MS || gap > ASSUME_STOPPED_MS {
                break;
            }
            previous_time = sample.time_ms;

            positions.push(sample.position);
            times.push(-age as f64);

            if positions.len() == HISTORY_SIZE {
                break;
            }
            cursor = (cursor + HISTORY_SIZE - 1) % HISTORY_SIZE;
        }

        if positions.len() < 2 {
            return 0.0;
        }

        impulse_velocity(&positions, &times) * 1000.0
    }

    pub fn reset(&mut self) {
        self.samples = [None; HISTORY_SIZE];
        self.index = 0;
    }
}

/// Velocity per millisecond from newest-first samples
fn impulse_velocity(positions: &[f64], times: &[f64]) -> f64 {
    let oldest = positions.len() - 1;
    let mut work = 0.0;

    for i in (1..=oldest).rev() {
        let dt = times[i - 1] - times[i];
        if dt == 0.0 {
            continue;
        }
        let v_curr = (positions[i - 1] - positions[i]) / dt;
        let v_prev = energy_to_velocity(work);
        work += (v_curr - v_prev) * v_curr.abs();
        if i == oldest {
            work *= 0.5;
        }
    }

    energy_to_velocity(work)
}

/// E = 0.5 * v^2 with unit mass
#[inline]
fn energy_to_velocity(energy: f64) -> f64 {
    energy.signum() * (2.0 * energy.abs()).sqrt()
}
