#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VelocitySample {
    pub time: f64,     // s
    pub velocity: f64, // m/s
}

// Per-run velocity recorder. The simulation loop appends one sample per
// integration step and reads old samples back for its convergence check.
pub struct Telemetry {
    samples: Vec<VelocitySample>,
}

impl Telemetry {
    pub fn new() -> Self {
        Telemetry {
            samples: Vec::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Telemetry {
            samples: Vec::with_capacity(capacity),
        }
    }

    pub fn record(&mut self, time: f64, velocity: f64) {
        self.samples.push(VelocitySample { time, velocity });
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn velocity_at(&self, index: usize) -> f64 {
        self.samples[index].velocity
    }

    pub fn last_velocity(&self) -> Option<f64> {
        self.samples.last().map(|sample| sample.velocity)
    }

    pub fn into_series(self) -> Vec<VelocitySample> {
        self.samples
    }
}

impl Default for Telemetry {
    fn default() -> Self {
        Telemetry::new()
    }
}

pub fn format_velocity(velocity: f64) -> String {
    format!("{:.2} m/s", velocity)
}

pub fn format_drag_coefficient(coefficient: f64) -> String {
    format!("{:.2}", coefficient)
}
