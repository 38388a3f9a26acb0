use crate::constants::{
    AIR_DENSITY_SEA_LEVEL, CONVERGENCE_WINDOW, DEFAULT_AREA, DEFAULT_INITIAL_HEIGHT, DEFAULT_MASS,
    DEFAULT_TIME_STEP, GRAVITY, MAX_AIR_DENSITY, MIN_AIR_DENSITY, MIN_AREA, MIN_INITIAL_HEIGHT,
    MIN_MASS, SIMULATION_HORIZON, TIME_STEP_OPTIONS,
};
use crate::errors::SimulationError;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationParameters {
    pub air_density: f64,    // kg/m³
    pub mass: f64,           // kg
    pub area: f64,           // m²
    pub initial_height: f64, // m
    pub time_step: f64,      // s
    pub gravity: f64,        // m/s²
}

impl SimulationParameters {
    pub fn new(
        air_density: f64,
        mass: f64,
        area: f64,
        initial_height: f64,
        time_step: f64,
    ) -> Self {
        SimulationParameters {
            air_density,
            mass,
            area,
            initial_height,
            time_step,
            gravity: GRAVITY,
        }
    }

    // Checks each boundary parameter independently and reports the first
    // violation. Non-finite values fail every range check explicitly since
    // NaN slips through plain comparisons.
    pub fn validate(&self) -> Result<(), SimulationError> {
        if !self.air_density.is_finite()
            || self.air_density < MIN_AIR_DENSITY
            || self.air_density > MAX_AIR_DENSITY
        {
            return Err(SimulationError::InvalidParameter(format!(
                "air density must be between {} and {} kg/m³, got {}",
                MIN_AIR_DENSITY, MAX_AIR_DENSITY, self.air_density
            )));
        }

        if !self.mass.is_finite() || self.mass < MIN_MASS {
            return Err(SimulationError::InvalidParameter(format!(
                "mass must be at least {} kg, got {}",
                MIN_MASS, self.mass
            )));
        }

        if !self.area.is_finite() || self.area < MIN_AREA {
            return Err(SimulationError::InvalidParameter(format!(
                "cross-sectional area must be at least {} m², got {}",
                MIN_AREA, self.area
            )));
        }

        if !self.initial_height.is_finite() || self.initial_height < MIN_INITIAL_HEIGHT {
            return Err(SimulationError::InvalidParameter(format!(
                "initial height must be at least {} m, got {}",
                MIN_INITIAL_HEIGHT, self.initial_height
            )));
        }

        if !TIME_STEP_OPTIONS.contains(&self.time_step) {
            return Err(SimulationError::InvalidParameter(format!(
                "time step must be one of {:?} s, got {}",
                TIME_STEP_OPTIONS, self.time_step
            )));
        }

        Ok(())
    }

    // Hard iteration limit for one run: 100 s of simulated time expressed
    // as a step count. Derived from the time step so that cap and window
    // stay coupled when the step changes.
    pub fn step_cap(&self) -> usize {
        (SIMULATION_HORIZON / self.time_step) as usize
    }

    // Convergence lookback of 1 s of simulated time, as a sample count.
    pub fn convergence_window(&self) -> usize {
        (CONVERGENCE_WINDOW / self.time_step) as usize
    }
}

impl Default for SimulationParameters {
    fn default() -> Self {
        SimulationParameters::new(
            AIR_DENSITY_SEA_LEVEL,
            DEFAULT_MASS,
            DEFAULT_AREA,
            DEFAULT_INITIAL_HEIGHT,
            DEFAULT_TIME_STEP,
        )
    }
}
