use crate::constants::CONVERGENCE_TOLERANCE;
use crate::errors::SimulationError;
use crate::telemetry_system::telemetry::{
    format_drag_coefficient, format_velocity, Telemetry, VelocitySample,
};
use crate::trajectory_system::aerodynamics::Aerodynamics;
use crate::trajectory_system::kinematics::FallState;

use super::parameters::SimulationParameters;

#[derive(PartialEq, Debug, Clone)]
pub enum Termination {
    // The velocity plateaued within tolerance before the horizon
    Converged,
    // The step cap was reached while the body was still accelerating
    Exhausted,
}

#[derive(Clone, Debug)]
pub struct SimulationResult {
    pub terminal_velocity: f64,
    pub drag_coefficient: f64,
    pub time_series: Vec<VelocitySample>,
    pub termination: Termination,
}

impl SimulationResult {
    pub fn display_summary(&self) {
        println!("--- Fall Simulation Summary ---");
        println!(
            "Terminal Velocity: {}",
            format_velocity(self.terminal_velocity)
        );
        println!(
            "Drag Coefficient: {}",
            format_drag_coefficient(self.drag_coefficient)
        );
        println!("Samples Recorded: {}", self.time_series.len());
        println!("Termination: {:?}", self.termination);

        println!("\n--- Velocity Trace ---");
        let stride = (self.time_series.len() / 10).max(1);
        for sample in self.time_series.iter().step_by(stride) {
            println!(
                "t = {:>8.2} s | v = {}",
                sample.time,
                format_velocity(sample.velocity)
            );
        }
        if let Some(last) = self.time_series.last() {
            println!(
                "t = {:>8.2} s | v = {} (final)",
                last.time,
                format_velocity(last.velocity)
            );
        }
    }
}

// Runs one fall from rest to either velocity convergence or the 100 s
// horizon. Validates the parameters up front so the integration loop only
// ever sees usable values.
pub fn simulate(params: &SimulationParameters) -> Result<SimulationResult, SimulationError> {
    params.validate()?;

    let aerodynamics = Aerodynamics::new(params.air_density, params.area);
    let mut state = FallState::new(params.initial_height);
    let step_cap = params.step_cap();
    let window = params.convergence_window();
    let mut telemetry = Telemetry::with_capacity(step_cap);
    let mut termination = Termination::Exhausted;

    while state.step_index < step_cap {
        state.advance(&aerodynamics, params.mass, params.gravity, params.time_step);
        telemetry.record(state.elapsed_time, state.velocity);

        // Compare against the sample exactly one window earlier. The guard
        // also keeps the lookback index in range.
        let newest = state.step_index - 1;
        if newest > window {
            let reference = telemetry.velocity_at(newest - window);
            if (state.velocity - reference).abs() < CONVERGENCE_TOLERANCE {
                termination = Termination::Converged;
                break;
            }
        }
    }

    let terminal_velocity = state.velocity;
    if terminal_velocity == 0.0 || !terminal_velocity.is_finite() {
        return Err(SimulationError::DegenerateResult(format!(
            "terminal velocity of {} m/s leaves the drag coefficient undefined",
            terminal_velocity
        )));
    }

    let drag_coefficient =
        aerodynamics.calculate_drag_coefficient(params.mass, params.gravity, terminal_velocity);
    if !drag_coefficient.is_finite() {
        return Err(SimulationError::DegenerateResult(format!(
            "drag coefficient diverged, got {}",
            drag_coefficient
        )));
    }

    log::debug!(
        "fall finished {:?} after {} steps, terminal velocity {:.4} m/s",
        termination,
        telemetry.len(),
        terminal_velocity
    );

    Ok(SimulationResult {
        terminal_velocity,
        drag_coefficient,
        time_series: telemetry.into_series(),
        termination,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::GRAVITY;
    use approx::assert_relative_eq;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_rejects_invalid_parameters_before_running() {
        let mut params = SimulationParameters::default();
        params.mass = 0.5;

        let result = simulate(&params);

        assert!(matches!(
            result,
            Err(SimulationError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_zero_gravity_yields_degenerate_result() {
        let mut params = SimulationParameters::default();
        params.gravity = 0.0;

        // Nothing accelerates the body, so velocity stays at zero and the
        // coefficient division would blow up
        let result = simulate(&params);

        assert!(matches!(
            result,
            Err(SimulationError::DegenerateResult(_))
        ));
    }

    #[test]
    fn test_non_finite_velocity_yields_degenerate_result() {
        let mut params = SimulationParameters::default();
        params.mass = 1.0e308;

        // Weight overflows on the first step, so no recorded velocity is
        // finite and the coefficient back-solve has nothing to work with
        let error = simulate(&params).unwrap_err();
        let message = error.to_string();

        assert!(matches!(error, SimulationError::DegenerateResult(_)));
        assert!(
            message.contains("terminal velocity"),
            "Non-finite velocities should be reported as degenerate, got: {}",
            message
        );
    }

    #[test]
    fn test_non_finite_coefficient_yields_degenerate_result() {
        let mut params = SimulationParameters::default();
        params.mass = 1.0e307;

        // The fall itself stays finite at this mass, but 2·m·g overflows
        // in the coefficient numerator
        let error = simulate(&params).unwrap_err();
        let message = error.to_string();

        assert!(matches!(error, SimulationError::DegenerateResult(_)));
        assert!(
            message.contains("diverged"),
            "An overflowing coefficient should be reported as degenerate, got: {}",
            message
        );
    }

    #[test]
    fn test_converged_run_stops_before_the_horizon() {
        let params = SimulationParameters::new(1.225, 100.0, 1.5, 1_000.0, 0.01);

        let result = simulate(&params).expect("light object should simulate cleanly");

        assert_eq!(result.termination, Termination::Converged);
        assert_eq!(result.time_series.len(), 1811);
        assert!(result.time_series.len() < params.step_cap());
        assert_relative_eq!(
            result.terminal_velocity,
            32.675318795874404,
            epsilon = EPSILON
        );
        assert_relative_eq!(
            result.drag_coefficient,
            1.0000736586708208,
            epsilon = EPSILON
        );
    }

    #[test]
    fn test_exhausted_run_records_the_full_horizon() {
        let params = SimulationParameters::default();

        let result = simulate(&params).expect("default scenario should simulate cleanly");

        assert_eq!(result.termination, Termination::Exhausted);
        assert_eq!(result.time_series.len(), params.step_cap());
        assert_eq!(result.time_series.len(), 10_000);
        assert_relative_eq!(
            result.terminal_velocity,
            325.1584483134156,
            epsilon = EPSILON
        );
        assert_relative_eq!(
            result.drag_coefficient,
            1.009907437300675,
            epsilon = EPSILON
        );
    }

    #[test]
    fn test_first_sample_matches_one_gravity_step() {
        let params = SimulationParameters::default();

        let result = simulate(&params).expect("default scenario should simulate cleanly");
        let first = result.time_series[0];

        assert_relative_eq!(first.time, params.time_step, epsilon = EPSILON);
        assert_relative_eq!(
            first.velocity,
            GRAVITY * params.time_step,
            epsilon = EPSILON
        );
    }

    #[test]
    fn test_terminal_velocity_equals_last_sample() {
        let params = SimulationParameters::new(1.225, 100.0, 1.5, 1_000.0, 0.01);

        let result = simulate(&params).expect("light object should simulate cleanly");
        let last = result
            .time_series
            .last()
            .expect("series should not be empty");

        assert_eq!(result.terminal_velocity, last.velocity);
    }
}
