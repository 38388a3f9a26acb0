// Physical Constants
pub const GRAVITY: f64 = 9.81; // m/s²
pub const AIR_DENSITY_SEA_LEVEL: f64 = 1.225; // kg/m³

// Solver Constants
pub const SIMULATION_HORIZON: f64 = 100.0; // s of simulated fall before giving up
pub const CONVERGENCE_WINDOW: f64 = 1.0; // s between compared velocity samples
pub const CONVERGENCE_TOLERANCE: f64 = 1e-3; // m/s

// Parameter Bounds
pub const MIN_AIR_DENSITY: f64 = 0.1; // kg/m³
pub const MAX_AIR_DENSITY: f64 = 2.0; // kg/m³
pub const MIN_MASS: f64 = 1.0; // kg
pub const MIN_AREA: f64 = 0.01; // m²
pub const MIN_INITIAL_HEIGHT: f64 = 1.0; // m

// Supported integration steps, in seconds
pub const TIME_STEP_OPTIONS: [f64; 5] = [0.001, 0.005, 0.01, 0.05, 0.1];

// Default Scenario
pub const DEFAULT_MASS: f64 = 10_000.0; // kg
pub const DEFAULT_AREA: f64 = 1.5; // m²
pub const DEFAULT_INITIAL_HEIGHT: f64 = 10_000.0; // m
pub const DEFAULT_TIME_STEP: f64 = 0.01; // s
