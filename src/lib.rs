pub mod constants;
pub mod errors;
pub mod simulation;
pub mod telemetry_system;
pub mod trajectory_system;

pub use constants::*;
pub use errors::SimulationError;
pub use simulation::parameters::SimulationParameters;
pub use simulation::simulator::{simulate, SimulationResult, Termination};

// Re-export commonly used items from trajectory_system
pub use trajectory_system::aerodynamics::Aerodynamics;
pub use trajectory_system::kinematics::FallState;

// Re-export commonly used items from telemetry_system
pub use telemetry_system::telemetry::{Telemetry, VelocitySample};
