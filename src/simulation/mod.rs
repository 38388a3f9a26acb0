pub mod parameters;
pub mod simulator;
