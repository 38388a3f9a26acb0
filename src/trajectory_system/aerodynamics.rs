#[derive(Debug, Clone, Copy)]
pub struct Aerodynamics {
    pub air_density: f64,
    pub area: f64,
}

impl Aerodynamics {
    pub fn new(air_density: f64, area: f64) -> Self {
        Aerodynamics { air_density, area }
    }

    // Quadratic drag along the fall axis. The v * |v| form keeps the force
    // opposed to the direction of motion, so an upward-moving body is still
    // slowed rather than pushed.
    pub fn calculate_drag(&self, velocity: f64) -> f64 {
        0.5 * self.air_density * self.area * velocity * velocity.abs()
    }

    // Drag coefficient implied by a force balance at the given terminal
    // velocity: m·g = 0.5·Cd·ρ·A·v². Undefined for zero velocity; callers
    // guard against that before dividing.
    pub fn calculate_drag_coefficient(
        &self,
        mass: f64,
        gravity: f64,
        terminal_velocity: f64,
    ) -> f64 {
        (2.0 * mass * gravity) / (self.air_density * self.area * terminal_velocity.powi(2))
    }
}
