use super::aerodynamics::Aerodynamics;

// Velocity is positive downward, so altitude decreases as velocity grows.
#[derive(Debug, Clone, Copy)]
pub struct FallState {
    pub velocity: f64,     // m/s
    pub altitude: f64,     // m
    pub elapsed_time: f64, // s
    pub step_index: usize,
}

impl FallState {
    pub fn new(initial_height: f64) -> Self {
        FallState {
            velocity: 0.0,
            altitude: initial_height,
            elapsed_time: 0.0,
            step_index: 0,
        }
    }

    // One forward-Euler step: drag is evaluated at the current velocity,
    // then velocity, altitude and clock advance in that order.
    pub fn advance(
        &mut self,
        aerodynamics: &Aerodynamics,
        mass: f64,
        gravity: f64,
        time_step: f64,
    ) {
        let drag_force = aerodynamics.calculate_drag(self.velocity);
        let net_force = mass * gravity - drag_force;
        let acceleration = net_force / mass;

        self.velocity += acceleration * time_step;
        self.altitude -= self.velocity * time_step;
        self.elapsed_time += time_step;
        self.step_index += 1;
    }
}
