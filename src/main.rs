use fall_simulation::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let params = SimulationParameters::default();
    log::info!(
        "Dropping a {} kg object with {} m² of frontal area from {} m",
        params.mass,
        params.area,
        params.initial_height
    );

    let result = simulate(&params)?;
    result.display_summary();

    Ok(())
}
