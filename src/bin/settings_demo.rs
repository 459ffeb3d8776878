use tintlog::logger::*;
use tintlog::settings::*;

fn main() -> anyhow::Result<()> {
    // $ TINTLOG__LOG__LEVEL=warn cargo run --bin settings_demo
    let project_settings = parse_settings()?;
    println!("Loaded settings: {:?}", project_settings);

    let logger = logger();
    logger.reload_from_config(&project_settings.log)?;
    info!("info log");
    warn!("warn log");
    println!("Current level: {}", current_level());

    Ok(())
}
