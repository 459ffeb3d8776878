use tintlog::logger::*;

fn main() -> anyhow::Result<()> {
    build_logger(LEVEL_INFO);
    trace!("bootstrap trace log");
    debug!("bootstrap debug log");
    info!(level = current_level(), "bootstrap info log");

    let config = LogConfig {
        level: "debug".to_string(),
    };
    logger().reload_from_config(&config)?;
    debug!("application debug log");
    warn!(retries = 3, "application warn log");
    error!("application error log");
    dpanic!("application dpanic log");

    set_level(LEVEL_ERROR);
    info!("hidden info log");
    error!(level = current_level(), "still visible");

    Ok(())
}
