use anyhow::Context;
use log::LevelFilter;
use sensor::Sensor;
use signal::{SEED, SeededNoise};
use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode};
use summary::Summary;
use timeline::{SPAN_DAYS, Timeline};

mod data_file;
mod measurement;
mod sensor;
mod signal;
mod summary;
mod timeline;

fn main() -> Result<(), anyhow::Error> {
    TermLogger::init(
        LevelFilter::Info,
        ConfigBuilder::new()
            .set_time_format_rfc3339()
            .set_time_offset_to_local()
            .map_err(|_| anyhow::anyhow!("Failed to set time offset to local"))?
            .build(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )
    .context("Failed to initialize logger")?;

    if let Err(e) = run() {
        log::error!("{e:#}");
        return Err(e);
    }

    Ok(())
}

pub fn run() -> Result<(), anyhow::Error> {
    log::info!("Starting smart office simulation");

    let timeline = Timeline::new();
    log::info!(
        "Generated {} timestamps over {SPAN_DAYS} days",
        timeline.len()
    );

    log::info!("Simulating sensor data");
    let mut sensor = Sensor::new(SeededNoise::new(SEED));
    let measurements = sensor.simulate(timeline);

    log::info!("Writing {}", data_file::DATA_FILE);
    data_file::write_all(data_file::DATA_FILE, &measurements)
        .context("Failed to write simulated data")?;

    print!("{}", Summary::from_measurements(&measurements));

    log::info!(
        "Simulation complete, data saved to {}",
        data_file::DATA_FILE
    );

    Ok(())
}
