use std::thread;
use std::time::Duration;

use chrono::{TimeZone, Utc};
use snowflake::{Generator, GeneratorConfig, Snowflake};
use tracing_subscriber::EnvFilter;

const WORKER_ID: u16 = 1001;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let epoch = Utc
        .with_ymd_and_hms(2020, 1, 1, 0, 0, 0)
        .single()
        .ok_or("invalid epoch date")?;
    let config = GeneratorConfig::builder().epoch_at(epoch)?.build();
    println!("epoch: {}\n", config.epoch());

    let mut generator = Generator::with_config(WORKER_ID, config)?;

    for _ in 0..5 {
        print_id(generator.next()?, config.epoch());
    }

    println!("\n...\n");
    thread::sleep(Duration::from_secs(1));

    for _ in 0..5 {
        print_id(generator.next()?, config.epoch());
    }

    Ok(())
}

fn print_id(id: Snowflake, epoch: i64) {
    let human = id
        .datetime(epoch)
        .map(|dt| dt.to_rfc3339())
        .unwrap_or_else(|| "out of range".to_string());
    println!("  {id}  raw: {}, generated at: {human}", id.as_u64());
}
