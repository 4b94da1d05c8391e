use anyhow::Result;
use clap::Parser;
use cpc::Args;
use std::io::Write;

fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format(|buf, record| match record.level() {
            log::Level::Error => writeln!(buf, "Error: {}", record.args()),
            log::Level::Warn => writeln!(buf, "Warning: {}", record.args()),
            level => writeln!(buf, "[{level}] {}", record.args()),
        })
        .init();
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    init_logging();

    let args = Args::parse();
    cpc::run(&args)?;
    Ok(())
}
