use anyhow::Result;
use clap::Parser;
use md_reformat::config::{Args, Config};

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&args.log_level))
        .format_timestamp(None)
        .format_target(false)
        .init();

    let config = Config::from_args(args).inspect_err(|e| log::error!("{:#}", e))?;
    md_reformat::run(&config)?;

    Ok(())
}
