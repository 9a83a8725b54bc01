use std::fs;

use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use log::{info, warn};

use gravegrid::supply::{JsonYardSupplier, SyntheticYardSupplier, YardSupplier};
use gravegrid_cli::config::GraveGridConfig;
use gravegrid_cli::io;
use gravegrid_cli::io::cli::Cli;

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let config = match args.config_file {
        None => {
            warn!("[MAIN] No config file provided, use --config-file to provide a custom config");
            GraveGridConfig::default()
        }
        Some(config_file) => io::read_config(&config_file)?,
    };

    info!("[MAIN] Successfully parsed GraveGridConfig: {config:?}");

    if !args.output_folder.exists() {
        fs::create_dir_all(&args.output_folder).with_context(|| {
            format!(
                "could not create output folder: {}",
                args.output_folder.display()
            )
        })?;
    }

    let (ext_yard, stem) = match &args.input_file {
        Some(input_file) => {
            let stem = input_file
                .file_stem()
                .and_then(|s| s.to_str())
                .context("input file has no valid name")?
                .to_string();
            (JsonYardSupplier::new(input_file).extract()?, stem)
        }
        None => {
            warn!(
                "[MAIN] No input file provided, generating a synthetic yard (seed: {})",
                config.synthetic.seed
            );
            let stem = format!("synthetic_{}", config.synthetic.seed);
            (SyntheticYardSupplier::new(config.synthetic).extract()?, stem)
        }
    };

    let output = gravegrid_cli::run(ext_yard, config, &stem, &args.output_folder)?;
    info!(
        "[MAIN] placed {} graves in {}",
        output.result.graves.len(),
        stem
    );

    Ok(())
}
