use anyhow::{Context, Result};
use datelabel::config::Config;
use datelabel::constants::USAGE;
use datelabel::logger;
use datelabel::DateLabelFormatter;
use std::path::PathBuf;

struct Args {
    config_path: Option<String>,
    /// `Some(None)` generates at the default config path
    generate_config: Option<Option<String>>,
    dates: Vec<String>,
}

fn parse_args() -> Result<Args> {
    let mut args = Args {
        config_path: None,
        generate_config: None,
        dates: Vec::new(),
    };

    let mut iter = std::env::args().skip(1).peekable();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--config" => args.config_path = Some(iter.next().context("--config requires a path")?),
            "--generate-config" => {
                let path = iter.next_if(|next| !next.starts_with("--"));
                args.generate_config = Some(path);
            }
            "-h" | "--help" => {
                println!("{}", USAGE);
                std::process::exit(0);
            }
            _ => args.dates.push(arg),
        }
    }

    Ok(args)
}

fn main() -> Result<()> {
    let args = parse_args()?;

    if let Some(path) = args.generate_config {
        let path = match path {
            Some(path) => PathBuf::from(path),
            None => Config::get_default_config_path()?,
        };
        return Config::generate_default_config(path);
    }

    let config = match &args.config_path {
        Some(path) => Config::load_from_file(path)?,
        None => Config::load()?,
    };
    logger::init(&config.logging)?;

    if args.dates.is_empty() {
        eprintln!("{}", USAGE);
        return Ok(());
    }

    let override_formatter = config.override_formatter();
    let formatter = override_formatter.as_ref().unwrap_or_else(|| DateLabelFormatter::shared());
    log::debug!("Formatting {} dates with locale {}", args.dates.len(), formatter.locale());

    // Invalid dates print an empty line; the failure itself is logged
    for date in &args.dates {
        println!("{}", formatter.format(date.as_str()));
    }

    Ok(())
}
