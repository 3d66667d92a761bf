mod demo;
mod opts;

use std::{fs, path::Path};

use anyhow::{bail, Context};
use clap::Parser;
use log::warn;
use touchstick::config::{self, settings::Settings};

use crate::opts::{Cmd, Opts};

fn main() {
    std::panic::set_hook(Box::new(|p| {
        eprintln!("\ntouchstick crashed: {}", p);
    }));
    env_logger::init();

    if let Err(e) = do_main() {
        eprintln!("Error: {:?}", e);
        std::process::exit(1);
    }
}

fn do_main() -> anyhow::Result<()> {
    let opts = Opts::parse();

    match opts.cmd {
        Some(Cmd::Validate(v)) => {
            let content = read_settings(&v.settings_file)?;
            let errors = config::parse_file(&content, &mut Settings::default());
            if errors.is_empty() {
                println!("{} is valid", v.settings_file.display());
                return Ok(());
            }
            for e in &errors {
                eprintln!("Error parsing {}", e);
            }
            bail!("{} invalid line(s)", errors.len());
        }
        Some(Cmd::Run(r)) => {
            let settings = match r.settings_file {
                Some(ref path) => load_settings(path)?,
                None => Settings::default(),
            };
            demo::run(settings, r.mouse)
        }
        None => demo::run(Settings::default(), false),
    }
}

fn read_settings(path: &Path) -> anyhow::Result<String> {
    fs::read_to_string(path)
        .with_context(|| format!("opening settings file \"{}\"", path.display()))
}

fn load_settings(path: &Path) -> anyhow::Result<Settings> {
    let content = read_settings(path)?;
    let mut settings = Settings::default();
    for e in config::parse_file(&content, &mut settings) {
        warn!("ignoring {}", e);
    }
    Ok(settings)
}
