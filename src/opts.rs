use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// On-screen analog joystick demo for touch screens.
///
/// Touch the left third of the window to use the joystick. The current
/// output is printed on the terminal.
#[derive(Debug, Parser)]
#[command(author, version, about)]
pub struct Opts {
    #[command(subcommand)]
    pub cmd: Option<Cmd>,
}

#[derive(Debug, Subcommand)]
pub enum Cmd {
    /// Validate the syntax of a settings file.
    Validate(Validate),
    /// Run the demo window.
    Run(Run),
}

#[derive(Debug, Args)]
pub struct Run {
    /// Settings file to use, built-in defaults otherwise.
    pub settings_file: Option<PathBuf>,
    /// Drive the joystick with the left mouse button too.
    #[arg(short, long)]
    pub mouse: bool,
}

#[derive(Debug, Args)]
pub struct Validate {
    pub settings_file: PathBuf,
}
