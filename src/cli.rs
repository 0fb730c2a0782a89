//! Command-line startup
//!
//! Usage: `shape-bounce [CONFIG] [SETTINGS]` or `shape-bounce --check [CONFIG]`

use std::process::ExitCode;

use thiserror::Error;

use crate::app::{App, AppError};
use crate::consts::{DEFAULT_CONFIG_PATH, DEFAULT_SETTINGS_PATH};
use crate::{Scene, SceneError, Settings};

#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Scene(#[from] SceneError),
    #[error(transparent)]
    App(#[from] AppError),
    #[error("could not serialize scene: {0}")]
    Json(#[from] serde_json::Error),
}

/// Parsed command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Args {
    pub check_only: bool,
    pub config_path: String,
    pub settings_path: String,
}

impl Args {
    pub fn parse(mut args: Vec<String>) -> Self {
        let check_only = args.first().is_some_and(|a| a == "--check");
        if check_only {
            args.remove(0);
        }
        let mut args = args.into_iter();
        Self {
            check_only,
            config_path: args.next().unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string()),
            settings_path: args.next().unwrap_or_else(|| DEFAULT_SETTINGS_PATH.to_string()),
        }
    }
}

/// Load the scene, then either dump it as JSON or open the window
pub fn try_run(args: &Args) -> Result<(), CliError> {
    log::info!("Shape Bounce starting with {}", args.config_path);
    let scene = Scene::load(&args.config_path)?;

    if args.check_only {
        println!("{}", serde_json::to_string_pretty(&scene)?);
        return Ok(());
    }

    let settings = Settings::load(&args.settings_path);
    App::new(scene, settings).run()?;
    Ok(())
}

/// Process exit status for a run result
pub fn exit_status(result: &Result<(), CliError>) -> u8 {
    match result {
        Ok(()) => 0,
        Err(_) => 1,
    }
}

pub fn run(args: Vec<String>) -> ExitCode {
    let result = try_run(&Args::parse(args));
    if let Err(e) = &result {
        log::error!("{}", e);
        eprintln!("error: {}", e);
    }
    ExitCode::from(exit_status(&result))
}
