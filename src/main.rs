// src/main.rs
use std::env;
use std::ffi::OsString;
use std::process;

use log::info;

use regnum_platformer::{GameConfig, PlatformerTemplate, RegnumError};

fn main() -> Result<(), RegnumError> {
    env_logger::init();
    info!("Starting Regnum platformer scaffold...");

    // Fixed scaffold configuration; no flags or files are read here.
    let game = PlatformerTemplate::new(GameConfig::default())?;

    // Process arguments belong to the engine; forward them untouched.
    let args: Vec<OsString> = env::args_os().skip(1).collect();
    process::exit(game.run(&args))
}
