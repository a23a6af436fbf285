//! Play snake in a window.
//!
//! Optionally pass the path to a TOML configuration file as the first argument.

use miette::Result;
use pixel_snake::Config;

fn main() -> Result<()> {
    // Enable environment logger, `RUST_LOG=debug` shows the setup steps
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match std::env::args_os().nth(1) {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    pixel_snake::run(config)
}
