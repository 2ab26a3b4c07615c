mod app;
mod config;
mod error;
mod gl;
mod platform;
mod renderer;

use config::Config;
use log::error;
use platform::native::GlutinPlatform;
use std::process;

fn main() {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let mut platform = GlutinPlatform::new();
    if let Err(err) = app::run(&mut platform, &Config::default()) {
        error!("{}", err);
        process::exit(1);
    }
}
