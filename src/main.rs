mod assets;
mod components;
mod config;
mod error;
mod model;
mod render;
mod state;
mod surface;
mod util;

use components::app::{App, AppProps};
use config::ViewerConfig;
use log::LevelFilter;

fn main() {
    // Logger first so config warnings are visible.
    util::init_logger(LevelFilter::Info);
    let config = ViewerConfig::load();
    log::set_max_level(config.log_level());
    yew::Renderer::<App>::with_props(AppProps { config }).render();
}
