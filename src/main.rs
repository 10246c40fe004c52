mod app;
mod assets;
mod components;
mod logging;
mod motion;
mod pages;
mod timers;

use app::App;

fn main() {
    logging::init(&cardreveal_core::default_config().logging.level);
    leptos::mount::mount_to_body(App);
}
