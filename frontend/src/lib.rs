pub mod app;
pub mod components;
pub mod config;
pub mod content;
pub mod device;
pub mod error;
pub mod handoff;
pub mod pages;
pub mod presentation;
pub mod state;
pub mod utils;

#[cfg(test)]
mod test_support;

#[cfg(target_arch = "wasm32")]
fn init_logging(level: log::Level) {
    if let Err(err) = console_log::init_with_level(level) {
        web_sys::console::warn_1(&format!("logger already installed: {}", err).into());
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn init_logging(_level: log::Level) {}

pub fn start() {
    console_error_panic_hook::set_once();
    let site = config::current();
    init_logging(site.log_level());
    log::info!("Starting {} landing page (wasm)", site.business_name);

    app::mount_app();
}
