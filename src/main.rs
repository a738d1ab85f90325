use std::{
    any::Any,
    io::stdin,
    panic::{self, AssertUnwindSafe},
};

use eframe::{egui::vec2, run_native, NativeOptions};
use mevo_switcher::{
    config::{Config, WINDOW_TITLE},
    gui,
};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

fn enable_logger() {
    let default_level = if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    let subscriber = tracing_subscriber::fmt()
        .compact()
        .with_target(true)
        .with_env_filter(filter)
        .finish();

    if let Err(error) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("failed to install logger: {error}");
    }
}

fn panic_reason(payload: &(dyn Any + Send)) -> String {
    if let Some(reason) = payload.downcast_ref::<&str>() {
        reason.to_string()
    } else if let Some(reason) = payload.downcast_ref::<String>() {
        reason.clone()
    } else {
        "unknown error".into()
    }
}

fn main() {
    enable_logger();
    info!("mevo switcher {}", env!("CARGO_PKG_VERSION"));

    let config = Config::default();

    let mut options = NativeOptions::default();
    options.initial_window_size = Some(vec2(400.0, 150.0));
    options.always_on_top = true;
    options.resizable = false;

    let result = panic::catch_unwind(AssertUnwindSafe(move || {
        run_native(
            WINDOW_TITLE,
            options,
            Box::new(move |cc| Box::new(gui::SwitcherApp::new(cc, config))),
        );
    }));

    if let Err(payload) = result {
        let reason = panic_reason(payload.as_ref());
        error!(%reason, "startup failed");

        println!("CRITICAL CRASH: {reason}");
        println!("Press Enter to close...");

        let mut line = String::new();
        if let Err(error) = stdin().read_line(&mut line) {
            warn!(%error, "could not wait for Enter");
        }
    }
}
