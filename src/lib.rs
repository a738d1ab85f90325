pub mod config;
pub mod desktop;
pub mod gui;
pub mod settings;
pub mod switcher;
