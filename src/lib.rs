use shadow_rs::shadow;

shadow!(build);

pub mod cli;
pub mod command;
pub mod config;
pub mod controller;
pub mod error;
pub mod formatter;
pub mod history;
pub mod logging;
pub mod navigator;
pub mod resolver;
pub mod shell;
pub mod version;
