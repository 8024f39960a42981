pub mod commands;
pub mod config;
pub mod controller;
pub mod dispatcher;
pub mod display;
pub mod effects;
pub mod event;
pub mod io;
pub mod logging;
pub mod state;
pub mod upload;
