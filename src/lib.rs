//! dbpilot - Terminal client for a natural-language SQL assistant

pub mod api;
pub mod cli;
pub mod config;
pub mod core;
pub mod session;
pub mod ui;
