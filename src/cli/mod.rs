//! CLI module

pub mod commands;
pub mod shell;

pub fn run() -> anyhow::Result<()> {
    commands::run()
}
