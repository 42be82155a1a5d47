mod app;
mod args;
mod commands;
mod core;
mod input;
mod ui;
mod util;
mod views;

use anyhow::Result;
use crossterm::style::Stylize;

use crate::ui::interaction::UserCancelled;

fn main() -> Result<()> {
    if let Err(err) = app::run() {
        if err.downcast_ref::<UserCancelled>().is_some() {
            eprintln!("\n{}", "Cancelled.".red().bold());
            std::process::exit(1);
        }
        return Err(err);
    }
    Ok(())
}
