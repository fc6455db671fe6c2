// Entrypoint for the CLI application.
// - Keeps `main` small: create a joke client and hand it to the UI loop.
// - Maps the top-level outcome to an exit code: 0 for a normal session
//   (including interrupt/EOF), 1 for an unexpected error.

use std::io;
use std::process::ExitCode;

use anyhow::Context;
use crossterm::style::Stylize;
use jokegen_cli::api::JokeClient;
use jokegen_cli::ui::{menu_loop, Screen};

fn main() -> ExitCode {
    env_logger::init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("Fatal error: {e:#}");
            eprintln!("{}", format!("Fatal error: {e:#}").red());
            ExitCode::FAILURE
        }
    }
}

fn run() -> anyhow::Result<()> {
    // Ctrl-C lands on the same farewell screen as choosing Exit.
    ctrlc::set_handler(|| {
        let mut screen = Screen::new(io::stdout());
        let _ = screen.display_farewell();
        std::process::exit(0);
    })
    .context("Failed to install interrupt handler")?;

    let api = JokeClient::new()?;
    let stdin = io::stdin();
    let mut screen = Screen::new(io::stdout());

    // Blocks until the user exits or stdin ends.
    menu_loop(&api, stdin.lock(), &mut screen)
}
