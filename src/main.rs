#[macro_use]
extern crate log;

mod cli;
mod log_utils;

use std::ffi::OsString;

use cli::CliOutcome;

fn main() -> anyhow::Result<()> {
    let argv: Vec<OsString> = std::env::args_os().collect();

    let cfg = match cli::handle_cli(&argv)? {
        CliOutcome::Run(cfg) => cfg,
        CliOutcome::Halt(h) => {
            print!("{}", h.text());
            std::process::exit(h.status())
        }
    };

    log_utils::init_log(cfg.verbosity())?;
    cli::log_config(&cfg, &argv);
    Ok(())
}
