//! vasptraj 命令行入口

use clap::Parser;
use vasptraj::cli::Cli;
use vasptraj::{commands, utils};

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::new().filter_or("VASPTRAJ_LOG", cli.log_level()))
        .init();

    if let Err(e) = commands::run(cli.command) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
