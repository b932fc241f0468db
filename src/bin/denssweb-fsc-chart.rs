//! Create Fourier Shell Correlation (FSC) curve for use with DENSSWeb

use clap::Parser;
use denssweb_charts::cli::fsc::FscArgs;
use denssweb_charts::commands;
use denssweb_charts::utils::logging;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let args = FscArgs::parse();
    logging::init(args.verbose);

    if let Err(e) = commands::fsc::execute(&args) {
        tracing::error!("{}", e.report());
        std::process::exit(1);
    }
}
