//! Create summary plot of DENSS run for use with DENSSWeb

use clap::Parser;
use denssweb_charts::cli::summary::SummaryArgs;
use denssweb_charts::commands;
use denssweb_charts::utils::logging;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let args = SummaryArgs::parse();
    logging::init(args.verbose);

    if let Err(e) = commands::summary::execute(&args) {
        tracing::error!("{}", e.report());
        std::process::exit(1);
    }
}
