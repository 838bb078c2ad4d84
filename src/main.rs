use clap::Parser;

use applicant_insights::cli::{Cli, Commands};
use applicant_insights::commands::{run_config, run_export, run_init, run_report};
use applicant_insights::logging;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.quiet);

    let exit_code = match &cli.command {
        Commands::Report(args) => run_report(args, &cli),
        Commands::Export(args) => run_export(args, &cli),
        Commands::Init(args) => run_init(args, &cli),
        Commands::Config(args) => run_config(args, &cli),
    };

    std::process::exit(exit_code);
}
