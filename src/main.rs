use clap::Parser;

use line_tally::cli::{Cli, Commands};
use line_tally::commands::{run_detailed, run_languages};
use line_tally::logging::{self, Verbosity};

fn main() {
    let cli = Cli::parse();
    logging::init(Verbosity::from_flags(cli.verbose, cli.quiet));

    let exit_code = match &cli.command {
        Commands::Languages(args) => run_languages(args, &cli),
        Commands::Detailed(args) => run_detailed(args, &cli),
    };

    std::process::exit(exit_code);
}
