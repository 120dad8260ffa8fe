// fmtgen CLI entry point

use clap::Parser;
use fmtgen_cli::{error::EXIT_SUCCESS, init_logging, output, Cli, CommandRouter, VerbosityLevel};

fn main() {
    let cli = Cli::parse();
    let verbosity = init_logging(cli.verbose, cli.quiet);

    match CommandRouter::execute(&cli) {
        Ok(run) => {
            if let Some(document) = &run.document {
                println!("{}", document);
            } else if verbosity > VerbosityLevel::Quiet {
                output::print_success(&run.report.summary());
                if verbosity == VerbosityLevel::Verbose {
                    let style = output::OutputStyle::default();
                    for name in &run.report.enum_names {
                        println!("{}", style.list_item(name.as_str()));
                    }
                }
            }
            std::process::exit(EXIT_SUCCESS);
        }
        Err(e) => {
            if e.is_warning() {
                output::print_warning(&e.user_message());
            } else if verbosity == VerbosityLevel::Verbose {
                let style = output::OutputStyle::default();
                eprintln!("{}", style.error_verbose(&e.user_message(), &e.technical_details()));
            } else {
                output::print_error(&e.user_message());
            }
            std::process::exit(e.exit_code());
        }
    }
}
