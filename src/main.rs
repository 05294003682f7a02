use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use jsonvet::cmd::run::{RunCommandArgs, run};

#[derive(Debug, Parser)]
#[command(name = "jsonvet", version, about = "Declarative JSON assertion test runner")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Run a YAML test suite and report every failure across all cases.
    Run(RunArgs),
}

#[derive(Debug, clap::Args)]
struct RunArgs {
    /// Path to the suite description.
    #[arg(long)]
    suite: PathBuf,

    /// Directory that `resource` payload paths resolve against.
    #[arg(long)]
    resources: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();
    let response = match cli.command {
        Commands::Run(args) => run(&RunCommandArgs {
            suite: args.suite,
            resources: args.resources,
        }),
    };

    match serde_json::to_string_pretty(&response.payload) {
        Ok(rendered) => println!("{rendered}"),
        Err(error) => {
            eprintln!("failed to render report: {error}");
            process::exit(1);
        }
    }
    process::exit(response.exit_code);
}
