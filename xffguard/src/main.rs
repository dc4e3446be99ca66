use clap::{Parser, Subcommand};
use xffguard_core::cli;
use xffguard_core::logging::{LogFormat, default_log_format, init_logging};

#[derive(Parser, Debug)]
#[command(
    name = "xffguard",
    version,
    about = "xffguard: forwarded-for chain sanitizer"
)]
struct Cli {
    /// Log output format (defaults to pretty on a terminal, json otherwise)
    #[arg(long, value_enum, global = true)]
    log_format: Option<LogFormat>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Configuration tooling
    Config {
        #[command(subcommand)]
        cmd: cli::conf::ConfigCmd,
    },

    /// Run request headers through the sanitizer and print the result
    Rewrite(cli::rewrite::RewriteArgs),
}

fn main() {
    let cli = Cli::parse();

    init_logging(cli.log_format.unwrap_or_else(default_log_format));

    let result = match cli.command {
        Command::Config { cmd } => cli::conf::run(cmd),
        Command::Rewrite(args) => cli::rewrite::run(args),
    };

    if let Err(e) = result {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
