use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use recase::cli::output::{write_conversions, write_demo, OutputFormat};
use recase::{Case, Config, Conversion};
use std::io::{self, IsTerminal, Write};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "recase")]
#[command(version, about = "Convert strings to kebab-case, camelCase or dot.case", long_about = None)]
struct Cli {
    /// Strings to convert (use `--` before inputs that start with a hyphen)
    #[arg(value_name = "INPUTS")]
    inputs: Vec<String>,

    /// Case to convert to (kebab, camel, dot)
    #[arg(short, long, env = "RECASE_CASE")]
    case: Option<Case>,

    /// Output format (text, json)
    #[arg(short = 'o', long, default_value = "text")]
    format: OutputFormat,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,

    /// Generate shell completion script
    #[arg(long, value_name = "SHELL")]
    completion: Option<Shell>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show sample conversions for every case
    Demo,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout only carries converted values
    let directive = if cli.verbose { "recase=debug" } else { "recase=warn" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(directive.parse()?))
        .with_writer(io::stderr)
        .init();

    // Handle shell completion generation
    if let Some(shell) = cli.completion {
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, "recase", &mut io::stdout());
        return Ok(());
    }

    let config = Config::load(cli.case)?;
    let colored_output = !cli.no_color && config.color;
    if !colored_output {
        colored::control::set_override(false);
    }

    let mut stdout = io::stdout().lock();
    let interactive = stdout.is_terminal();

    if let Some(Commands::Demo) = cli.command {
        write_demo(&mut stdout, colored_output)?;
        stdout.flush()?;
        return Ok(());
    }

    if cli.inputs.is_empty() {
        anyhow::bail!("No input specified. Use --help for usage information.");
    }

    debug!(case = %config.default_case, count = cli.inputs.len(), "converting inputs");
    let conversions: Vec<Conversion> = cli
        .inputs
        .into_iter()
        .map(|input| Conversion::new(input, config.default_case))
        .collect();

    write_conversions(&mut stdout, &conversions, interactive, cli.format)?;
    stdout.flush()?;

    Ok(())
}
