use clap::Parser;
use degree_audit::{
    cli::commands::{
        analyze::AnalyzeCommand, fulfillment::FulfillmentCommand, list::ListCommand,
        CatalogSource, CommandHandler, CommandResult,
    },
    cli::{Cli, Commands, LogLevel},
    Result,
};
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn initialize_tracing(log_level: LogLevel) {
    // RUST_LOG overrides the flag when set
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level.to_filter_directive()));

    // Logs go to stderr; stdout carries only tables and JSON
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    initialize_tracing(cli.log_level);

    let source = CatalogSource::new(cli.data_dir, cli.config);

    let command: Box<dyn CommandHandler> = match cli.command {
        Commands::Analyze {
            major,
            minor,
            format,
        } => Box::new(AnalyzeCommand::new(source, major, minor, format)),
        Commands::List { kind } => Box::new(ListCommand::new(source, kind)),
        Commands::Fulfillment {
            major,
            minor,
            format,
        } => Box::new(FulfillmentCommand::new(source, major, minor, format)),
    };

    debug!("Running {} command", command.name());
    let result = command.execute()?;

    match &result {
        CommandResult::Success(Some(message)) => println!("{}", message),
        CommandResult::Success(None) => {}
        CommandResult::Warning(message) => eprintln!("Warning: {}", message),
        CommandResult::Error(message) => eprintln!("Error: {}", message),
    }

    let code = result.exit_code();
    if code != 0 {
        std::process::exit(code);
    }
    Ok(())
}
