use crate::demo::{run_configuration_preview, run_demo, ConfigurationPreviewArgs, DemoArgs};
use crate::server;
use appraisal::error::AppError;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "Performance Appraisal Portal",
    about = "Run and demonstrate the employee performance appraisal portal from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Inspect the evaluation configurations the resolver produces
    Configuration {
        #[command(subcommand)]
        command: ConfigurationCommand,
    },
    /// Run an end-to-end CLI demo covering one evaluation from start to submission
    Demo(DemoArgs),
}

#[derive(Subcommand, Debug)]
enum ConfigurationCommand {
    /// Print the category set, indicators, and weight table for an employee profile
    Preview(ConfigurationPreviewArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Configuration {
            command: ConfigurationCommand::Preview(args),
        } => run_configuration_preview(args),
        Command::Demo(args) => run_demo(args),
    }
}
