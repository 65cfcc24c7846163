use crate::demo::{run_assess, run_demo, run_questions, AssessArgs, DemoArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use maturity_advisor::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Digital Maturity Advisor",
    about = "Score small-business digital maturity and serve the assessment API",
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
    /// Evaluate a completed answer sheet and print the report
    Assess(AssessArgs),
    /// List the questionnaire grouped by category
    Questions,
    /// Evaluate three sample organisations end to end
    Demo(DemoArgs),
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
        Command::Assess(args) => run_assess(args),
        Command::Questions => {
            run_questions();
            Ok(())
        }
        Command::Demo(args) => run_demo(args),
    }
}
