use crate::demo::{
    run_archetypes, run_demo, run_match, run_summary, ArchetypesArgs, DemoArgs, MatchArgs,
    SummaryArgs,
};
use crate::server;
use clap::{Args, Parser, Subcommand};
use youlement::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "YouLement Career Matching",
    about = "Match assessment profiles to career archetypes or run the matching service",
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
    /// Rank the archetypes against a profile stored as JSON
    Match(MatchArgs),
    /// List the archetype catalog or show one archetype with its career paths
    Archetypes(ArchetypesArgs),
    /// Summarize a profile: strengths, requirement gaps, energy and life balance
    Summary(SummaryArgs),
    /// Run the built-in sample profile through the full assessment pipeline
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
        Command::Match(args) => run_match(args),
        Command::Archetypes(args) => run_archetypes(args),
        Command::Summary(args) => run_summary(args),
        Command::Demo(args) => run_demo(args),
    }
}
