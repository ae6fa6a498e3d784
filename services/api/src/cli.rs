use crate::demo::{
    run_candidates, run_demo, run_profile_create, CandidatesArgs, DemoArgs, ProfileCreateArgs,
};
use crate::server;
use clap::{Args, Parser, Subcommand};
use take_me_hire::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "take-me-hire",
    about = "Browse candidate profiles as an employer or add one as a job seeker",
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
    /// Show the employer dashboard, optionally filtered
    Candidates(CandidatesArgs),
    /// Manage job seeker profiles
    Profile {
        #[command(subcommand)]
        command: ProfileCommand,
    },
    /// Walk through both views against a throwaway in-memory store
    Demo(DemoArgs),
}

#[derive(Subcommand, Debug)]
enum ProfileCommand {
    /// Create a job seeker profile and add it to the employer search
    Create(ProfileCreateArgs),
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
        Command::Candidates(args) => run_candidates(args),
        Command::Profile {
            command: ProfileCommand::Create(args),
        } => run_profile_create(args),
        Command::Demo(args) => run_demo(args),
    }
}
