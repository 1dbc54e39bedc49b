mod commands;
mod output;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use frc_api::{Client, ClientConfig, Credentials};

#[derive(Parser)]
#[command(name = "frcdata")]
#[command(about = "Query schedules, rankings, awards and teams from the FRC Events API")]
struct Cli {
    /// API environment: production (prod) or staging (stage)
    #[arg(long = "env", env = "FRC_API_ENV", default_value = "production", global = true)]
    environment: String,

    /// API username
    #[arg(long, env = "FRC_API_USERNAME", global = true)]
    username: Option<String>,

    /// API authorization token
    #[arg(long, env = "FRC_API_TOKEN", hide_env_values = true, global = true)]
    token: Option<String>,

    /// Override the base endpoint (e.g. a mock server); --env is ignored when set
    #[arg(long, env = "FRC_API_BASE_URL", global = true)]
    base_url: Option<String>,

    /// Print JSON on a single line
    #[arg(long, global = true)]
    compact: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Alliance selection results for an event
    Alliances(commands::event::AlliancesArgs),
    /// Awards for an event and/or a team
    Awards(commands::event::AwardsArgs),
    /// Award types defined for a season
    AwardList(commands::season::SeasonArgs),
    /// Basic information about the API
    Info,
    /// Match results for an event
    Matches(commands::event::MatchesArgs),
    /// Detailed score breakdowns for an event
    Scores(commands::event::ScoresArgs),
    /// Rankings for an event
    Rankings(commands::event::RankingsArgs),
    /// Match schedule for an event
    Schedule(commands::event::ScheduleArgs),
    /// Schedule merged with results for an event
    HybridSchedule(commands::event::HybridScheduleArgs),
    /// Summary of a season
    Season(commands::season::SeasonArgs),
    /// Events in a season
    Events(commands::season::EventsArgs),
    /// Districts in a season
    Districts(commands::season::SeasonArgs),
    /// Teams in a season
    Teams(commands::season::TeamsArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive("frcdata=info".parse()?),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let client = build_client(&cli)?;

    let value = match &cli.command {
        Commands::Alliances(args) => commands::event::alliances(args, &client).await?,
        Commands::Awards(args) => commands::event::awards(args, &client).await?,
        Commands::AwardList(args) => client.get_award_listings(args.season).await?,
        Commands::Info => client.get_ancillary().await?,
        Commands::Matches(args) => commands::event::matches(args, &client).await?,
        Commands::Scores(args) => commands::event::scores(args, &client).await?,
        Commands::Rankings(args) => commands::event::rankings(args, &client).await?,
        Commands::Schedule(args) => commands::event::schedule(args, &client).await?,
        Commands::HybridSchedule(args) => commands::event::hybrid_schedule(args, &client).await?,
        Commands::Season(args) => client.get_season_summary(args.season).await?,
        Commands::Events(args) => commands::season::events(args, &client).await?,
        Commands::Districts(args) => client.get_district_listings(args.season).await?,
        Commands::Teams(args) => commands::season::teams(args, &client).await?,
    };

    output::print_json(&value, cli.compact)
}

fn build_client(cli: &Cli) -> Result<Client> {
    let client = match &cli.base_url {
        Some(base_url) => {
            let credentials = Credentials::pair(cli.username.as_deref(), cli.token.as_deref())
                .context("invalid credentials")?;
            tracing::debug!("using base URL override {}", base_url);
            Client::with_base_url(base_url, credentials)
        }
        None => {
            let config = ClientConfig::new(
                &cli.environment,
                cli.username.as_deref(),
                cli.token.as_deref(),
            )
            .context("invalid client configuration")?;
            Client::from_config(config)
        }
    }
    .context("failed to set up the API client")?;

    if !client.is_authenticated() {
        tracing::info!("no credentials configured; requests will be unauthenticated");
    }
    Ok(client)
}
