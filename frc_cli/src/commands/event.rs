//! Subcommands scoped to a single event: alliances, awards, matches, scores, rankings, schedules.

use anyhow::Result;
use clap::Args;
use frc_api::{
    Client, HybridScheduleQuery, MatchResultsQuery, RankingsQuery, ScheduleQuery,
    ScoreDetailsQuery,
};
use serde_json::Value;

#[derive(Args)]
pub struct AlliancesArgs {
    /// Four-digit season (2014 or later)
    pub season: i32,

    /// Event code (e.g. ILIL)
    pub event_code: String,
}

pub async fn alliances(args: &AlliancesArgs, client: &Client) -> Result<Value> {
    Ok(client
        .get_alliance_selection(args.season, &args.event_code)
        .await?)
}

#[derive(Args)]
pub struct AwardsArgs {
    /// Four-digit season (2014 or later)
    pub season: i32,

    /// Event code
    #[arg(long)]
    pub event: Option<String>,

    /// Team number
    #[arg(long)]
    pub team: Option<u32>,
}

pub async fn awards(args: &AwardsArgs, client: &Client) -> Result<Value> {
    Ok(client
        .get_event_awards(args.season, args.event.as_deref(), args.team)
        .await?)
}

#[derive(Args)]
pub struct MatchesArgs {
    /// Four-digit season (2014 or later)
    pub season: i32,

    /// Event code
    pub event_code: String,

    /// Only matches this team played in
    #[arg(long)]
    pub team: Option<u32>,

    /// Tournament level: qual or playoff (required with --match, --start, --end)
    #[arg(long)]
    pub level: Option<String>,

    /// A single match number
    #[arg(long = "match")]
    pub match_number: Option<u32>,

    /// First match number of a range
    #[arg(long)]
    pub start: Option<u32>,

    /// Last match number of a range
    #[arg(long)]
    pub end: Option<u32>,
}

pub async fn matches(args: &MatchesArgs, client: &Client) -> Result<Value> {
    let mut query = MatchResultsQuery::new(args.season, &args.event_code);
    if let Some(team) = args.team {
        query = query.with_team_number(team);
    }
    if let Some(ref level) = args.level {
        query = query.with_tournament_level(level);
    }
    if let Some(match_number) = args.match_number {
        query = query.with_match_number(match_number);
    }
    if let Some(start) = args.start {
        query = query.with_start(start);
    }
    if let Some(end) = args.end {
        query = query.with_end(end);
    }
    Ok(client.get_event_match_results(&query).await?)
}

#[derive(Args)]
pub struct ScoresArgs {
    /// Four-digit season (2014 or later)
    pub season: i32,

    /// Event code
    pub event_code: String,

    /// Tournament level: qual or playoff
    pub level: String,

    /// Only matches this team played in
    #[arg(long)]
    pub team: Option<u32>,

    /// A single match number
    #[arg(long = "match")]
    pub match_number: Option<u32>,

    /// First match number of a range
    #[arg(long)]
    pub start: Option<u32>,

    /// Last match number of a range
    #[arg(long)]
    pub end: Option<u32>,
}

pub async fn scores(args: &ScoresArgs, client: &Client) -> Result<Value> {
    let mut query = ScoreDetailsQuery::new(args.season, &args.event_code, &args.level);
    if let Some(team) = args.team {
        query = query.with_team_number(team);
    }
    if let Some(match_number) = args.match_number {
        query = query.with_match_number(match_number);
    }
    if let Some(start) = args.start {
        query = query.with_start(start);
    }
    if let Some(end) = args.end {
        query = query.with_end(end);
    }
    Ok(client.get_score_details(&query).await?)
}

#[derive(Args)]
pub struct RankingsArgs {
    /// Four-digit season (2014 or later)
    pub season: i32,

    /// Event code
    pub event_code: String,

    /// Ranking of a single team
    #[arg(long)]
    pub team: Option<u32>,

    /// Only the top N teams
    #[arg(long)]
    pub top: Option<u32>,
}

pub async fn rankings(args: &RankingsArgs, client: &Client) -> Result<Value> {
    let mut query = RankingsQuery::new(args.season, &args.event_code);
    if let Some(team) = args.team {
        query = query.with_team_number(team);
    }
    if let Some(top) = args.top {
        query = query.with_top(top);
    }
    Ok(client.get_event_rankings(&query).await?)
}

#[derive(Args)]
pub struct ScheduleArgs {
    /// Four-digit season (2014 or later)
    pub season: i32,

    /// Event code
    pub event_code: String,

    /// Tournament level: qual or playoff
    pub level: String,

    /// Only matches this team is scheduled in
    #[arg(long)]
    pub team: Option<u32>,

    /// First match number of a range
    #[arg(long)]
    pub start: Option<u32>,

    /// Last match number of a range
    #[arg(long)]
    pub end: Option<u32>,
}

pub async fn schedule(args: &ScheduleArgs, client: &Client) -> Result<Value> {
    let mut query = ScheduleQuery::new(args.season, &args.event_code, &args.level);
    if let Some(team) = args.team {
        query = query.with_team_number(team);
    }
    if let Some(start) = args.start {
        query = query.with_start(start);
    }
    if let Some(end) = args.end {
        query = query.with_end(end);
    }
    Ok(client.get_event_schedule(&query).await?)
}

#[derive(Args)]
pub struct HybridScheduleArgs {
    /// Four-digit season (2014 or later)
    pub season: i32,

    /// Event code
    pub event_code: String,

    /// Tournament level: qual or playoff
    pub level: String,

    /// First match number of a range
    #[arg(long)]
    pub start: Option<u32>,

    /// Last match number of a range
    #[arg(long)]
    pub end: Option<u32>,
}

pub async fn hybrid_schedule(args: &HybridScheduleArgs, client: &Client) -> Result<Value> {
    let mut query = HybridScheduleQuery::new(args.season, &args.event_code, &args.level);
    if let Some(start) = args.start {
        query = query.with_start(start);
    }
    if let Some(end) = args.end {
        query = query.with_end(end);
    }
    Ok(client.get_hybrid_schedule(&query).await?)
}
