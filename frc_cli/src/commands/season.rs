//! Subcommands scoped to a whole season: summaries, award types, events, districts, teams.

use anyhow::Result;
use clap::Args;
use frc_api::{Client, EventListingsQuery, TeamListingsQuery};
use serde_json::Value;

#[derive(Args)]
pub struct SeasonArgs {
    /// Four-digit season (2014 or later)
    pub season: i32,
}

#[derive(Args)]
pub struct EventsArgs {
    /// Four-digit season (2014 or later)
    pub season: i32,

    /// Look up a single event; excludes every other filter
    #[arg(long)]
    pub event: Option<String>,

    /// Events this team is registered for
    #[arg(long)]
    pub team: Option<u32>,

    /// Events in this district
    #[arg(long)]
    pub district: Option<String>,

    /// Only events outside any district
    #[arg(long)]
    pub exclude_district: bool,
}

pub async fn events(args: &EventsArgs, client: &Client) -> Result<Value> {
    let mut query = EventListingsQuery::new(args.season);
    if let Some(ref event) = args.event {
        query = query.with_event_code(event);
    }
    if let Some(team) = args.team {
        query = query.with_team_number(team);
    }
    if let Some(ref district) = args.district {
        query = query.with_district_code(district);
    }
    // Only a set flag is sent.
    if args.exclude_district {
        query = query.with_exclude_district(true);
    }
    Ok(client.get_event_listings(&query).await?)
}

#[derive(Args)]
pub struct TeamsArgs {
    /// Four-digit season (2014 or later)
    pub season: i32,

    /// A single team
    #[arg(long)]
    pub team: Option<u32>,

    /// Teams registered for this event
    #[arg(long)]
    pub event: Option<String>,

    /// Teams in this district
    #[arg(long)]
    pub district: Option<String>,

    /// Result page (the API pages team listings)
    #[arg(long)]
    pub page: Option<u32>,
}

pub async fn teams(args: &TeamsArgs, client: &Client) -> Result<Value> {
    let mut query = TeamListingsQuery::new(args.season);
    if let Some(team) = args.team {
        query = query.with_team_number(team);
    }
    if let Some(ref event) = args.event {
        query = query.with_event_code(event);
    }
    if let Some(ref district) = args.district {
        query = query.with_district_code(district);
    }
    if let Some(page) = args.page {
        query = query.with_page(page);
    }
    Ok(client.get_team_listings(&query).await?)
}
