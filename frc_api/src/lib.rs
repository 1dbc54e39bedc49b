//! Client for the FRC Events API (schedules, rankings, awards, teams, districts).
//!
//! Every resource validates its parameters before a request is built: seasons and
//! tournament levels are checked first, then the resource's table of mutually
//! exclusive and companion parameters. Responses come back as undecorated JSON.

mod client;
pub mod config;
mod errors;
pub mod query;
pub mod validation;
pub use self::client::Client;
pub use self::config::{ClientConfig, Credentials, Environment};
pub use self::errors::Error;
pub use self::query::{
    AllianceSelection, Ancillary, AwardListings, DistrictListings, Endpoint, EndpointRequest,
    EventAwards, EventListingsQuery, HybridScheduleQuery, MatchResultsQuery, RankingsQuery,
    ScheduleQuery, ScoreDetailsQuery, SeasonSummary, TeamListingsQuery,
};
pub use self::validation::{verify_season, verify_tournament_level, TournamentLevel};
