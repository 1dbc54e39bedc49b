//! Request building: one type per API resource, all sharing the [`Endpoint`] trait.

use std::fmt;

use url::Url;

use crate::validation::{verify_season, verify_tournament_level};
use crate::Error;

mod path;
pub use self::path::PathSegments;
pub mod rules;
pub use self::rules::Rule;

mod alliances;
pub use self::alliances::AllianceSelection;
mod awards;
pub use self::awards::{AwardListings, EventAwards};
mod events;
pub use self::events::EventListingsQuery;
mod matches;
pub use self::matches::MatchResultsQuery;
mod rankings;
pub use self::rankings::RankingsQuery;
mod schedule;
pub use self::schedule::{HybridScheduleQuery, ScheduleQuery};
mod scores;
pub use self::scores::ScoreDetailsQuery;
mod season;
pub use self::season::{Ancillary, DistrictListings, SeasonSummary};
mod teams;
pub use self::teams::TeamListingsQuery;

/// Wire names of the optional parameters, shared by the rule tables and query strings.
pub(crate) mod param {
    pub const DISTRICT_CODE: &str = "districtCode";
    pub const END: &str = "end";
    pub const EVENT_CODE: &str = "eventCode";
    pub const EXCLUDE_DISTRICT: &str = "excludeDistrict";
    pub const MATCH_NUMBER: &str = "matchNumber";
    pub const PAGE: &str = "page";
    pub const START: &str = "start";
    pub const TEAM_NUMBER: &str = "teamNumber";
    pub const TOP: &str = "top";
    pub const TOURNAMENT_LEVEL: &str = "tournamentLevel";
}

/// Query-string parameters in the order they were added.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QueryPairs(Vec<(&'static str, String)>);

impl QueryPairs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(mut self, name: &'static str, value: impl fmt::Display) -> Self {
        self.0.push((name, value.to_string()));
        self
    }

    /// Adds the parameter only when it was supplied; absent values are never sent.
    pub fn push_opt(self, name: &'static str, value: Option<impl fmt::Display>) -> Self {
        match value {
            Some(value) => self.push(name, value),
            None => self,
        }
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.0.iter().map(|(name, _)| *name).collect()
    }

    pub fn as_slice(&self) -> &[(&'static str, String)] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// A fully validated request: where to send it and what to put in the query string.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EndpointRequest {
    pub segments: PathSegments,
    pub query: QueryPairs,
}

impl EndpointRequest {
    /// The request URL without its query string.
    pub fn url(&self, base: &Url) -> Result<Url, Error> {
        self.segments.apply_to(base)
    }

    /// The request URL with the query string appended.
    pub fn full_url(&self, base: &Url) -> Result<Url, Error> {
        let mut url = self.url(base)?;
        if !self.query.is_empty() {
            url.query_pairs_mut().extend_pairs(self.query.as_slice());
        }
        Ok(url)
    }
}

/// A single API resource.
///
/// Implementors describe their season, their rule table, their path and their
/// query string; [`Endpoint::request`] validates everything in a fixed order
/// before any of it is assembled.
pub trait Endpoint {
    /// Season the resource is scoped to, or `None` for season-less resources.
    fn season(&self) -> Option<i32>;

    /// Tournament level to validate, if one was given.
    fn tournament_level(&self) -> Option<&str> {
        None
    }

    /// Mutual-exclusion and companion rules, checked in order.
    fn rules(&self) -> &'static [Rule] {
        &[]
    }

    /// Segments after the season.
    fn segments(&self) -> PathSegments;

    /// Optional query-string parameters that were supplied.
    fn query(&self) -> QueryPairs {
        QueryPairs::new()
    }

    /// Names of the optional parameters the caller supplied.
    fn supplied(&self) -> Vec<&'static str> {
        self.query().names()
    }

    /// Validates the parameters and assembles the request.
    ///
    /// Order: season, tournament level, then the rule table. The first failure is returned
    /// and nothing is built.
    fn request(&self) -> Result<EndpointRequest, Error> {
        let season = self.season();
        if let Some(season) = season {
            verify_season(season)?;
        }
        if let Some(level) = self.tournament_level() {
            verify_tournament_level(level)?;
        }
        rules::check(self.rules(), &self.supplied())?;

        let mut segments = PathSegments::new().push_opt(season);
        for segment in self.segments().as_slice() {
            segments = segments.push(segment);
        }
        segments.validate()?;

        Ok(EndpointRequest {
            segments,
            query: self.query(),
        })
    }
}
