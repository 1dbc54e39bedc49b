use super::{param, Endpoint, PathSegments, QueryPairs};

/// Match schedule for one tournament level of an event.
///
/// The tournament level is required and travels in the query string.
#[derive(Clone, Debug)]
pub struct ScheduleQuery {
    pub season: i32,
    pub event_code: String,
    pub tournament_level: String,
    pub team_number: Option<u32>,
    pub start: Option<u32>,
    pub end: Option<u32>,
}

impl ScheduleQuery {
    pub fn new(season: i32, event_code: &str, tournament_level: &str) -> Self {
        Self {
            season,
            event_code: event_code.to_string(),
            tournament_level: tournament_level.to_string(),
            team_number: None,
            start: None,
            end: None,
        }
    }
    pub fn with_team_number(mut self, team_number: u32) -> Self {
        self.team_number = Some(team_number);
        self
    }
    pub fn with_start(mut self, start: u32) -> Self {
        self.start = Some(start);
        self
    }
    pub fn with_end(mut self, end: u32) -> Self {
        self.end = Some(end);
        self
    }
}

impl Endpoint for ScheduleQuery {
    fn season(&self) -> Option<i32> {
        Some(self.season)
    }

    fn tournament_level(&self) -> Option<&str> {
        Some(&self.tournament_level)
    }

    fn segments(&self) -> PathSegments {
        PathSegments::new().push("schedule").push(&self.event_code)
    }

    fn query(&self) -> QueryPairs {
        QueryPairs::new()
            .push(param::TOURNAMENT_LEVEL, &self.tournament_level)
            .push_opt(param::TEAM_NUMBER, self.team_number)
            .push_opt(param::START, self.start)
            .push_opt(param::END, self.end)
    }
}

/// Schedule merged with results for one tournament level of an event.
#[derive(Clone, Debug)]
pub struct HybridScheduleQuery {
    pub season: i32,
    pub event_code: String,
    pub tournament_level: String,
    pub start: Option<u32>,
    pub end: Option<u32>,
}

impl HybridScheduleQuery {
    pub fn new(season: i32, event_code: &str, tournament_level: &str) -> Self {
        Self {
            season,
            event_code: event_code.to_string(),
            tournament_level: tournament_level.to_string(),
            start: None,
            end: None,
        }
    }
    pub fn with_start(mut self, start: u32) -> Self {
        self.start = Some(start);
        self
    }
    pub fn with_end(mut self, end: u32) -> Self {
        self.end = Some(end);
        self
    }
}

impl Endpoint for HybridScheduleQuery {
    fn season(&self) -> Option<i32> {
        Some(self.season)
    }

    fn tournament_level(&self) -> Option<&str> {
        Some(&self.tournament_level)
    }

    fn segments(&self) -> PathSegments {
        PathSegments::new()
            .push("schedule")
            .push(&self.event_code)
            .push(&self.tournament_level)
            .push("hybrid")
    }

    fn query(&self) -> QueryPairs {
        QueryPairs::new()
            .push_opt(param::START, self.start)
            .push_opt(param::END, self.end)
    }
}
