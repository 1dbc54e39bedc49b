use super::{param, Endpoint, PathSegments, QueryPairs, Rule};

/// Qualification rankings for an event.
#[derive(Clone, Debug)]
pub struct RankingsQuery {
    pub season: i32,
    pub event_code: String,
    pub team_number: Option<u32>,
    /// Only the top N ranked teams.
    pub top: Option<u32>,
}

impl RankingsQuery {
    pub fn new(season: i32, event_code: &str) -> Self {
        Self {
            season,
            event_code: event_code.to_string(),
            team_number: None,
            top: None,
        }
    }
    pub fn with_team_number(mut self, team_number: u32) -> Self {
        self.team_number = Some(team_number);
        self
    }
    pub fn with_top(mut self, top: u32) -> Self {
        self.top = Some(top);
        self
    }
}

const RANKINGS_RULES: &[Rule] = &[Rule::Exclusive(param::TEAM_NUMBER, param::TOP)];

impl Endpoint for RankingsQuery {
    fn season(&self) -> Option<i32> {
        Some(self.season)
    }

    fn rules(&self) -> &'static [Rule] {
        RANKINGS_RULES
    }

    fn segments(&self) -> PathSegments {
        PathSegments::new().push("rankings").push(&self.event_code)
    }

    fn query(&self) -> QueryPairs {
        QueryPairs::new()
            .push_opt(param::TEAM_NUMBER, self.team_number)
            .push_opt(param::TOP, self.top)
    }
}
