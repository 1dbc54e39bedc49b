use super::{param, Endpoint, PathSegments, QueryPairs, Rule};

/// Teams in a season, filterable by event or district and paged by the API.
#[derive(Clone, Debug)]
pub struct TeamListingsQuery {
    pub season: i32,
    pub team_number: Option<u32>,
    pub event_code: Option<String>,
    pub district_code: Option<String>,
    pub page: Option<u32>,
}

impl TeamListingsQuery {
    pub fn new(season: i32) -> Self {
        Self {
            season,
            team_number: None,
            event_code: None,
            district_code: None,
            page: None,
        }
    }
    pub fn with_team_number(mut self, team_number: u32) -> Self {
        self.team_number = Some(team_number);
        self
    }
    pub fn with_event_code(mut self, event_code: &str) -> Self {
        self.event_code = Some(event_code.to_string());
        self
    }
    pub fn with_district_code(mut self, district_code: &str) -> Self {
        self.district_code = Some(district_code.to_string());
        self
    }
    pub fn with_page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }
}

const TEAM_LISTINGS_RULES: &[Rule] = &[
    Rule::Exclusive(param::TEAM_NUMBER, param::EVENT_CODE),
    Rule::Exclusive(param::TEAM_NUMBER, param::DISTRICT_CODE),
];

impl Endpoint for TeamListingsQuery {
    fn season(&self) -> Option<i32> {
        Some(self.season)
    }

    fn rules(&self) -> &'static [Rule] {
        TEAM_LISTINGS_RULES
    }

    fn segments(&self) -> PathSegments {
        PathSegments::new().push("teams")
    }

    fn query(&self) -> QueryPairs {
        QueryPairs::new()
            .push_opt(param::TEAM_NUMBER, self.team_number)
            .push_opt(param::EVENT_CODE, self.event_code.as_ref())
            .push_opt(param::DISTRICT_CODE, self.district_code.as_ref())
            .push_opt(param::PAGE, self.page)
    }
}
