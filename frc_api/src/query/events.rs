use super::{param, Endpoint, PathSegments, QueryPairs, Rule};

/// Events in a season. An event code looks up a single event and excludes every other filter.
#[derive(Clone, Debug)]
pub struct EventListingsQuery {
    pub season: i32,
    pub event_code: Option<String>,
    pub team_number: Option<u32>,
    pub district_code: Option<String>,
    /// Only events outside any district.
    pub exclude_district: Option<bool>,
}

impl EventListingsQuery {
    pub fn new(season: i32) -> Self {
        Self {
            season,
            event_code: None,
            team_number: None,
            district_code: None,
            exclude_district: None,
        }
    }
    pub fn with_event_code(mut self, event_code: &str) -> Self {
        self.event_code = Some(event_code.to_string());
        self
    }
    pub fn with_team_number(mut self, team_number: u32) -> Self {
        self.team_number = Some(team_number);
        self
    }
    pub fn with_district_code(mut self, district_code: &str) -> Self {
        self.district_code = Some(district_code.to_string());
        self
    }
    pub fn with_exclude_district(mut self, exclude_district: bool) -> Self {
        self.exclude_district = Some(exclude_district);
        self
    }
}

const EVENT_LISTINGS_RULES: &[Rule] = &[
    Rule::Exclusive(param::EVENT_CODE, param::TEAM_NUMBER),
    Rule::Exclusive(param::EVENT_CODE, param::DISTRICT_CODE),
    Rule::Exclusive(param::EVENT_CODE, param::EXCLUDE_DISTRICT),
    Rule::Exclusive(param::DISTRICT_CODE, param::EXCLUDE_DISTRICT),
];

impl Endpoint for EventListingsQuery {
    fn season(&self) -> Option<i32> {
        Some(self.season)
    }

    fn rules(&self) -> &'static [Rule] {
        EVENT_LISTINGS_RULES
    }

    fn segments(&self) -> PathSegments {
        PathSegments::new().push("events")
    }

    fn query(&self) -> QueryPairs {
        QueryPairs::new()
            .push_opt(param::EVENT_CODE, self.event_code.as_ref())
            .push_opt(param::TEAM_NUMBER, self.team_number)
            .push_opt(param::DISTRICT_CODE, self.district_code.as_ref())
            .push_opt(param::EXCLUDE_DISTRICT, self.exclude_district)
    }
}
