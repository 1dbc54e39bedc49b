use super::{param, Endpoint, PathSegments, Rule};

/// Awards handed out at an event, to a team, or to a team at an event.
///
/// The event code and team number are path segments rather than query parameters,
/// and at least one of them has to be given.
#[derive(Clone, Debug)]
pub struct EventAwards {
    pub season: i32,
    pub event_code: Option<String>,
    pub team_number: Option<u32>,
}

impl EventAwards {
    pub fn new(season: i32) -> Self {
        Self {
            season,
            event_code: None,
            team_number: None,
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
}

const EVENT_AWARDS_RULES: &[Rule] = &[Rule::AnyOf(&[param::EVENT_CODE, param::TEAM_NUMBER])];

impl Endpoint for EventAwards {
    fn season(&self) -> Option<i32> {
        Some(self.season)
    }

    fn rules(&self) -> &'static [Rule] {
        EVENT_AWARDS_RULES
    }

    fn supplied(&self) -> Vec<&'static str> {
        let mut supplied = Vec::new();
        if self.event_code.is_some() {
            supplied.push(param::EVENT_CODE);
        }
        if self.team_number.is_some() {
            supplied.push(param::TEAM_NUMBER);
        }
        supplied
    }

    fn segments(&self) -> PathSegments {
        PathSegments::new()
            .push("awards")
            .push_opt(self.event_code.as_ref())
            .push_opt(self.team_number)
    }
}

/// Every award type defined for a season.
#[derive(Clone, Debug)]
pub struct AwardListings {
    pub season: i32,
}

impl AwardListings {
    pub fn new(season: i32) -> Self {
        Self { season }
    }
}

impl Endpoint for AwardListings {
    fn season(&self) -> Option<i32> {
        Some(self.season)
    }

    fn segments(&self) -> PathSegments {
        PathSegments::new().push("awards").push("list")
    }
}
