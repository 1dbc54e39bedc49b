use super::{Endpoint, PathSegments};

/// Alliance selection results for one event.
#[derive(Clone, Debug)]
pub struct AllianceSelection {
    pub season: i32,
    pub event_code: String,
}

impl AllianceSelection {
    pub fn new(season: i32, event_code: &str) -> Self {
        Self {
            season,
            event_code: event_code.to_string(),
        }
    }
}

impl Endpoint for AllianceSelection {
    fn season(&self) -> Option<i32> {
        Some(self.season)
    }

    fn segments(&self) -> PathSegments {
        PathSegments::new().push("alliances").push(&self.event_code)
    }
}
