use super::{Endpoint, PathSegments};

/// General information about the API itself. Not scoped to a season.
#[derive(Clone, Copy, Debug, Default)]
pub struct Ancillary;

impl Endpoint for Ancillary {
    fn season(&self) -> Option<i32> {
        None
    }

    fn segments(&self) -> PathSegments {
        PathSegments::new()
    }
}

/// High-level summary of one season.
#[derive(Clone, Debug)]
pub struct SeasonSummary {
    pub season: i32,
}

impl SeasonSummary {
    pub fn new(season: i32) -> Self {
        Self { season }
    }
}

impl Endpoint for SeasonSummary {
    fn season(&self) -> Option<i32> {
        Some(self.season)
    }

    fn segments(&self) -> PathSegments {
        PathSegments::new()
    }
}

/// Districts active in a season.
#[derive(Clone, Debug)]
pub struct DistrictListings {
    pub season: i32,
}

impl DistrictListings {
    pub fn new(season: i32) -> Self {
        Self { season }
    }
}

impl Endpoint for DistrictListings {
    fn season(&self) -> Option<i32> {
        Some(self.season)
    }

    fn segments(&self) -> PathSegments {
        PathSegments::new().push("districts")
    }
}
