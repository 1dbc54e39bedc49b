use super::{param, Endpoint, PathSegments, QueryPairs, Rule};

/// Detailed score breakdowns for one tournament level of an event.
#[derive(Clone, Debug)]
pub struct ScoreDetailsQuery {
    pub season: i32,
    pub event_code: String,
    pub tournament_level: String,
    pub team_number: Option<u32>,
    pub match_number: Option<u32>,
    pub start: Option<u32>,
    pub end: Option<u32>,
}

impl ScoreDetailsQuery {
    pub fn new(season: i32, event_code: &str, tournament_level: &str) -> Self {
        Self {
            season,
            event_code: event_code.to_string(),
            tournament_level: tournament_level.to_string(),
            team_number: None,
            match_number: None,
            start: None,
            end: None,
        }
    }
    pub fn with_team_number(mut self, team_number: u32) -> Self {
        self.team_number = Some(team_number);
        self
    }
    pub fn with_match_number(mut self, match_number: u32) -> Self {
        self.match_number = Some(match_number);
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

const SCORE_DETAILS_RULES: &[Rule] = &[
    Rule::Exclusive(param::TEAM_NUMBER, param::MATCH_NUMBER),
    Rule::Exclusive(param::MATCH_NUMBER, param::START),
    Rule::Exclusive(param::MATCH_NUMBER, param::END),
];

impl Endpoint for ScoreDetailsQuery {
    fn season(&self) -> Option<i32> {
        Some(self.season)
    }

    fn tournament_level(&self) -> Option<&str> {
        Some(&self.tournament_level)
    }

    fn rules(&self) -> &'static [Rule] {
        SCORE_DETAILS_RULES
    }

    fn segments(&self) -> PathSegments {
        PathSegments::new()
            .push("scores")
            .push(&self.event_code)
            .push(&self.tournament_level)
    }

    fn query(&self) -> QueryPairs {
        QueryPairs::new()
            .push_opt(param::TEAM_NUMBER, self.team_number)
            .push_opt(param::MATCH_NUMBER, self.match_number)
            .push_opt(param::START, self.start)
            .push_opt(param::END, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::test_support::{conflict, render};
    use crate::Error;

    #[test]
    fn test_score_details_query() {
        insta::assert_snapshot!(render(&ScoreDetailsQuery::new(2024, "ilil", "qual")), @"https://frc-api.firstinspires.org/v2.0/2024/scores/ilil/qual");

        insta::assert_snapshot!(render(&ScoreDetailsQuery::new(2024, "ilil", "playoff").with_match_number(2)), @"https://frc-api.firstinspires.org/v2.0/2024/scores/ilil/playoff?matchNumber=2");

        insta::assert_snapshot!(render(&ScoreDetailsQuery::new(2024, "ilil", "qual")
            .with_team_number(118)
            .with_start(10)
            .with_end(30)), @"https://frc-api.firstinspires.org/v2.0/2024/scores/ilil/qual?teamNumber=118&start=10&end=30");
    }

    #[test]
    fn test_score_details_level_required_and_checked() {
        let result = ScoreDetailsQuery::new(2024, "ilil", "").request();
        assert!(matches!(result, Err(Error::Validation(_))));
        let result = ScoreDetailsQuery::new(2024, "ilil", "Qual").request();
        assert!(matches!(result, Err(Error::Validation(_))));
    }

    #[test]
    fn test_score_details_domain_checks_before_conflicts() {
        let result = ScoreDetailsQuery::new(2024, "ilil", "elim")
            .with_team_number(1)
            .with_match_number(1)
            .request();
        assert!(matches!(result, Err(Error::Validation(_))));
    }

    #[test]
    fn test_score_details_conflicts() {
        let query = ScoreDetailsQuery::new(2024, "ilil", "qual")
            .with_team_number(118)
            .with_match_number(4);
        assert_eq!(
            conflict(&query),
            "teamNumber is mutually exclusive with matchNumber"
        );

        let query = ScoreDetailsQuery::new(2024, "ilil", "qual")
            .with_match_number(4)
            .with_start(1);
        assert_eq!(conflict(&query), "matchNumber is mutually exclusive with start");

        let query = ScoreDetailsQuery::new(2024, "ilil", "qual")
            .with_match_number(4)
            .with_end(8);
        assert_eq!(conflict(&query), "matchNumber is mutually exclusive with end");
    }
}
