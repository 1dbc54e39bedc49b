use frc_api::query::{rules, Rule};
use frc_api::{
    Ancillary, Endpoint, Environment, Error, EventAwards, HybridScheduleQuery, MatchResultsQuery,
    ScheduleQuery, ScoreDetailsQuery,
};
use url::Url;

fn base_url() -> Url {
    Url::parse(Environment::Staging.base_url()).unwrap()
}

#[test]
fn schedule_request_parts() {
    let request = ScheduleQuery::new(2024, "ilil", "qual").request().unwrap();
    assert_eq!(
        request.segments.as_slice(),
        &["2024".to_string(), "schedule".to_string(), "ilil".to_string()]
    );
    assert_eq!(
        request.query.as_slice(),
        &[("tournamentLevel", "qual".to_string())]
    );
    assert_eq!(
        request.url(&base_url()).unwrap().as_str(),
        "https://frc-staging-api.firstinspires.org/v2.0/2024/schedule/ilil"
    );
}

#[test]
fn ancillary_has_no_season() {
    let request = Ancillary.request().unwrap();
    assert!(request.segments.is_empty());
    assert!(request.query.is_empty());
}

#[test]
fn event_code_cannot_escape_its_segment() {
    let request = HybridScheduleQuery::new(2024, "../2023", "qual")
        .request()
        .unwrap();
    let url = request.url(&base_url()).unwrap();
    assert_eq!(
        url.path(),
        "/v2.0/2024/schedule/..%2F2023/qual/hybrid"
    );
}

#[test]
fn dot_dot_event_code_rejected() {
    let result = EventAwards::new(2024).with_event_code("..").request();
    assert!(matches!(result, Err(Error::Validation(_))));
}

#[test]
fn season_reported_before_level_and_conflicts() {
    let result = ScoreDetailsQuery::new(1, "ilil", "bogus")
        .with_team_number(1)
        .with_match_number(1)
        .request();
    match result {
        Err(Error::Validation(msg)) => assert!(msg.contains("season")),
        other => panic!("expected a season validation error, got {:?}", other),
    }
}

#[test]
fn level_reported_before_conflicts() {
    let result = MatchResultsQuery::new(2024, "ilil")
        .with_tournament_level("elim")
        .with_team_number(1)
        .with_match_number(1)
        .request();
    match result {
        Err(Error::Validation(msg)) => assert!(msg.contains("tournamentLevel")),
        other => panic!("expected a tournament level error, got {:?}", other),
    }
}

#[test]
fn rule_tables_are_public() {
    let query = MatchResultsQuery::new(2024, "ilil");
    assert_eq!(query.rules().len(), 4);
    assert!(matches!(query.rules()[0], Rule::Requires { .. }));
    assert!(rules::check(query.rules(), &["tournamentLevel", "start", "end"]).is_ok());
}
