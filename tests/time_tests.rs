use chrono::{Duration, Utc};

use ghprofile::util::time::{relative_time, relative_time_opt};

#[test]
fn test_under_a_minute_is_now() {
    let dt = Utc::now() - Duration::seconds(30);
    assert_eq!(relative_time(&dt), "now");
}

#[test]
fn test_future_is_now() {
    let dt = Utc::now() + Duration::hours(1);
    assert_eq!(relative_time(&dt), "now");
}

#[test]
fn test_minutes() {
    let dt = Utc::now() - Duration::minutes(5);
    assert_eq!(relative_time(&dt), "5 minutes ago");
}

#[test]
fn test_singular_unit() {
    let dt = Utc::now() - Duration::seconds(90);
    assert_eq!(relative_time(&dt), "1 minute ago");
}

#[test]
fn test_hours() {
    let dt = Utc::now() - Duration::hours(3);
    assert_eq!(relative_time(&dt), "3 hours ago");
}

#[test]
fn test_days() {
    let dt = Utc::now() - Duration::days(10);
    assert_eq!(relative_time(&dt), "10 days ago");
}

#[test]
fn test_months() {
    let dt = Utc::now() - Duration::days(90);
    assert_eq!(relative_time(&dt), "3 months ago");
}

#[test]
fn test_years() {
    let dt = Utc::now() - Duration::days(800);
    assert_eq!(relative_time(&dt), "2 years ago");
}

#[test]
fn test_opt_none_is_empty() {
    assert_eq!(relative_time_opt(&None), "");
    let dt = Utc::now() - Duration::minutes(5);
    assert_eq!(relative_time_opt(&Some(dt)), "5 minutes ago");
}
