use chrono::{DateTime, Utc};

/// Age of a timestamp as "<n> <unit>(s) ago". Anything under a minute,
/// including clock skew into the future, reads as "now".
pub fn relative_time(dt: &DateTime<Utc>) -> String {
    let seconds = Utc::now().signed_duration_since(dt).num_seconds();
    if seconds < 60 {
        return "now".to_string();
    }

    let minutes = seconds / 60;
    let hours = minutes / 60;
    let days = hours / 24;

    let (count, unit) = if minutes < 60 {
        (minutes, "minute")
    } else if hours < 24 {
        (hours, "hour")
    } else if days < 30 {
        (days, "day")
    } else if days < 365 {
        (days / 30, "month")
    } else {
        (days / 365, "year")
    };

    if count == 1 {
        format!("1 {} ago", unit)
    } else {
        format!("{} {}s ago", count, unit)
    }
}

/// Like `relative_time`, rendering a missing timestamp as an empty string.
pub fn relative_time_opt(dt: &Option<DateTime<Utc>>) -> String {
    match dt {
        Some(dt) => relative_time(dt),
        None => String::new(),
    }
}
