use chrono::{DateTime, Utc};

use crate::models::HistorySnapshot;
use crate::utils::parse_relative;

/// Build a snapshot predicate from optional relative-time bounds, resolved against
/// the current time
pub fn build_snapshot_filter(
    since: Option<&str>,
    until: Option<&str>,
) -> impl Fn(&HistorySnapshot) -> bool + use<> {
    build_snapshot_filter_at(since, until, Utc::now())
}

/// Build a snapshot predicate with bounds resolved against `now`
///
/// Both bounds are exclusive: a snapshot created exactly at `since` or `until`
/// does not match. A bound that fails to parse resolves to `now`.
pub fn build_snapshot_filter_at(
    since: Option<&str>,
    until: Option<&str>,
    now: DateTime<Utc>,
) -> impl Fn(&HistorySnapshot) -> bool + use<> {
    let since = since.map(|s| parse_relative(s, now));
    let until = until.map(|u| parse_relative(u, now));

    move |snapshot: &HistorySnapshot| {
        let created_on = snapshot.created_on();
        since.is_none_or(|since| since < created_on)
            && until.is_none_or(|until| created_on < until)
    }
}
