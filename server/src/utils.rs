use clicker_engine::Millis;
use spacetimedb::Timestamp;

/// SpacetimeDB timestamps are microsecond precision; the engine works in milliseconds.
pub fn timestamp_to_millis(ts: Timestamp) -> Millis {
    ts.to_micros_since_unix_epoch().div_euclid(1_000)
}

pub fn millis_to_timestamp(millis: Millis) -> Timestamp {
    Timestamp::from_micros_since_unix_epoch(millis.saturating_mul(1_000))
}
