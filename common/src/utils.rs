use chrono::Utc;

/// Milliseconds since the Unix epoch
pub fn get_current_time_millis() -> i64 {
    Utc::now().timestamp_millis()
}
