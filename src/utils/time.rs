//! BSON 시각과 chrono 시각 간 변환

use chrono::{DateTime, Utc};
use mongodb::bson;

/// 저장소 시각(`bson::DateTime`, 밀리초 정밀도)을 API 응답용 `DateTime<Utc>`로 변환합니다.
pub fn to_utc(value: bson::DateTime) -> DateTime<Utc> {
    DateTime::from_timestamp_millis(value.timestamp_millis()).unwrap_or_default()
}

/// 현재 시각으로부터 `ttl` 이후의 저장소 시각
pub fn after(ttl: chrono::Duration) -> bson::DateTime {
    bson::DateTime::from_millis((Utc::now() + ttl).timestamp_millis())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_utc_keeps_millisecond_precision() {
        let stored = bson::DateTime::from_millis(1_700_000_000_123);
        assert_eq!(to_utc(stored).timestamp_millis(), 1_700_000_000_123);
    }

    #[test]
    fn test_after_is_in_the_future() {
        let expires = after(chrono::Duration::days(30));
        assert!(expires > bson::DateTime::now());
    }
}
