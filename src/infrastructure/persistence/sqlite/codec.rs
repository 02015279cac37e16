//! 行与记录之间的编码辅助
//!
//! UUID 以 TEXT 存储；时间戳以固定微秒精度的 RFC 3339 UTC 文本存储，
//! 字典序即时间序。

use chrono::{DateTime, SecondsFormat, Utc};
use uuid::Uuid;

use crate::application::ports::RepositoryError;

pub(crate) fn encode_time(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Micros, true)
}

pub(crate) fn decode_time(s: &str) -> Result<DateTime<Utc>, RepositoryError> {
    DateTime::parse_from_rfc3339(s)
        .map(|ts| ts.with_timezone(&Utc))
        .map_err(|e| RepositoryError::SerializationError(e.to_string()))
}

pub(crate) fn decode_optional_time(
    s: Option<String>,
) -> Result<Option<DateTime<Utc>>, RepositoryError> {
    s.as_deref().map(decode_time).transpose()
}

pub(crate) fn decode_uuid(s: &str) -> Result<Uuid, RepositoryError> {
    Uuid::parse_str(s).map_err(|e| RepositoryError::SerializationError(e.to_string()))
}

/// 生成 `?, ?, ?` 形式的占位符列表
pub(crate) fn placeholders(n: usize) -> String {
    vec!["?"; n].join(", ")
}

/// 按约束类型分类 sqlx 错误
pub(crate) fn db_error(err: sqlx::Error) -> RepositoryError {
    if let Some(db_err) = err.as_database_error() {
        if db_err.is_unique_violation() {
            return RepositoryError::Duplicate(db_err.message().to_string());
        }
        if db_err.is_foreign_key_violation() || db_err.is_check_violation() {
            return RepositoryError::ConstraintViolation(db_err.message().to_string());
        }
    }
    RepositoryError::DatabaseError(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_time_encoding_is_fixed_width() {
        let a = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        let b = a + chrono::Duration::microseconds(1);
        let (ea, eb) = (encode_time(&a), encode_time(&b));
        assert_eq!(ea, "2024-01-02T03:04:05.000000Z");
        assert_eq!(ea.len(), eb.len());
        assert!(ea < eb);
        assert_eq!(decode_time(&eb).unwrap(), b);
    }

    #[test]
    fn test_placeholders() {
        assert_eq!(placeholders(1), "?");
        assert_eq!(placeholders(3), "?, ?, ?");
    }
}
