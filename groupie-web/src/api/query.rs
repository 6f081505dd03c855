//! Identifier parsing for `?id=` and `/artist/<id>`

use axum::extract::{rejection::QueryRejection, Query};
use groupie_common::ArtistId;
use serde::Deserialize;

use crate::error::PageError;

/// Query string carrying an identifier
///
/// Kept as raw text so malformed values are classified here rather than
/// rejected by the extractor.
#[derive(Debug, Deserialize)]
pub struct IdQuery {
    pub id: Option<String>,
}

/// Identifier from an extracted query string
pub fn id_from_query(query: Result<Query<IdQuery>, QueryRejection>) -> Result<ArtistId, PageError> {
    let Query(query) = query.map_err(|e| PageError::BadRequest(format!("Invalid query: {}", e)))?;
    let raw = query
        .id
        .ok_or_else(|| PageError::BadRequest("Missing artist ID".to_string()))?;
    parse_id(&raw)
}

/// Positive integer identifier
///
/// Anything that is not a positive 64-bit integer is a bad request. A valid
/// positive value outside the identifier range cannot match any record, so
/// it is not found.
pub fn parse_id(raw: &str) -> Result<ArtistId, PageError> {
    let value = match raw.parse::<i64>() {
        Ok(value) if value >= 1 => value,
        _ => return Err(PageError::BadRequest("Invalid artist ID".to_string())),
    };
    ArtistId::try_from(value).map_err(|_| PageError::NotFound("Artist not found".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_positive_integers() {
        assert_eq!(parse_id("1").unwrap(), 1);
        assert_eq!(parse_id("52").unwrap(), 52);
    }

    #[test]
    fn test_rejects_invalid_values() {
        for raw in ["", "abc", "0", "-1", "1.5", " 1", "1a", "99999999999999999999"] {
            assert!(
                matches!(parse_id(raw), Err(PageError::BadRequest(_))),
                "{:?} should be rejected",
                raw
            );
        }
    }

    #[test]
    fn test_out_of_range_positive_is_not_found() {
        for raw in ["4294967296", "99999999999", "9223372036854775807"] {
            assert!(
                matches!(parse_id(raw), Err(PageError::NotFound(_))),
                "{:?} should be not found",
                raw
            );
        }
        assert_eq!(parse_id("4294967295").unwrap(), u32::MAX);
    }

    #[test]
    fn test_missing_query_id() {
        let result = id_from_query(Ok(Query(IdQuery { id: None })));
        assert!(matches!(result, Err(PageError::BadRequest(msg)) if msg.contains("Missing")));
    }
}
