//! Shared response envelope for backend payloads.
//!
//! All backend responses use a `{ "data": ... }` envelope; deserializing
//! through [`DataResponse`] keeps that convention in one place.

use serde::Deserialize;

/// Standard `{ "data": T }` response envelope.
#[derive(Debug, Deserialize)]
pub struct DataResponse<T> {
    pub data: T,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unwraps_the_envelope() {
        let parsed: DataResponse<Vec<i64>> =
            serde_json::from_str(r#"{"data":[1,2,3]}"#).unwrap();
        assert_eq!(parsed.data, vec![1, 2, 3]);
    }
}
