// --- File: crates/stocktake_gateway/src/models.rs ---
//! Wire model conventions and the response types the gateway owns.
//!
//! Backend payloads are JSON with camelCase member names. Model types across
//! the app crates follow the same serde conventions so every payload crosses
//! the wire identically:
//!
//! * `#[serde(rename_all = "camelCase")]` on every wire struct
//! * enums travel as their variant names (serde's default for unit variants)
//! * timestamps are `chrono::DateTime<Utc>`; offsets in incoming payloads
//!   are normalized to UTC on deserialization
//! * optional fields carry `#[serde(skip_serializing_if = "Option::is_none")]`
//!   so absent values are omitted instead of serialized as null

use serde::{Deserialize, Serialize};

/// Response returned by the image upload endpoint.
///
/// The app only checks that the upload succeeded and threads the payload
/// through unchanged, so the body stays raw JSON instead of a typed model.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UploadImageResponse(pub serde_json::Value);

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, TimeZone, Utc};

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    enum CountState {
        Counted,
        Missing,
    }

    // Sample wire type exercising every convention above.
    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    struct StockCount {
        item_id: u64,
        state: CountState,
        counted_at: DateTime<Utc>,
        #[serde(skip_serializing_if = "Option::is_none")]
        note: Option<String>,
    }

    #[test]
    fn test_fields_serialize_in_camel_case_with_enum_names() {
        let count = StockCount {
            item_id: 12,
            state: CountState::Missing,
            counted_at: Utc.with_ymd_and_hms(2024, 5, 1, 8, 0, 0).unwrap(),
            note: Some("rear shelf".to_string()),
        };
        let json = serde_json::to_value(&count).unwrap();
        assert_eq!(json["itemId"], 12);
        assert_eq!(json["state"], "Missing");
        assert_eq!(json["countedAt"], "2024-05-01T08:00:00Z");
        assert_eq!(json["note"], "rear shelf");
    }

    #[test]
    fn test_absent_optionals_are_omitted_not_null() {
        let count = StockCount {
            item_id: 3,
            state: CountState::Counted,
            counted_at: Utc.with_ymd_and_hms(2024, 5, 1, 8, 0, 0).unwrap(),
            note: None,
        };
        let json = serde_json::to_value(&count).unwrap();
        assert!(json.as_object().unwrap().get("note").is_none());
    }

    #[test]
    fn test_round_trip_preserves_payloads_with_missing_optionals() {
        let original = StockCount {
            item_id: 3,
            state: CountState::Counted,
            counted_at: Utc.with_ymd_and_hms(2024, 5, 1, 8, 0, 0).unwrap(),
            note: None,
        };
        let json = serde_json::to_string(&original).unwrap();
        let back: StockCount = serde_json::from_str(&json).unwrap();
        assert_eq!(back, original);
    }

    #[test]
    fn test_offset_timestamps_normalize_to_utc() {
        let json = r#"{
            "itemId": 9,
            "state": "Counted",
            "countedAt": "2024-05-01T10:00:00+02:00"
        }"#;
        let count: StockCount = serde_json::from_str(json).unwrap();
        assert_eq!(
            count.counted_at,
            Utc.with_ymd_and_hms(2024, 5, 1, 8, 0, 0).unwrap()
        );
        assert_eq!(count.note, None);
    }

    #[test]
    fn test_upload_response_is_transparent_json() {
        let body = r#"{"status":"ok","paths":["2024/05/01/a.jpg"]}"#;
        let response: UploadImageResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.0["status"], "ok");

        let reserialized: serde_json::Value =
            serde_json::from_str(&serde_json::to_string(&response).unwrap()).unwrap();
        assert_eq!(reserialized, response.0);
    }
}
