use serde::{Deserialize, Serialize};

/// Body of `POST /api/worlds`.
///
/// Dimensions are wide integers so out-of-range values reach validation and
/// come back as a field error instead of a deserialization failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateWorldRequest {
    pub name: String,
    pub width: i64,
    pub height: i64,
}

/// Body of `POST /api/worlds/{id}/objects`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddObjectRequest {
    #[serde(rename = "type")]
    pub object_type: String,
    pub x: f64,
    pub y: f64,
}
