//! `GET /v1/files`

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::ApiError;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListFilesOutput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub object: Option<String>,

    #[serde(default)]
    pub data: Vec<FileObject>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiError>,
}

/// An uploaded file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileObject {
    pub id: String,
    pub object: String,
    /// Size in bytes
    pub bytes: u64,
    /// Unix timestamp
    pub created_at: i64,
    pub filename: String,
    pub purpose: String,
}

impl fmt::Display for ListFilesOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let json = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&json)
    }
}
