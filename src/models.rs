//! `GET /v1/models`

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::ApiError;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListModelsOutput {
    #[serde(default)]
    pub object: String,

    #[serde(default)]
    pub data: Vec<Model>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiError>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Model {
    pub id: String,

    #[serde(default)]
    pub object: String,

    #[serde(default)]
    pub created: i64,

    #[serde(default)]
    pub owned_by: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub permission: Vec<ModelPermission>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelPermission {
    pub id: String,
    pub object: String,
    pub created: i64,
    pub allow_create_engine: bool,
    pub allow_sampling: bool,
    pub allow_logprobs: bool,
    pub allow_search_indices: bool,
    pub allow_view: bool,
    pub allow_fine_tuning: bool,
    pub organization: String,
    pub group: Option<serde_json::Value>,
    pub is_blocking: bool,
}

impl ListModelsOutput {
    pub fn model(&self, id: &str) -> Option<&Model> {
        self.data.iter().find(|model| model.id == id)
    }
}

impl fmt::Display for ListModelsOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let json = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_model_list() {
        let body = r#"{
            "object": "list",
            "data": [
                {
                    "id": "gpt-4o-mini",
                    "object": "model",
                    "created": 1721172741,
                    "owned_by": "system"
                },
                {
                    "id": "whisper-1",
                    "object": "model",
                    "created": 1677532384,
                    "owned_by": "openai-internal",
                    "permission": [{
                        "id": "modelperm-1",
                        "object": "model_permission",
                        "allow_sampling": true,
                        "organization": "*",
                        "group": null
                    }],
                    "root": "whisper-1",
                    "parent": null
                }
            ]
        }"#;

        let output: ListModelsOutput = serde_json::from_str(body).unwrap();
        assert_eq!(output.object, "list");
        assert_eq!(output.data.len(), 2);
        assert!(output.error.is_none());

        let whisper = output.model("whisper-1").unwrap();
        assert_eq!(whisper.owned_by, "openai-internal");
        assert_eq!(whisper.permission.len(), 1);
        assert!(whisper.permission[0].allow_sampling);
        assert!(!whisper.permission[0].allow_view);
        assert!(output.model("missing").is_none());
    }

    #[test]
    fn test_display_is_compact_json() {
        let output = ListModelsOutput {
            object: "list".to_string(),
            ..Default::default()
        };
        assert_eq!(output.to_string(), r#"{"object":"list","data":[]}"#);
    }
}
