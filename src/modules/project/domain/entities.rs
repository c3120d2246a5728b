use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Externalized project shape. The store identifier is rendered as a plain
/// string, store-internal timestamps never appear, and absent optional links
/// are omitted rather than emitted as `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRecord {
    #[schema(example = "123e4567-e89b-12d3-a456-426614174000")]
    pub id: String,

    #[schema(example = "rust-portfolio")]
    pub slug: String,

    pub title: String,

    pub description: String,

    pub tags: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_optional_fields_are_omitted() {
        let record = ProjectRecord {
            id: "abc".to_string(),
            slug: "site".to_string(),
            title: "Site".to_string(),
            description: "desc".to_string(),
            tags: vec![],
            link: None,
            github: None,
            image: None,
        };

        let json = serde_json::to_value(&record).unwrap();
        let obj = json.as_object().unwrap();

        assert!(!obj.contains_key("link"));
        assert!(!obj.contains_key("github"));
        assert!(!obj.contains_key("image"));
        assert!(obj.values().all(|v| !v.is_null()));
    }
}
