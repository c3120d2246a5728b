use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::shared::validation::{validate_required, ValidationError};

/// The single resume document. Only one ever exists; it is replaced as a
/// whole on every admin update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Resume {
    pub summary: String,

    pub contact: Contact,

    #[serde(default)]
    pub experience: Vec<Experience>,

    #[serde(default)]
    pub skills: Vec<String>,

    pub education: Education,

    #[serde(default)]
    pub certifications: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resume_link: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Contact {
    #[schema(example = "me@example.com")]
    pub email: String,
    pub mobile: String,
    pub linkedin: String,
    pub github: String,
    pub leetcode: String,
    pub location: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Experience {
    pub role: String,
    pub company: String,
    #[schema(example = "2021 - Present")]
    pub duration: String,
    pub description: String,
    #[serde(default)]
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Education {
    pub degree: String,
    pub university: String,
    pub year: String,
}

impl Resume {
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_required("summary", &self.summary)?;
        validate_required("contact.email", &self.contact.email)?;
        for exp in &self.experience {
            validate_required("experience.role", &exp.role)?;
            validate_required("experience.company", &exp.company)?;
        }
        Ok(())
    }
}
