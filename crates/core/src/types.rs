//! Request and response bodies exchanged with the job board API

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};

/// Shown when a search comes back empty
pub const NO_JOBS_FOUND: &str = "No jobs found.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub fullname: String,
    pub email: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub profile_picture: Option<String>,
    #[serde(default)]
    pub resume: Option<String>,
}

/// Login request body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Login response; the backend may omit `redirect_url`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    #[serde(default)]
    pub redirect_url: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub user: Option<User>,
}

/// A file attached to a multipart form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Upload {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// Account registration form, sent as multipart
#[derive(Debug, Clone, Default)]
pub struct Registration {
    pub fullname: String,
    pub email: String,
    pub password: String,
    pub profile_picture: Option<Upload>,
    pub resume: Option<Upload>,
}

impl Registration {
    /// Names of required text fields that are blank
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("fullname", &self.fullname),
            ("email", &self.email),
            ("password", &self.password),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    pub id: i64,
    pub job_title: String,
    pub description: String,
    #[serde(default)]
    pub job_type: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub date_posted: Option<String>,
    #[serde(default)]
    pub application_deadline: Option<String>,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub company_id: Option<i64>,
    #[serde(default)]
    pub experience_level: String,
    #[serde(default)]
    pub job_status: Option<String>,
    #[serde(default)]
    pub application_link: String,
}

/// Job posting payload
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewJob {
    pub job_title: String,
    pub description: String,
    pub job_type: String,
    pub category: String,
    pub company_id: i64,
    pub experience_level: String,
    pub application_link: String,
    /// Server default is `Remote`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_deadline: Option<String>,
}

/// One listing from the external job search
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct JobHit {
    pub title: String,
    pub description: String,
    pub city: Option<String>,
    pub country: Option<String>,
    #[serde(rename = "hiringOrganizationName")]
    pub hiring_organization_name: Option<String>,
    pub created_at: Option<String>,
    pub url: Option<String>,
}

impl JobHit {
    /// "City, Country" with whichever parts are known
    pub fn location_label(&self) -> String {
        [self.city.as_deref(), self.country.as_deref()]
            .into_iter()
            .flatten()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Date part of `created_at`
    pub fn posted_on(&self) -> Option<String> {
        let raw = self.created_at.as_deref()?;
        chrono::DateTime::parse_from_rfc3339(raw)
            .map(|dt| dt.date_naive().to_string())
            .ok()
            .or_else(|| raw.get(..10).map(ToString::to_string))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub hits: Vec<JobHit>,
}

impl SearchResponse {
    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    pub id: i64,
    pub company_name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub website_url: String,
    #[serde(default)]
    pub company_size: String,
    #[serde(default)]
    pub industry: String,
    #[serde(default)]
    pub logo: Option<String>,
    #[serde(default)]
    pub contact_email: String,
}

/// Company creation payload
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCompany {
    pub company_name: String,
    pub description: String,
    pub website_url: String,
    pub company_size: String,
    pub industry: String,
    pub contact_email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Application {
    pub id: i64,
    #[serde(default)]
    pub user_id: Option<i64>,
    #[serde(default)]
    pub job_id: Option<i64>,
    #[serde(default)]
    pub application_date: Option<String>,
    #[serde(default = "Application::default_status")]
    pub status: String,
    #[serde(default)]
    pub resume: Option<String>,
    #[serde(default)]
    pub cover_letter: Option<String>,
    #[serde(default)]
    pub job_title: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
}

impl Application {
    fn default_status() -> String {
        "applied".to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplyRequest {
    pub job_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_letter: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(alias = "fullname")]
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub bio: Option<String>,
}

/// Job seeker dashboard; fields beyond `user` are kept as-is
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dashboard {
    #[serde(default)]
    pub user: Option<User>,
    #[serde(flatten)]
    pub extra: Map<String, JsonValue>,
}

/// Acknowledgement-only responses
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: Option<String>,
}
