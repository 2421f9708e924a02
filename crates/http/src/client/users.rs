//! Account API client methods

use super::{ApiClient, ClientError, RequestOptions};
use jobboard_core::types::{Credentials, Dashboard, LoginResponse, Profile, Registration, User};
use reqwest::multipart::{Form, Part};

impl ApiClient {
    /// Register an account; file fields go out as multipart parts
    pub async fn register(&self, registration: Registration) -> Result<User, ClientError> {
        let form = registration_form(registration)?;
        self.call(
            "/api/users/register",
            RequestOptions::post().multipart(form),
        )
        .await
    }

    /// Exchange credentials for a bearer token
    pub async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, ClientError> {
        // A 401 here means bad credentials, not a lapsed session
        self.call("/api/users/login", RequestOptions::post().json(credentials)?)
            .await
            .map_err(|err| match err {
                ClientError::SessionExpired(message) => ClientError::Request {
                    status: 401,
                    message,
                },
                other => other,
            })
    }

    /// Job seeker dashboard (requires authentication)
    pub async fn job_seeker_dashboard(&self) -> Result<Dashboard, ClientError> {
        self.get("/api/users/job_seeker_dashboard").await
    }

    /// Current user's profile (requires authentication)
    pub async fn profile(&self) -> Result<Profile, ClientError> {
        self.get("/api/user/profile").await
    }
}

fn registration_form(registration: Registration) -> Result<Form, ClientError> {
    let Registration {
        fullname,
        email,
        password,
        profile_picture,
        resume,
    } = registration;

    let mut form = Form::new()
        .text("fullname", fullname)
        .text("email", email)
        .text("password", password);

    for (field, upload) in [("profile_picture", profile_picture), ("resume", resume)] {
        if let Some(upload) = upload {
            let part = Part::bytes(upload.bytes)
                .file_name(upload.file_name)
                .mime_str(&upload.content_type)
                .map_err(|e| {
                    ClientError::Configuration(format!("invalid content type for {field}: {e}"))
                })?;
            form = form.part(field, part);
        }
    }

    Ok(form)
}
