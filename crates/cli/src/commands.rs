//! CLI commands

use anyhow::{Context, Result};
use clap::Subcommand;
use jobboard_core::TokenStatus;
use jobboard_core::token;
use jobboard_core::types::{ApplyRequest, Credentials, NewCompany, NewJob, Registration, Upload};
use jobboard_http::{ClientError, GuardedClient};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::render;

#[derive(Subcommand)]
pub enum Commands {
    /// Sign in and store the access token
    Login {
        #[arg(long)]
        email: String,

        #[arg(long, env = "JOBBOARD_PASSWORD", hide_env_values = true)]
        password: String,
    },

    /// Forget the stored access token
    Logout,

    /// Show whether a usable session is stored
    Status,

    /// Create an account
    Register {
        #[arg(long)]
        fullname: String,

        #[arg(long)]
        email: String,

        #[arg(long, env = "JOBBOARD_PASSWORD", hide_env_values = true)]
        password: String,

        /// Image to upload as the profile picture
        #[arg(long)]
        profile_picture: Option<PathBuf>,

        /// Resume document to upload
        #[arg(long)]
        resume: Option<PathBuf>,
    },

    /// Search external job listings
    Search {
        /// Search terms
        query: String,
    },

    /// Posted jobs
    Jobs {
        #[command(subcommand)]
        command: JobCommands,
    },

    /// Companies
    Companies {
        #[command(subcommand)]
        command: CompanyCommands,
    },

    /// Your job applications
    Applications {
        #[command(subcommand)]
        command: ApplicationCommands,
    },

    /// Show your profile
    Profile,

    /// Show the job seeker dashboard
    Dashboard,
}

#[derive(Subcommand)]
pub enum JobCommands {
    /// List posted jobs
    List,

    /// Show one job
    Show { id: i64 },

    /// Post a job
    Post {
        #[arg(long)]
        title: String,

        #[arg(long)]
        description: String,

        #[arg(long, default_value = "Full-time")]
        job_type: String,

        #[arg(long)]
        category: String,

        #[arg(long)]
        company_id: i64,

        #[arg(long)]
        experience_level: String,

        #[arg(long)]
        application_link: String,

        /// Defaults to Remote on the server
        #[arg(long)]
        location: Option<String>,

        /// Deadline date (YYYY-MM-DD)
        #[arg(long)]
        deadline: Option<String>,
    },

    /// Delete a job
    Delete { id: i64 },
}

#[derive(Subcommand)]
pub enum CompanyCommands {
    /// List companies
    List,

    /// Register a company
    Create {
        #[arg(long)]
        name: String,

        #[arg(long)]
        description: String,

        #[arg(long)]
        website: String,

        #[arg(long)]
        size: String,

        #[arg(long)]
        industry: String,

        #[arg(long)]
        contact_email: String,
    },
}

#[derive(Subcommand)]
pub enum ApplicationCommands {
    /// List your applications
    List,

    /// Apply to a job
    Apply {
        job_id: i64,

        #[arg(long)]
        cover_letter: Option<String>,
    },

    /// Withdraw an application
    Withdraw { id: i64 },
}

impl Commands {
    pub async fn execute(self, client: &GuardedClient) -> Result<()> {
        match self {
            Commands::Login { email, password } => login(client, email, password).await,
            Commands::Logout => {
                client.sign_out().map_err(user_facing)?;
                println!("Signed out.");
                Ok(())
            }
            Commands::Status => {
                status(client);
                Ok(())
            }
            Commands::Register {
                fullname,
                email,
                password,
                profile_picture,
                resume,
            } => {
                let registration = Registration {
                    fullname,
                    email,
                    password,
                    profile_picture: profile_picture.as_deref().map(read_upload).transpose()?,
                    resume: resume.as_deref().map(read_upload).transpose()?,
                };
                register(client, registration).await
            }
            Commands::Search { query } => {
                let results = client.api().search_jobs(&query).await.map_err(user_facing)?;
                println!("{}", render::search_results(&results));
                Ok(())
            }
            Commands::Jobs { command } => command.execute(client).await,
            Commands::Companies { command } => command.execute(client).await,
            Commands::Applications { command } => command.execute(client).await,
            Commands::Profile => {
                let profile = client.profile().await.map_err(user_facing)?;
                println!("{}", render::profile(&profile));
                Ok(())
            }
            Commands::Dashboard => {
                let dashboard = client.dashboard().await.map_err(user_facing)?;
                println!("{}", render::dashboard(&dashboard));
                Ok(())
            }
        }
    }
}

impl JobCommands {
    pub async fn execute(self, client: &GuardedClient) -> Result<()> {
        match self {
            JobCommands::List => {
                let jobs = client.api().list_jobs().await.map_err(user_facing)?;
                println!("{}", render::jobs(&jobs));
            }
            JobCommands::Show { id } => {
                let job = client.api().get_job(id).await.map_err(user_facing)?;
                println!("{}", render::job(&job));
            }
            JobCommands::Post {
                title,
                description,
                job_type,
                category,
                company_id,
                experience_level,
                application_link,
                location,
                deadline,
            } => {
                let new_job = NewJob {
                    job_title: title,
                    description,
                    job_type,
                    category,
                    company_id,
                    experience_level,
                    application_link,
                    location,
                    application_deadline: deadline,
                };
                let job = client.create_job(&new_job).await.map_err(user_facing)?;
                info!(id = job.id, "Job posted");
                println!("Job posted successfully!");
                println!("{}", render::job(&job));
            }
            JobCommands::Delete { id } => {
                let ack = client.delete_job(id).await.map_err(user_facing)?;
                println!("{}", ack.message.unwrap_or_else(|| format!("Job {id} deleted.")));
            }
        }
        Ok(())
    }
}

impl CompanyCommands {
    pub async fn execute(self, client: &GuardedClient) -> Result<()> {
        match self {
            CompanyCommands::List => {
                let companies = client.api().list_companies().await.map_err(user_facing)?;
                println!("{}", render::companies(&companies));
            }
            CompanyCommands::Create {
                name,
                description,
                website,
                size,
                industry,
                contact_email,
            } => {
                let company = NewCompany {
                    company_name: name,
                    description,
                    website_url: website,
                    company_size: size,
                    industry,
                    contact_email,
                };
                let company = client.create_company(&company).await.map_err(user_facing)?;
                println!("Company created: [{}] {}", company.id, company.company_name);
            }
        }
        Ok(())
    }
}

impl ApplicationCommands {
    pub async fn execute(self, client: &GuardedClient) -> Result<()> {
        match self {
            ApplicationCommands::List => {
                let applications = client.list_applications().await.map_err(user_facing)?;
                println!("{}", render::applications(&applications));
            }
            ApplicationCommands::Apply {
                job_id,
                cover_letter,
            } => {
                let request = ApplyRequest {
                    job_id,
                    cover_letter,
                };
                let application = client.apply(&request).await.map_err(user_facing)?;
                println!("Application submitted: [{}] {}", application.id, application.status);
            }
            ApplicationCommands::Withdraw { id } => {
                let ack = client.withdraw_application(id).await.map_err(user_facing)?;
                println!(
                    "{}",
                    ack.message.unwrap_or_else(|| format!("Application {id} withdrawn."))
                );
            }
        }
        Ok(())
    }
}

async fn login(client: &GuardedClient, email: String, password: String) -> Result<()> {
    let credentials = Credentials { email, password };
    let response = client.sign_in(&credentials).await.map_err(user_facing)?;
    println!(
        "{}",
        response.message.as_deref().unwrap_or("Login successful")
    );
    Ok(())
}

async fn register(client: &GuardedClient, registration: Registration) -> Result<()> {
    let missing = registration.missing_fields();
    if !missing.is_empty() {
        anyhow::bail!("Missing required fields: {}", missing.join(", "));
    }

    let user = client.api().register(registration).await.map_err(user_facing)?;
    println!("Registration successful: {}", render::user(&user));
    Ok(())
}

fn status(client: &GuardedClient) {
    let Some(stored) = client.guard().store().get() else {
        println!("Not signed in.");
        return;
    };

    match token::inspect(&stored, token::now_millis()) {
        TokenStatus::Valid { expires_at } => {
            println!("Signed in; session expires at {}", format_expiry(expires_at));
        }
        TokenStatus::Expired { expires_at } => {
            println!("Session expired at {}", format_expiry(expires_at));
        }
        TokenStatus::Malformed(reason) => {
            println!("Stored token is unreadable ({reason})");
        }
    }
}

#[allow(clippy::cast_possible_truncation)]
fn format_expiry(expires_at: f64) -> String {
    chrono::DateTime::from_timestamp(expires_at as i64, 0)
        .map_or_else(|| expires_at.to_string(), |dt| dt.to_rfc3339())
}

/// Load a file for a multipart upload
fn read_upload(path: &Path) -> Result<Upload> {
    let bytes =
        std::fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("upload")
        .to_string();
    debug!(%file_name, size = bytes.len(), "Read upload");

    Ok(Upload {
        content_type: content_type_for(path).to_string(),
        file_name,
        bytes,
    })
}

fn content_type_for(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);
    match extension.as_deref() {
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("pdf") => "application/pdf",
        Some("doc") => "application/msword",
        Some("docx") => {
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
        }
        _ => "application/octet-stream",
    }
}

/// Turn a client failure into the message shown to the user
fn user_facing(err: ClientError) -> anyhow::Error {
    debug!("Client error: {err:?}");
    if err.is_silent() {
        anyhow::anyhow!("{err}")
    } else {
        anyhow::anyhow!(err.user_message())
    }
}
