//! Plain-text rendering of API results

use jobboard_core::types::{
    Application, Company, Dashboard, Job, NO_JOBS_FOUND, Profile, SearchResponse, User,
};
use std::fmt::Write;

pub fn search_results(results: &SearchResponse) -> String {
    if results.is_empty() {
        return NO_JOBS_FOUND.to_string();
    }

    let mut out = String::new();
    for hit in &results.hits {
        let _ = writeln!(out, "{}", hit.title);
        if let Some(org) = &hit.hiring_organization_name {
            let _ = writeln!(out, "  Company: {org}");
        }
        let location = hit.location_label();
        if !location.is_empty() {
            let _ = writeln!(out, "  Location: {location}");
        }
        if let Some(posted) = hit.posted_on() {
            let _ = writeln!(out, "  Posted: {posted}");
        }
        if let Some(url) = &hit.url {
            let _ = writeln!(out, "  {url}");
        }
    }
    out.trim_end().to_string()
}

pub fn jobs(jobs: &[Job]) -> String {
    if jobs.is_empty() {
        return NO_JOBS_FOUND.to_string();
    }
    jobs.iter()
        .map(|job| format!("[{}] {} ({}, {})", job.id, job.job_title, job.job_type, job.location))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn job(job: &Job) -> String {
    let mut out = format!("[{}] {}\n", job.id, job.job_title);
    let _ = writeln!(out, "Type: {}", job.job_type);
    let _ = writeln!(out, "Location: {}", job.location);
    let _ = writeln!(out, "Category: {}", job.category);
    let _ = writeln!(out, "Experience: {}", job.experience_level);
    if let Some(deadline) = &job.application_deadline {
        let _ = writeln!(out, "Deadline: {deadline}");
    }
    if !job.application_link.is_empty() {
        let _ = writeln!(out, "Apply: {}", job.application_link);
    }
    let _ = write!(out, "\n{}", job.description);
    out
}

pub fn companies(companies: &[Company]) -> String {
    if companies.is_empty() {
        return "No companies found.".to_string();
    }
    companies
        .iter()
        .map(|c| format!("[{}] {} - {} ({})", c.id, c.company_name, c.industry, c.company_size))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn applications(applications: &[Application]) -> String {
    if applications.is_empty() {
        return "No applications yet.".to_string();
    }
    applications
        .iter()
        .map(|a| {
            let title = a
                .job_title
                .clone()
                .or_else(|| a.job_id.map(|id| format!("job {id}")))
                .unwrap_or_else(|| "unknown job".to_string());
            match &a.company {
                Some(company) => format!("[{}] {title} at {company}: {}", a.id, a.status),
                None => format!("[{}] {title}: {}", a.id, a.status),
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn profile(profile: &Profile) -> String {
    let mut out = format!("{} <{}>", profile.name, profile.email);
    if let Some(bio) = profile.bio.as_deref().filter(|b| !b.trim().is_empty()) {
        let _ = write!(out, "\n{bio}");
    }
    out
}

pub fn user(user: &User) -> String {
    format!("{} <{}> ({})", user.fullname, user.email, user.role)
}

pub fn dashboard(dashboard: &Dashboard) -> String {
    let mut out = dashboard
        .user
        .as_ref()
        .map_or_else(|| "Dashboard".to_string(), |u| format!("Welcome, {}", u.fullname));
    for (key, value) in &dashboard.extra {
        let _ = write!(out, "\n{key}: {value}");
    }
    out
}
