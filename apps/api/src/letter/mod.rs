//! Application-letter generation — builds a structured letter prompt from a
//! CV and a job post, calls the provider once, and parses the reply into a
//! `{subject, body}` pair. Unlike the analyzers there is no meaningful
//! fallback for a letter, so an unparseable reply is a hard error.

pub mod handlers;
pub mod prompts;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LetterRequest {
    pub cv_text: String,
    pub job_post: String,
    /// "indonesia" (default) or "english".
    #[serde(default)]
    pub output_language: String,
    /// Where the vacancy was found: linkedin (default), jobportal, company,
    /// email, other.
    #[serde(default)]
    pub source_job: String,
    #[serde(default)]
    pub company_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Letter {
    pub subject: String,
    pub body: String,
}
