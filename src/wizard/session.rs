//! Session state: the inputs collected so far
//!
//! A session lives for one run of the wizard and is never persisted.

use uuid::Uuid;

use crate::api::GenerateRequest;

/// An input the submit check found missing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingInput {
    Resume,
    JobPosting,
    Considerations,
}

impl MissingInput {
    pub fn message(&self) -> &'static str {
        match self {
            Self::Resume => "Resume validation is missing.",
            Self::JobPosting => "Job posting validation is missing.",
            Self::Considerations => "Special considerations validation is missing.",
        }
    }
}

/// Inputs accepted by the service
///
/// `considerations` of `Some("")` means the user skipped the step, which is
/// different from never having answered it.
#[derive(Debug, Clone)]
pub struct SessionState {
    id: Uuid,
    resume_text: Option<String>,
    job_posting_text: Option<String>,
    considerations: Option<String>,
}

impl SessionState {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            resume_text: None,
            job_posting_text: None,
            considerations: None,
        }
    }

    /// Identifier used to correlate log lines
    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn resume_text(&self) -> Option<&str> {
        self.resume_text.as_deref()
    }

    pub fn job_posting_text(&self) -> Option<&str> {
        self.job_posting_text.as_deref()
    }

    pub fn considerations(&self) -> Option<&str> {
        self.considerations.as_deref()
    }

    pub(crate) fn record_resume(&mut self, text: String) {
        self.resume_text = Some(text);
    }

    pub(crate) fn record_job_posting(&mut self, text: String) {
        self.job_posting_text = Some(text);
    }

    pub(crate) fn record_considerations(&mut self, text: String) {
        self.considerations = Some(text);
    }

    /// Inputs the generation request still lacks, in step order
    pub fn missing_inputs(&self) -> Vec<MissingInput> {
        let mut missing = Vec::new();
        if self.resume_text.as_deref().map_or(true, str::is_empty) {
            missing.push(MissingInput::Resume);
        }
        if self.job_posting_text.as_deref().map_or(true, str::is_empty) {
            missing.push(MissingInput::JobPosting);
        }
        if self.considerations.is_none() {
            missing.push(MissingInput::Considerations);
        }
        missing
    }

    pub fn is_complete(&self) -> bool {
        self.missing_inputs().is_empty()
    }

    /// Build the generation request, if every input is present
    pub fn generate_request(&self) -> Option<GenerateRequest> {
        if !self.is_complete() {
            return None;
        }
        Some(GenerateRequest {
            resume_text: self.resume_text.clone()?,
            job_posting_text: self.job_posting_text.clone()?,
            considerations: self.considerations.clone()?,
        })
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_is_missing_everything() {
        let session = SessionState::new();
        assert_eq!(
            session.missing_inputs(),
            vec![
                MissingInput::Resume,
                MissingInput::JobPosting,
                MissingInput::Considerations
            ]
        );
        assert!(session.generate_request().is_none());
    }

    #[test]
    fn test_empty_considerations_count_as_set() {
        let mut session = SessionState::new();
        session.record_resume("resume".into());
        session.record_job_posting("posting".into());
        session.record_considerations(String::new());

        assert!(session.is_complete());
        let request = session.generate_request().unwrap();
        assert_eq!(request.considerations, "");
    }

    #[test]
    fn test_empty_resume_text_is_missing() {
        let mut session = SessionState::new();
        session.record_resume(String::new());
        session.record_job_posting("posting".into());
        session.record_considerations("remote only".into());

        assert_eq!(session.missing_inputs(), vec![MissingInput::Resume]);
    }

    #[test]
    fn test_sessions_have_distinct_ids() {
        assert_ne!(SessionState::new().id(), SessionState::new().id());
    }
}
