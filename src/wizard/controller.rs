//! Wizard controller
//!
//! Walks the step sequence one step at a time. Interactive steps wait for
//! [`WizardController::handle_file_selected`], [`WizardController::handle_file_path`]
//! or [`WizardController::handle_enter`]; the cursor only moves once the
//! backend has accepted the input (or the considerations step is skipped).
//! Automatic steps run as soon as they are entered.

use tracing::{debug, info, warn};

use super::download::DOWNLOAD_FILENAME;
use super::renderer::{InputWidget, MessageKind, Renderer};
use super::session::SessionState;
use super::steps::{Step, StepKind, STEPS};
use crate::api::{Backend, ResumeUpload};

pub const RESUME_ACCEPTED: &str = "The uploaded file is a valid resume!";
pub const RESUME_REJECTED: &str = "The uploaded file is NOT a valid resume.";
pub const RESUME_FAILED: &str = "An error occurred while validating the resume.";
pub const NO_FILE_SELECTED: &str = "No file selected. Please upload a file.";
pub const URL_ACCEPTED: &str = "The URL is a valid job posting!";
pub const URL_REJECTED: &str = "The URL is NOT a valid job posting. Please try again.";
pub const URL_FAILED: &str = "An error occurred while validating the job posting.";
pub const CONSIDERATIONS_SKIPPED: &str =
    "No special considerations provided. Skipping this step.";
pub const CONSIDERATIONS_ACCEPTED: &str = "Special considerations accepted!";
pub const CONSIDERATIONS_REJECTED: &str =
    "Special considerations are not relevant. Please try again.";
pub const CONSIDERATIONS_FAILED: &str =
    "An error occurred while validating special considerations.";
pub const SUBMIT_OK: &str = "All inputs validated successfully.";
pub const GENERATED: &str = "Your rewritten resume has been downloaded!";
pub const GENERATION_FAILED: &str = "An error occurred while generating your resume.";

/// Where the wizard is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardPhase {
    /// Not started yet, or between steps
    Running,
    /// Waiting on the user at an interactive step
    AwaitingInput,
    /// Stopped after a failed submit check or generation
    Halted,
    /// The document was delivered
    Finished,
}

/// Drives the step sequence for one session
pub struct WizardController<B> {
    backend: B,
    steps: &'static [Step],
    cursor: usize,
    started: bool,
    phase: WizardPhase,
    session: SessionState,
}

impl<B: Backend> WizardController<B> {
    /// Create a controller over the standard step sequence
    pub fn new(backend: B) -> Self {
        Self::with_steps(backend, STEPS)
    }

    /// Create a controller over a custom step sequence
    pub fn with_steps(backend: B, steps: &'static [Step]) -> Self {
        Self {
            backend,
            steps,
            cursor: 0,
            started: false,
            phase: WizardPhase::Running,
            session: SessionState::new(),
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn phase(&self) -> WizardPhase {
        self.phase
    }

    /// Index of the active step
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    pub fn current_step(&self) -> Option<&Step> {
        self.steps.get(self.cursor)
    }

    /// Whether the wizard will accept no further input
    pub fn is_done(&self) -> bool {
        matches!(self.phase, WizardPhase::Halted | WizardPhase::Finished)
    }

    /// Render the opening steps up to and including the first interactive one
    ///
    /// Calling this more than once has no effect.
    pub async fn start<R: Renderer>(&mut self, renderer: &mut R) {
        if self.started {
            return;
        }
        self.started = true;
        info!(session_id = %self.session.id(), "Wizard started");
        self.enter_current(renderer).await;
    }

    /// Submit the text field (Enter key)
    #[tracing::instrument(skip_all, fields(session_id = %self.session.id(), step = self.cursor))]
    pub async fn handle_enter<R: Renderer>(&mut self, renderer: &mut R, input: &str) {
        let Some(kind) = self.awaiting_kind() else {
            debug!("Ignoring Enter; wizard is not waiting for input");
            return;
        };

        let input = input.trim();
        match kind {
            StepKind::UrlInput => self.submit_job_posting(renderer, input).await,
            StepKind::TextInput => self.submit_considerations(renderer, input).await,
            other => debug!(?other, "Ignoring Enter on non-text step"),
        }
    }

    /// Resolve a path typed into the file picker, then submit it
    ///
    /// An empty path counts as no file chosen. Unreadable or unsupported
    /// files are reported and the picker stays active.
    pub async fn handle_file_path<R: Renderer>(&mut self, renderer: &mut R, path: &str) {
        if self.awaiting_kind() != Some(StepKind::FileUpload) {
            debug!("Ignoring file path; file picker is not active");
            return;
        }

        let path = path.trim();
        if path.is_empty() {
            self.handle_file_selected(renderer, None).await;
            return;
        }

        match ResumeUpload::from_path(path) {
            Ok(upload) => self.handle_file_selected(renderer, Some(upload)).await,
            Err(e) => {
                warn!(session_id = %self.session.id(), error = %e, "Resume file rejected locally");
                renderer.append(MessageKind::Error, &e.to_string());
            }
        }
    }

    /// Submit the chosen resume file
    #[tracing::instrument(skip_all, fields(session_id = %self.session.id(), step = self.cursor))]
    pub async fn handle_file_selected<R: Renderer>(
        &mut self,
        renderer: &mut R,
        selection: Option<ResumeUpload>,
    ) {
        if self.awaiting_kind() != Some(StepKind::FileUpload) {
            debug!("Ignoring file selection; file picker is not active");
            return;
        }

        let Some(upload) = selection else {
            renderer.append(MessageKind::Error, NO_FILE_SELECTED);
            return;
        };

        info!(file = %upload.file_name, size = upload.bytes.len(), "Validating resume");
        match self.backend.validate_resume(&upload).await {
            Ok(result) if result.valid => {
                renderer.append(MessageKind::Success, RESUME_ACCEPTED);
                self.session.record_resume(result.text);
                renderer.clear_input();
                self.advance(renderer).await;
            }
            Ok(_) => renderer.append(MessageKind::Error, RESUME_REJECTED),
            Err(e) => {
                warn!(error = %e, "Resume validation failed");
                renderer.append(MessageKind::Error, RESUME_FAILED);
            }
        }
    }

    async fn submit_job_posting<R: Renderer>(&mut self, renderer: &mut R, url: &str) {
        info!(%url, "Validating job posting");
        match self.backend.validate_job_posting(url).await {
            Ok(result) if result.valid => {
                renderer.append(MessageKind::Success, URL_ACCEPTED);
                self.session.record_job_posting(result.text);
                renderer.clear_input();
                self.advance(renderer).await;
            }
            Ok(_) => renderer.append(MessageKind::Error, URL_REJECTED),
            Err(e) => {
                warn!(error = %e, "Job posting validation failed");
                renderer.append(MessageKind::Error, URL_FAILED);
            }
        }
    }

    async fn submit_considerations<R: Renderer>(&mut self, renderer: &mut R, text: &str) {
        if text.is_empty() {
            info!("No special considerations; skipping validation");
            renderer.append(MessageKind::Info, CONSIDERATIONS_SKIPPED);
            self.session.record_considerations(String::new());
            renderer.clear_input();
            self.advance(renderer).await;
            return;
        }

        info!(len = text.len(), "Validating special considerations");
        match self.backend.validate_considerations(text).await {
            Ok(result) if result.valid => {
                renderer.append(MessageKind::Success, CONSIDERATIONS_ACCEPTED);
                self.session.record_considerations(result.text);
                renderer.clear_input();
                self.advance(renderer).await;
            }
            Ok(_) => renderer.append(MessageKind::Error, CONSIDERATIONS_REJECTED),
            Err(e) => {
                warn!(error = %e, "Special considerations validation failed");
                renderer.append(MessageKind::Error, CONSIDERATIONS_FAILED);
            }
        }
    }

    /// Move past the current step and enter the next one
    async fn advance<R: Renderer>(&mut self, renderer: &mut R) {
        self.cursor += 1;
        self.enter_current(renderer).await;
    }

    /// Render the step under the cursor and run it if it is automatic
    ///
    /// Loops over message-only steps and a passing submit check rather than
    /// recursing through `advance`.
    async fn enter_current<R: Renderer>(&mut self, renderer: &mut R) {
        self.phase = WizardPhase::Running;

        loop {
            let Some(step) = self.steps.get(self.cursor).copied() else {
                info!(session_id = %self.session.id(), "Step sequence exhausted");
                renderer.show_input(InputWidget::Hidden);
                self.phase = WizardPhase::Finished;
                return;
            };

            debug!(session_id = %self.session.id(), step = self.cursor, kind = ?step.kind, "Entering step");
            renderer.append(MessageKind::Prompt, step.prompt);

            match step.kind {
                StepKind::Message => {
                    renderer.show_input(InputWidget::Hidden);
                    self.cursor += 1;
                }
                StepKind::FileUpload | StepKind::UrlInput | StepKind::TextInput => {
                    renderer.show_input(step.kind.input_widget());
                    self.phase = WizardPhase::AwaitingInput;
                    return;
                }
                StepKind::SubmitCheck => {
                    renderer.show_input(InputWidget::Hidden);
                    if !self.submit_check(renderer) {
                        self.phase = WizardPhase::Halted;
                        return;
                    }
                    self.cursor += 1;
                }
                StepKind::Generate => {
                    renderer.show_input(InputWidget::Hidden);
                    self.generate(renderer).await;
                    return;
                }
            }
        }
    }

    fn submit_check<R: Renderer>(&mut self, renderer: &mut R) -> bool {
        let missing = self.session.missing_inputs();
        if missing.is_empty() {
            renderer.append(MessageKind::Success, SUBMIT_OK);
            return true;
        }

        warn!(session_id = %self.session.id(), ?missing, "Submit check failed");
        for input in missing {
            renderer.append(MessageKind::Error, input.message());
        }
        false
    }

    async fn generate<R: Renderer>(&mut self, renderer: &mut R) {
        let Some(request) = self.session.generate_request() else {
            warn!(session_id = %self.session.id(), "Generation requested with incomplete session");
            renderer.append(MessageKind::Error, GENERATION_FAILED);
            self.phase = WizardPhase::Halted;
            return;
        };

        info!(session_id = %self.session.id(), "Requesting tailored resume");
        let document = match self.backend.generate_resume(&request).await {
            Ok(document) => document,
            Err(e) => {
                warn!(session_id = %self.session.id(), error = %e, "Resume generation failed");
                renderer.append(MessageKind::Error, GENERATION_FAILED);
                self.phase = WizardPhase::Halted;
                return;
            }
        };

        match renderer.deliver_download(DOWNLOAD_FILENAME, &document) {
            Ok(path) => {
                info!(session_id = %self.session.id(), path = %path.display(), bytes = document.len(), "Document delivered");
                renderer.append(MessageKind::Success, GENERATED);
                self.phase = WizardPhase::Finished;
            }
            Err(e) => {
                warn!(session_id = %self.session.id(), error = %e, "Could not save generated document");
                renderer.append(MessageKind::Error, GENERATION_FAILED);
                self.phase = WizardPhase::Halted;
            }
        }
    }

    fn awaiting_kind(&self) -> Option<StepKind> {
        if self.phase != WizardPhase::AwaitingInput {
            return None;
        }
        self.current_step().map(|s| s.kind)
    }
}
