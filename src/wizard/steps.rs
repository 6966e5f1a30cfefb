//! The fixed step sequence
//!
//! Each step pairs a prompt with the kind of action that completes it.

use super::renderer::InputWidget;
use crate::api::ResumeUpload;

/// What a step needs before the wizard can move past it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepKind {
    /// Message only; the wizard moves straight on
    Message,
    /// Resume file picker
    FileUpload,
    /// Job posting URL field
    UrlInput,
    /// Special considerations field (empty skips)
    TextInput,
    /// Check that every input has been collected
    SubmitCheck,
    /// Request the tailored document
    Generate,
}

impl StepKind {
    /// The input widget this step activates
    pub fn input_widget(&self) -> InputWidget {
        match self {
            Self::FileUpload => InputWidget::FilePicker {
                accept: ResumeUpload::accept_list(),
            },
            Self::UrlInput | Self::TextInput => InputWidget::TextField,
            Self::Message | Self::SubmitCheck | Self::Generate => InputWidget::Hidden,
        }
    }
}

/// One step of the wizard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub prompt: &'static str,
    pub kind: StepKind,
}

impl Step {
    pub const fn new(prompt: &'static str, kind: StepKind) -> Self {
        Self { prompt, kind }
    }
}

/// The wizard's step sequence
pub const STEPS: &[Step] = &[
    Step::new("Welcome to the Resume Righter Terminal!", StepKind::Message),
    Step::new(
        "This application will help you take your resume and tailor it to the job listing that you are applying for!",
        StepKind::Message,
    ),
    Step::new("Step 1: Please upload your resume file.", StepKind::FileUpload),
    Step::new("Step 2: Enter the job posting URL.", StepKind::UrlInput),
    Step::new(
        "Step 3: Add any special considerations (or press Enter to skip).",
        StepKind::TextInput,
    ),
    Step::new("Processing your input... Please wait.", StepKind::SubmitCheck),
    Step::new("Generating your new resume.", StepKind::Generate),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence_order() {
        let kinds: Vec<StepKind> = STEPS.iter().map(|s| s.kind).collect();
        assert_eq!(
            kinds,
            vec![
                StepKind::Message,
                StepKind::Message,
                StepKind::FileUpload,
                StepKind::UrlInput,
                StepKind::TextInput,
                StepKind::SubmitCheck,
                StepKind::Generate,
            ]
        );
    }

    #[test]
    fn test_file_upload_widget_carries_accept_list() {
        assert_eq!(
            StepKind::FileUpload.input_widget(),
            InputWidget::FilePicker {
                accept: ".txt,.docx,.pdf".into()
            }
        );
        assert_eq!(StepKind::Generate.input_widget(), InputWidget::Hidden);
    }
}
