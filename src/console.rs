//! Line-mode front-end
//!
//! Runs the same wizard over plain stdin/stdout for terminals where the
//! full-screen UI is unwanted (pipes, CI, screen readers).

use std::io::{BufRead, Write};
use std::path::PathBuf;

use tracing::{info, warn};

use crate::api::Backend;
use crate::error::RighterResult;
use crate::wizard::{save_document, InputWidget, MessageKind, Renderer, WizardController};

/// Prefix printed before each kind of message
fn prefix(kind: MessageKind) -> &'static str {
    match kind {
        MessageKind::Prompt => "",
        MessageKind::Info => "[i] ",
        MessageKind::Success => "[+] ",
        MessageKind::Error => "[x] ",
    }
}

/// Renderer printing to any writer
pub struct ConsoleRenderer<W: Write> {
    out: W,
    widget: InputWidget,
    download_dir: PathBuf,
    last_download: Option<PathBuf>,
}

impl<W: Write> ConsoleRenderer<W> {
    pub fn new(out: W, download_dir: PathBuf) -> Self {
        Self {
            out,
            widget: InputWidget::Hidden,
            download_dir,
            last_download: None,
        }
    }

    pub fn widget(&self) -> &InputWidget {
        &self.widget
    }

    pub fn last_download(&self) -> Option<&PathBuf> {
        self.last_download.as_ref()
    }

    /// Print the input prompt for the active widget
    fn prompt(&mut self) -> RighterResult<()> {
        match &self.widget {
            InputWidget::Hidden => return Ok(()),
            InputWidget::TextField => write!(self.out, "> ")?,
            InputWidget::FilePicker { accept } => write!(self.out, "resume file ({})> ", accept)?,
        }
        self.out.flush()?;
        Ok(())
    }
}

impl<W: Write> Renderer for ConsoleRenderer<W> {
    fn append(&mut self, kind: MessageKind, text: &str) {
        if let Err(e) = writeln!(self.out, "{}{}", prefix(kind), text) {
            warn!(error = %e, "Failed to write console output");
        }
    }

    fn show_input(&mut self, widget: InputWidget) {
        self.widget = widget;
    }

    fn clear_input(&mut self) {
        // Each line is read fresh; nothing to clear
    }

    fn deliver_download(&mut self, filename: &str, document: &[u8]) -> RighterResult<PathBuf> {
        let path = save_document(&self.download_dir, filename, document)?;
        if let Err(e) = writeln!(self.out, "    saved to {}", path.display()) {
            warn!(error = %e, "Failed to write console output");
        }
        self.last_download = Some(path.clone());
        Ok(path)
    }
}

/// Run the wizard reading answers line by line
///
/// Stops when the wizard finishes or halts, or when `input` reaches EOF.
/// Returns the path of the saved document, if one was generated.
pub async fn run_console<B, R, W>(
    mut controller: WizardController<B>,
    mut input: R,
    output: W,
    download_dir: PathBuf,
) -> RighterResult<Option<PathBuf>>
where
    B: Backend,
    R: BufRead,
    W: Write,
{
    let mut renderer = ConsoleRenderer::new(output, download_dir);
    controller.start(&mut renderer).await;

    let mut line = String::new();
    while !controller.is_done() {
        renderer.prompt()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            info!(session_id = %controller.session().id(), "Input closed before the wizard finished");
            break;
        }
        let answer = line.trim_end_matches(&['\r', '\n'][..]);

        let widget = renderer.widget().clone();
        match widget {
            InputWidget::FilePicker { .. } => {
                controller.handle_file_path(&mut renderer, answer).await;
            }
            InputWidget::TextField => controller.handle_enter(&mut renderer, answer).await,
            InputWidget::Hidden => break,
        }
    }

    Ok(renderer.last_download().cloned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{ApiResult, GenerateRequest, ResumeUpload, Validation};
    use crate::wizard::controller::{
        CONSIDERATIONS_SKIPPED, GENERATED, RESUME_ACCEPTED, URL_REJECTED,
    };
    use async_trait::async_trait;
    use bytes::Bytes;
    use std::io::Cursor;
    use tempfile::TempDir;

    /// Accepts everything except URLs containing "bad"
    struct AcceptingBackend;

    #[async_trait]
    impl Backend for AcceptingBackend {
        async fn validate_resume(&self, _upload: &ResumeUpload) -> ApiResult<Validation> {
            Ok(Validation::accepted("resume text"))
        }

        async fn validate_job_posting(&self, url: &str) -> ApiResult<Validation> {
            if url.contains("bad") {
                Ok(Validation::rejected())
            } else {
                Ok(Validation::accepted("posting text"))
            }
        }

        async fn validate_considerations(&self, text: &str) -> ApiResult<Validation> {
            Ok(Validation::accepted(text))
        }

        async fn generate_resume(&self, _request: &GenerateRequest) -> ApiResult<Bytes> {
            Ok(Bytes::from_static(b"PK docx"))
        }
    }

    #[tokio::test]
    async fn test_console_run_saves_document() {
        let temp_dir = TempDir::new().unwrap();
        let resume_path = temp_dir.path().join("cv.txt");
        std::fs::write(&resume_path, "Jane Doe").unwrap();

        let script = format!(
            "{}\nhttps://bad.example\nhttps://jobs.example/1\n\n",
            resume_path.display()
        );
        let mut output = Vec::new();

        let saved = run_console(
            WizardController::new(AcceptingBackend),
            Cursor::new(script),
            &mut output,
            temp_dir.path().to_path_buf(),
        )
        .await
        .unwrap();

        let saved = saved.expect("document should be saved");
        assert_eq!(std::fs::read(&saved).unwrap(), b"PK docx");

        let text = String::from_utf8(output).unwrap();
        assert!(text.contains(&format!("[+] {}", RESUME_ACCEPTED)));
        assert!(text.contains(&format!("[x] {}", URL_REJECTED)));
        assert!(text.contains(&format!("[i] {}", CONSIDERATIONS_SKIPPED)));
        assert!(text.contains(&format!("[+] {}", GENERATED)));
        assert!(text.contains("resume file (.txt,.docx,.pdf)> "));
    }

    #[tokio::test]
    async fn test_console_stops_at_eof() {
        let temp_dir = TempDir::new().unwrap();
        let mut output = Vec::new();

        let saved = run_console(
            WizardController::new(AcceptingBackend),
            Cursor::new(""),
            &mut output,
            temp_dir.path().to_path_buf(),
        )
        .await
        .unwrap();

        assert!(saved.is_none());
        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("Step 1: Please upload your resume file."));
    }

    #[tokio::test]
    async fn test_console_reports_unsupported_file() {
        let temp_dir = TempDir::new().unwrap();
        let mut output = Vec::new();

        run_console(
            WizardController::new(AcceptingBackend),
            Cursor::new("photo.png\n"),
            &mut output,
            temp_dir.path().to_path_buf(),
        )
        .await
        .unwrap();

        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("[x] "));
        assert!(text.contains(".png"));
    }
}
