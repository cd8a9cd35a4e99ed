//! The processing pipeline: input acquisition, text extraction,
//! structured extraction.
//!
//! Stateless and synchronous per request: each call runs the full
//! pipeline to completion, and identical inputs always make independent
//! remote calls (nothing is cached).

use std::path::{Path, PathBuf};

use tracing::info;

use crate::config::Settings;
use crate::extract::TextExtractor;
use crate::llm::GeminiClient;
use crate::models::{parse_analysis, DocumentAnalysis};

/// Result of one run through the pipeline.
#[derive(Debug)]
pub enum ProcessOutcome {
    /// Nothing usable was provided (empty text, no file, or a file that
    /// yielded no text). No remote call was made.
    NoInput,
    /// The pipeline ran to completion.
    Processed(ProcessOutput),
}

/// Output of a completed pipeline run.
#[derive(Debug)]
pub struct ProcessOutput {
    /// Text extracted from the file, or the user's text input.
    pub extracted_text: String,
    /// Raw model response (or the synthetic JSON error string).
    pub response_raw: String,
    /// Parsed analysis; `None` when the response is not valid JSON, in
    /// which case the display layer shows the raw text.
    pub analysis: Option<DocumentAnalysis>,
}

/// Document processing pipeline.
pub struct Pipeline {
    extractor: TextExtractor,
    client: GeminiClient,
    uploads_dir: PathBuf,
}

impl Pipeline {
    /// Create a pipeline from settings.
    pub fn new(settings: &Settings) -> Self {
        Self {
            extractor: TextExtractor::new(),
            client: GeminiClient::new(settings.llm.clone()),
            uploads_dir: settings.uploads_dir.clone(),
        }
    }

    /// Save an uploaded file into the uploads directory under its
    /// original name. A same-named file silently overwrites the previous
    /// one. Path components in the client-supplied name are dropped.
    pub fn save_upload(&self, filename: &str, content: &[u8]) -> anyhow::Result<PathBuf> {
        let name = Path::new(filename)
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "upload".to_string());

        std::fs::create_dir_all(&self.uploads_dir)?;
        let path = self.uploads_dir.join(name);
        std::fs::write(&path, content)?;

        info!(path = %path.display(), bytes = content.len(), "saved upload");
        Ok(path)
    }

    /// Run the pipeline over an uploaded or local file.
    pub async fn process_file(&self, path: &Path) -> ProcessOutcome {
        let extracted = self.extractor.extract_file(path);
        self.classify(extracted).await
    }

    /// Run the pipeline over free text input.
    pub async fn process_text(&self, text: &str) -> ProcessOutcome {
        self.classify(text.trim().to_string()).await
    }

    /// Run the pipeline: a file takes precedence over text when both are
    /// given, matching the original form behavior.
    pub async fn process(&self, text: Option<&str>, file: Option<&Path>) -> ProcessOutcome {
        match file {
            Some(path) => self.process_file(path).await,
            None => match text {
                Some(t) if !t.trim().is_empty() => self.process_text(t).await,
                _ => ProcessOutcome::NoInput,
            },
        }
    }

    /// Send extracted text to the model. Empty text short-circuits
    /// without any remote call.
    async fn classify(&self, extracted_text: String) -> ProcessOutcome {
        if extracted_text.is_empty() {
            return ProcessOutcome::NoInput;
        }

        let response_raw = self.client.extract_structured(&extracted_text).await;
        let analysis = parse_analysis(&response_raw);

        ProcessOutcome::Processed(ProcessOutput {
            extracted_text,
            response_raw,
            analysis,
        })
    }
}
