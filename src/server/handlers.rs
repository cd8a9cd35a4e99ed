//! HTTP request handlers for the web server.

use axum::{
    extract::{Multipart, State},
    response::{Html, IntoResponse},
};

use super::templates;
use super::AppState;
use crate::pipeline::ProcessOutcome;

/// Index page: input form and supported-types sidebar.
pub async fn index() -> impl IntoResponse {
    Html(templates::index_page())
}

/// Process a submitted form: optional text, optional file upload.
/// A file takes precedence over text. Empty input renders a warning
/// without any remote call.
pub async fn process_document(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> impl IntoResponse {
    let mut text: Option<String> = None;
    let mut upload: Option<(String, Vec<u8>)> = None;

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(e) => {
                return Html(templates::error_page(&format!(
                    "Failed to read form data: {}",
                    e
                )));
            }
        };

        let name = field.name().map(|s| s.to_string());
        match name.as_deref() {
            Some("text") => {
                if let Ok(value) = field.text().await {
                    text = Some(value);
                }
            }
            Some("file") => {
                let filename = field.file_name().map(|s| s.to_string());
                match (filename, field.bytes().await) {
                    (Some(name), Ok(bytes)) if !bytes.is_empty() => {
                        upload = Some((name, bytes.to_vec()));
                    }
                    _ => {}
                }
            }
            _ => {}
        }
    }

    // Save any upload first; the pipeline then reads it back from disk.
    let saved_path = match upload {
        Some((name, bytes)) => match state.pipeline.save_upload(&name, &bytes) {
            Ok(path) => Some(path),
            Err(e) => {
                return Html(templates::error_page(&format!(
                    "Failed to save upload: {}",
                    e
                )));
            }
        },
        None => None,
    };

    let outcome = state
        .pipeline
        .process(text.as_deref(), saved_path.as_deref())
        .await;

    match outcome {
        ProcessOutcome::NoInput => {
            let message = if saved_path.is_some() {
                "Could not extract any text from this file."
            } else {
                "Please provide text input or upload a file."
            };
            Html(templates::warning_page(message))
        }
        ProcessOutcome::Processed(output) => Html(templates::result_page(
            &output.extracted_text,
            &output.response_raw,
        )),
    }
}
