//! Document processing commands (extract, classify, list types).

use std::path::Path;
use std::time::Duration;

use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::config::Settings;
use crate::extract::TextExtractor;
use crate::models::{pretty_or_raw, DOCUMENT_TYPES};
use crate::pipeline::{Pipeline, ProcessOutcome};

/// Run the full pipeline once and print the result.
pub async fn cmd_process(
    settings: &Settings,
    text: Option<&str>,
    file: Option<&Path>,
) -> anyhow::Result<()> {
    let pipeline = Pipeline::new(settings);

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::with_template("{spinner} {msg}").unwrap());
    spinner.set_message(match file {
        Some(_) => "Extracting text and processing with Gemini...",
        None => "Processing with Gemini...",
    });
    spinner.enable_steady_tick(Duration::from_millis(100));

    let outcome = pipeline.process(text, file).await;
    spinner.finish_and_clear();

    match outcome {
        ProcessOutcome::NoInput => {
            let message = match file {
                Some(_) => "Could not extract any text from this file.",
                None => "No input provided. Pass text or --file.",
            };
            println!("{}", style(message).yellow());
        }
        ProcessOutcome::Processed(output) => {
            println!("\n{}", style("Extracted Text (Preview)").bold());
            println!("{}", "-".repeat(50));
            println!("{}\n", output.extracted_text);

            println!("{}", style("AI Response").bold());
            println!("{}", "-".repeat(50));
            println!("{}", pretty_or_raw(&output.response_raw));

            if let Some(analysis) = &output.analysis {
                if analysis.is_error() {
                    println!("\n{}", style("The remote call failed; see above.").red());
                }
            }
        }
    }

    Ok(())
}

/// Extract text only; no remote call. Debugging aid mirroring the
/// extracted-text preview panel of the web UI.
pub fn cmd_extract(file: &Path) -> anyhow::Result<()> {
    let extractor = TextExtractor::new();
    let text = extractor.extract_file(file);

    if text.is_empty() {
        println!(
            "{}",
            style("Could not extract any text from this file.").yellow()
        );
    } else {
        println!("{}", text);
    }
    Ok(())
}

/// List supported document types and the fields extracted for each.
pub fn cmd_types() -> anyhow::Result<()> {
    println!("\n{}", style("Supported Document Types").bold());
    println!("{}", "-".repeat(50));

    for (name, fields) in DOCUMENT_TYPES {
        println!("  {}", style(name).cyan());
        println!("    {}", style(fields.join(", ")).dim());
    }
    Ok(())
}

