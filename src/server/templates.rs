//! HTML templates for the web interface.

use crate::models::{pretty_or_raw, DOCUMENT_TYPES};
use crate::utils::html_escape;

/// Base HTML template.
pub fn base_template(title: &str, content: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <title>{title} - Government Document Processor</title>
    <style>
        body {{ font-family: system-ui, sans-serif; margin: 0; display: flex; }}
        main {{ flex: 1; padding: 2rem; max-width: 60rem; }}
        aside {{ width: 16rem; padding: 2rem 1rem; background: #f4f4f4; min-height: 100vh; }}
        h1 {{ font-size: 1.4rem; }}
        textarea {{ width: 100%; height: 8rem; font-family: inherit; }}
        pre {{ background: #f8f8f8; padding: 1rem; overflow-x: auto; white-space: pre-wrap; }}
        .notice {{ background: #eef4fb; border-left: 4px solid #4a90d9; padding: 0.6rem 1rem; }}
        .warning {{ background: #fdf6e3; border-left: 4px solid #d9a44a; padding: 0.6rem 1rem; }}
        .error {{ background: #fbeeee; border-left: 4px solid #d94a4a; padding: 0.6rem 1rem; }}
        button {{ padding: 0.5rem 1.2rem; margin-top: 0.8rem; }}
        aside ul {{ padding-left: 1.2rem; }}
    </style>
</head>
<body>
    <main>
        <h1>&#128196; Government Document Processor</h1>
        {content}
    </main>
    <aside>
        <h2>Supported Document Types</h2>
        {sidebar}
    </aside>
</body>
</html>"#,
        title = html_escape(title),
        content = content,
        sidebar = types_sidebar(),
    )
}

/// Supported-types sidebar list.
fn types_sidebar() -> String {
    let items: String = DOCUMENT_TYPES
        .iter()
        .map(|(name, _)| format!("<li>{}</li>\n", html_escape(name)))
        .collect();
    format!("<ul>\n{}</ul>", items)
}

/// The input form.
fn input_form() -> String {
    r#"<div class="notice">OCR processing for scanned documents is not available.
For best results, use documents with digital text or provide text input directly.</div>
<form action="/process" method="post" enctype="multipart/form-data">
    <p><label for="text">Your Input (Text)</label><br>
    <textarea id="text" name="text" placeholder="Provide text details or describe your challenge..."></textarea></p>
    <p><label for="file">Upload File</label><br>
    <input id="file" type="file" name="file" accept=".pdf,.png,.jpg,.jpeg"></p>
    <button type="submit">&#128269; Process with Gemini API</button>
</form>"#
        .to_string()
}

/// Index page with the input form.
pub fn index_page() -> String {
    base_template("Process", &input_form())
}

/// Result page: extracted-text preview plus the model response.
///
/// The response is pretty-printed when it parses as JSON; otherwise the
/// raw text is shown as-is.
pub fn result_page(extracted_text: &str, response_raw: &str) -> String {
    let response_block = format!(
        "<pre>{}</pre>",
        html_escape(&pretty_or_raw(response_raw))
    );

    let content = format!(
        r#"<h2>Extracted Text (Preview)</h2>
<pre>{extracted}</pre>
<h2>AI Response</h2>
{response}
<p><a href="/">&larr; Process another document</a></p>"#,
        extracted = html_escape(extracted_text),
        response = response_block,
    );
    base_template("Result", &content)
}

/// Warning page for empty or unusable input.
pub fn warning_page(message: &str) -> String {
    let content = format!(
        r#"<div class="warning">{}</div>
{}"#,
        html_escape(message),
        input_form()
    );
    base_template("Warning", &content)
}

/// Error page for failures outside the pipeline (form decoding, disk).
pub fn error_page(message: &str) -> String {
    let content = format!(
        r#"<div class="error">{}</div>
<p><a href="/">&larr; Back</a></p>"#,
        html_escape(message)
    );
    base_template("Error", &content)
}
