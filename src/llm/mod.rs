//! Gemini client for structured document extraction.

mod client;
mod prompt;

pub use client::{GeminiClient, LlmError};
