//! Chat completions client and wire types.
//!
//! Wraps the Azure OpenAI chat completions endpoint for vision requests:
//! a system prompt, a user prompt, and an image embedded as a data URL in
//! a multi-part user message.

mod client;
mod types;

pub use client::*;
pub use types::*;
