//! Prompts domain module.
//!
//! Prompts are canned user messages that steer a client towards the
//! version lookup tools.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual prompt definitions
//! - `registry.rs` - Central prompt registration
//! - `service.rs` - Prompt service for listing and rendering
//! - `templates.rs` - Placeholder substitution
//!
//! ## Adding a New Prompt
//!
//! 1. Implement the `PromptDefinition` trait in `definitions/`
//! 2. Export it in `definitions/mod.rs`
//! 3. Register it in `registry.rs`

pub mod definitions;
mod error;
mod registry;
mod service;
pub mod templates;

pub use definitions::PromptDefinition;
pub use error::PromptError;
pub use registry::{get_all_prompts, prompt_names};
pub use service::PromptService;
pub use templates::PromptTemplate;
