//! Domains module containing business logic organized by bounded contexts.
//!
//! `mulesoft` holds the documentation scrapers; the remaining domains expose
//! them (and the calculator) over MCP.

pub mod mulesoft;
pub mod prompts;
pub mod resources;
pub mod tools;
