//! Tools domain module.
//!
//! Tools are executable functions that MCP clients call.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual tool implementations
//! - `router.rs` - Dynamic ToolRouter builder
//! - `registry.rs` - Tool catalogue used by resources and tests
//! - `error.rs` - Argument and worker errors, mapped onto MCP errors
//!
//! ## Adding a New Tool
//!
//! 1. Create a new file in `definitions/` with params, `execute()`, `to_tool()`
//!    and `create_route()`
//! 2. Export it in `definitions/mod.rs`
//! 3. Add its route in `router.rs` and its name in `registry.rs`

pub mod definitions;
mod error;
mod registry;
pub mod router;

pub use error::ToolError;
pub use registry::ToolRegistry;
pub use router::build_tool_router;
