//! Tool definitions module.
//!
//! This module exports all available tool definitions.
//! Each tool is defined in its own file for better maintainability.

pub mod calculator;
pub mod common;
pub mod mulesoft;

pub use calculator::{AdditionTool, DivideTool, MultiplyTool, ReminderTool, SubtractTool};
pub use mulesoft::{
    ConnectorVersionsParams, ConnectorVersionsTool, DataWeaveVersionsParams, DataWeaveVersionsTool,
    LatestVersionsParams, LatestVersionsTool, RuntimeVersionsParams, RuntimeVersionsTool,
};
