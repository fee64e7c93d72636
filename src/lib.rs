//! Docfox - MCP server that generates OpenAPI documents and uploads them to Apifox

pub mod config;
pub mod error;

pub mod apifox;
pub mod mcp;
pub mod openapi;
pub mod upload;

pub use config::Config;
pub use error::{Error, Result};
