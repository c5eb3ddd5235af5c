// AI Marketing - Website Analyzer API Core
//
// This crate provides the backend API that turns a website URL into a
// marketing brief: fetch the page, extract its main text, summarize it with
// an LLM.

pub mod common;
pub mod config;
pub mod domains;
pub mod kernel;
pub mod server;

pub use config::*;
