//! Analysis domain - turns a website URL into a marketing brief

pub mod actions;
pub mod data;
pub mod errors;

pub use actions::analyze_website;
pub use data::AnalysisRequest;
pub use errors::AnalysisError;
