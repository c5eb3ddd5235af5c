//! Analysis domain actions - business logic functions

mod analyze_website;

pub use analyze_website::analyze_website;
