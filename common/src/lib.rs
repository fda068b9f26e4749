//! Common library exports shared between frontend and backend.

extern crate serde;


pub mod matched_section;
pub mod text_highlight;
pub mod text_preview;
pub mod analysis_report;
