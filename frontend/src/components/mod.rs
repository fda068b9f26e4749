pub mod error_boundary;
pub mod loading_indicator;
pub mod navbar;
pub mod report_components;
pub mod submission_components;
pub mod tooltip;
