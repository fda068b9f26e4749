//! Components of the analysis report.

pub mod comparison_card;
pub mod highlighted_text_viewer;
pub mod matches_panel;
pub mod report_view;
pub mod similarity_chart;
