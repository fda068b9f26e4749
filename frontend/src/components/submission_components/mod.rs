//! Components of the submission form.

pub mod submission_form;
pub mod text_preview_box;
