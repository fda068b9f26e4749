//! API handlers and module exports.

pub mod analyze;
pub mod corpus;
