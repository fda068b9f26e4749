pub mod analysis_api;
