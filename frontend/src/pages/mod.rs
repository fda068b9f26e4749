pub mod corpus_page;
pub mod home_page;
