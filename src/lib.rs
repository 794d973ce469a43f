pub mod api;
pub mod errors;
pub mod gamification;
pub mod models;
pub mod names;
pub mod quiz;
pub mod scoring;
pub mod session;
pub mod storage;
pub mod utils;
