pub mod agent;
pub mod app_state;
pub mod config;
pub mod extractor;
pub mod fetcher;
pub mod scout;
pub mod storage;
pub mod telemetry;
