//! Data-wrangling tutorial backend: a fixed catalog of levels, a persisted
//! level registry, and a keyword/length rubric for grading free-text answers.

pub mod catalog;
pub mod config;
pub mod domain;
pub mod error;
pub mod protocol;
pub mod routes;
pub mod scoring;
pub mod seeds;
pub mod state;
pub mod store;
pub mod telemetry;

pub use error::{AppError, Result};
pub use routes::{api_router, build_router};
pub use state::AppState;
