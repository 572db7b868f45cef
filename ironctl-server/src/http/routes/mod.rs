//! Route modules
//!
//! - `GET /health`
//! - `GET /` and `GET /api/dashboard`

pub mod dashboard;
pub mod health;
