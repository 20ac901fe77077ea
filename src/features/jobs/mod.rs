//! Job postings and cleaner responses.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | POST | `/api/jobs` | Yes | Publish a job posting |
//! | GET | `/api/jobs` | Yes | Open jobs, proximity-filtered |
//! | GET | `/api/jobs/mine` | Yes | Own postings with response counts |
//! | PATCH | `/api/jobs/{id}/status` | Yes | Mark a posting filled or expired |
//! | POST | `/api/jobs/{id}/responses` | Yes | Respond to a posting (verified cleaners) |
//! | GET | `/api/jobs/{id}/responses` | Yes | Responses to an own posting |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::JobService;
