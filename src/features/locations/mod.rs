//! Austrian location catalog: autocomplete search, exact lookup, great-circle
//! distance and proximity filtering over a bundled, immutable data set.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | GET | `/api/locations/search` | No | Autocomplete suggestions (max 12) |
//! | GET | `/api/locations/resolve` | No | Exact match by name or postal code |
//! | GET | `/api/locations/nearby` | No | Catalog entries within a radius |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use models::{AustrianLocation, LocationCatalog};
pub use services::LocationService;
