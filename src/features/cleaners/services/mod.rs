mod cleaner_service;

pub use cleaner_service::{BrowseCleanersParams, CleanerService};
