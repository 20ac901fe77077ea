mod cleaner;

pub use cleaner::{Cleaner, CleanerListing, VerificationStatus};
