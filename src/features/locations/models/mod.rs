mod location;

pub use location::{AustrianLocation, LocationCatalog};
