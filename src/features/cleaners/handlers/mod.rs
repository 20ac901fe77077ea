mod cleaner_handler;

pub use cleaner_handler::*;
