pub mod errors;
pub mod tasks;

pub use errors::CoachError;
