pub mod candidate;
pub mod summary;
