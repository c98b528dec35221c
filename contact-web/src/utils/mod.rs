//! Browser utilities

pub mod constants;
pub mod dom;
pub mod scheduler;
pub mod url;
