//! Small shared utilities

pub mod path;
pub mod string;
