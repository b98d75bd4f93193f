//! Small shared helpers: constants, number formatting, URL queries.

pub mod constants;
pub mod format;
pub mod url;
