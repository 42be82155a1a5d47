pub mod completions;
pub mod dec;
pub mod enc;
pub mod url;
