pub mod contact;
pub mod format;
pub mod import;
