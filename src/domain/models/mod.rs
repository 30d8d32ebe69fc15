pub mod field;
pub mod hash_format;
pub mod options;
pub mod update;
