pub mod config;
pub mod filename;
pub mod storage;

pub use config::UploadConfig;
pub use filename::{secure_filename, storage_name};
