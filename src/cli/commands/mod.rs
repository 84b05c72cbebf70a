pub mod backup;
pub mod config;
pub mod db;
pub mod holder;
pub mod init;
pub mod log;
pub mod section;
pub mod survey;
