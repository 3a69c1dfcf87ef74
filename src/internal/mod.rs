pub mod config;
pub mod coordinator;
pub mod downloader;
pub mod entrance;
pub mod http;
pub mod local_file;
pub mod probe;
pub mod report;
pub mod states;
pub mod task;
pub mod writer;
