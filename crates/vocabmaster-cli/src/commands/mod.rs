pub mod backup;
pub mod config;
pub mod reminder;
pub mod sentence;
pub mod stats;
pub mod timer;
pub mod word;
