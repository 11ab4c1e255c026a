pub mod alignment;
pub mod analysis;
pub mod cli;
pub mod commands;
pub mod config;
pub mod export;
pub mod fastq;
pub mod utils;
