pub mod assets;
pub mod builder;
pub mod cli;
pub mod config;
pub mod constants;
pub mod packager;
pub mod process;
pub mod service;

pub use anyhow::Result;
