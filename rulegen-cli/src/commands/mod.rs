//! Command handlers -- one module per command

pub mod config;
pub mod expand;
