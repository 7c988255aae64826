//! Library crate behind the `enginepin` CLI

pub mod catalog;
pub mod cli;
pub mod commands;
pub mod config;
