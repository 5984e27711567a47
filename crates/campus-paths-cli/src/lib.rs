//! Campus paths CLI library.
//!
//! This crate provides the command handlers and output formatting behind the
//! `campus-paths-cli` binary, including the interactive route shell.

pub mod commands;
pub mod output;
