//! Library surface of the stockscope CLI.
//!
//! The binary in `main.rs` is a thin shell over these modules; exposing them
//! lets behavior tests drive command dispatch without spawning a process.

pub mod cli;
pub mod commands;
pub mod error;
pub mod output;
