//! # star-history (library target)
//!
//! Exposes the binary's modules so integration tests can exercise the
//! client, writer, and CLI surface without spawning a process.

pub mod cli;
pub mod error;
pub mod github;
pub mod output;
