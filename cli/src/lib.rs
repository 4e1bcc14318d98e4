//! The `qrgen` command-line front end.

pub mod cli;
pub mod commands;
pub mod input;
pub mod output;
pub mod timing;
