//! Integration tests for the ghfetch binary

mod cli;
mod common;
mod download;
