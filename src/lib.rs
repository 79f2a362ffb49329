// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod cli;
pub mod client;
pub mod config;
pub mod core;
pub mod error;
pub mod gui;
pub mod progress;

pub use client::{ClientSnapshot, IndexClient, Outcome, PendingRequest, RequestStatus};
pub use error::ClientError;
