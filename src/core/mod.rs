// src/core/mod.rs

pub mod index;
pub mod net;

pub use index::WordIndex;
pub use net::{HttpIndexService, IndexService};
