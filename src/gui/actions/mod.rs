// src/gui/actions/mod.rs
//
// Folder module facade: re-export public entrypoints.
// Submodules stay private; consumers only see actions::{cancel,index,search}.

mod index;   // src/gui/actions/index.rs
mod search;  // src/gui/actions/search.rs

pub use index::{cancel, index};
pub use search::search;
