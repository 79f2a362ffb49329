// src/gui/components/mod.rs
pub mod url_bar;
pub mod word_box;
pub mod word_table;
