//! Dashboard component modules
//!
//! Contains all individual rendering components

pub mod alert;
pub mod footer;
pub mod header;
pub mod logs;
pub mod selection_bar;
pub mod stats;
pub mod table;
