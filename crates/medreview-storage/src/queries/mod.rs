//! SQL for items, references and auto-check rows.

pub mod check_ops;
pub mod item_crud;
