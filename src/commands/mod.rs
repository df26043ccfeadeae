//! Command implementations for gka

pub mod dispatch;
pub mod list;
pub mod parse;
pub mod path;
pub mod show;
