//! Command implementations for CatX CLI

pub mod config;
pub mod layout;
pub mod render;
