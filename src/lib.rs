//! dbutils library - CRUD facade over a relational database
//!
//! Provides statement building, a transactional query facade with scoped
//! connections, command execution, and output formatting.

pub mod cli;
pub mod commands;
pub mod config;
pub mod db;
pub mod output;
pub mod types;

#[macro_use]
pub mod test_macros;

#[cfg(test)]
pub mod test_utils;
