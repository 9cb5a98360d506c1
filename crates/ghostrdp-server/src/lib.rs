//! # ghost-rdp backend
//!
//! Management API for a ghost-rdp gateway deployment: user accounts, tasks,
//! alert rules, support tickets, WireGuard servers and peers, Windows account
//! mirrors and the audit log, all kept in one SQLite database.
//!
//! - [`api`] builds the axum router
//! - [`dal`] holds the table accessors and their transactions
//! - [`db`] owns the connection pool and embedded migrations
//! - [`cli`] implements the `serve`, `migrate` and `prune-audit` subcommands

pub mod api;
pub mod cli;
pub mod dal;
pub mod db;
pub mod metrics;
pub mod utils;
