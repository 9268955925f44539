//! GitHub Projects (v2) adapter.
//!
//! Implements the project client port against the GitHub GraphQL API.

pub mod client;
pub mod models;

pub use client::GitHubClient;
