//! Core domain concepts shared across all subdomains.
//!
//! - [`model::ModelId`] — chatbot model labels (GPT-5o, GPT-5o-mini, custom)
//! - [`tier::ModelTier`] — premium / economy capability level
//! - [`question::Query`] — a user question with its normalized form
//! - [`error::DomainError`] — domain-level errors

pub mod error;
pub mod model;
pub mod question;
pub mod tier;
