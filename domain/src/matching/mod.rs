//! Matching domain
//!
//! Finds the corpus entries that answer a query and chooses among them.
//!
//! ```text
//! query ──► find_exact ──(none)──► find_fuzzy ──(score 0)──► no match
//!               │                      │
//!               └──────────┬───────────┘
//!                          ▼
//!                    weighted_pick
//! ```

pub mod matcher;
pub mod selector;

pub use matcher::{FuzzyMatch, distinct_answers, find_exact, find_fuzzy, similarity};
pub use selector::{candidate_weight, weighted_pick};
