//! Markov chain text generation
//!
//! [`MarkovChain::build`] turns matched answers into a word transition
//! table; [`walk`] produces a new phrase from it.

pub mod chain;
pub mod walker;

pub use chain::MarkovChain;
pub use walker::walk;
