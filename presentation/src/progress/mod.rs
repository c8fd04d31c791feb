//! Progress feedback while an answer is prepared

pub mod typing;
