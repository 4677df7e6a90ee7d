//! Intent model and classifier for free-text dex queries.
//!
//! Raw question text goes in, a tagged [`Intent`] comes out. Classification is
//! deterministic pattern matching over a fixed, ordered list of matchers; there
//! is no failure path because the final matcher is an unconditional fallback.

mod classify;
mod intent;

pub use classify::classify;
pub use intent::Intent;
