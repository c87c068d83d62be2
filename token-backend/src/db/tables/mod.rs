//! Table modules - extend Database with domain-specific methods
//!
//! Each module adds `impl Database` blocks with methods for one table.

pub(crate) mod oauth_tokens; // oauth_tokens
pub(crate) mod users;        // users (protected settings documents)
