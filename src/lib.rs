//! Workspace root package.
//!
//! Exists only to host workspace-wide tooling (git hooks via cargo-husky).
//! All functionality lives in the member crates under `crates/`.
