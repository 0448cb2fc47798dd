//! Workspace root crate. See the member crates under `crates/`.
