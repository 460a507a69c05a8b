//! Workspace root package.
//!
//! Carries workspace-level tooling (pre-commit hooks). The Lambda function
//! lives in `crates/football-lambda-players`.
