//! Test-only crate — the actual coverage lives in `tests/`.
