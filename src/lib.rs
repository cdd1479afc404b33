//! Workspace-level test package for cliseed. The integration tests live in `tests/`.
