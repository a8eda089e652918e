//! Cross-crate tests for food-board live under `tests/`.
