//! Integration tests for the roster core.
//!
//! These tests verify end-to-end behavior of the view-model backed by the
//! real HTTP client, with the remote database replaced by a stateful fake.

mod search_delete;
mod support;
