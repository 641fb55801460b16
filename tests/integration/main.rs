//! HTTP integration tests for the listsort API.

mod helpers;
mod listing_test;
