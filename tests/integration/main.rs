//! Integration tests for the parsers
//!
//! `StaticSite` serves pages from memory for the reconciliation tests;
//! wiremock stands in for the documentation site when exercising the real
//! cached session.

mod http_tests;
mod parser_tests;
