//! Domains module containing business logic organized by bounded contexts.
//!
//! The tool server has a single domain: the text-analysis tools, their
//! registry, and the dispatcher that invokes them.

pub mod tools;
