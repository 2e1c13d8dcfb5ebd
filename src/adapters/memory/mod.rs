//! In-memory adapters for tests and local development.
//!
//! `InMemoryStore` implements every persistence port over one shared set of
//! tables, so foreign-key style checks between users, profiles and history
//! behave like the PostgreSQL schema.

mod store;

pub use store::InMemoryStore;
