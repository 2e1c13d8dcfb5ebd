//! Syrano - Dating message suggestion backend
//!
//! Drafts reply suggestions for chat conversations (pasted text or a
//! screenshot) with an LLM, metering free users to a daily quota and
//! lifting the limit for weekly or monthly premium plans.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
