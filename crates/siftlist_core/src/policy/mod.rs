//! Lifespan policy and the store sweep that applies it.
//!
//! # Responsibility
//! - Decide demotion/expiry from item age alone (pure rules).
//! - Apply decisions across the whole store in one explicit pass.
//!
//! # Invariants
//! - Policy evaluation performs no I/O.
//! - A sweep applies at most one action per item per pass.

pub mod lifespan;
pub mod sweep;
