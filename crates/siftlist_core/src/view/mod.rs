//! Presentation-agnostic read models.

pub mod tier_view;
