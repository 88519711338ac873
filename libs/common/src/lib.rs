//! Common library for the promo-factory services
//!
//! This crate provides shared functionality used across different services,
//! currently the generic in-memory repository the administration service
//! stores its entities in.

pub mod repository;
