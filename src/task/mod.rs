//! Task record keeping for Taskledger.
//!
//! This module implements the full task lifecycle: validated creation,
//! listing with optional status filtering, lookup by identifier, description
//! updates, the one-way done transition, and deletion. The task entity owns
//! its field-level invariants; the tracking service orchestrates entity
//! mutation against the store port and is the sole place where a missing
//! identifier becomes a not-found error. The module follows hexagonal
//! architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
