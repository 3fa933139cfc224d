//! Taskledger: a task-tracking record keeper.
//!
//! This crate provides the domain core for tracking units of work: creating
//! tasks, listing them (optionally filtered by status), fetching one by
//! identifier, updating descriptions, marking tasks done, and deleting them.
//!
//! # Architecture
//!
//! Taskledger follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (database, in-memory)
//!
//! HTTP routing and transport shaping are boundary-layer concerns and live
//! outside this crate; domain types are serde-serialisable so a boundary
//! layer can project them into whatever representation it uses.
//!
//! # Modules
//!
//! - [`task`]: Task entity, store port, adapters, and tracking service

pub mod task;
