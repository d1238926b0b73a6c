//! GDrive Core - Domain logic and business rules
//!
//! This crate contains the hexagonal architecture core with:
//! - **Domain entities** - `RemoteUnit`, `UnitKind`, validated `UnitId`
//! - **Port definitions** - Traits for adapters: `IRemoteStore`, `ITransferReporter`
//! - **Configuration** - Typed config with YAML loading and validation
//!
//! # Architecture
//!
//! This crate follows the hexagonal (ports & adapters) architecture pattern.
//! The domain module contains pure data types with no external dependencies.
//! Ports define trait interfaces that adapter crates implement: the remote
//! store port is implemented by the Google Drive adapter, the transfer
//! reporter port by the CLI. The synchronization engines live in a separate
//! crate and orchestrate everything through these ports.

pub mod config;
pub mod domain;
pub mod ports;
