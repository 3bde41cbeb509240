//! Persistent launch numbering for named vehicle series
//!
//! Vehicles carry a bracketed series tag in their name (e.g. `"[Atlas] crew
//! demo"`). Each rollout of a tagged vehicle increments a per-series counter
//! held in a small hierarchical key/value tree, and the counter is rendered
//! back into the vehicle name in decimal, Roman, or alphabetic style.

pub mod domain;
pub use domain::{Config, NumeralStyle, Record, SeriesId, SeriesRecord, SeriesTag};

/// The hierarchical key/value tree and its durable text format.
pub mod store;
pub use store::Node;

/// Persistence backends for the ledger tree.
pub mod gateway;
pub use gateway::{FileGateway, MemoryGateway, PersistenceGateway};

/// The session context and counter lifecycle.
pub mod engine;
pub use engine::{Rollout, Session};
