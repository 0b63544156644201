//! ferry-store: Job store contract and in-memory reference backend
//!
//! This crate provides:
//! - The `JobStore` trait: atomic create/update/remove over transfer jobs,
//!   with a secondary index keyed by authorization state
//! - The update-validator protocol for gating transitions inside the
//!   atomic update section
//! - `MemoryJobStore`, the sharded in-memory reference backend
//! - `TracedJobStore`, a tracing wrapper over any backend

pub mod error;
pub mod index;
pub mod memory;
pub mod store;
pub mod temp;
pub mod traced;
pub mod validator;

// Re-exports
pub use error::StoreError;
pub use index::StateIndex;
pub use memory::MemoryJobStore;
pub use store::JobStore;
pub use temp::{MemoryTempStore, TempDataError, TempDataStore};
pub use traced::TracedJobStore;
pub use validator::{JobUpdateValidator, RejectedUpdate};
