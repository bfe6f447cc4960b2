//! Entity registry and transition service.
//!
//! Ties the access-control and lifecycle models together over a document
//! store: concrete entity documents, the store boundary trait, visibility
//! rules, and the permission-gated transition service that performs the
//! compare-and-swap status write and the audit append as one logical
//! operation from the caller's perspective.
//!
//! # Example
//!
//! ```ignore
//! use registry::{MemoryStore, RegistryConfig, TransitionService};
//! use lifecycle::IprStatus;
//!
//! let service = TransitionService::new(MemoryStore::new(), RegistryConfig::default());
//! let entry = service
//!     .apply_transition(&session, &mut ipr, IprStatus::Published, "moved to publication")
//!     .await?;
//! ```

pub mod collaboration;
pub mod config;
pub mod entity;
pub mod error;
pub mod service;
pub mod store;

pub use collaboration::{CollaborationKind, CollaborationRequest};
pub use config::{Collections, RegistryConfig};
pub use entity::{InnovationIdea, IprApplication, ResearchProject, Startup, StatusSlot};
pub use error::RegistryError;
pub use service::TransitionService;
pub use store::{DocumentStore, MemoryStore};
