//! Roster Core
//!
//! The UI-independent core of a user roster application: records with a name
//! and an age, persisted in a remote realtime key-value database.
//!
//! # Features
//!
//! - Record store client over the database's REST surface (create, update,
//!   delete, fetch-all)
//! - View-model state container with client-side search filtering, sorting,
//!   and an inline edit flow
//! - Explicit `Result`-based error reporting for every remote operation
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐   operations   ┌─────────────────┐    REST     ┌──────────┐
//! │ Presentation │───────────────▶│ RosterViewModel │────────────▶│ Realtime │
//! │ layer (UI)   │◀───────────────│     (Rust)      │◀────────────│ database │
//! └──────────────┘  derived view  └─────────────────┘   snapshot  └──────────┘
//! ```
//!
//! The presentation layer writes the form buffers, invokes the view-model
//! operations, and renders the derived filtered view. The remote store is the
//! single source of truth; the in-memory record list is a disposable cache
//! that is fully reloaded after every mutation.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;
pub mod logging;
pub mod store;
pub mod traits;
pub mod viewmodel;
