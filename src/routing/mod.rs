//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming path (/<token>/<token>[/new | /<id>/edit])
//!     → path.rs (split segments, derive mode)
//!     → codec.rs (token → route word)
//!     → registry.rs (route words → page components)
//!     → router.rs (pick component for mode)
//!     → Return: Resolved route or RedirectHome
//!
//! Outbound links:
//!     route words → codec.rs (word → token) → links.rs (href)
//! ```
//!
//! # Design Decisions
//! - Codec and registry built once, immutable at runtime
//! - Resolution is a pure function, safe to call from any task
//! - Deterministic: same path always resolves the same way
//! - Malformed or stale paths redirect home instead of erroring

pub mod codec;
pub mod links;
pub mod path;
pub mod registry;
pub mod router;
pub mod vocabulary;

pub use codec::SegmentCodec;
pub use path::{Mode, NavigationRequest};
pub use registry::{Component, RouteEntry, RouteRegistry};
pub use router::{EncryptedRouter, RedirectReason, Resolution, ResolvedRoute};
pub use vocabulary::Segment;
