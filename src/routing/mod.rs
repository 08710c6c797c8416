//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming Request (method, path)
//!     → router.rs (exact lookup)
//!     → Return: Preflight, Matched entry or NotFound
//!
//! Table construction (at startup):
//!     fixtures.rs (built-in bodies)
//!     → RouteConfig[] from the config file, replacing same (method, path)
//!     → Freeze as immutable RouteTable
//! ```
//!
//! # Design Decisions
//! - Table built at startup, immutable at runtime
//! - No patterns or prefixes: method plus exact path only
//! - Deterministic: same request always yields the same bytes

pub mod entry;
pub mod fixtures;
pub mod router;

pub use entry::RouteEntry;
pub use router::{Dispatch, RouteTable};
