//! Static tracker content and loaders.
//!
//! This crate houses the lookup tables the tracker consults but never
//! mutates:
//! - Marker sets (condition kind -> marker name), built in or from TOML
//! - The host's marker library (marker name -> tag), from JSON
//! - Reference text for every condition kind
//! - Tracker configuration (TOML)
//!
//! Content is consumed by the runtime and never appears in the ledger.

pub mod markers;
pub mod reference;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use markers::{MarkerCatalog, MarkerSet, MarkerTag, TokenMarker};
pub use reference::describe;

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, ContentFactory, MarkerSetLoader, TokenMarkerLoader};
