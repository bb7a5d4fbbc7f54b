//! Data model for the layered transportation network
//!
//! Contains the road layer, the public-transport layer and the points of
//! interest that the composite graph overlays.

// Re-export of main modules
pub mod poi;
pub mod road;
pub mod transit;

// Re-export of basic types for convenience
pub use poi::{Poi, PoiKind};
pub use road::{RoadGraph, RoadNode, RoadNodeId, RoadSection, RoadSectionId, StopAnchor};
pub use transit::{
    TransitGraph, TransitNetwork, TransitNetworkCollection, TransitSection, TransitSectionId,
    TransitStop, TransitStopId,
};
