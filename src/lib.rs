//! Composite multimodal graph core for journey planning.
//!
//! The crate overlays one undirected road graph, a keyed family of
//! selectable public-transport networks and a collection of road-anchored
//! points of interest, and exposes them as a single read-only graph:
//! unified vertices and edges, lazy deterministic iterators, dense index
//! maps and closed-form counts. Generic traversal (Dijkstra, DFS, BFS, A*)
//! runs over the composite through the [`petgraph::visit`] traits.
//!
//! The composite is built once through [`loading::MultimodalGraphBuilder`]
//! and is immutable afterwards, except for the public-transport network
//! selection, which only changes the iteration scope.

pub mod coordinates;
pub mod error;
pub mod loading;
pub mod model;
pub mod multimodal;
pub mod prelude;

pub use error::Error;

pub use model::road::{RoadGraph, RoadNode, RoadNodeId, RoadSection, RoadSectionId, StopAnchor};
pub use model::transit::{
    TransitGraph, TransitNetwork, TransitNetworkCollection, TransitSection, TransitSectionId,
    TransitStop, TransitStopId,
};
pub use model::{Poi, PoiKind};
pub use multimodal::{ConnectionType, MultimodalEdge, MultimodalGraph, MultimodalVertex};

/// Opaque database identity of an imported entity.
pub type EntityId = u64;

/// Identity of a public-transport network inside the collection.
pub type NetworkId = u64;

/// Identity of a point of interest.
pub type PoiId = u64;

/// Transport-type bitfield, one bit per mode.
///
/// Road sections store one field per direction; POIs store one for the
/// modes they can park.
pub type TransportModes = u32;

/// Named bits for [`TransportModes`] fields.
pub mod transport_mode {
    use super::TransportModes;

    pub const NONE: TransportModes = 0;
    pub const WALK: TransportModes = 1 << 0;
    pub const CYCLE: TransportModes = 1 << 1;
    pub const CAR: TransportModes = 1 << 2;
    pub const TAXI: TransportModes = 1 << 3;
    pub const CARPOOL: TransportModes = 1 << 4;
    pub const BUS: TransportModes = 1 << 5;
    pub const TRAMWAY: TransportModes = 1 << 6;
    pub const METRO: TransportModes = 1 << 7;
    pub const TRAIN: TransportModes = 1 << 8;
    pub const SHARED_CAR: TransportModes = 1 << 9;
    pub const SHARED_CYCLE: TransportModes = 1 << 10;
}
