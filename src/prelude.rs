// Re-export key components
pub use crate::coordinates::{coordinates, CoordinateSource, MemoryCoordinateSource};
pub use crate::loading::MultimodalGraphBuilder;
pub use crate::multimodal::{
    ConnectionType, EdgeIndexer, MultimodalEdge, MultimodalGraph, MultimodalVertex, VertexIndexer,
};

// Core types for the road layer
pub use crate::model::road::{RoadGraph, RoadNode, RoadNodeId, RoadSection, RoadSectionId};

// Core types for the public-transport layer
pub use crate::model::transit::{
    TransitGraph, TransitNetwork, TransitNetworkCollection, TransitSection, TransitStop,
    TransitStopId,
};

// Points of interest
pub use crate::model::poi::{Poi, PoiKind};

// Shared identities and bitfields
pub use crate::Error;
pub use crate::{EntityId, NetworkId, PoiId, TransportModes};
