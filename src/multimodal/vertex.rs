//! Unified vertex over the road, transit and POI layers

use std::fmt;

use crate::model::road::RoadNodeId;
use crate::model::transit::TransitStopId;
use crate::{NetworkId, PoiId};

use super::MultimodalGraph;

/// A vertex of the composite graph.
///
/// The derived ordering is lexicographic by (variant, graph handle, local
/// descriptor) and forms a strict total order over the whole composite; it
/// coincides with the order [`MultimodalGraph::vertices`] produces when
/// every network is selected. Values stay valid for the lifetime of the
/// graph that produced them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MultimodalVertex {
    /// A road node
    Road(RoadNodeId),
    /// A transit stop of one network of the collection
    Transit(NetworkId, TransitStopId),
    /// A point of interest
    Poi(PoiId),
}

impl MultimodalVertex {
    pub fn is_road(&self) -> bool {
        matches!(self, MultimodalVertex::Road(_))
    }

    pub fn is_transit(&self) -> bool {
        matches!(self, MultimodalVertex::Transit(_, _))
    }

    pub fn is_poi(&self) -> bool {
        matches!(self, MultimodalVertex::Poi(_))
    }
}

/// Renders a vertex as `R<id>`, `PT<id>` or `POI<id>` using the database
/// identities stored in the graph. Obtained from
/// [`MultimodalGraph::display_vertex`].
pub struct VertexDisplay<'a> {
    pub(crate) graph: &'a MultimodalGraph,
    pub(crate) vertex: MultimodalVertex,
}

impl fmt::Display for VertexDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let id = self.graph.vertex_id(self.vertex);
        match self.vertex {
            MultimodalVertex::Road(_) => write!(f, "R{id}"),
            MultimodalVertex::Transit(_, _) => write!(f, "PT{id}"),
            MultimodalVertex::Poi(_) => write!(f, "POI{id}"),
        }
    }
}
