//! Unified edge over the composite graph

use std::fmt;

use super::{MultimodalGraph, MultimodalVertex};

/// Kind of a composite edge, derived from the variants of its endpoints.
///
/// The numeric values are the only numeric contract the core surfaces;
/// `UnknownConnection` never appears during normal iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum ConnectionType {
    UnknownConnection = -1,
    Road2Road = 0,
    Road2Transport = 1,
    Transport2Road = 2,
    Transport2Transport = 3,
    Road2Poi = 4,
    Poi2Road = 5,
}

impl ConnectionType {
    pub fn tag(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ConnectionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ConnectionType::UnknownConnection => "UnknownConnection",
            ConnectionType::Road2Road => "Road2Road",
            ConnectionType::Road2Transport => "Road2Transport",
            ConnectionType::Transport2Road => "Transport2Road",
            ConnectionType::Transport2Transport => "Transport2Transport",
            ConnectionType::Road2Poi => "Road2Poi",
            ConnectionType::Poi2Road => "Poi2Road",
        };
        f.write_str(name)
    }
}

/// An edge of the composite graph, an ordered pair of vertices.
///
/// The derived ordering is lexicographic by (source, target).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MultimodalEdge {
    source: MultimodalVertex,
    target: MultimodalVertex,
}

impl MultimodalEdge {
    pub(crate) fn new(source: MultimodalVertex, target: MultimodalVertex) -> Self {
        MultimodalEdge { source, target }
    }

    pub fn source(&self) -> MultimodalVertex {
        self.source
    }

    pub fn target(&self) -> MultimodalVertex {
        self.target
    }

    pub fn connection_type(&self) -> ConnectionType {
        use MultimodalVertex::{Poi, Road, Transit};
        match (self.source, self.target) {
            (Road(_), Road(_)) => ConnectionType::Road2Road,
            (Road(_), Transit(_, _)) => ConnectionType::Road2Transport,
            (Road(_), Poi(_)) => ConnectionType::Road2Poi,
            (Transit(_, _), Road(_)) => ConnectionType::Transport2Road,
            (Transit(_, _), Transit(_, _)) => ConnectionType::Transport2Transport,
            (Poi(_), Road(_)) => ConnectionType::Poi2Road,
            _ => ConnectionType::UnknownConnection,
        }
    }
}

/// Renders an edge as `<connection-type> (<source>,<target>)`. Obtained
/// from [`MultimodalGraph::display_edge`].
pub struct EdgeDisplay<'a> {
    pub(crate) graph: &'a MultimodalGraph,
    pub(crate) edge: MultimodalEdge,
}

impl fmt::Display for EdgeDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({},{})",
            self.edge.connection_type(),
            self.graph.display_vertex(self.edge.source),
            self.graph.display_vertex(self.edge.target),
        )
    }
}
