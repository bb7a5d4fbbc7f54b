//! Graph-trait surface for generic traversal
//!
//! Implementing the [`petgraph::visit`] traits lets `petgraph::algo`
//! machinery (Dijkstra, A*, DFS, BFS) run over the composite without any
//! materialized graph: iteration is synthesized, edge weights are unit and
//! costs come from the caller's closure.

use std::sync::Arc;

use fixedbitset::FixedBitSet;
use petgraph::visit::{
    Data, EdgeCount, EdgeRef, GraphBase, GraphProp, IntoEdgeReferences, IntoEdges, IntoNeighbors,
    IntoNodeIdentifiers, NodeCount, NodeIndexable, VisitMap, Visitable,
};
use petgraph::Directed;

use super::{
    EdgeIter, MultimodalEdge, MultimodalGraph, MultimodalVertex, Neighbors, OutEdgeIter,
    VertexIndexer, VertexIter,
};

impl GraphBase for MultimodalGraph {
    type NodeId = MultimodalVertex;
    type EdgeId = MultimodalEdge;
}

impl Data for MultimodalGraph {
    type NodeWeight = ();
    type EdgeWeight = ();
}

impl GraphProp for MultimodalGraph {
    // Undirected road sections are surfaced once per endpoint, so the
    // composite itself is directed.
    type EdgeType = Directed;
}

impl NodeCount for MultimodalGraph {
    fn node_count(&self) -> usize {
        self.num_vertices()
    }
}

impl EdgeCount for MultimodalGraph {
    fn edge_count(&self) -> usize {
        self.num_edges()
    }
}

impl NodeIndexable for MultimodalGraph {
    fn node_bound(&self) -> usize {
        self.vertex_indexer().vertex_bound()
    }

    fn to_index(&self, vertex: MultimodalVertex) -> usize {
        self.vertex_indexer().index_of(vertex)
    }

    fn from_index(&self, index: usize) -> MultimodalVertex {
        self.vertex_indexer().vertex_of(index)
    }
}

impl EdgeRef for MultimodalEdge {
    type NodeId = MultimodalVertex;
    type EdgeId = MultimodalEdge;
    type Weight = ();

    fn source(&self) -> MultimodalVertex {
        MultimodalEdge::source(self)
    }

    fn target(&self) -> MultimodalVertex {
        MultimodalEdge::target(self)
    }

    fn weight(&self) -> &() {
        &()
    }

    fn id(&self) -> MultimodalEdge {
        *self
    }
}

impl<'a> IntoNodeIdentifiers for &'a MultimodalGraph {
    type NodeIdentifiers = VertexIter<'a>;

    fn node_identifiers(self) -> VertexIter<'a> {
        self.vertices()
    }
}

impl<'a> IntoNeighbors for &'a MultimodalGraph {
    type Neighbors = Neighbors<'a>;

    fn neighbors(self, vertex: MultimodalVertex) -> Neighbors<'a> {
        Neighbors(self.out_edges(vertex))
    }
}

impl<'a> IntoEdgeReferences for &'a MultimodalGraph {
    type EdgeRef = MultimodalEdge;
    type EdgeReferences = EdgeIter<'a>;

    fn edge_references(self) -> EdgeIter<'a> {
        self.edges()
    }
}

impl<'a> IntoEdges for &'a MultimodalGraph {
    type Edges = OutEdgeIter<'a>;

    fn edges(self, vertex: MultimodalVertex) -> OutEdgeIter<'a> {
        self.out_edges(vertex)
    }
}

/// Visit map keyed by the frozen vertex index.
///
/// Sized to the selection-independent bound, so one map stays valid
/// across selection changes.
#[derive(Debug, Clone)]
pub struct VertexVisitSet {
    visited: FixedBitSet,
    index: Arc<VertexIndexer>,
}

impl VisitMap<MultimodalVertex> for VertexVisitSet {
    fn visit(&mut self, vertex: MultimodalVertex) -> bool {
        let bit = self.index.index_of(vertex);
        !self.visited.put(bit)
    }

    fn unvisit(&mut self, vertex: MultimodalVertex) -> bool {
        let bit = self.index.index_of(vertex);
        let was_visited = self.visited.contains(bit);
        self.visited.set(bit, false);
        was_visited
    }

    fn is_visited(&self, vertex: &MultimodalVertex) -> bool {
        self.visited.contains(self.index.index_of(*vertex))
    }
}

impl Visitable for MultimodalGraph {
    type Map = VertexVisitSet;

    fn visit_map(&self) -> VertexVisitSet {
        VertexVisitSet {
            visited: FixedBitSet::with_capacity(self.vertex_indexer().vertex_bound()),
            index: Arc::clone(self.vertex_indexer_arc()),
        }
    }

    fn reset_map(&self, map: &mut VertexVisitSet) {
        map.visited.clear();
        map.index = Arc::clone(self.vertex_indexer_arc());
    }
}
