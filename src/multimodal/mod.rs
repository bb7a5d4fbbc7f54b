//! The composite multimodal graph
//!
//! Overlays the road graph, the selected public-transport networks and the
//! POI collection behind one vertex/edge view. The view is read-only; the
//! only mutation allowed after construction is the network selection.

mod edge;
mod index;
mod iter;
mod vertex;
mod visit;


pub use edge::{ConnectionType, EdgeDisplay, MultimodalEdge};
pub use index::{EdgeIndexer, VertexIndexer};
pub use iter::{EdgeIter, Neighbors, OutEdgeIter, VertexIter};
pub use vertex::{MultimodalVertex, VertexDisplay};
pub use visit::VertexVisitSet;

use std::collections::btree_map;
use std::collections::BTreeMap;
use std::iter::Copied;
use std::sync::Arc;

use crate::model::poi::Poi;
use crate::model::road::RoadGraph;
use crate::model::transit::TransitNetworkCollection;
use crate::{EntityId, PoiId};

/// The composite graph: one road graph, a keyed collection of
/// public-transport networks and the POI collection.
///
/// Built once through [`crate::loading::MultimodalGraphBuilder`]; the
/// components are owned and immutable afterwards. Parallel traversals over
/// one graph are safe as long as nobody mutates the selection while others
/// iterate.
#[derive(Debug)]
pub struct MultimodalGraph {
    road: RoadGraph,
    networks: TransitNetworkCollection,
    pois: BTreeMap<PoiId, Poi>,
    indexer: Arc<VertexIndexer>,
}

impl MultimodalGraph {
    pub(crate) fn from_parts(
        road: RoadGraph,
        networks: TransitNetworkCollection,
        pois: BTreeMap<PoiId, Poi>,
    ) -> Self {
        let indexer = Arc::new(VertexIndexer::new(&road, &networks, &pois));
        MultimodalGraph {
            road,
            networks,
            pois,
            indexer,
        }
    }

    /// Starts an import.
    pub fn builder() -> crate::loading::MultimodalGraphBuilder {
        crate::loading::MultimodalGraphBuilder::new()
    }

    pub fn road(&self) -> &RoadGraph {
        &self.road
    }

    pub fn networks(&self) -> &TransitNetworkCollection {
        &self.networks
    }

    /// Mutable access to the network collection; its public surface only
    /// changes the selection.
    pub fn networks_mut(&mut self) -> &mut TransitNetworkCollection {
        &mut self.networks
    }

    pub fn poi(&self, id: PoiId) -> Option<&Poi> {
        self.pois.get(&id)
    }

    pub fn pois(&self) -> impl Iterator<Item = &Poi> {
        self.pois.values()
    }

    pub fn poi_count(&self) -> usize {
        self.pois.len()
    }

    pub(crate) fn poi_ids(&self) -> Copied<btree_map::Keys<'_, PoiId, Poi>> {
        self.pois.keys().copied()
    }

    /// All vertices: road vertices, then the stops of every selected
    /// network in collection order, then POIs.
    pub fn vertices(&self) -> VertexIter<'_> {
        VertexIter::new(self)
    }

    /// All edges, the concatenation of `out_edges(v)` over `vertices()`.
    pub fn edges(&self) -> EdgeIter<'_> {
        EdgeIter::new(self)
    }

    /// Outgoing edges of one vertex. Panics on a vertex the graph does
    /// not own.
    pub fn out_edges(&self, vertex: MultimodalVertex) -> OutEdgeIter<'_> {
        OutEdgeIter::new(self, vertex)
    }

    /// Number of outgoing edges of a vertex, computed without iterating.
    pub fn out_degree(&self, vertex: MultimodalVertex) -> usize {
        match vertex {
            MultimodalVertex::Road(node) => {
                assert!(
                    self.road.node_weight(node).is_some(),
                    "road vertex does not belong to this graph"
                );
                self.road
                    .edges(node)
                    .map(|edge| {
                        let section = edge.weight();
                        let stops = section
                            .stops
                            .iter()
                            .filter(|anchor| self.networks.is_selected(anchor.network))
                            .count();
                        stops + section.pois.len() + 1
                    })
                    .sum()
            }
            MultimodalVertex::Transit(network, stop) => {
                let network = self
                    .networks
                    .get(network)
                    .expect("transit vertex does not belong to this graph");
                network.graph.edges(stop).count() + 2
            }
            MultimodalVertex::Poi(id) => {
                assert!(
                    self.pois.contains_key(&id),
                    "poi vertex does not belong to this graph"
                );
                2
            }
        }
    }

    /// Number of vertices under the current selection.
    pub fn num_vertices(&self) -> usize {
        let transit: usize = self
            .networks
            .iter_selected()
            .map(|(_, network)| network.graph.node_count())
            .sum();
        self.road.node_count() + transit + self.pois.len()
    }

    /// Number of edges under the current selection, in closed form.
    ///
    /// Every road section surfaces once per endpoint; every stop of a
    /// selected network adds two Transport2Road and two Road2Transport
    /// edges; every POI adds two Poi2Road and two Road2Poi edges. The
    /// total equals the cardinality of [`edges`](Self::edges).
    pub fn num_edges(&self) -> usize {
        let transit: usize = self
            .networks
            .iter_selected()
            .map(|(_, network)| network.graph.edge_count() + 4 * network.graph.node_count())
            .sum();
        self.road.edge_count() * 2 + transit + self.pois.len() * 4
    }

    /// The frozen selection-independent vertex index.
    pub fn vertex_indexer(&self) -> &VertexIndexer {
        &self.indexer
    }

    pub(crate) fn vertex_indexer_arc(&self) -> &Arc<VertexIndexer> {
        &self.indexer
    }

    /// Builds the edge index for the current selection, one O(|E|) pass.
    pub fn edge_indexer(&self) -> EdgeIndexer {
        EdgeIndexer::new(self)
    }

    /// Looks an edge up by its endpoints with a linear scan over
    /// [`edges`](Self::edges). Diagnostic paths only.
    pub fn find_edge(
        &self,
        source: MultimodalVertex,
        target: MultimodalVertex,
    ) -> Option<MultimodalEdge> {
        self.edges()
            .find(|edge| edge.source() == source && edge.target() == target)
    }

    /// Finds the road vertex carrying a database id. Linear scan,
    /// diagnostic paths only.
    pub fn road_vertex_by_id(&self, id: EntityId) -> Option<MultimodalVertex> {
        self.road
            .node_indices()
            .find(|node| self.road[*node].id == id)
            .map(MultimodalVertex::Road)
    }

    /// Finds the transit stop carrying a database id across all networks.
    /// Linear scan, diagnostic paths only.
    pub fn transit_stop_by_id(&self, id: EntityId) -> Option<MultimodalVertex> {
        self.networks.iter().find_map(|(network_id, network)| {
            network
                .graph
                .node_indices()
                .find(|stop| network.graph[*stop].id == id)
                .map(|stop| MultimodalVertex::Transit(network_id, stop))
        })
    }

    /// Database identity of the entity behind a vertex.
    pub fn vertex_id(&self, vertex: MultimodalVertex) -> EntityId {
        match vertex {
            MultimodalVertex::Road(node) => self.road[node].id,
            MultimodalVertex::Transit(network, stop) => {
                let network = self
                    .networks
                    .get(network)
                    .expect("transit vertex does not belong to this graph");
                network.graph[stop].id
            }
            MultimodalVertex::Poi(id) => {
                self.poi(id)
                    .expect("poi vertex does not belong to this graph")
                    .id
            }
        }
    }

    /// Display adapter rendering a vertex as `R<id>`, `PT<id>` or
    /// `POI<id>`.
    pub fn display_vertex(&self, vertex: MultimodalVertex) -> VertexDisplay<'_> {
        VertexDisplay {
            graph: self,
            vertex,
        }
    }

    /// Display adapter rendering an edge as
    /// `<connection-type> (<source>,<target>)`.
    pub fn display_edge(&self, edge: MultimodalEdge) -> EdgeDisplay<'_> {
        EdgeDisplay { graph: self, edge }
    }
}
