//! Lazy iterators over the composite graph
//!
//! All three iterators hold O(1) state, never allocate while advancing and
//! synthesize the cross-layer connections on the fly. Their emission order
//! is deterministic for a fixed selection, which keeps traversal results
//! reproducible.

use std::collections::btree_map;
use std::iter;

use petgraph::graph::{EdgeReference, Edges, NodeIndices};
use petgraph::visit::EdgeRef;
use petgraph::{Directed, Undirected};

use crate::model::poi::Poi;
use crate::model::road::{RoadNodeId, RoadSection};
use crate::model::transit::{TransitNetwork, TransitSection};
use crate::{NetworkId, PoiId};

use super::{MultimodalEdge, MultimodalGraph, MultimodalVertex};

/// Iterator over all vertices of the composite: road vertices first, then
/// the stops of every selected network in collection order, then POIs.
pub struct VertexIter<'a> {
    graph: &'a MultimodalGraph,
    road: NodeIndices,
    networks: btree_map::Iter<'a, NetworkId, TransitNetwork>,
    transit: Option<(NetworkId, NodeIndices)>,
    pois: iter::Copied<btree_map::Keys<'a, PoiId, Poi>>,
}

impl<'a> VertexIter<'a> {
    pub(crate) fn new(graph: &'a MultimodalGraph) -> Self {
        VertexIter {
            graph,
            road: graph.road().node_indices(),
            networks: graph.networks().entries(),
            // The first selected network is pulled lazily, so an empty or
            // fully unselected collection needs no special case.
            transit: None,
            pois: graph.poi_ids(),
        }
    }
}

impl Iterator for VertexIter<'_> {
    type Item = MultimodalVertex;

    fn next(&mut self) -> Option<MultimodalVertex> {
        if let Some(node) = self.road.next() {
            return Some(MultimodalVertex::Road(node));
        }
        loop {
            if let Some((id, stops)) = self.transit.as_mut() {
                if let Some(stop) = stops.next() {
                    return Some(MultimodalVertex::Transit(*id, stop));
                }
            }
            match self.networks.next() {
                Some((&id, network)) => {
                    if self.graph.networks().is_selected(id) {
                        self.transit = Some((id, network.graph.node_indices()));
                    }
                }
                None => break,
            }
        }
        self.pois.next().map(MultimodalVertex::Poi)
    }
}

/// Iterator over the outgoing edges of one vertex, in the composite's
/// deterministic per-variant order.
pub struct OutEdgeIter<'a> {
    graph: &'a MultimodalGraph,
    source: MultimodalVertex,
    state: OutEdgeState<'a>,
}

enum OutEdgeState<'a> {
    /// Road sources walk their incident sections; each section emits its
    /// selected stops, then its POIs, then the section itself.
    Road {
        edges: Edges<'a, RoadSection, Undirected>,
        current: Option<EdgeReference<'a, RoadSection>>,
        stop_pos: usize,
        poi_pos: usize,
    },
    /// Transit sources emit the two endpoints of their road section, then
    /// the outgoing transit sections of their network.
    Transit {
        endpoints: (RoadNodeId, RoadNodeId),
        phase: u8,
        edges: Edges<'a, TransitSection, Directed>,
    },
    /// POI sources emit the two endpoints of their road section.
    Poi {
        endpoints: (RoadNodeId, RoadNodeId),
        phase: u8,
    },
}

impl<'a> OutEdgeIter<'a> {
    pub(crate) fn new(graph: &'a MultimodalGraph, source: MultimodalVertex) -> Self {
        let state = match source {
            MultimodalVertex::Road(node) => {
                assert!(
                    graph.road().node_weight(node).is_some(),
                    "road vertex does not belong to this graph"
                );
                let mut edges = graph.road().edges(node);
                let current = edges.next();
                OutEdgeState::Road {
                    edges,
                    current,
                    stop_pos: 0,
                    poi_pos: 0,
                }
            }
            MultimodalVertex::Transit(network, stop) => {
                let network = graph
                    .networks()
                    .get(network)
                    .expect("transit vertex does not belong to this graph");
                let section = network
                    .graph
                    .node_weight(stop)
                    .expect("transit vertex does not belong to this graph")
                    .road_section;
                let endpoints = graph
                    .road()
                    .edge_endpoints(section)
                    .expect("stop anchored on an unknown road section");
                OutEdgeState::Transit {
                    endpoints,
                    phase: 0,
                    edges: network.graph.edges(stop),
                }
            }
            MultimodalVertex::Poi(id) => {
                let poi = graph
                    .poi(id)
                    .expect("poi vertex does not belong to this graph");
                let endpoints = graph
                    .road()
                    .edge_endpoints(poi.road_section)
                    .expect("poi anchored on an unknown road section");
                OutEdgeState::Poi {
                    endpoints,
                    phase: 0,
                }
            }
        };
        OutEdgeIter {
            graph,
            source,
            state,
        }
    }
}

impl Iterator for OutEdgeIter<'_> {
    type Item = MultimodalEdge;

    fn next(&mut self) -> Option<MultimodalEdge> {
        let graph = self.graph;
        let source = self.source;
        let target = match &mut self.state {
            OutEdgeState::Road {
                edges,
                current,
                stop_pos,
                poi_pos,
            } => {
                let edge = (*current)?;
                let section = edge.weight();
                loop {
                    if *stop_pos < section.stops.len() {
                        let anchor = section.stops[*stop_pos];
                        *stop_pos += 1;
                        if graph.networks().is_selected(anchor.network) {
                            break MultimodalVertex::Transit(anchor.network, anchor.stop);
                        }
                        continue;
                    }
                    if *poi_pos < section.pois.len() {
                        let poi = section.pois[*poi_pos];
                        *poi_pos += 1;
                        break MultimodalVertex::Poi(poi);
                    }
                    // The section itself closes this incident edge.
                    let road_target = edge.target();
                    *current = edges.next();
                    *stop_pos = 0;
                    *poi_pos = 0;
                    break MultimodalVertex::Road(road_target);
                }
            }
            OutEdgeState::Transit {
                endpoints,
                phase,
                edges,
            } => match *phase {
                0 => {
                    *phase = 1;
                    MultimodalVertex::Road(endpoints.0)
                }
                1 => {
                    *phase = 2;
                    MultimodalVertex::Road(endpoints.1)
                }
                _ => {
                    let edge = edges.next()?;
                    let MultimodalVertex::Transit(network, _) = source else {
                        unreachable!("transit out-edge state for a non-transit source");
                    };
                    MultimodalVertex::Transit(network, edge.target())
                }
            },
            OutEdgeState::Poi { endpoints, phase } => match *phase {
                0 => {
                    *phase = 1;
                    MultimodalVertex::Road(endpoints.0)
                }
                1 => {
                    *phase = 2;
                    MultimodalVertex::Road(endpoints.1)
                }
                _ => return None,
            },
        };
        Some(MultimodalEdge::new(source, target))
    }
}

/// Iterator over all edges of the composite: the concatenation of
/// `out_edges(v)` for every vertex in `vertices()` order.
pub struct EdgeIter<'a> {
    graph: &'a MultimodalGraph,
    vertices: VertexIter<'a>,
    out: Option<OutEdgeIter<'a>>,
}

impl<'a> EdgeIter<'a> {
    pub(crate) fn new(graph: &'a MultimodalGraph) -> Self {
        EdgeIter {
            graph,
            vertices: VertexIter::new(graph),
            out: None,
        }
    }
}

impl Iterator for EdgeIter<'_> {
    type Item = MultimodalEdge;

    fn next(&mut self) -> Option<MultimodalEdge> {
        loop {
            if let Some(out) = self.out.as_mut() {
                if let Some(edge) = out.next() {
                    return Some(edge);
                }
            }
            let vertex = self.vertices.next()?;
            self.out = Some(OutEdgeIter::new(self.graph, vertex));
        }
    }
}

/// Iterator over the out-neighbors of a vertex, the targets of its
/// outgoing edges.
pub struct Neighbors<'a>(pub(crate) OutEdgeIter<'a>);

impl Iterator for Neighbors<'_> {
    type Item = MultimodalVertex;

    fn next(&mut self) -> Option<MultimodalVertex> {
        self.0.next().map(|edge| edge.target())
    }
}
