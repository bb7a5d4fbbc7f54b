//! Dense integer indexes over composite vertices and edges
//!
//! Index-addressed shortest-path machinery keys its property storage
//! (colors, distances, predecessors) by these maps.

use std::collections::BTreeMap;

use hashbrown::HashMap;

use crate::model::poi::Poi;
use crate::model::road::{RoadGraph, RoadNodeId};
use crate::model::transit::{TransitNetworkCollection, TransitStopId};
use crate::{NetworkId, PoiId};

use super::{MultimodalEdge, MultimodalGraph, MultimodalVertex};

/// Maps every composite vertex to a dense index in `[0, vertex_bound())`.
///
/// Road vertices keep their local index; transit stops follow, network by
/// network in collection order; POIs close the range. The transit block
/// counts **all** networks of the collection, selected or not, so indexes
/// stay stable under selection changes: property vectors sized to
/// [`vertex_bound`](Self::vertex_bound) under a full selection remain
/// valid under any narrower one.
///
/// The map is frozen when the graph is built; lookups are O(1) through
/// cached prefix and position tables.
#[derive(Debug, Default)]
pub struct VertexIndexer {
    road_count: usize,
    transit_total: usize,
    /// Offset of each network's block inside the transit range.
    network_offset: HashMap<NetworkId, usize>,
    /// Same offsets in collection order, for reverse lookups.
    network_order: Vec<(NetworkId, usize)>,
    poi_offset: HashMap<PoiId, usize>,
    poi_order: Vec<PoiId>,
}

impl VertexIndexer {
    pub(crate) fn new(
        road: &RoadGraph,
        networks: &TransitNetworkCollection,
        pois: &BTreeMap<PoiId, Poi>,
    ) -> Self {
        let mut network_offset = HashMap::with_capacity(networks.len());
        let mut network_order = Vec::with_capacity(networks.len());
        let mut offset = 0;
        for (id, network) in networks.iter() {
            network_offset.insert(id, offset);
            network_order.push((id, offset));
            offset += network.graph.node_count();
        }
        let poi_order: Vec<PoiId> = pois.keys().copied().collect();
        let poi_offset = poi_order
            .iter()
            .enumerate()
            .map(|(position, id)| (*id, position))
            .collect();
        VertexIndexer {
            road_count: road.node_count(),
            transit_total: offset,
            network_offset,
            network_order,
            poi_offset,
            poi_order,
        }
    }

    /// Number of indexable vertices, independent of the selection.
    pub fn vertex_bound(&self) -> usize {
        self.road_count + self.transit_total + self.poi_order.len()
    }

    /// Dense index of a vertex. Panics on a vertex from another graph.
    pub fn index_of(&self, vertex: MultimodalVertex) -> usize {
        match vertex {
            MultimodalVertex::Road(node) => {
                let index = node.index();
                assert!(
                    index < self.road_count,
                    "road vertex does not belong to this graph"
                );
                index
            }
            MultimodalVertex::Transit(network, stop) => {
                let offset = self
                    .network_offset
                    .get(&network)
                    .expect("transit vertex from a network outside this graph");
                self.road_count + offset + stop.index()
            }
            MultimodalVertex::Poi(id) => {
                let position = self
                    .poi_offset
                    .get(&id)
                    .expect("poi vertex does not belong to this graph");
                self.road_count + self.transit_total + position
            }
        }
    }

    /// Inverse of [`index_of`](Self::index_of). Panics when `index` is not
    /// below [`vertex_bound`](Self::vertex_bound).
    pub fn vertex_of(&self, index: usize) -> MultimodalVertex {
        if index < self.road_count {
            return MultimodalVertex::Road(RoadNodeId::new(index));
        }
        let rest = index - self.road_count;
        if rest < self.transit_total {
            // Last network whose block starts at or before the offset;
            // empty networks share their start with the next one and are
            // skipped by taking the last.
            let at = self
                .network_order
                .partition_point(|(_, start)| *start <= rest)
                - 1;
            let (network, start) = self.network_order[at];
            return MultimodalVertex::Transit(network, TransitStopId::new(rest - start));
        }
        let position = rest - self.transit_total;
        let id = self
            .poi_order
            .get(position)
            .copied()
            .expect("vertex index out of bounds");
        MultimodalVertex::Poi(id)
    }
}

/// Maps every composite edge to its position in the `edges()` sequence
/// under the selection that was current at construction time.
///
/// Built by one O(|E|) enumeration; reads are O(1). A selection change
/// re-orders the sequence, so the map must be rebuilt afterwards.
#[derive(Debug)]
pub struct EdgeIndexer {
    index: HashMap<MultimodalEdge, usize>,
}

impl EdgeIndexer {
    pub(crate) fn new(graph: &MultimodalGraph) -> Self {
        let index = graph
            .edges()
            .enumerate()
            .map(|(position, edge)| (edge, position))
            .collect();
        EdgeIndexer { index }
    }

    /// Number of indexed edges.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Dense index of an edge. Panics on an edge the indexed sequence
    /// never produced (foreign edge, or the selection changed since).
    pub fn index_of(&self, edge: &MultimodalEdge) -> usize {
        *self
            .index
            .get(edge)
            .expect("edge does not belong to the indexed sequence")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::transit::{TransitNetwork, TransitStop};
    use crate::RoadNode;

    fn indexer() -> VertexIndexer {
        let mut road = RoadGraph::default();
        for id in 0..3 {
            road.add_node(RoadNode {
                id,
                ..Default::default()
            });
        }
        let section = road.add_edge(
            RoadNodeId::new(0),
            RoadNodeId::new(1),
            crate::RoadSection::new(10, 100.0),
        );

        let mut networks = TransitNetworkCollection::new();
        let mut metro = TransitNetwork::new("metro");
        metro.graph.add_node(TransitStop::new(20, "a", section));
        metro.graph.add_node(TransitStop::new(21, "b", section));
        networks.insert(1, TransitNetwork::new("empty"));
        networks.insert(2, metro);

        let mut pois = BTreeMap::new();
        pois.insert(
            30,
            Poi::new(30, crate::PoiKind::UserPoi, section, 0.5),
        );

        VertexIndexer::new(&road, &networks, &pois)
    }

    #[test]
    fn blocks_are_contiguous() {
        let indexer = indexer();
        assert_eq!(indexer.vertex_bound(), 6);
        assert_eq!(indexer.index_of(MultimodalVertex::Road(RoadNodeId::new(2))), 2);
        assert_eq!(
            indexer.index_of(MultimodalVertex::Transit(2, TransitStopId::new(0))),
            3
        );
        assert_eq!(indexer.index_of(MultimodalVertex::Poi(30)), 5);
    }

    #[test]
    fn vertex_of_round_trips_every_index() {
        let indexer = indexer();
        for index in 0..indexer.vertex_bound() {
            let vertex = indexer.vertex_of(index);
            assert_eq!(indexer.index_of(vertex), index);
        }
    }

    #[test]
    fn empty_networks_are_skipped_by_reverse_lookup() {
        let indexer = indexer();
        let vertex = indexer.vertex_of(3);
        assert_eq!(vertex, MultimodalVertex::Transit(2, TransitStopId::new(0)));
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn vertex_of_rejects_out_of_bounds() {
        let indexer = indexer();
        indexer.vertex_of(indexer.vertex_bound());
    }

    #[test]
    #[should_panic(expected = "outside this graph")]
    fn index_of_rejects_foreign_network() {
        let indexer = indexer();
        indexer.index_of(MultimodalVertex::Transit(99, TransitStopId::new(0)));
    }
}
