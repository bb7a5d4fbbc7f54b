//! Coordinate lookup against an external store
//!
//! The composite graph never stores geometry; positions live in whatever
//! imported the data. The store is queried per entity table by database
//! id, and a missing row for a known-valid vertex surfaces as
//! [`Error::DataMissing`].

use geo::Point;
use hashbrown::HashMap;

use crate::{EntityId, Error, MultimodalGraph, MultimodalVertex};

/// External source of entity positions, one lookup per table.
pub trait CoordinateSource {
    fn road_node(&self, id: EntityId) -> Option<Point<f64>>;
    fn transit_stop(&self, id: EntityId) -> Option<Point<f64>>;
    fn poi(&self, id: EntityId) -> Option<Point<f64>>;
}

/// Position of a composite vertex, queried from the table matching its
/// variant.
///
/// # Errors
///
/// [`Error::DataMissing`] when the store has no row for the vertex.
/// Panics on a vertex the graph does not own.
pub fn coordinates<S>(
    vertex: MultimodalVertex,
    graph: &MultimodalGraph,
    source: &S,
) -> Result<Point<f64>, Error>
where
    S: CoordinateSource + ?Sized,
{
    let id = graph.vertex_id(vertex);
    let point = match vertex {
        MultimodalVertex::Road(_) => source.road_node(id),
        MultimodalVertex::Transit(_, _) => source.transit_stop(id),
        MultimodalVertex::Poi(_) => source.poi(id),
    };
    point.ok_or_else(|| Error::DataMissing(graph.display_vertex(vertex).to_string()))
}

/// In-memory [`CoordinateSource`] for tests and diagnostics.
#[derive(Debug, Clone, Default)]
pub struct MemoryCoordinateSource {
    road_nodes: HashMap<EntityId, Point<f64>>,
    transit_stops: HashMap<EntityId, Point<f64>>,
    pois: HashMap<EntityId, Point<f64>>,
}

impl MemoryCoordinateSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_road_node(&mut self, id: EntityId, x: f64, y: f64) {
        self.road_nodes.insert(id, Point::new(x, y));
    }

    pub fn insert_transit_stop(&mut self, id: EntityId, x: f64, y: f64) {
        self.transit_stops.insert(id, Point::new(x, y));
    }

    pub fn insert_poi(&mut self, id: EntityId, x: f64, y: f64) {
        self.pois.insert(id, Point::new(x, y));
    }
}

impl CoordinateSource for MemoryCoordinateSource {
    fn road_node(&self, id: EntityId) -> Option<Point<f64>> {
        self.road_nodes.get(&id).copied()
    }

    fn transit_stop(&self, id: EntityId) -> Option<Point<f64>> {
        self.transit_stops.get(&id).copied()
    }

    fn poi(&self, id: EntityId) -> Option<Point<f64>> {
        self.pois.get(&id).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::road::{RoadNode, RoadSection};
    use crate::model::transit::TransitStop;
    use crate::MultimodalGraph;

    fn graph() -> MultimodalGraph {
        let mut builder = MultimodalGraph::builder();
        let a = builder.add_road_node(RoadNode {
            id: 1,
            ..Default::default()
        });
        let b = builder.add_road_node(RoadNode {
            id: 2,
            ..Default::default()
        });
        let section = builder
            .add_road_section(a, b, RoadSection::new(10, 120.0))
            .unwrap();
        builder.add_network(1, "metro").unwrap();
        builder
            .add_transit_stop(1, TransitStop::new(20, "central", section))
            .unwrap();
        builder.build().unwrap()
    }

    #[test]
    fn dispatches_by_vertex_variant() {
        let graph = graph();
        let mut source = MemoryCoordinateSource::new();
        source.insert_road_node(1, 2.35, 48.85);
        source.insert_transit_stop(20, 2.36, 48.86);

        let road = graph.road_vertex_by_id(1).unwrap();
        let stop = graph.transit_stop_by_id(20).unwrap();

        assert_eq!(coordinates(road, &graph, &source).unwrap(), Point::new(2.35, 48.85));
        assert_eq!(coordinates(stop, &graph, &source).unwrap(), Point::new(2.36, 48.86));
    }

    #[test]
    fn missing_rows_surface_as_data_missing() {
        let graph = graph();
        let source = MemoryCoordinateSource::new();
        let road = graph.road_vertex_by_id(2).unwrap();

        let err = coordinates(road, &graph, &source).unwrap_err();
        assert!(matches!(err, Error::DataMissing(_)));
        assert_eq!(err.to_string(), "no coordinates stored for R2");
    }
}
