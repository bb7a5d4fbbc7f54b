use std::collections::BTreeMap;

use log::info;

use crate::model::poi::Poi;
use crate::model::road::{RoadGraph, RoadNode, RoadNodeId, RoadSection, RoadSectionId, StopAnchor};
use crate::model::transit::{
    TransitNetwork, TransitNetworkCollection, TransitSection, TransitSectionId, TransitStop,
    TransitStopId,
};
use crate::{Error, MultimodalGraph, NetworkId, PoiId};

/// Assembles a [`MultimodalGraph`] from its layers.
///
/// Every `add_*` call validates the references it introduces and wires the
/// anchor lists on road sections, so a graph that builds successfully
/// satisfies the cross-layer invariants: stops and POIs reference existing
/// road sections, and the anchor lists agree with the back-references.
///
/// # Errors
///
/// All failures are reported as [`Error`] values; an inconsistent input
/// never produces a graph.
#[derive(Debug, Default)]
pub struct MultimodalGraphBuilder {
    road: RoadGraph,
    networks: TransitNetworkCollection,
    pois: BTreeMap<PoiId, Poi>,
}

impl MultimodalGraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_road_node(&mut self, node: RoadNode) -> RoadNodeId {
        self.road.add_node(node)
    }

    /// Adds an undirected road section between two nodes.
    ///
    /// The stop and POI anchor lists must be empty; they are wired by
    /// [`add_transit_stop`](Self::add_transit_stop) and
    /// [`add_poi`](Self::add_poi).
    pub fn add_road_section(
        &mut self,
        from: RoadNodeId,
        to: RoadNodeId,
        section: RoadSection,
    ) -> Result<RoadSectionId, Error> {
        if self.road.node_weight(from).is_none() {
            return Err(Error::UnknownRoadNode(from.index()));
        }
        if self.road.node_weight(to).is_none() {
            return Err(Error::UnknownRoadNode(to.index()));
        }
        if !section.stops.is_empty() || !section.pois.is_empty() {
            return Err(Error::StrayAnchor(section.id));
        }
        Ok(self.road.add_edge(from, to, section))
    }

    pub fn add_network(&mut self, id: NetworkId, name: impl Into<String>) -> Result<(), Error> {
        if self.networks.contains(id) {
            return Err(Error::DuplicateNetwork(id));
        }
        self.networks.insert(id, TransitNetwork::new(name));
        Ok(())
    }

    /// Adds a stop to a network and anchors it on its road section.
    pub fn add_transit_stop(
        &mut self,
        network: NetworkId,
        stop: TransitStop,
    ) -> Result<TransitStopId, Error> {
        let section = stop.road_section;
        if self.road.edge_weight(section).is_none() {
            return Err(Error::UnknownRoadSection(section.index()));
        }
        let graph = match self.networks.get_mut(network) {
            Some(entry) => &mut entry.graph,
            None => return Err(Error::UnknownNetwork(network)),
        };
        let descriptor = graph.add_node(stop);
        self.road[section].stops.push(StopAnchor {
            network,
            stop: descriptor,
        });
        Ok(descriptor)
    }

    /// Adds a directed inter-stop section inside one network.
    pub fn add_transit_section(
        &mut self,
        network: NetworkId,
        from: TransitStopId,
        to: TransitStopId,
        section: TransitSection,
    ) -> Result<TransitSectionId, Error> {
        let graph = match self.networks.get_mut(network) {
            Some(entry) => &mut entry.graph,
            None => return Err(Error::UnknownNetwork(network)),
        };
        if graph.node_weight(from).is_none() {
            return Err(Error::UnknownStop(from.index(), network));
        }
        if graph.node_weight(to).is_none() {
            return Err(Error::UnknownStop(to.index(), network));
        }
        Ok(graph.add_edge(from, to, section))
    }

    /// Adds a POI and anchors it on its road section.
    pub fn add_poi(&mut self, poi: Poi) -> Result<(), Error> {
        if self.road.edge_weight(poi.road_section).is_none() {
            return Err(Error::UnknownRoadSection(poi.road_section.index()));
        }
        if !poi.abscissa.is_finite() || !(0.0..=1.0).contains(&poi.abscissa) {
            return Err(Error::InvalidAbscissa(poi.id, poi.abscissa));
        }
        if self.pois.contains_key(&poi.id) {
            return Err(Error::DuplicatePoi(poi.id));
        }
        self.road[poi.road_section].pois.push(poi.id);
        self.pois.insert(poi.id, poi);
        Ok(())
    }

    /// Verifies the assembled layers, freezes the vertex index, selects
    /// every network and returns the composite graph.
    pub fn build(self) -> Result<MultimodalGraph, Error> {
        self.verify_anchors()?;

        let MultimodalGraphBuilder {
            road,
            mut networks,
            pois,
        } = self;
        networks.select_all();

        let stop_count: usize = networks
            .iter()
            .map(|(_, network)| network.graph.node_count())
            .sum();
        info!(
            "Multimodal graph frozen: {} road nodes, {} road sections, {} networks with {} stops, {} pois",
            road.node_count(),
            road.edge_count(),
            networks.len(),
            stop_count,
            pois.len()
        );

        Ok(MultimodalGraph::from_parts(road, networks, pois))
    }

    /// Re-checks that every anchor list agrees with the back-references
    /// and that every stop is anchored exactly once.
    fn verify_anchors(&self) -> Result<(), Error> {
        let mut anchored = 0usize;
        for section_id in self.road.edge_indices() {
            let section = &self.road[section_id];
            for anchor in &section.stops {
                let stop = self
                    .networks
                    .get(anchor.network)
                    .and_then(|network| network.graph.node_weight(anchor.stop))
                    .ok_or(Error::InconsistentAnchor(section.id))?;
                if stop.road_section != section_id {
                    return Err(Error::InconsistentAnchor(section.id));
                }
                anchored += 1;
            }
            for poi in &section.pois {
                let poi = self
                    .pois
                    .get(poi)
                    .ok_or(Error::InconsistentAnchor(section.id))?;
                if poi.road_section != section_id {
                    return Err(Error::InconsistentAnchor(section.id));
                }
            }
        }

        let stop_count: usize = self
            .networks
            .iter()
            .map(|(_, network)| network.graph.node_count())
            .sum();
        if anchored != stop_count {
            // Some stop is anchored twice or not at all.
            let section = self
                .road
                .edge_indices()
                .next()
                .map(|id| self.road[id].id)
                .unwrap_or_default();
            return Err(Error::InconsistentAnchor(section));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::poi::PoiKind;

    fn node(id: u64) -> RoadNode {
        RoadNode {
            id,
            ..Default::default()
        }
    }

    #[test]
    fn rejects_sections_between_unknown_nodes() {
        let mut builder = MultimodalGraphBuilder::new();
        let a = builder.add_road_node(node(1));
        let err = builder
            .add_road_section(a, RoadNodeId::new(9), RoadSection::new(10, 50.0))
            .unwrap_err();
        assert!(matches!(err, Error::UnknownRoadNode(9)));
    }

    #[test]
    fn rejects_prewired_anchor_lists() {
        let mut builder = MultimodalGraphBuilder::new();
        let a = builder.add_road_node(node(1));
        let b = builder.add_road_node(node(2));
        let mut section = RoadSection::new(10, 50.0);
        section.pois.push(77);
        let err = builder.add_road_section(a, b, section).unwrap_err();
        assert!(matches!(err, Error::StrayAnchor(10)));
    }

    #[test]
    fn rejects_stops_on_unknown_sections() {
        let mut builder = MultimodalGraphBuilder::new();
        builder.add_network(1, "metro").unwrap();
        let err = builder
            .add_transit_stop(1, TransitStop::new(20, "stop", RoadSectionId::new(3)))
            .unwrap_err();
        assert!(matches!(err, Error::UnknownRoadSection(3)));
    }

    #[test]
    fn rejects_stops_for_unknown_networks() {
        let mut builder = MultimodalGraphBuilder::new();
        let a = builder.add_road_node(node(1));
        let b = builder.add_road_node(node(2));
        let section = builder
            .add_road_section(a, b, RoadSection::new(10, 50.0))
            .unwrap();
        let err = builder
            .add_transit_stop(7, TransitStop::new(20, "stop", section))
            .unwrap_err();
        assert!(matches!(err, Error::UnknownNetwork(7)));
    }

    #[test]
    fn rejects_transit_sections_across_missing_stops() {
        let mut builder = MultimodalGraphBuilder::new();
        let a = builder.add_road_node(node(1));
        let b = builder.add_road_node(node(2));
        let section = builder
            .add_road_section(a, b, RoadSection::new(10, 50.0))
            .unwrap();
        builder.add_network(1, "metro").unwrap();
        let s1 = builder
            .add_transit_stop(1, TransitStop::new(20, "stop", section))
            .unwrap();
        let err = builder
            .add_transit_section(1, s1, TransitStopId::new(5), TransitSection::new(30))
            .unwrap_err();
        assert!(matches!(err, Error::UnknownStop(5, 1)));
    }

    #[test]
    fn rejects_duplicate_networks_and_pois() {
        let mut builder = MultimodalGraphBuilder::new();
        builder.add_network(1, "metro").unwrap();
        assert!(matches!(
            builder.add_network(1, "again").unwrap_err(),
            Error::DuplicateNetwork(1)
        ));

        let a = builder.add_road_node(node(1));
        let b = builder.add_road_node(node(2));
        let section = builder
            .add_road_section(a, b, RoadSection::new(10, 50.0))
            .unwrap();
        builder
            .add_poi(Poi::new(40, PoiKind::CarPark, section, 0.5))
            .unwrap();
        assert!(matches!(
            builder
                .add_poi(Poi::new(40, PoiKind::CarPark, section, 0.7))
                .unwrap_err(),
            Error::DuplicatePoi(40)
        ));
    }

    #[test]
    fn rejects_abscissa_outside_unit_interval() {
        let mut builder = MultimodalGraphBuilder::new();
        let a = builder.add_road_node(node(1));
        let b = builder.add_road_node(node(2));
        let section = builder
            .add_road_section(a, b, RoadSection::new(10, 50.0))
            .unwrap();
        let err = builder
            .add_poi(Poi::new(40, PoiKind::CarPark, section, 1.2))
            .unwrap_err();
        assert!(matches!(err, Error::InvalidAbscissa(40, _)));
    }

    #[test]
    fn builds_and_selects_everything() {
        let mut builder = MultimodalGraphBuilder::new();
        let a = builder.add_road_node(node(1));
        let b = builder.add_road_node(node(2));
        let section = builder
            .add_road_section(a, b, RoadSection::new(10, 50.0))
            .unwrap();
        builder.add_network(1, "metro").unwrap();
        builder
            .add_transit_stop(1, TransitStop::new(20, "stop", section))
            .unwrap();

        let graph = builder.build().unwrap();
        assert!(graph.networks().is_selected(1));
        assert_eq!(graph.num_vertices(), 3);
    }
}
