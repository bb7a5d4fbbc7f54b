//! Road network components - nodes and sections

use crate::model::transit::TransitStopId;
use crate::{EntityId, NetworkId, PoiId, TransportModes};

/// Road graph node, a junction or an intermediate point of the network
#[derive(Debug, Clone, Copy, Default)]
pub struct RoadNode {
    /// Database id of the node
    pub id: EntityId,
    pub is_junction: bool,
    pub is_bifurcation: bool,
}

/// Road graph edge (street segment)
///
/// Sections are undirected; the two transport bitfields keep the allowed
/// modes of each direction apart.
#[derive(Debug, Clone, Default)]
pub struct RoadSection {
    /// Database id of the section
    pub id: EntityId,
    /// Database id of the road class
    pub road_class: EntityId,
    /// Allowed modes when traversing from source to target
    pub transport_forward: TransportModes,
    /// Allowed modes when traversing from target to source
    pub transport_backward: TransportModes,
    /// Section length in meters
    pub length_m: f64,
    pub car_speed_limit: f64,
    pub car_average_speed: f64,
    pub bus_average_speed: f64,
    pub road_name: String,
    pub address_left_side: String,
    pub address_right_side: String,
    pub lane_count: u16,
    pub is_roundabout: bool,
    pub is_bridge: bool,
    pub is_tunnel: bool,
    pub is_ramp: bool,
    pub is_tollway: bool,
    /// Transit stops anchored to this section, in import order.
    /// Wired by the import; the stops stay owned by their network.
    pub stops: Vec<StopAnchor>,
    /// Points of interest anchored to this section, in import order
    pub pois: Vec<PoiId>,
}

impl RoadSection {
    pub fn new(id: EntityId, length_m: f64) -> Self {
        RoadSection {
            id,
            length_m,
            ..Default::default()
        }
    }
}

/// Non-owning handle to a transit stop anchored on a road section
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StopAnchor {
    /// Network the stop belongs to
    pub network: NetworkId,
    /// Stop descriptor inside that network's graph
    pub stop: TransitStopId,
}
