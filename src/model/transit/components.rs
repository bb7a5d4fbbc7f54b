//! Public-transport components - stops, sections and networks

use super::TransitGraph;
use crate::model::road::RoadSectionId;
use crate::EntityId;

/// Transit graph vertex
///
/// Every stop lies on a road section; the back-reference is non-owning
/// and must outlive nothing - descriptors stay valid for the life of the
/// composite graph.
#[derive(Debug, Clone)]
pub struct TransitStop {
    /// Database id of the stop
    pub id: EntityId,
    pub name: String,
    /// Road section the stop is located on
    pub road_section: RoadSectionId,
}

impl TransitStop {
    pub fn new(id: EntityId, name: impl Into<String>, road_section: RoadSectionId) -> Self {
        TransitStop {
            id,
            name: name.into(),
            road_section,
        }
    }
}

/// Transit graph edge, one directed inter-stop section
#[derive(Debug, Clone, Copy, Default)]
pub struct TransitSection {
    /// Database id of the section
    pub id: EntityId,
}

impl TransitSection {
    pub fn new(id: EntityId) -> Self {
        TransitSection { id }
    }
}

/// One public-transport network of the collection
#[derive(Debug, Clone, Default)]
pub struct TransitNetwork {
    pub name: String,
    pub graph: TransitGraph,
}

impl TransitNetwork {
    pub fn new(name: impl Into<String>) -> Self {
        TransitNetwork {
            name: name.into(),
            graph: TransitGraph::default(),
        }
    }
}
