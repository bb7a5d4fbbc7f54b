//! Points of interest anchored along road sections

use crate::model::road::RoadSectionId;
use crate::{PoiId, TransportModes};

/// Kind of a point of interest. The numeric values are part of the
/// imported data contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PoiKind {
    CarPark = 1,
    SharedCarPoint = 2,
    CyclePark = 3,
    SharedCyclePoint = 4,
    UserPoi = 5,
}

/// A point attached to a road section at an abscissa along it
#[derive(Debug, Clone)]
pub struct Poi {
    /// Database id of the point
    pub id: PoiId,
    pub kind: PoiKind,
    pub name: String,
    /// Modes that can be parked here
    pub parking_modes: TransportModes,
    /// Road section the point is located on
    pub road_section: RoadSectionId,
    /// Position along the section, in [0, 1] from source to target
    pub abscissa: f64,
}

impl Poi {
    pub fn new(id: PoiId, kind: PoiKind, road_section: RoadSectionId, abscissa: f64) -> Self {
        Poi {
            id,
            kind,
            name: String::new(),
            parking_modes: crate::transport_mode::NONE,
            road_section,
            abscissa,
        }
    }
}
