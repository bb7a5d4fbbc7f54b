use thiserror::Error;

use crate::{EntityId, NetworkId, PoiId};

#[derive(Error, Debug)]
pub enum Error {
    #[error("no coordinates stored for {0}")]
    DataMissing(String),
    #[error("road node descriptor {0} is not part of the graph")]
    UnknownRoadNode(usize),
    #[error("road section descriptor {0} is not part of the graph")]
    UnknownRoadSection(usize),
    #[error("public-transport network {0} is not part of the graph")]
    UnknownNetwork(NetworkId),
    #[error("transit stop descriptor {0} is not part of network {1}")]
    UnknownStop(usize, NetworkId),
    #[error("public-transport network {0} is already registered")]
    DuplicateNetwork(NetworkId),
    #[error("poi {0} is already registered")]
    DuplicatePoi(PoiId),
    #[error("poi {0} abscissa {1} is outside [0, 1]")]
    InvalidAbscissa(PoiId, f64),
    #[error("road section {0} carries anchors that were not wired by the import")]
    StrayAnchor(EntityId),
    #[error("anchor lists of road section {0} disagree with the stop back-references")]
    InconsistentAnchor(EntityId),
}
