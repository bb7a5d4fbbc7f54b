//! Road network model

pub mod components;

pub use components::{RoadNode, RoadSection, StopAnchor};

use petgraph::graph::{EdgeIndex, NodeIndex, UnGraph};

/// Undirected labeled road graph; nodes and sections are bundled weights.
pub type RoadGraph = UnGraph<RoadNode, RoadSection>;

/// Descriptor of a road node inside [`RoadGraph`].
pub type RoadNodeId = NodeIndex;

/// Descriptor of a road section inside [`RoadGraph`].
pub type RoadSectionId = EdgeIndex;
