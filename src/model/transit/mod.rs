//! Public-transport network model

pub mod collection;
pub mod components;

pub use collection::TransitNetworkCollection;
pub use components::{TransitNetwork, TransitSection, TransitStop};

use petgraph::graph::{DiGraph, EdgeIndex, NodeIndex};

/// Directed labeled graph of one public-transport network
pub type TransitGraph = DiGraph<TransitStop, TransitSection>;

/// Descriptor of a stop inside a [`TransitGraph`].
pub type TransitStopId = NodeIndex;

/// Descriptor of an inter-stop section inside a [`TransitGraph`].
pub type TransitSectionId = EdgeIndex;
