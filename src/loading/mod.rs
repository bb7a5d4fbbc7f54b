//! This module is responsible for assembling a multimodal graph from
//! already-decoded road, public-transport and POI data, validating the
//! cross-layer references before the graph is frozen.

mod builder;

pub use builder::MultimodalGraphBuilder;
