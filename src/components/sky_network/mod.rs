mod component;
pub mod geometry;
mod render;
mod state;
mod types;

pub use component::SkyNetwork;
pub use types::{NetworkData, NetworkEdge, NetworkNode};
