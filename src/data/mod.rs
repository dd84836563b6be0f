//! Static site content: keyword taxonomy, network layout input, and the
//! project/publication records.

pub mod items;
pub mod keywords;
pub mod network;
