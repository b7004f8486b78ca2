//! Data types: particle records, the neighbor table, the read-only store,
//! and the derived render state.

pub mod particle;
pub mod render;
pub mod store;
