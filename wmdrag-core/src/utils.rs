//! Geometry helpers and lookups used by the drag handlers.
pub mod edge_resistance;
pub mod modmask_lookup;
pub mod overlay;
pub mod resize_anchor;
