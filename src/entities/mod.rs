//! Ready-made console configuration for the five school entities
//!
//! Each module pairs a record struct with its column set, dropdown filters
//! and import/export contracts, so a host wires a full admin screen from a
//! handful of calls. The structs mirror the backend's JSON shape; business
//! validation stays server-side.

pub mod diplomas;
pub mod formations;
pub mod modules;
pub mod professors;
pub mod students;
