//! Use-Cases der Application-Layer-Orchestrierung.

pub mod destination;
pub mod interaction;
pub mod map_provider;
pub mod picking;
pub mod remote_sync;
pub mod search;
pub mod spots;
pub mod viewport;
