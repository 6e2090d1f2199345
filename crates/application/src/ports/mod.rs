//! Port definitions for application layer
//!
//! Ports are interfaces that define how the application interacts with
//! external systems. Adapters in the infrastructure layer implement these ports.

mod archive_port;
mod observation_store_port;

#[cfg(test)]
pub use archive_port::MockArchivePort;
pub use archive_port::{ArchivePort, DailyMetrics};
#[cfg(test)]
pub use observation_store_port::MockObservationStorePort;
pub use observation_store_port::{ObservationStorePort, StoredObservation};
