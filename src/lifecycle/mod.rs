//! Process lifecycle management.
//!
//! Configuration is load-at-boot only, so the lifecycle surface is a
//! single graceful-shutdown coordinator.

pub mod shutdown;

pub use shutdown::Shutdown;
