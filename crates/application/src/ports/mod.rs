//! Port definitions for application layer
//!
//! Ports are interfaces that define how the application interacts with
//! external systems. Adapters in the infrastructure layer implement these
//! ports.

mod presenter_port;
mod readings_port;

#[cfg(test)]
pub use presenter_port::MockPresenterPort;
pub use presenter_port::PresenterPort;
#[cfg(test)]
pub use readings_port::MockReadingsPort;
pub use readings_port::ReadingsPort;
