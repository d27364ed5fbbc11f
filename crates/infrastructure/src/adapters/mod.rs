//! Outbound adapters implementing the application ports

mod readings_adapter;

pub use readings_adapter::RealtimeReadingsAdapter;
