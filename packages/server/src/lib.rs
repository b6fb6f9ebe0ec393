// Aero Job Monitor - server core
//
// Periodic scans of pilot-job sources producing one aggregate snapshot at a
// time, exposed over a small REST surface with optional Discord
// notification. The scan fan-out itself lives in the `scanner` crate; this
// crate owns configuration, the snapshot store, the run orchestrator, the
// scheduler and the HTTP surface.

pub mod config;
pub mod notify;
pub mod scan;
pub mod scheduler;
pub mod server;
pub mod store;

pub use config::*;
