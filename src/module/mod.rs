//! Host-facing module layer.
//!
//! A modular host owns a set of modules, each declaring its port counts
//! once at construction and then receiving one `process` call per audio
//! sample. This layer wraps the low-level DSP primitives with the plumbing
//! a host needs: voltage ports, a per-sample processing trait, and an
//! explicit registry for instantiating modules by slug.

/// The clock divider module (1 clock input, 4 divided outputs).
pub mod clock_divider;
/// Core traits shared by all modules.
pub mod node;
/// Voltage port banks.
pub mod ports;
/// Explicit module registry, no global registration state.
pub mod registry;

pub use clock_divider::ClockDividerModule;
pub use node::{ModuleConfig, ModuleNode, ProcessCtx};
pub use ports::PortIo;
pub use registry::{ModuleDescriptor, ModuleRegistry, RegistryError};
