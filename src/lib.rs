/// Login state for a single terminal run. The only mutable state in the
/// whole simulation.
pub mod session;

/// Transaction codes and typed per-code requests, parsed from raw
/// positional arguments before anything is dispatched.
pub mod command;

/// The stateless handler set: one function per transaction, each writing a
/// narrative of the simulated action. Only withdrawal applies checks.
pub mod handlers;

/// One-line audit records for accepted transactions. Not wired in by
/// default; available for external wiring.
pub mod audit;

/// Terminal interface and the front end that owns the session, gates on
/// login state and routes requests to handlers.
pub mod terminal;

/// Script-driven bootstrap for the binary. Lives in the library so the
/// integration tests can reuse it.
pub mod bin_utils;
