/// The running/stopped animation state machine.
pub mod animation;
/// Fixed-cadence frame delivery for headless runs.
pub mod headless;
/// Canvas sizing from container width and device pixel ratio.
pub mod layout;
/// Frame callback and viewport hooks provided by the host.
pub mod platform;
