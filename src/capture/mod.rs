/// Published clip artifacts and their stores.
pub mod artifact;
/// Start/stop recording with a one-shot timer.
pub mod controller;
