/// Time-based scalars advanced by the driver.
pub mod clock;
/// Ordered draw stages and the per-frame composer.
pub mod composer;
/// Pursuer and particle factories.
pub mod entities;
/// Scene metadata shown by the presentation shell.
pub mod info;
/// Frame state owned by the driver and its per-tick step.
pub mod state;
