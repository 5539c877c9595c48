//! Controller layer: user-visible notices and routing of UI actions onto the navigation queue.

pub mod events;
pub mod orchestration;
