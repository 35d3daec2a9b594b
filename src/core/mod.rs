//! Core data structures of the event-driven collision simulator.
//!
//! Leaves first: [`Particle`] knows the closed-form collision physics,
//! [`Event`] is a stamped prediction, [`EventQueue`] orders predictions
//! by time with lazy re-heapification, and [`CollisionSystem`] drives
//! the loop over all of them.

pub mod event;
pub mod particle;
pub mod queue;
pub mod source;
pub mod system;

pub use event::{Event, EventKind};
pub use particle::{Color, Particle};
pub use queue::EventQueue;
pub use source::random_particles;
pub use system::CollisionSystem;
