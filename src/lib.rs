//! Discrete-event simulation of elastic collisions among hard discs in
//! the unit box.
//!
//! Rather than stepping time on a fixed grid, [`CollisionSystem`] jumps
//! the simulated clock straight to the next physically meaningful event:
//! a disc-disc collision, a disc-wall collision, or a redraw tick that
//! hands a particle snapshot to an external render callback. Predictions
//! live in a min-heap [`EventQueue`] that supports O(1) unordered
//! insertion with deferred re-heapification, and each queued [`Event`]
//! carries collision-counter stamps so predictions stranded by a later
//! collision are discarded lazily on extraction instead of being hunted
//! down inside the heap.
//!
//! ```no_run
//! use collisim::{CollisionSystem, random_particles};
//!
//! # fn main() -> collisim::Result<()> {
//! let particles = random_particles(32, 0.02, 1.0, Some(42))?;
//! let mut system = CollisionSystem::new(particles)?;
//! system.simulate(
//!     100.0, // simulated-time horizon
//!     10.0,  // redraw ticks per time unit
//!     |particles| { /* hand off to a renderer */ let _ = particles; },
//!     || false, // abort check, polled once per tick
//! )?;
//! # Ok(())
//! # }
//! ```

pub mod core;
pub mod error;

pub use crate::core::{Color, CollisionSystem, Event, EventKind, EventQueue, Particle};
pub use crate::core::random_particles;
pub use crate::error::{Error, Result};
