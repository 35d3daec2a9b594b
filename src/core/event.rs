use std::cmp::Ordering;

use ordered_float::NotNan;

use crate::core::Particle;
use crate::error::{Error, Result};

/// The four kinds of events the simulation schedules.
///
/// Participants are stable indices into the system's particle sequence.
/// A pair event always carries `a < b` so each pair has one canonical
/// representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    /// Collision between particles `a` and `b`.
    Pair { a: u32, b: u32 },
    /// Particle `i` reaches a vertical wall (x = 0 or x = 1).
    VerticalWall { i: u32 },
    /// Particle `i` reaches a horizontal wall (y = 0 or y = 1).
    HorizontalWall { i: u32 },
    /// Render/abort tick; involves no particles and is always valid.
    Redraw,
}

impl EventKind {
    /// Key used to break ties between events scheduled at the same time:
    /// pair collisions first, then walls, then redraw ticks.
    #[inline]
    fn order_key(&self) -> (u8, u32, u32) {
        match *self {
            EventKind::Pair { a, b } => (0, a, b),
            EventKind::VerticalWall { i } => (1, i, 0),
            EventKind::HorizontalWall { i } => (2, i, 0),
            EventKind::Redraw => (3, 0, 0),
        }
    }
}

/// A predicted occurrence at a future simulated time.
///
/// Each referenced particle's collision counter is captured at creation
/// as a validity stamp. When any of those particles collides later, the
/// counter moves on and every still-queued event that referenced it
/// becomes stale; [`Event::is_valid`] detects this on extraction, which
/// is far cheaper than hunting stale entries down inside the heap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Event {
    time: NotNan<f64>,
    kind: EventKind,
    stamp_a: Option<u64>,
    stamp_b: Option<u64>,
}

impl Event {
    /// Create an event at absolute time `time`, stamping the current
    /// collision counters of the particles its kind references.
    ///
    /// Errors with [`Error::MathError`] on a NaN time (the caller is
    /// expected to have filtered infinite prediction times already) and
    /// with [`Error::InvalidParam`] if the kind references a particle
    /// index outside `particles`.
    pub fn new(time: f64, kind: EventKind, particles: &[Particle]) -> Result<Self> {
        let time = NotNan::new(time)
            .map_err(|_| Error::MathError("event time cannot be NaN".into()))?;
        let stamp = |i: u32| -> Result<u64> {
            particles.get(i as usize).map(|p| p.count()).ok_or_else(|| {
                Error::InvalidParam(format!(
                    "event references particle {i} out of range (have {})",
                    particles.len()
                ))
            })
        };
        let (stamp_a, stamp_b) = match kind {
            EventKind::Pair { a, b } => (Some(stamp(a)?), Some(stamp(b)?)),
            EventKind::VerticalWall { i } | EventKind::HorizontalWall { i } => {
                (Some(stamp(i)?), None)
            }
            EventKind::Redraw => (None, None),
        };
        Ok(Self {
            time,
            kind,
            stamp_a,
            stamp_b,
        })
    }

    /// Scheduled absolute time.
    #[inline]
    pub fn time(&self) -> f64 {
        self.time.into_inner()
    }

    /// Which particles, if any, this event involves.
    #[inline]
    pub fn kind(&self) -> EventKind {
        self.kind
    }

    /// True iff no referenced particle has collided since this event was
    /// stamped. Redraw ticks reference no particles and are always valid.
    pub fn is_valid(&self, particles: &[Particle]) -> bool {
        let current = |i: u32| particles[i as usize].count();
        match self.kind {
            EventKind::Pair { a, b } => {
                self.stamp_a == Some(current(a)) && self.stamp_b == Some(current(b))
            }
            EventKind::VerticalWall { i } | EventKind::HorizontalWall { i } => {
                self.stamp_a == Some(current(i))
            }
            EventKind::Redraw => true,
        }
    }
}

impl Ord for Event {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.time.cmp(&other.time) {
            Ordering::Equal => self.kind.order_key().cmp(&other.kind.order_key()),
            o => o,
        }
    }
}

impl PartialOrd for Event {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
