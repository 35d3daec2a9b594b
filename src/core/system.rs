use crate::core::{Event, EventKind, EventQueue, Particle};
use crate::error::{Error, Result};

/// Event-driven simulation of elastic collisions among hard discs in the
/// unit box.
///
/// Instead of stepping time on a fixed grid, the system predicts when
/// each particle will next hit something, keeps the predictions in a
/// minimum-time priority queue, and jumps the clock straight to the next
/// event. Each realized collision invalidates every queued prediction
/// that involved the colliding particles; those are discarded lazily on
/// extraction via the collision-counter stamps the events carry.
///
/// Owns the particle sequence for the whole run: particles are never
/// added or removed, only mutated in place, so events can reference them
/// by stable index.
#[derive(Debug)]
pub struct CollisionSystem {
    particles: Vec<Particle>,
    clock: f64,
}

impl CollisionSystem {
    /// Create a system over the given particles. The sequence must be
    /// non-empty and each particle's `id` must equal its index in the
    /// sequence: events reference particles by that index, and the
    /// self-collision check in `time_to_hit` compares ids. Where the
    /// particles come from (file, generator, hardcoded) is the caller's
    /// business.
    pub fn new(particles: Vec<Particle>) -> Result<Self> {
        if particles.is_empty() {
            return Err(Error::InvalidParam(
                "particle sequence must be non-empty".into(),
            ));
        }
        for (i, p) in particles.iter().enumerate() {
            if p.id != i as u32 {
                return Err(Error::InvalidParam(format!(
                    "particle at index {i} has id {}; ids must equal their index",
                    p.id
                )));
            }
        }
        Ok(Self {
            particles,
            clock: 0.0,
        })
    }

    /// Current simulated time. Starts at 0 and never decreases; particle
    /// positions always correspond exactly to this value.
    #[inline]
    pub fn time(&self) -> f64 {
        self.clock
    }

    /// All particles at the current clock.
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn num_particles(&self) -> usize {
        self.particles.len()
    }

    /// Total kinetic energy of the system. Elastic collisions conserve
    /// it exactly, so this is the standard correctness oracle.
    pub fn kinetic_energy(&self) -> f64 {
        self.particles.iter().map(|p| p.kinetic_energy()).sum()
    }

    /// Run the event loop until `horizon` simulated time units are
    /// exhausted or `abort` signals.
    ///
    /// `render` is invoked with the particle snapshot once per redraw
    /// tick, `redraws_per_unit` times per simulated time unit, with all
    /// particles already advanced to the tick's time. `abort` is polled
    /// right after each render; returning true ends the run immediately,
    /// so cancellation latency is bounded by the tick interval, not by
    /// physics event density.
    ///
    /// Predictions at or beyond `horizon` are never enqueued, so the
    /// queue drains and the loop terminates once nothing is left to
    /// happen before the horizon.
    pub fn simulate<R, A>(
        &mut self,
        horizon: f64,
        redraws_per_unit: f64,
        mut render: R,
        mut abort: A,
    ) -> Result<()>
    where
        R: FnMut(&[Particle]),
        A: FnMut() -> bool,
    {
        if !horizon.is_finite() || horizon <= 0.0 {
            return Err(Error::InvalidParam("horizon must be finite and > 0".into()));
        }
        if !redraws_per_unit.is_finite() || redraws_per_unit <= 0.0 {
            return Err(Error::InvalidParam(
                "redraws_per_unit must be finite and > 0".into(),
            ));
        }

        let n = self.particles.len();
        let mut queue = EventQueue::with_capacity(n * n);

        // Seed: the first redraw tick, then every particle's predictions.
        toss_before(&mut queue, self.clock, EventKind::Redraw, &self.particles, horizon)?;
        for i in 0..n {
            self.predict(i, self.clock, horizon, &mut queue)?;
        }

        while let Some(event) = queue.delete_min() {
            // Stale predictions are expected and frequent: every collision
            // a particle undergoes strands all its older queue entries.
            if !event.is_valid(&self.particles) {
                continue;
            }

            // Advance the whole system in a straight line to the event.
            let dt = event.time() - self.clock;
            for p in &mut self.particles {
                p.drift(dt);
            }
            self.clock = event.time();

            match event.kind() {
                EventKind::Pair { a, b } => {
                    let (pa, pb) = pair_mut(&mut self.particles, a as usize, b as usize);
                    pa.bounce_off(pb);
                    self.predict(a as usize, self.clock, horizon, &mut queue)?;
                    self.predict(b as usize, self.clock, horizon, &mut queue)?;
                }
                EventKind::VerticalWall { i } => {
                    self.particles[i as usize].bounce_off_vertical_wall();
                    self.predict(i as usize, self.clock, horizon, &mut queue)?;
                }
                EventKind::HorizontalWall { i } => {
                    self.particles[i as usize].bounce_off_horizontal_wall();
                    self.predict(i as usize, self.clock, horizon, &mut queue)?;
                }
                EventKind::Redraw => {
                    render(&self.particles);
                    toss_before(
                        &mut queue,
                        self.clock + redraws_per_unit.recip(),
                        EventKind::Redraw,
                        &self.particles,
                        horizon,
                    )?;
                    if abort() {
                        break;
                    }
                }
            }
        }

        Ok(())
    }

    /// Re-predict everything particle `i` can hit: every other particle
    /// and both wall orientations. Finite predictions strictly below the
    /// horizon are stamped and tossed; the queue defers re-ordering to
    /// the next extraction, which suits these bursty insertions.
    fn predict(
        &self,
        i: usize,
        now: f64,
        horizon: f64,
        queue: &mut EventQueue<Event>,
    ) -> Result<()> {
        let p = &self.particles[i];

        for (j, other) in self.particles.iter().enumerate() {
            // Self-pairing falls out naturally: time_to_hit(self) is
            // infinite and never beats the horizon.
            let dt = p.time_to_hit(other);
            let (a, b) = if i < j { (i, j) } else { (j, i) };
            let kind = EventKind::Pair {
                a: a as u32,
                b: b as u32,
            };
            toss_before(queue, now + dt, kind, &self.particles, horizon)?;
        }

        let kind = EventKind::VerticalWall { i: i as u32 };
        toss_before(
            queue,
            now + p.time_to_hit_vertical_wall(),
            kind,
            &self.particles,
            horizon,
        )?;

        let kind = EventKind::HorizontalWall { i: i as u32 };
        toss_before(
            queue,
            now + p.time_to_hit_horizontal_wall(),
            kind,
            &self.particles,
            horizon,
        )?;

        Ok(())
    }
}

/// Toss a freshly stamped event unless it falls at or beyond the horizon.
/// Infinite prediction times never pass the comparison, so no-collision
/// sentinels are silently excluded here.
fn toss_before(
    queue: &mut EventQueue<Event>,
    time: f64,
    kind: EventKind,
    particles: &[Particle],
    horizon: f64,
) -> Result<()> {
    if time < horizon {
        queue.toss(Event::new(time, kind, particles)?);
    }
    Ok(())
}

/// Disjoint mutable borrows of two particles, `a < b`.
fn pair_mut(particles: &mut [Particle], a: usize, b: usize) -> (&mut Particle, &mut Particle) {
    debug_assert!(a < b);
    let (lo, hi) = particles.split_at_mut(b);
    (&mut lo[a], &mut hi[0])
}
