use glam::DVec2;
use rand::{Rng, SeedableRng, rng, rngs::StdRng};

use crate::core::Particle;
use crate::core::particle::Color;
use crate::error::{Error, Result};

/// Upper bound on rejection-sampling attempts per particle before the
/// configuration is declared too dense.
const MAX_PLACEMENT_ATTEMPTS: usize = 1_000_000;

/// Place `n` non-overlapping discs of identical `radius` and `mass`
/// uniformly in the unit box, with per-component velocities uniform in
/// [-1, 1].
///
/// Positions are rejection-sampled from `[radius, 1 - radius]^2` so no
/// disc starts overlapping a wall or another disc. Pass a `seed` for a
/// reproducible configuration; `None` draws one from the thread RNG.
///
/// Errors with [`Error::InvalidParam`] on invalid parameters or when a
/// disc cannot be placed without overlap (too many or too large).
pub fn random_particles(n: usize, radius: f64, mass: f64, seed: Option<u64>) -> Result<Vec<Particle>> {
    if n == 0 {
        return Err(Error::InvalidParam("n must be > 0".into()));
    }
    if !radius.is_finite() || radius <= 0.0 || radius >= 0.5 {
        return Err(Error::InvalidParam(
            "radius must satisfy 0 < radius < 0.5 to fit the unit box".into(),
        ));
    }
    if !mass.is_finite() || mass <= 0.0 {
        return Err(Error::InvalidParam("mass must be finite and > 0".into()));
    }

    let mut rng: StdRng = match seed {
        Some(s) => SeedableRng::seed_from_u64(s),
        None => SeedableRng::seed_from_u64(rng().random()),
    };

    let mut particles: Vec<Particle> = Vec::with_capacity(n);
    for id in 0..(n as u32) {
        let mut attempts = 0usize;
        let pos = loop {
            if attempts >= MAX_PLACEMENT_ATTEMPTS {
                return Err(Error::InvalidParam(format!(
                    "failed to place particle {id} without overlap; try fewer particles or a smaller radius"
                )));
            }
            attempts += 1;
            let candidate = DVec2::new(
                rng.random_range(radius..=1.0 - radius),
                rng.random_range(radius..=1.0 - radius),
            );
            if !overlaps_existing(&particles, candidate, radius) {
                break candidate;
            }
        };

        let vel = DVec2::new(rng.random_range(-1.0..=1.0), rng.random_range(-1.0..=1.0));
        particles.push(Particle::new(id, pos, vel, radius, mass, Color::WHITE)?);
    }

    Ok(particles)
}

fn overlaps_existing(existing: &[Particle], pos: DVec2, radius: f64) -> bool {
    let min_sq = (2.0 * radius) * (2.0 * radius);
    existing
        .iter()
        .any(|p| (pos - p.pos).length_squared() < min_sq)
}
