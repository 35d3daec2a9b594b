use approx::assert_relative_eq;
use collisim::{Color, CollisionSystem, Particle, random_particles};
use glam::DVec2;

fn disc(id: u32, pos: (f64, f64), vel: (f64, f64)) -> Particle {
    Particle::new(
        id,
        DVec2::new(pos.0, pos.1),
        DVec2::new(vel.0, vel.1),
        0.05,
        1.0,
        Color::WHITE,
    )
    .unwrap()
}

/// Total kinetic energy is conserved across a long run full of disc-disc
/// and wall collisions, within a tight floating-point tolerance.
#[test]
fn energy_conservation_over_full_run() -> collisim::Result<()> {
    let particles = random_particles(48, 0.02, 1.0, Some(12345))?;
    let mut system = CollisionSystem::new(particles)?;
    let e0 = system.kinetic_energy();

    system.simulate(50.0, 5.0, |_| {}, || false)?;

    let e1 = system.kinetic_energy();
    let rel = ((e1 - e0) / e0).abs();
    assert!(
        rel < 1e-8,
        "relative energy drift {rel} too large (E0={e0}, E1={e1})"
    );
    assert!(system.time() > 0.0);
    Ok(())
}

/// Redraw ticks fire at t = 0, 1/f, 2/f, ... and stop at the horizon:
/// a horizon of 1.0 at 2 ticks per unit yields exactly the ticks at 0
/// and 0.5, each followed by one abort poll, and the run then terminates
/// with an empty queue (the single particle never reaches a wall).
#[test]
fn tick_schedule_and_empty_queue_termination() -> collisim::Result<()> {
    let mut system = CollisionSystem::new(vec![disc(0, (0.5, 0.5), (0.0, 0.0))])?;
    let mut renders = 0usize;
    let mut polls = 0usize;

    system.simulate(
        1.0,
        2.0,
        |_| renders += 1,
        || {
            polls += 1;
            false
        },
    )?;

    assert_eq!(renders, 2);
    assert_eq!(polls, 2);
    Ok(())
}

/// The render callback observes particles already advanced to each
/// tick's time, so a ballistic particle's rendered positions advance
/// strictly monotonically with the clock.
#[test]
fn render_sees_positions_consistent_with_tick_times() -> collisim::Result<()> {
    let mut system = CollisionSystem::new(vec![disc(0, (0.4, 0.5), (0.1, 0.0))])?;
    let mut xs = Vec::new();

    system.simulate(1.0, 2.0, |ps| xs.push(ps[0].pos.x), || false)?;

    assert_eq!(xs.len(), 2);
    assert_relative_eq!(xs[0], 0.4, max_relative = 1e-12);
    assert_relative_eq!(xs[1], 0.45, max_relative = 1e-12);
    assert!(xs.windows(2).all(|w| w[0] < w[1]));
    Ok(())
}

/// Abort is polled once per tick, after that tick's render has run;
/// signalling on the first poll ends the run after exactly one render
/// even with a long horizon ahead.
#[test]
fn abort_terminates_after_current_tick() -> collisim::Result<()> {
    let particles = random_particles(8, 0.03, 1.0, Some(99))?;
    let mut system = CollisionSystem::new(particles)?;
    let mut renders = 0usize;

    system.simulate(1_000.0, 1.0, |_| renders += 1, || true)?;

    assert_eq!(renders, 1);
    assert_relative_eq!(system.time(), 0.0);
    Ok(())
}

/// Two head-on discs must realize their collision: counters advance once
/// the t = 1.5 contact is processed. A particle set whose ids do not
/// match their indices would make the pair prediction treat the discs as
/// one and silently skip the contact, so construction rejects it.
#[test]
fn head_on_pair_collides_and_mismatched_ids_are_rejected() -> collisim::Result<()> {
    let mut system = CollisionSystem::new(vec![
        disc(0, (0.3, 0.5), (0.1, 0.0)),
        disc(1, (0.7, 0.5), (-0.1, 0.0)),
    ])?;
    system.simulate(3.0, 1.0, |_| {}, || false)?;
    assert_eq!(system.particles()[0].count(), 1);
    assert_eq!(system.particles()[1].count(), 1);
    assert_relative_eq!(system.particles()[0].vel.x, -0.1, max_relative = 1e-12);
    assert_relative_eq!(system.particles()[1].vel.x, 0.1, max_relative = 1e-12);

    let duplicated = vec![
        disc(0, (0.3, 0.5), (0.1, 0.0)),
        disc(0, (0.7, 0.5), (-0.1, 0.0)),
    ];
    assert!(CollisionSystem::new(duplicated).is_err());
    Ok(())
}

/// Newton's-cradle style chain in one dimension, checked against hand
/// computation. The moving disc stops dead against an equal-mass
/// stationary one, which reflects off the right wall and hands the
/// momentum back. Exact collision counters double as the invalidation
/// check: the mover's original wall prediction (t = 3.75) is stranded by
/// the t = 1.5 collision, and acting on it would bump a counter.
#[test]
fn billiard_chain_matches_hand_computation() -> collisim::Result<()> {
    let mut system = CollisionSystem::new(vec![
        disc(0, (0.2, 0.5), (0.2, 0.0)),
        disc(1, (0.6, 0.5), (0.0, 0.0)),
    ])?;

    // Collisions: pair at t=1.5, wall at t=3.25, pair again at t=5.0.
    // The next wall hit (t=7.25) lies beyond the horizon.
    system.simulate(6.0, 1.0, |_| {}, || false)?;

    let p0 = &system.particles()[0];
    let p1 = &system.particles()[1];
    assert_relative_eq!(p0.pos.x, 0.5, max_relative = 1e-12);
    assert_relative_eq!(p0.vel.x, -0.2, max_relative = 1e-12);
    assert_relative_eq!(p1.pos.x, 0.6, max_relative = 1e-12);
    assert_relative_eq!(p1.vel.x, 0.0, epsilon = 1e-12);
    assert_eq!(p0.count(), 2);
    assert_eq!(p1.count(), 3);
    assert_relative_eq!(system.time(), 5.0, max_relative = 1e-12);
    Ok(())
}

/// The clock only moves forward: sampled across several short runs on
/// the same system, time is non-decreasing and positions stay inside
/// the box.
#[test]
fn clock_is_monotone_across_runs() -> collisim::Result<()> {
    let particles = random_particles(16, 0.03, 1.0, Some(2024))?;
    let mut system = CollisionSystem::new(particles)?;

    let mut last = system.time();
    for _ in 0..4 {
        system.simulate(2.0, 4.0, |_| {}, || false)?;
        assert!(system.time() >= last);
        last = system.time();
        for p in system.particles() {
            assert!(p.pos.x >= p.radius - 1e-9 && p.pos.x <= 1.0 - p.radius + 1e-9);
            assert!(p.pos.y >= p.radius - 1e-9 && p.pos.y <= 1.0 - p.radius + 1e-9);
        }
    }
    Ok(())
}
