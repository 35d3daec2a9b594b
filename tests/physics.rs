use approx::assert_relative_eq;
use collisim::{Color, Particle};
use glam::DVec2;

fn disc(id: u32, pos: (f64, f64), vel: (f64, f64), radius: f64, mass: f64) -> Particle {
    Particle::new(
        id,
        DVec2::new(pos.0, pos.1),
        DVec2::new(vel.0, vel.1),
        radius,
        mass,
        Color::WHITE,
    )
    .unwrap()
}

/// A disc with velocity (v, 0) and radius r approaching x=1 reaches the
/// wall after exactly (1 - r - x)/v; the bounce negates the x velocity
/// and bumps the collision counter by exactly 1.
#[test]
fn wall_reflection_is_exact() {
    let mut p = disc(0, (0.2, 0.5), (0.5, 0.0), 0.05, 1.0);
    assert_relative_eq!(
        p.time_to_hit_vertical_wall(),
        (1.0 - 0.05 - 0.2) / 0.5,
        max_relative = 1e-15
    );

    p.drift(p.time_to_hit_vertical_wall());
    p.bounce_off_vertical_wall();
    assert_relative_eq!(p.vel.x, -0.5, max_relative = 1e-15);
    assert_relative_eq!(p.vel.y, 0.0);
    assert_eq!(p.count(), 1);
}

/// Two identical discs of radius r approaching head-on at (v, 0) and
/// (-v, 0), with edges separated by d, touch after d / (2v); equal masses
/// make the bounce an exact exchange of velocities along the line of
/// centers.
#[test]
fn symmetric_head_on_collision() {
    let r = 0.05;
    let v = 0.1;
    let d = 0.3; // edge-to-edge approach distance: centers 2r + d apart
    let mut a = disc(0, (0.3, 0.5), (v, 0.0), r, 1.0);
    let mut b = disc(1, (0.3 + 2.0 * r + d, 0.5), (-v, 0.0), r, 1.0);

    let t = a.time_to_hit(&b);
    assert_relative_eq!(t, d / (2.0 * v), max_relative = 1e-12);

    a.drift(t);
    b.drift(t);
    a.bounce_off(&mut b);
    assert_relative_eq!(a.vel.x, -v, max_relative = 1e-12);
    assert_relative_eq!(b.vel.x, v, max_relative = 1e-12);
    assert_eq!(a.count(), 1);
    assert_eq!(b.count(), 1);
}

/// A single elastic bounce between a well-separated two-body setup keeps
/// the summed kinetic energy unchanged to floating-point tolerance, for
/// unequal masses and an oblique contact line.
#[test]
fn single_bounce_conserves_kinetic_energy() {
    let mut a = disc(0, (0.40, 0.40), (0.25, 0.10), 0.06, 3.0);
    // Touching along a 3-4-5 direction: centers 0.1 apart, radii sum 0.1.
    let mut b = disc(1, (0.46, 0.48), (-0.15, -0.20), 0.04, 0.7);

    let before = a.kinetic_energy() + b.kinetic_energy();
    a.bounce_off(&mut b);
    let after = a.kinetic_energy() + b.kinetic_energy();
    assert_relative_eq!(before, after, max_relative = 1e-12);
}
