use glam::DVec2;

use crate::error::{Error, Result};

/// RGB color carried along for the renderer; opaque to the physics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const WHITE: Color = Color {
        r: 1.0,
        g: 1.0,
        b: 1.0,
    };
}

impl Default for Color {
    fn default() -> Self {
        Color::WHITE
    }
}

/// A hard disc moving in the unit box `[0, 1] x [0, 1]`.
///
/// Provides straight-line motion, closed-form collision-time predictions
/// against other discs and the box walls, and the elastic-collision
/// velocity updates. Mutable because position, velocity and the collision
/// counter change during a run; radius and mass never do.
///
/// Fields:
/// - `id`: stable index into the owning particle sequence
/// - `pos`, `vel`: position and velocity
/// - `radius`, `mass`: disc geometry and inertia (> 0)
/// - `color`: cosmetic, passed through to the render callback
/// - `count`: number of collisions this particle has participated in,
///   including wall collisions (used for event invalidation)
#[derive(Debug, Clone)]
pub struct Particle {
    pub id: u32,
    pub pos: DVec2,
    pub vel: DVec2,
    pub radius: f64,
    pub mass: f64,
    pub color: Color,
    count: u64,
}

impl Particle {
    /// Create a new particle after validating invariants.
    ///
    /// Errors with [`Error::InvalidParam`] if `radius` or `mass` is
    /// non-positive or any component is NaN/infinite.
    pub fn new(id: u32, pos: DVec2, vel: DVec2, radius: f64, mass: f64, color: Color) -> Result<Self> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(Error::InvalidParam("radius must be finite and > 0".into()));
        }
        if !mass.is_finite() || mass <= 0.0 {
            return Err(Error::InvalidParam("mass must be finite and > 0".into()));
        }
        if !pos.is_finite() {
            return Err(Error::InvalidParam("position must be finite".into()));
        }
        if !vel.is_finite() {
            return Err(Error::InvalidParam("velocity must be finite".into()));
        }
        Ok(Self {
            id,
            pos,
            vel,
            radius,
            mass,
            color,
            count: 0,
        })
    }

    /// Number of collisions this particle has undergone so far.
    #[inline]
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Move in a straight line for `dt` time units. The caller guarantees
    /// `dt >= 0` in normal operation (it is always the gap between the
    /// next event time and the current clock).
    #[inline]
    pub fn drift(&mut self, dt: f64) {
        self.pos += self.vel * dt;
    }

    /// Time until this particle first touches `other`, or `f64::INFINITY`
    /// if they never do.
    ///
    /// Infinity covers every degenerate case: the same particle, motion
    /// apart or parallel (`dv . dr >= 0`), zero relative speed, centers
    /// already closer than the contact distance (treated as non-colliding
    /// so an overlapping pair cannot re-fire forever), and a quadratic
    /// with no real or no non-negative root.
    pub fn time_to_hit(&self, other: &Particle) -> f64 {
        if self.id == other.id {
            return f64::INFINITY;
        }

        let dr = other.pos - self.pos;
        let dv = other.vel - self.vel;

        let dvdr = dv.dot(dr);
        if dvdr >= 0.0 {
            return f64::INFINITY;
        }

        let dvdv = dv.dot(dv);
        if dvdv == 0.0 {
            return f64::INFINITY;
        }

        let drdr = dr.dot(dr);
        let sigma = self.radius + other.radius;
        if drdr < sigma * sigma {
            return f64::INFINITY;
        }

        let disc = dvdr * dvdr - dvdv * (drdr - sigma * sigma);
        if disc < 0.0 {
            return f64::INFINITY;
        }

        let t = -(dvdr + disc.sqrt()) / dvdv;
        if t < 0.0 {
            return f64::INFINITY;
        }
        t
    }

    /// Time until the disc's edge reaches the wall at x=0 or x=1, given
    /// the sign of the x velocity; `f64::INFINITY` iff that component is
    /// exactly zero.
    pub fn time_to_hit_vertical_wall(&self) -> f64 {
        if self.vel.x > 0.0 {
            (1.0 - self.pos.x - self.radius) / self.vel.x
        } else if self.vel.x < 0.0 {
            (self.radius - self.pos.x) / self.vel.x
        } else {
            f64::INFINITY
        }
    }

    /// Time until the disc's edge reaches the wall at y=0 or y=1.
    pub fn time_to_hit_horizontal_wall(&self) -> f64 {
        if self.vel.y > 0.0 {
            (1.0 - self.pos.y - self.radius) / self.vel.y
        } else if self.vel.y < 0.0 {
            (self.radius - self.pos.y) / self.vel.y
        } else {
            f64::INFINITY
        }
    }

    /// Elastic collision response for both particles: impulse along the
    /// line of centers, computed from relative velocity, relative position
    /// and the two masses. Bumps both collision counters.
    ///
    /// Precondition (not re-validated): the particles are touching at
    /// this instant, i.e. `|other.pos - self.pos| == radius sum`.
    pub fn bounce_off(&mut self, other: &mut Particle) {
        let dr = other.pos - self.pos;
        let dv = other.vel - self.vel;
        let dvdr = dv.dot(dr);
        let dist = self.radius + other.radius;

        // magnitude of the normal impulse
        let magnitude = 2.0 * self.mass * other.mass * dvdr / ((self.mass + other.mass) * dist);
        let impulse = dr * (magnitude / dist);

        self.vel += impulse / self.mass;
        other.vel -= impulse / other.mass;

        self.count = self.count.saturating_add(1);
        other.count = other.count.saturating_add(1);
    }

    /// Reflect off a vertical wall by negating the x velocity; bumps the
    /// collision counter. Assumes the disc is touching the wall now.
    pub fn bounce_off_vertical_wall(&mut self) {
        self.vel.x = -self.vel.x;
        self.count = self.count.saturating_add(1);
    }

    /// Reflect off a horizontal wall by negating the y velocity.
    pub fn bounce_off_horizontal_wall(&mut self) {
        self.vel.y = -self.vel.y;
        self.count = self.count.saturating_add(1);
    }

    /// Kinetic energy `1/2 m |v|^2`.
    #[inline]
    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.mass * self.vel.length_squared()
    }
}
