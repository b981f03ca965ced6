//! Pairwise disc collision detection and response
//!
//! Both tests work on the bodies' reference corners rather than their
//! centres. For equal radii the offsets cancel exactly; for unequal radii the
//! distance is an approximation of the true centre distance.

use glam::Vec2;

use super::body::Body;

/// Outcome of resolving a colliding pair
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Response {
    /// Bodies were approaching; `impulse` was subtracted from the first
    /// body's velocity and added to the second's
    Applied { impulse: Vec2 },
    /// Bodies were separating or moving tangentially; nothing changed
    Separating,
    /// Reference points coincide, so there is no collision normal; nothing changed
    Degenerate,
}

impl Response {
    pub fn applied(&self) -> bool {
        matches!(self, Response::Applied { .. })
    }
}

/// Check whether two bodies touch or overlap
///
/// The boundary is inclusive: bodies exactly `ra + rb` apart collide.
#[inline]
pub fn bodies_collide(a: &Body, b: &Body) -> bool {
    a.pos.distance(b.pos) <= a.radius() + b.radius()
}

/// Equal-mass elastic response along the collision normal
///
/// Only velocity is changed. Overlapping bodies that are already separating
/// are left alone, so they may stay visibly overlapped for a few ticks.
pub fn resolve_collision(a: &mut Body, b: &mut Body) -> Response {
    let offset = a.pos - b.pos;
    let distance = offset.length();
    if distance == 0.0 {
        log::trace!("Bodies {:?} and {:?} coincide, skipping response", a.id, b.id);
        return Response::Degenerate;
    }

    // Normal points from b to a
    let normal = offset / distance;
    let dot = (a.vel - b.vel).dot(normal);

    if dot < 0.0 {
        let impulse = normal * dot;
        a.vel -= impulse;
        b.vel += impulse;
        Response::Applied { impulse }
    } else {
        Response::Separating
    }
}
