/// Distance, overlap and boundary helpers.  Pure.

use crate::config::COLLISION_RADIUS;
use crate::entities::Body;

/// Axis-aligned rectangle given by its top-left corner.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// Bounding box of a body, centred on its position.
    pub fn of(body: &Body) -> Self {
        Rect {
            x: body.x - body.width / 2.0,
            y: body.y - body.height / 2.0,
            width: body.width,
            height: body.height,
        }
    }

    /// Touching edges count as overlap.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x <= other.x + other.width
            && other.x <= self.x + self.width
            && self.y <= other.y + other.height
            && other.y <= self.y + self.height
    }
}

/// Euclidean distance between two centres.
pub fn distance(a: &Body, b: &Body) -> f64 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    (dx * dx + dy * dy).sqrt()
}

/// Proximity test used for every player contact.  Ignores box sizes.
pub fn has_collided(a: &Body, b: &Body) -> bool {
    distance(a, b) < COLLISION_RADIUS
}

/// Rect-accurate test used for bullet ↔ enemy hits.
pub fn test_collision_entity(a: &Body, b: &Body) -> bool {
    Rect::of(a).overlaps(&Rect::of(b))
}

/// Advance one step, then flip any velocity component whose axis has reached or
/// passed the canvas edge.  The flip takes effect next step, so a body may sit up
/// to one step outside the canvas for a tick.
pub fn update_position(body: &mut Body, canvas_width: f64, canvas_height: f64) {
    body.x += body.speed_x;
    body.y += body.speed_y;

    if body.x <= 0.0 || body.x >= canvas_width {
        body.speed_x = -body.speed_x;
    }
    if body.y <= 0.0 || body.y >= canvas_height {
        body.speed_y = -body.speed_y;
    }
}

/// Clamp a centre coordinate so a box of `extent` stays inside `[0, limit]`.
pub fn clamp_axis(value: f64, extent: f64, limit: f64) -> f64 {
    let lo = extent / 2.0;
    let hi = (limit - extent / 2.0).max(lo);
    if value.is_nan() {
        return lo;
    }
    value.clamp(lo, hi)
}

/// Keep a body's whole box inside the canvas.
pub fn clamp_into(body: &mut Body, canvas_width: f64, canvas_height: f64) {
    body.x = clamp_axis(body.x, body.width, canvas_width);
    body.y = clamp_axis(body.y, body.height, canvas_height);
}
