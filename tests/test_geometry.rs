use rect_survival::entities::Body;
use rect_survival::geometry::*;

fn body(x: f64, y: f64, size: f64) -> Body {
    Body::at(x, y, size, size)
}

// ── distance / has_collided ───────────────────────────────────────────────────

#[test]
fn distance_is_euclidean() {
    assert_eq!(distance(&body(0.0, 0.0, 1.0), &body(3.0, 4.0, 1.0)), 5.0);
    assert_eq!(distance(&body(7.0, 7.0, 1.0), &body(7.0, 7.0, 1.0)), 0.0);
}

#[test]
fn has_collided_threshold_is_strict() {
    let a = body(100.0, 100.0, 20.0);
    assert!(has_collided(&a, &body(129.9, 100.0, 10.0)));
    assert!(!has_collided(&a, &body(130.0, 100.0, 10.0)));
}

#[test]
fn has_collided_ignores_size() {
    let a = body(100.0, 100.0, 20.0);
    // Boxes overlap heavily yet are 35 px apart centre to centre
    assert!(!has_collided(&a, &body(135.0, 100.0, 60.0)));
    assert!(has_collided(&a, &body(120.0, 100.0, 1.0)));
    assert!(has_collided(&a, &body(120.0, 100.0, 40.0)));
}

#[test]
fn has_collided_is_symmetric() {
    let points = [0.0, 12.5, 21.0, 29.99, 30.0, 44.0];
    for &dx in &points {
        for &dy in &points {
            let a = body(200.0, 200.0, 20.0);
            let b = body(200.0 + dx, 200.0 - dy, 10.0);
            assert_eq!(has_collided(&a, &b), has_collided(&b, &a), "dx={dx} dy={dy}");
        }
    }
}

// ── test_collision_entity ─────────────────────────────────────────────────────

#[test]
fn rect_overlap_includes_touching_edges() {
    let a = body(0.0, 0.0, 10.0);
    assert!(test_collision_entity(&a, &body(10.0, 0.0, 10.0)));
    assert!(test_collision_entity(&a, &body(10.0, 10.0, 10.0)));
    assert!(!test_collision_entity(&a, &body(10.01, 0.0, 10.0)));
}

#[test]
fn rect_overlap_uses_each_box_size() {
    let wide = Body::at(100.0, 100.0, 40.0, 4.0);
    assert!(test_collision_entity(&wide, &body(122.0, 100.0, 4.0)));
    assert!(!test_collision_entity(&wide, &body(100.0, 110.0, 4.0)));
}

#[test]
fn rect_of_is_centred() {
    let r = Rect::of(&Body::at(50.0, 60.0, 20.0, 10.0));
    assert_eq!(r, Rect { x: 40.0, y: 55.0, width: 20.0, height: 10.0 });
}

// ── update_position ───────────────────────────────────────────────────────────

#[test]
fn update_position_integrates_velocity() {
    let mut b = body(100.0, 100.0, 10.0).with_speed(5.0, -7.0);
    update_position(&mut b, 500.0, 500.0);
    assert_eq!((b.x, b.y), (105.0, 93.0));
    assert_eq!((b.speed_x, b.speed_y), (5.0, -7.0));
}

#[test]
fn update_position_reflects_breached_axis_only() {
    let mut b = body(3.0, 250.0, 10.0).with_speed(-5.0, 2.0);
    update_position(&mut b, 500.0, 500.0);
    assert_eq!(b.x, -2.0);
    assert_eq!(b.speed_x, 5.0);
    assert_eq!(b.speed_y, 2.0);
}

#[test]
fn update_position_reflects_on_exact_edge() {
    let mut b = body(495.0, 495.0, 10.0).with_speed(5.0, 5.0);
    update_position(&mut b, 500.0, 500.0);
    assert_eq!((b.x, b.y), (500.0, 500.0));
    assert_eq!((b.speed_x, b.speed_y), (-5.0, -5.0));
}

#[test]
fn reflection_preserves_speed_magnitude() {
    let xs = [-4.0, 0.0, 2.0, 250.0, 497.0, 500.0, 506.0];
    let speeds = [-9.5, -5.0, 0.0, 3.25, 7.0];
    for &x in &xs {
        for &y in &xs {
            for &sx in &speeds {
                for &sy in &speeds {
                    let mut b = body(x, y, 10.0).with_speed(sx, sy);
                    update_position(&mut b, 500.0, 500.0);
                    assert_eq!(b.speed_x.abs(), sx.abs());
                    assert_eq!(b.speed_y.abs(), sy.abs());
                }
            }
        }
    }
}

#[test]
fn bouncing_body_never_strays_more_than_one_step() {
    let mut b = body(250.0, 100.0, 10.0).with_speed(9.0, -7.0);
    for _ in 0..2_000 {
        update_position(&mut b, 500.0, 500.0);
        assert!(b.x >= -9.0 && b.x <= 509.0);
        assert!(b.y >= -7.0 && b.y <= 507.0);
    }
}

// ── clamping ──────────────────────────────────────────────────────────────────

#[test]
fn clamp_axis_bounds() {
    assert_eq!(clamp_axis(-5.0, 20.0, 500.0), 10.0);
    assert_eq!(clamp_axis(250.0, 20.0, 500.0), 250.0);
    assert_eq!(clamp_axis(1e9, 20.0, 500.0), 490.0);
    assert_eq!(clamp_axis(f64::NAN, 20.0, 500.0), 10.0);
}

#[test]
fn clamp_into_keeps_box_on_canvas() {
    let mut b = Body::at(600.0, -3.0, 20.0, 30.0);
    clamp_into(&mut b, 500.0, 400.0);
    assert_eq!((b.x, b.y), (490.0, 15.0));
}
