// Host-side integration tests for the particle trail animator.

use folio_core::*;
use glam::Vec2;

fn make_trail() -> TrailAnimator {
    let mut t = TrailAnimator::new(TrailConfig {
        seed: Some(42),
        ..TrailConfig::default()
    });
    t.resize(800.0, 600.0, 1.0);
    t
}

#[test]
fn pointer_move_adds_exactly_six_particles() {
    let mut t = make_trail();
    assert!(t.is_empty());
    t.on_pointer_move(10.0, 20.0);
    assert_eq!(t.len(), 6);
    t.on_pointer_move(11.0, 21.0);
    assert_eq!(t.len(), 12);
}

#[test]
fn pointer_move_accepts_any_coordinates() {
    let mut t = make_trail();
    t.on_pointer_move(-5000.0, f32::NAN);
    assert_eq!(t.len(), 6);
}

#[test]
fn one_move_then_one_frame_stays_within_velocity_bound() {
    let mut t = make_trail();
    let mut surface = RecordingSurface::new();
    t.on_pointer_move(100.0, 100.0);
    t.render_frame(&mut surface);
    assert_eq!(t.len(), 6);
    let spread = t.config().velocity_spread;
    for p in t.particles() {
        assert!((p.position.x - 100.0).abs() <= spread + 1e-4);
        assert!((p.position.y - 100.0).abs() <= spread + 1e-4);
    }
    assert_eq!(surface.circle_count(), 6);
}

#[test]
fn life_and_radius_strictly_decrease_each_frame() {
    let mut t = make_trail();
    let mut surface = RecordingSurface::new();
    t.on_pointer_move(50.0, 50.0);
    let decrement = t.config().life_decrement;
    let mut prev: Vec<Particle> = t.particles().to_vec();
    while !t.is_empty() {
        t.render_frame(&mut surface);
        for (before, after) in prev.iter().zip(t.particles()) {
            assert!((before.life - after.life - decrement).abs() < 1e-5);
            assert!(after.radius < before.radius);
        }
        prev = t.particles().to_vec();
    }
}

#[test]
fn no_particle_is_drawn_dead() {
    let mut t = make_trail();
    let mut surface = RecordingSurface::new();
    for frame in 0..200 {
        if frame % 3 == 0 && frame < 120 {
            t.on_pointer_move(frame as f32, frame as f32);
        }
        surface.reset();
        t.render_frame(&mut surface);
        assert!(t.particles().iter().all(|p| p.life > 0.0));
        for (_, radius, color) in surface.circles() {
            assert!(color.alpha > 0.0 && color.alpha <= 1.0);
            assert!(radius > 0.0);
        }
    }
}

#[test]
fn trail_empties_within_lifetime_bound() {
    let mut t = make_trail();
    let mut surface = RecordingSurface::new();
    t.on_pointer_move(300.0, 200.0);
    let bound = t.config().max_lifetime_frames();
    assert_eq!(bound, 84);
    let mut prev_len = t.len();
    for _ in 0..bound - 1 {
        t.render_frame(&mut surface);
        assert!(t.len() <= prev_len);
        prev_len = t.len();
    }
    assert_eq!(t.len(), 6, "particles live for the whole lifetime bound");
    t.render_frame(&mut surface);
    assert!(t.is_empty());
}

#[test]
fn hue_wraps_at_360() {
    let mut t = TrailAnimator::new(TrailConfig {
        hue_start: 359.9,
        seed: Some(1),
        ..TrailConfig::default()
    });
    t.step();
    assert!((t.hue() - 0.1).abs() < 1e-3, "hue was {}", t.hue());
}

#[test]
fn hue_stays_in_range_over_many_frames() {
    let mut t = make_trail();
    for _ in 0..10_000 {
        t.step();
        assert!((0.0..360.0).contains(&t.hue()));
    }
}

#[test]
fn empty_trail_draws_only_the_wash() {
    let mut t = make_trail();
    let mut surface = RecordingSurface::new();
    for _ in 0..100 {
        surface.reset();
        t.render_frame(&mut surface);
        assert!(t.is_empty());
        assert_eq!(surface.commands.len(), 2);
        assert!(matches!(surface.commands[0], DrawCommand::Clear(_)));
        match &surface.commands[1] {
            DrawCommand::Gradient { size, start, end } => {
                assert_eq!(*size, BackingSize::new(800, 600));
                assert_eq!(start.alpha, 0.08);
                let offset = (end.hue - start.hue).rem_euclid(360.0);
                assert!((offset - 60.0).abs() < 1e-3);
            }
            other => panic!("expected gradient, got {:?}", other),
        }
    }
}

#[test]
fn particles_use_complementary_hue_and_life_alpha() {
    let mut t = make_trail();
    let mut surface = RecordingSurface::new();
    t.on_pointer_move(10.0, 10.0);
    t.render_frame(&mut surface);
    let hue = t.hue();
    for ((center, radius, color), p) in surface.circles().zip(t.particles()) {
        assert_eq!(center, p.position);
        assert_eq!(radius, p.radius);
        assert_eq!(color.alpha, p.life);
        let offset = (color.hue - hue).rem_euclid(360.0);
        assert!((offset - 180.0).abs() < 1e-3);
        assert_eq!(color.saturation, 90.0);
        assert_eq!(color.lightness, 65.0);
    }
}

#[test]
fn resize_from_zero_to_800x600() {
    let mut t = TrailAnimator::new(TrailConfig {
        seed: Some(3),
        ..TrailConfig::default()
    });
    let mut surface = RecordingSurface::new();
    assert!(t.resize(0.0, 0.0, 2.0).is_empty());
    t.on_pointer_move(5.0, 5.0);
    t.render_frame(&mut surface);
    assert!(surface.commands.is_empty(), "zero-size surface renders blank");

    let size = t.resize(800.0, 600.0, 2.0);
    assert_eq!(size, BackingSize::new(1600, 1200));
    assert_eq!(t.backing_size(), size);
    t.render_frame(&mut surface);
    assert_eq!(surface.commands[0], DrawCommand::Clear(BackingSize::new(1600, 1200)));
    assert_eq!(surface.circle_count(), 6);
}

#[test]
fn same_seed_spawns_same_particles() {
    let mut a = make_trail();
    let mut b = make_trail();
    a.on_pointer_move(1.0, 2.0);
    b.on_pointer_move(1.0, 2.0);
    assert_eq!(a.particles(), b.particles());
    assert!(a.particles().iter().all(|p| p.position == Vec2::new(1.0, 2.0)));
}
