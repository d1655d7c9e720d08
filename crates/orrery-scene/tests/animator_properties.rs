//! Scene behavior observed through the public API.

use glam::{Mat4, Vec3};
use orrery_config::Config;
use orrery_input::{FrameInput, InputEvent, InputQueue, KeyMap, SceneAction, SliderChannel};
use orrery_scene::{ColorDrift, DistanceWalk, Scene, UniformValue, transform};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use winit::keyboard::KeyCode;

fn seeded(seed: u64) -> Scene {
    let mut config = Config::default();
    config.animation.seed = Some(seed);
    Scene::from_config(&config)
}

fn rgb(scene: &Scene) -> Vec<[f32; 3]> {
    scene
        .bodies()
        .iter()
        .map(|b| {
            let c = b.color.color();
            [c[0], c[1], c[2]]
        })
        .collect()
}

#[test]
fn test_color_channels_stay_near_unit_range() {
    let mut rng = ChaCha8Rng::seed_from_u64(11);
    let mut drift = ColorDrift::new([1.0, 0.7, 0.5, 1.0], 0.001, 0.0001, 0.01);
    let bound = drift.max_speed();
    for _ in 0..200_000 {
        drift.step(&mut rng);
        for c in &drift.color()[..3] {
            assert!(*c >= -bound - 1e-6 && *c <= 1.0 + bound + 1e-6, "channel {c}");
        }
    }
}

#[test]
fn test_color_bounce_only_at_bounds() {
    let mut rng = ChaCha8Rng::seed_from_u64(12);
    let mut drift = ColorDrift::new([0.5, 0.02, 0.98, 1.0], 0.01, 0.0, 0.01);
    for _ in 0..5000 {
        let before = drift.color();
        let v_before = drift.velocity();
        let bounced = drift.step(&mut rng);
        for ch in 0..3 {
            let at_bound = (before[ch] >= 1.0 && v_before[ch] > 0.0)
                || (before[ch] <= 0.0 && v_before[ch] < 0.0);
            assert_eq!(bounced[ch], at_bound);
        }
    }
}

#[test]
fn test_distance_walk_invariant() {
    let mut rng = ChaCha8Rng::seed_from_u64(13);
    let walk = DistanceWalk::new(3.5, 4.5, 0.01).unwrap();
    let mut d = 4.0;
    for _ in 0..100_000 {
        d = walk.step(d, &mut rng);
        assert!((3.5..=4.5).contains(&d));
    }
}

#[test]
fn test_walking_body_stays_in_range_over_many_frames() {
    let mut scene = seeded(14);
    let input = FrameInput::default();
    for i in 0..5000 {
        scene.frame(i as f64 * 16.0, &input);
        let planet = &scene.bodies()[1];
        assert!((3.5..=4.5).contains(&planet.distance));
    }
}

#[test]
fn test_randomize_twice_different_seeds_differs() {
    let mut a = seeded(1);
    let mut b = seeded(2);
    a.randomize_colors();
    b.randomize_colors();
    a.randomize_colors();
    b.randomize_colors();
    assert_ne!(rgb(&a), rgb(&b));
}

#[test]
fn test_randomize_key_changes_colors() {
    let mut scene = seeded(3);
    let before = rgb(&scene);
    let mut queue = InputQueue::new();
    let keymap = KeyMap::default();
    queue.push(InputEvent::key_down(KeyCode::Space));
    let input = queue.drain(&keymap);
    assert_eq!(input.actions, vec![SceneAction::RandomizeColors]);
    scene.frame(0.0, &input);
    assert_ne!(before, rgb(&scene));
}

#[test]
fn test_world_and_matrix_share_angles() {
    let mut scene = seeded(4);
    let frames = scene.frame(1234.0, &FrameInput::default());
    let time = 1.234_f32;
    let rates = [(-1.0, 0.0), (1.0, 1.0), (0.8, -0.8)];
    for (frame, (rotate_rate, revolve_rate)) in frames.iter().zip(rates) {
        let expected = transform::world(rotate_rate * time, revolve_rate * time);
        let world = Mat4::from_cols_array(&frame.uniforms.u_world);
        assert!(world.abs_diff_eq(expected, 1e-4), "{}", frame.name);
    }
}

#[test]
fn test_moon_orbit_center() {
    let mut scene = seeded(5);
    let time_ms = 500.0;
    let vp = scene.camera().view_projection(1280.0 / 720.0);
    let frames = scene.frame(time_ms, &FrameInput::default());
    let moon = &frames[2];
    let revolve = -0.8 * 0.5;
    let expected = vp * Mat4::from_rotation_y(revolve) * Vec3::new(-6.0, 1.0, 0.0).extend(1.0);
    let actual = Mat4::from_cols_array(&moon.uniforms.u_matrix) * Vec3::ZERO.extend(1.0);
    assert!(actual.abs_diff_eq(expected, 1e-3));
}

#[test]
fn test_translation_keys_accumulate() {
    let mut scene = seeded(6);
    let keymap = KeyMap::default();
    let mut queue = InputQueue::new();
    for _ in 0..30 {
        queue.push(InputEvent::key_down(KeyCode::KeyD));
        queue.push(InputEvent::key_up(KeyCode::KeyD));
    }
    queue.push(InputEvent::key_down(KeyCode::KeyW));
    let frames = scene.frame(0.0, &queue.drain(&keymap));
    let m = frames[0].uniforms.u_transformation;
    assert!((m[12] - 3.0).abs() < 1e-4);
    assert!((m[13] - 0.1).abs() < 1e-6);
}

#[test]
fn test_slider_updates_reach_uniforms() {
    let mut scene = seeded(7);
    let mut queue = InputQueue::new();
    queue.push(InputEvent::slider(SliderChannel::Scale, 5));
    queue.push(InputEvent::slider(SliderChannel::Scale, 20));
    queue.push(InputEvent::slider(SliderChannel::LightY, -10));
    let frames = scene.frame(16.0, &queue.drain(&KeyMap::default()));
    let planet = &frames[1];
    assert_eq!(planet.uniforms.u_transformation[0], 2.0);
    assert_eq!(
        planet.uniforms.get("u_lightDirection"),
        Some(UniformValue::Vec3([1.0, -1.0, 1.0]))
    );
}

#[test]
fn test_diffuse_alpha_stays_opaque() {
    let mut scene = seeded(8);
    for i in 0..1000 {
        for frame in scene.frame(i as f64 * 16.0, &FrameInput::default()) {
            assert_eq!(frame.uniforms.u_diffuse[3], 1.0);
        }
    }
}

#[test]
fn test_frames_serialize_to_json() {
    let mut scene = seeded(9);
    let frames = scene.frame(16.0, &FrameInput::default());
    let line = serde_json::to_string(&frames[2]).unwrap();
    assert!(line.contains("\"name\":\"moon\""));
    assert!(line.contains("u_lightDirection"));
}

#[test]
fn test_non_finite_config_values_do_not_abort_scene() {
    let mut config = Config::default();
    config.animation.seed = Some(10);
    config.animation.max_color_speed = f32::NAN;
    config.animation.color_jitter = f32::INFINITY;
    if let Some(walk) = config.scene.bodies[1].distance_walk.as_mut() {
        walk.min = f32::NAN;
    }
    let mut scene = Scene::from_config(&config);
    for i in 0..100 {
        assert_eq!(scene.frame(i as f64 * 16.0, &FrameInput::default()).len(), 3);
    }
    let planet = &scene.bodies()[1];
    assert!(planet.walk.is_none());
    assert_eq!(planet.distance, 4.0);
    for body in scene.bodies() {
        assert!(body.color.color().iter().all(|c| c.is_finite()));
    }
}
