// Host-side tests for the orientation controller state machine.
// Rendering goes to a recorder instead of the DOM.

use gallery_core::*;
use glam::Vec2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[derive(Default)]
struct Recorder {
    frames: Vec<String>,
}

impl RenderTarget for Recorder {
    fn render(&mut self, transform: &str) {
        self.frames.push(transform.to_string());
    }
}

fn controller() -> OrientationController<Recorder> {
    OrientationController::new(ControllerConfig::default(), Recorder::default()).unwrap()
}

fn frames(c: &OrientationController<Recorder>) -> usize {
    c.target().frames.len()
}

fn last_frame(c: &OrientationController<Recorder>) -> &str {
    c.target().frames.last().map(String::as_str).unwrap_or("")
}

#[test]
fn nothing_renders_until_applied() {
    let mut c = controller();
    assert_eq!(frames(&c), 0);
    assert_eq!(c.mode(), &Mode::Idle);
    assert_eq!(c.task(), Task::None);

    c.apply_transform();
    assert_eq!(last_frame(&c), "rotateX(-25deg) rotateY(45deg)");
}

#[test]
fn drag_renders_cumulative_scaled_deltas() {
    let mut c = controller();
    let s = c.config().sensitivity;
    let moves = [
        Vec2::new(110.0, 100.0),
        Vec2::new(125.0, 92.0),
        Vec2::new(120.0, 80.5),
        Vec2::new(90.0, 130.0),
        Vec2::new(90.0, 130.0),
    ];

    assert!(c.begin_drag(Vec2::new(100.0, 100.0)));
    let mut last = Vec2::new(100.0, 100.0);
    let mut expected = Orientation::default();
    for pos in moves {
        assert!(c.continue_drag(pos));
        let d = pos - last;
        expected.yaw += d.x * s;
        expected.pitch -= d.y * s;
        last = pos;
        assert_eq!(c.orientation(), expected);
        assert_eq!(last_frame(&c), expected.css_transform());
    }
    assert_eq!(frames(&c), moves.len());
}

#[test]
fn continue_and_end_drag_are_noops_without_a_drag() {
    let mut c = controller();
    assert!(!c.continue_drag(Vec2::new(50.0, 50.0)));
    assert!(!c.end_drag());
    assert_eq!(frames(&c), 0);
    assert_eq!(c.orientation(), Orientation::default());
}

#[test]
fn begin_drag_while_dragging_is_ignored() {
    let mut c = controller();
    assert!(c.begin_drag(Vec2::new(0.0, 0.0)));
    assert!(!c.begin_drag(Vec2::new(500.0, 500.0)));

    // Delta is still measured from the first grab point.
    c.continue_drag(Vec2::new(10.0, 0.0));
    assert_eq!(c.orientation().yaw, 45.0 + 10.0 * c.config().sensitivity);
}

#[test]
fn begin_drag_stops_auto_rotate() {
    let mut c = controller();
    assert!(c.start_auto_rotate());
    assert_eq!(c.task(), Task::AutoRotate);

    c.begin_drag(Vec2::ZERO);
    assert_eq!(c.task(), Task::None);
    c.tick_auto_rotate();
    assert_eq!(c.orientation(), Orientation::default());
    assert_eq!(frames(&c), 0);
}

#[test]
fn start_auto_rotate_while_dragging_schedules_nothing() {
    let mut c = controller();
    c.begin_drag(Vec2::ZERO);
    assert!(!c.start_auto_rotate());
    assert!(c.is_dragging());
    assert_eq!(c.task(), Task::None);

    c.continue_drag(Vec2::new(4.0, 0.0));
    let yaw = c.orientation().yaw;
    c.tick_auto_rotate();
    assert_eq!(c.orientation().yaw, yaw);
}

#[test]
fn start_auto_rotate_is_idempotent() {
    let mut c = controller();
    assert!(c.start_auto_rotate());
    assert!(!c.start_auto_rotate());
    assert_eq!(c.task(), Task::AutoRotate);
}

#[test]
fn auto_rotate_ticks_advance_yaw() {
    let mut c = controller();
    c.start_auto_rotate();
    for _ in 0..3 {
        c.tick_auto_rotate();
    }
    let step = c.config().auto_rotate_step_deg;
    assert_eq!(c.orientation().yaw, 45.0 + step + step + step);
    assert_eq!(c.orientation().pitch, -25.0);
    assert_eq!(frames(&c), 3);
}

#[test]
fn stop_auto_rotate_is_idempotent() {
    let mut c = controller();
    c.start_auto_rotate();
    c.stop_auto_rotate();
    c.stop_auto_rotate();
    assert_eq!(c.mode(), &Mode::Idle);
    assert_eq!(c.task(), Task::None);
    c.tick_auto_rotate();
    assert_eq!(frames(&c), 0);
}

#[test]
fn release_below_epsilon_resumes_auto_rotate_without_inertia_frame() {
    let mut c = controller();
    c.begin_drag(Vec2::ZERO);
    c.continue_drag(Vec2::new(0.05, 0.05));
    let before = frames(&c);
    let orientation = c.orientation();

    assert!(c.end_drag());
    assert_eq!(c.mode(), &Mode::AutoRotate);
    assert_eq!(c.task(), Task::AutoRotate);
    assert!(!c.step_inertia());
    assert_eq!(frames(&c), before);
    assert_eq!(c.orientation(), orientation);
}

#[test]
fn release_without_movement_resumes_auto_rotate() {
    let mut c = controller();
    c.begin_drag(Vec2::new(30.0, 30.0));
    assert!(c.end_drag());
    assert_eq!(c.task(), Task::AutoRotate);
}

#[test]
fn inertia_decays_then_hands_over_to_auto_rotate() {
    let mut c = controller();
    let s = c.config().sensitivity;
    c.begin_drag(Vec2::ZERO);
    c.continue_drag(Vec2::new(10.0, 0.0));
    let released_yaw = c.orientation().yaw;

    assert!(c.end_drag());
    assert_eq!(c.task(), Task::Inertia);

    assert!(c.step_inertia());
    assert_eq!(c.orientation().yaw, released_yaw + 10.0 * s);

    let mut steps = 1;
    while c.step_inertia() {
        steps += 1;
        assert!(steps < 1000, "inertia never settled");
    }
    // 10 * 0.95^n drops under 0.1 after 90 frames
    assert_eq!(steps, 90);
    assert_eq!(c.task(), Task::AutoRotate);
    assert!(c.orientation().yaw > released_yaw + 10.0 * s);
}

#[test]
fn inertia_keeps_the_drag_sign_convention() {
    let mut c = controller();
    c.begin_drag(Vec2::new(0.0, 100.0));
    // dragging upwards tilts pitch up
    c.continue_drag(Vec2::new(0.0, 90.0));
    let released = c.orientation();
    assert!(released.pitch > -25.0);

    c.end_drag();
    c.step_inertia();
    assert!(c.orientation().pitch > released.pitch);
    assert_eq!(c.orientation().yaw, released.yaw);
}

#[test]
fn second_rotate_by_while_in_flight_is_ignored() {
    let mut c = controller();
    c.start_auto_rotate();
    assert!(c.rotate_by(90.0, 0.0, 0.0));
    assert_eq!(c.task(), Task::KeyStep);
    assert!(!c.rotate_by(90.0, 0.0, 16.0));

    assert!(c.step_key(250.0));
    assert!(!c.step_key(500.0));
    assert_eq!(c.orientation().yaw, 45.0 + 90.0);
    assert_eq!(c.orientation().pitch, -25.0);
    assert_eq!(c.task(), Task::AutoRotate);
}

#[test]
fn key_step_eases_out_from_start_to_target() {
    let mut c = controller();
    c.rotate_by(0.0, -90.0, 1000.0);

    c.step_key(1000.0);
    assert_eq!(c.orientation(), Orientation::default());

    c.step_key(1250.0);
    // ease(0.5) = 0.875
    assert!((c.orientation().pitch - (-25.0 - 90.0 * 0.875)).abs() < 1e-4);

    let mut prev = c.orientation().pitch;
    let mut t = 1260.0;
    while c.step_key(t) {
        assert!(c.orientation().pitch <= prev);
        prev = c.orientation().pitch;
        t += 10.0;
    }
    assert_eq!(c.orientation().pitch, -115.0);
}

#[test]
fn key_step_tolerates_frames_stamped_before_the_request() {
    let mut c = controller();
    c.rotate_by(90.0, 0.0, 100.0);
    assert!(c.step_key(99.0));
    assert_eq!(c.orientation(), Orientation::default());
}

#[test]
fn rotate_by_is_ignored_while_dragging() {
    let mut c = controller();
    c.begin_drag(Vec2::ZERO);
    assert!(!c.rotate_by(90.0, 0.0, 0.0));
    assert!(c.is_dragging());
}

#[test]
fn rotate_by_cancels_inertia() {
    let mut c = controller();
    c.begin_drag(Vec2::ZERO);
    c.continue_drag(Vec2::new(20.0, 0.0));
    c.end_drag();
    assert_eq!(c.task(), Task::Inertia);

    let start = c.orientation();
    assert!(c.rotate_by(-90.0, 0.0, 0.0));
    assert_eq!(c.task(), Task::KeyStep);
    assert!(!c.step_inertia());
    c.step_key(500.0);
    assert_eq!(c.orientation().yaw, start.yaw - 90.0);
}

#[test]
fn grabbing_mid_key_step_cancels_it() {
    let mut c = controller();
    c.rotate_by(90.0, 0.0, 0.0);
    c.step_key(100.0);
    assert!(c.begin_drag(Vec2::ZERO));
    assert_eq!(c.task(), Task::None);
    assert!(!c.step_key(500.0));
    assert!(c.orientation().yaw < 135.0);
}

#[test]
fn start_auto_rotate_waits_for_key_step() {
    let mut c = controller();
    c.rotate_by(90.0, 0.0, 0.0);
    assert!(!c.start_auto_rotate());
    assert_eq!(c.task(), Task::KeyStep);
}

#[test]
fn exactly_one_task_outside_of_drags() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut c = controller();
    c.start_auto_rotate();
    let mut now = 0.0;

    for _ in 0..2000 {
        now += 16.0;
        match rng.gen_range(0..7) {
            0 => {
                c.begin_drag(Vec2::new(rng.gen_range(0.0..800.0), rng.gen_range(0.0..600.0)));
            }
            1 => {
                c.continue_drag(Vec2::new(rng.gen_range(0.0..800.0), rng.gen_range(0.0..600.0)));
            }
            2 => {
                c.end_drag();
            }
            3 => {
                let (yaw, pitch) = if rng.gen() { (90.0, 0.0) } else { (0.0, -90.0) };
                c.rotate_by(yaw, pitch, now);
            }
            4 => {
                c.step_inertia();
            }
            5 => {
                c.step_key(now);
            }
            _ => {
                c.tick_auto_rotate();
                c.start_auto_rotate();
            }
        }
        if c.is_dragging() {
            assert_eq!(c.task(), Task::None);
        } else {
            assert_ne!(c.task(), Task::None);
        }
    }
}

#[test]
fn invalid_config_is_rejected() {
    let config = ControllerConfig {
        inertia_damping: 1.0,
        ..ControllerConfig::default()
    };
    assert!(matches!(
        OrientationController::new(config, Recorder::default()),
        Err(ConfigError::DampingOutOfRange(_))
    ));
}
