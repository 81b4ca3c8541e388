use std::time::Duration;

use approx::assert_relative_eq;
use chart_layout::ChartError;
use chart_layout::animation::{Animation, AnimationState, Easing, interpolate};

fn animation(easing: Easing) -> Animation {
    Animation::new(Duration::from_millis(400), easing).expect("animation")
}

#[test]
fn new_animation_is_idle_and_ignores_ticks() {
    let mut clock = animation(Easing::CubicOut);

    assert_eq!(clock.state(), AnimationState::Idle);
    assert_relative_eq!(clock.tick(Duration::from_millis(100)), 0.0);
    assert_relative_eq!(clock.fraction(), 0.0);
    assert!(!clock.is_running());
}

#[test]
fn ticks_advance_eased_progress_until_finished() {
    let mut clock = animation(Easing::QuadOut);
    clock.start();

    assert_relative_eq!(clock.tick(Duration::from_millis(100)), 0.4375, epsilon = 1e-12);
    assert_relative_eq!(clock.fraction(), 0.25, epsilon = 1e-12);
    assert!(clock.is_running());

    assert_relative_eq!(clock.tick(Duration::from_millis(100)), 0.75, epsilon = 1e-12);

    assert_relative_eq!(clock.tick(Duration::from_secs(5)), 1.0);
    assert_eq!(clock.state(), AnimationState::Finished);
    assert_relative_eq!(clock.fraction(), 1.0);
}

#[test]
fn cancel_jumps_to_last_frame() {
    let mut clock = animation(Easing::QuartOut);
    clock.start();
    clock.tick(Duration::from_millis(50));

    clock.cancel();

    assert_eq!(clock.state(), AnimationState::Finished);
    assert_relative_eq!(clock.progress(), 1.0);
    assert_relative_eq!(clock.tick(Duration::from_millis(50)), 1.0);
}

#[test]
fn restart_rewinds_elapsed_time() {
    let mut clock = animation(Easing::SineOut);
    clock.start();
    clock.tick(Duration::from_millis(400));
    assert_eq!(clock.state(), AnimationState::Finished);

    clock.start();

    assert_eq!(clock.state(), AnimationState::Running);
    assert_relative_eq!(clock.fraction(), 0.0);
    assert_relative_eq!(clock.progress(), 0.0);
}

#[test]
fn zero_duration_is_rejected() {
    let err = Animation::new(Duration::ZERO, Easing::default()).expect_err("zero");
    assert!(matches!(err, ChartError::InvalidConfig(_)));
}

#[test]
fn interpolate_moves_between_endpoints() {
    assert_relative_eq!(interpolate(10.0, 30.0, 0.0), 10.0);
    assert_relative_eq!(interpolate(10.0, 30.0, 0.25), 15.0);
    assert_relative_eq!(interpolate(10.0, 30.0, 1.0), 30.0);
    assert_relative_eq!(interpolate(-5.0, 5.0, 0.5), 0.0);
}
