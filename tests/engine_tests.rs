use std::time::Duration;

use approx::assert_relative_eq;
use chart_layout::animation::{AnimationState, Easing};
use chart_layout::core::{ChartLayout, Viewport};
use chart_layout::model::{ChartKind, ChartSet, LineStyle};
use chart_layout::render::{Color, NullRenderer};
use chart_layout::style::{PlatformDefaults, StyleOverrides};
use chart_layout::{ChartEngine, ChartEngineConfig, ChartError};

const RED: Color = Color::rgb(1.0, 0.0, 0.0);
const BLUE: Color = Color::rgb(0.0, 0.0, 1.0);

fn bar_config() -> ChartEngineConfig {
    ChartEngineConfig::new(Viewport::new(400, 300), ChartKind::Bar, 0.0, 100.0)
}

fn bar_set(color: Color, values: &[f64]) -> ChartSet {
    let mut set = ChartSet::bar().with_color(color);
    for (i, value) in values.iter().enumerate() {
        set.add_point(format!("q{i}"), *value).expect("point");
    }
    set
}

fn bar_engine() -> ChartEngine<NullRenderer> {
    let mut engine = ChartEngine::new(NullRenderer::default(), bar_config()).expect("engine");
    engine
        .set_data(vec![
            bar_set(RED, &[80.0, 20.0, 50.0, 100.0]),
            bar_set(BLUE, &[10.0, 40.0, 0.0, 60.0]),
        ])
        .expect("data");
    engine
}

fn bars(layout: &ChartLayout) -> &chart_layout::core::BarLayout {
    match layout {
        ChartLayout::Bar(bars) => bars,
        other => panic!("expected bar layout, got {other:?}"),
    }
}

#[test]
fn bar_chart_places_groups_in_centered_slots() {
    let mut engine = bar_engine();

    assert_eq!(
        engine.label_positions().map(|labels| labels.as_slice().to_vec()),
        Some(vec![50.0, 150.0, 250.0, 350.0])
    );

    let layout = engine.layout().expect("layout");
    let layout = bars(&layout);

    assert_relative_eq!(layout.metrics.bar_width, 46.5, epsilon = 1e-9);
    assert_relative_eq!(layout.metrics.drawing_offset, 47.5, epsilon = 1e-9);

    let first = layout.bars[0][0];
    assert_relative_eq!(first.left, 2.5, epsilon = 1e-9);
    assert_relative_eq!(first.right, 49.0, epsilon = 1e-9);
    assert_relative_eq!(first.top, 60.0, epsilon = 1e-9);
    assert_relative_eq!(first.bottom, 300.0, epsilon = 1e-9);

    let second = layout.bars[1][0];
    assert_relative_eq!(second.left, 51.0, epsilon = 1e-9);
    assert_relative_eq!(second.right, 97.5, epsilon = 1e-9);
}

#[test]
fn render_hands_validated_frame_to_renderer() {
    let mut engine = bar_engine();

    engine.render().expect("render");

    assert_eq!(engine.renderer().frames_rendered, 1);
    assert_eq!(engine.renderer().last_rect_count, 8);
    assert_eq!(engine.renderer().last_path_count, 0);

    let hit = engine.hit_test(70.0, 285.0).expect("hit");
    assert_eq!((hit.set_index, hit.entry_index), (1, 0));
    assert!(engine.hit_test(70.0, 10.0).is_none());
}

#[test]
fn entry_animation_grows_values_from_axis_minimum() {
    let config = bar_config()
        .with_easing(Easing::QuadOut)
        .with_animation_duration_ms(1000);
    let mut engine = ChartEngine::new(NullRenderer::default(), config).expect("engine");
    engine
        .set_data(vec![bar_set(RED, &[80.0, 20.0])])
        .expect("data");

    assert_relative_eq!(engine.progress(), 1.0);

    engine.start_animation();
    let progress = engine.tick(Duration::from_millis(500));
    assert_relative_eq!(progress, 0.75, epsilon = 1e-12);

    let layout = engine.layout().expect("mid layout");
    assert_relative_eq!(bars(&layout).bars[0][0].top, 120.0, epsilon = 1e-9);
    assert_eq!(engine.sets()[0].entry(0).map(|e| e.value()), Some(80.0));

    engine.tick(Duration::from_millis(600));
    assert_eq!(engine.animation().state(), AnimationState::Finished);

    let layout = engine.layout().expect("final layout");
    assert_relative_eq!(bars(&layout).bars[0][0].top, 60.0, epsilon = 1e-9);
}

#[test]
fn cancelled_animation_draws_final_values() {
    let mut engine = bar_engine();
    engine.start_animation();
    engine.tick(Duration::from_millis(10));

    engine.cancel_animation();

    assert_relative_eq!(engine.progress(), 1.0);
    let layout = engine.layout().expect("layout");
    assert_relative_eq!(bars(&layout).bars[0][0].top, 60.0, epsilon = 1e-9);
}

#[test]
fn spacing_changes_apply_on_next_layout() {
    let mut engine = bar_engine();
    let before = engine.layout().expect("before");

    engine.set_set_spacing(0.0);
    engine.set_bar_spacing(0.0);
    let after = engine.layout().expect("after");

    assert_relative_eq!(bars(&before).metrics.bar_width, 46.5, epsilon = 1e-9);
    assert_relative_eq!(bars(&after).metrics.bar_width, 50.0, epsilon = 1e-9);
}

#[test]
fn style_overrides_are_resolved_again() {
    let mut engine = bar_engine();

    engine.set_style_overrides(StyleOverrides {
        bar_spacing: Some(20.0),
        ..StyleOverrides::default()
    });

    assert_eq!(engine.bar_style().bar_spacing, 20.0);
    assert_eq!(engine.bar_style().set_spacing, 2.0);
    assert_eq!(engine.config().style_overrides.bar_spacing, Some(20.0));
}

#[test]
fn update_values_reflows_one_set() {
    let mut engine = bar_engine();

    engine
        .update_values(1, &[90.0, 90.0, 90.0, 90.0])
        .expect("update");
    let layout = engine.layout().expect("layout");

    assert_relative_eq!(bars(&layout).bars[1][3].top, 30.0, epsilon = 1e-9);
    assert!(engine.update_values(2, &[1.0]).is_err());
    assert!(engine.update_values(0, &[1.0]).is_err());
}

#[test]
fn external_label_positions_replace_generated_ones() {
    let mut engine = bar_engine();

    engine
        .set_label_positions(vec![100.0, 200.0, 300.0, 380.0])
        .expect("positions");
    let layout = engine.layout().expect("layout");
    assert_relative_eq!(bars(&layout).bars[0][0].left, 100.0 - 47.5, epsilon = 1e-9);

    let err = engine
        .set_label_positions(vec![100.0, 200.0])
        .expect_err("count mismatch");
    assert!(matches!(err, ChartError::InvalidData(_)));
}

#[test]
fn line_chart_spreads_labels_between_border_spacing() {
    let config = ChartEngineConfig::new(Viewport::new(400, 300), ChartKind::Line, 0.0, 100.0)
        .with_border_spacing(20.0);
    let mut engine = ChartEngine::new(NullRenderer::default(), config).expect("engine");
    let mut set = ChartSet::line(LineStyle::builder().dots(true).build().expect("style"));
    for (label, value) in [("a", 10.0), ("b", 30.0), ("c", 20.0)] {
        set.add_point(label, value).expect("point");
    }
    engine.set_data(vec![set]).expect("data");

    assert_eq!(
        engine.label_positions().map(|labels| labels.as_slice().to_vec()),
        Some(vec![20.0, 200.0, 380.0])
    );

    engine.render().expect("render");
    assert_eq!(engine.renderer().last_path_count, 1);
    assert_eq!(engine.renderer().last_dot_count, 3);
    assert_eq!(engine.hit_test(205.0, 212.0).map(|hit| hit.entry_index), Some(1));
}

#[test]
fn rejects_sets_of_another_kind() {
    let mut engine = ChartEngine::new(NullRenderer::default(), bar_config()).expect("engine");
    let mut line = ChartSet::line(LineStyle::default());
    line.add_point("a", 1.0).expect("point");
    line.add_point("b", 2.0).expect("point");

    let err = engine.set_data(vec![line]).expect_err("kind");
    assert!(matches!(err, ChartError::InvalidData(_)));
    assert!(engine.sets().is_empty());
}

#[test]
fn bar_chart_needs_two_entries() {
    let mut engine = ChartEngine::new(NullRenderer::default(), bar_config()).expect("engine");

    let err = engine
        .set_data(vec![bar_set(RED, &[1.0])])
        .expect_err("one entry");
    assert_eq!(
        err,
        ChartError::InsufficientLabelPositions {
            required: 2,
            actual: 1
        }
    );
}

#[test]
fn layout_before_data_is_degenerate() {
    let mut engine = ChartEngine::new(NullRenderer::default(), bar_config()).expect("engine");

    let err = engine.layout().expect_err("no data");
    assert!(matches!(err, ChartError::DegenerateLayout(_)));
    assert!(engine.render().is_err());
    assert_eq!(engine.renderer().frames_rendered, 0);
}

#[test]
fn invalid_configs_are_rejected() {
    let zero_duration = bar_config().with_animation_duration_ms(0);
    assert!(matches!(
        ChartEngine::new(NullRenderer::default(), zero_duration),
        Err(ChartError::InvalidConfig(_))
    ));

    let inverted = ChartEngineConfig::new(Viewport::new(400, 300), ChartKind::Bar, 10.0, 10.0);
    assert!(matches!(
        ChartEngine::new(NullRenderer::default(), inverted),
        Err(ChartError::InvalidData(_))
    ));
}

#[test]
fn config_round_trips_through_json() {
    let config = bar_config()
        .with_easing(Easing::SineOut)
        .with_border_spacing(4.0)
        .with_style_overrides(StyleOverrides {
            set_spacing: Some(3.0),
            ..StyleOverrides::default()
        });

    let json = config.to_json_pretty().expect("serialize");
    assert!(json.contains("\"sine-out\""));
    assert_eq!(ChartEngineConfig::from_json_str(&json), Ok(config));

    let minimal = ChartEngineConfig::from_json_str(
        r#"{ "viewport": { "width": 10, "height": 10 }, "kind": "scatter", "value_min": 0.0, "value_max": 1.0 }"#,
    )
    .expect("minimal");
    assert_eq!(minimal.animation_duration_ms, 1000);
    assert_eq!(minimal.easing, Easing::QuintOut);
    assert_eq!(minimal.kind, ChartKind::Scatter);
}

#[test]
fn scatter_and_line_defaults_follow_screen_density() {
    let config = ChartEngineConfig::new(Viewport::new(400, 300), ChartKind::Scatter, 0.0, 100.0)
        .with_platform_defaults(PlatformDefaults::default().with_density(3.0));
    let mut engine = ChartEngine::new(NullRenderer::default(), config).expect("engine");

    let scatter = engine.default_scatter_style();
    assert_relative_eq!(scatter.radius(), 12.0);
    let line = engine
        .line_style_builder()
        .expect("builder")
        .build()
        .expect("line style");
    assert_relative_eq!(line.line_thickness(), 12.0);

    let mut set = ChartSet::scatter(scatter);
    set.add_point("a", 50.0).expect("point");
    set.add_point("b", 25.0).expect("point");
    engine.set_data(vec![set]).expect("data");

    let layout = engine.layout().expect("layout");
    let ChartLayout::Scatter(layout) = layout else {
        panic!("expected scatter layout");
    };
    let dot = layout.dots[0][0];
    let region = layout.regions.get(0, 0).expect("region");
    assert_relative_eq!(dot.radius, 12.0);
    assert_relative_eq!(dot.center.y, 150.0, epsilon = 1e-9);
    assert_relative_eq!(region.right - dot.center.x, 60.0, epsilon = 1e-9);
}

#[test]
fn state_changes_clear_stale_regions() {
    let mut engine = bar_engine();
    engine.layout().expect("layout");
    assert!(engine.hit_test(70.0, 285.0).is_some());

    engine
        .set_label_positions(vec![300.0, 320.0, 340.0, 390.0])
        .expect("positions");
    assert_eq!(engine.regions().set_count(), 0);
    assert!(engine.hit_test(70.0, 285.0).is_none());

    engine.layout().expect("layout");
    assert!(engine.hit_test(70.0, 285.0).is_none());
    assert!(engine.hit_test(295.0, 295.0).is_some());

    engine
        .update_values(0, &[1.0, 2.0, 3.0, 4.0])
        .expect("update");
    assert!(engine.hit_test(295.0, 295.0).is_none());

    engine.layout().expect("layout");
    engine.set_bar_spacing(4.0);
    assert_eq!(engine.regions().set_count(), 0);

    engine.layout().expect("layout");
    engine.set_set_spacing(1.0);
    assert_eq!(engine.regions().set_count(), 0);
}

#[test]
fn value_at_inverts_the_value_axis() {
    let engine = bar_engine();

    assert_relative_eq!(engine.value_at(60.0).expect("value"), 80.0, epsilon = 1e-9);
    assert_relative_eq!(engine.value_at(300.0).expect("value"), 0.0, epsilon = 1e-9);
    assert!(engine.value_at(f64::NAN).is_err());
}
