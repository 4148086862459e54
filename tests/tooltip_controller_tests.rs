use approx::assert_relative_eq;
use click_chart::api::{ChartConfig, ChartEngine, InvalidationTopic, TOOLTIP_ANCHOR_LIFT_PX};
use click_chart::core::Sample;
use click_chart::interaction::{PointerEvent, TooltipPhase};
use click_chart::render::{CanvasLayerKind, NullRenderer, Primitive};

const HOUR_MS: i64 = 3_600_000;
const MARGIN_LEFT: f64 = 40.0;
const MARGIN_TOP: f64 = 20.0;

fn engine_with_samples(width: f64) -> ChartEngine<NullRenderer> {
    let mut engine =
        ChartEngine::new(NullRenderer::default(), ChartConfig::default()).expect("engine init");
    engine.observe_width(width);
    engine
        .set_sample_vec(vec![
            Sample::new(0, 0.0),
            Sample::new(HOUR_MS, 50.0),
            Sample::new(2 * HOUR_MS, 5.0),
        ])
        .expect("samples");
    engine
}

#[test]
fn hover_shows_nearest_sample_with_anchor() {
    let mut engine = engine_with_samples(600.0);
    assert_eq!(engine.tooltip_phase(), TooltipPhase::Hidden);

    assert!(engine.pointer_move(MARGIN_LEFT + 270.0, 50.0));
    let state = engine.tooltip_state();
    assert_eq!(engine.tooltip_phase(), TooltipPhase::Shown);
    assert_eq!(state.sample, Some(Sample::new(HOUR_MS, 50.0)));
    assert_relative_eq!(state.anchor_x, 270.0, epsilon = 1e-9);
    assert_relative_eq!(state.anchor_y, 140.0 - 140.0 * 10.0 / 12.0, epsilon = 1e-9);
}

#[test]
fn equidistant_pointer_resolves_to_earlier_sample() {
    let mut engine = engine_with_samples(600.0);
    engine.pointer_move(MARGIN_LEFT + 135.0, 50.0);
    assert_eq!(engine.tooltip_state().sample, Some(Sample::new(0, 0.0)));
}

#[test]
fn plot_edges_resolve_to_edge_samples() {
    let mut engine = engine_with_samples(600.0);
    engine.pointer_move(MARGIN_LEFT, 50.0);
    assert_eq!(engine.tooltip_state().sample, Some(Sample::new(0, 0.0)));

    engine.pointer_move(MARGIN_LEFT + 540.0, 50.0);
    assert_eq!(
        engine.tooltip_state().sample,
        Some(Sample::new(2 * HOUR_MS, 5.0))
    );
}

#[test]
fn pointer_over_axis_margins_hides_the_tooltip() {
    let mut engine = engine_with_samples(600.0);
    let surface = engine
        .build_frame()
        .and_then(|frame| frame.hit_surface())
        .expect("hit surface");
    assert!(!surface.contains(300.0, 190.0));

    assert!(engine.pointer_move(MARGIN_LEFT + 270.0, 50.0));
    assert!(engine.pointer_move(300.0, 190.0));
    assert_eq!(engine.tooltip_phase(), TooltipPhase::Hidden);
    assert!(engine.tooltip_overlay().is_none());
    assert!(
        engine
            .pending_invalidation()
            .contains_topic(InvalidationTopic::Tooltip)
    );

    for (x, y) in [(5.0, 5.0), (20.0, 80.0), (590.0, 80.0), (300.0, 10.0)] {
        assert!(!engine.pointer_move(x, y), "({x}, {y})");
        assert_eq!(engine.tooltip_phase(), TooltipPhase::Hidden, "({x}, {y})");
    }
    assert!(!engine.touch_start(5.0, 5.0));
    assert!(!engine.pointer_down(590.0, 190.0));
    assert_eq!(engine.tooltip_phase(), TooltipPhase::Hidden);
}

#[test]
fn every_tracking_event_shows_the_tooltip() {
    let events = [
        PointerEvent::Move { x: 310.0, y: 50.0 },
        PointerEvent::Down { x: 310.0, y: 50.0 },
        PointerEvent::TouchStart { x: 310.0, y: 50.0 },
        PointerEvent::TouchMove { x: 310.0, y: 50.0 },
    ];
    for event in events {
        let mut engine = engine_with_samples(600.0);
        engine.handle_pointer(event);
        assert_eq!(engine.tooltip_phase(), TooltipPhase::Shown, "{event:?}");
    }
}

#[test]
fn leave_and_touch_end_hide_the_tooltip() {
    let mut engine = engine_with_samples(600.0);
    engine.pointer_move(310.0, 50.0);
    assert!(engine.pointer_leave());
    assert_eq!(engine.tooltip_phase(), TooltipPhase::Hidden);
    assert!(!engine.pointer_leave());

    engine.touch_start(310.0, 50.0);
    assert!(engine.touch_end());
    assert_eq!(engine.tooltip_phase(), TooltipPhase::Hidden);
}

#[test]
fn replacing_samples_hides_the_tooltip() {
    let mut engine = engine_with_samples(600.0);
    engine.pointer_move(310.0, 50.0);

    engine
        .set_sample_vec(vec![Sample::new(0, 1.0), Sample::new(HOUR_MS, 2.0)])
        .expect("samples");
    assert_eq!(engine.tooltip_phase(), TooltipPhase::Hidden);
    assert!(engine.tooltip_overlay().is_none());
}

#[test]
fn resize_hides_the_tooltip() {
    let mut engine = engine_with_samples(600.0);
    engine.pointer_move(310.0, 50.0);
    assert!(engine.observe_width(300.0));
    assert_eq!(engine.tooltip_phase(), TooltipPhase::Hidden);

    let frame = engine.build_frame().expect("ready");
    assert_eq!(frame.primitives_in(CanvasLayerKind::Tooltip).count(), 0);
    assert_eq!(frame.primitives_in(CanvasLayerKind::Overlay).count(), 0);
}

#[test]
fn tracking_reuses_cached_scales() {
    let mut engine = engine_with_samples(600.0);
    engine.render().expect("render");
    let generation = engine.scales_generation();

    engine.pointer_move(120.0, 50.0);
    engine.pointer_move(480.0, 50.0);
    engine.pointer_leave();

    assert_eq!(engine.scales_generation(), generation);
    let pending = engine.pending_invalidation();
    assert!(pending.contains_topic(InvalidationTopic::Tooltip));
    assert!(!pending.affects_scales());
}

#[test]
fn pointer_is_ignored_without_chart() {
    let mut engine =
        ChartEngine::new(NullRenderer::default(), ChartConfig::default()).expect("engine init");
    assert!(!engine.pointer_move(100.0, 50.0));

    engine.observe_width(600.0);
    assert!(!engine.pointer_move(100.0, 50.0));
    assert_eq!(engine.tooltip_phase(), TooltipPhase::Hidden);
}

#[test]
fn indicator_draws_guide_line_and_bordered_marker() {
    let mut engine = engine_with_samples(600.0);
    engine.pointer_move(MARGIN_LEFT + 270.0, 50.0);
    let frame = engine.build_frame().expect("ready");
    let indicator: Vec<&Primitive> = frame.primitives_in(CanvasLayerKind::Tooltip).collect();

    let [Primitive::Line(guide), Primitive::Circle(marker)] = indicator.as_slice() else {
        panic!("expected guide line and marker, got {indicator:?}");
    };
    assert_relative_eq!(guide.x1, MARGIN_LEFT + 270.0, epsilon = 1e-9);
    assert_eq!(guide.x1, guide.x2);
    assert_eq!(guide.y1, MARGIN_TOP);
    assert_eq!(guide.y2, MARGIN_TOP + 140.0);
    assert_eq!(marker.radius, 6.0);
    assert_eq!(marker.border_width, 2.0);
    assert_eq!(marker.border_color.red, 1.0);
}

#[test]
fn overlay_shows_time_caption_and_value() {
    let mut engine = engine_with_samples(600.0);
    engine.pointer_move(MARGIN_LEFT + 270.0, 50.0);

    let overlay = engine.tooltip_overlay().expect("shown");
    assert_eq!(overlay.time_label, "01:00");
    assert_eq!(overlay.series_label, "Clicks");
    assert_eq!(overlay.value_label, "10");
    assert!(!overlay.flipped_x);
    assert_relative_eq!(overlay.left, MARGIN_LEFT + 270.0 + 10.0, epsilon = 1e-9);

    let anchor_top = engine.tooltip_state().anchor_y + MARGIN_TOP - TOOLTIP_ANCHOR_LIFT_PX;
    assert_relative_eq!(overlay.top, anchor_top + 10.0, epsilon = 1e-9);
}

#[test]
fn overlay_flips_and_stays_inside_the_container() {
    let mut engine = engine_with_samples(600.0);
    engine.pointer_move(MARGIN_LEFT + 540.0, 50.0);

    let overlay = engine.tooltip_overlay().expect("shown");
    assert!(overlay.flipped_x);
    assert!(overlay.left >= 0.0);
    assert!(overlay.left + overlay.width <= 600.0);
    assert!(overlay.top >= 0.0);
    assert!(overlay.top + overlay.height <= 200.0);
}
