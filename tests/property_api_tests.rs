use click_chart::api::{ChartConfig, ChartEngine, time_axis_tick_count};
use click_chart::core::{PathCommand, Sample};
use click_chart::interaction::TooltipPhase;
use click_chart::render::{CanvasLayerKind, NullRenderer, Primitive, TextHAlign};
use proptest::prelude::*;

fn sample_series() -> impl Strategy<Value = Vec<Sample>> {
    prop::collection::vec((0i64..7_200_000, 0.0f64..10_000.0), 1..30).prop_map(|steps| {
        let mut time_ms = 1_700_000_000_000;
        steps
            .into_iter()
            .map(|(gap, value)| {
                time_ms += gap;
                Sample::new(time_ms, value)
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn frames_are_valid_and_ordered(
        samples in sample_series(),
        width in 10.0f64..1_600.0,
        pointer_x in -50.0f64..1_700.0
    ) {
        let mut engine = ChartEngine::new(NullRenderer::default(), ChartConfig::default())
            .expect("engine init");
        engine.observe_width(width);
        engine.set_sample_vec(samples).expect("ascending samples");
        engine.pointer_move(pointer_x, 40.0);

        let frame = engine.build_frame().expect("ready");
        prop_assert!(frame.validate().is_ok());
        prop_assert_eq!(engine.render().expect("render"), true);
    }

    #[test]
    fn curve_stays_inside_the_plot(
        samples in sample_series(),
        width in 100.0f64..1_600.0
    ) {
        let mut engine = ChartEngine::new(NullRenderer::default(), ChartConfig::default())
            .expect("engine init");
        engine.observe_width(width);
        engine.set_sample_vec(samples).expect("ascending samples");

        let frame = engine.build_frame().expect("ready");
        let viewport = frame.viewport;
        let top = viewport.margin.top - 1e-6;
        let bottom = viewport.margin.top + viewport.inner_height() + 1e-6;
        let Some(Primitive::Path(line)) = frame.primitives_in(CanvasLayerKind::Line).next() else {
            return Err(TestCaseError::fail("line path missing"));
        };
        for command in &line.commands {
            let ys: Vec<f64> = match *command {
                PathCommand::MoveTo { y, .. } | PathCommand::LineTo { y, .. } => vec![y],
                PathCommand::CubicTo { y1, y2, y, .. } => vec![y1, y2, y],
                PathCommand::Close => Vec::new(),
            };
            for y in ys {
                prop_assert!(y >= top && y <= bottom, "y {} outside [{}, {}]", y, top, bottom);
            }
        }
    }

    #[test]
    fn time_label_count_tracks_width(
        samples in sample_series(),
        width in 100.0f64..1_600.0
    ) {
        prop_assume!(samples.first().map(|s| s.time_ms) != samples.last().map(|s| s.time_ms));
        let mut engine = ChartEngine::new(NullRenderer::default(), ChartConfig::default())
            .expect("engine init");
        engine.observe_width(width);
        engine.set_sample_vec(samples).expect("ascending samples");

        let frame = engine.build_frame().expect("ready");
        let time_labels = frame
            .primitives_in(CanvasLayerKind::Axis)
            .filter(|p| matches!(p, Primitive::Text(t) if t.h_align == TextHAlign::Center))
            .count();
        prop_assert_eq!(time_labels, time_axis_tick_count(width));
    }

    #[test]
    fn tooltip_is_shown_only_over_the_hit_surface(
        samples in sample_series(),
        width in 100.0f64..1_600.0,
        pointer_x in -50.0f64..1_700.0,
        pointer_y in -20.0f64..240.0
    ) {
        let mut engine = ChartEngine::new(NullRenderer::default(), ChartConfig::default())
            .expect("engine init");
        engine.observe_width(width);
        engine.set_sample_vec(samples).expect("ascending samples");
        let surface = engine
            .build_frame()
            .and_then(|frame| frame.hit_surface())
            .expect("hit surface");

        engine.pointer_move(pointer_x, pointer_y);
        let expected = if surface.contains(pointer_x, pointer_y) {
            TooltipPhase::Shown
        } else {
            TooltipPhase::Hidden
        };
        prop_assert_eq!(engine.tooltip_phase(), expected);
    }

    #[test]
    fn resize_always_hides_tooltip(
        samples in sample_series(),
        first in 100.0f64..1_600.0,
        second in 100.0f64..1_600.0,
        fraction in 0.0f64..=1.0
    ) {
        prop_assume!(first != second);
        let mut engine = ChartEngine::new(NullRenderer::default(), ChartConfig::default())
            .expect("engine init");
        engine.observe_width(first);
        engine.set_sample_vec(samples).expect("ascending samples");
        let viewport = engine.viewport().expect("ready");
        let pointer_x = viewport.margin.left + fraction * viewport.inner_width();
        engine.pointer_move(pointer_x, 40.0);
        prop_assert_eq!(engine.tooltip_phase(), TooltipPhase::Shown);

        engine.observe_width(second);
        prop_assert_eq!(engine.tooltip_phase(), TooltipPhase::Hidden);
    }
}
