use click_chart::api::{ChartConfig, ChartEngine, InvalidationTopic};
use click_chart::core::{Margin, Sample};
use click_chart::render::NullRenderer;

fn samples() -> Vec<Sample> {
    vec![Sample::new(0, 2.0), Sample::new(60_000, 4.0)]
}

#[test]
fn nothing_renders_before_the_first_width() {
    let mut engine =
        ChartEngine::new(NullRenderer::default(), ChartConfig::default()).expect("engine init");
    engine.set_sample_vec(samples()).expect("samples");

    assert!(engine.viewport().is_none());
    assert!(engine.build_frame().is_none());
    assert!(!engine.render().expect("render"));
    assert!(!engine.observe_width(0.0));
    assert!(!engine.observe_width(-5.0));
    assert!(engine.build_frame().is_none());

    let renderer = engine.into_renderer();
    assert_eq!(renderer.frames_rendered, 0);
}

#[test]
fn first_width_makes_the_chart_ready() {
    let mut engine =
        ChartEngine::new(NullRenderer::default(), ChartConfig::default()).expect("engine init");
    engine.set_sample_vec(samples()).expect("samples");
    assert!(engine.observe_width(480.0));

    let viewport = engine.viewport().expect("ready");
    assert_eq!(viewport.width, 480.0);
    assert_eq!(viewport.height, 200.0);
    assert_eq!(viewport.margin, Margin::default());
    assert!(engine.scales().is_some());
    assert!(engine.render().expect("render"));
}

#[test]
fn same_width_does_not_rebuild() {
    let mut engine =
        ChartEngine::new(NullRenderer::default(), ChartConfig::default()).expect("engine init");
    engine.set_sample_vec(samples()).expect("samples");
    engine.observe_width(480.0);
    engine.render().expect("render");
    let generation = engine.scales_generation();

    assert!(!engine.observe_width(480.0));
    assert_eq!(engine.scales_generation(), generation);
    assert!(engine.pending_invalidation().is_none());

    assert!(engine.observe_width(520.0));
    assert!(engine.scales_generation() > generation);
    assert!(
        engine
            .pending_invalidation()
            .contains_topic(InvalidationTopic::Viewport)
    );
}

#[test]
fn shrinking_to_zero_after_ready_shows_placeholder() {
    let mut engine =
        ChartEngine::new(NullRenderer::default(), ChartConfig::default()).expect("engine init");
    engine.set_sample_vec(samples()).expect("samples");
    engine.observe_width(480.0);

    assert!(engine.observe_width(0.0));
    assert!(engine.build_frame().expect("ready").is_placeholder());
}

#[test]
fn explicit_width_and_margin_come_from_config() {
    let margin = Margin::new(8.0, 8.0, 24.0, 32.0);
    let config = ChartConfig::new(160.0)
        .with_width(320.0)
        .with_margin(margin);
    let mut engine = ChartEngine::new(NullRenderer::default(), config).expect("engine init");
    engine.set_sample_vec(samples()).expect("samples");

    assert!(!engine.observe_width(900.0));
    let viewport = engine.viewport().expect("explicit width is ready");
    assert_eq!(viewport.width, 320.0);
    assert_eq!(viewport.inner_width(), 280.0);
    assert_eq!(viewport.inner_height(), 128.0);
    assert_eq!(engine.scales().expect("scales").inner_width, 280.0);
}
