#[cfg(feature = "cairo-backend")]
use chrono::{NaiveDate, Utc};
#[cfg(feature = "cairo-backend")]
use click_chart::api::{ChartConfig, ChartEngine};
#[cfg(feature = "cairo-backend")]
use click_chart::core::{DailyClickCount, Sample};
#[cfg(feature = "cairo-backend")]
use serde::Deserialize;
#[cfg(feature = "cairo-backend")]
use std::fs::{self, File};
#[cfg(feature = "cairo-backend")]
use std::path::PathBuf;

#[cfg(feature = "cairo-backend")]
const DEFAULT_OUTPUT_PATH: &str = "click_chart.png";
#[cfg(feature = "cairo-backend")]
const DEFAULT_WIDTH_PX: f64 = 600.0;

#[cfg(feature = "cairo-backend")]
#[derive(Debug, Deserialize)]
struct ChartInput {
    #[serde(default)]
    config: ChartConfig,
    #[serde(default)]
    samples: Vec<Sample>,
    #[serde(default)]
    daily_clicks: Option<DailyClicksInput>,
}

#[cfg(feature = "cairo-backend")]
#[derive(Debug, Deserialize)]
struct DailyClicksInput {
    today: NaiveDate,
    entries: Vec<DailyClickCount>,
}

#[cfg(feature = "cairo-backend")]
#[derive(Debug)]
struct CliArgs {
    input_path: PathBuf,
    output_path: PathBuf,
    width: f64,
    pointer_x: Option<f64>,
    transparent: bool,
}

#[cfg(feature = "cairo-backend")]
fn main() {
    let _ = click_chart::telemetry::init_default_tracing();
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

#[cfg(not(feature = "cairo-backend"))]
fn main() {
    eprintln!("this tool requires feature `cairo-backend`");
    std::process::exit(1);
}

#[cfg(feature = "cairo-backend")]
fn run() -> Result<(), String> {
    use click_chart::render::{CairoRenderer, Color};

    let args = parse_args()?;
    let raw = fs::read_to_string(&args.input_path).map_err(|err| {
        format!(
            "failed to read input `{}`: {err}",
            args.input_path.display()
        )
    })?;
    let input: ChartInput =
        serde_json::from_str(&raw).map_err(|err| format!("failed to parse input json: {err}"))?;
    input.config.validate().map_err(|err| err.to_string())?;

    let width = input.config.width.unwrap_or(args.width);
    let height = input.config.height;
    let mut renderer = CairoRenderer::new(width.round() as i32, height.round() as i32)
        .map_err(|err| err.to_string())?;
    if args.transparent {
        renderer
            .set_clear_color(Color::rgba(0.0, 0.0, 0.0, 0.0))
            .map_err(|err| err.to_string())?;
    }
    let mut engine = ChartEngine::new(renderer, input.config).map_err(|err| err.to_string())?;
    engine.observe_width(width);

    match input.daily_clicks {
        Some(daily) => engine
            .set_daily_clicks(daily.today, &daily.entries, &Utc)
            .map_err(|err| err.to_string())?,
        None => engine
            .set_sample_vec(input.samples)
            .map_err(|err| err.to_string())?,
    }

    if let Some(pointer_x) = args.pointer_x {
        let margin = engine.container().margin();
        engine.pointer_move(pointer_x, margin.top);
    }

    if !engine.render().map_err(|err| err.to_string())? {
        return Err("chart has no width to render".to_owned());
    }

    let renderer = engine.into_renderer();
    let mut file = File::create(&args.output_path).map_err(|err| {
        format!(
            "failed to create output `{}`: {err}",
            args.output_path.display()
        )
    })?;
    renderer
        .surface()
        .write_to_png(&mut file)
        .map_err(|err| format!("failed to write png: {err}"))?;

    println!("wrote {}", args.output_path.display());
    Ok(())
}

#[cfg(feature = "cairo-backend")]
fn parse_args() -> Result<CliArgs, String> {
    let mut input_path: Option<PathBuf> = None;
    let mut output_path = PathBuf::from(DEFAULT_OUTPUT_PATH);
    let mut width = DEFAULT_WIDTH_PX;
    let mut pointer_x: Option<f64> = None;
    let mut transparent = false;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--input" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --input".to_owned())?;
                input_path = Some(PathBuf::from(value));
            }
            "--output" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --output".to_owned())?;
                output_path = PathBuf::from(value);
            }
            "--width" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --width".to_owned())?;
                width = parse_px("--width", &value)?;
            }
            "--pointer-x" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --pointer-x".to_owned())?;
                pointer_x = Some(parse_px("--pointer-x", &value)?);
            }
            "--transparent" => transparent = true,
            "--help" | "-h" => {
                print_usage();
                std::process::exit(0);
            }
            _ => {
                return Err(format!("unknown argument `{arg}`\n\n{}", usage_message()));
            }
        }
    }

    let input_path =
        input_path.ok_or_else(|| format!("missing --input\n\n{}", usage_message()))?;
    Ok(CliArgs {
        input_path,
        output_path,
        width,
        pointer_x,
        transparent,
    })
}

#[cfg(feature = "cairo-backend")]
fn parse_px(flag: &str, value: &str) -> Result<f64, String> {
    let parsed: f64 = value
        .parse()
        .map_err(|err| format!("invalid value for {flag} `{value}`: {err}"))?;
    if !parsed.is_finite() || parsed <= 0.0 {
        return Err(format!("{flag} must be finite and > 0"));
    }
    Ok(parsed)
}

#[cfg(feature = "cairo-backend")]
fn print_usage() {
    println!("{}", usage_message());
}

#[cfg(feature = "cairo-backend")]
fn usage_message() -> String {
    format!(
        "usage: render_click_chart_png --input <chart.json> [--output <path>] [--width <px>] [--pointer-x <px>] [--transparent]\n\n\
         defaults:\n  --output {DEFAULT_OUTPUT_PATH}\n  --width {DEFAULT_WIDTH_PX}"
    )
}
