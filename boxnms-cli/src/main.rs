use boxnms::{gather, BoundingBox, NmsConfig, NmsSelector};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::fs;
use std::error::Error;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

const EXAMPLE_JSON: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/config.example.json"));

#[derive(Parser, Debug)]
#[command(author, version, about = "Greedy IoU NMS over a JSON detection file")]
struct Cli {
    /// Path to the JSON configuration file.
    #[arg(short, long, value_name = "FILE", default_value = "config.json")]
    config: PathBuf,
    /// Detection file to read instead of `input_path` from the config.
    #[arg(short, long, value_name = "FILE")]
    input: Option<PathBuf>,
    /// IoU threshold overriding the config value.
    #[arg(long)]
    iou_threshold: Option<f32>,
    /// Print an example config and exit.
    #[arg(long)]
    print_example: bool,
    /// Enable tracing output.
    #[arg(long)]
    trace: bool,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
struct NmsConfigJson {
    iou_threshold: f32,
    min_score: Option<f32>,
    max_detections: Option<usize>,
    parallel: bool,
}

impl Default for NmsConfigJson {
    fn default() -> Self {
        let cfg = NmsConfig::default();
        Self {
            iou_threshold: cfg.iou_threshold,
            min_score: cfg.min_score,
            max_detections: cfg.max_detections,
            parallel: cfg.parallel,
        }
    }
}

impl From<NmsConfigJson> for NmsConfig {
    fn from(value: NmsConfigJson) -> Self {
        Self {
            iou_threshold: value.iou_threshold,
            min_score: value.min_score,
            max_detections: value.max_detections,
            parallel: value.parallel,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Config {
    input_path: String,
    output_path: Option<String>,
    nms: NmsConfigJson,
}

#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq)]
struct Detection {
    bbox: [f32; 4],
    score: f32,
}

#[derive(Debug, Deserialize)]
struct Input {
    detections: Vec<Detection>,
}

#[derive(Debug, Serialize)]
struct Output {
    keep: Vec<usize>,
    detections: Vec<Detection>,
}

fn run(input: &Input, cfg: NmsConfig) -> Result<Output, boxnms::NmsError> {
    let boxes: Vec<BoundingBox> = input
        .detections
        .iter()
        .map(|det| BoundingBox::from(det.bbox))
        .collect();
    let scores: Vec<f32> = input.detections.iter().map(|det| det.score).collect();

    let degenerate = boxes.iter().filter(|bbox| bbox.is_degenerate()).count();
    if degenerate > 0 {
        tracing::warn!(degenerate, "detections with inverted corners have zero area");
    }

    let keep = NmsSelector::default().with_config(cfg).select(&boxes, &scores)?;
    let detections = gather(&input.detections, &keep);
    Ok(Output { keep, detections })
}

/// Reads the config file. A missing file is allowed when the detection file
/// comes from `--input`.
fn load_config(path: &Path, input_given: bool) -> Result<Config, Box<dyn Error>> {
    if input_given && !path.exists() {
        return Ok(Config::default());
    }
    let config_text = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&config_text)?)
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    if cli.trace {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env().add_directive("boxnms=debug".parse()?))
            .with_target(false)
            .init();
    }

    if cli.print_example {
        println!("{EXAMPLE_JSON}");
        return Ok(());
    }

    let config = load_config(&cli.config, cli.input.is_some())?;
    let input_path = match cli.input {
        Some(path) => path,
        None if config.input_path.is_empty() => {
            return Err("input_path must be set in the config or via --input".into());
        }
        None => PathBuf::from(&config.input_path),
    };

    let mut nms_cfg = NmsConfig::from(config.nms);
    if let Some(iou_threshold) = cli.iou_threshold {
        nms_cfg.iou_threshold = iou_threshold;
    }

    let input: Input = serde_json::from_str(&fs::read_to_string(&input_path)?)?;
    tracing::info!(
        path = %input_path.display(),
        detections = input.detections.len(),
        "loaded detections"
    );

    let output = run(&input, nms_cfg)?;
    let json = serde_json::to_string_pretty(&output)?;

    match config.output_path {
        Some(path) => fs::write(path, json)?,
        None => println!("{json}"),
    }

    Ok(())
}
