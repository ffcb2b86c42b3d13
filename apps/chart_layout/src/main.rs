use anyhow::Context;
use astral_chart::rendering::{ChartSpecGenerator, GlyphConfig, HouseNumerals, VisualConfig};
use astral_chart::{compute_layout, load_chart_data_from_json, ChartGeometryConfig, PlanetSet};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Lay out a natal chart wheel from chart data JSON")]
struct Args {
    #[arg(help = "Path to chart data JSON (points, houses, aspects)")]
    input: PathBuf,

    #[arg(long, help = "Geometry config TOML")]
    config: Option<PathBuf>,

    /// Show only the seven classical bodies
    #[arg(long)]
    traditional: bool,

    /// Emit a flat shape list instead of the layout model
    #[arg(long)]
    spec: bool,

    /// Roman house numerals instead of cuneiform
    #[arg(long)]
    roman: bool,

    #[arg(long)]
    pretty: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => ChartGeometryConfig::load(path)
            .with_context(|| format!("loading geometry config {}", path.display()))?,
        None => ChartGeometryConfig::default(),
    };
    if args.traditional {
        config.planet_set = PlanetSet::Traditional;
    }

    let json = std::fs::read_to_string(&args.input)
        .with_context(|| format!("reading {}", args.input.display()))?;
    let chart = load_chart_data_from_json(&json)
        .with_context(|| format!("parsing {}", args.input.display()))?;

    let layout = compute_layout(&chart, &config)?;
    for warning in &layout.warnings {
        log::warn!("{:?}", warning);
    }

    let output = if args.spec {
        let glyphs = GlyphConfig {
            house_numerals: if args.roman {
                HouseNumerals::Roman
            } else {
                HouseNumerals::Cuneiform
            },
            ..GlyphConfig::default()
        };
        let spec = ChartSpecGenerator::with_configs(VisualConfig::default(), glyphs)
            .generate(&layout);
        to_json(&spec, args.pretty)?
    } else {
        to_json(&layout, args.pretty)?
    };

    println!("{}", output);
    Ok(())
}

fn to_json<T: serde::Serialize>(value: &T, pretty: bool) -> anyhow::Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(json)
}
