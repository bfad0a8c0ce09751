// Example: heatmap_demo.rs
// Prices a spot × volatility sweep and renders annotated call and put heatmaps
// as SVG, alongside CSV exports of the same grids.
//
// Usage:
//     cargo run --example heatmap_demo -- [sweep.toml]
//
// Without a config file the reference sweep (10 × 10 around S=100, σ=0.2) is
// used. Outputs call_heatmap.svg, put_heatmap.svg, call_prices.csv and
// put_prices.csv in the working directory.

use std::env;
use std::error::Error;

use bs_heatmap::{
    default_configs, write_csv_path, OptionKind, OptionParameters, SensitivityGrid, SweepConfig,
};
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// ---------------------------------------------------------------------------
// Colour map
// ---------------------------------------------------------------------------

const COOL: (f64, f64, f64) = (59.0, 76.0, 192.0);
const NEUTRAL: (f64, f64, f64) = (221.0, 221.0, 221.0);
const WARM: (f64, f64, f64) = (180.0, 4.0, 38.0);

/// Diverging blue-grey-red ramp, `t` in [0, 1].
fn coolwarm(t: f64) -> RGBColor {
    let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.5 };
    let (from, to, u) = if t < 0.5 {
        (COOL, NEUTRAL, t * 2.0)
    } else {
        (NEUTRAL, WARM, (t - 0.5) * 2.0)
    };
    let mix = |a: f64, b: f64| (a + (b - a) * u).round() as u8;
    RGBColor(mix(from.0, to.0), mix(from.1, to.1), mix(from.2, to.2))
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

fn render_heatmap(
    grid: &SensitivityGrid,
    kind: OptionKind,
    title: &str,
    path: &str,
) -> Result<(), Box<dyn Error>> {
    let (rows, cols) = grid.shape();
    let (lo, hi) = grid.price_range(kind);
    let span = if hi > lo { hi - lo } else { 1.0 };

    let root = SVGBackend::new(path, (1000, 800)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption(title, ("sans-serif", 30))
        .x_label_area_size(50)
        .y_label_area_size(70)
        .build_cartesian_2d(0.0..cols as f64, 0.0..rows as f64)?;

    let spots = grid.spot_values();
    let vols = grid.volatility_values();

    // Row 0 is drawn at the top, matching the matrix layout.
    chart
        .configure_mesh()
        .disable_mesh()
        .x_labels(cols)
        .y_labels(rows)
        .x_label_formatter(&|x| {
            spots
                .get(x.floor() as usize)
                .map(|s| format!("{:.2}", s))
                .unwrap_or_default()
        })
        .y_label_formatter(&|y| {
            let from_top = rows as isize - 1 - y.floor() as isize;
            usize::try_from(from_top)
                .ok()
                .and_then(|i| vols.get(i))
                .map(|v| format!("{:.2}", v))
                .unwrap_or_default()
        })
        .x_desc("Spot Price")
        .y_desc("Volatility")
        .draw()?;

    let prices = grid.prices(kind);
    let cell = |i: usize, j: usize| {
        let x0 = j as f64;
        let y0 = (rows - 1 - i) as f64;
        ((x0, y0), (x0 + 1.0, y0 + 1.0))
    };

    chart.draw_series((0..rows).flat_map(|i| {
        (0..cols).map(move |j| {
            let (a, b) = cell(i, j);
            Rectangle::new([a, b], coolwarm((prices[i][j] - lo) / span).filled())
        })
    }))?;

    let label_style = TextStyle::from(("sans-serif", 14).into_font())
        .pos(Pos::new(HPos::Center, VPos::Center));
    chart.draw_series((0..rows).flat_map(|i| {
        let label_style = label_style.clone();
        (0..cols).map(move |j| {
            let (a, _) = cell(i, j);
            Text::new(
                format!("{:.2}", prices[i][j]),
                (a.0 + 0.5, a.1 + 0.5),
                label_style.clone(),
            )
        })
    }))?;

    root.present()?;
    info!(path, "heatmap written");
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = env::args().collect();
    let config = match args.get(1) {
        Some(path) => {
            println!("Loading sweep config from {}", path);
            SweepConfig::from_path(path)?
        }
        None => default_configs::reference(OptionParameters::default()),
    };

    let base = config.base;
    println!(
        "Base: S={:.2} K={:.2} T={:.2} r={:.2}% σ={:.2}%",
        base.spot_price,
        base.strike,
        base.time_to_maturity,
        base.risk_free_rate * 100.0,
        base.volatility * 100.0
    );
    println!(
        "Spot axis: {:.2}..{:.2} ({} points), volatility axis: {:.2}..{:.2} ({} points)",
        config.spot.min,
        config.spot.max,
        config.spot.points,
        config.volatility.min,
        config.volatility.max,
        config.volatility.points
    );

    let grid = config.run()?;

    write_csv_path(&grid, OptionKind::Call, "call_prices.csv")?;
    write_csv_path(&grid, OptionKind::Put, "put_prices.csv")?;
    println!("Grids written to call_prices.csv and put_prices.csv");

    render_heatmap(&grid, OptionKind::Call, "CALL", "call_heatmap.svg")?;
    render_heatmap(&grid, OptionKind::Put, "PUT", "put_heatmap.svg")?;
    println!("Heatmaps saved to call_heatmap.svg and put_heatmap.svg");

    Ok(())
}
