//! Measures how chain lengths grow with the load factor and how much one resize helps,
//! then plots the results.

#![allow(
    clippy::arithmetic_side_effects,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss
)]

use std::error::Error;

use chaintable::{ChainStats, ChainedHashTable, logging::init_logger};
use log::info;
use plotters::prelude::*;
use rand::{Rng, distr::Alphanumeric};

/// Bucket count of every table before it is resized
const TABLE_SIZE: usize = 4096;
/// Number of load factors to sample
const NUM_LOAD_FACTORS: usize = 10;
/// Smallest sampled load factor
const MIN_LOAD: f64 = 0.25;
/// Largest sampled load factor; chaining keeps working past 1.0
const MAX_LOAD: f64 = 3.0;
/// Length of the generated keys
const KEY_LEN: usize = 12;

/// Font used for all chart text
const FONT: &str = "sans-serif";
/// Chart title size
const TITLE_SIZE: u32 = 35;
/// Axis description size
const TEXT_SIZE: u32 = 16;
/// Series line width
const LINE_WIDTH: u32 = 2;
/// Point marker radius
const MARKER_SIZE: i32 = 4;

/// Chain statistics for one load factor, before and after doubling the table
#[derive(Debug, Clone, Copy)]
struct Sample {
    /// Load factor of the table before resizing
    load_factor: f64,
    /// Statistics at `TABLE_SIZE` buckets
    before: ChainStats,
    /// Statistics after one resize
    after: ChainStats,
}

/// Selects one side of a sample
type Phase = fn(&Sample) -> &ChainStats;

/// Stats before the resize
fn before(sample: &Sample) -> &ChainStats {
    &sample.before
}

/// Stats after the resize
fn after(sample: &Sample) -> &ChainStats {
    &sample.after
}

/// Plotted series: label, side of the sample, color
const SERIES: [(&str, Phase, RGBColor); 2] = [
    ("Before resize", before, RGBColor(220, 50, 50)),
    ("After resize", after, RGBColor(50, 90, 220)),
];

/// Generates a random alphanumeric key
fn random_key(rng: &mut impl Rng) -> String {
    rng.sample_iter(Alphanumeric).take(KEY_LEN).map(char::from).collect()
}

/// Fills a fresh table up to `load_factor`, then resizes it once
fn measure(load_factor: f64, rng: &mut impl Rng) -> Result<Sample, Box<dyn Error>> {
    let n_keys = (TABLE_SIZE as f64 * load_factor) as usize;

    let mut table = ChainedHashTable::with_capacity(TABLE_SIZE)?;
    for i in 0..n_keys {
        table.insert(random_key(rng), i.to_string())?;
    }
    let before = ChainStats::of(&table);

    let table = table.resize()?;
    let after = ChainStats::of(&table);

    Ok(Sample { load_factor, before, after })
}

/// Draws one metric for both phases into a PNG at `path`
fn draw_chart(
    path: &str,
    title: &str,
    y_desc: &str,
    samples: &[Sample],
    metric: impl Fn(&ChainStats) -> f64,
) -> Result<(), Box<dyn Error>> {
    let root = BitMapBackend::new(path, (1200, 800)).into_drawing_area();
    root.fill(&WHITE)?;

    let max_y = samples
        .iter()
        .flat_map(|s| [metric(&s.before), metric(&s.after)])
        .fold(0.0, f64::max)
        .max(1.0) *
        1.1; // Add 10% margin

    let mut chart = ChartBuilder::on(&root)
        .caption(title, (FONT, TITLE_SIZE))
        .margin(15)
        .x_label_area_size(60)
        .y_label_area_size(60)
        .right_y_label_area_size(10)
        .build_cartesian_2d(0.0..MAX_LOAD * 1.05, 0.0..max_y)?;

    chart
        .configure_mesh()
        .x_desc("Load Factor Before Resize")
        .y_desc(y_desc)
        .axis_desc_style((FONT, TEXT_SIZE))
        .draw()?;

    for (label, phase, color) in SERIES {
        let points: Vec<(f64, f64)> =
            samples.iter().map(|s| (s.load_factor, metric(phase(s)))).collect();
        let line_style = ShapeStyle::from(&color).stroke_width(LINE_WIDTH);

        chart
            .draw_series(LineSeries::new(points.iter().copied(), line_style))?
            .label(label)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], line_style));

        chart.draw_series(
            points.into_iter().map(|point| Circle::new(point, MARKER_SIZE, color.filled())),
        )?;
    }

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .position(SeriesLabelPosition::UpperLeft)
        .draw()?;

    root.present()?;
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    init_logger();

    let load_factors: Vec<f64> = (0..NUM_LOAD_FACTORS)
        .map(|i| MIN_LOAD + (MAX_LOAD - MIN_LOAD) * (i as f64) / ((NUM_LOAD_FACTORS - 1) as f64))
        .collect();

    let mut rng = rand::rng();
    let mut samples = Vec::with_capacity(load_factors.len());

    for &load_factor in &load_factors {
        let sample = measure(load_factor, &mut rng)?;
        info!(
            "load {:.2}: avg chain {:.2} -> {:.2}, longest {} -> {}, empty buckets {} -> {}",
            load_factor,
            sample.before.average_chain,
            sample.after.average_chain,
            sample.before.longest_chain,
            sample.after.longest_chain,
            sample.before.empty_buckets,
            sample.after.empty_buckets,
        );
        samples.push(sample);
    }

    draw_chart(
        "average_chain_length.png",
        "Average Chain Length",
        "Entries per Non-Empty Bucket",
        &samples,
        |stats| stats.average_chain,
    )?;
    draw_chart(
        "longest_chain.png",
        "Longest Chain",
        "Entries in Longest Chain",
        &samples,
        |stats| stats.longest_chain as f64,
    )?;
    draw_chart(
        "empty_buckets.png",
        "Share of Empty Buckets",
        "Empty Buckets (%)",
        &samples,
        |stats| 100.0 * stats.empty_buckets as f64 / stats.capacity as f64,
    )?;

    println!(
        "Generated plot images: average_chain_length.png, longest_chain.png, empty_buckets.png"
    );

    Ok(())
}
