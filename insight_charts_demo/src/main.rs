// Copyright 2025 the Insight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Area chart demos for `insight_charts`.
mod svg;

use std::error::Error;

use insight_charts::{
    AreaLayout, Axis, AxisOrient, ChartOptions, ChartType, DomainValue, Scale, ScaleBuilder,
    SeriesPoint, Size, StackOffset, area_shape, format_time_seconds, stacked_series,
};
use kurbo::Point;
use peniko::Color;
use peniko::color::palette::css;

use crate::svg::{SvgDocument, TextAnchor};

const PLOT: Size = Size {
    width: 360.0,
    height: 160.0,
};
const MARGIN: f64 = 40.0;
const FONT_SIZE: f64 = 10.0;

fn main() -> Result<(), Box<dyn Error>> {
    let row = PLOT.height + 2.0 * MARGIN;
    let mut doc = SvgDocument::new(kurbo::Size::new(PLOT.width + 2.0 * MARGIN, 3.0 * row));

    stacked_demo(&mut doc, Point::new(MARGIN, MARGIN))?;
    signed_demo(&mut doc, Point::new(MARGIN, row + MARGIN))?;
    time_demo(&mut doc, Point::new(MARGIN, 2.0 * row + MARGIN))?;

    print!("{}", doc.to_svg_string());
    Ok(())
}

fn quarters() -> Vec<DomainValue> {
    ["Q1", "Q2", "Q3", "Q4", "Q5", "Q6"]
        .into_iter()
        .map(DomainValue::from)
        .collect()
}

fn options(layout: AreaLayout, spline: bool) -> ChartOptions {
    ChartOptions::new(ChartType::Area)
        .with_y_orientation(AxisOrient::Left)
        .with_layout(layout)
        .with_spline(spline)
}

/// Builds the value axis over every boundary the series can reach, including zero.
fn value_scale(
    series: &[Vec<SeriesPoint>],
    options: ChartOptions,
) -> Result<Scale, Box<dyn Error>> {
    let mut values = vec![DomainValue::Number(0.0)];
    for p in series.iter().flatten() {
        let y0 = p.y0.unwrap_or(0.0);
        values.push(DomainValue::Number(y0));
        values.push(DomainValue::Number(y0 + p.y));
        values.push(DomainValue::Number(p.y));
    }
    Ok(ScaleBuilder::new(Axis::Y, values, options, PLOT)?.generate())
}

fn stacked_demo(doc: &mut SvgDocument, origin: Point) -> Result<(), Box<dyn Error>> {
    let x_values = quarters();
    let north = [3.0, 4.5, 2.0, 5.0, 6.5, 4.0];
    let south = [1.5, 2.0, 3.5, 2.5, 1.0, 2.0];
    let west = [2.0, 1.0, 1.5, 3.0, 2.5, 3.5];

    let options = options(AreaLayout::Stacked, true);
    let series = stacked_series(&x_values, &[&north, &south, &west], StackOffset::Cumulative)?;
    let x = ScaleBuilder::new(Axis::X, x_values.clone(), options, PLOT)?.generate();
    let y = value_scale(&series, options)?;

    let fills = [css::STEEL_BLUE, css::DARK_ORANGE, css::SEA_GREEN];
    doc.begin_plot(origin, PLOT.height);
    for (points, fill) in series.iter().zip(fills) {
        let shape = area_shape(&x, &y, points, PLOT, &options)?;
        doc.path(&shape.path, fill.with_alpha(0.85));
    }
    doc.end_group();

    category_labels(doc, origin, &x, &x_values);
    value_ticks(doc, origin, &y);
    Ok(())
}

fn signed_demo(doc: &mut SvgDocument, origin: Point) -> Result<(), Box<dyn Error>> {
    let x_values = quarters();
    let margin = [4.0, 1.5, -2.0, -3.5, 0.5, 3.0];

    let options = options(AreaLayout::Normal, false);
    let points: Vec<SeriesPoint> = x_values
        .iter()
        .zip(margin)
        .map(|(x, y)| SeriesPoint::new(x.clone(), y))
        .collect();
    let x = ScaleBuilder::new(Axis::X, x_values.clone(), options, PLOT)?.generate();
    let y = value_scale(std::slice::from_ref(&points), options)?;

    let shape = area_shape(&x, &y, &points, PLOT, &options)?;
    doc.begin_plot(origin, PLOT.height);
    doc.path(&shape.path, css::TOMATO.with_alpha(0.7));
    if let Some(zero) = y.map_f64(0.0) {
        doc.line(
            Point::new(0.0, zero),
            Point::new(PLOT.width, zero),
            Color::BLACK,
        );
    }
    doc.end_group();

    category_labels(doc, origin, &x, &x_values);
    value_ticks(doc, origin, &y);
    Ok(())
}

/// A day of half-hourly load readings on a time axis.
fn time_demo(doc: &mut SvgDocument, origin: Point) -> Result<(), Box<dyn Error>> {
    let load = [
        2.0, 1.8, 1.7, 1.7, 1.9, 2.6, 3.8, 4.4, 4.1, 3.9, 4.0, 4.6, 5.2, 4.8, 4.3, 3.6,
    ];
    let x_values: Vec<DomainValue> = (0..load.len())
        .map(|i| DomainValue::Time(1_800.0 * i as f64))
        .collect();

    // A single stacked series sits on the zero line.
    let options = options(AreaLayout::Stacked, true);
    let series = stacked_series(&x_values, &[&load], StackOffset::Cumulative)?;
    let x = ScaleBuilder::new(Axis::X, x_values, options, PLOT)?.generate();
    let y = value_scale(&series, options)?;

    let shape = area_shape(&x, &y, &series[0], PLOT, &options)?;
    doc.begin_plot(origin, PLOT.height);
    doc.path(&shape.path, css::MEDIUM_PURPLE.with_alpha(0.8));
    doc.end_group();

    let ticks = x.ticks(6);
    let step = match ticks.as_slice() {
        [a, b, ..] => b - a,
        _ => 1.0,
    };
    for t in ticks {
        let Some(px) = x.map_f64(t) else {
            continue;
        };
        let pos = Point::new(origin.x + px, origin.y + PLOT.height + 4.0);
        let label = format_time_seconds(t, step);
        doc.text(pos, FONT_SIZE, TextAnchor::Middle, &label);
    }
    value_ticks(doc, origin, &y);
    Ok(())
}

fn category_labels(doc: &mut SvgDocument, origin: Point, x: &Scale, values: &[DomainValue]) {
    let half_band = x.bandwidth().unwrap_or(0.0) / 2.0;
    for v in values {
        let (Some(px), DomainValue::Category(label)) = (x.map(v), v) else {
            continue;
        };
        let pos = Point::new(origin.x + px + half_band, origin.y + PLOT.height + 4.0);
        doc.text(pos, FONT_SIZE, TextAnchor::Middle, label);
    }
}

/// Labels the value axis on the left of the plot.
fn value_ticks(doc: &mut SvgDocument, origin: Point, y: &Scale) {
    for v in y.ticks(5) {
        let Some(py) = y.map_f64(v) else {
            continue;
        };
        // Plot groups are flipped, labels are not.
        let screen_y = origin.y + PLOT.height - py;
        let from = Point::new(origin.x - 4.0, screen_y);
        doc.line(from, Point::new(origin.x, screen_y), css::DIM_GRAY);
        let pos = Point::new(origin.x - 6.0, screen_y);
        doc.text(pos, FONT_SIZE, TextAnchor::End, &format!("{v}"));
    }
}
