// Copyright 2025 the Insight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

extern crate std;

use alloc::vec;
use alloc::vec::Vec;

use kurbo::{PathEl, Point};

use crate::{
    AreaLayout, AreaShapeSpec, Axis, AxisOrient, BoundaryRule, BoundaryRules, ChartOptions,
    ChartType, DomainValue, GeometryError, Scale, ScaleLinear, SeriesPoint, Size, StackOffset,
    area_shape, boundary_rules, generate_scale, stacked_series,
};

fn assert_close(a: f64, b: f64) {
    assert!((a - b).abs() <= 1e-9, "{a} != {b}");
}

fn labels(names: &[&str]) -> Vec<DomainValue> {
    names.iter().map(|&n| DomainValue::from(n)).collect()
}

fn x_points(names: &[&str], chart_type: ChartType, width: f64) -> Scale {
    generate_scale(
        Axis::X,
        &labels(names),
        ChartOptions::new(chart_type),
        Size::new(width, 10.0),
    )
    .unwrap()
}

fn y_linear(min: f64, max: f64, height: f64) -> Scale {
    Scale::Linear(ScaleLinear::new((min, max), (0.0, height)))
}

#[test]
fn decision_table_covers_every_case() {
    use BoundaryRule::*;

    let rules = |bottom, top| BoundaryRules { bottom, top };

    // Stacked, sign-straddling segment.
    assert_eq!(
        boundary_rules(AreaLayout::Stacked, -3.0, 2.0, 0.0),
        rules(ZeroLine, Value)
    );
    // Stacked, negative increment from a zero baseline.
    assert_eq!(
        boundary_rules(AreaLayout::Stacked, -3.0, 0.0, 0.0),
        rules(ZeroLine, StackTop)
    );
    // Stacked, ordinary.
    assert_eq!(
        boundary_rules(AreaLayout::Stacked, 3.0, 2.0, 0.0),
        rules(Baseline, StackTop)
    );
    assert_eq!(
        boundary_rules(AreaLayout::Stacked, -3.0, -2.0, -10.0),
        rules(Baseline, StackTop)
    );
    // Normal, negative domain.
    assert_eq!(
        boundary_rules(AreaLayout::Normal, 4.0, 0.0, -5.0),
        rules(ZeroLine, Value)
    );
    // Normal, non-negative domain.
    assert_eq!(
        boundary_rules(AreaLayout::Normal, 4.0, 0.0, 0.0),
        rules(PlotFloor, Value)
    );
}

#[test]
fn unstacked_area_over_negative_domain_fills_to_zero_line() {
    let x = x_points(&["a", "b", "c"], ChartType::Area, 200.0);
    let y = y_linear(-5.0, 10.0, 150.0);
    let data = [
        SeriesPoint::new("a", 4.0),
        SeriesPoint::new("b", -2.0),
        SeriesPoint::new("c", 9.0),
    ];
    let shape = AreaShapeSpec::new(&x, &y, Size::new(200.0, 150.0))
        .build(&data)
        .unwrap();

    for p in &shape.bottom {
        assert_close(p.y, 50.0);
    }
    assert_close(shape.top[1].y, 30.0);
}

#[test]
fn unstacked_area_over_positive_domain_fills_to_plot_floor() {
    let x = x_points(&["a", "b"], ChartType::Area, 200.0);
    let y = y_linear(0.0, 10.0, 150.0);
    let data = [SeriesPoint::new("a", 4.0), SeriesPoint::new("b", 6.0)];
    let shape = AreaShapeSpec::new(&x, &y, Size::new(200.0, 150.0))
        .build(&data)
        .unwrap();

    for p in &shape.bottom {
        assert_eq!(p.y, 150.0);
    }
    assert_close(shape.top[0].y, 60.0);
}

#[test]
fn straddling_stacked_point_uses_raw_value_for_top() {
    let x = x_points(&["a"], ChartType::Area, 100.0);
    let y = y_linear(-10.0, 10.0, 100.0);
    let data = [SeriesPoint::stacked("a", -3.0, 2.0)];
    let shape = AreaShapeSpec::new(&x, &y, Size::new(100.0, 100.0))
        .with_layout(AreaLayout::Stacked)
        .build(&data)
        .unwrap();

    // y(-3) = 35, y(0) = 50; y(2 + -3) would be 45.
    assert_close(shape.top[0].y, 35.0);
    assert_close(shape.bottom[0].y, 50.0);
}

#[test]
fn adjacent_stacked_series_share_boundaries() {
    let names = ["a", "b", "c", "d"];
    let size = Size::new(300.0, 120.0);
    let x = x_points(&names, ChartType::Area, size.width);
    let y = y_linear(0.0, 20.0, size.height);

    let lower = [1.5, 2.0, 4.25, 3.0];
    let upper = [2.0, 5.5, 0.75, 6.0];
    let x_values = labels(&names);
    let series = stacked_series(&x_values, &[&lower, &upper], StackOffset::Cumulative).unwrap();

    let spec = AreaShapeSpec::new(&x, &y, size).with_layout(AreaLayout::Stacked);
    let lower_shape = spec.build(&series[0]).unwrap();
    let upper_shape = spec.build(&series[1]).unwrap();

    assert_eq!(lower_shape.top, upper_shape.bottom);
}

#[test]
fn band_x_scale_centers_points_in_their_band() {
    let x = x_points(&["a", "b"], ChartType::Column, 210.0);
    let y = y_linear(0.0, 1.0, 10.0);
    let data = [SeriesPoint::new("a", 0.5), SeriesPoint::new("b", 0.5)];
    let shape = AreaShapeSpec::new(&x, &y, Size::new(210.0, 10.0))
        .build(&data)
        .unwrap();

    let bw = x.bandwidth().unwrap();
    let start = x.map(&"a".into()).unwrap();
    assert_close(shape.top[0].x, start + bw / 2.0);
}

#[test]
fn linear_path_runs_top_forward_then_bottom_backward() {
    let x = x_points(&["a", "b", "c"], ChartType::Line, 100.0);
    let y = y_linear(0.0, 10.0, 100.0);
    let data = [
        SeriesPoint::new("a", 1.0),
        SeriesPoint::new("b", 2.0),
        SeriesPoint::new("c", 3.0),
    ];
    let shape = AreaShapeSpec::new(&x, &y, Size::new(100.0, 100.0))
        .build(&data)
        .unwrap();

    let mut expected = vec![PathEl::MoveTo(shape.top[0])];
    expected.extend(shape.top[1..].iter().map(|&p| PathEl::LineTo(p)));
    expected.extend(shape.bottom.iter().rev().map(|&p| PathEl::LineTo(p)));
    expected.push(PathEl::ClosePath);
    assert_eq!(shape.path.elements(), expected.as_slice());
}

#[test]
fn spline_path_passes_through_every_boundary_point() {
    let names = ["a", "b", "c", "d", "e"];
    let x = x_points(&names, ChartType::Area, 400.0);
    let y = y_linear(0.0, 10.0, 100.0);
    let values = [3.0, 7.0, 2.0, 9.0, 5.0];
    let data: Vec<SeriesPoint> = names
        .iter()
        .zip(values)
        .map(|(&n, v)| SeriesPoint::new(n, v))
        .collect();

    let mut options = ChartOptions::new(ChartType::Area).with_spline(true);
    options.axis_y.orientation = AxisOrient::Left;
    let shape = area_shape(&x, &y, &data, Size::new(400.0, 100.0), &options).unwrap();

    let ends: Vec<Point> = shape
        .path
        .elements()
        .iter()
        .filter_map(|el| match *el {
            PathEl::MoveTo(p) | PathEl::LineTo(p) | PathEl::CurveTo(_, _, p) => Some(p),
            _ => None,
        })
        .collect();
    let mut expected = shape.top.clone();
    expected.extend(shape.bottom.iter().rev().copied());
    assert_eq!(ends, expected);
    assert!(
        shape
            .path
            .elements()
            .iter()
            .any(|el| matches!(el, PathEl::CurveTo(..))),
        "expected curve segments"
    );
    assert_eq!(shape.path.elements().last(), Some(&PathEl::ClosePath));
}

#[test]
fn empty_series_builds_an_empty_path() {
    let x = x_points(&["a"], ChartType::Area, 10.0);
    let y = y_linear(0.0, 1.0, 10.0);
    let shape = AreaShapeSpec::new(&x, &y, Size::new(10.0, 10.0))
        .build(&[])
        .unwrap();
    assert!(shape.top.is_empty());
    assert!(shape.path.elements().is_empty());
}

#[test]
fn ordinal_value_scale_is_rejected() {
    let x = x_points(&["a"], ChartType::Area, 10.0);
    let data = [SeriesPoint::new("a", 1.0)];
    let err = AreaShapeSpec::new(&x, &x, Size::new(10.0, 10.0)).build(&data);
    assert_eq!(err.unwrap_err(), GeometryError::DiscreteValueScale);
}

#[test]
fn unknown_category_and_nan_are_rejected() {
    let x = x_points(&["a", "b"], ChartType::Area, 10.0);
    let y = y_linear(0.0, 1.0, 10.0);
    let spec = AreaShapeSpec::new(&x, &y, Size::new(10.0, 10.0));

    let data = [SeriesPoint::new("a", 1.0), SeriesPoint::new("z", 1.0)];
    assert_eq!(
        spec.build(&data).unwrap_err(),
        GeometryError::UnmappedX { index: 1 }
    );

    let data = [SeriesPoint::new("a", f64::NAN)];
    assert_eq!(
        spec.build(&data).unwrap_err(),
        GeometryError::NonFiniteValue { index: 0 }
    );
}

#[test]
fn missing_baseline_in_stacked_layout_counts_as_zero() {
    let x = x_points(&["a"], ChartType::Area, 10.0);
    let y = y_linear(0.0, 10.0, 100.0);
    let shape = AreaShapeSpec::new(&x, &y, Size::new(10.0, 100.0))
        .with_layout(AreaLayout::Stacked)
        .build(&[SeriesPoint::new("a", 4.0)])
        .unwrap();
    assert_close(shape.bottom[0].y, 0.0);
    assert_close(shape.top[0].y, 40.0);
}

#[test]
fn unstacked_layout_ignores_stray_baselines() {
    let x = x_points(&["a", "b"], ChartType::Area, 10.0);
    let y = y_linear(0.0, 10.0, 100.0);
    let data = [
        SeriesPoint::stacked("a", 4.0, f64::NAN),
        SeriesPoint::stacked("b", 6.0, 3.0),
    ];
    let spec = AreaShapeSpec::new(&x, &y, Size::new(10.0, 100.0));

    let shape = spec.build(&data).unwrap();
    assert_close(shape.top[0].y, 40.0);
    assert_close(shape.top[1].y, 60.0);

    let stacked = spec.with_layout(AreaLayout::Stacked).build(&data);
    assert_eq!(
        stacked.unwrap_err(),
        GeometryError::NonFiniteValue { index: 0 }
    );
}
