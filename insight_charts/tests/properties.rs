// Copyright 2025 the Insight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property checks for generated scales.

use approx::assert_relative_eq;
use insight_charts::{
    Axis, AxisOrient, ChartOptions, ChartType, DomainValue, ScaleBuilder, Size, generate_scale,
};
use proptest::prelude::*;

fn labels(n: usize) -> Vec<DomainValue> {
    (0..n).map(|i| DomainValue::from(format!("c{i}"))).collect()
}

proptest! {
    #[test]
    fn band_positions_increase_with_equal_insets(n in 1_usize..40, width in 1.0_f64..2_000.0) {
        let values = labels(n);
        let s = generate_scale(
            Axis::X,
            &values,
            ChartOptions::new(ChartType::Column),
            Size::new(width, 10.0),
        )
        .unwrap();
        let bw = s.bandwidth().unwrap();

        let xs: Vec<f64> = values.iter().map(|v| s.map(v).unwrap()).collect();
        for pair in xs.windows(2) {
            prop_assert!(pair[0] < pair[1], "{pair:?}");
            prop_assert!(pair[0] + bw < pair[1], "bands overlap at {pair:?}");
        }

        let leading = xs[0];
        let trailing = width - (xs[n - 1] + bw);
        assert_relative_eq!(leading, trailing, epsilon = 1e-9, max_relative = 1e-9);
        prop_assert!(leading > 0.0);
    }

    #[test]
    fn linear_scale_maps_domain_ends_to_range_ends(
        a in -1e6_f64..1e6,
        b in -1e6_f64..1e6,
        height in 1.0_f64..2_000.0,
    ) {
        prop_assume!(a != b);
        let options = ChartOptions::new(ChartType::Area).with_y_orientation(AxisOrient::Left);
        let s = generate_scale(
            Axis::Y,
            &[DomainValue::Number(a), DomainValue::Number(b)],
            options,
            Size::new(10.0, height),
        )
        .unwrap();

        let (lo, hi) = (a.min(b), a.max(b));
        prop_assert_eq!(s.map_f64(lo), Some(0.0));
        prop_assert_eq!(s.map_f64(hi), Some(height));
    }

    #[test]
    fn orientation_picks_the_matching_extent(
        width in 1.0_f64..2_000.0,
        height in 1.0_f64..2_000.0,
        vertical in any::<bool>(),
    ) {
        let orient = if vertical { AxisOrient::Left } else { AxisOrient::Bottom };
        let options = ChartOptions::new(ChartType::Line).with_x_orientation(orient);
        let s = generate_scale(Axis::X, &labels(3), options, Size::new(width, height)).unwrap();
        let expected = if vertical { height } else { width };
        prop_assert_eq!(s.range(), (0.0, expected));
    }

    #[test]
    fn repeated_generation_is_stable(n in 1_usize..20, width in 1.0_f64..500.0) {
        let values = labels(n);
        let b = ScaleBuilder::new(
            Axis::X,
            values.clone(),
            ChartOptions::new(ChartType::Bar),
            Size::new(width, 10.0),
        )
        .unwrap();
        let first = b.generate();
        let second = b.generate();
        for v in &values {
            prop_assert_eq!(first.map(v), second.map(v));
        }
        prop_assert_eq!(first.bandwidth(), second.bandwidth());
    }
}
