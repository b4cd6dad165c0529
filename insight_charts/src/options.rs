// Copyright 2025 the Insight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chart options consumed by scale construction and area geometry.

/// A width/height pair for the plotting viewport, in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    /// Width in pixels.
    pub width: f64,
    /// Height in pixels.
    pub height: f64,
}

impl Size {
    /// Creates a new size.
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Returns `true` if both dimensions are finite and non-negative.
    pub fn is_valid(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width >= 0.0 && self.height >= 0.0
    }
}

/// Chart type hint.
///
/// Only the distinction between rectangular marks and everything else matters here: it
/// decides whether an ordinal domain gets a band or a point scale.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ChartType {
    /// Vertical bars.
    Column,
    /// Horizontal bars.
    Bar,
    /// Bars combined with lines.
    Combination,
    /// Lines.
    Line,
    /// Filled areas.
    #[default]
    Area,
    /// Scatter points.
    Scatter,
    /// Any other chart type.
    Other,
}

impl ChartType {
    /// Parses a chart type name. Unknown names map to [`ChartType::Other`].
    pub fn parse(name: &str) -> Self {
        match name {
            "column" => Self::Column,
            "bar" => Self::Bar,
            "combination" => Self::Combination,
            "line" => Self::Line,
            "area" => Self::Area,
            "scatter" => Self::Scatter,
            _ => Self::Other,
        }
    }

    /// Returns `true` for chart types drawn with one rectangle per category.
    pub fn uses_bands(self) -> bool {
        matches!(self, Self::Column | Self::Bar | Self::Combination)
    }
}

/// Placement of an axis relative to the plot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AxisOrient {
    /// A horizontal axis placed above the plot area.
    Top,
    /// A horizontal axis placed below the plot area.
    #[default]
    Bottom,
    /// A vertical axis placed to the left of the plot area.
    Left,
    /// A vertical axis placed to the right of the plot area.
    Right,
}

impl AxisOrient {
    /// Parses an orientation name. Unknown names map to [`AxisOrient::Bottom`].
    pub fn parse(name: &str) -> Self {
        match name {
            "top" => Self::Top,
            "left" => Self::Left,
            "right" => Self::Right,
            _ => Self::Bottom,
        }
    }

    /// Returns `true` for `Left` and `Right`.
    pub fn is_vertical(self) -> bool {
        matches!(self, Self::Left | Self::Right)
    }

    /// Returns the viewport dimension a scale on this axis spans.
    pub fn extent(self, size: Size) -> f64 {
        if self.is_vertical() {
            size.height
        } else {
            size.width
        }
    }
}

/// Selects which axis options a scale reads.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    /// The category/independent axis.
    X,
    /// The value/dependent axis.
    Y,
}

/// Per-axis options.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AxisOptions {
    /// Axis placement.
    pub orientation: AxisOrient,
}

impl AxisOptions {
    /// Creates axis options with the given orientation.
    pub fn new(orientation: AxisOrient) -> Self {
        Self { orientation }
    }
}

/// Series layout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AreaLayout {
    /// Each series is drawn independently.
    #[default]
    Normal,
    /// Series are drawn cumulatively, each on the baseline (`y0`) left by the previous ones.
    Stacked,
}

impl AreaLayout {
    /// Parses a layout name. Only `"stacked"` selects [`AreaLayout::Stacked`].
    pub fn parse(name: &str) -> Self {
        if name == "stacked" {
            Self::Stacked
        } else {
            Self::Normal
        }
    }
}

/// Chart options shared by scale construction and area geometry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChartOptions {
    /// Chart type hint.
    pub chart_type: ChartType,
    /// Options for the x axis.
    pub axis_x: AxisOptions,
    /// Options for the y axis.
    pub axis_y: AxisOptions,
    /// Series layout.
    pub layout: AreaLayout,
    /// Whether area boundaries are smoothed with a spline.
    pub spline: bool,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            chart_type: ChartType::default(),
            axis_x: AxisOptions::new(AxisOrient::Bottom),
            axis_y: AxisOptions::new(AxisOrient::Left),
            layout: AreaLayout::Normal,
            spline: false,
        }
    }
}

impl ChartOptions {
    /// Creates options for a chart type with a bottom x axis and a left y axis.
    pub fn new(chart_type: ChartType) -> Self {
        Self {
            chart_type,
            ..Self::default()
        }
    }

    /// Sets the x axis orientation.
    pub fn with_x_orientation(mut self, orientation: AxisOrient) -> Self {
        self.axis_x = AxisOptions::new(orientation);
        self
    }

    /// Sets the y axis orientation.
    pub fn with_y_orientation(mut self, orientation: AxisOrient) -> Self {
        self.axis_y = AxisOptions::new(orientation);
        self
    }

    /// Sets the series layout.
    pub fn with_layout(mut self, layout: AreaLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Enables or disables spline smoothing.
    pub fn with_spline(mut self, spline: bool) -> Self {
        self.spline = spline;
        self
    }

    /// Returns the options of one axis.
    pub fn axis(&self, axis: Axis) -> AxisOptions {
        match axis {
            Axis::X => self.axis_x,
            Axis::Y => self.axis_y,
        }
    }
}
