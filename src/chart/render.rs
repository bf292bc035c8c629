use crate::{
    chart::{aggregate::SuccessReport, fonts},
    error::{GenError, Result},
};
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::path::{Path, PathBuf};

pub const CHART_TITLE: &str = "Success Rate by Content Type";
pub const X_AXIS_LABEL: &str = "Content Type";
pub const Y_AXIS_LABEL: &str = "Success Rate (%)";

const BAR_COLOR: RGBColor = RGBColor(135, 206, 235);
const ANNOTATION_OFFSET: f64 = 2.0;

fn chart_err<E: std::fmt::Display>(e: E) -> GenError {
    GenError::ChartError(e.to_string())
}

/// Draws a [`SuccessReport`] as a PNG bar chart, y-axis fixed to 0..100.
#[derive(Debug, Clone)]
pub struct ChartRenderer {
    width: u32,
    height: u32,
    font: Option<PathBuf>,
}

impl Default for ChartRenderer {
    fn default() -> Self {
        Self {
            width: 800,
            height: 400,
            font: None,
        }
    }
}

impl ChartRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_font(mut self, path: Option<PathBuf>) -> Self {
        self.font = path;
        self
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Computes the layout for `report` without drawing anything.
    pub fn layout(&self, report: &SuccessReport) -> ChartLayout {
        ChartLayout::from_report(report)
    }

    pub fn render(&self, report: &SuccessReport, path: &Path) -> Result<ChartLayout> {
        if !fonts::ensure_registered(self.font.as_deref()) {
            return Err(GenError::ChartError("no font available for chart labels".into()));
        }

        let layout = self.layout(report);
        let slots = layout.slots();

        let root = BitMapBackend::new(path, (self.width, self.height)).into_drawing_area();
        root.fill(&WHITE).map_err(chart_err)?;

        let mut chart = ChartBuilder::on(&root)
            .margin(20)
            .caption(CHART_TITLE, (fonts::CHART_FONT_FAMILY, 22))
            .x_label_area_size(45)
            .y_label_area_size(55)
            .build_cartesian_2d((0u32..slots).into_segmented(), 0f64..100f64)
            .map_err(chart_err)?;

        let label_for = |value: &SegmentValue<u32>| match value {
            SegmentValue::CenterOf(i) => layout
                .bars
                .get(*i as usize)
                .map(|bar| bar.label.clone())
                .unwrap_or_default(),
            _ => String::new(),
        };

        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_labels(slots as usize)
            .x_label_formatter(&label_for)
            .x_desc(X_AXIS_LABEL)
            .y_desc(Y_AXIS_LABEL)
            .label_style((fonts::CHART_FONT_FAMILY, 13))
            .axis_desc_style((fonts::CHART_FONT_FAMILY, 15))
            .draw()
            .map_err(chart_err)?;

        chart
            .draw_series(
                Histogram::vertical(&chart)
                    .margin(12)
                    .style(BAR_COLOR.filled())
                    .data(layout.bars.iter().enumerate().map(|(i, bar)| (i as u32, bar.rate))),
            )
            .map_err(chart_err)?;

        let annotation = (fonts::CHART_FONT_FAMILY, 13)
            .into_font()
            .color(&BLACK)
            .pos(Pos::new(HPos::Center, VPos::Bottom));

        chart
            .draw_series(layout.bars.iter().enumerate().map(|(i, bar)| {
                Text::new(
                    bar.annotation.clone(),
                    (SegmentValue::CenterOf(i as u32), bar.rate + ANNOTATION_OFFSET),
                    annotation.clone(),
                )
            }))
            .map_err(chart_err)?;

        root.present().map_err(chart_err)?;
        log::debug!("Rendered {} bar(s) to {}", layout.bars.len(), path.display());
        Ok(layout)
    }
}

/// One bar: x tick label, height in percent and the text drawn above it.
#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub label: String,
    pub rate: f64,
    pub annotation: String,
}

/// Bars in the order they are drawn, left to right.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChartLayout {
    pub bars: Vec<Bar>,
}

impl ChartLayout {
    pub fn from_report(report: &SuccessReport) -> Self {
        let bars = report
            .rates()
            .into_iter()
            .map(|(name, rate)| Bar {
                label: name.to_string(),
                rate,
                annotation: format!("{:.1}%", rate),
            })
            .collect();
        Self { bars }
    }

    /// Number of x slots. An empty chart still gets one blank slot so the
    /// axis has a range.
    pub fn slots(&self) -> u32 {
        self.bars.len().max(1) as u32
    }

    pub fn labels(&self) -> Vec<&str> {
        self.bars.iter().map(|bar| bar.label.as_str()).collect()
    }

    pub fn annotations(&self) -> Vec<&str> {
        self.bars.iter().map(|bar| bar.annotation.as_str()).collect()
    }
}
