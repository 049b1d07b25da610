//! SVG charts of expense summaries
//!
//! Charts take plain `(label, amount)` series so they stay independent of the
//! store; callers flatten summaries with [`crate::reports::summary::to_series`].

mod bar;
mod line;
mod pie;

use std::path::Path;

use svg::node::element::{Line, Rectangle, Text};
use svg::Document;

use crate::config::ChartSettings;
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::Money;

pub use bar::bar_chart;
pub use line::line_chart;
pub use pie::pie_chart;

/// A labelled amount to plot
pub type Series = [(String, Money)];

const COLORS: &[&str] = &[
    "#4e79a7", "#f28e2b", "#e15759", "#76b7b2", "#59a14f", "#edc948", "#b07aa1", "#ff9da7",
    "#9c755f", "#bab0ac",
];

const MARGIN_LEFT: f64 = 80.0;
const MARGIN_RIGHT: f64 = 30.0;
const MARGIN_TOP: f64 = 60.0;
const MARGIN_BOTTOM: f64 = 70.0;

/// Write a chart to disk, creating parent directories
pub fn save(document: &Document, path: &Path) -> ExpenseResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| {
            ExpenseError::Chart(format!(
                "Failed to create chart directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    svg::save(path, document)
        .map_err(|e| ExpenseError::Chart(format!("Failed to write {}: {}", path.display(), e)))
}

fn ensure_not_empty(series: &Series) -> ExpenseResult<()> {
    if series.is_empty() {
        return Err(ExpenseError::Validation("Nothing to plot: no expenses".into()));
    }
    Ok(())
}

fn color(index: usize) -> &'static str {
    COLORS[index % COLORS.len()]
}

/// Plot area inside the margins
struct Frame {
    width: f64,
    height: f64,
}

impl Frame {
    fn new(size: &ChartSettings) -> Self {
        Self {
            width: f64::from(size.width),
            height: f64::from(size.height),
        }
    }

    fn plot_width(&self) -> f64 {
        (self.width - MARGIN_LEFT - MARGIN_RIGHT).max(1.0)
    }

    fn plot_height(&self) -> f64 {
        (self.height - MARGIN_TOP - MARGIN_BOTTOM).max(1.0)
    }

    /// Y coordinate of the x axis
    fn baseline(&self) -> f64 {
        MARGIN_TOP + self.plot_height()
    }

    fn x_axis(&self) -> Line {
        axis_line(MARGIN_LEFT, self.baseline(), MARGIN_LEFT + self.plot_width(), self.baseline())
    }

    fn y_axis(&self) -> Line {
        axis_line(MARGIN_LEFT, MARGIN_TOP, MARGIN_LEFT, self.baseline())
    }

    /// Blank canvas with a background and a centered title
    fn document(&self, title: &str) -> Document {
        Document::new()
            .set("width", self.width)
            .set("height", self.height)
            .set("viewBox", (0.0, 0.0, self.width, self.height))
            .add(
                Rectangle::new()
                    .set("width", "100%")
                    .set("height", "100%")
                    .set("fill", "white"),
            )
            .add(label(title, self.width / 2.0, MARGIN_TOP / 2.0, "middle").set("font-size", 18))
    }
}

fn axis_line(x1: f64, y1: f64, x2: f64, y2: f64) -> Line {
    Line::new()
        .set("x1", x1)
        .set("y1", y1)
        .set("x2", x2)
        .set("y2", y2)
        .set("stroke", "black")
        .set("stroke-width", 2)
}

fn label(content: &str, x: f64, y: f64, anchor: &str) -> Text {
    Text::new()
        .set("x", x)
        .set("y", y)
        .set("text-anchor", anchor)
        .set("font-family", "sans-serif")
        .set("font-size", 12)
        .add(svg::node::Text::new(escape(content)))
}

fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
