use svg::node::element::path::Data;
use svg::node::element::{Circle, Path};
use svg::Document;

use crate::config::ChartSettings;
use crate::error::ExpenseResult;

use super::{color, ensure_not_empty, label, Frame, Series, MARGIN_LEFT, MARGIN_TOP};

/// Trend line through the series in order, one marker per point
pub fn line_chart(title: &str, series: &Series, size: &ChartSettings) -> ExpenseResult<Document> {
    ensure_not_empty(series)?;

    let frame = Frame::new(size);
    let max = series
        .iter()
        .map(|(_, amount)| amount.to_f64())
        .fold(0.0_f64, f64::max);

    let step = if series.len() > 1 {
        frame.plot_width() / (series.len() - 1) as f64
    } else {
        0.0
    };
    let resize_x = |i: usize| {
        if series.len() > 1 {
            MARGIN_LEFT + step * i as f64
        } else {
            MARGIN_LEFT + frame.plot_width() / 2.0
        }
    };
    let resize_y = |value: f64| {
        if max > 0.0 {
            frame.baseline() - value / max * frame.plot_height()
        } else {
            frame.baseline()
        }
    };

    let points: Vec<(f64, f64)> = series
        .iter()
        .enumerate()
        .map(|(i, (_, amount))| (resize_x(i), resize_y(amount.to_f64())))
        .collect();

    let data = points
        .iter()
        .skip(1)
        .fold(Data::new().move_to(points[0]), |data, point| {
            data.line_to(*point)
        });

    let mut document = frame
        .document(title)
        .add(frame.y_axis())
        .add(frame.x_axis())
        .add(label(&format!("{:.2}", max), MARGIN_LEFT - 8.0, MARGIN_TOP + 4.0, "end"))
        .add(
            Path::new()
                .set("fill", "none")
                .set("stroke", color(0))
                .set("stroke-width", 2)
                .set("d", data),
        );

    for ((name, amount), (x, y)) in series.iter().zip(&points) {
        document = document
            .add(
                Circle::new()
                    .set("class", "point")
                    .set("cx", *x)
                    .set("cy", *y)
                    .set("r", 4)
                    .set("fill", color(0)),
            )
            .add(label(&amount.to_string(), *x, y - 10.0, "middle"))
            .add(label(name, *x, frame.baseline() + 20.0, "middle"));
    }

    Ok(document)
}
