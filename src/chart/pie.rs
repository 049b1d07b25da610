use std::f64::consts::PI;

use svg::node::element::path::Data;
use svg::node::element::{Circle, Path, Rectangle};
use svg::Document;

use crate::config::ChartSettings;
use crate::error::{ExpenseError, ExpenseResult};

use super::{color, ensure_not_empty, label, Frame, Series, MARGIN_TOP};

const LEGEND_WIDTH: f64 = 220.0;

/// Share of the total per entry; zero entries get no slice
pub fn pie_chart(title: &str, series: &Series, size: &ChartSettings) -> ExpenseResult<Document> {
    ensure_not_empty(series)?;

    let total: f64 = series.iter().map(|(_, amount)| amount.to_f64()).sum();
    if total <= 0.0 {
        return Err(ExpenseError::Validation(
            "Nothing to plot: all amounts are zero".into(),
        ));
    }

    let frame = Frame::new(size);
    let area_width = (frame.width - LEGEND_WIDTH).max(frame.width / 2.0);
    let cx = area_width / 2.0;
    let cy = MARGIN_TOP + (frame.height - MARGIN_TOP) / 2.0;
    let radius = ((area_width.min(frame.height - MARGIN_TOP)) / 2.0 - 20.0).max(10.0);

    let slices: Vec<(usize, &str, f64)> = series
        .iter()
        .enumerate()
        .filter(|(_, (_, amount))| !amount.is_zero())
        .map(|(i, (name, amount))| (i, name.as_str(), amount.to_f64()))
        .collect();

    let mut document = frame.document(title);

    if let [(i, _, _)] = slices.as_slice() {
        document = document.add(
            Circle::new()
                .set("class", "slice")
                .set("cx", cx)
                .set("cy", cy)
                .set("r", radius)
                .set("fill", color(*i)),
        );
    } else {
        // Angles run clockwise from twelve o'clock
        let mut start = -PI / 2.0;
        for (i, _, value) in &slices {
            let sweep = value / total * 2.0 * PI;
            let end = start + sweep;
            let large_arc = if sweep > PI { 1.0 } else { 0.0 };

            let data = Data::new()
                .move_to((cx, cy))
                .line_to((cx + radius * start.cos(), cy + radius * start.sin()))
                .elliptical_arc_to(vec![
                    radius as f32,
                    radius as f32,
                    0.0,
                    large_arc as f32,
                    1.0,
                    (cx + radius * end.cos()) as f32,
                    (cy + radius * end.sin()) as f32,
                ])
                .close();

            document = document.add(
                Path::new()
                    .set("class", "slice")
                    .set("fill", color(*i))
                    .set("stroke", "white")
                    .set("stroke-width", 1)
                    .set("d", data),
            );
            start = end;
        }
    }

    let legend_x = area_width + 10.0;
    for (row, (i, name, value)) in slices.iter().enumerate() {
        let y = MARGIN_TOP + 20.0 + row as f64 * 22.0;
        document = document
            .add(
                Rectangle::new()
                    .set("x", legend_x)
                    .set("y", y - 11.0)
                    .set("width", 14)
                    .set("height", 14)
                    .set("fill", color(*i)),
            )
            .add(label(
                &format!("{} ({:.1}%)", name, value / total * 100.0),
                legend_x + 20.0,
                y,
                "start",
            ));
    }

    Ok(document)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::tests::series;

    #[test]
    fn test_one_slice_per_nonzero_entry() {
        let data = series(&[("Food", 2000), ("Free", 0), ("Bills", 6000)]);
        let svg = pie_chart("Share", &data, &ChartSettings::default())
            .unwrap()
            .to_string();

        assert_eq!(svg.matches("class=\"slice\"").count(), 2);
        assert!(svg.contains("Bills (75.0%)"));
        assert!(!svg.contains("Free"));
    }

    #[test]
    fn test_single_slice_is_full_circle() {
        let data = series(&[("Food", 2000)]);
        let svg = pie_chart("Share", &data, &ChartSettings::default())
            .unwrap()
            .to_string();

        assert!(svg.contains("<circle"));
        assert_eq!(svg.matches("class=\"slice\"").count(), 1);
    }

    #[test]
    fn test_all_zero_is_rejected() {
        let data = series(&[("Free", 0)]);
        let err = pie_chart("Share", &data, &ChartSettings::default()).unwrap_err();
        assert!(err.is_validation());
    }
}
