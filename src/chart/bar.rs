use svg::node::element::Rectangle;
use svg::Document;

use crate::config::ChartSettings;
use crate::error::ExpenseResult;

use super::{color, ensure_not_empty, label, Frame, Series, MARGIN_LEFT};

/// One bar per entry, in series order
pub fn bar_chart(title: &str, series: &Series, size: &ChartSettings) -> ExpenseResult<Document> {
    ensure_not_empty(series)?;

    let frame = Frame::new(size);
    let max = series
        .iter()
        .map(|(_, amount)| amount.to_f64())
        .fold(0.0_f64, f64::max);
    let slot = frame.plot_width() / series.len() as f64;
    let bar_width = slot * 0.7;

    let mut document = frame.document(title);

    for (i, (name, amount)) in series.iter().enumerate() {
        let value = amount.to_f64();
        let height = if max > 0.0 {
            value / max * frame.plot_height()
        } else {
            0.0
        };
        let x = MARGIN_LEFT + slot * i as f64 + (slot - bar_width) / 2.0;
        let center = x + bar_width / 2.0;
        let top = frame.baseline() - height;

        document = document
            .add(
                Rectangle::new()
                    .set("class", "bar")
                    .set("x", x)
                    .set("y", top)
                    .set("width", bar_width)
                    .set("height", height)
                    .set("fill", color(i)),
            )
            .add(label(&amount.to_string(), center, top - 6.0, "middle"))
            .add(label(name, center, frame.baseline() + 20.0, "middle"));
    }

    Ok(document.add(frame.x_axis()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::tests::series;

    #[test]
    fn test_one_bar_per_entry() {
        let data = series(&[("Food", 2000), ("Transport", 2000), ("Bills", 150_000)]);
        let svg = bar_chart("By category", &data, &ChartSettings::default())
            .unwrap()
            .to_string();

        assert_eq!(svg.matches("class=\"bar\"").count(), 3);
        assert!(svg.contains("Transport"));
        assert!(svg.contains("1500.00"));
    }

    #[test]
    fn test_all_zero_amounts() {
        let data = series(&[("Free", 0)]);
        let svg = bar_chart("Zero", &data, &ChartSettings::default())
            .unwrap()
            .to_string();
        assert_eq!(svg.matches("class=\"bar\"").count(), 1);
    }
}
