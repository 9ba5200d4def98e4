//! Two-panel chart figure: per-class score histograms above a pie chart of
//! class proportions.

use crate::domain::model::{LabeledReview, SentimentClass};
use crate::presenter::svg::SvgDocument;
use std::collections::BTreeMap;

pub const FIGURE_WIDTH: f64 = 1000.0;
pub const FIGURE_HEIGHT: f64 = 1200.0;
pub const HISTOGRAM_BINS: usize = 10;
pub const PIE_COLORS: [&str; 4] = ["#ff9999", "#66b3ff", "#99ff99", "#ffcc99"];
pub const PIE_START_ANGLE: f64 = 140.0;

const HISTOGRAM_ALPHA: f64 = 0.5;
const PANEL_HEIGHT: f64 = FIGURE_HEIGHT / 2.0;
const MARGIN_LEFT: f64 = 90.0;
const MARGIN_RIGHT: f64 = 40.0;
const MARGIN_TOP: f64 = 70.0;
const MARGIN_BOTTOM: f64 = 80.0;
const PIE_RADIUS: f64 = 200.0;

/// Line colors for the histogram series, one per class.
fn series_color(class: SentimentClass) -> &'static str {
    match class {
        SentimentClass::HighlyPositive => "#1f77b4",
        SentimentClass::Positive => "#ff7f0e",
        SentimentClass::Neutral => "#2ca02c",
        SentimentClass::Negative => "#d62728",
        SentimentClass::HighlyNegative => "#9467bd",
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    pub class: SentimentClass,
    /// `HISTOGRAM_BINS + 1` ascending bin edges.
    pub edges: Vec<f64>,
    pub counts: Vec<usize>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    pub class: SentimentClass,
    pub count: usize,
    pub fraction: f64,
    pub color: &'static str,
    /// Degrees, counter-clockwise from the positive x axis.
    pub start_angle: f64,
    pub end_angle: f64,
}

fn scores_by_class(reviews: &[LabeledReview]) -> BTreeMap<SentimentClass, Vec<f64>> {
    let mut groups: BTreeMap<SentimentClass, Vec<f64>> = BTreeMap::new();
    for review in reviews {
        groups
            .entry(review.sentiment_class)
            .or_default()
            .push(review.sentiment_score);
    }
    groups
}

/// Bins `values` into `bins` equal-width buckets over their own range. The
/// last bucket is closed on the right. A single repeated value is binned over
/// `value ± 0.5`.
pub fn bin_values(values: &[f64], bins: usize) -> (Vec<f64>, Vec<usize>) {
    let mut counts = vec![0usize; bins];
    if values.is_empty() || bins == 0 {
        return (Vec::new(), counts);
    }

    let mut lo = values.iter().copied().fold(f64::INFINITY, f64::min);
    let mut hi = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if lo == hi {
        lo -= 0.5;
        hi += 0.5;
    }

    let width = (hi - lo) / bins as f64;
    let edges: Vec<f64> = (0..=bins).map(|i| lo + width * i as f64).collect();
    for value in values {
        let idx = (((value - lo) / width).floor() as usize).min(bins - 1);
        counts[idx] += 1;
    }
    (edges, counts)
}

/// One histogram per class present, in class order.
pub fn histograms(reviews: &[LabeledReview]) -> Vec<Histogram> {
    scores_by_class(reviews)
        .into_iter()
        .map(|(class, scores)| {
            let (edges, counts) = bin_values(&scores, HISTOGRAM_BINS);
            Histogram {
                class,
                edges,
                counts,
            }
        })
        .collect()
}

/// Pie slices ordered by descending count (ties keep class order), colored
/// by position from the fixed palette.
pub fn pie_slices(reviews: &[LabeledReview]) -> Vec<PieSlice> {
    let mut counts: Vec<(SentimentClass, usize)> = scores_by_class(reviews)
        .into_iter()
        .map(|(class, scores)| (class, scores.len()))
        .collect();
    counts.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));

    let total: usize = counts.iter().map(|(_, n)| n).sum();
    let mut angle = PIE_START_ANGLE;
    counts
        .into_iter()
        .enumerate()
        .map(|(i, (class, count))| {
            let fraction = count as f64 / total as f64;
            let start_angle = angle;
            angle += fraction * 360.0;
            PieSlice {
                class,
                count,
                fraction,
                color: PIE_COLORS[i % PIE_COLORS.len()],
                start_angle,
                end_angle: angle,
            }
        })
        .collect()
}

/// Renders the full two-panel figure as SVG.
pub fn render_figure(reviews: &[LabeledReview]) -> String {
    let mut doc = SvgDocument::new(FIGURE_WIDTH, FIGURE_HEIGHT);
    doc.rect(0.0, 0.0, FIGURE_WIDTH, FIGURE_HEIGHT, "white", 1.0);
    draw_histogram_panel(&mut doc, &histograms(reviews));
    draw_pie_panel(&mut doc, &pie_slices(reviews));
    doc.finish()
}

fn draw_histogram_panel(doc: &mut SvgDocument, series: &[Histogram]) {
    let plot_w = FIGURE_WIDTH - MARGIN_LEFT - MARGIN_RIGHT;
    let plot_h = PANEL_HEIGHT - MARGIN_TOP - MARGIN_BOTTOM;
    let (x0, y0) = (MARGIN_LEFT, MARGIN_TOP);

    let (mut x_min, mut x_max) = series
        .iter()
        .flat_map(|h| h.edges.iter().copied())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), e| (lo.min(e), hi.max(e)));
    if !x_min.is_finite() || !x_max.is_finite() {
        x_min = -1.0;
        x_max = 1.0;
    }
    let max_count = series
        .iter()
        .flat_map(|h| h.counts.iter().copied())
        .max()
        .unwrap_or(0)
        .max(1);
    let y_step = (max_count as f64 / 5.0).ceil().max(1.0) as usize;
    let y_top = (max_count.div_ceil(y_step) * y_step) as f64;

    let px = |x: f64| x0 + (x - x_min) / (x_max - x_min) * plot_w;
    let py = |count: f64| y0 + plot_h - count / y_top * plot_h;

    for h in series {
        let color = series_color(h.class);
        for (i, count) in h.counts.iter().enumerate() {
            if *count == 0 {
                continue;
            }
            let left = px(h.edges[i]);
            let right = px(h.edges[i + 1]);
            let top = py(*count as f64);
            doc.rect(left, top, right - left, y0 + plot_h - top, color, HISTOGRAM_ALPHA);
        }
    }

    // axes
    doc.line(x0, y0 + plot_h, x0 + plot_w, y0 + plot_h, "#333333");
    doc.line(x0, y0, x0, y0 + plot_h, "#333333");
    for i in 0..=4 {
        let value = x_min + (x_max - x_min) * i as f64 / 4.0;
        let x = px(value);
        doc.line(x, y0 + plot_h, x, y0 + plot_h + 6.0, "#333333");
        doc.text(x, y0 + plot_h + 24.0, 13.0, "middle", &format!("{:.2}", value));
    }
    let mut tick = 0;
    while tick as f64 <= y_top {
        let y = py(tick as f64);
        doc.line(x0 - 6.0, y, x0, y, "#333333");
        doc.text(x0 - 10.0, y + 4.0, 13.0, "end", &tick.to_string());
        tick += y_step;
    }

    doc.text(FIGURE_WIDTH / 2.0, 40.0, 20.0, "middle", "Score Distribution by Class");
    doc.text(x0 + plot_w / 2.0, PANEL_HEIGHT - 25.0, 15.0, "middle", "Sentiment score");
    doc.styled_text(
        25.0,
        y0 + plot_h / 2.0,
        15.0,
        "middle",
        "#222222",
        &format!(r#" transform="rotate(-90 25 {:.2})""#, y0 + plot_h / 2.0),
        "Count",
    );

    // legend
    let legend_x = x0 + plot_w - 170.0;
    for (i, h) in series.iter().enumerate() {
        let y = y0 + 12.0 + i as f64 * 22.0;
        doc.rect(legend_x, y, 16.0, 12.0, series_color(h.class), HISTOGRAM_ALPHA);
        doc.text(legend_x + 24.0, y + 11.0, 13.0, "start", h.class.label());
    }
}

fn point_on_circle(cx: f64, cy: f64, r: f64, degrees: f64) -> (f64, f64) {
    let rad = degrees.to_radians();
    (cx + r * rad.cos(), cy - r * rad.sin())
}

fn draw_pie_panel(doc: &mut SvgDocument, slices: &[PieSlice]) {
    let cx = FIGURE_WIDTH / 2.0;
    let cy = PANEL_HEIGHT + PANEL_HEIGHT / 2.0 + 20.0;

    doc.text(cx, PANEL_HEIGHT + 40.0, 20.0, "middle", "Sentiment Distribution");

    for slice in slices {
        if slice.count == 0 {
            continue;
        }
        let sweep = slice.end_angle - slice.start_angle;
        if sweep >= 359.999 {
            doc.circle(cx, cy, PIE_RADIUS, slice.color);
        } else {
            let (sx, sy) = point_on_circle(cx, cy, PIE_RADIUS, slice.start_angle);
            let (ex, ey) = point_on_circle(cx, cy, PIE_RADIUS, slice.end_angle);
            let large_arc = if sweep > 180.0 { 1 } else { 0 };
            // sweep-flag 0: counter-clockwise on screen
            let d = format!(
                "M {cx:.2} {cy:.2} L {sx:.2} {sy:.2} A {r:.2} {r:.2} 0 {large_arc} 0 {ex:.2} {ey:.2} Z",
                r = PIE_RADIUS
            );
            doc.path(&d, slice.color);
        }

        let mid = (slice.start_angle + slice.end_angle) / 2.0;
        let (lx, ly) = point_on_circle(cx, cy, PIE_RADIUS * 1.1, mid);
        let anchor = if mid.to_radians().cos() >= 0.0 { "start" } else { "end" };
        doc.text(lx, ly + 5.0, 15.0, anchor, slice.class.label());

        let (tx, ty) = point_on_circle(cx, cy, PIE_RADIUS * 0.6, mid);
        doc.text(tx, ty + 5.0, 14.0, "middle", &format!("{:.1}%", slice.fraction * 100.0));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn review(score: f64, class: SentimentClass) -> LabeledReview {
        LabeledReview {
            score: 5.0,
            text: "text".to_string(),
            sentiment_score: score,
            sentiment_class: class,
            subjectivity: 0.5,
        }
    }

    #[test]
    fn test_bin_values_spans_own_range() {
        let (edges, counts) = bin_values(&[0.0, 0.55, 1.0], 10);
        assert_eq!(edges.len(), 11);
        assert!((edges[0] - 0.0).abs() < 1e-12);
        assert!((edges[10] - 1.0).abs() < 1e-12);
        assert_eq!(counts.iter().sum::<usize>(), 3);
        assert_eq!(counts[0], 1);
        assert_eq!(counts[5], 1);
        // right edge lands in the last bin
        assert_eq!(counts[9], 1);
    }

    #[test]
    fn test_bin_values_single_value() {
        let (edges, counts) = bin_values(&[0.3, 0.3], 10);
        assert!((edges[0] - (-0.2)).abs() < 1e-12);
        assert!((edges[10] - 0.8).abs() < 1e-12);
        assert_eq!(counts.iter().sum::<usize>(), 2);
    }

    #[test]
    fn test_histograms_grouped_by_class() {
        let reviews = vec![
            review(0.9, SentimentClass::HighlyPositive),
            review(0.0, SentimentClass::Neutral),
            review(0.1, SentimentClass::Neutral),
            review(-0.7, SentimentClass::Negative),
        ];
        let hists = histograms(&reviews);
        let classes: Vec<SentimentClass> = hists.iter().map(|h| h.class).collect();
        assert_eq!(
            classes,
            vec![
                SentimentClass::HighlyPositive,
                SentimentClass::Neutral,
                SentimentClass::Negative
            ]
        );
        assert_eq!(hists[1].counts.iter().sum::<usize>(), 2);
    }

    #[test]
    fn test_pie_slices_order_and_colors() {
        let reviews = vec![
            review(0.0, SentimentClass::Neutral),
            review(0.9, SentimentClass::HighlyPositive),
            review(0.6, SentimentClass::Positive),
            review(0.7, SentimentClass::Positive),
            review(0.1, SentimentClass::Neutral),
            review(0.2, SentimentClass::Neutral),
        ];
        let slices = pie_slices(&reviews);

        assert_eq!(slices[0].class, SentimentClass::Neutral);
        assert_eq!(slices[1].class, SentimentClass::Positive);
        assert_eq!(slices[2].class, SentimentClass::HighlyPositive);
        assert_eq!(slices[0].color, "#ff9999");
        assert_eq!(slices[1].color, "#66b3ff");
        assert_eq!(slices[2].color, "#99ff99");

        assert!((slices[0].start_angle - 140.0).abs() < 1e-9);
        assert!((slices[0].end_angle - 320.0).abs() < 1e-9);
        assert!((slices[2].end_angle - 500.0).abs() < 1e-9);
        let total: f64 = slices.iter().map(|s| s.fraction).sum();
        assert!((total - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_render_figure_contains_panels() {
        let reviews = vec![
            review(0.9, SentimentClass::HighlyPositive),
            review(-0.5, SentimentClass::Negative),
        ];
        let svg = render_figure(&reviews);
        assert!(svg.contains("Score Distribution by Class"));
        assert!(svg.contains("Sentiment Distribution"));
        assert!(svg.contains("Sentiment score"));
        assert!(svg.contains("50.0%"));
        assert!(svg.contains("Highly positive"));
    }

    #[test]
    fn test_single_class_pie_is_full_circle() {
        let reviews = vec![review(0.0, SentimentClass::Neutral)];
        let svg = render_figure(&reviews);
        assert!(svg.contains("<circle"));
        assert!(svg.contains("100.0%"));
    }

    #[test]
    fn test_empty_figure_does_not_panic() {
        let svg = render_figure(&[]);
        assert!(svg.contains("Score Distribution by Class"));
    }
}
