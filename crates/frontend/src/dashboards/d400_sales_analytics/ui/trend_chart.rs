use contracts::dashboards::d400_sales_analytics::TrendPoint;
use leptos::prelude::*;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::shared::number_format::format_money;

const CHART_WIDTH: f64 = 600.0;
const CHART_HEIGHT: f64 = 240.0;
/// Space under the plot for month labels
const LABEL_BAND: f64 = 24.0;
/// Share of each slot taken by its bar
const BAR_FILL: f64 = 0.6;

/// Geometry of one bar in chart coordinates
#[derive(Debug, Clone, PartialEq)]
pub struct ChartBar {
    pub label: String,
    pub value: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Lays out one bar per point, scaled to the largest revenue. An all-zero
/// window yields flat bars.
pub fn layout_bars(points: &[TrendPoint], width: f64, height: f64) -> Vec<ChartBar> {
    if points.is_empty() {
        return Vec::new();
    }

    let plot_height = height - LABEL_BAND;
    let slot = width / points.len() as f64;
    let max = points
        .iter()
        .map(|p| p.revenue)
        .max()
        .unwrap_or(Decimal::ZERO);

    points
        .iter()
        .enumerate()
        .map(|(i, point)| {
            let ratio = if max > Decimal::ZERO {
                (point.revenue / max).to_f64().unwrap_or(0.0)
            } else {
                0.0
            };
            let bar_height = plot_height * ratio;
            ChartBar {
                label: point.label().to_string(),
                value: format_money(point.revenue),
                x: i as f64 * slot + slot * (1.0 - BAR_FILL) / 2.0,
                y: plot_height - bar_height,
                width: slot * BAR_FILL,
                height: bar_height,
            }
        })
        .collect()
}

#[component]
pub fn TrendChart(#[prop(into)] points: Signal<Vec<TrendPoint>>) -> impl IntoView {
    let bars = Memo::new(move |_| points.with(|p| layout_bars(p, CHART_WIDTH, CHART_HEIGHT)));

    view! {
        <section class="dashboard-panel">
            <h2 class="dashboard-panel__title">"Revenue by month"</h2>
            <svg
                class="trend-chart"
                viewBox=format!("0 0 {} {}", CHART_WIDTH, CHART_HEIGHT)
                preserveAspectRatio="xMidYMid meet"
                role="img"
            >
                <line
                    class="trend-chart__axis"
                    x1="0"
                    y1={CHART_HEIGHT - LABEL_BAND}
                    x2=CHART_WIDTH
                    y2={CHART_HEIGHT - LABEL_BAND}
                />
                {move || bars.get().into_iter().map(|bar| {
                    let center = bar.x + bar.width / 2.0;
                    view! {
                        <g class="trend-chart__bar">
                            <rect x=bar.x y=bar.y width=bar.width height=bar.height rx="3">
                                <title>{format!("{}: {}", bar.label, bar.value)}</title>
                            </rect>
                            <text class="trend-chart__label" x=center y={CHART_HEIGHT - 6.0} text-anchor="middle">
                                {bar.label}
                            </text>
                        </g>
                    }
                }).collect_view()}
            </svg>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::dashboards::d400_sales_analytics::MonthBucket;

    fn point(month_index: u32, revenue: i64) -> TrendPoint {
        TrendPoint {
            bucket: MonthBucket::new(2024, month_index),
            revenue: Decimal::new(revenue, 0),
        }
    }

    #[test]
    fn test_tallest_bar_fills_plot() {
        let bars = layout_bars(&[point(0, 50), point(1, 100)], 200.0, 124.0);
        assert_eq!(bars.len(), 2);
        assert_eq!(bars[1].height, 100.0);
        assert_eq!(bars[1].y, 0.0);
        assert_eq!(bars[0].height, 50.0);
        assert_eq!(bars[0].y, 50.0);
        assert_eq!(bars[0].label, "Jan 2024");
        assert_eq!(bars[1].value, "$100.00");
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_bars_are_centred_in_slots() {
        let bars = layout_bars(&[point(0, 1), point(1, 1)], 200.0, 124.0);
        assert!(approx(bars[0].width, 60.0));
        assert!(approx(bars[0].x, 20.0));
        assert!(approx(bars[1].x, 120.0));
    }

    #[test]
    fn test_empty_window_is_flat() {
        let bars = layout_bars(&[point(0, 0), point(1, 0)], 200.0, 124.0);
        assert!(bars.iter().all(|b| b.height == 0.0 && b.y == 100.0));
        assert!(layout_bars(&[], 200.0, 124.0).is_empty());
    }
}
