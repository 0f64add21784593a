//! Weight Chart Component
//!
//! SVG line chart of the weight trend, drawn chronologically.

use leptos::prelude::*;

use crate::format::{kg, short_date};
use crate::models::{WeightEntry, WeightTrend};

const WIDTH: f64 = 500.0;
const HEIGHT: f64 = 200.0;
const PAD_X: f64 = 20.0;
const PAD_Y: f64 = 30.0;

/// Maps measurements to SVG coordinates
struct Scale {
    first_date: f64,
    last_date: f64,
    low: f64,
    high: f64,
}

impl Scale {
    fn new(trend: &WeightTrend) -> Option<Self> {
        let (first, last) = (trend.first_date?, trend.last_date?);
        let (min, max) = (trend.min_weight?, trend.max_weight?);
        // Pad the weight range so the line stays off the edges
        let buffer = match (max - min) * 0.1 {
            b if b > 0.0 => b,
            _ => 1.0,
        };
        Some(Self {
            first_date: first as f64,
            last_date: last as f64,
            low: min - buffer,
            high: max + buffer,
        })
    }

    fn x(&self, date: i64) -> f64 {
        if self.last_date == self.first_date {
            return WIDTH / 2.0;
        }
        PAD_X + (date as f64 - self.first_date) / (self.last_date - self.first_date) * (WIDTH - 2.0 * PAD_X)
    }

    fn y(&self, weight: f64) -> f64 {
        HEIGHT - (PAD_Y + (weight - self.low) / (self.high - self.low) * (HEIGHT - 2.0 * PAD_Y))
    }

    fn polyline(&self, points: &[WeightEntry]) -> String {
        points
            .iter()
            .map(|p| format!("{:.1},{:.1}", self.x(p.date), self.y(p.weight)))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Closed area under the line
    fn area(&self, points: &[WeightEntry]) -> String {
        let (Some(first), Some(last)) = (points.first(), points.last()) else {
            return String::new();
        };
        let base = HEIGHT - PAD_Y;
        let line: String = points
            .iter()
            .map(|p| format!(" L {:.1},{:.1}", self.x(p.date), self.y(p.weight)))
            .collect();
        format!(
            "M {:.1},{:.1}{} L {:.1},{:.1} Z",
            self.x(first.date),
            base,
            line,
            self.x(last.date),
            base
        )
    }
}

#[component]
pub fn WeightChart(#[prop(into)] trend: Signal<WeightTrend>) -> impl IntoView {
    move || {
        let trend = trend.get();
        let scale = Scale::new(&trend).filter(|_| trend.points.len() >= 2);
        let Some(scale) = scale else {
            return view! {
                <div class="weight-chart empty-state">
                    "Record at least two measurements to see your progress"
                </div>
            }
            .into_any();
        };

        let points = trend.points.clone();
        view! {
            <div class="weight-chart">
                <div class="chart-header">
                    <h3>"Weight history"</h3>
                    <span class="chart-max">{format!("Max: {}kg", kg(trend.max_weight.unwrap_or_default()))}</span>
                    <span class="chart-min">{format!("Min: {}kg", kg(trend.min_weight.unwrap_or_default()))}</span>
                </div>
                <svg viewBox=format!("0 0 {} {}", WIDTH, HEIGHT) class="chart-svg">
                    <line
                        class="chart-axis"
                        x1=PAD_X y1={HEIGHT - PAD_Y} x2={WIDTH - PAD_X} y2={HEIGHT - PAD_Y}
                    />
                    <path class="chart-area" d={scale.area(&points)} />
                    <polyline class="chart-line" points={scale.polyline(&points)} fill="none" />
                    {points.iter().map(|p| view! {
                        <circle class="chart-point" cx={scale.x(p.date)} cy={scale.y(p.weight)} r="4">
                            <title>{format!("{}kg", kg(p.weight))}</title>
                        </circle>
                    }).collect_view()}
                </svg>
                <div class="chart-dates">
                    <span>{trend.first_date.map(short_date)}</span>
                    <span>{trend.last_date.map(short_date)}</span>
                </div>
            </div>
        }
        .into_any()
    }
}
