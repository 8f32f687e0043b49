//! Impact Chart Component
//!
//! Projected impact per year, drawn as line series on an HTML5 canvas.

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::api::types::ChartData;
use crate::theme::{PRIMARY, SECONDARY, SUCCESS};

/// Chart colors for successive datasets
const SERIES_COLORS: [&str; 4] = [PRIMARY.main, SECONDARY.main, SUCCESS.main, PRIMARY.light];

/// Top of the y axis: the largest value rounded up to a 1-2-5 step
pub fn axis_max(data: &ChartData) -> f64 {
    let max = data
        .datasets
        .iter()
        .flat_map(|d| d.data.iter().copied())
        .fold(0.0_f64, f64::max);

    if max <= 0.0 {
        return 1.0;
    }

    let magnitude = 10_f64.powf(max.log10().floor());
    for step in [1.0, 2.0, 5.0, 10.0] {
        if max <= step * magnitude {
            return step * magnitude;
        }
    }
    10.0 * magnitude
}

#[component]
pub fn ImpactChart(
    #[prop(into)]
    data: Signal<ChartData>,
) -> impl IntoView {
    let canvas_ref = create_node_ref::<html::Canvas>();

    // Redraw whenever the data changes
    create_effect(move |_| {
        let data = data.get();
        if let Some(canvas) = canvas_ref.get() {
            draw_chart(&canvas, &data);
        }
    });

    view! {
        <div class="relative">
            <canvas
                node_ref=canvas_ref
                width="800"
                height="360"
                class="w-full h-64 md:h-80"
            />

            // Legend
            <div class="flex justify-center flex-wrap gap-4 mt-4">
                {move || {
                    data.get()
                        .datasets
                        .into_iter()
                        .enumerate()
                        .map(|(idx, dataset)| {
                            let color = SERIES_COLORS[idx % SERIES_COLORS.len()];
                            view! {
                                <div class="flex items-center space-x-2">
                                    <div
                                        class="w-3 h-3 rounded-full"
                                        style=format!("background-color: {}", color)
                                    />
                                    <span class="text-sm text-gray-600">{dataset.label}</span>
                                </div>
                            }
                        })
                        .collect_view()
                }}
            </div>
        </div>
    }
}

fn draw_chart(canvas: &HtmlCanvasElement, data: &ChartData) {
    let ctx = match canvas.get_context("2d") {
        Ok(Some(ctx)) => match ctx.dyn_into::<CanvasRenderingContext2d>() {
            Ok(ctx) => ctx,
            Err(_) => return,
        },
        _ => return,
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;

    let margin_left = 60.0;
    let margin_right = 20.0;
    let margin_top = 20.0;
    let margin_bottom = 40.0;

    let chart_width = width - margin_left - margin_right;
    let chart_height = height - margin_top - margin_bottom;

    ctx.set_fill_style(&"#ffffff".into());
    ctx.fill_rect(0.0, 0.0, width, height);

    if data.labels.is_empty() {
        ctx.set_fill_style(&"#6b7280".into());
        ctx.set_font("16px sans-serif");
        let _ = ctx.fill_text("No data", width / 2.0 - 30.0, height / 2.0);
        return;
    }

    let y_max = axis_max(data);
    let x_step = if data.labels.len() > 1 {
        chart_width / (data.labels.len() - 1) as f64
    } else {
        0.0
    };
    let x_at = |i: usize| margin_left + i as f64 * x_step;
    let y_at = |v: f64| margin_top + (1.0 - v / y_max) * chart_height;

    // Grid and y-axis labels
    ctx.set_stroke_style(&"#e5e7eb".into());
    ctx.set_line_width(1.0);
    ctx.set_font("12px sans-serif");
    for i in 0..=5 {
        let y = margin_top + (i as f64 / 5.0) * chart_height;
        ctx.begin_path();
        ctx.move_to(margin_left, y);
        ctx.line_to(width - margin_right, y);
        ctx.stroke();

        let value = y_max - (i as f64 / 5.0) * y_max;
        ctx.set_fill_style(&"#6b7280".into());
        let _ = ctx.fill_text(&format!("{:.0}", value), 5.0, y + 4.0);
    }

    // X-axis labels
    for (i, label) in data.labels.iter().enumerate() {
        let _ = ctx.fill_text(label, x_at(i) - 15.0, height - 10.0);
    }

    for (idx, dataset) in data.datasets.iter().enumerate() {
        if dataset.data.is_empty() {
            continue;
        }

        let color = SERIES_COLORS[idx % SERIES_COLORS.len()];
        ctx.set_stroke_style(&color.into());
        ctx.set_line_width(3.0);
        ctx.begin_path();

        for (i, value) in dataset.data.iter().enumerate() {
            if i == 0 {
                ctx.move_to(x_at(i), y_at(*value));
            } else {
                ctx.line_to(x_at(i), y_at(*value));
            }
        }
        ctx.stroke();

        ctx.set_fill_style(&color.into());
        for (i, value) in dataset.data.iter().enumerate() {
            ctx.begin_path();
            let _ = ctx.arc(x_at(i), y_at(*value), 4.0, 0.0, std::f64::consts::PI * 2.0);
            ctx.fill();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::ChartDataset;

    fn chart(values: Vec<f64>) -> ChartData {
        ChartData {
            labels: (0..values.len()).map(|i| (2025 + i).to_string()).collect(),
            datasets: vec![ChartDataset {
                label: "Youth Trained".into(),
                data: values,
            }],
        }
    }

    #[test]
    fn test_axis_max_rounds_up() {
        assert_eq!(axis_max(&chart(vec![500.0, 1800.0])), 2000.0);
        assert_eq!(axis_max(&chart(vec![3200.0])), 5000.0);
        assert_eq!(axis_max(&chart(vec![7000.0])), 10000.0);
        assert_eq!(axis_max(&chart(vec![100.0])), 100.0);
    }

    #[test]
    fn test_axis_max_empty() {
        assert_eq!(axis_max(&ChartData::default()), 1.0);
        assert_eq!(axis_max(&chart(vec![0.0, 0.0])), 1.0);
    }
}
