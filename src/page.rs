//! HTML page composition: alert sections, service panels, and time labels

use chrono::{DateTime, Duration, Local};
use maud::{DOCTYPE, Markup, PreEscaped, html};

use crate::chart::{self, PLOT_HEIGHT, PLOT_WIDTH, RenderedChart};
use crate::loader::ServiceHistory;
use crate::model::Issue;

/// Minutes covered by one uptime sample
pub const SAMPLE_INTERVAL_MINUTES: i64 = 30;

/// Time labels depend on the viewer's clock, not collection time, so they
/// carry this uncertainty. Shown in the page footer.
pub const TIME_DISCLAIMER: &str =
    "Note: Time displayed has a ±30 minutes margin and only serves as a reference.";

const STYLE: &str = "\
body { font-family: system-ui, sans-serif; margin: 0; background: #fafafa; color: #111; }
main { max-width: 56rem; margin: 0 auto; padding: 2rem; }
h1 { font-size: 2rem; margin-bottom: 2rem; }
.alerts { display: grid; gap: 0.75rem; margin: 2rem 0; }
.alert { border: 1px solid; border-radius: 0.5rem; padding: 1rem; display: flex; gap: 0.75rem; }
.alert-warning { background: #fefce8; border-color: #fef08a; color: #713f12; }
.alert-error { background: #fef2f2; border-color: #fecaca; color: #7f1d1d; }
.alert-info { background: #eff6ff; border-color: #bfdbfe; color: #1e3a8a; }
.grid { display: grid; gap: 1.5rem; grid-template-columns: repeat(auto-fit, minmax(20rem, 1fr)); }
.panel { border: 1px solid #e5e7eb; border-radius: 0.5rem; padding: 1.5rem; background: #fff; }
.panel-header { display: flex; justify-content: space-between; margin-bottom: 1rem; }
.panel-header h2 { font-size: 1.5rem; margin: 0; }
.badge { padding: 0.25rem 0.75rem; border-radius: 9999px; font-size: 0.875rem; align-self: start; }
.badge-up { background: #dcfce7; color: #166534; }
.badge-degraded { background: #fef9c3; color: #854d0e; }
.badge-down { background: #fee2e2; color: #991b1b; }
.chart-row { display: flex; gap: 0.5rem; }
.y-labels { display: flex; flex-direction: column; justify-content: space-between; font-size: 0.75rem; color: #6b7280; text-align: right; width: 2rem; height: 6rem; }
.plot { flex: 1; border-left: 1px solid #d1d5db; border-bottom: 1px solid #d1d5db; height: 6rem; }
.plot svg { width: 100%; height: 100%; }
.time-labels { display: flex; justify-content: space-between; font-size: 0.75rem; color: #6b7280; margin-top: 0.5rem; }
.time-labels span { text-align: center; }
footer { margin-top: 2rem; font-size: 0.75rem; color: #6b7280; }
";

/// Approximate wall-clock label for each sample, 30 minutes apart,
/// counting back from `now` so the last sample reads as current.
pub fn time_labels(count: usize, now: DateTime<Local>) -> Vec<String> {
    (0..count)
        .map(|index| {
            let minutes_ago = (count - 1 - index) as i64 * SAMPLE_INTERVAL_MINUTES;
            let time = now - Duration::minutes(minutes_ago);
            time.format("%-I:%M %p").to_string()
        })
        .collect()
}

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

fn render_alert(issue: &Issue) -> Markup {
    html! {
        div class=(format!("alert {}", issue.severity.alert_class())) {
            span { (issue.severity.icon()) }
            p { (issue.message) }
        }
    }
}

fn render_chart_svg(chart: &RenderedChart) -> Markup {
    html! {
        svg viewBox=(format!("0 0 {} {}", PLOT_WIDTH, PLOT_HEIGHT)) xmlns="http://www.w3.org/2000/svg" {
            // Horizontal grid lines at 100 / 50 / 0
            @for grid_y in [10.0, 40.0, 70.0] {
                line x1="0" y1=(grid_y) x2=(PLOT_WIDTH) y2=(grid_y) stroke="#d1d5db" stroke-width="0.5" opacity="0.3" {}
            }
            @if chart.points.len() >= 2 {
                polyline points=(chart.polyline_points())
                    fill="none"
                    stroke=(chart.line_color)
                    stroke-width="2.5"
                    stroke-linecap="round"
                    stroke-linejoin="round" {}
            }
            @for point in &chart.points {
                @if point.latest {
                    // Halo ring anchoring "now"
                    circle cx=(point.point.x) cy=(point.point.y) r="6"
                        fill="none" stroke=(point.color) stroke-width="1.5" opacity="0.5" {}
                }
                circle cx=(point.point.x) cy=(point.point.y)
                    r=(if point.latest { "4" } else { "3.5" })
                    fill=(point.color) {}
            }
        }
    }
}

fn render_service_panel(service: &ServiceHistory, now: DateTime<Local>) -> Markup {
    let chart = chart::render(&service.series);
    let labels = time_labels(service.series.len(), now);
    let label_width = 100.0 / labels.len() as f64;

    html! {
        div class="panel" {
            div class="panel-header" {
                h2 { (capitalize(&service.name)) }
                span class=(format!("badge {}", chart.status.badge_class())) {
                    (chart.status.label())
                }
            }
            div class="chart-row" {
                div class="y-labels" {
                    span { "100" }
                    span { "50" }
                    span { "0" }
                }
                div style="flex: 1" {
                    div class="plot" {
                        (render_chart_svg(&chart))
                    }
                    div class="time-labels" {
                        @for label in &labels {
                            span style=(format!("width: {}%", label_width)) { (label) }
                        }
                    }
                }
            }
        }
    }
}

/// Compose the full dashboard page.
///
/// Issues not tied to an outage render above the service grid; outage
/// notices render below it.
pub fn render_page(
    services: &[ServiceHistory],
    issues: &[Issue],
    title: &str,
    now: DateTime<Local>,
) -> Markup {
    let top_issues: Vec<&Issue> = issues.iter().filter(|issue| !issue.down).collect();
    let down_issues: Vec<&Issue> = issues.iter().filter(|issue| issue.down).collect();

    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
                style { (PreEscaped(STYLE)) }
            }
            body {
                main {
                    h1 { (title) }
                    @if !top_issues.is_empty() {
                        div class="alerts" {
                            @for issue in &top_issues {
                                (render_alert(issue))
                            }
                        }
                    }
                    div class="grid" {
                        @for service in services {
                            (render_service_panel(service, now))
                        }
                    }
                    @if !down_issues.is_empty() {
                        div class="alerts" {
                            @for issue in &down_issues {
                                (render_alert(issue))
                            }
                        }
                    }
                    footer { (TIME_DISCLAIMER) }
                }
            }
        }
    }
}
