//! Admin dashboard page.

use maud::{html, Markup};

use crate::models::dashboard::{
    Accent, ActivityItem, ApprovalPanel, CategoryPoint, CityPoint, DashboardView, Series,
    StatTile, TrendPoint,
};
use crate::views::charts::{self, Dataset};
use crate::views::page;

/// Render the full dashboard document.
pub fn render(view: &DashboardView) -> Markup {
    page(
        "Admin Dashboard",
        &view.viewer.username,
        html! {
            main {
                div {
                    h1 { "Admin Dashboard" }
                    p.subtitle { "Monitor platform performance and manage operations" }
                }
                @if let Some(notice) = &view.analytics_notice {
                    p.notice role="alert" { (notice) }
                }
                section.grid.grid-4 {
                    @for tile in &view.stats { (stat_tile(tile)) }
                }
                section.grid.grid-2 {
                    (trend_card(&view.monthly_trend))
                    (city_card(&view.city_performance))
                }
                section.grid.grid-2 {
                    (category_card(&view.category_performance))
                    (activity_card(&view.recent_activity))
                }
                section.grid.grid-2 {
                    (approval_card(&view.pending_vendors))
                    (approval_card(&view.pending_deals))
                }
                p.muted { "Generated " (view.generated_at.format("%Y-%m-%d %H:%M UTC").to_string()) }
            }
        },
    )
}

fn stat_tile(tile: &StatTile) -> Markup {
    html! {
        div.card.tile {
            p.tile-title { (tile.title) }
            p.tile-value data-accent=(tile.accent.css_class()) { (tile.value) }
            span.tile-change { (tile.change) " from last month" }
        }
    }
}

/// Card with a title, an optional sample-data badge and a chart body.
fn chart_card<T>(title: &str, series: &Series<T>, chart: Markup, datasets: &[Dataset]) -> Markup {
    html! {
        div.card {
            div.card-header {
                h2.card-title { (title) }
                @if series.is_sample() {
                    span.badge.badge-sample title="Live data is not available for this chart" {
                        "Sample data"
                    }
                }
            }
            (chart)
            (charts::legend(datasets))
        }
    }
}

fn trend_card(series: &Series<TrendPoint>) -> Markup {
    let labels: Vec<String> = series.points.iter().map(|p| p.month.clone()).collect();
    let datasets = [
        Dataset {
            label: "Users",
            accent: Accent::Primary,
            values: series.points.iter().map(|p| p.users).collect(),
        },
        Dataset {
            label: "Deals",
            accent: Accent::Success,
            values: series.points.iter().map(|p| p.deals).collect(),
        },
    ];
    chart_card(
        "Monthly Growth Trends",
        series,
        charts::line_chart(&labels, &datasets),
        &datasets,
    )
}

fn city_card(series: &Series<CityPoint>) -> Markup {
    let labels: Vec<String> = series.points.iter().map(|p| p.name.clone()).collect();
    let datasets = [
        Dataset {
            label: "Deals",
            accent: Accent::Success,
            values: series.points.iter().map(|p| p.deals).collect(),
        },
        Dataset {
            label: "Users",
            accent: Accent::Primary,
            values: series.points.iter().map(|p| p.users).collect(),
        },
    ];
    chart_card(
        "Top Cities Performance",
        series,
        charts::bar_chart(&labels, &datasets),
        &datasets,
    )
}

fn category_card(series: &Series<CategoryPoint>) -> Markup {
    let labels: Vec<String> = series.points.iter().map(|p| p.name.clone()).collect();
    let datasets = [
        Dataset {
            label: "Deals",
            accent: Accent::Success,
            values: series.points.iter().map(|p| p.deals).collect(),
        },
        Dataset {
            label: "Claims",
            accent: Accent::Warning,
            values: series.points.iter().map(|p| p.claims).collect(),
        },
    ];
    chart_card(
        "Category Performance",
        series,
        charts::stacked_area_chart(&labels, &datasets),
        &datasets,
    )
}

fn activity_card(items: &[ActivityItem]) -> Markup {
    html! {
        div.card {
            div.card-header { h2.card-title { "Recent Activity" } }
            @for item in items {
                div.activity {
                    span class=(format!("activity-dot {}", item.kind.accent().css_class())) {}
                    div {
                        p { strong { (item.title) } }
                        p.activity-detail { (item.description) }
                        p.activity-time { (item.time) }
                    }
                }
            }
        }
    }
}

fn approval_card(panel: &ApprovalPanel) -> Markup {
    html! {
        div.card {
            div.card-header {
                h2.card-title { (panel.title) }
                a.button href=(panel.view_all_href) { "View All" }
            }
            @if let Some(notice) = &panel.notice {
                p.notice role="alert" { (notice) }
            }
            @if panel.is_empty() {
                p.muted { (panel.empty_message) }
            } @else {
                @for row in &panel.rows {
                    div.row data-id=(row.id) {
                        div {
                            p { strong { (row.heading) } }
                            p.row-detail { (row.detail) }
                        }
                        span.badge { "Pending" }
                    }
                }
                @if let Some(label) = &panel.overflow_label {
                    p.overflow { (label) }
                }
            }
        }
    }
}
