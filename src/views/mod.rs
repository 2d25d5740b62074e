//! Server-side HTML rendering with maud.

pub mod charts;
pub mod dashboard;

use maud::{html, Markup, PreEscaped, DOCTYPE};

const STYLES: &str = r#"
:root { --primary: #2563eb; --success: #16a34a; --warning: #d97706; --royal: #7c3aed; }
* { box-sizing: border-box; }
body { margin: 0; font-family: system-ui, sans-serif; background: #f9fafb; color: #111827; }
header.navbar, footer { background: #fff; border-bottom: 1px solid #e5e7eb; padding: 1rem 2rem; }
footer { border-top: 1px solid #e5e7eb; border-bottom: none; color: #6b7280; font-size: .85rem; }
main { max-width: 80rem; margin: 0 auto; padding: 2rem; }
h1 { font-size: 1.9rem; margin: 0; }
.subtitle { color: #4b5563; margin-top: .25rem; }
.grid { display: grid; gap: 1.5rem; margin-bottom: 2rem; }
.grid-4 { grid-template-columns: repeat(auto-fit, minmax(14rem, 1fr)); }
.grid-2 { grid-template-columns: repeat(auto-fit, minmax(26rem, 1fr)); }
.card { background: #fff; border: 1px solid #e5e7eb; border-radius: .75rem; padding: 1.5rem; }
.card-header { display: flex; align-items: center; justify-content: space-between; margin-bottom: 1rem; }
.card-title { font-weight: 600; margin: 0; }
.tile-title { color: #6b7280; font-size: .9rem; margin: 0; }
.tile-value { font-size: 1.5rem; font-weight: 700; margin: .25rem 0; }
.tile-change { color: var(--success); font-size: .75rem; }
.badge { font-size: .7rem; padding: .15rem .5rem; border-radius: 999px; background: #f3f4f6; }
.badge-sample { background: #fef3c7; color: #92400e; }
.notice { background: #fef2f2; color: #991b1b; border-radius: .5rem; padding: .5rem .75rem; font-size: .85rem; }
.row { display: flex; justify-content: space-between; align-items: center; padding: .75rem; border: 1px solid #e5e7eb; border-radius: .5rem; margin-bottom: .75rem; }
.row-detail, .activity-detail { color: #6b7280; font-size: .85rem; margin: 0; }
.muted, .overflow { color: #6b7280; text-align: center; font-size: .85rem; }
.activity { display: flex; gap: .75rem; margin-bottom: 1rem; }
.activity-dot { width: .75rem; height: .75rem; border-radius: 999px; margin-top: .35rem; }
.activity-time { color: #9ca3af; font-size: .75rem; margin: .25rem 0 0; }
.button { border: 1px solid #d1d5db; border-radius: .4rem; padding: .25rem .75rem; font-size: .85rem; color: inherit; text-decoration: none; }
svg.chart { width: 100%; min-height: 300px; }
svg.chart .grid line { stroke: #e5e7eb; }
svg.chart .axis { fill: #6b7280; font-size: 10px; }
.legend { display: flex; gap: 1rem; list-style: none; padding: 0; justify-content: center; font-size: .85rem; }
.swatch { display: inline-block; width: .7rem; height: .7rem; border-radius: 2px; margin-right: .35rem; }
.accent-primary { fill: var(--primary); stroke: var(--primary); background: var(--primary); }
.accent-success { fill: var(--success); stroke: var(--success); background: var(--success); }
.accent-warning { fill: var(--warning); stroke: var(--warning); background: var(--warning); }
.accent-royal { fill: var(--royal); stroke: var(--royal); background: var(--royal); }
polygon.area { fill-opacity: .6; }
"#;

/// Full HTML document with the navbar and footer around `content`.
pub fn page(title: &str, username: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
                style { (PreEscaped(STYLES)) }
            }
            body {
                header.navbar {
                    strong { "Deals Admin" }
                    span.muted { " Signed in as " (username) }
                }
                (content)
                footer { "Platform administration console" }
            }
        }
    }
}
