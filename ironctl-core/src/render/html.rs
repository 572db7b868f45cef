//! HTML rendering
//!
//! Cards use a small inline stylesheet; the responsive grid is plain CSS
//! media queries at the `Breakpoints::CSS` widths.

use std::fmt::Write;

use crate::dashboard::Breakpoints;
use crate::page::Page;
use crate::widgets::{MetricTile, ScheduleEntry, Widget};

/// Full HTML document wrapping the page fragment
pub fn document(page: &Page) -> String {
    let title = escape(page.title);
    let style = stylesheet(Breakpoints::CSS);
    let body = fragment(page);
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{title}</title>
    <style>
{style}    </style>
</head>
<body>
{body}</body>
</html>
"#
    )
}

/// The `<main>` element: heading, label, and the widget grid
pub fn fragment(page: &Page) -> String {
    let mut out = String::new();
    out.push_str("<main class=\"page\">\n");
    out.push_str("    <div class=\"page-header\">\n");
    let _ = writeln!(out, "        <h1>{}</h1>", escape(page.title));
    let _ = writeln!(out, "        <div class=\"page-label\">{}</div>", escape(page.label));
    out.push_str("    </div>\n");
    out.push_str("    <div class=\"dashboard-grid\">\n");
    for widget in page.widgets() {
        render_widget(&mut out, &widget);
    }
    out.push_str("    </div>\n");
    out.push_str("</main>\n");
    out
}

fn render_widget(out: &mut String, widget: &Widget) {
    let _ = writeln!(
        out,
        "        <section class=\"card\" data-widget=\"{}\">",
        widget.kind().as_str()
    );
    let _ = writeln!(out, "            <h3>{}</h3>", escape(widget.title()));
    match widget {
        Widget::Status { message, .. } => {
            let _ = writeln!(out, "            <p class=\"status-message\">{}</p>", escape(message));
        }
        Widget::Schedule { entries, .. } => {
            out.push_str("            <ul class=\"schedule\">\n");
            for entry in entries.iter() {
                render_schedule_entry(out, entry);
            }
            out.push_str("            </ul>\n");
        }
        Widget::Impact { tiles, .. } => {
            out.push_str("            <div class=\"tiles\">\n");
            for tile in tiles.iter() {
                render_tile(out, tile);
            }
            out.push_str("            </div>\n");
        }
    }
    out.push_str("        </section>\n");
}

fn render_schedule_entry(out: &mut String, entry: &ScheduleEntry) {
    let _ = writeln!(
        out,
        "                <li><span class=\"time\">{}</span><span class=\"label\">{}</span></li>",
        escape(entry.time),
        escape(entry.label)
    );
}

fn render_tile(out: &mut String, tile: &MetricTile) {
    let _ = writeln!(
        out,
        "                <div class=\"tile tile-{}\"><p class=\"tile-label\">{}</p><p class=\"tile-value\">{}</p></div>",
        tile.accent.css_name(),
        escape(tile.label),
        escape(tile.value)
    );
}

fn stylesheet(bp: Breakpoints) -> String {
    format!(
        r#"        body {{ margin: 0; font-family: system-ui, sans-serif; background: #f9fafb; color: #111827; }}
        .page {{ display: flex; flex-direction: column; min-height: 100vh; padding: 1.5rem; box-sizing: border-box; }}
        .page-header {{ display: flex; align-items: center; justify-content: space-between; margin-bottom: 2rem; }}
        .page-header h1 {{ font-size: 1.875rem; margin: 0; }}
        .page-label {{ font-size: 0.875rem; color: #6b7280; }}
        .dashboard-grid {{ display: grid; gap: 1.5rem; padding: 1rem; grid-template-columns: 1fr; }}
        @media (min-width: {medium}px) {{ .dashboard-grid {{ grid-template-columns: repeat(2, 1fr); }} }}
        @media (min-width: {wide}px) {{ .dashboard-grid {{ grid-template-columns: repeat(3, 1fr); }} }}
        .card {{ border: 1px solid #e5e7eb; border-radius: 0.75rem; background: #fff; padding: 1.5rem; }}
        .card h3 {{ font-size: 1.125rem; font-weight: 500; margin: 0 0 1rem; }}
        .status-message {{ color: #6b7280; margin: 0; }}
        .schedule {{ list-style: none; margin: 0; padding: 0; }}
        .schedule li {{ display: flex; justify-content: space-between; border-bottom: 1px solid #f3f4f6; padding-bottom: 0.5rem; margin-bottom: 1rem; font-size: 0.875rem; }}
        .schedule .label {{ font-weight: 500; }}
        .tiles {{ display: grid; grid-template-columns: repeat(2, 1fr); gap: 1rem; }}
        .tile {{ border-radius: 0.5rem; padding: 0.75rem; }}
        .tile p {{ margin: 0; }}
        .tile-label {{ font-size: 0.875rem; }}
        .tile-value {{ font-size: 1.5rem; font-weight: 700; margin-top: 0.25rem; }}
        .tile-blue {{ background: #eff6ff; color: #1d4ed8; }}
        .tile-green {{ background: #f0fdf4; color: #15803d; }}
"#,
        medium = bp.medium,
        wide = bp.wide
    )
}

/// Escape text for HTML element content and attribute values
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn positions(haystack: &str, needles: &[&str]) -> Vec<usize> {
        needles
            .iter()
            .map(|n| haystack.find(n).unwrap_or_else(|| panic!("missing {:?}", n)))
            .collect()
    }

    #[test]
    fn document_has_heading_and_label() {
        let html = document(&Page::new());
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Smart Ironing System</title>"));
        assert!(html.contains("<h1>Smart Ironing System</h1>"));
        assert!(html.contains("<div class=\"page-label\">Dashboard</div>"));
    }

    #[test]
    fn widgets_render_in_order() {
        let html = fragment(&Page::new());
        assert_eq!(html.matches("<section class=\"card\"").count(), 3);

        let pos = positions(
            &html,
            &[
                "data-widget=\"status\"",
                "data-widget=\"schedule\"",
                "data-widget=\"impact\"",
            ],
        );
        assert!(pos[0] < pos[1] && pos[1] < pos[2]);
    }

    #[test]
    fn widget_content() {
        let html = fragment(&Page::new());
        assert!(html.contains("<p class=\"status-message\">System is active</p>"));

        assert_eq!(html.matches("<li>").count(), 2);
        let pos = positions(&html, &["09:00 AM", "Start Ironing", "05:00 PM", "End Session"]);
        assert!(pos.windows(2).all(|w| w[0] < w[1]));

        assert_eq!(html.matches("class=\"tile tile-").count(), 2);
        let pos = positions(&html, &["Energy Saved", "12%", "Efficiency", "High"]);
        assert!(pos.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn responsive_grid_media_queries() {
        let html = document(&Page::new());
        assert!(html.contains("@media (min-width: 768px)"));
        assert!(html.contains("@media (min-width: 1024px)"));
    }

    #[test]
    fn escapes_markup() {
        assert_eq!(escape("a < b & \"c\""), "a &lt; b &amp; &quot;c&quot;");
        assert_eq!(escape("12%"), "12%");
    }
}
