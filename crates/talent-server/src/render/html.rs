use talent_core::chart::{ChartSpec, LegendPosition};
use talent_core::dashboard::{DashboardView, FilterPanel, ServiceLineCard, TableSpec};
use talent_core::format::{AllocationRow, StatCard, TalentRow};

use super::{escape, render_chart};

pub const STYLESHEET_PATH: &str = "/assets/hub.css";

/// Render the full dashboard page.
pub fn render_page(view: &DashboardView) -> String {
    let mut body = String::new();
    body.push_str(&header(view));
    body.push_str(&filters(&view.filters));
    body.push_str(&command_center(&view.service_lines));
    body.push_str(&forecast(&view.forecast));
    body.push_str(&pipeline(view));
    body.push_str(&talent_explorer(&view.talent));

    format!(
        "<!DOCTYPE html>\n<html lang=\"en\"><head><meta charset=\"utf-8\">\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\
         <title>{title}</title><link rel=\"stylesheet\" href=\"{STYLESHEET_PATH}\"></head>\
         <body><main class=\"container\">{body}</main></body></html>\n",
        title = escape(&view.header.title),
    )
}

fn header(view: &DashboardView) -> String {
    format!(
        "<header class=\"page-header\"><h1>{}</h1><p class=\"muted\">{}</p></header>",
        escape(&view.header.title),
        escape(&view.header.subtitle)
    )
}

fn filters(panel: &FilterPanel) -> String {
    let mut out = String::from(
        "<form class=\"card filters\" method=\"get\" action=\"/\">\
         <span class=\"filter-label\">Service Line:</span>\
         <input type=\"hidden\" name=\"sl\" value=\"\">",
    );
    for opt in &panel.service_lines {
        out.push_str(&format!(
            "<label class=\"check\"><input type=\"checkbox\" name=\"sl\" value=\"{}\"{}> {}</label>",
            escape(&opt.value),
            if opt.selected { " checked" } else { "" },
            escape(&opt.label)
        ));
    }
    out.push_str("<span class=\"vr\"></span><span class=\"filter-label\">Date Range:</span><select name=\"range\">");
    for opt in &panel.ranges {
        out.push_str(&format!(
            "<option value=\"{}\"{}>{}</option>",
            escape(&opt.value),
            if opt.selected { " selected" } else { "" },
            escape(&opt.label)
        ));
    }
    out.push_str("</select><button type=\"submit\">Apply</button></form>");
    out
}

fn command_center(cards: &[ServiceLineCard]) -> String {
    let mut out = String::from("<section class=\"grid grid-4 command-center\">");
    if cards.is_empty() {
        out.push_str("<p class=\"muted\">No service lines selected.</p>");
    }
    for card in cards {
        out.push_str(&format!(
            "<article class=\"card lift service-line\" data-code=\"{}\"><h2>{}</h2><p class=\"muted small\">{}</p>{}{}</article>",
            escape(&card.code),
            escape(&card.name),
            escape(&card.full_name),
            render_chart(&card.chart),
            legend(&card.chart)
        ));
    }
    out.push_str("</section>");
    out
}

fn legend(chart: &ChartSpec) -> String {
    if chart.legend == LegendPosition::Hidden {
        return String::new();
    }
    let mut out = String::from("<ul class=\"legend\">");
    for s in &chart.segments {
        out.push_str(&format!(
            "<li><span class=\"swatch\" style=\"background:{}\"></span>{}</li>",
            escape(&s.color),
            escape(&s.label)
        ));
    }
    out.push_str("</ul>");
    out
}

fn forecast(cards: &[StatCard]) -> String {
    let mut out = String::from("<section class=\"grid grid-3 forecast\">");
    for card in cards {
        out.push_str(&format!(
            "<article class=\"card lift stat\" data-window=\"{}\"><p class=\"stat-label\">{}</p><p class=\"stat-value text-{}\">{}</p></article>",
            card.window,
            escape(&card.label),
            card.tone,
            card.value
        ));
    }
    out.push_str("</section>");
    out
}

fn pipeline(view: &DashboardView) -> String {
    let range = view
        .filters
        .ranges
        .iter()
        .find(|r| r.selected)
        .map(|r| r.label.to_lowercase())
        .unwrap_or_else(|| "last 30 days".to_string());

    format!(
        "<section class=\"grid pipeline\">\
         <article class=\"card funnel\"><h3>Bench Candidate Interview Funnel</h3>\
         <p class=\"muted small\">Internal mobility pipeline.</p>{}</article>\
         <article class=\"card allocations\"><h3>Recent Allocations</h3>\
         <p class=\"muted small\">Successful placements in the {}.</p>{}</article>\
         </section>",
        render_chart(&view.funnel),
        escape(&range),
        allocation_table(&view.allocations)
    )
}

fn table_head(headers: &[String]) -> String {
    let mut out = String::from("<thead><tr>");
    for h in headers {
        out.push_str(&format!("<th>{}</th>", escape(h)));
    }
    out.push_str("</tr></thead>");
    out
}

fn allocation_table(table: &TableSpec<AllocationRow>) -> String {
    let mut out = String::from("<table class=\"table striped\">");
    out.push_str(&table_head(&table.headers));
    out.push_str("<tbody>");
    for row in &table.rows {
        out.push_str("<tr>");
        for cell in row.cells() {
            out.push_str(&format!("<td>{}</td>", escape(&cell)));
        }
        out.push_str("</tr>");
    }
    out.push_str("</tbody></table>");
    out
}

fn talent_explorer(table: &TableSpec<TalentRow>) -> String {
    let mut out = String::from(
        "<section class=\"card talent\"><h3>Talent Pool Explorer</h3><table class=\"table\">",
    );
    out.push_str(&table_head(&table.headers));
    out.push_str("<tbody>");
    for row in &table.rows {
        out.push_str("<tr>");
        out.push_str(&format!(
            "<td><div class=\"strong\">{}</div><div class=\"muted\">{}</div></td>",
            escape(&row.profile.name),
            escape(&row.profile.detail)
        ));
        out.push_str(&format!(
            "<td><span class=\"status\"><span class=\"icon icon-{} text-{}\" aria-hidden=\"true\"></span> {}</span><div class=\"muted\">{}</div></td>",
            row.status.icon.as_str(),
            row.status.tone,
            escape(&row.status.label),
            escape(&row.status.secondary)
        ));
        out.push_str("<td>");
        for badge in &row.skills {
            out.push_str(&format!(
                "<span class=\"badge bg-{}\">{}</span>",
                badge.color,
                escape(&badge.text)
            ));
        }
        out.push_str("</td>");
        out.push_str(&format!(
            "<td><div class=\"strong\">{}</div>",
            escape(&row.availability.text)
        ));
        if let Some(ref since) = row.availability.since {
            out.push_str(&format!("<div class=\"muted\">{}</div>", escape(since)));
        }
        out.push_str("</td>");
        out.push_str(&format!("<td>{}</td>", escape(&row.process)));
        out.push_str("</tr>");
    }
    out.push_str("</tbody></table></section>");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use talent_core::config::HubConfig;
    use talent_core::dashboard::HubContext;
    use talent_core::dataset::Dataset;
    use talent_core::filter::DashboardFilter;

    fn view(filter: DashboardFilter) -> DashboardView {
        let ctx = HubContext::new(Dataset::builtin().unwrap(), HubConfig::default()).unwrap();
        let today = NaiveDate::from_ymd_opt(2024, 7, 1).unwrap();
        DashboardView::build(&ctx, &filter, today).unwrap()
    }

    #[test]
    fn page_contains_every_section() {
        let html = render_page(&view(DashboardFilter::default()));
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("Internal Talent &amp; Bench Management Hub"));
        assert_eq!(html.matches("class=\"card lift service-line\"").count(), 4);
        assert_eq!(html.matches("class=\"card lift stat\"").count(), 3);
        assert!(html.contains("Bench Candidate Interview Funnel"));
        assert!(html.contains("On Bench → CVS"));
        assert!(html.contains("Talent Pool Explorer"));
        assert!(html.contains(STYLESHEET_PATH));
    }

    #[test]
    fn since_line_only_for_records_with_bench_date() {
        let html = render_page(&view(DashboardFilter::default()));
        assert_eq!(html.matches("Since: ").count(), 2);
        assert!(html.contains("Since: June 5"));
        assert!(html.contains("Since: May 20"));
    }

    #[test]
    fn status_cells_use_icons_and_client_text() {
        let html = render_page(&view(DashboardFilter::default()));
        assert_eq!(html.matches("icon-sofa").count(), 2);
        assert_eq!(html.matches("icon-briefcase").count(), 1);
        assert!(html.contains("(Ex: Walmart)"));
        assert!(html.contains("Client: United Health"));
    }

    #[test]
    fn badges_carry_palette_class() {
        let html = render_page(&view(DashboardFilter::default()));
        // "Java" has four chars -> danger
        assert!(html.contains("<span class=\"badge bg-danger\">Java</span>"));
    }

    #[test]
    fn filter_form_reflects_selection() {
        let filter = DashboardFilter::from_query(Some("cx"), Some("90")).unwrap();
        let html = render_page(&view(filter));
        assert!(html.contains("value=\"cx\" checked"));
        assert!(!html.contains("value=\"dpe\" checked"));
        assert!(html.contains("<option value=\"90\" selected>"));
        assert!(html.contains("Successful placements in the last quarter."));
        assert_eq!(html.matches("class=\"card lift service-line\"").count(), 1);
    }

    #[test]
    fn empty_selection_shows_placeholder() {
        let filter = DashboardFilter::from_query(Some(""), None).unwrap();
        let html = render_page(&view(filter));
        assert!(html.contains("No service lines selected."));
    }
}
