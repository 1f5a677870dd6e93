// Markup components. Each takes plain values and returns an HTML fragment;
// empty collections render as an empty string.
use crate::domain::insight::ConfidenceLevel;
use crate::domain::kpi::KpiSet;
use std::fmt::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Info,
    Success,
    Warning,
    Error,
}

impl AlertKind {
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Info => "ℹ️",
            Self::Success => "✅",
            Self::Warning => "⚠️",
            Self::Error => "❌",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NavItem {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub badge: &'static str,
    pub page_key: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CapabilityPanel {
    pub icon: &'static str,
    pub title: &'static str,
    pub points: [(&'static str, &'static str); 3],
}

#[derive(Debug, Clone, PartialEq)]
pub struct SuccessTile {
    pub icon: &'static str,
    pub value: &'static str,
    pub label: &'static str,
    pub accent: &'static str,
}

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Escaped multi-line text. Literal `\n` sequences count as line breaks.
pub fn text_with_breaks(text: &str) -> String {
    escape_html(&text.replace("\\n", "\n"))
        .lines()
        .collect::<Vec<_>>()
        .join("<br>")
}

/// Plain lines as paragraphs, with "• " lines grouped into a list.
pub fn text_block(content: &str) -> String {
    let mut html = String::new();
    let mut in_list = false;
    for line in content.lines().map(str::trim).filter(|l| !l.is_empty()) {
        match line.strip_prefix('•') {
            Some(item) => {
                if !in_list {
                    html.push_str("<ul>");
                    in_list = true;
                }
                let _ = write!(html, "<li>{}</li>", escape_html(item.trim()));
            }
            None => {
                if in_list {
                    html.push_str("</ul>");
                    in_list = false;
                }
                let _ = write!(html, "<p>{}</p>", escape_html(line));
            }
        }
    }
    if in_list {
        html.push_str("</ul>");
    }
    html
}

pub fn page_header(title: &str, description: &str, icon: &str) -> String {
    format!(
        r#"<div class="app-header"><h1>{} {}</h1><p>{}</p></div>"#,
        escape_html(icon),
        escape_html(title),
        escape_html(description)
    )
}

pub fn section_header(title: &str, icon: &str) -> String {
    format!(
        r#"<div class="section-header"><h3>{} {}</h3></div>"#,
        escape_html(icon),
        escape_html(title)
    )
}

pub fn metric_card(title: &str, value: &str) -> String {
    format!(
        r#"<div class="metric-card"><h3>{}</h3><div class="metric-value">{}</div></div>"#,
        escape_html(title),
        escape_html(value)
    )
}

pub fn info_box(message: &str, kind: AlertKind) -> String {
    format!(
        r#"<div class="info-box {}">{} {}</div>"#,
        kind.css_class(),
        kind.icon(),
        escape_html(message)
    )
}

pub fn alert_banner(message: &str, kind: AlertKind, dismissible: bool) -> String {
    let close = if dismissible {
        r#"<button class="alert-close" onclick="this.parentElement.remove()" aria-label="Dismiss">×</button>"#
    } else {
        ""
    };
    format!(
        r#"<div class="alert-banner {}" role="alert"><span>{}</span>{}</div>"#,
        kind.css_class(),
        escape_html(message),
        close
    )
}

pub fn status_indicator(status: &str, text: Option<&str>) -> String {
    let class = match status.to_ascii_lowercase().as_str() {
        "success" => "status-success",
        "warning" => "status-warning",
        "error" => "status-error",
        _ => "status-neutral",
    };
    let label = match text {
        Some(t) => t.to_string(),
        None => {
            let mut chars = status.chars();
            chars
                .next()
                .map(|c| c.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect())
                .unwrap_or_default()
        }
    };
    format!(
        r#"<span class="status-indicator {}"></span>{}"#,
        class,
        escape_html(&label)
    )
}

/// KPI cards, four per row.
pub fn kpi_grid(kpis: &KpiSet) -> String {
    if kpis.is_empty() {
        return String::new();
    }

    let mut cards = String::new();
    for kpi in kpis.iter() {
        let (arrow, class) = if kpi.trend >= 0.0 {
            ("▲", "trend-up")
        } else {
            ("▼", "trend-down")
        };
        let _ = write!(
            cards,
            r#"<div class="kpi-card"><div class="kpi-icon">{}</div><div class="kpi-value">{}</div><div class="kpi-name">{}</div><div class="kpi-trend {}">{} {:+.1}%</div></div>"#,
            escape_html(&kpi.icon),
            escape_html(&kpi.value),
            escape_html(&kpi.name),
            class,
            arrow,
            kpi.trend
        );
    }
    format!(r#"<div class="kpi-grid">{}</div>"#, cards)
}

pub fn ai_insights_card(title: &str, insight: &str, confidence: Option<f64>, icon: &str) -> String {
    let badge = confidence
        .map(|score| {
            let level = ConfidenceLevel::from_score(score);
            format!(
                r#"<div class="confidence-badge" style="background: {};">{} Confidence</div>"#,
                level.color(),
                level.label()
            )
        })
        .unwrap_or_default();

    format!(
        r#"<div class="ai-insight-card"><div class="ai-insight-head"><div><span class="ai-icon">{}</span><h4>{}</h4></div>{}</div><div class="ai-insight-body">{}</div></div>"#,
        escape_html(icon),
        escape_html(title),
        badge,
        text_with_breaks(insight)
    )
}

pub fn ai_loading_spinner(message: &str) -> String {
    format!(
        r#"<div class="ai-spinner"><div class="ai-spinner-icons"><span class="spin">🤖</span><span class="pulse">🧠</span><span class="spin reverse">⚡</span></div><div class="ai-spinner-message">{}</div></div>"#,
        escape_html(message)
    )
}

/// Numbered recommendations.
pub fn ai_recommendation_list(recommendations: &[String], title: &str) -> String {
    if recommendations.is_empty() {
        return String::new();
    }

    let mut items = String::new();
    for (i, rec) in recommendations.iter().enumerate() {
        let _ = write!(
            items,
            r#"<div class="recommendation"><div class="recommendation-index">{}</div><div class="recommendation-text">{}</div></div>"#,
            i + 1,
            escape_html(rec)
        );
    }

    format!(
        r#"<div class="ai-recommendations"><h4><span>💡</span> {}</h4>{}</div>"#,
        escape_html(title),
        items
    )
}

const METRIC_ICONS: [&str; 8] = ["🎯", "📊", "⚡", "🚀", "🔍", "💡", "🎪", "🌟"];

pub fn ai_metrics_dashboard(metrics: &[(String, String)]) -> String {
    if metrics.is_empty() {
        return String::new();
    }

    let mut tiles = String::new();
    for (i, (name, value)) in metrics.iter().enumerate() {
        let _ = write!(
            tiles,
            r#"<div class="ai-metric-tile"><div class="ai-metric-icon">{}</div><div class="ai-metric-value">{}</div><div class="ai-metric-name">{}</div></div>"#,
            METRIC_ICONS[i % METRIC_ICONS.len()],
            escape_html(value),
            escape_html(name)
        );
    }
    format!(r#"<div class="ai-metrics">{}</div>"#, tiles)
}

pub fn ai_metric_card(title: &str, value: &str, description: &str, icon: &str) -> String {
    let description_html = if description.is_empty() {
        String::new()
    } else {
        format!(r#"<div class="ai-metric-card-desc">{}</div>"#, escape_html(description))
    };
    format!(
        r#"<div class="ai-metric-card"><div class="ai-metric-card-head"><span>{}</span><h4>{}</h4></div><div class="ai-metric-card-value">{}</div>{}</div>"#,
        escape_html(icon),
        escape_html(title),
        escape_html(value),
        description_html
    )
}

/// AI text under a titled box, or a warning when there is none.
pub fn format_ai_response(response: Option<&str>, title: &str) -> String {
    match response.filter(|r| !r.trim().is_empty()) {
        Some(text) => format!(
            r#"<h3>🤖 {}</h3><div class="ai-response">{}</div>"#,
            escape_html(title),
            text_with_breaks(text)
        ),
        None => info_box(
            &format!("No {} available at this time.", title.to_lowercase()),
            AlertKind::Warning,
        ),
    }
}

pub fn executive_summary_card(
    title: &str,
    content: &str,
    metrics: &[(String, String)],
    icon: &str,
) -> String {
    let metrics_html = if metrics.is_empty() {
        String::new()
    } else {
        let cards: String = metrics
            .iter()
            .map(|(name, value)| metric_card(name, value))
            .collect();
        format!(r#"<div class="summary-metrics">{}</div>"#, cards)
    };

    format!(
        r#"<div class="summary-card"><h3>{} {}</h3><div class="summary-content">{}</div>{}</div>"#,
        escape_html(icon),
        escape_html(title),
        text_block(content),
        metrics_html
    )
}

pub fn navigation_grid(items: &[NavItem]) -> String {
    if items.is_empty() {
        return String::new();
    }

    let mut cards = String::new();
    for item in items {
        let _ = write!(
            cards,
            r#"<div class="nav-card" data-page="{}"><div class="nav-icon">{}</div><h3>{}</h3><p>{}</p><span class="nav-badge">{}</span></div>"#,
            escape_html(item.page_key),
            item.icon,
            escape_html(item.title),
            escape_html(item.description),
            escape_html(item.badge)
        );
    }
    format!(r#"<div class="nav-grid">{}</div>"#, cards)
}

pub fn capability_panels(panels: &[CapabilityPanel]) -> String {
    if panels.is_empty() {
        return String::new();
    }

    let mut html = String::new();
    for panel in panels {
        let points: String = panel
            .points
            .iter()
            .map(|(label, text)| {
                format!(
                    "<div><strong>{}:</strong> {}</div>",
                    escape_html(label),
                    escape_html(text)
                )
            })
            .collect();
        let _ = write!(
            html,
            r#"<div class="capability-panel"><div class="capability-head"><div class="capability-icon">{}</div><h3>{}</h3></div><div class="capability-body">{}</div></div>"#,
            panel.icon,
            escape_html(panel.title),
            points
        );
    }
    format!(r#"<div class="capability-grid">{}</div>"#, html)
}

pub fn success_tiles(tiles: &[SuccessTile]) -> String {
    if tiles.is_empty() {
        return String::new();
    }

    let mut html = String::new();
    for tile in tiles {
        let _ = write!(
            html,
            r#"<div class="success-tile"><div class="success-icon" style="color: var({});">{}</div><div class="success-value">{}</div><div class="success-label">{}</div></div>"#,
            tile.accent,
            tile.icon,
            escape_html(tile.value),
            escape_html(tile.label)
        );
    }
    format!(r#"<div class="success-grid">{}</div>"#, html)
}

pub fn page_footer(year: i32) -> String {
    format!(
        r#"<footer class="page-footer"><p>🤖 Powered by <strong>Snowflake Cortex AISQL</strong></p><p>© {} AI-Enhanced Telco Network Optimization Suite</p></footer><div class="support-banner"><h3>🏆 Executive Support &amp; Consultation</h3><p>24/7 Executive Support • Strategic AI Consulting • Custom Analytics Development</p><p class="muted">Contact your dedicated success manager for personalized insights and strategic guidance</p></div>"#,
        year
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::kpi::{Kpi, KpiSet};

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<b>"R&D" 'ops'</b>"#),
            "&lt;b&gt;&quot;R&amp;D&quot; &#39;ops&#39;&lt;/b&gt;"
        );
    }

    #[test]
    fn test_empty_collections_render_nothing() {
        assert_eq!(kpi_grid(&KpiSet::default()), "");
        assert_eq!(ai_recommendation_list(&[], "AI Recommendations"), "");
        assert_eq!(ai_metrics_dashboard(&[]), "");
        assert_eq!(navigation_grid(&[]), "");
        assert_eq!(capability_panels(&[]), "");
        assert_eq!(success_tiles(&[]), "");
        assert_eq!(text_block(""), "");
    }

    #[test]
    fn test_summary_card_without_metrics_has_no_metric_cards() {
        let html = executive_summary_card("Summary", "Line one", &[], "📋");
        assert!(html.contains("<p>Line one</p>"));
        assert!(!html.contains("metric-card"));
    }

    #[test]
    fn test_recommendation_list_numbers_items() {
        let recs = vec!["Schedule maintenance".to_string(), "Plan <expansion>".to_string()];
        let html = ai_recommendation_list(&recs, "Risks");

        assert_eq!(html.matches(r#"class="recommendation""#).count(), 2);
        assert!(html.contains(r#"<div class="recommendation-index">2</div>"#));
        assert!(html.contains("Plan &lt;expansion&gt;"));
    }

    #[test]
    fn test_kpi_grid_renders_in_order_with_trend_direction() {
        let kpis = KpiSet::new(vec![
            Kpi::new("Network Uptime", "95.0%".to_string(), 2.1, "🟢"),
            Kpi::new("Risk Incidents", "3".to_string(), -8.3, "⚠️"),
        ]);
        let html = kpi_grid(&kpis);

        assert!(html.find("Network Uptime").unwrap() < html.find("Risk Incidents").unwrap());
        assert!(html.contains("▲ +2.1%"));
        assert!(html.contains("▼ -8.3%"));
    }

    #[test]
    fn test_info_box_icons_per_kind() {
        assert!(info_box("ok", AlertKind::Success).starts_with(r#"<div class="info-box success">✅"#));
        assert!(info_box("careful", AlertKind::Warning).contains("⚠️ careful"));
        assert!(info_box("bad", AlertKind::Error).contains("❌"));
        assert!(info_box("fyi", AlertKind::Info).contains("ℹ️"));
    }

    #[test]
    fn test_alert_banner_dismiss_button() {
        assert!(alert_banner("hi", AlertKind::Info, true).contains("alert-close"));
        assert!(!alert_banner("hi", AlertKind::Info, false).contains("alert-close"));
    }

    #[test]
    fn test_insights_card_confidence_badge() {
        assert!(ai_insights_card("T", "x", Some(0.92), "📊").contains("High Confidence"));
        assert!(ai_insights_card("T", "x", Some(0.7), "📊").contains("Medium Confidence"));
        assert!(!ai_insights_card("T", "x", None, "📊").contains("Confidence"));
    }

    #[test]
    fn test_insight_text_breaks_literal_newlines() {
        let html = ai_insights_card("T", "first\\nsecond\nthird", None, "🧠");
        assert!(html.contains("first<br>second<br>third"));
    }

    #[test]
    fn test_format_ai_response_without_text_warns() {
        let html = format_ai_response(None, "AI Insights");
        assert!(html.contains("No ai insights available at this time."));
        assert!(html.contains("info-box warning"));

        let html = format_ai_response(Some("   "), "Summary");
        assert!(html.contains("No summary available"));

        assert!(format_ai_response(Some("Healthy"), "Summary").contains("Healthy"));
    }

    #[test]
    fn test_text_block_groups_bullets() {
        let html = text_block("Intro\n• one\n• two\nOutro");
        assert_eq!(html, "<p>Intro</p><ul><li>one</li><li>two</li></ul><p>Outro</p>");
    }

    #[test]
    fn test_status_indicator_defaults() {
        assert!(status_indicator("SUCCESS", None).contains("status-success"));
        assert!(status_indicator("SUCCESS", None).ends_with("Success"));
        assert!(status_indicator("unknown", Some("Idle")).contains("status-neutral"));
    }

    #[test]
    fn test_summary_card_metrics_render_as_cards() {
        let metrics = vec![("ROI".to_string(), "+340%".to_string())];
        let html = executive_summary_card("Summary", "Body", &metrics, "🤖");
        assert!(html.contains(r#"<div class="metric-card"><h3>ROI</h3><div class="metric-value">+340%</div></div>"#));
    }

    #[test]
    fn test_metrics_dashboard_cycles_icons() {
        let metrics: Vec<(String, String)> =
            (0..9).map(|i| (format!("m{i}"), i.to_string())).collect();
        let html = ai_metrics_dashboard(&metrics);
        assert_eq!(html.matches("🎯").count(), 2);
    }
}
