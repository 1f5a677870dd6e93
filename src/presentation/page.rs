// Dashboard page view-model and renderer
use crate::application::dashboard_service::DashboardData;
use crate::domain::demo::DemoState;
use crate::domain::insight::{AiResponse, ReportKind};
use crate::domain::kpi::{
    KpiSet, operational_signals, preview_capabilities, preview_kpis, preview_platform_metrics,
    summary_metrics,
};
use crate::presentation::components::{
    AlertKind, ai_insights_card, ai_loading_spinner, ai_metric_card, ai_metrics_dashboard,
    ai_recommendation_list, alert_banner, capability_panels, escape_html, executive_summary_card,
    format_ai_response, info_box, kpi_grid, navigation_grid, page_footer, page_header,
    section_header, status_indicator, success_tiles,
};
use crate::presentation::content::{
    APP_DESCRIPTION, APP_ICON, APP_TITLE, CAPABILITIES, NAVIGATION, REPORT_NEEDS_DATA,
    STYLESHEET, SUCCESS_METRICS, UNAVAILABLE_MESSAGE,
};
use chrono::Datelike;

#[derive(Debug, Clone, PartialEq)]
pub enum PageBody {
    Live {
        kpis: KpiSet,
        signals: Vec<(String, String)>,
        critical_issues: i64,
        summary: String,
        summary_metrics: Vec<(String, String)>,
    },
    /// Warehouse data is unavailable; fixed preview content is shown instead.
    Preview,
}

/// Outcome of an on-demand report request.
#[derive(Debug, Clone, PartialEq)]
pub enum ReportView {
    Insight {
        kind: ReportKind,
        response: Option<AiResponse>,
    },
    NeedsData,
    Invalid {
        message: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardPage {
    pub demo: DemoState,
    pub body: PageBody,
    pub report: Option<ReportView>,
    pub ai_degraded: bool,
    pub year: i32,
}

impl DashboardPage {
    pub fn build(
        demo: DemoState,
        data: &DashboardData,
        report: Option<ReportView>,
        ai_degraded: bool,
    ) -> Self {
        let body = match data.snapshot() {
            Some(snapshot) => PageBody::Live {
                kpis: snapshot.kpis.clone(),
                signals: operational_signals(&snapshot.network, &snapshot.customer),
                critical_issues: snapshot.network.critical_issues_or_zero(),
                summary: snapshot.summary.clone(),
                summary_metrics: summary_metrics(),
            },
            None => PageBody::Preview,
        };

        Self {
            demo,
            body,
            report,
            ai_degraded,
            year: chrono::Utc::now().year(),
        }
    }

    /// Full HTML document.
    pub fn render(&self) -> String {
        let mut html = page_header(APP_TITLE, APP_DESCRIPTION, APP_ICON);

        if self.demo.demo_active {
            html.push_str(&alert_banner(
                &format!(
                    "🎬 Executive Demo Active - Scenario: {}",
                    self.demo.scenario_title()
                ),
                AlertKind::Info,
                true,
            ));
        }

        match &self.body {
            PageBody::Live {
                kpis,
                signals,
                critical_issues,
                summary,
                summary_metrics,
            } => {
                html.push_str(&section_header("Executive Performance Dashboard", "🏆"));
                html.push_str(&kpi_grid(kpis));
                html.push_str(&ai_metrics_dashboard(signals));
                if *critical_issues == 0 {
                    html.push_str(&info_box(
                        "No critical network incidents in the reporting window.",
                        AlertKind::Success,
                    ));
                }
                html.push_str(r#"<div class="columns"><div>"#);
                html.push_str(&executive_summary_card(
                    "AI-Generated Executive Summary",
                    summary,
                    summary_metrics,
                    "🤖",
                ));
                html.push_str("</div><div>");
                html.push_str(&self.action_center());
                html.push_str("</div></div>");
            }
            PageBody::Preview => {
                html.push_str(&alert_banner(UNAVAILABLE_MESSAGE, AlertKind::Warning, false));
                html.push_str(&section_header("Executive Intelligence Preview", "🏆"));
                html.push_str(&kpi_grid(&preview_kpis()));
                html.push_str(&executive_summary_card(
                    "Executive AI Intelligence Platform",
                    &preview_capabilities(),
                    &preview_platform_metrics(),
                    "🏆",
                ));
                if let Some(report) = &self.report {
                    html.push_str(&render_report(report));
                }
            }
        }

        html.push_str(&section_header("Executive Intelligence Platform", "🚀"));
        html.push_str(&navigation_grid(&NAVIGATION));
        html.push_str(&section_header("Technology Excellence Platform", "⚡"));
        html.push_str(&capability_panels(&CAPABILITIES));
        html.push_str(&section_header("Executive Success Metrics", "📊"));
        html.push_str(&success_tiles(&SUCCESS_METRICS));
        html.push_str(&page_footer(self.year));

        document(APP_TITLE, &html)
    }

    fn action_center(&self) -> String {
        let mut html = section_header("Executive Action Center", "⚡");

        let (status, label, value, description) = if self.ai_degraded {
            (
                "warning",
                "AI services updating",
                "Degraded",
                "Fixed insights are shown until AI services return.",
            )
        } else {
            (
                "success",
                "AI services online",
                "Online",
                "Cortex AI_COMPLETE",
            )
        };
        html.push_str(&status_indicator(status, Some(label)));
        html.push_str(&ai_metric_card("AI Engine", value, description, "🤖"));

        for (kind, label) in [
            (ReportKind::StrategicReport, "📊 Generate Strategic Report"),
            (ReportKind::RiskAssessment, "🎯 AI Risk Assessment"),
        ] {
            html.push_str(&format!(
                r#"<a class="action-button" href="{}" onclick="document.getElementById('loading-{}').hidden = false">{}</a><div id="loading-{}" hidden>{}</div>"#,
                escape_html(&report_link(kind, &self.demo)),
                kind.slug(),
                label,
                kind.slug(),
                ai_loading_spinner(kind.loading_message())
            ));
        }

        if let Some(report) = &self.report {
            html.push_str(&render_report(report));
        }
        html
    }
}

/// Link that requests a report while keeping the demo scenario.
pub fn report_link(kind: ReportKind, demo: &DemoState) -> String {
    let mut link = format!("/?report={}", kind.slug());
    if demo.demo_active {
        link.push_str("&demo=");
        link.push_str(&urlencoding::encode(&demo.current_scenario));
    }
    link
}

pub fn render_report(view: &ReportView) -> String {
    match view {
        ReportView::Insight {
            kind,
            response: Some(response),
        } => match kind {
            ReportKind::StrategicReport => {
                ai_insights_card(kind.title(), &response.text, response.confidence, "📊")
            }
            ReportKind::RiskAssessment => ai_recommendation_list(&response.lines(), kind.title()),
            ReportKind::ExecutiveSummary => format_ai_response(Some(&response.text), kind.title()),
        },
        ReportView::Insight {
            kind,
            response: None,
        } => format_ai_response(None, kind.title()),
        ReportView::NeedsData => info_box(REPORT_NEEDS_DATA, AlertKind::Warning),
        ReportView::Invalid { message } => info_box(message, AlertKind::Error),
    }
}

fn document(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html><html lang="en"><head><meta charset="utf-8"><meta name="viewport" content="width=device-width, initial-scale=1"><title>{}</title><style>{}</style></head><body><main>{}</main></body></html>"#,
        escape_html(title),
        STYLESHEET,
        body
    )
}
