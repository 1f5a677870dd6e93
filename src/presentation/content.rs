// Fixed page content
use crate::presentation::components::{CapabilityPanel, NavItem, SuccessTile};

pub const APP_TITLE: &str = "Executive Telco Network Intelligence Suite";
pub const APP_ICON: &str = "🏆";
pub const APP_DESCRIPTION: &str = "AI-Powered Network Operations Command Center • Real-Time Analytics • Predictive Intelligence • Executive Insights";

pub const UNAVAILABLE_MESSAGE: &str = "⚠️ Network data synchronization in progress. Executive dashboard will be available momentarily.";
pub const REPORT_NEEDS_DATA: &str =
    "Reports need live network data. Please try again once synchronization completes.";

pub const NAVIGATION: [NavItem; 6] = [
    NavItem {
        title: "AI Customer Intelligence",
        description: "Advanced customer analytics with AI-powered churn prediction, sentiment analysis, and personalized retention strategies. Real-time customer experience optimization.",
        icon: "👥",
        badge: "AI POWERED",
        page_key: "Customer_Profile",
    },
    NavItem {
        title: "Network Performance Command",
        description: "Comprehensive cell tower monitoring with predictive failure analysis, capacity optimization, and automated performance enhancement recommendations.",
        icon: "📡",
        badge: "REAL-TIME",
        page_key: "Cell_Tower_Lookup",
    },
    NavItem {
        title: "Geospatial Intelligence",
        description: "Advanced geographic analysis with AI pattern recognition, coverage optimization, and location-based performance insights for strategic planning.",
        icon: "🗺️",
        badge: "GEO AI",
        page_key: "Geospatial_Analysis",
    },
    NavItem {
        title: "Executive AI Dashboard",
        description: "Real-time executive insights with automated reporting, strategic recommendations, and business impact analysis powered by advanced AI algorithms.",
        icon: "🎯",
        badge: "EXECUTIVE",
        page_key: "AI_Insights_and_Recommendations",
    },
    NavItem {
        title: "Predictive Analytics Suite",
        description: "Machine learning models for network forecasting, failure prediction, and capacity planning with 92% accuracy rate for proactive operations.",
        icon: "🔮",
        badge: "PREDICTIVE",
        page_key: "Predictive_Analytics",
    },
    NavItem {
        title: "Snowflake Intelligence",
        description: "Natural language querying, intelligent agents, and conversational analytics powered by Snowflake's advanced AI platform for instant insights.",
        icon: "🧠",
        badge: "NEXT-GEN",
        page_key: "Snowflake_Intelligence",
    },
];

pub const CAPABILITIES: [CapabilityPanel; 3] = [
    CapabilityPanel {
        icon: "❄️",
        title: "Snowflake Cortex AISQL",
        points: [
            ("✨ Advanced AI Models", "Claude 4, GPT-4.1, Mistral Large, Llama 3.3"),
            ("🎯 Specialized Functions", "AI_COMPLETE, AI_CLASSIFY, AI_SENTIMENT"),
            ("🚀 Performance", "Sub-second response times with enterprise scalability"),
        ],
    },
    CapabilityPanel {
        icon: "🧠",
        title: "AI Analytics Engine",
        points: [
            ("🔍 Pattern Recognition", "Hidden network anomalies and failure patterns"),
            ("📊 Predictive Models", "92% accuracy in failure prediction"),
            ("💡 Real-time Insights", "Instant analysis of streaming telemetry data"),
        ],
    },
    CapabilityPanel {
        icon: "💼",
        title: "Executive Intelligence",
        points: [
            ("📈 Business Impact", "Revenue protection and ROI optimization"),
            ("🎯 Strategic Planning", "AI-powered market and operational insights"),
            ("⚡ Decision Support", "Real-time executive dashboards and alerts"),
        ],
    },
];

pub const SUCCESS_METRICS: [SuccessTile; 4] = [
    SuccessTile {
        icon: "📈",
        value: "340%",
        label: "ROI Achieved",
        accent: "--success-color",
    },
    SuccessTile {
        icon: "⚡",
        value: "67%",
        label: "MTTR Reduction",
        accent: "--primary-color",
    },
    SuccessTile {
        icon: "🎯",
        value: "92%",
        label: "Prediction Accuracy",
        accent: "--secondary-color",
    },
    SuccessTile {
        icon: "💰",
        value: "$2.8M",
        label: "Revenue Protected",
        accent: "--warning-color",
    },
];

pub const STYLESHEET: &str = r#"
:root {
  --primary-color: #29b5e8;
  --secondary-color: #1e3a8a;
  --success-color: #28a745;
  --warning-color: #ffc107;
  --danger-color: #dc3545;
  --text-muted: #6c757d;
}
body { font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif; margin: 0; background: #f8fafc; color: #1f2937; }
main { max-width: 1280px; margin: 0 auto; padding: 1.5rem; }
.app-header { background: linear-gradient(135deg, var(--primary-color), var(--secondary-color)); color: #fff; padding: 2rem; border-radius: 12px; margin-bottom: 1.5rem; }
.section-header h3 { border-bottom: 2px solid var(--primary-color); padding-bottom: 0.5rem; }
.alert-banner, .info-box { padding: 1rem; border-radius: 8px; margin: 1rem 0; border-left: 4px solid var(--primary-color); background: #e8f6fd; }
.alert-banner.success, .info-box.success { border-color: var(--success-color); background: #e8f5e9; }
.alert-banner.warning, .info-box.warning { border-color: var(--warning-color); background: #fff8e1; }
.alert-banner.error, .info-box.error { border-color: var(--danger-color); background: #fdecea; }
.alert-banner { display: flex; justify-content: space-between; }
.alert-close { background: none; border: none; font-size: 1.2rem; cursor: pointer; }
.kpi-grid, .ai-metrics, .summary-metrics { display: grid; grid-template-columns: repeat(4, 1fr); gap: 1rem; margin: 1rem 0; }
.kpi-card, .metric-card, .ai-metric-tile, .ai-metric-card, .success-tile, .nav-card, .capability-panel { background: #fff; border-radius: 10px; padding: 1rem; box-shadow: 0 2px 6px rgba(0,0,0,0.08); }
.kpi-value, .metric-value, .ai-metric-value, .success-value { font-size: 1.6rem; font-weight: 700; }
.kpi-name, .ai-metric-name, .success-label { color: var(--text-muted); }
.trend-up { color: var(--success-color); }
.trend-down { color: var(--danger-color); }
.columns { display: grid; grid-template-columns: 2fr 1fr; gap: 1.5rem; }
.summary-card { background: #fff; border-radius: 12px; padding: 1.5rem; border-left: 4px solid var(--primary-color); }
.action-button { display: block; margin: 0.5rem 0; padding: 0.75rem; border-radius: 8px; text-align: center; background: var(--primary-color); color: #fff; text-decoration: none; font-weight: 600; }
.ai-insight-card { background: #fff; border-radius: 12px; padding: 1.5rem; margin: 1rem 0; border: 1px solid #e5e7eb; }
.ai-insight-head { display: flex; justify-content: space-between; align-items: center; }
.confidence-badge { color: #fff; padding: 0.25rem 0.75rem; border-radius: 12px; font-size: 0.8rem; }
.ai-spinner { text-align: center; padding: 1.5rem; }
.spin { display: inline-block; animation: spin 2s linear infinite; }
.spin.reverse { animation-direction: reverse; }
.pulse { display: inline-block; animation: pulse 1.5s ease-in-out infinite; }
@keyframes spin { to { transform: rotate(360deg); } }
@keyframes pulse { 50% { opacity: 0.4; } }
.recommendation { display: flex; gap: 0.75rem; margin: 0.5rem 0; }
.recommendation-index { background: var(--primary-color); color: #fff; border-radius: 50%; width: 1.6rem; height: 1.6rem; text-align: center; flex-shrink: 0; }
.status-indicator { display: inline-block; width: 10px; height: 10px; border-radius: 50%; margin-right: 0.4rem; background: var(--text-muted); }
.status-success { background: var(--success-color); }
.status-warning { background: var(--warning-color); }
.status-error { background: var(--danger-color); }
.nav-grid, .capability-grid { display: grid; grid-template-columns: repeat(3, 1fr); gap: 1rem; margin: 1rem 0; }
.nav-badge { background: var(--secondary-color); color: #fff; font-size: 0.7rem; padding: 0.2rem 0.5rem; border-radius: 6px; }
.success-grid { display: grid; grid-template-columns: repeat(4, 1fr); gap: 1rem; text-align: center; }
.page-footer, .support-banner { text-align: center; color: var(--text-muted); margin-top: 2rem; }
.muted { color: var(--text-muted); }
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::components::{capability_panels, navigation_grid};

    #[test]
    fn test_navigation_descriptions_render_in_full() {
        let html = navigation_grid(&NAVIGATION);

        assert!(html.contains(
            "<p>Advanced customer analytics with AI-powered churn prediction, sentiment analysis, and personalized retention strategies. Real-time customer experience optimization.</p>"
        ));
        assert!(html.contains("powered by Snowflake&#39;s advanced AI platform for instant insights."));
    }

    #[test]
    fn test_capability_points_keep_their_icons() {
        let html = capability_panels(&CAPABILITIES);

        assert!(html.contains(
            "<div><strong>✨ Advanced AI Models:</strong> Claude 4, GPT-4.1, Mistral Large, Llama 3.3</div>"
        ));
        assert!(html.contains(
            "<div><strong>⚡ Decision Support:</strong> Real-time executive dashboards and alerts</div>"
        ));
    }
}
