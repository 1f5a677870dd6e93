// Demo toggle, scoped to a single request
pub const BASELINE_SCENARIO: &str = "baseline";

#[derive(Debug, Clone, PartialEq)]
pub struct DemoState {
    pub current_scenario: String,
    pub demo_active: bool,
}

impl Default for DemoState {
    fn default() -> Self {
        Self {
            current_scenario: BASELINE_SCENARIO.to_string(),
            demo_active: false,
        }
    }
}

impl DemoState {
    /// Build from an optional `?demo=` request value. Blank values leave the demo off.
    pub fn from_request(scenario: Option<&str>) -> Self {
        match scenario.map(str::trim) {
            Some(s) if !s.is_empty() => Self {
                current_scenario: s.to_string(),
                demo_active: true,
            },
            _ => Self::default(),
        }
    }

    /// "network_outage" -> "Network Outage"
    pub fn scenario_title(&self) -> String {
        self.current_scenario
            .replace('_', " ")
            .split(' ')
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first
                        .to_uppercase()
                        .chain(chars.flat_map(char::to_lowercase))
                        .collect(),
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_inactive_baseline() {
        let state = DemoState::from_request(None);
        assert!(!state.demo_active);
        assert_eq!(state.current_scenario, "baseline");

        assert_eq!(DemoState::from_request(Some("  ")), DemoState::default());
    }

    #[test]
    fn test_scenario_title() {
        let state = DemoState::from_request(Some("network_OUTAGE"));
        assert!(state.demo_active);
        assert_eq!(state.scenario_title(), "Network Outage");
    }
}
