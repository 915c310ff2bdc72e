use api::{ConditionResult, RiskLevel};
use dioxus::prelude::*;

/// CSS class for a risk bucket; unknown levels get no styling.
pub fn risk_class(level: RiskLevel) -> &'static str {
    match level {
        RiskLevel::Low => "risk-low",
        RiskLevel::Medium => "risk-medium",
        RiskLevel::High => "risk-high",
        RiskLevel::Unknown => "",
    }
}

/// Risk level with its confidence percentage, colored by bucket.
#[component]
pub fn RiskBadge(result: ConditionResult) -> Element {
    let class = risk_class(result.risk());
    rsx! {
        span {
            class: "{class}",
            "{result.risk_level} ({result.percent()}%)"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_risk_class_per_bucket() {
        assert_eq!(risk_class(RiskLevel::parse("High")), "risk-high");
        assert_eq!(risk_class(RiskLevel::parse("medium")), "risk-medium");
        assert_eq!(risk_class(RiskLevel::parse("LOW")), "risk-low");
        assert_eq!(risk_class(RiskLevel::parse("unheard-of")), "");
    }
}
