//! Usage and cost accounting
//!
//! Fixed per-backend linear pricing and the nominal token limit reported
//! to callers. The limit is advisory only and never enforced here.

use crate::models::{TokenUsage, UsageReport};
use crate::providers::BackendKind;

/// Linear price per token and nominal limit for one backend
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pricing {
    /// USD per input token
    pub input_rate: f64,
    /// USD per output token
    pub output_rate: f64,
    /// Nominal token limit shown as `usage.limit`
    pub nominal_limit: u64,
}

impl Pricing {
    /// Pricing table entry for a backend
    pub fn for_backend(kind: BackendKind) -> Self {
        match kind {
            BackendKind::OpenAI => Pricing {
                input_rate: 0.00003,
                output_rate: 0.00006,
                nominal_limit: 100_000,
            },
            BackendKind::Anthropic => Pricing {
                input_rate: 0.000003,
                output_rate: 0.000015,
                nominal_limit: 100_000,
            },
            BackendKind::Offline => Pricing {
                input_rate: 0.0,
                output_rate: 0.0,
                nominal_limit: 10,
            },
        }
    }

    /// Cost in USD of the given token counts
    pub fn cost(&self, usage: &TokenUsage) -> f64 {
        usage.input_tokens as f64 * self.input_rate + usage.output_tokens as f64 * self.output_rate
    }

    /// Usage report for the given token counts
    pub fn report(&self, usage: &TokenUsage) -> UsageReport {
        let current = usage.total();
        UsageReport {
            current,
            limit: self.nominal_limit,
            remaining: self.nominal_limit as i64 - current as i64,
            cost: self.cost(usage),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openai_cost() {
        let pricing = Pricing::for_backend(BackendKind::OpenAI);
        let report = pricing.report(&TokenUsage::new(1000, 500));

        assert_eq!(report.current, 1500);
        assert_eq!(report.limit, 100_000);
        assert_eq!(report.remaining, 98_500);
        assert!((report.cost - 0.06).abs() < 1e-12);
    }

    #[test]
    fn test_anthropic_cost() {
        let pricing = Pricing::for_backend(BackendKind::Anthropic);
        let cost = pricing.cost(&TokenUsage::new(1000, 1000));
        assert!((cost - 0.018).abs() < 1e-12);
    }

    #[test]
    fn test_offline_is_free() {
        let report = Pricing::for_backend(BackendKind::Offline).report(&TokenUsage::new(0, 1));
        assert_eq!(report.current, 1);
        assert_eq!(report.limit, 10);
        assert_eq!(report.remaining, 9);
        assert_eq!(report.cost, 0.0);
    }

    #[test]
    fn test_remaining_can_go_negative() {
        let report = Pricing::for_backend(BackendKind::OpenAI).report(&TokenUsage::new(90_000, 20_000));
        assert_eq!(report.remaining, -10_000);
    }
}
