//! Plan price calculator.

use serde::Deserialize;

/// Monthly pricing, in whole currency units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Pricing {
    pub base_price: u32,
    pub price_per_collaborator: u32,
}

impl Default for Pricing {
    fn default() -> Self {
        Self {
            base_price: 25,
            price_per_collaborator: 10,
        }
    }
}

/// Collaborator counts and the resulting price.
///
/// Always computed from the current rows and invited users, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PlanSummary {
    pub new_collaborators: usize,
    pub existing_collaborators: usize,
    pub total_collaborators: usize,
    pub total_price: u64,
}

/// Heading shown above the price.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanLabel {
    /// Nothing beyond the trailing row has been added.
    Current,
    New,
}

impl PlanLabel {
    /// `row_count` is the number of email rows, including the trailing one.
    #[must_use]
    pub fn for_row_count(row_count: usize) -> Self {
        if row_count == 1 {
            Self::Current
        } else {
            Self::New
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Current => "YOUR CURRENT PLAN",
            Self::New => "YOUR NEW PLAN",
        }
    }
}

impl Pricing {
    #[must_use]
    pub fn summarize(&self, new_collaborators: usize, existing_collaborators: usize) -> PlanSummary {
        let total_collaborators = new_collaborators + existing_collaborators;
        let total_price = u64::from(self.base_price)
            + total_collaborators as u64 * u64::from(self.price_per_collaborator);

        PlanSummary {
            new_collaborators,
            existing_collaborators,
            total_collaborators,
            total_price,
        }
    }

    /// Text for the pricing help tooltip.
    #[must_use]
    pub fn tooltip(&self) -> String {
        format!(
            "Base price: ${}/mo + ${}/collaborator",
            self.base_price, self.price_per_collaborator
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_plan_costs_base_price() {
        let summary = Pricing::default().summarize(0, 0);
        assert_eq!(summary.total_collaborators, 0);
        assert_eq!(summary.total_price, 25);
    }

    #[test]
    fn each_collaborator_adds_ten() {
        let summary = Pricing::default().summarize(1, 0);
        assert_eq!(summary.total_price, 35);

        let summary = Pricing::default().summarize(0, 5);
        assert_eq!(summary.total_collaborators, 5);
        assert_eq!(summary.total_price, 75);
    }

    #[test]
    fn custom_pricing() {
        let pricing = Pricing {
            base_price: 0,
            price_per_collaborator: 7,
        };
        let summary = pricing.summarize(2, 1);
        assert_eq!(summary.total_collaborators, 3);
        assert_eq!(summary.total_price, 21);
    }

    #[test]
    fn plan_label_depends_on_row_count() {
        assert_eq!(PlanLabel::for_row_count(1), PlanLabel::Current);
        assert_eq!(PlanLabel::for_row_count(2), PlanLabel::New);
        assert_eq!(PlanLabel::Current.as_str(), "YOUR CURRENT PLAN");
    }

    #[test]
    fn tooltip_mentions_both_prices() {
        assert_eq!(
            Pricing::default().tooltip(),
            "Base price: $25/mo + $10/collaborator"
        );
    }

    #[test]
    fn partial_pricing_uses_defaults() {
        let pricing: Pricing = toml::from_str("base_price = 40").expect("should deserialize");
        assert_eq!(pricing.base_price, 40);
        assert_eq!(pricing.price_per_collaborator, 10);
    }
}
