//! Test Data Builders
//!
//! Provides a builder for claim inputs so tests only spell out the fields
//! that matter to them.

use domain_claims::{Agency, AgencyType, ClaimInput, DistributionChannel, ProductName};
use rust_decimal::Decimal;

use crate::fixtures::ClaimFixtures;

/// Builder for constructing claim inputs
pub struct ClaimInputBuilder {
    input: ClaimInput,
}

impl Default for ClaimInputBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ClaimInputBuilder {
    /// Starts from the basic plan fixture
    pub fn new() -> Self {
        Self {
            input: ClaimFixtures::basic_plan(),
        }
    }

    pub fn agency(mut self, agency: Agency) -> Self {
        self.input.agency = agency;
        self
    }

    pub fn agency_type(mut self, agency_type: AgencyType) -> Self {
        self.input.agency_type = agency_type;
        self
    }

    pub fn product(mut self, product: ProductName) -> Self {
        self.input.product_name = product;
        self
    }

    pub fn channel(mut self, channel: DistributionChannel) -> Self {
        self.input.channel = channel;
        self
    }

    pub fn net_sales(mut self, amount: Decimal) -> Self {
        self.input.net_sales = amount;
        self
    }

    pub fn commission(mut self, amount: Decimal) -> Self {
        self.input.commission = amount;
        self
    }

    pub fn profit(mut self, amount: Decimal) -> Self {
        self.input.profit = amount;
        self
    }

    pub fn age(mut self, age: u32) -> Self {
        self.input.age = age;
        self
    }

    pub fn duration_days(mut self, days: u32) -> Self {
        self.input.duration_days = days;
        self
    }

    pub fn build(self) -> ClaimInput {
        self.input
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_builder_overrides_only_given_fields() {
        let input = ClaimInputBuilder::new()
            .age(61)
            .channel(DistributionChannel::Offline)
            .profit(dec!(12.5))
            .build();

        assert_eq!(input.age, 61);
        assert_eq!(input.channel, DistributionChannel::Offline);
        assert_eq!(input.profit, dec!(12.5));
        assert_eq!(input.agency, Agency::Cbh);
        assert_eq!(input.duration_days, 10);
    }
}
