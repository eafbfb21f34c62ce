//! Travel claim input record
//!
//! The categorical fields are closed catalogues. Each one parses from the
//! exact label used on the wire and fails with [`ClaimError::Domain`] for
//! anything else, so a `ClaimInput` can only hold in-domain categories.

use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ClaimError;

/// Accepted policyholder ages
pub const AGE_RANGE: RangeInclusive<u32> = 18..=100;

/// Accepted trip durations in days
pub const DURATION_RANGE: RangeInclusive<u32> = 1..=365;

macro_rules! catalog_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $field:literal {
            $($variant:ident => $label:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            /// Every member of the catalogue, in presentation order
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Returns the wire label
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = ClaimError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($label => Ok($name::$variant),)+
                    other => Err(ClaimError::domain($field, other)),
                }
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let label = String::deserialize(deserializer)?;
                label.parse().map_err(serde::de::Error::custom)
            }
        }
    };
}

catalog_enum! {
    /// Selling agency code
    Agency, "agency" {
        Cbh => "CBH",
        Cwt => "CWT",
        Jzi => "JZI",
        Kml => "KML",
        Epx => "EPX",
        C2b => "C2B",
        Jwt => "JWT",
        Rab => "RAB",
        Ssi => "SSI",
        Art => "ART",
        Csr => "CSR",
        Ccr => "CCR",
        Adm => "ADM",
        Lwc => "LWC",
        Ttw => "TTW",
        Tst => "TST",
    }
}

catalog_enum! {
    /// Kind of agency that sold the policy
    AgencyType, "agency_type" {
        Airlines => "Airlines",
        TravelAgency => "Travel Agency",
    }
}

catalog_enum! {
    /// Insurance product sold
    ProductName, "product_name" {
        ComprehensivePlan => "Comprehensive Plan",
        RentalVehicleExcessInsurance => "Rental Vehicle Excess Insurance",
        ValuePlan => "Value Plan",
        BasicPlan => "Basic Plan",
        PremierPlan => "Premier Plan",
        TwoWayComprehensivePlan => "2 way Comprehensive Plan",
        BronzePlan => "Bronze Plan",
        SilverPlan => "Silver Plan",
        AnnualSilverPlan => "Annual Silver Plan",
        CancellationPlan => "Cancellation Plan",
        OneWayComprehensivePlan => "1 way Comprehensive Plan",
        TicketProtector => "Ticket Protector",
        TwentyFourProtect => "24 Protect",
        GoldPlan => "Gold Plan",
        AnnualGoldPlan => "Annual Gold Plan",
        SingleTripTravelProtectSilver => "Single Trip Travel Protect Silver",
        IndividualComprehensivePlan => "Individual Comprehensive Plan",
        SpouseOrParentsComprehensivePlan => "Spouse or Parents Comprehensive Plan",
        AnnualTravelProtectSilver => "Annual Travel Protect Silver",
        SingleTripTravelProtectPlatinum => "Single Trip Travel Protect Platinum",
        AnnualTravelProtectGold => "Annual Travel Protect Gold",
        SingleTripTravelProtectGold => "Single Trip Travel Protect Gold",
        AnnualTravelProtectPlatinum => "Annual Travel Protect Platinum",
        ChildComprehensivePlan => "Child Comprehensive Plan",
        TravelCruiseProtect => "Travel Cruise Protect",
        TravelCruiseProtectFamily => "Travel Cruise Protect Family",
    }
}

catalog_enum! {
    /// Channel through which the policy was distributed
    DistributionChannel, "channel" {
        Online => "Online",
        Offline => "Offline",
    }
}

impl AgencyType {
    /// Binary code expected by the model: Travel Agency = 0, Airlines = 1
    pub fn code(&self) -> u8 {
        match self {
            AgencyType::TravelAgency => 0,
            AgencyType::Airlines => 1,
        }
    }
}

impl DistributionChannel {
    /// Binary code expected by the model: Online = 0, Offline = 1
    pub fn code(&self) -> u8 {
        match self {
            DistributionChannel::Online => 0,
            DistributionChannel::Offline => 1,
        }
    }
}

/// Raw attributes of a single travel-insurance claim
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimInput {
    pub agency: Agency,
    pub agency_type: AgencyType,
    pub product_name: ProductName,
    pub channel: DistributionChannel,
    pub net_sales: Decimal,
    pub commission: Decimal,
    pub profit: Decimal,
    pub age: u32,
    pub duration_days: u32,
}

impl ClaimInput {
    /// Checks every numeric field against its bounds
    ///
    /// Categorical fields are already in-domain by construction.
    pub fn validate(&self) -> Result<(), ClaimError> {
        for (field, amount) in [
            ("net_sales", self.net_sales),
            ("commission", self.commission),
            ("profit", self.profit),
        ] {
            if amount < Decimal::ZERO {
                return Err(ClaimError::domain(field, amount));
            }
        }

        if !AGE_RANGE.contains(&self.age) {
            return Err(ClaimError::domain("age", self.age));
        }

        if !DURATION_RANGE.contains(&self.duration_days) {
            return Err(ClaimError::domain("duration_days", self.duration_days));
        }

        Ok(())
    }
}

impl Default for ClaimInput {
    /// The initial selections of the claim entry form
    fn default() -> Self {
        Self {
            agency: Agency::Cbh,
            agency_type: AgencyType::Airlines,
            product_name: ProductName::ComprehensivePlan,
            channel: DistributionChannel::Online,
            net_sales: dec!(1000),
            commission: dec!(1000),
            profit: dec!(1000),
            age: 30,
            duration_days: 10,
        }
    }
}
