//! Pre-built Test Fixtures
//!
//! Provides ready-to-use claims, schemas and models. These fixtures are
//! consistent and predictable for unit and API tests.

use std::path::PathBuf;
use std::sync::Arc;

use domain_claims::{Agency, AgencyType, ClaimInput, ClaimScorer, DistributionChannel, ProductName};
use infra_model::{load_model, ModelConfig, ScorecardClassifier};
use rust_decimal_macros::dec;

/// Fixture for claim inputs
pub struct ClaimFixtures;

impl ClaimFixtures {
    /// Travel-agency Basic Plan claim, 30 years old, 10 day trip
    pub fn basic_plan() -> ClaimInput {
        ClaimInput {
            agency: Agency::Cbh,
            agency_type: AgencyType::TravelAgency,
            product_name: ProductName::BasicPlan,
            channel: DistributionChannel::Online,
            net_sales: dec!(1000),
            commission: dec!(1000),
            profit: dec!(1000),
            age: 30,
            duration_days: 10,
        }
    }

    /// Airline-sold annual plan the sample model approves
    pub fn airline_annual_plan() -> ClaimInput {
        ClaimInput {
            agency: Agency::C2b,
            agency_type: AgencyType::Airlines,
            product_name: ProductName::AnnualSilverPlan,
            ..Self::basic_plan()
        }
    }

    /// JSON body for the basic plan claim, using wire labels
    pub fn basic_plan_json() -> serde_json::Value {
        serde_json::json!({
            "agency": "CBH",
            "agency_type": "Travel Agency",
            "product_name": "Basic Plan",
            "channel": "Online",
            "net_sales": 1000,
            "commission": 1000,
            "profit": 1000,
            "age": 30,
            "duration_days": 10
        })
    }
}

/// Fixture for feature schemas
pub struct SchemaFixtures;

impl SchemaFixtures {
    /// The thirteen-column layout of the sample model
    pub fn model_schema() -> Vec<String> {
        [
            "Agency",
            "AgencyType",
            "ProductName",
            "DistributionChannel",
            "Duration",
            "NetSales",
            "Commission",
            "Age",
            "Profit",
            "AgeGroup_Adult",
            "AgeGroup_AdultYoung",
            "AgeGroup_MidAge",
            "AgeGroup_Senior",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect()
    }
}

/// Fixture for the bundled sample model
pub struct ModelFixtures;

impl ModelFixtures {
    /// Path of the sample scorecard shipped with the workspace
    pub fn sample_model_path() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../models/travel_claims_scorecard.json")
    }

    /// Loads the sample scorecard
    ///
    /// # Panics
    ///
    /// Panics if the bundled artifact is missing or invalid
    pub fn sample_classifier() -> ScorecardClassifier {
        load_model(&ModelConfig::new(Self::sample_model_path()))
            .expect("bundled sample model should load")
    }

    /// Scorer backed by the sample scorecard
    pub fn sample_scorer() -> ClaimScorer {
        ClaimScorer::new(Arc::new(Self::sample_classifier()))
    }
}
