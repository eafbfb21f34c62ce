//! HTTP tests for the claim scoring API

use std::sync::Arc;

use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::{json, Value};

use domain_claims::ClaimScorer;
use interface_api::{config::ApiConfig, create_router};
use test_utils::{ClaimFixtures, FailingClassifier, FixedClassifier, ModelFixtures};

fn server_with(scorer: ClaimScorer) -> TestServer {
    TestServer::new(create_router(scorer, ApiConfig::default())).unwrap()
}

fn sample_server() -> TestServer {
    server_with(ModelFixtures::sample_scorer())
}

mod health {
    use super::*;

    #[tokio::test]
    async fn test_health_check() {
        let response = sample_server().get("/health").await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["status"], "healthy");
    }

    #[tokio::test]
    async fn test_readiness_with_model() {
        let response = sample_server().get("/health/ready").await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["status"], "ready");
    }

    #[tokio::test]
    async fn test_readiness_without_schema() {
        let scorer = ClaimScorer::new(Arc::new(FixedClassifier::with_schema(vec![], 0.9)));
        let response = server_with(scorer).get("/health/ready").await;

        response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn test_request_id_is_returned() {
        let response = sample_server().get("/health").await;
        assert!(response.headers().contains_key("x-request-id"));
    }
}

mod options {
    use super::*;

    #[tokio::test]
    async fn test_options_list_catalogues() {
        let response = sample_server().get("/api/v1/claims/options").await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["agencies"].as_array().unwrap().len(), 16);
        assert_eq!(body["products"].as_array().unwrap().len(), 26);
        assert_eq!(body["agency_types"], json!(["Airlines", "Travel Agency"]));
        assert_eq!(body["channels"], json!(["Online", "Offline"]));
    }

    #[tokio::test]
    async fn test_options_numeric_bounds() {
        let body: Value = sample_server().get("/api/v1/claims/options").await.json();

        assert_eq!(body["numeric"]["age"], json!({"min": 18, "max": 100, "default": 30}));
        assert_eq!(
            body["numeric"]["duration_days"],
            json!({"min": 1, "max": 365, "default": 10})
        );
    }
}

mod model {
    use super::*;

    #[tokio::test]
    async fn test_describe_model() {
        let body: Value = sample_server().get("/api/v1/model").await.json();

        assert_eq!(body["feature_names"].as_array().unwrap().len(), 13);
        assert_eq!(body["categorical_columns"], json!(["Agency", "ProductName"]));
        assert_eq!(body["approval_threshold"], json!(0.5));
    }
}

mod encode {
    use super::*;

    #[tokio::test]
    async fn test_encode_preview_follows_model_schema() {
        let response = sample_server()
            .post("/api/v1/claims/encode")
            .json(&ClaimFixtures::basic_plan_json())
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        let features = body["features"].as_object().unwrap();
        assert_eq!(features.len(), 13);
        assert_eq!(features["Agency"], json!("CBH"));
        assert_eq!(features["ProductName"], json!("Basic Plan"));
        assert_eq!(features["AgencyType"], json!(0.0));
        assert_eq!(features["DistributionChannel"], json!(0.0));
        assert_eq!(features["AgeGroup_AdultYoung"], json!(1.0));
        assert_eq!(features["AgeGroup_Adult"], json!(0.0));
        assert_eq!(body["categorical_columns"], json!(["Agency", "ProductName"]));
    }

    #[tokio::test]
    async fn test_encode_rejects_unknown_agency() {
        let mut claim = ClaimFixtures::basic_plan_json();
        claim["agency"] = json!("XYZ");

        let response = sample_server().post("/api/v1/claims/encode").json(&claim).await;

        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
        let body: Value = response.json();
        assert_eq!(body["error"], "validation_error");
        assert!(body["message"].as_str().unwrap().contains("agency"));
    }
}

mod predict {
    use super::*;

    #[tokio::test]
    async fn test_predict_basic_plan_is_rejected() {
        let response = sample_server()
            .post("/api/v1/claims/predict")
            .json(&ClaimFixtures::basic_plan_json())
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["decision"], "Rejected");
        assert!(body["message"].as_str().unwrap().contains("Possible Fraud"));
        assert!(body["scoring_id"].as_str().unwrap().starts_with("SCR-"));

        let p_approval = body["p_approval"].as_f64().unwrap();
        let p_rejection = body["p_rejection"].as_f64().unwrap();
        assert!((p_approval + p_rejection - 1.0).abs() < 1e-9);
        assert!(p_approval < 0.5);
    }

    #[tokio::test]
    async fn test_predict_at_threshold_is_approved() {
        let scorer = ClaimScorer::new(Arc::new(FixedClassifier::new(0.5)));
        let body: Value = server_with(scorer)
            .post("/api/v1/claims/predict")
            .json(&ClaimFixtures::basic_plan_json())
            .await
            .json();

        assert_eq!(body["decision"], "Approved");
        assert_eq!(body["message"], "Claim is likely to be Approved.");
    }

    #[tokio::test]
    async fn test_predict_validation_details() {
        let mut claim = ClaimFixtures::basic_plan_json();
        claim["age"] = json!(101);
        claim["net_sales"] = json!(-3);

        let response = sample_server().post("/api/v1/claims/predict").json(&claim).await;

        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
        let body: Value = response.json();
        let details: Vec<&str> = body["details"]
            .as_array()
            .unwrap()
            .iter()
            .filter_map(Value::as_str)
            .collect();
        assert!(details.iter().any(|d| d.starts_with("age")));
        assert!(details.iter().any(|d| d.starts_with("net_sales")));
    }

    #[tokio::test]
    async fn test_predict_missing_fields_is_json_bad_request() {
        let response = sample_server()
            .post("/api/v1/claims/predict")
            .json(&json!({"agency": "CBH", "age": 30}))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["error"], "bad_request");
        assert!(body["message"].as_str().unwrap().contains("missing field"));
    }

    #[tokio::test]
    async fn test_predict_non_json_body_is_json_bad_request() {
        let response = sample_server()
            .post("/api/v1/claims/predict")
            .text("agency=CBH")
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["error"], "bad_request");
    }

    #[tokio::test]
    async fn test_predict_propagates_classifier_failure() {
        let scorer = ClaimScorer::new(Arc::new(FailingClassifier::new("model evaluation failed")));
        let response = server_with(scorer)
            .post("/api/v1/claims/predict")
            .json(&ClaimFixtures::basic_plan_json())
            .await;

        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        let body: Value = response.json();
        assert_eq!(body["error"], "classifier_error");
        assert!(body["message"].as_str().unwrap().contains("model evaluation failed"));
    }

    #[tokio::test]
    async fn test_predict_sends_schema_aligned_vector() {
        let classifier = Arc::new(FixedClassifier::new(0.7));
        let scorer = ClaimScorer::new(classifier.clone());

        server_with(scorer)
            .post("/api/v1/claims/predict")
            .json(&ClaimFixtures::basic_plan_json())
            .await
            .assert_status_ok();

        let calls = classifier.calls();
        assert_eq!(calls.len(), 1);
        test_utils::assert_schema_aligned(&calls[0], &test_utils::SchemaFixtures::model_schema());
        test_utils::assert_categorical_feature(&calls[0], "Agency", "CBH");
        test_utils::assert_numeric_feature(&calls[0], "AgeGroup_AdultYoung", 1.0);
    }
}
