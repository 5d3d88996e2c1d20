//! JSON request handling shared by the HTTP lambda
//!
//! A request carries the plan inputs plus optional presentation settings:
//! ```json
//! {"income": [{"source": "salary", "frequency": "monthly", "amount": 10000}],
//!  "current_age": 30, "retirement_age": 60,
//!  "monthly_expenses": 6000, "retirement_goal": 2000000,
//!  "report": {"language": "en"}}
//! ```

use crate::plan::PlanInputs;
use crate::projection::project;
use crate::report::{Report, ReportConfig};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
pub struct ProjectionRequest {
    #[serde(flatten)]
    pub inputs: PlanInputs,
    #[serde(default)]
    pub report: ReportConfig,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

/// Status code plus JSON body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceResponse {
    pub status: u16,
    pub body: String,
}

impl ServiceResponse {
    fn error(status: u16, message: String) -> Self {
        let body = serde_json::to_string(&ErrorBody { error: message })
            .unwrap_or_else(|_| String::from("{\"error\":\"internal error\"}"));
        Self { status, body }
    }
}

/// Validate, project and report; invalid input yields a 400
pub fn handle_request(body: &[u8]) -> ServiceResponse {
    let request: ProjectionRequest = match serde_json::from_slice(body) {
        Ok(request) => request,
        Err(e) => {
            log::info!("Rejected projection request: {}", e);
            return ServiceResponse::error(400, e.to_string());
        }
    };

    let result = project(&request.inputs);
    log::info!(
        "Projected {} months, required monthly savings {:.2}",
        result.months_left,
        result.required_monthly_savings
    );
    let report = Report::build(result, &request.report);

    match serde_json::to_string(&report) {
        Ok(body) => ServiceResponse { status: 200, body },
        Err(e) => {
            log::error!("Failed to serialize report: {}", e);
            ServiceResponse::error(500, e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use serde_json::Value;

    #[test]
    fn test_valid_request() {
        let body = br#"{
            "income": [{"source": "salary", "frequency": "monthly", "amount": 10000}],
            "current_age": 30,
            "retirement_age": 60,
            "monthly_expenses": 6000,
            "retirement_goal": 2000000,
            "report": {"language": "en", "locales": ["C"]}
        }"#;
        let response = handle_request(body);
        assert_eq!(response.status, 200);

        let json: Value = serde_json::from_str(&response.body).unwrap();
        assert_eq!(json["summary"][0]["label"], "Total monthly income");
        assert_eq!(json["summary"][5]["value"], "ر.س 1,555.56");
        assert_eq!(json["chart"]["points"].as_array().unwrap().len(), 360);
        assert_eq!(json["chart"]["goal"], 2_000_000.0);
        assert_eq!(json["result"]["months_left"], 360);
        assert_abs_diff_eq!(
            json["result"]["required_monthly_savings"].as_f64().unwrap(),
            1_555.56,
            epsilon = 0.005
        );
    }

    #[test]
    fn test_defaults_to_arabic() {
        let body = br#"{"current_age": 60, "retirement_age": 61}"#;
        let response = handle_request(body);
        assert_eq!(response.status, 200);

        let json: Value = serde_json::from_str(&response.body).unwrap();
        assert_eq!(json["summary"][2]["value"], "60 سنة");
        assert_eq!(json["chart"]["points"].as_array().unwrap().len(), 12);
    }

    #[test]
    fn test_invalid_ages_rejected() {
        let body = br#"{"current_age": 60, "retirement_age": 50}"#;
        let response = handle_request(body);
        assert_eq!(response.status, 400);

        let json: Value = serde_json::from_str(&response.body).unwrap();
        assert!(json["error"].as_str().unwrap().contains("retirement age"));
    }

    #[test]
    fn test_oversized_ages_rejected() {
        let body = br#"{"current_age": 0, "retirement_age": 400000000}"#;
        let response = handle_request(body);
        assert_eq!(response.status, 400);
        assert!(response.body.contains("supported maximum"));
    }

    #[test]
    fn test_unknown_frequency_rejected() {
        let body = br#"{
            "income": [{"source": "salary", "frequency": "weekly", "amount": 100}],
            "current_age": 30, "retirement_age": 60
        }"#;
        let response = handle_request(body);
        assert_eq!(response.status, 400);
        assert!(response.body.contains("weekly"));
    }

    #[test]
    fn test_malformed_json_rejected() {
        let response = handle_request(b"not json");
        assert_eq!(response.status, 400);
    }
}
