//! AWS Lambda handler for running projections
//!
//! Accepts a JSON parameter set (any omitted field takes its default) and
//! returns the full projection with a summary. Supports Lambda Function URLs
//! for direct HTTP access.

use downsizing_analyzer::projection::ProjectionSummary;
use downsizing_analyzer::{ModelError, ParameterSet, ProjectionResult, ScenarioRunner};
use lambda_http::{run, service_fn, Body, Error, Request, Response};
use serde::Serialize;

/// Output from the projection
#[derive(Debug, Serialize)]
pub struct ProjectionResponse {
    pub summary: ProjectionSummary,
    pub result: ProjectionResult,
    pub execution_time_ms: u64,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

fn error_response(status: u16, message: String) -> Result<Response<Body>, Error> {
    let body = serde_json::to_string(&ErrorBody { error: message })?;
    Ok(Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .header("Access-Control-Allow-Origin", "*")
        .body(Body::Text(body))?)
}

fn json_response(body: &ProjectionResponse) -> Result<Response<Body>, Error> {
    Ok(Response::builder()
        .status(200)
        .header("Content-Type", "application/json")
        .header("Access-Control-Allow-Origin", "*")
        .header("Access-Control-Allow-Methods", "POST, OPTIONS")
        .header("Access-Control-Allow-Headers", "Content-Type")
        .body(Body::Text(serde_json::to_string(body)?))?)
}

/// Request body as text; an empty body means all defaults
fn body_text(body: &Body) -> Result<&str, std::str::Utf8Error> {
    match body {
        Body::Text(s) => Ok(s.as_str()),
        Body::Binary(b) => std::str::from_utf8(b),
        Body::Empty => Ok("{}"),
    }
}

/// Lambda handler function
async fn handler(event: Request) -> Result<Response<Body>, Error> {
    let start = std::time::Instant::now();

    // Handle CORS preflight
    if event.method().as_str() == "OPTIONS" {
        return Ok(Response::builder()
            .status(200)
            .header("Access-Control-Allow-Origin", "*")
            .header("Access-Control-Allow-Methods", "POST, OPTIONS")
            .header("Access-Control-Allow-Headers", "Content-Type")
            .body(Body::Empty)?);
    }

    let body_str = match body_text(event.body()) {
        Ok(s) => s,
        Err(e) => return error_response(400, format!("Request body is not valid UTF-8: {}", e)),
    };

    let parameters = match ParameterSet::from_json_str(body_str) {
        Ok(p) => p,
        Err(e) => return error_response(400, format!("Invalid JSON: {}", e)),
    };

    let result = match ScenarioRunner::with_parameters(parameters).run() {
        Ok(r) => r,
        Err(e @ ModelError::InvalidParameter { .. }) => return error_response(400, e.to_string()),
        Err(e) => {
            log::error!("projection failed: {}", e);
            return error_response(500, e.to_string());
        }
    };

    let response = ProjectionResponse {
        summary: result.summary(),
        result,
        execution_time_ms: start.elapsed().as_millis() as u64,
    };

    json_response(&response)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();
    run(service_fn(handler)).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_body_is_defaults() {
        let text = body_text(&Body::Empty).unwrap();
        assert_eq!(ParameterSet::from_json_str(text).unwrap(), ParameterSet::default());
    }

    #[test]
    fn test_binary_body_decoded() {
        let body = Body::Binary(br#"{ "horizon_years": 9 }"#.to_vec());
        let params = ParameterSet::from_json_str(body_text(&body).unwrap()).unwrap();
        assert_eq!(params.horizon_years, 9);
    }

    #[test]
    fn test_invalid_utf8_rejected() {
        let body = Body::Binary(vec![b'{', 0xff, 0xfe, b'}']);
        assert!(body_text(&body).is_err());
    }
}
