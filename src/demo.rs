use serde_json::{Map, Value};

use crate::{
    http_client::request::Headers,
    request_executor::{
        error_record::ErrorRecord, request_executor::RequestExecutor, request_spec::RequestSpec,
        response_record::ResponseRecord,
    },
    sum_list::sum_integers,
};

pub const DEMO_URL: &str = "http://localhost:8080/post";
pub const DEMO_NUMBERS: [i64; 5] = [1, 2, 3, 4, 5];

/// The fixed demo call. The form-urlencoded content type is sent alongside
/// a JSON body on purpose; the header is not reconciled with the encoding.
pub fn demo_request(url: &str, timeout_seconds: u64) -> RequestSpec {
    let mut payload = Map::new();
    payload.insert("name".to_string(), Value::from("test_user_3"));
    payload.insert("message".to_string(), Value::from("POST request test 2"));
    payload.insert("value".to_string(), Value::from(456));

    RequestSpec::new(url)
        .with_payload(payload)
        .with_headers(Headers::from([
            ("Content-Type", "application/x-www-form-urlencoded"),
            ("X-Custom-Header", "test-value"),
        ]))
        .with_timeout_seconds(timeout_seconds)
}

pub fn render_outcome(outcome: &Result<ResponseRecord, ErrorRecord>) -> String {
    match outcome {
        Ok(record) => {
            let mut out = format!("=== Success! ===\nStatus code: {}", record.status_code);
            if let Some(json) = record.parsed_json.as_ref().filter(|json| has_content(json)) {
                let pretty = serde_json::to_string_pretty(json).unwrap_or_else(|_| json.to_string());
                out.push_str(&format!("\nJSON response: {pretty}"));
            }
            out
        }
        Err(error) => format!("=== Error ===\n{}", error.message),
    }
}

/// `null`, `false`, zero and empty strings, arrays and objects carry
/// nothing worth printing.
fn has_content(json: &Value) -> bool {
    match json {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64() != Some(0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(fields) => !fields.is_empty(),
    }
}

pub async fn run_post_demo(
    executor: &dyn RequestExecutor,
    url: &str,
    timeout_seconds: u64,
) -> String {
    let outcome = executor.execute(demo_request(url, timeout_seconds)).await;
    render_outcome(&outcome)
}

pub fn run_sum_demo(numbers: &[i64]) -> String {
    format!("Result: {}", sum_integers(numbers))
}
