//! Integration tests for the template executor library surface.

use starter::template::{execute_template, TemplateOptions, TemplateResult, ValidationError};

#[test]
fn test_execute_template_end_to_end() {
    let result = execute_template(&TemplateOptions::new("hello")).unwrap();
    assert_eq!(
        result,
        TemplateResult {
            success: true,
            message: "Processed: hello".to_string(),
        }
    );
}

#[test]
fn test_execute_template_dry_run_end_to_end() {
    let result = execute_template(&TemplateOptions::new("hello").dry_run(true)).unwrap();
    assert_eq!(
        result,
        TemplateResult {
            success: true,
            message: "Processed: hello (dry-run)".to_string(),
        }
    );
}

#[test]
fn test_execute_template_rejects_empty_input() {
    let err = execute_template(&TemplateOptions::new("")).unwrap_err();
    assert_eq!(err, ValidationError);
}

#[test]
fn test_validation_error_interops_with_anyhow() {
    fn run() -> anyhow::Result<TemplateResult> {
        let result = execute_template(&TemplateOptions::new(""))?;
        Ok(result)
    }

    let err = run().unwrap_err();
    assert_eq!(err.to_string(), "input must be provided");
}

#[test]
fn test_result_json_shape() {
    // The shape printed by `starter run --json`
    let result = execute_template(&TemplateOptions::new("hello")).unwrap();
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["success"], true);
    assert_eq!(json["message"], "Processed: hello");
    assert_eq!(json.as_object().unwrap().len(), 2);
}

#[test]
fn test_result_round_trips_through_json() {
    let result = execute_template(&TemplateOptions::new("hello").dry_run(true)).unwrap();
    let json = serde_json::to_string(&result).unwrap();
    let parsed: TemplateResult = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, result);
}

#[test]
fn test_options_from_json_request() {
    let options: TemplateOptions =
        serde_json::from_str(r#"{"input": "hello", "dry_run": true}"#).unwrap();
    let result = execute_template(&options).unwrap();
    assert_eq!(result.message, "Processed: hello (dry-run)");
}
