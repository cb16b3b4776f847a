use chart_adapter::api::{ChartArgs, ChartRegistry, DEFAULT_DATASET_PATH, prepare_chart};
use serde_json::json;

#[test]
fn prepare_without_dataset_flags_loading() {
    let mut registry = ChartRegistry::new();
    let chart = prepare_chart(&mut registry, None, "chart-1", Some("root"), &ChartArgs::new())
        .expect("prepare chart");

    let chart = chart.borrow();
    assert_eq!(chart.id(), "chart-1");
    assert_eq!(chart.dimensionality(), 0);
    assert!(chart.should_load_dataset);
    assert_eq!(chart.dataset_path, DEFAULT_DATASET_PATH);
    assert!(chart.nodes().is_none());
    assert!(chart.parent().is_none());
    assert_eq!(chart.title, "Chart");
}

#[test]
fn prepare_with_dataset_loads_nodes() {
    let mut registry = ChartRegistry::new();
    let chart = prepare_chart(
        &mut registry,
        Some(r#"[{"a":1,"b":2},{"a":3,"b":4}]"#),
        "scatter",
        None,
        &ChartArgs::new(),
    )
    .expect("prepare chart");

    let chart = chart.borrow();
    let nodes = chart.nodes().expect("nodes loaded");
    assert_eq!(nodes.row_count(), 2);
    assert_eq!(nodes.column_count(), 2);
    assert_eq!(chart.dimensionality(), 2);
    assert!(chart.is_scatterplot());
    assert!(chart.should_load_dataset);
}

#[test]
fn prepare_treats_empty_payload_as_absent() {
    let mut registry = ChartRegistry::new();
    let chart = prepare_chart(&mut registry, Some(""), "blank", None, &ChartArgs::new())
        .expect("prepare chart");
    assert!(chart.borrow().nodes().is_none());
}

#[test]
fn prepare_passes_whitespace_payload_to_parser() {
    let mut registry = ChartRegistry::new();
    let result = prepare_chart(&mut registry, Some("  \n"), "spaces", None, &ChartArgs::new());

    assert!(matches!(result, Err(chart_adapter::ChartError::Json(_))));
    assert!(registry.contains("spaces"));
}

#[test]
fn prepare_propagates_malformed_dataset_and_keeps_registration() {
    let mut registry = ChartRegistry::new();
    let result = prepare_chart(&mut registry, Some("[{"), "broken", None, &ChartArgs::new());

    assert!(matches!(result, Err(chart_adapter::ChartError::Json(_))));
    let chart = registry.get("broken").expect("chart stays registered");
    assert_eq!(chart.borrow().dimensionality(), 0);
    assert!(chart.borrow().should_load_dataset);
}

#[test]
fn prepare_ignores_argument_bundle_contents() {
    let mut registry = ChartRegistry::new();
    let args = ChartArgs::from_json_str(r#"{"perplexity": 30, "labels": ["x"]}"#).expect("args");
    assert_eq!(args.len(), 2);

    let chart = prepare_chart(&mut registry, Some("{}"), "with-args", None, &args)
        .expect("prepare chart");
    assert_eq!(chart.borrow().dimensionality(), 0);
}

#[test]
fn chart_args_builder_collects_values() {
    let args = ChartArgs::new()
        .with_arg("perplexity", json!(30))
        .with_arg("perplexity", json!(50))
        .with_arg("metric", json!("cosine"));

    assert_eq!(args.len(), 2);
    assert_eq!(args.get("perplexity"), Some(&json!(50)));
    assert_eq!(args.get("missing"), None);
}

#[test]
fn chart_args_reject_non_object_documents() {
    assert!(ChartArgs::from_json_str("[1, 2]").is_err());
    assert!(ChartArgs::from_json_str("null").expect("null args").is_empty());
}
