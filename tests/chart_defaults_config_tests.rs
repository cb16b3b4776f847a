use approx::assert_relative_eq;
use chart_adapter::api::{
    ChartArgs, ChartDefaults, ChartMetadata, ChartOptions, ChartRegistry, DEFAULT_DATASET_PATH,
    EdgeProperties, EdgeSlot, NodePosition, prepare_chart,
};

#[test]
fn defaults_match_built_in_values() {
    let defaults = ChartDefaults::default();
    assert_eq!(defaults.dataset_path, DEFAULT_DATASET_PATH);
    assert_eq!(defaults.title, "Chart");
    assert!(defaults.options.show_tooltip);
    assert!(defaults.options.show_axis);
    assert_relative_eq!(defaults.options.default_node_size, 4.0);
    assert_relative_eq!(defaults.options.highlighted_edges.stroke_width, 3.0);
    assert_relative_eq!(defaults.metadata.original_position.left, 100.0);
    assert!(defaults.metadata.model_code.is_empty());
}

#[test]
fn partial_json_falls_back_per_field() {
    let defaults = ChartDefaults::from_json_str(
        r#"{"title":"Projection","options":{"showAxis":false},
            "second_edge_properties":{"visible":true,"strokeColor":"grey","stroke-width":0.3,"opacity":0.9}}"#,
    )
    .expect("defaults");

    assert_eq!(defaults.title, "Projection");
    assert_eq!(defaults.dataset_path, DEFAULT_DATASET_PATH);
    assert!(!defaults.options.show_axis);
    assert!(defaults.options.show_tooltip);
    assert_eq!(defaults.first_edge_properties, EdgeProperties::first_default());
    assert_eq!(defaults.edge_properties(EdgeSlot::Second).stroke_color, "grey");
}

#[test]
fn invalid_json_defaults_are_rejected() {
    assert!(ChartDefaults::from_json_str(r#"{"options":{"defaultNodeSize":0}}"#).is_err());
    assert!(
        ChartDefaults::from_json_str(
            r#"{"first_edge_properties":{"visible":true,"strokeColor":"red","stroke-width":0.1,"opacity":2}}"#
        )
        .is_err()
    );
    assert!(ChartDefaults::from_json_str("{").is_err());
}

#[test]
fn registry_applies_custom_defaults() {
    let defaults = ChartDefaults::default()
        .with_dataset_path("datasets/iris.json")
        .with_title("Iris")
        .with_edge_properties(EdgeSlot::First, EdgeProperties::new("orange").with_visible(true))
        .expect("valid edge properties")
        .with_options(ChartOptions {
            default_node_size: 6.0,
            ..ChartOptions::default()
        })
        .expect("valid options")
        .with_metadata(ChartMetadata {
            original_position: NodePosition {
                left: 240.0,
                top: 80.0,
            },
            model_code: "tsne(perplexity=30)".to_owned(),
        });
    let mut registry = ChartRegistry::with_defaults(defaults);

    let chart = prepare_chart(&mut registry, None, "iris", None, &ChartArgs::new())
        .expect("prepare chart");
    let chart = chart.borrow();
    assert_eq!(chart.dataset_path, "datasets/iris.json");
    assert_eq!(chart.title, "Iris");
    assert_eq!(chart.first_edges().properties().stroke_color, "orange");
    assert!(chart.first_edges().properties().visible);
    assert_eq!(chart.second_edges().properties(), &EdgeProperties::second_default());
    assert_relative_eq!(chart.options.default_node_size, 6.0);
    assert_relative_eq!(chart.metadata.original_position.left, 240.0);
    assert_eq!(chart.metadata.model_code, "tsne(perplexity=30)");
}

#[test]
fn builder_rejects_invalid_edge_properties() {
    let result = ChartDefaults::default()
        .with_edge_properties(EdgeSlot::Second, EdgeProperties::new("red").with_opacity(-0.1));
    assert!(result.is_err());
}
