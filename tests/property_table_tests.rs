use chart_adapter::api::{ChartArgs, ChartRegistry, prepare_chart};
use chart_adapter::core::{Table, convert_edges_to_json};
use proptest::prelude::*;
use serde_json::{Value, json};

fn records_json(rows: usize, columns: usize) -> String {
    let records: Vec<Value> = (0..rows)
        .map(|row| {
            let record: serde_json::Map<String, Value> = (0..columns)
                .map(|column| (format!("c{column}"), json!(row * columns + column)))
                .collect();
            Value::Object(record)
        })
        .collect();
    Value::Array(records).to_string()
}

proptest! {
    #[test]
    fn dimensionality_tracks_record_width(rows in 1usize..40, columns in 0usize..12) {
        let mut registry = ChartRegistry::new();
        let chart = prepare_chart(
            &mut registry,
            Some(records_json(rows, columns).as_str()),
            "prop",
            None,
            &ChartArgs::new(),
        ).expect("prepare chart");

        let chart = chart.borrow();
        let nodes = chart.nodes().expect("nodes");
        prop_assert_eq!(chart.dimensionality(), columns);
        prop_assert_eq!(nodes.column_count(), columns);
        prop_assert_eq!(nodes.row_count(), rows);
        prop_assert_eq!(chart.is_scatterplot(), columns == 2);
    }

    #[test]
    fn records_survive_table_round_trip(rows in 0usize..30, columns in 1usize..8) {
        let input = records_json(rows, columns);
        let table = Table::from_json_str(&input).expect("table");
        let records = Value::Array(table.to_records().into_iter().map(Value::Object).collect());
        prop_assert_eq!(records, serde_json::from_str::<Value>(&input).expect("json"));
    }

    #[test]
    fn edge_json_preserves_every_row(
        edges in proptest::collection::vec((any::<i64>(), any::<i64>()), 0..64)
    ) {
        let rows: Vec<[Value; 2]> = edges
            .iter()
            .map(|(src, dst)| [json!(src), json!(dst)])
            .collect();
        let parsed: Vec<Value> =
            serde_json::from_str(&convert_edges_to_json(&rows).expect("format")).expect("json");

        prop_assert_eq!(parsed.len(), edges.len());
        for (record, (src, dst)) in parsed.iter().zip(&edges) {
            prop_assert_eq!(&record["src"], &json!(src));
            prop_assert_eq!(&record["dst"], &json!(dst));
        }
    }
}
