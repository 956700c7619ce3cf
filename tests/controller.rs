use serde_json::json;
use spc_chart::{ChartController, ChartType, Dataset, RenderOutcome};

fn sample_dataset() -> Dataset {
    serde_json::from_value(json!({
        "groupMapping": {
            "NO_GROUP": [
                {"categoryId": "w-01-Mon", "dataRowId": "r1"},
                {"categoryId": "w-02-Tue", "dataRowId": "r2"},
                {"categoryId": "w-03-Wed", "dataRowId": "r3"}
            ],
            "TOTAL_GROUP": [
                {"categoryId": "t-All", "dataRowId": "r2"}
            ]
        },
        "dataRowMapping": {
            "r1": {"AC": 4_000_000.0},
            "r2": {"AC": 8_000_000.0},
            "r3": {"AC": 2_000_000.0}
        }
    }))
    .expect("valid dataset JSON")
}

#[test]
fn skips_until_dataset_supplied() {
    let mut controller = ChartController::new();
    assert_eq!(controller.group(), "NO_GROUP");
    assert_eq!(controller.chart_type(), ChartType::G);

    let outcome = controller.set_group("TOTAL_GROUP").unwrap();
    assert_eq!(outcome, RenderOutcome::Skipped);
    assert!(controller.surface().data().iter().all(|&b| b == 0xff));
}

#[test]
fn every_setter_triggers_a_render() {
    let mut controller = ChartController::new();

    assert_eq!(
        controller.set_dataset(sample_dataset()).unwrap(),
        RenderOutcome::Drawn
    );
    let after_dataset = controller.surface().data().to_vec();

    assert_eq!(
        controller.set_chart_type(ChartType::T).unwrap(),
        RenderOutcome::Drawn
    );
    let after_chart_type = controller.surface().data().to_vec();
    assert_ne!(after_dataset, after_chart_type);

    assert_eq!(
        controller.set_group("TOTAL_GROUP").unwrap(),
        RenderOutcome::Drawn
    );
    assert_ne!(controller.surface().data(), after_chart_type.as_slice());
}

#[test]
fn unknown_group_keeps_previous_chart() {
    let mut controller = ChartController::new();
    controller.set_dataset(sample_dataset()).unwrap();
    let before = controller.surface().data().to_vec();

    let outcome = controller.set_group("NOT_A_GROUP").unwrap();
    assert_eq!(outcome, RenderOutcome::Skipped);
    assert_eq!(controller.surface().data(), before.as_slice());
}
