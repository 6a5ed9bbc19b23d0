use radial_rs::ChartError;
use radial_rs::api::{
    ChartComponent, ChartConfigJsonContractV1, ChartContext, ComponentRegistry, SeriesKind,
    instantiate_from_config,
};
use radial_rs::core::{SettingValue, Theme};

#[test]
fn config_round_trips_through_json() {
    let mut config = ChartConfigJsonContractV1::new("Sunburst");
    config.reader_title = Some("Revenue by region".to_owned());
    config
        .settings
        .insert("start_angle".to_owned(), SettingValue::Number(45.0));
    config
        .data_fields
        .insert("value".to_owned(), "revenue".to_owned());

    let json = config.to_json_pretty().expect("serialize");
    let parsed = ChartConfigJsonContractV1::from_json_str(&json).expect("parse");
    assert_eq!(parsed, config);
}

#[test]
fn config_parse_rejects_unknown_schema_versions() {
    let json = r#"{"schema_version": 99, "chart_type": "Sunburst"}"#;
    let err = ChartConfigJsonContractV1::from_json_str(json).expect_err("must fail");
    assert!(matches!(err, ChartError::InvalidData(_)));
}

#[test]
fn config_parse_rejects_malformed_payloads() {
    let err = ChartConfigJsonContractV1::from_json_str("not json").expect_err("must fail");
    assert!(matches!(err, ChartError::InvalidData(_)));
}

#[test]
fn minimal_config_defaults_optional_sections() {
    let json = r#"{"schema_version": 1, "chart_type": "PieChart"}"#;
    let config = ChartConfigJsonContractV1::from_json_str(json).expect("parse");
    assert_eq!(config.chart_type, "PieChart");
    assert_eq!(config.reader_title, None);
    assert!(config.settings.is_empty());
    assert!(config.data_fields.is_empty());
}

#[test]
fn instantiate_from_config_runs_the_full_lifecycle() {
    let registry = ComponentRegistry::with_builtin_types();
    let ctx = ChartContext::new(Theme::classic(), Default::default());

    let mut config = ChartConfigJsonContractV1::new("Sunburst");
    config
        .settings
        .insert("start_angle".to_owned(), SettingValue::Number(45.0));
    config
        .data_fields
        .insert("value".to_owned(), "revenue".to_owned());

    let component = instantiate_from_config(&registry, &ctx, &config).expect("instantiate");
    assert_eq!(component.class_name(), "Sunburst");
    assert_eq!(component.series_kind(), SeriesKind::Sunburst);

    let core = component.core();
    // Config values are explicit: the internal default must not replace them.
    assert_eq!(
        core.settings().get("start_angle"),
        Some(&SettingValue::Number(45.0))
    );
    assert_eq!(
        core.settings().get("end_angle"),
        Some(&SettingValue::Number(270.0))
    );
    assert_eq!(core.data_field("value"), Some("revenue"));
    assert_eq!(core.reader_title(), Some("Sunburst chart"));
}

#[test]
fn config_supplied_empty_reader_title_survives_defaults() {
    let registry = ComponentRegistry::with_builtin_types();
    let ctx = ChartContext::default();

    let mut config = ChartConfigJsonContractV1::new("Sunburst");
    config.reader_title = Some(String::new());

    let component = instantiate_from_config(&registry, &ctx, &config).expect("instantiate");
    assert_eq!(component.core().reader_title(), Some(""));
}

#[test]
fn unknown_chart_type_propagates_not_found() {
    let registry = ComponentRegistry::with_builtin_types();
    let ctx = ChartContext::default();
    let config = ChartConfigJsonContractV1::new("TreeMap");

    let err = instantiate_from_config(&registry, &ctx, &config).expect_err("must fail");
    assert!(matches!(err, ChartError::ComponentNotFound { name } if name == "TreeMap"));
}
