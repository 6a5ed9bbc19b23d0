use radial_rs::ChartError;
use radial_rs::api::{
    ChartComponent, ChartContext, ComponentRegistry, Constructor, PieChart, Sunburst, global,
    register_builtin_types,
};
use radial_rs::core::ChartDataItem;

fn make_pie(ctx: &ChartContext) -> Box<dyn ChartComponent> {
    Box::new(PieChart::new(ctx))
}

fn make_sunburst(ctx: &ChartContext) -> Box<dyn ChartComponent> {
    Box::new(Sunburst::new(ctx))
}

#[test]
fn register_then_resolve_constructs_the_registered_type() {
    let ctx = ChartContext::default();
    let mut registry = ComponentRegistry::new();
    registry.register("Custom", Constructor::Component(make_pie));

    assert!(registry.contains("Custom"));
    let component = registry.instantiate("Custom", &ctx).expect("instantiate");
    assert_eq!(component.class_name(), "PieChart");
}

#[test]
fn re_registering_a_name_is_last_write_wins() {
    let ctx = ChartContext::default();
    let mut registry = ComponentRegistry::new();
    registry.register("Custom", Constructor::Component(make_pie));
    registry.register("Custom", Constructor::Component(make_sunburst));

    assert_eq!(registry.len(), 1);
    let component = registry.instantiate("Custom", &ctx).expect("instantiate");
    assert_eq!(component.class_name(), "Sunburst");
}

#[test]
fn resolving_an_unregistered_name_fails_with_not_found() {
    let registry = ComponentRegistry::new();
    let err = registry.resolve("Missing").expect_err("must fail");
    assert!(matches!(err, ChartError::ComponentNotFound { name } if name == "Missing"));
}

#[test]
fn instantiate_propagates_not_found() {
    let ctx = ChartContext::default();
    let registry = ComponentRegistry::new();
    let err = registry.instantiate("Missing", &ctx).expect_err("must fail");
    assert!(matches!(err, ChartError::ComponentNotFound { .. }));
}

#[test]
fn instantiate_rejects_data_item_keys() {
    let ctx = ChartContext::default();
    let registry = ComponentRegistry::with_builtin_types();
    let err = registry
        .instantiate("SunburstDataItem", &ctx)
        .expect_err("data-item key must not build a component");
    assert!(matches!(err, ChartError::InvalidData(_)));
}

#[test]
fn new_data_item_constructs_the_named_item() {
    let ctx = ChartContext::default();
    let registry = ComponentRegistry::with_builtin_types();

    let item = registry
        .new_data_item("SunburstDataItem", &ctx)
        .expect("data item");
    assert_eq!(item.class_name(), "SunburstDataItem");

    let err = registry
        .new_data_item("Sunburst", &ctx)
        .expect_err("component key must not build a data item");
    assert!(matches!(err, ChartError::InvalidData(_)));
}

#[test]
fn builtin_registry_carries_both_constructors_per_variant() {
    let registry = ComponentRegistry::with_builtin_types();
    let names: Vec<&str> = registry.names().collect();
    assert_eq!(
        names,
        vec!["PieChart", "PieDataItem", "Sunburst", "SunburstDataItem"]
    );
}

#[test]
fn builtin_types_resolve_from_the_global_registry() {
    register_builtin_types();

    let ctx = ChartContext::default();
    let registry = global().lock().expect("registry lock");
    assert!(registry.resolve("Sunburst").is_ok());
    assert!(registry.resolve("SunburstDataItem").is_ok());

    let component = registry.instantiate("Sunburst", &ctx).expect("instantiate");
    assert_eq!(component.class_name(), "Sunburst");
}
