use radial_rs::api::{ChartComponent, ChartContext, PieChart, Sunburst, SunburstDataItem};
use radial_rs::core::{ChartDataItem, Language, SettingSource, SettingValue, Theme};

#[test]
fn sunburst_and_its_data_item_carry_their_class_names() {
    let ctx = ChartContext::default();
    let chart = Sunburst::new(&ctx);
    assert_eq!(chart.class_name(), "Sunburst");

    let item = SunburstDataItem::new(&ctx.theme);
    assert_eq!(item.class_name(), "SunburstDataItem");
}

#[test]
fn unset_reader_title_receives_the_localized_default() {
    let language = Language::new("pt").with_translation("Sunburst chart", "Gráfico solar");
    let ctx = ChartContext::new(Theme::classic(), language);

    let mut chart = Sunburst::new(&ctx);
    assert_eq!(chart.core().reader_title(), None);

    chart.apply_internal_defaults();
    assert_eq!(chart.core().reader_title(), Some("Gráfico solar"));
}

#[test]
fn untranslated_default_passes_the_prompt_through() {
    let ctx = ChartContext::default();
    let mut chart = Sunburst::new(&ctx);
    chart.apply_internal_defaults();
    assert_eq!(chart.core().reader_title(), Some("Sunburst chart"));
}

#[test]
fn explicit_empty_reader_title_is_not_overwritten() {
    let ctx = ChartContext::default();
    let mut chart = Sunburst::new(&ctx);
    chart.core_mut().set_reader_title("");

    chart.apply_internal_defaults();
    assert_eq!(chart.core().reader_title(), Some(""));
}

#[test]
fn explicit_reader_title_survives_repeated_defaults_passes() {
    let ctx = ChartContext::default();
    let mut chart = Sunburst::new(&ctx);

    chart.apply_internal_defaults();
    chart.core_mut().set_reader_title("Quarterly revenue");
    chart.apply_internal_defaults();

    assert_eq!(chart.core().reader_title(), Some("Quarterly revenue"));
}

#[test]
fn base_defaults_are_present_after_variant_defaults() {
    let ctx = ChartContext::default();
    let mut chart = Sunburst::new(&ctx);
    chart.apply_internal_defaults();

    let settings = chart.core().settings();
    assert_eq!(settings.get("start_angle"), Some(&SettingValue::Number(-90.0)));
    assert_eq!(settings.get("end_angle"), Some(&SettingValue::Number(270.0)));
    assert_eq!(
        settings.get("inner_radius_percent"),
        Some(&SettingValue::Number(0.0))
    );
    assert_eq!(
        settings.source("start_angle"),
        Some(SettingSource::InternalDefault)
    );
}

#[test]
fn explicit_settings_win_over_internal_defaults() {
    let ctx = ChartContext::default();
    let mut chart = Sunburst::new(&ctx);
    chart.core_mut().settings_mut().set("start_angle", 0.0);

    chart.apply_internal_defaults();
    assert_eq!(
        chart.core().settings().get("start_angle"),
        Some(&SettingValue::Number(0.0))
    );
    assert!(chart.core().settings().has_explicit("start_angle"));
}

#[test]
fn themed_values_reflect_the_most_specific_class() {
    let ctx = ChartContext::new(Theme::midnight(), Language::default());

    let pie = PieChart::new(&ctx);
    assert_eq!(
        pie.core().settings().get("label_color"),
        Some(&SettingValue::from("#ebebf5"))
    );

    let sunburst = Sunburst::new(&ctx);
    assert_eq!(
        sunburst.core().settings().get("label_color"),
        Some(&SettingValue::from("#f5f0dc"))
    );
    assert_eq!(
        sunburst.core().settings().get("slice_stroke_width"),
        Some(&SettingValue::Number(1.5))
    );
}

#[test]
fn instances_have_independent_state() {
    let ctx = ChartContext::default();
    let mut first = Sunburst::new(&ctx);
    let second = Sunburst::new(&ctx);

    first.core_mut().set_reader_title("First chart");
    first.core_mut().settings_mut().set("slice_opacity", 0.4);

    assert_eq!(second.core().reader_title(), None);
    assert_ne!(
        first.core().settings().get("slice_opacity"),
        second.core().settings().get("slice_opacity")
    );
}

#[test]
fn data_items_are_themed_at_construction() {
    let item = SunburstDataItem::new(&Theme::classic());
    assert_eq!(
        item.core().settings().get("hidden"),
        Some(&SettingValue::Bool(false))
    );
}
