use ordered_float::OrderedFloat;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use tracing::debug;

use crate::core::data_item::{ChartDataItem, DataItemCore};
use crate::core::{DataRow, SettingValue, Theme};
use crate::error::{ChartError, ChartResult};

use super::ChartContext;
use super::component::{ChartComponent, ComponentCore};
use super::series::{ComponentType, DataItemType, PieSeries, SeriesKind};

/// Logical field names resolvable through the data-field schema.
pub const CATEGORY_FIELD: &str = "category";
pub const VALUE_FIELD: &str = "value";

/// One slice row owned by a pie-style chart.
#[derive(Debug, Clone, PartialEq)]
pub struct PieDataItem {
    core: DataItemCore,
    category: Option<String>,
    value: f64,
}

impl PieDataItem {
    /// Builds an empty slice item and immediately applies the active theme.
    #[must_use]
    pub fn new(theme: &Theme) -> Self {
        Self::with_class_name(Self::CLASS_NAME, theme)
    }

    pub(crate) fn with_class_name(class_name: &'static str, theme: &Theme) -> Self {
        Self {
            core: DataItemCore::new(class_name, theme),
            category: None,
            value: 0.0,
        }
    }

    #[must_use]
    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    pub fn set_category(&mut self, category: impl Into<String>) {
        self.category = Some(category.into());
    }

    #[must_use]
    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn set_value(&mut self, value: f64) -> ChartResult<()> {
        if !value.is_finite() {
            return Err(ChartError::InvalidData(
                "slice value must be finite".to_owned(),
            ));
        }
        self.value = value;
        Ok(())
    }

    /// Decimal ingestion guard; fails when the decimal has no `f64` form.
    pub fn set_value_decimal(&mut self, value: Decimal) -> ChartResult<()> {
        let number = value.to_f64().ok_or_else(|| {
            ChartError::InvalidData("slice value cannot be represented as f64".to_owned())
        })?;
        self.set_value(number)
    }
}

impl ChartDataItem for PieDataItem {
    fn core(&self) -> &DataItemCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut DataItemCore {
        &mut self.core
    }
}

impl DataItemType for PieDataItem {
    type Owner = PieChart;

    const CLASS_NAME: &'static str = "PieDataItem";
}

/// Generic pie-style chart: the base every radial chart variant composes.
pub struct PieChart {
    core: ComponentCore,
    items: Vec<PieDataItem>,
}

impl PieChart {
    /// Builds and themes the chart. Internal defaults run later via
    /// [`ChartComponent::apply_internal_defaults`], once the surrounding
    /// object graph is complete.
    #[must_use]
    pub fn new(ctx: &ChartContext) -> Self {
        Self {
            core: pie_base_core(ctx),
            items: Vec::new(),
        }
    }

    /// Replaces the slice collection from raw rows resolved through the
    /// data-field schema. Emits `"datavalidated"` on success.
    pub fn set_data(&mut self, rows: &[DataRow]) -> ChartResult<()> {
        let mut items = Vec::with_capacity(rows.len());
        for row in rows {
            let mut item = PieDataItem::new(self.core.theme());
            if let Some(category) = category_from_row(&self.core, row)? {
                item.set_category(category);
            }
            item.set_value(value_from_row(&self.core, row)?)?;
            items.push(item);
        }
        debug!(
            class_name = self.core.class_name(),
            rows = rows.len(),
            "bound pie data rows"
        );
        self.items = items;
        self.core.emit("datavalidated");
        Ok(())
    }

    #[must_use]
    pub fn items(&self) -> &[PieDataItem] {
        &self.items
    }

    #[must_use]
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Sum of all slice values.
    #[must_use]
    pub fn total_value(&self) -> f64 {
        self.items.iter().map(PieDataItem::value).sum()
    }

    /// Share of the total captured by the item at `index`, in `[0, 1]`.
    /// `None` when the index is out of range or the total is zero.
    #[must_use]
    pub fn percent_of(&self, index: usize) -> Option<f64> {
        let item = self.items.get(index)?;
        let total = self.total_value();
        (total != 0.0).then(|| item.value() / total)
    }

    /// Item carrying the largest value.
    #[must_use]
    pub fn largest_item(&self) -> Option<&PieDataItem> {
        self.items
            .iter()
            .max_by_key(|item| OrderedFloat(item.value()))
    }
}

impl ChartComponent for PieChart {
    fn core(&self) -> &ComponentCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut ComponentCore {
        &mut self.core
    }

    fn series_kind(&self) -> SeriesKind {
        SeriesKind::Pie
    }
}

impl ComponentType for PieChart {
    type Series = PieSeries;
    type Item = PieDataItem;

    const CLASS_NAME: &'static str = "PieChart";
}

/// Builds the shared pie-family core: base class name, category/value field
/// schema, themed settings and the base defaults contributor. Variants
/// promote their class name on top of this.
pub(crate) fn pie_base_core(ctx: &ChartContext) -> ComponentCore {
    let mut core = ComponentCore::new(PieChart::CLASS_NAME, ctx);
    core.set_data_field(CATEGORY_FIELD, CATEGORY_FIELD);
    core.set_data_field(VALUE_FIELD, VALUE_FIELD);
    core.push_default_contributor(contribute_pie_defaults);
    core
}

/// Base angle/radius defaults shared by every pie-family chart.
fn contribute_pie_defaults(core: &mut ComponentCore) {
    let settings = core.settings_mut();
    settings.merge_default("start_angle", SettingValue::Number(-90.0));
    settings.merge_default("end_angle", SettingValue::Number(270.0));
    settings.merge_default("inner_radius_percent", SettingValue::Number(0.0));
}

pub(crate) fn category_from_row(
    core: &ComponentCore,
    row: &DataRow,
) -> ChartResult<Option<String>> {
    let Some(field) = core.data_field(CATEGORY_FIELD) else {
        return Ok(None);
    };
    match row.get(field) {
        None => Ok(None),
        Some(SettingValue::Text(text)) => Ok(Some(text.clone())),
        Some(_) => Err(ChartError::InvalidData(format!(
            "category field `{field}` must be text"
        ))),
    }
}

pub(crate) fn value_from_row(core: &ComponentCore, row: &DataRow) -> ChartResult<f64> {
    let field = core.data_field(VALUE_FIELD).ok_or_else(|| {
        ChartError::InvalidData("no data field mapped for `value`".to_owned())
    })?;
    let value = row.get(field).ok_or_else(|| {
        ChartError::InvalidData(format!("row is missing value field `{field}`"))
    })?;
    let number = value.as_number().ok_or_else(|| {
        ChartError::InvalidData(format!("value field `{field}` must be numeric"))
    })?;
    if !number.is_finite() {
        return Err(ChartError::InvalidData(format!(
            "value field `{field}` must be finite"
        )));
    }
    Ok(number)
}

pub(crate) fn construct(ctx: &ChartContext) -> Box<dyn ChartComponent> {
    Box::new(PieChart::new(ctx))
}

pub(crate) fn construct_data_item(ctx: &ChartContext) -> Box<dyn ChartDataItem> {
    Box::new(PieDataItem::new(&ctx.theme))
}
