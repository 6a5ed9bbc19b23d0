use ordered_float::OrderedFloat;
use tracing::debug;

use crate::core::data_item::{ChartDataItem, DataItemCore};
use crate::core::{DataRow, Theme};
use crate::error::ChartResult;

use super::ChartContext;
use super::component::{ChartComponent, ComponentCore};
use super::pie_chart::{self, PieDataItem};
use super::series::{ComponentType, DataItemType, SeriesKind, SunburstSeries};

/// Translation prompt used for the default accessibility title.
pub const READER_TITLE_PROMPT: &str = "Sunburst chart";

/// One data row owned by a sunburst chart.
///
/// Composes the pie slice item under its own class name; the radial
/// hierarchy itself is rendered by lower layers and adds no state here.
#[derive(Debug, Clone, PartialEq)]
pub struct SunburstDataItem {
    inner: PieDataItem,
}

impl SunburstDataItem {
    /// Builds an empty item and immediately applies the active theme.
    #[must_use]
    pub fn new(theme: &Theme) -> Self {
        Self {
            inner: PieDataItem::with_class_name(Self::CLASS_NAME, theme),
        }
    }

    #[must_use]
    pub fn category(&self) -> Option<&str> {
        self.inner.category()
    }

    pub fn set_category(&mut self, category: impl Into<String>) {
        self.inner.set_category(category);
    }

    #[must_use]
    pub fn value(&self) -> f64 {
        self.inner.value()
    }

    pub fn set_value(&mut self, value: f64) -> ChartResult<()> {
        self.inner.set_value(value)
    }
}

impl ChartDataItem for SunburstDataItem {
    fn core(&self) -> &DataItemCore {
        self.inner.core()
    }

    fn core_mut(&mut self) -> &mut DataItemCore {
        self.inner.core_mut()
    }
}

impl DataItemType for SunburstDataItem {
    type Owner = Sunburst;

    const CLASS_NAME: &'static str = "SunburstDataItem";
}

/// Sunburst chart variant of the pie-family base.
pub struct Sunburst {
    core: ComponentCore,
    items: Vec<SunburstDataItem>,
}

impl Sunburst {
    /// Builds the pie base first, promotes the class name so themed values
    /// reflect the most specific class, then appends this variant's defaults
    /// contributor after the base's.
    #[must_use]
    pub fn new(ctx: &ChartContext) -> Self {
        let mut core = pie_chart::pie_base_core(ctx);
        core.promote_class_name(Self::CLASS_NAME);
        core.push_default_contributor(contribute_sunburst_defaults);
        Self {
            core,
            items: Vec::new(),
        }
    }

    /// Replaces the item collection from raw rows resolved through the
    /// data-field schema. Emits `"datavalidated"` on success.
    pub fn set_data(&mut self, rows: &[DataRow]) -> ChartResult<()> {
        let mut items = Vec::with_capacity(rows.len());
        for row in rows {
            let mut item = SunburstDataItem::new(self.core.theme());
            if let Some(category) = pie_chart::category_from_row(&self.core, row)? {
                item.set_category(category);
            }
            item.set_value(pie_chart::value_from_row(&self.core, row)?)?;
            items.push(item);
        }
        debug!(
            class_name = self.core.class_name(),
            rows = rows.len(),
            "bound sunburst data rows"
        );
        self.items = items;
        self.core.emit("datavalidated");
        Ok(())
    }

    #[must_use]
    pub fn items(&self) -> &[SunburstDataItem] {
        &self.items
    }

    #[must_use]
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Sum of all item values.
    #[must_use]
    pub fn total_value(&self) -> f64 {
        self.items.iter().map(SunburstDataItem::value).sum()
    }

    /// Item carrying the largest value.
    #[must_use]
    pub fn largest_item(&self) -> Option<&SunburstDataItem> {
        self.items
            .iter()
            .max_by_key(|item| OrderedFloat(item.value()))
    }
}

impl ChartComponent for Sunburst {
    fn core(&self) -> &ComponentCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut ComponentCore {
        &mut self.core
    }

    fn series_kind(&self) -> SeriesKind {
        SeriesKind::Sunburst
    }
}

impl ComponentType for Sunburst {
    type Series = SunburstSeries;
    type Item = SunburstDataItem;

    const CLASS_NAME: &'static str = "Sunburst";
}

/// Accessibility default: fills the reader title only when the host never
/// set one. An explicitly cleared (empty) title is respected.
fn contribute_sunburst_defaults(core: &mut ComponentCore) {
    if core.reader_title().is_none() {
        let title = core.language().translate(READER_TITLE_PROMPT);
        core.set_reader_title(title);
    }
}

pub(crate) fn construct(ctx: &ChartContext) -> Box<dyn ChartComponent> {
    Box::new(Sunburst::new(ctx))
}

pub(crate) fn construct_data_item(ctx: &ChartContext) -> Box<dyn ChartDataItem> {
    Box::new(SunburstDataItem::new(&ctx.theme))
}
