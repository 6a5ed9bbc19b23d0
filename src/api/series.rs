use crate::core::data_item::ChartDataItem;

use super::component::ChartComponent;

/// Runtime tag naming the drawing-series family that renders a component's
/// data. Diagnostic only; the binding itself is the [`ComponentType`]
/// contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesKind {
    Pie,
    Sunburst,
}

/// Marker trait implemented by drawing-series types.
pub trait Series {
    const KIND: SeriesKind;
}

/// Series rendering flat pie-style charts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PieSeries;

impl Series for PieSeries {
    const KIND: SeriesKind = SeriesKind::Pie;
}

/// Series rendering the sunburst variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SunburstSeries;

impl Series for SunburstSeries {
    const KIND: SeriesKind = SeriesKind::Sunburst;
}

/// Compile-time contract tying a chart variant to its series and data-item
/// types. No runtime logic lives here.
pub trait ComponentType: ChartComponent {
    type Series: Series;
    type Item: DataItemType<Owner = Self>;

    const CLASS_NAME: &'static str;
}

/// Compile-time owner declaration for data items.
///
/// `Owner` is the one component type whose series may hold the item, which
/// makes attaching an item to a foreign chart a type error rather than a
/// runtime check.
pub trait DataItemType: ChartDataItem {
    type Owner: ComponentType;

    const CLASS_NAME: &'static str;
}
