pub mod chart_config;
pub mod component;
pub mod pie_chart;
pub mod registry;
pub mod series;
pub mod sunburst;

use crate::core::{Language, Theme};

/// Construction context captured by new components: the active theme and the
/// translation facility.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartContext {
    pub theme: Theme,
    pub language: Language,
}

impl ChartContext {
    #[must_use]
    pub fn new(theme: Theme, language: Language) -> Self {
        Self { theme, language }
    }
}

pub use chart_config::{
    CHART_CONFIG_JSON_SCHEMA_V1, ChartConfigJsonContractV1, instantiate_from_config,
};
pub use component::{ChartComponent, ComponentCore, DefaultContributor};
pub use pie_chart::{CATEGORY_FIELD, PieChart, PieDataItem, VALUE_FIELD};
pub use registry::{
    ComponentConstructor, ComponentRegistry, Constructor, DataItemConstructor, global,
    register_builtin_types,
};
pub use series::{ComponentType, DataItemType, PieSeries, Series, SeriesKind, SunburstSeries};
pub use sunburst::{READER_TITLE_PROMPT, Sunburst, SunburstDataItem};
