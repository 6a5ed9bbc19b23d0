use std::sync::{Mutex, OnceLock, PoisonError};

use indexmap::IndexMap;
use tracing::{debug, trace};

use crate::core::data_item::ChartDataItem;
use crate::error::{ChartError, ChartResult};

use super::ChartContext;
use super::component::ChartComponent;
use super::pie_chart::{self, PieChart, PieDataItem};
use super::series::{ComponentType, DataItemType};
use super::sunburst::{self, Sunburst, SunburstDataItem};

/// Constructor invoked to instantiate a chart component by name.
pub type ComponentConstructor = fn(&ChartContext) -> Box<dyn ChartComponent>;

/// Constructor invoked to instantiate a data item by name.
pub type DataItemConstructor = fn(&ChartContext) -> Box<dyn ChartDataItem>;

/// Entry stored under a registry key. Each chart variant registers two: its
/// component constructor and its data-item constructor.
#[derive(Debug, Clone, Copy)]
pub enum Constructor {
    Component(ComponentConstructor),
    DataItem(DataItemConstructor),
}

/// Name-to-constructor mapping enabling configuration-driven chart creation.
///
/// Registration is last-write-wins: re-registering a name silently replaces
/// the prior entry. There is no removal operation.
#[derive(Default)]
pub struct ComponentRegistry {
    entries: IndexMap<String, Constructor>,
}

impl ComponentRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry preloaded with the built-in pie-family types.
    #[must_use]
    pub fn with_builtin_types() -> Self {
        let mut registry = Self::new();
        register_builtins_into(&mut registry);
        registry
    }

    /// Stores `constructor` under `name`, replacing any prior entry.
    pub fn register(&mut self, name: impl Into<String>, constructor: Constructor) {
        let name = name.into();
        if self.entries.insert(name.clone(), constructor).is_some() {
            debug!(name = %name, "replaced registered constructor");
        } else {
            trace!(name = %name, "registered constructor");
        }
    }

    /// Looks up the constructor registered under `name`.
    pub fn resolve(&self, name: &str) -> ChartResult<Constructor> {
        self.entries
            .get(name)
            .copied()
            .ok_or_else(|| ChartError::ComponentNotFound {
                name: name.to_owned(),
            })
    }

    /// Resolves `name` and constructs a new component instance.
    ///
    /// The caller owns the remaining lifecycle step: run
    /// `apply_internal_defaults` once the surrounding object graph exists.
    pub fn instantiate(
        &self,
        name: &str,
        ctx: &ChartContext,
    ) -> ChartResult<Box<dyn ChartComponent>> {
        match self.resolve(name)? {
            Constructor::Component(construct) => Ok(construct(ctx)),
            Constructor::DataItem(_) => Err(ChartError::InvalidData(format!(
                "`{name}` is registered as a data-item constructor, not a component"
            ))),
        }
    }

    /// Resolves `name` and constructs a new data item.
    pub fn new_data_item(
        &self,
        name: &str,
        ctx: &ChartContext,
    ) -> ChartResult<Box<dyn ChartDataItem>> {
        match self.resolve(name)? {
            Constructor::DataItem(construct) => Ok(construct(ctx)),
            Constructor::Component(_) => Err(ChartError::InvalidData(format!(
                "`{name}` is registered as a component constructor, not a data item"
            ))),
        }
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

/// Process-wide registry shared by configuration loaders.
///
/// Starts empty; populate it explicitly via [`register_builtin_types`] during
/// application startup so initialization order stays deterministic. All
/// mutation goes through the mutex, which keeps last-write-wins true on
/// multi-threaded hosts.
pub fn global() -> &'static Mutex<ComponentRegistry> {
    static GLOBAL: OnceLock<Mutex<ComponentRegistry>> = OnceLock::new();
    GLOBAL.get_or_init(|| Mutex::new(ComponentRegistry::new()))
}

/// Registers the built-in pie-family constructors into the global registry.
///
/// Idempotent: re-running replaces the same entries.
pub fn register_builtin_types() {
    let mut registry = global().lock().unwrap_or_else(PoisonError::into_inner);
    register_builtins_into(&mut registry);
}

fn register_builtins_into(registry: &mut ComponentRegistry) {
    registry.register(
        <PieChart as ComponentType>::CLASS_NAME,
        Constructor::Component(pie_chart::construct),
    );
    registry.register(
        <PieDataItem as DataItemType>::CLASS_NAME,
        Constructor::DataItem(pie_chart::construct_data_item),
    );
    registry.register(
        <Sunburst as ComponentType>::CLASS_NAME,
        Constructor::Component(sunburst::construct),
    );
    registry.register(
        <SunburstDataItem as DataItemType>::CLASS_NAME,
        Constructor::DataItem(sunburst::construct_data_item),
    );
}
