use indexmap::IndexMap;
use smallvec::SmallVec;
use tracing::debug;

use crate::core::{AdapterSet, EventSet, Language, SettingValue, Settings, Theme};

use super::ChartContext;
use super::series::SeriesKind;

/// Default-contributor hook appended by each layer of a chart composition.
///
/// Contributors run in insertion order, so ancestor defaults always land
/// before variant defaults.
pub type DefaultContributor = fn(&mut ComponentCore);

/// Shared state carried by every chart component.
///
/// Groups the identity and extension machinery the concrete variants build
/// on: the class name fixed at construction, the data-field schema, the
/// settings bag, adapter and event sets, the tri-state reader title, the
/// owned translation facility, and the defaults-contributor chain.
pub struct ComponentCore {
    class_name: &'static str,
    data_fields: IndexMap<String, String>,
    settings: Settings,
    adapters: AdapterSet,
    events: EventSet,
    reader_title: Option<String>,
    theme: Theme,
    language: Language,
    contributors: SmallVec<[DefaultContributor; 4]>,
}

impl ComponentCore {
    /// Builds the core under `class_name` and immediately applies the context
    /// theme for that class.
    #[must_use]
    pub fn new(class_name: &'static str, ctx: &ChartContext) -> Self {
        let mut settings = Settings::new();
        ctx.theme.apply_to(class_name, &mut settings);
        Self {
            class_name,
            data_fields: IndexMap::new(),
            settings,
            adapters: AdapterSet::new(),
            events: EventSet::new(),
            reader_title: None,
            theme: ctx.theme.clone(),
            language: ctx.language.clone(),
            contributors: SmallVec::new(),
        }
    }

    /// Re-keys the core to a more derived class name and refreshes the theme,
    /// so themed values reflect the most specific class.
    pub fn promote_class_name(&mut self, class_name: &'static str) {
        self.class_name = class_name;
        let theme = self.theme.clone();
        theme.apply_to(class_name, &mut self.settings);
    }

    /// Appends a defaults contributor after all previously pushed ones.
    pub fn push_default_contributor(&mut self, contributor: DefaultContributor) {
        self.contributors.push(contributor);
    }

    /// Runs the contributor chain in insertion order.
    ///
    /// Invoked after the full object graph exists, never from constructors:
    /// contributors may rely on a completely built component.
    pub fn apply_internal_defaults(&mut self) {
        let contributors = self.contributors.clone();
        for contributor in &contributors {
            contributor(self);
        }
        debug!(
            class_name = self.class_name,
            contributors = contributors.len(),
            "applied internal defaults"
        );
    }

    #[must_use]
    pub fn class_name(&self) -> &'static str {
        self.class_name
    }

    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn settings_mut(&mut self) -> &mut Settings {
        &mut self.settings
    }

    #[must_use]
    pub fn adapters(&self) -> &AdapterSet {
        &self.adapters
    }

    pub fn adapters_mut(&mut self) -> &mut AdapterSet {
        &mut self.adapters
    }

    pub fn events_mut(&mut self) -> &mut EventSet {
        &mut self.events
    }

    #[must_use]
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    #[must_use]
    pub fn language(&self) -> &Language {
        &self.language
    }

    /// Maps a logical field name to a data source field name.
    pub fn set_data_field(&mut self, logical: impl Into<String>, source: impl Into<String>) {
        self.data_fields.insert(logical.into(), source.into());
    }

    #[must_use]
    pub fn data_field(&self, logical: &str) -> Option<&str> {
        self.data_fields.get(logical).map(String::as_str)
    }

    #[must_use]
    pub fn data_fields(&self) -> &IndexMap<String, String> {
        &self.data_fields
    }

    /// Tri-state accessibility title: `None` means unset; `Some("")` is an
    /// explicitly cleared title and is respected by the defaults pass.
    #[must_use]
    pub fn reader_title(&self) -> Option<&str> {
        self.reader_title.as_deref()
    }

    pub fn set_reader_title(&mut self, title: impl Into<String>) {
        self.reader_title = Some(title.into());
    }

    /// Reads a setting and routes it through the adapter chain for `name`.
    #[must_use]
    pub fn effective_setting(&self, name: &str) -> Option<SettingValue> {
        let value = self.settings.get(name)?.clone();
        Some(self.adapters.apply(name, value))
    }

    pub(crate) fn emit(&mut self, event_name: &str) {
        let class_name = self.class_name;
        self.events.emit(event_name, class_name);
    }
}

/// Object-safe component surface shared by every chart variant.
pub trait ChartComponent {
    fn core(&self) -> &ComponentCore;
    fn core_mut(&mut self) -> &mut ComponentCore;

    /// Which drawing-series family renders this component's data.
    fn series_kind(&self) -> SeriesKind;

    fn class_name(&self) -> &'static str {
        self.core().class_name()
    }

    /// Post-construction defaults pass; see
    /// [`ComponentCore::apply_internal_defaults`].
    fn apply_internal_defaults(&mut self) {
        self.core_mut().apply_internal_defaults();
    }
}
