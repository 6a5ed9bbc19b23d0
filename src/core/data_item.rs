use crate::core::settings::Settings;
use crate::core::theme::Theme;

/// Shared state carried by every data item: the class name fixed at
/// construction and the themed settings bag.
///
/// A data item belongs to exactly one component; the owning chart keeps its
/// items in a plain `Vec`, so they are torn down with the owner.
#[derive(Debug, Clone, PartialEq)]
pub struct DataItemCore {
    class_name: &'static str,
    settings: Settings,
}

impl DataItemCore {
    /// Builds the core and immediately merges the active theme's defaults for
    /// `class_name`.
    #[must_use]
    pub fn new(class_name: &'static str, theme: &Theme) -> Self {
        let mut settings = Settings::new();
        theme.apply_to(class_name, &mut settings);
        Self {
            class_name,
            settings,
        }
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
}

/// Object-safe data-item surface used by registry trait objects.
///
/// The compile-time owner declaration lives on `api::DataItemType`; this
/// trait only exposes what a by-name consumer can use.
pub trait ChartDataItem {
    fn core(&self) -> &DataItemCore;
    fn core_mut(&mut self) -> &mut DataItemCore;

    fn class_name(&self) -> &'static str {
        self.core().class_name()
    }
}
