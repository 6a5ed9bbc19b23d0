use indexmap::IndexMap;

use crate::core::settings::{SettingValue, Settings};

/// Named preset of per-class default values.
///
/// Defaults are keyed on the most specific component class name: the
/// construct-then-theme protocol re-applies the theme once a variant promotes
/// its class name, so a theme may style `"Sunburst"` differently from the
/// `"PieChart"` base it composes.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    name: &'static str,
    class_defaults: IndexMap<&'static str, Vec<(&'static str, SettingValue)>>,
}

impl Default for Theme {
    fn default() -> Self {
        Self::classic()
    }
}

impl Theme {
    /// Light preset used when no theme is configured.
    #[must_use]
    pub fn classic() -> Self {
        Self::named("classic")
            .with_class_default("PieChart", "label_color", "#1a1f2a")
            .with_class_default("PieChart", "slice_stroke_color", "#ffffff")
            .with_class_default("PieChart", "slice_opacity", 1.0)
            .with_class_default("Sunburst", "slice_stroke_width", 1.0)
            .with_class_default("PieDataItem", "hidden", false)
            .with_class_default("SunburstDataItem", "hidden", false)
    }

    /// Dark preset.
    #[must_use]
    pub fn midnight() -> Self {
        Self::named("midnight")
            .with_class_default("PieChart", "label_color", "#ebebf5")
            .with_class_default("PieChart", "slice_stroke_color", "#121214")
            .with_class_default("PieChart", "slice_opacity", 0.95)
            .with_class_default("Sunburst", "slice_stroke_width", 1.5)
            .with_class_default("Sunburst", "label_color", "#f5f0dc")
            .with_class_default("PieDataItem", "hidden", false)
            .with_class_default("SunburstDataItem", "hidden", false)
    }

    /// Empty theme carrying only a name; useful as a builder seed.
    #[must_use]
    pub fn named(name: &'static str) -> Self {
        Self {
            name,
            class_defaults: IndexMap::new(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Appends one default for `class_name`. Later entries for the same
    /// setting win within the theme.
    #[must_use]
    pub fn with_class_default(
        mut self,
        class_name: &'static str,
        setting: &'static str,
        value: impl Into<SettingValue>,
    ) -> Self {
        self.class_defaults
            .entry(class_name)
            .or_default()
            .push((setting, value.into()));
        self
    }

    /// Merges this theme's defaults for `class_name` into `settings`.
    ///
    /// Explicit values in `settings` are never overwritten; see
    /// [`Settings::merge_from_theme`] for the precedence rules.
    pub fn apply_to(&self, class_name: &str, settings: &mut Settings) {
        let Some(defaults) = self.class_defaults.get(class_name) else {
            return;
        };
        for (setting, value) in defaults {
            settings.merge_from_theme(setting, value.clone());
        }
    }
}

/// Built-in theme presets.
#[must_use]
pub fn presets() -> Vec<Theme> {
    vec![Theme::classic(), Theme::midnight()]
}

/// Finds a preset by name, falling back to `classic`.
#[must_use]
pub fn find(name: &str) -> Theme {
    presets()
        .into_iter()
        .find(|theme| theme.name.eq_ignore_ascii_case(name))
        .unwrap_or_else(Theme::classic)
}
