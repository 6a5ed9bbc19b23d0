use indexmap::IndexMap;

use crate::core::settings::SettingValue;

/// Value-transforming hook applied when a setting is read out.
pub type Adapter = Box<dyn Fn(SettingValue) -> SettingValue>;

/// Ordered, keyed adapter chains.
///
/// Adapters registered under the same key run in registration order, each
/// receiving the previous adapter's output.
#[derive(Default)]
pub struct AdapterSet {
    entries: IndexMap<String, Vec<Adapter>>,
}

impl AdapterSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(
        &mut self,
        key: impl Into<String>,
        adapter: impl Fn(SettingValue) -> SettingValue + 'static,
    ) {
        self.entries
            .entry(key.into())
            .or_default()
            .push(Box::new(adapter));
    }

    /// Folds `value` through the chain registered for `key`, if any.
    #[must_use]
    pub fn apply(&self, key: &str, value: SettingValue) -> SettingValue {
        let Some(chain) = self.entries.get(key) else {
            return value;
        };
        chain.iter().fold(value, |value, adapter| adapter(value))
    }

    #[must_use]
    pub fn is_registered(&self, key: &str) -> bool {
        self.entries.get(key).is_some_and(|chain| !chain.is_empty())
    }

    #[must_use]
    pub fn chain_len(&self, key: &str) -> usize {
        self.entries.get(key).map_or(0, Vec::len)
    }
}

#[cfg(test)]
mod tests {
    use super::AdapterSet;
    use crate::core::settings::SettingValue;

    #[test]
    fn adapters_run_in_registration_order() {
        let mut adapters = AdapterSet::new();
        adapters.add("slice_opacity", |value| match value {
            SettingValue::Number(n) => SettingValue::Number(n * 0.5),
            other => other,
        });
        adapters.add("slice_opacity", |value| match value {
            SettingValue::Number(n) => SettingValue::Number(n + 0.1),
            other => other,
        });

        let out = adapters.apply("slice_opacity", SettingValue::Number(1.0));
        assert_eq!(out, SettingValue::Number(0.6));
        assert_eq!(adapters.chain_len("slice_opacity"), 2);
    }

    #[test]
    fn unregistered_keys_return_the_value_unchanged() {
        let adapters = AdapterSet::new();
        assert!(!adapters.is_registered("label_color"));
        let out = adapters.apply("label_color", SettingValue::from("#fff"));
        assert_eq!(out, SettingValue::from("#fff"));
    }
}
