//! Hook registry — name-keyed lookup over the declared hook list.

use std::collections::HashMap;

use crate::models::Hook;

/// Lookup table from hook name to hook definition, built once at workflow
/// construction. On duplicate names the last-declared hook wins; duplicates
/// are not an error.
#[derive(Debug, Clone, Default)]
pub struct HookRegistry {
    hooks: HashMap<String, Hook>,
}

impl HookRegistry {
    pub fn build(hooks: Vec<Hook>) -> Self {
        let mut map = HashMap::with_capacity(hooks.len());
        for hook in hooks {
            map.insert(hook.name.clone(), hook);
        }

        Self { hooks: map }
    }

    pub fn resolve(&self, name: &str) -> Option<&Hook> {
        self.hooks.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.hooks.contains_key(name)
    }
}
