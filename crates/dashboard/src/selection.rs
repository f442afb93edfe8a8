/// Ordered set of module ids: one structure for both membership and render
/// order, so the two cannot desync the way the legacy dual-field shape
/// allows. The legacy `{modules, module_order}` pair is handled only at
/// the conversion boundary (`from_stored` / `to_stored`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModuleSelection {
    order: Vec<String>,
}

impl ModuleSelection {
    /// Tolerant read of the legacy shape. `module_order` is authoritative
    /// for ordering; members missing from it are appended in their stored
    /// membership order. Duplicates are dropped, first occurrence wins.
    pub fn from_stored(modules: &[String], module_order: &[String]) -> Self {
        let mut order = Vec::with_capacity(module_order.len().max(modules.len()));
        for id in module_order.iter().chain(modules.iter()) {
            if !order.contains(id) {
                order.push(id.clone());
            }
        }
        Self { order }
    }

    /// Write back a consistent pair: both fields carry the same ids in the
    /// same order.
    pub fn to_stored(&self) -> (Vec<String>, Vec<String>) {
        (self.order.clone(), self.order.clone())
    }

    pub fn contains(&self, id: &str) -> bool {
        self.order.iter().any(|m| m == id)
    }

    /// Append an id. Returns false when already present.
    pub fn add(&mut self, id: &str) -> bool {
        if self.contains(id) {
            return false;
        }
        self.order.push(id.to_string());
        true
    }

    /// Remove an id. Returns false when absent.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.order.len();
        self.order.retain(|m| m != id);
        before != self.order.len()
    }

    /// Apply a new order. Ids in `new_order` come first (deduplicated, new
    /// ids included); current members missing from it keep their relative
    /// order at the tail, so reordering never silently drops a module.
    pub fn reorder(&mut self, new_order: &[String]) {
        let current = std::mem::take(&mut self.order);
        for id in new_order {
            if !self.order.contains(id) {
                self.order.push(id.clone());
            }
        }
        for id in current {
            if !self.order.contains(&id) {
                self.order.push(id);
            }
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.order
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_from_stored_order_wins_members_appended() {
        let selection = ModuleSelection::from_stored(
            &ids(&["deals", "grants", "ai_tools"]),
            &ids(&["deals", "ai_tools"]),
        );

        let collected: Vec<&str> = selection.iter().collect();
        assert_eq!(collected, vec!["deals", "ai_tools", "grants"]);
    }

    #[test]
    fn test_from_stored_keeps_order_only_ids() {
        // Legacy rows may carry ids in module_order that never made it
        // into modules; order is authoritative so they stay.
        let selection =
            ModuleSelection::from_stored(&ids(&["deals"]), &ids(&["grants", "deals"]));

        let collected: Vec<&str> = selection.iter().collect();
        assert_eq!(collected, vec!["grants", "deals"]);
    }

    #[test]
    fn test_from_stored_drops_duplicates() {
        let selection = ModuleSelection::from_stored(
            &ids(&["deals", "deals"]),
            &ids(&["deals", "grants", "deals"]),
        );

        let collected: Vec<&str> = selection.iter().collect();
        assert_eq!(collected, vec!["deals", "grants"]);
    }

    #[test]
    fn test_to_stored_is_always_consistent() {
        let selection = ModuleSelection::from_stored(
            &ids(&["grants", "deals"]),
            &ids(&["deals", "ai_tools"]),
        );

        let (modules, module_order) = selection.to_stored();
        assert_eq!(modules, module_order);
    }

    #[test]
    fn test_add_rejects_duplicates() {
        let mut selection = ModuleSelection::from_stored(&ids(&["deals"]), &ids(&["deals"]));

        assert!(selection.add("grants"));
        assert!(!selection.add("grants"));
        assert_eq!(selection.len(), 2);
    }

    #[test]
    fn test_remove_absent_is_reported() {
        let mut selection = ModuleSelection::from_stored(&ids(&["deals"]), &ids(&["deals"]));

        assert!(selection.remove("deals"));
        assert!(!selection.remove("deals"));
        assert!(selection.is_empty());
    }

    #[test]
    fn test_reorder_keeps_unlisted_members() {
        let mut selection = ModuleSelection::from_stored(
            &ids(&["deals", "grants", "ai_tools"]),
            &ids(&["deals", "grants", "ai_tools"]),
        );

        selection.reorder(&ids(&["ai_tools", "deals"]));

        let collected: Vec<&str> = selection.iter().collect();
        assert_eq!(collected, vec!["ai_tools", "deals", "grants"]);
    }
}
