use contracts::domain::a001_price_item::{changed_items, PriceItem, PriceItemDto, PriceItemError};

/// Grid contents: the list as loaded and the list as edited.
#[derive(Clone, Debug, Default)]
pub struct PriceGridState {
    pub original: Vec<PriceItem>,
    pub edited: Vec<PriceItem>,
    pub is_loaded: bool,
}

impl PriceGridState {
    pub fn reset(&mut self, items: Vec<PriceItem>) {
        self.original = items.clone();
        self.edited = items;
        self.is_loaded = true;
    }

    pub fn ids(&self) -> Vec<String> {
        self.edited.iter().map(|i| i.id.clone()).collect()
    }

    pub fn get(&self, id: &str) -> Option<&PriceItem> {
        self.edited.iter().find(|i| i.id == id)
    }

    pub fn edit(&mut self, id: &str, f: &dyn Fn(&mut PriceItem)) {
        if let Some(item) = self.edited.iter_mut().find(|i| i.id == id) {
            f(item);
        }
    }

    pub fn is_dirty(&self, id: &str) -> bool {
        self.get(id) != self.original.iter().find(|i| i.id == id)
    }

    pub fn has_changes(&self) -> bool {
        !changed_items(&self.original, &self.edited).is_empty()
    }

    /// Update bodies for every changed row; the first invalid row aborts.
    pub fn pending_updates(&self) -> Result<Vec<(String, PriceItemDto)>, PriceItemError> {
        changed_items(&self.original, &self.edited)
            .into_iter()
            .map(|item| {
                item.validate()?;
                Ok((item.id.clone(), PriceItemDto::from(item)))
            })
            .collect()
    }

    /// Accepts the edited copy of each saved row as the new baseline.
    /// Rows not listed keep their pending edits.
    pub fn mark_saved(&mut self, ids: &[String]) {
        for id in ids {
            let Some(edited) = self.edited.iter().find(|i| &i.id == id) else {
                continue;
            };
            if let Some(original) = self.original.iter_mut().find(|i| &i.id == id) {
                *original = edited.clone();
            }
        }
    }

    /// Drops a deleted row from both lists, keeping other edits.
    pub fn remove(&mut self, id: &str) {
        self.original.retain(|i| i.id != id);
        self.edited.retain(|i| i.id != id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_price_item::PriceType;

    fn item(id: &str, price: f64) -> PriceItem {
        PriceItem {
            id: id.to_string(),
            name: format!("Prenda {}", id),
            kind: PriceType::PerGarment,
            unit_price: price,
            points: Some(1),
        }
    }

    fn loaded() -> PriceGridState {
        let mut state = PriceGridState::default();
        state.reset(vec![item("a", 100.0), item("b", 200.0)]);
        state
    }

    #[test]
    fn test_fresh_grid_has_no_changes() {
        let state = loaded();
        assert!(!state.has_changes());
        assert!(state.pending_updates().unwrap().is_empty());
    }

    #[test]
    fn test_edit_marks_row_dirty() {
        let mut state = loaded();
        state.edit("b", &|i| i.unit_price = 250.0);
        assert!(state.has_changes());
        assert!(state.is_dirty("b"));
        assert!(!state.is_dirty("a"));

        let updates = state.pending_updates().unwrap();
        assert_eq!(updates.len(), 1);
        assert_eq!(updates[0].0, "b");
        assert_eq!(updates[0].1.price, 250.0);
    }

    #[test]
    fn test_reverting_edit_clears_changes() {
        let mut state = loaded();
        state.edit("a", &|i| i.unit_price = 1.0);
        state.edit("a", &|i| i.unit_price = 100.0);
        assert!(!state.has_changes());
    }

    #[test]
    fn test_invalid_row_blocks_save() {
        let mut state = loaded();
        state.edit("a", &|i| i.name = "  ".to_string());
        assert_eq!(state.pending_updates(), Err(PriceItemError::EmptyName));
    }

    #[test]
    fn test_remove_keeps_other_edits() {
        let mut state = loaded();
        state.edit("b", &|i| i.unit_price = 1.0);
        state.remove("a");
        assert_eq!(state.ids(), vec!["b".to_string()]);
        assert!(state.is_dirty("b"));
    }

    #[test]
    fn test_mark_saved_keeps_failed_rows_dirty() {
        let mut state = loaded();
        state.edit("a", &|i| i.unit_price = 150.0);
        state.edit("b", &|i| i.unit_price = 250.0);

        state.mark_saved(&["a".to_string()]);

        assert!(!state.is_dirty("a"));
        assert!(state.is_dirty("b"));
        assert_eq!(state.get("b").map(|i| i.unit_price), Some(250.0));
        let updates = state.pending_updates().unwrap();
        assert_eq!(updates.len(), 1);
        assert_eq!(updates[0].0, "b");
    }
}
