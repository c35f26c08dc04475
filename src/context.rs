//! Order Form Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;
use leptos_formset::RowGroup;

use crate::config::OrderFormConfig;
use crate::models::OrderLine;

/// Page-wide handles provided via context
#[derive(Clone, Copy)]
pub struct OrderFormContext {
    /// Page configuration, fixed after startup
    pub config: StoredValue<OrderFormConfig>,
    /// Order line rows
    pub lines: RwSignal<RowGroup<OrderLine>>,
}

impl OrderFormContext {
    pub fn new(config: OrderFormConfig) -> Self {
        let default_count = config.default_count.clone();
        let lines = RowGroup::with_initial_rows(OrderLine::default(), &config.formset, |line| {
            fill_numeric_inputs(line, &default_count)
        });
        Self {
            config: StoredValue::new(config),
            lines: RwSignal::new(lines),
        }
    }

    /// Read one field of one row (tracked)
    pub fn line_field(&self, id: leptos_formset::RowId, read: impl FnOnce(&OrderLine) -> String) -> String {
        self.lines.with(|group| group.row(id).map(read)).unwrap_or_default()
    }

    /// One field of one row as a memo: notifies only when that field changes
    pub fn line_memo(&self, id: leptos_formset::RowId, read: fn(&OrderLine) -> String) -> Memo<String> {
        let ctx = *self;
        Memo::new(move |_| ctx.line_field(id, |line| read(line)))
    }

    /// Update one row; a no-op once the row is gone
    pub fn update_line(&self, id: leptos_formset::RowId, update: impl FnOnce(&mut OrderLine)) {
        self.lines.update(|group| {
            if let Some(line) = group.row_mut(id) {
                update(line);
            }
        });
    }
}

/// Row-added hook: every numeric input of the new row gets `value`
pub fn fill_numeric_inputs(line: &mut OrderLine, value: &str) {
    for input in line.numeric_inputs_mut() {
        *input = value.to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos_formset::FormsetConfig;

    #[test]
    fn test_new_rows_get_default_count() {
        let config = OrderFormConfig::default();
        let mut group = RowGroup::with_initial_rows(OrderLine::default(), &config.formset, |line| {
            fill_numeric_inputs(line, &config.default_count)
        });
        let added = group.add_row(|line| fill_numeric_inputs(line, "1")).unwrap();

        assert_eq!(group.row(added).unwrap().count, "1");
        assert!(group.iter().all(|line| line.count == "1"));
        assert!(group.iter().all(|line| line.item.is_empty() && line.category.is_empty()));
    }

    #[test]
    fn test_line_memo_ignores_other_rows() {
        use std::sync::atomic::{AtomicUsize, Ordering};
        use std::sync::Arc;

        let owner = Owner::new();
        owner.set();

        let ctx = OrderFormContext::new(OrderFormConfig::default());
        let first = ctx.lines.with_untracked(|group| group.ids()[0]);
        let second = ctx.lines.try_update(|group| group.add_row(|_| {})).flatten().unwrap();

        let item = ctx.line_memo(first, |line| line.item.clone());
        let runs = Arc::new(AtomicUsize::new(0));
        let counted = {
            let runs = Arc::clone(&runs);
            Memo::new(move |_| {
                runs.fetch_add(1, Ordering::SeqCst);
                item.get()
            })
        };
        assert_eq!(counted.get(), "");
        assert_eq!(runs.load(Ordering::SeqCst), 1);

        ctx.update_line(second, |line| line.count = "5".to_string());
        assert_eq!(counted.get(), "");
        assert_eq!(runs.load(Ordering::SeqCst), 1);

        ctx.update_line(first, |line| line.item = "10".to_string());
        assert_eq!(counted.get(), "10");
        assert_eq!(runs.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_initial_row_count() {
        let formset = FormsetConfig { min_forms: 2, ..Default::default() };
        let group = RowGroup::with_initial_rows(OrderLine::default(), &formset, |line| fill_numeric_inputs(line, "1"));
        assert_eq!(group.len(), 2);
    }
}
