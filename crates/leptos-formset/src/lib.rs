//! Leptos Formset Utilities
//!
//! Repeatable row groups for Leptos forms.
//! Rows are cloned from a template, get an `on_row_added` hook applied,
//! and carry add/delete affordances bounded by min/max row counts.

use leptos::prelude::*;
use serde::Deserialize;

/// Stable handle of one row. Never reused within a group.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RowId(pub u32);

/// Affordance labels, styling and row limits
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct FormsetConfig {
    /// Field name prefix used when the rows are serialized (`form-0-...`)
    pub prefix: String,
    pub add_text: String,
    pub delete_text: String,
    pub add_css_class: String,
    pub delete_css_class: String,
    pub min_forms: usize,
    pub max_forms: usize,
}

impl Default for FormsetConfig {
    fn default() -> Self {
        Self {
            prefix: "form".to_string(),
            add_text: "Добавить позицию".to_string(),
            delete_text: "Удалить".to_string(),
            add_css_class: "addlink".to_string(),
            delete_css_class: "deletelink".to_string(),
            min_forms: 1,
            max_forms: 1000,
        }
    }
}

/// Ordered rows plus the template new rows are cloned from
#[derive(Clone, Debug)]
pub struct RowGroup<T> {
    template: T,
    rows: Vec<(RowId, T)>,
    next_id: u32,
    min_forms: usize,
    max_forms: usize,
}

impl<T: Clone> RowGroup<T> {
    pub fn new(template: T, min_forms: usize, max_forms: usize) -> Self {
        Self {
            template,
            rows: Vec::new(),
            next_id: 0,
            min_forms,
            max_forms: max_forms.max(1),
        }
    }

    /// Group pre-filled with `max(min_forms, 1)` rows, each passed through `on_added`
    pub fn with_initial_rows(template: T, config: &FormsetConfig, mut on_added: impl FnMut(&mut T)) -> Self {
        let mut group = Self::new(template, config.min_forms, config.max_forms);
        let initial = config.min_forms.max(1).min(group.max_forms);
        for _ in 0..initial {
            group.add_row(&mut on_added);
        }
        group
    }

    /// Clone the template, run the hook on the clone and append it.
    /// Returns `None` once the group is at `max_forms`.
    pub fn add_row(&mut self, on_added: impl FnOnce(&mut T)) -> Option<RowId> {
        if !self.can_add() {
            return None;
        }
        let id = RowId(self.next_id);
        self.next_id += 1;
        let mut row = self.template.clone();
        on_added(&mut row);
        self.rows.push((id, row));
        Some(id)
    }

    /// Remove one row. Refused at `min_forms` or for an unknown handle.
    pub fn delete_row(&mut self, id: RowId) -> bool {
        if !self.can_delete() {
            return false;
        }
        let before = self.rows.len();
        self.rows.retain(|(row_id, _)| *row_id != id);
        self.rows.len() != before
    }

    pub fn can_add(&self) -> bool {
        self.rows.len() < self.max_forms
    }

    pub fn can_delete(&self) -> bool {
        self.rows.len() > self.min_forms
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn min_forms(&self) -> usize {
        self.min_forms
    }

    pub fn max_forms(&self) -> usize {
        self.max_forms
    }

    pub fn ids(&self) -> Vec<RowId> {
        self.rows.iter().map(|(id, _)| *id).collect()
    }

    pub fn row(&self, id: RowId) -> Option<&T> {
        self.rows.iter().find(|(row_id, _)| *row_id == id).map(|(_, row)| row)
    }

    pub fn row_mut(&mut self, id: RowId) -> Option<&mut T> {
        self.rows.iter_mut().find(|(row_id, _)| *row_id == id).map(|(_, row)| row)
    }

    /// Rows in display order
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.rows.iter().map(|(_, row)| row)
    }
}

/// Row list with add/delete links
///
/// # Arguments
/// * `rows` - Group state; rows are keyed by `RowId` so per-row state survives re-renders
/// * `config` - Link labels and CSS classes
/// * `on_row_added` - Applied to each freshly cloned row before it is inserted
/// * `row` - Renders the fields of one row
#[component]
pub fn Formset<T, H, R, V>(
    rows: RwSignal<RowGroup<T>>,
    config: FormsetConfig,
    on_row_added: H,
    row: R,
) -> impl IntoView
where
    T: Clone + Send + Sync + 'static,
    H: Fn(&mut T) + Send + Sync + 'static,
    R: Fn(RowId) -> V + Send + Sync + Clone + 'static,
    V: IntoView + 'static,
{
    let delete_text = config.delete_text.clone();
    let delete_class = config.delete_css_class.clone();
    let on_row_added = StoredValue::new(on_row_added);

    let add_row = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        let added = on_row_added
            .try_with_value(|hook| rows.try_update(|group| group.add_row(|new_row| hook(new_row))))
            .flatten()
            .flatten();
        match added {
            Some(id) => tracing::debug!(row = id.0, "formset row added"),
            None => tracing::debug!("formset is at its row limit"),
        }
    };

    view! {
        <div class="formset">
            <For
                each=move || rows.with(|group| group.ids())
                key=|id| *id
                children=move |id: RowId| {
                    let delete_text = delete_text.clone();
                    let delete_class = delete_class.clone();
                    let row = row.clone();
                    view! {
                        <div class="formset-row">
                            {row(id)}
                            <Show when=move || rows.with(|group| group.can_delete())>
                                <a
                                    class=delete_class.clone()
                                    href="#"
                                    on:click=move |ev| {
                                        ev.prevent_default();
                                        if rows.try_update(|group| group.delete_row(id)).unwrap_or(false) {
                                            tracing::debug!(row = id.0, "formset row deleted");
                                        }
                                    }
                                >
                                    {delete_text.clone()}
                                </a>
                            </Show>
                        </div>
                    }
                }
            />
            <Show when=move || rows.with(|group| group.can_add())>
                <a class=config.add_css_class.clone() href="#" on:click=add_row>
                    {config.add_text.clone()}
                </a>
            </Show>
        </div>
    }
}
