//! Page Configuration
//!
//! The server renders a JSON block into the page
//! (`<script type="application/json" id="order-form-config">`) carrying the
//! option lists and labels. Every field has a default.

use leptos_formset::FormsetConfig;
use serde::Deserialize;

use crate::error::ConfigError;
use crate::models::{ConfiguredOption, SelectOption, PLACEHOLDER_LABEL};

/// Id of the embedded configuration element
pub const CONFIG_ELEMENT_ID: &str = "order-form-config";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct OrderFormConfig {
    /// Query parameter carrying the parent control value
    pub lookup_param: String,
    /// Label of the sentinel option
    pub placeholder: String,
    pub formset: FormsetConfig,
    /// Value given to numeric inputs of new rows
    pub default_count: String,
    #[serde(deserialize_with = "deserialize_options")]
    pub categories: Vec<SelectOption>,
    /// Unfiltered item list shown before any category is picked
    #[serde(deserialize_with = "deserialize_options")]
    pub items: Vec<SelectOption>,
    #[serde(deserialize_with = "deserialize_options")]
    pub customers: Vec<SelectOption>,
    pub csrf_token: Option<String>,
    /// How long a failed lookup message stays visible
    pub lookup_error_ms: u32,
}

impl Default for OrderFormConfig {
    fn default() -> Self {
        Self {
            lookup_param: "category".to_string(),
            placeholder: PLACEHOLDER_LABEL.to_string(),
            formset: FormsetConfig::default(),
            default_count: "1".to_string(),
            categories: Vec::new(),
            items: Vec::new(),
            customers: Vec::new(),
            csrf_token: None,
            lookup_error_ms: 4000,
        }
    }
}

fn deserialize_options<'de, D>(deserializer: D) -> Result<Vec<SelectOption>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let options = Vec::<ConfiguredOption>::deserialize(deserializer)?;
    Ok(options.into_iter().map(SelectOption::from).collect())
}

impl OrderFormConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read the configuration block from the current document
    pub fn from_document() -> Result<Self, ConfigError> {
        let text = web_sys::window()
            .and_then(|win| win.document())
            .and_then(|doc| doc.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content())
            .ok_or_else(|| ConfigError::Missing(CONFIG_ELEMENT_ID.to_string()))?;
        Self::from_json(&text)
    }

    /// Like `from_document`, falling back to defaults
    pub fn load() -> Self {
        match Self::from_document() {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!("using default order form configuration: {}", err);
                Self::default()
            }
        }
    }

    /// Parent control options: sentinel followed by the configured categories
    pub fn category_options(&self) -> Vec<SelectOption> {
        with_sentinel(&self.placeholder, &self.categories)
    }

    pub fn customer_options(&self) -> Vec<SelectOption> {
        with_sentinel(&self.placeholder, &self.customers)
    }
}

fn with_sentinel(placeholder: &str, options: &[SelectOption]) -> Vec<SelectOption> {
    std::iter::once(SelectOption::sentinel(placeholder))
        .chain(options.iter().cloned())
        .collect()
}
