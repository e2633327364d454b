//! User-facing text lookup.
//!
//! Every component that produces display text goes through [`Translator`].
//! A missing key never fails: the key itself is returned.

use std::collections::HashMap;
use tracing::debug;

pub trait Translator: Send + Sync {
    /// Raw lookup. `None` when the key is unknown.
    fn lookup(&self, key: &str) -> Option<String>;

    fn translate(&self, key: &str) -> String {
        match self.lookup(key) {
            Some(text) => text,
            None => {
                debug!(key, "Missing translation, falling back to key");
                key.to_string()
            }
        }
    }
}

/// In-memory key → text table.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: HashMap<String, String>,
}

impl Catalog {
    /// English texts for the farmers dashboard keys.
    pub fn english() -> Self {
        [
            ("farmers.title", "Farmer Dashboard"),
            ("farmers.welcome", "Welcome"),
            ("farmers.donated", "Produce donated"),
            ("farmers.meals", "Meals provided"),
            ("farmers.tax", "Tax savings"),
            ("farmers.post", "Post Produce"),
            ("farmers.crop-type", "Crop type"),
            ("farmers.additional-info", "Additional information"),
            ("farmers.activity-type", "Activity type"),
            ("farmers.activity-type-options.sale", "Sale"),
            ("farmers.activity-type-options.donation", "Donation"),
            ("farmers.price-offered", "Price offered"),
            ("farmers.select-ngo-foodbank", "Select NGO / Food bank"),
            ("farmers.submit", "Submit"),
            ("farmers.success", "Your produce has been posted for sale!"),
            ("farmers.donated-success", "Thank you! Your donation has been posted."),
            ("farmers.pending-purchases", "Pending purchases"),
            ("farmers.completed-purchases", "Completed purchases"),
            ("farmers.price", "Price"),
            ("farmers.organization", "Organization"),
            ("farmers.buyer", "Buyer"),
            ("farmers.quantity", "Quantity"),
            ("farmers.additional-notes", "Additional notes"),
            ("farmers.select-organization", "Select organization"),
            ("farmers.update-purchase", "Update purchase"),
            ("farmers.close", "Close"),
        ]
        .into_iter()
        .collect()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Catalog {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

impl Translator for Catalog {
    fn lookup(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }
}
