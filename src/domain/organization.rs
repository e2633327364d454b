use std::fmt;

/// Opaque key of an organization in the directory, e.g. `ngo_b`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OrganizationId(String);

impl OrganizationId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }
}

impl fmt::Display for OrganizationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// An NGO or food bank a farmer can sell or donate to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Organization {
    pub label: String,
    pub value: OrganizationId,
}

impl Organization {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: OrganizationId::new(value),
        }
    }
}

/// Read-only list of organizations, supplied once at construction.
///
/// Both the listing form and the order edit form populate their selection
/// from the same directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrganizationDirectory {
    entries: Vec<Organization>,
}

impl OrganizationDirectory {
    pub fn new(entries: Vec<Organization>) -> Self {
        Self { entries }
    }

    /// Selection options in directory order.
    pub fn options(&self) -> &[Organization] {
        &self.entries
    }

    pub fn find(&self, id: &OrganizationId) -> Option<&Organization> {
        self.entries.iter().find(|org| &org.value == id)
    }

    /// Display label for `id`, or the raw id when the directory has no entry.
    pub fn label_for(&self, id: &OrganizationId) -> String {
        self.find(id)
            .map(|org| org.label.clone())
            .unwrap_or_else(|| id.to_string())
    }
}

impl Default for OrganizationDirectory {
    fn default() -> Self {
        Self::new(vec![
            Organization::new("FoodBank A", "foodbank_a"),
            Organization::new("NGO B", "ngo_b"),
            Organization::new("FoodBank C", "foodbank_c"),
            Organization::new("NGO D", "ngo_d"),
        ])
    }
}
