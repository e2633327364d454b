use crate::i18n::Translator;

/// Static impact figures shown at the top of the dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FarmerStats {
    pub donated: String,
    pub meals: String,
    pub tax_savings: String,
}

/// Who is using the dashboard, plus their impact summary. Read-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FarmerProfile {
    pub name: String,
    pub stats: FarmerStats,
}

impl FarmerProfile {
    pub fn new(name: impl Into<String>, stats: FarmerStats) -> Self {
        Self {
            name: name.into(),
            stats,
        }
    }

    pub fn greeting(&self, translator: &dyn Translator) -> String {
        format!("{}, {}!", translator.translate("farmers.welcome"), self.name)
    }
}

impl Default for FarmerProfile {
    fn default() -> Self {
        Self::new(
            "John Smith",
            FarmerStats {
                donated: "500 kg".to_string(),
                meals: "5,000".to_string(),
                tax_savings: "$200".to_string(),
            },
        )
    }
}
