use serde::{Deserialize, Serialize};

/// Closed classification of a logged event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Category {
    Auth,
    Navigation,
    Api,
    Ui,
    Performance,
    Security,
    Business,
    System,
}

impl Category {
    /// Every category. Statistics report all of them, zero-defaulted.
    pub const ALL: [Category; 8] = [
        Category::Auth,
        Category::Navigation,
        Category::Api,
        Category::Ui,
        Category::Performance,
        Category::Security,
        Category::Business,
        Category::System,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Auth => "AUTH",
            Category::Navigation => "NAVIGATION",
            Category::Api => "API",
            Category::Ui => "UI",
            Category::Performance => "PERFORMANCE",
            Category::Security => "SECURITY",
            Category::Business => "BUSINESS",
            Category::System => "SYSTEM",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
