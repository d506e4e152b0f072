use crate::error::{PageError, Result};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeCategory {
    Amoled,
    Opaque,
    Translucent,
}

impl ThemeCategory {
    pub fn all() -> &'static [ThemeCategory] {
        &[ThemeCategory::Amoled, ThemeCategory::Opaque, ThemeCategory::Translucent]
    }

    /// Heading used in the theme menu.
    pub fn display_name(&self) -> &'static str {
        match self {
            ThemeCategory::Amoled => "AMOLED",
            ThemeCategory::Opaque => "Opaque",
            ThemeCategory::Translucent => "Translucide",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeDescriptor {
    pub name: String,
    pub stylesheet: String,
    pub class: String,
    pub category: ThemeCategory,
}

impl ThemeDescriptor {
    pub fn new(name: &str, stylesheet: &str, class: &str, category: ThemeCategory) -> Self {
        Self {
            name: name.to_string(),
            stylesheet: stylesheet.to_string(),
            class: class.to_string(),
            category,
        }
    }
}

/// Immutable name -> descriptor table, kept in insertion order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ThemeRegistry {
    themes: Vec<ThemeDescriptor>,
}

static BUILTIN: Lazy<ThemeRegistry> = Lazy::new(|| {
    use ThemeCategory::*;
    ThemeRegistry {
        themes: vec![
            ThemeDescriptor::new("AMOLED", "css/AMOLED/AMOLED.css", "theme-amoled", Amoled),
            ThemeDescriptor::new("gold", "css/AMOLED/gold.css", "theme-gold", Amoled),
            ThemeDescriptor::new("galaxy", "css/AMOLED/galaxy.css", "theme-galaxy", Amoled),
            ThemeDescriptor::new("crimson", "css/AMOLED/crimson.css", "theme-crimson", Amoled),
            ThemeDescriptor::new("clair", "css/OPAQUE/clair.css", "theme-clair", Opaque),
            ThemeDescriptor::new("sombre", "css/OPAQUE/sombre.css", "theme-sombre", Opaque),
            ThemeDescriptor::new("capybara", "css/OPAQUE/capybara.css", "theme-capybara", Opaque),
            ThemeDescriptor::new("azure", "css/OPAQUE/azure.css", "theme-azure", Opaque),
            ThemeDescriptor::new("glass", "css/TRANSLUCENT/glass.css", "theme-glass", Translucent),
            ThemeDescriptor::new("blur", "css/TRANSLUCENT/blur.css", "theme-blur", Translucent),
            ThemeDescriptor::new("Acrylic", "CSS/TRANSLUCENT/Acrylic.css", "theme-acrylic", Translucent),
            ThemeDescriptor::new(
                "transparent",
                "CSS/TRANSLUCENT/transparent.css",
                "theme-transparent",
                Translucent,
            ),
        ],
    }
});

impl ThemeRegistry {
    /// Build a registry; fails on a repeated name.
    pub fn new(themes: Vec<ThemeDescriptor>) -> Result<Self> {
        for (i, t) in themes.iter().enumerate() {
            if themes[..i].iter().any(|prev| prev.name == t.name) {
                return Err(PageError::DuplicateTheme(t.name.clone()));
            }
        }
        Ok(Self { themes })
    }

    /// The twelve themes shipped with the page.
    pub fn builtin() -> Self {
        BUILTIN.clone()
    }

    /// Load a registry from a JSON array of descriptors.
    pub fn from_json(json: &str) -> Result<Self> {
        let themes: Vec<ThemeDescriptor> =
            serde_json::from_str(json).map_err(|e| PageError::Config(e.to_string()))?;
        Self::new(themes)
    }

    /// Exact-name lookup.
    pub fn lookup(&self, name: &str) -> Option<&ThemeDescriptor> {
        self.themes.iter().find(|t| t.name == name)
    }

    /// Exact lookup, falling back to a case-insensitive match.
    pub fn resolve(&self, name: &str) -> Option<&ThemeDescriptor> {
        self.lookup(name)
            .or_else(|| self.themes.iter().find(|t| t.name.eq_ignore_ascii_case(name)))
    }

    pub fn list_by_category(&self, category: ThemeCategory) -> Vec<&ThemeDescriptor> {
        self.themes.iter().filter(|t| t.category == category).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ThemeDescriptor> {
        self.themes.iter()
    }

    pub fn names(&self) -> Vec<&str> {
        self.themes.iter().map(|t| t.name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.themes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.themes.is_empty()
    }
}
