use super::document::{StylesheetHandle, ThemeDocument, THEME_CLASS_PREFIX};
use super::registry::{ThemeCategory, ThemeDescriptor, ThemeRegistry};
use super::store::{MemoryStore, ThemeStore};
use crate::config::PageConfig;
use crate::error::{PageError, Result};
use crate::notify::{NotificationLevel, Notifier};

/// Theme name from either a bare name or a stylesheet path:
/// `css/AMOLED/gold.css` -> `gold`.
pub fn theme_name_from_target(target: &str) -> &str {
    let file = target.rsplit('/').next().unwrap_or(target);
    file.strip_suffix(".css").unwrap_or(file)
}

/// A theme stylesheet reported a load error. No retry, no fallback; the
/// body class stays applied.
pub fn stylesheet_failed(href: &str, notifier: &mut impl Notifier) -> PageError {
    tracing::error!(%href, "theme stylesheet failed to load");
    notifier.notify("Erreur de chargement du thème".to_string(), NotificationLevel::Error);
    PageError::StylesheetLoad(href.to_string())
}

/// A theme button and the theme it selects.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ThemeBinding {
    pub control_id: String,
    pub theme: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ActiveThemeState {
    pub current: Option<String>,
    pub stylesheet: Option<StylesheetHandle>,
}

/// Owns the active theme. Exactly one theme is applied at a time once
/// `initialize` has run.
pub struct ThemeController<D: ThemeDocument, S: ThemeStore = MemoryStore> {
    registry: ThemeRegistry,
    document: D,
    store: S,
    state: ActiveThemeState,
    bindings: Vec<ThemeBinding>,
    default_theme: String,
    notify_on_change: bool,
}

impl<D: ThemeDocument> ThemeController<D, MemoryStore> {
    pub fn new(registry: ThemeRegistry, document: D, config: &PageConfig) -> Self {
        Self::with_store(registry, document, MemoryStore::new(), config)
    }
}

impl<D: ThemeDocument, S: ThemeStore> ThemeController<D, S> {
    pub fn with_store(registry: ThemeRegistry, document: D, store: S, config: &PageConfig) -> Self {
        Self {
            registry,
            document,
            store,
            state: ActiveThemeState::default(),
            bindings: Vec::new(),
            default_theme: config.default_theme.clone(),
            notify_on_change: config.notify_on_theme_change,
        }
    }

    /// Bind a button id to a theme (name or stylesheet path).
    pub fn bind(&mut self, control_id: &str, target: &str) {
        let name = theme_name_from_target(target);
        let theme = match self.registry.resolve(name) {
            Some(t) => t.name.clone(),
            None => {
                tracing::warn!(control = %control_id, theme = %name, "binding to unknown theme");
                name.to_string()
            }
        };
        self.bindings.retain(|b| b.control_id != control_id);
        self.bindings.push(ThemeBinding {
            control_id: control_id.to_string(),
            theme,
        });
    }

    /// One binding per registry entry, using the theme name as control id.
    pub fn bind_registry(&mut self) {
        let names: Vec<String> = self.registry.iter().map(|t| t.name.clone()).collect();
        for name in names {
            self.bind(&name, &name);
        }
    }

    /// Apply the persisted theme, or the configured default. Never fails:
    /// a missing theme is logged and notified by `apply_theme`.
    pub fn initialize(&mut self, notifier: &mut impl Notifier) -> Option<ThemeDescriptor> {
        tracing::info!(themes = self.registry.len(), "theme system initialized");
        let persisted = match self.store.load() {
            Ok(v) => v,
            Err(e) => {
                tracing::warn!(error = %e, "could not read persisted theme");
                None
            }
        };
        let target = persisted
            .filter(|t| self.registry.resolve(theme_name_from_target(t)).is_some())
            .unwrap_or_else(|| self.default_theme.clone());
        match self.apply_theme(&target, notifier) {
            Ok(theme) => Some(theme),
            Err(e) => {
                tracing::warn!(error = %e, "startup theme not applied");
                None
            }
        }
    }

    pub fn apply_theme(&mut self, target: &str, notifier: &mut impl Notifier) -> Result<ThemeDescriptor> {
        let name = theme_name_from_target(target);
        let Some(theme) = self.registry.resolve(name).cloned() else {
            tracing::warn!(theme = %name, "theme not found");
            notifier.notify(format!("Thème \"{name}\" non disponible"), NotificationLevel::Error);
            return Err(PageError::ThemeNotFound(name.to_string()));
        };

        if let Err(e) = self.switch_to(&theme) {
            tracing::error!(theme = %theme.name, error = %e, "theme change failed");
            notifier.notify("Erreur lors du changement de thème".to_string(), NotificationLevel::Error);
            return Err(e);
        }
        self.state.current = Some(theme.name.clone());

        if let Err(e) = self.store.save(&theme.name) {
            tracing::warn!(theme = %theme.name, error = %e, "could not persist theme");
        }
        if self.notify_on_change {
            notifier.notify(format!("Thème \"{}\" appliqué", theme.name), NotificationLevel::Info);
        }
        tracing::info!(theme = %theme.name, "theme changed");
        Ok(theme)
    }

    /// Click on a bound theme button.
    pub fn select_control(&mut self, control_id: &str, notifier: &mut impl Notifier) -> Result<ThemeDescriptor> {
        let Some(binding) = self.bindings.iter().find(|b| b.control_id == control_id) else {
            tracing::warn!(control = %control_id, "click on unbound theme control");
            return Err(PageError::UnboundControl(control_id.to_string()));
        };
        let theme = binding.theme.clone();
        self.apply_theme(&theme, notifier)
    }

    fn switch_to(&mut self, theme: &ThemeDescriptor) -> Result<()> {
        for class in self.document.body_classes() {
            let is_theme_class =
                class.starts_with(THEME_CLASS_PREFIX) || self.registry.iter().any(|t| t.class == class);
            if is_theme_class {
                self.document.remove_body_class(&class)?;
            }
        }
        self.document.add_body_class(&theme.class)?;
        self.ensure_stylesheet(&theme.stylesheet)
    }

    fn ensure_stylesheet(&mut self, href: &str) -> Result<()> {
        if self.state.stylesheet.as_ref().is_some_and(|h| h.href() == href) {
            return Ok(());
        }
        if let Some(old) = self.state.stylesheet.take() {
            self.document.remove_stylesheet(&old)?;
        }
        let handle = match self.document.find_stylesheet(href) {
            Some(existing) => existing,
            None => self.document.insert_stylesheet(href)?,
        };
        self.state.stylesheet = Some(handle);
        Ok(())
    }

    pub fn current_theme(&self) -> Option<&str> {
        self.state.current.as_deref()
    }

    pub fn current_descriptor(&self) -> Option<&ThemeDescriptor> {
        self.current_theme().and_then(|n| self.registry.lookup(n))
    }

    pub fn state(&self) -> &ActiveThemeState {
        &self.state
    }

    /// True when the control's bound theme is the active one.
    pub fn is_control_active(&self, control_id: &str) -> bool {
        let Some(current) = self.current_theme() else {
            return false;
        };
        self.bindings
            .iter()
            .any(|b| b.control_id == control_id && b.theme == current)
    }

    pub fn active_controls(&self) -> Vec<&str> {
        self.bindings
            .iter()
            .filter(|b| self.current_theme() == Some(b.theme.as_str()))
            .map(|b| b.control_id.as_str())
            .collect()
    }

    pub fn bindings(&self) -> &[ThemeBinding] {
        &self.bindings
    }

    pub fn registry(&self) -> &ThemeRegistry {
        &self.registry
    }

    pub fn themes_by_category(&self) -> Vec<(ThemeCategory, Vec<&ThemeDescriptor>)> {
        ThemeCategory::all()
            .iter()
            .map(|c| (*c, self.registry.list_by_category(*c)))
            .collect()
    }

    pub fn set_notify_on_change(&mut self, enabled: bool) {
        self.notify_on_change = enabled;
    }

    pub fn document(&self) -> &D {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut D {
        &mut self.document
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
