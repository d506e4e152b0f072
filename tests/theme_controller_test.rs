//! Theme controller: apply by name or path, body classes, stylesheet links,
//! persistence, button bindings and failure toasts.

use portfolio_frontend::notify::{NotificationCenter, NotificationLevel};
use portfolio_frontend::theme::{
    MemoryDocument, MemoryStore, ThemeCategory, ThemeController, ThemeDescriptor, ThemeDocument,
    ThemeRegistry, THEME_CLASS_PREFIX,
};
use portfolio_frontend::{PageConfig, PageError};
use pretty_assertions::assert_eq;

fn controller() -> ThemeController<MemoryDocument> {
    ThemeController::new(ThemeRegistry::builtin(), MemoryDocument::new(), &PageConfig::default())
}

fn theme_classes(doc: &MemoryDocument) -> Vec<String> {
    doc.body_classes()
        .into_iter()
        .filter(|c| c.starts_with(THEME_CLASS_PREFIX))
        .collect()
}

fn two_theme_registry() -> ThemeRegistry {
    ThemeRegistry::new(vec![
        ThemeDescriptor::new("glass", "css/TRANSLUCENT/glass.css", "theme-glass", ThemeCategory::Translucent),
        ThemeDescriptor::new("sombre", "css/OPAQUE/sombre.css", "theme-sombre", ThemeCategory::Opaque),
    ])
    .unwrap()
}

#[test]
fn every_registered_theme_leaves_exactly_its_own_class() {
    let mut themes = controller();
    let mut notes = NotificationCenter::default();
    let names: Vec<String> = themes.registry().iter().map(|t| t.name.clone()).collect();

    for name in names {
        let applied = themes.apply_theme(&name, &mut notes).unwrap();
        assert_eq!(theme_classes(themes.document()), vec![applied.class.clone()]);
        assert_eq!(themes.current_theme(), Some(name.as_str()));
    }
}

#[test]
fn apply_by_stylesheet_path() {
    let mut themes = controller();
    let mut notes = NotificationCenter::default();

    let applied = themes.apply_theme("css/AMOLED/gold.css", &mut notes).unwrap();

    assert_eq!(applied.name, "gold");
    assert!(themes.document().has_body_class("theme-gold"));
    assert_eq!(themes.document().stylesheets(), &["css/AMOLED/gold.css".to_string()]);
}

#[test]
fn apply_resolves_case_insensitively_to_canonical_name() {
    let mut themes = controller();
    let mut notes = NotificationCenter::default();

    themes.apply_theme("css/AMOLED/amoled.css", &mut notes).unwrap();
    assert_eq!(themes.current_theme(), Some("AMOLED"));

    themes.apply_theme("ACRYLIC", &mut notes).unwrap();
    assert_eq!(themes.current_theme(), Some("Acrylic"));
    assert!(themes.document().has_body_class("theme-acrylic"));
}

#[test]
fn unknown_theme_keeps_current_and_notifies_once() {
    let mut themes = ThemeController::new(two_theme_registry(), MemoryDocument::new(), &PageConfig::default());
    let mut notes = NotificationCenter::default();
    themes.apply_theme("sombre", &mut notes).unwrap();
    let before = notes.len();

    let err = themes.apply_theme("unknown", &mut notes).unwrap_err();

    assert_eq!(err, PageError::ThemeNotFound("unknown".to_string()));
    assert_eq!(themes.current_theme(), Some("sombre"));
    assert!(themes.document().has_body_class("theme-sombre"));
    assert_eq!(notes.len(), before + 1);
    let last = notes.active().last().unwrap();
    assert!(last.message.contains("non disponible"));
    assert_eq!(last.level, NotificationLevel::Error);
}

#[test]
fn unknown_theme_before_initialization_leaves_no_theme() {
    let mut themes = controller();
    let mut notes = NotificationCenter::default();

    assert!(themes.apply_theme("css/NOPE/nope.css", &mut notes).is_err());
    assert_eq!(themes.current_theme(), None);
    assert!(theme_classes(themes.document()).is_empty());
    assert!(themes.document().stylesheets().is_empty());
}

#[test]
fn applying_same_path_twice_does_not_duplicate_link() {
    let mut themes = controller();
    let mut notes = NotificationCenter::default();

    themes.apply_theme("css/OPAQUE/azure.css", &mut notes).unwrap();
    themes.apply_theme("css/OPAQUE/azure.css", &mut notes).unwrap();

    assert_eq!(themes.document().stylesheet_count("css/OPAQUE/azure.css"), 1);
    assert_eq!(themes.document().stylesheets().len(), 1);
}

#[test]
fn switching_theme_replaces_tracked_stylesheet() {
    let mut themes = controller();
    let mut notes = NotificationCenter::default();

    themes.apply_theme("glass", &mut notes).unwrap();
    themes.apply_theme("crimson", &mut notes).unwrap();

    assert_eq!(themes.document().stylesheets(), &["css/AMOLED/crimson.css".to_string()]);
    assert_eq!(
        themes.state().stylesheet.as_ref().map(|h| h.href()),
        Some("css/AMOLED/crimson.css")
    );
}

#[test]
fn existing_link_is_reused_not_inserted() {
    let doc = MemoryDocument::new().with_stylesheet("css/OPAQUE/clair.css");
    let mut themes = ThemeController::new(ThemeRegistry::builtin(), doc, &PageConfig::default());
    let mut notes = NotificationCenter::default();

    themes.apply_theme("clair", &mut notes).unwrap();

    assert_eq!(themes.document().stylesheet_count("css/OPAQUE/clair.css"), 1);
    assert_eq!(
        themes.state().stylesheet.as_ref().map(|h| h.href()),
        Some("css/OPAQUE/clair.css")
    );
}

#[test]
fn non_theme_body_classes_survive() {
    let doc = MemoryDocument::new()
        .with_body_class("dark-mode")
        .with_body_class("theme-legacy");
    let mut themes = ThemeController::new(ThemeRegistry::builtin(), doc, &PageConfig::default());
    let mut notes = NotificationCenter::default();

    themes.apply_theme("blur", &mut notes).unwrap();

    assert!(themes.document().has_body_class("dark-mode"));
    assert_eq!(theme_classes(themes.document()), vec!["theme-blur".to_string()]);
}

#[test]
fn unprefixed_registry_classes_are_replaced_on_switch() {
    let registry = ThemeRegistry::from_json(
        r#"[
            {"name": "nord", "stylesheet": "css/OPAQUE/nord.css", "class": "nord", "category": "opaque"},
            {"name": "mist", "stylesheet": "css/TRANSLUCENT/mist.css", "class": "mist", "category": "translucent"}
        ]"#,
    )
    .unwrap();
    let doc = MemoryDocument::new().with_body_class("dark-mode");
    let mut themes = ThemeController::new(registry, doc, &PageConfig::default());
    let mut notes = NotificationCenter::default();

    themes.apply_theme("nord", &mut notes).unwrap();
    themes.apply_theme("mist", &mut notes).unwrap();

    assert_eq!(
        themes.document().body_classes(),
        vec!["dark-mode".to_string(), "mist".to_string()]
    );
}

#[test]
fn success_notification_is_on_by_default() {
    let mut themes = controller();
    let mut notes = NotificationCenter::default();

    themes.apply_theme("galaxy", &mut notes).unwrap();

    assert_eq!(notes.len(), 1);
    assert_eq!(notes.active()[0].message, "Thème \"galaxy\" appliqué");
}

#[test]
fn success_notification_can_be_silenced() {
    let config = PageConfig {
        notify_on_theme_change: false,
        ..PageConfig::default()
    };
    let mut themes = ThemeController::new(ThemeRegistry::builtin(), MemoryDocument::new(), &config);
    let mut notes = NotificationCenter::default();

    themes.apply_theme("galaxy", &mut notes).unwrap();
    assert!(notes.is_empty());

    themes.apply_theme("missing", &mut notes).unwrap_err();
    assert_eq!(notes.len(), 1);
}

#[test]
fn initialize_applies_default_theme() {
    let mut themes = controller();
    let mut notes = NotificationCenter::default();

    let applied = themes.initialize(&mut notes).unwrap();

    assert_eq!(applied.name, "AMOLED");
    assert!(themes.document().has_body_class("theme-amoled"));
    assert_eq!(themes.store().value(), Some("AMOLED"));
}

#[test]
fn initialize_prefers_persisted_theme() {
    let mut themes = ThemeController::with_store(
        ThemeRegistry::builtin(),
        MemoryDocument::new(),
        MemoryStore::with_value("css/OPAQUE/capybara.css"),
        &PageConfig::default(),
    );
    let mut notes = NotificationCenter::default();

    themes.initialize(&mut notes);

    assert_eq!(themes.current_theme(), Some("capybara"));
}

#[test]
fn initialize_ignores_stale_persisted_theme() {
    let mut themes = ThemeController::with_store(
        ThemeRegistry::builtin(),
        MemoryDocument::new(),
        MemoryStore::with_value("retired-theme"),
        &PageConfig::default(),
    );
    let mut notes = NotificationCenter::default();

    themes.initialize(&mut notes);

    assert_eq!(themes.current_theme(), Some("AMOLED"));
}

#[test]
fn initialize_with_missing_default_does_not_fail() {
    let config = PageConfig {
        default_theme: "css/GONE/gone.css".to_string(),
        ..PageConfig::default()
    };
    let mut themes = ThemeController::new(ThemeRegistry::builtin(), MemoryDocument::new(), &config);
    let mut notes = NotificationCenter::default();

    assert!(themes.initialize(&mut notes).is_none());
    assert_eq!(themes.current_theme(), None);
    assert_eq!(notes.len(), 1);
}

#[test]
fn selection_is_persisted() {
    let mut themes = controller();
    let mut notes = NotificationCenter::default();

    themes.apply_theme("css/TRANSLUCENT/transparent.css", &mut notes).unwrap();

    assert_eq!(themes.store().value(), Some("transparent"));
}

#[test]
fn bound_control_applies_theme_and_becomes_active() {
    let mut themes = controller();
    let mut notes = NotificationCenter::default();
    themes.bind("btn-gold", "css/AMOLED/gold.css");
    themes.bind("btn-azure", "azure");

    themes.select_control("btn-gold", &mut notes).unwrap();

    assert_eq!(themes.current_theme(), Some("gold"));
    assert!(themes.is_control_active("btn-gold"));
    assert!(!themes.is_control_active("btn-azure"));

    themes.select_control("btn-azure", &mut notes).unwrap();
    assert_eq!(themes.active_controls(), vec!["btn-azure"]);
}

#[test]
fn unbound_control_is_rejected_without_change() {
    let mut themes = controller();
    let mut notes = NotificationCenter::default();
    themes.apply_theme("gold", &mut notes).unwrap();

    let err = themes.select_control("btn-nothing", &mut notes).unwrap_err();

    assert_eq!(err, PageError::UnboundControl("btn-nothing".to_string()));
    assert_eq!(themes.current_theme(), Some("gold"));
}

#[test]
fn bind_registry_binds_every_theme_by_name() {
    let mut themes = controller();
    themes.bind_registry();
    assert_eq!(themes.bindings().len(), 12);

    let mut notes = NotificationCenter::default();
    themes.select_control("sombre", &mut notes).unwrap();
    assert!(themes.is_control_active("sombre"));
}

#[test]
fn stylesheet_failure_notifies_error() {
    let mut notes = NotificationCenter::default();

    let err = portfolio_frontend::theme::stylesheet_failed("css/AMOLED/gold.css", &mut notes);

    assert_eq!(err, PageError::StylesheetLoad("css/AMOLED/gold.css".to_string()));
    assert_eq!(notes.active()[0].message, "Erreur de chargement du thème");
    assert_eq!(notes.active()[0].level, NotificationLevel::Error);
}

#[test]
fn themes_by_category_groups_in_registry_order() {
    let themes = controller();
    let groups = themes.themes_by_category();

    assert_eq!(groups.len(), 3);
    let (category, opaque) = &groups[1];
    assert_eq!(*category, ThemeCategory::Opaque);
    let names: Vec<&str> = opaque.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["clair", "sombre", "capybara", "azure"]);
}
