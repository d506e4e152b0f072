use portfolio_frontend::notify::{
    report_script_error, NotificationCenter, NotificationLevel, Phase, SCRIPT_ERROR_MESSAGE,
};
use pretty_assertions::assert_eq;
use std::time::Duration;

#[test]
fn toast_lifecycle_boundaries() {
    let notes = NotificationCenter::default();
    let ms = Duration::from_millis;

    assert_eq!(notes.phase_at(ms(0)), Phase::Visible);
    assert_eq!(notes.phase_at(ms(2999)), Phase::Visible);
    assert_eq!(notes.phase_at(ms(3000)), Phase::Leaving);
    assert_eq!(notes.phase_at(ms(3299)), Phase::Leaving);
    assert_eq!(notes.phase_at(ms(3300)), Phase::Expired);
}

#[test]
fn every_show_stacks_a_new_toast() {
    let mut notes = NotificationCenter::default();

    let a = notes.show("Bonjour");
    let b = notes.show("Bonjour");

    assert_ne!(a, b);
    assert_eq!(notes.len(), 2);
    assert_eq!(notes.get(a).map(|n| n.level), Some(NotificationLevel::Info));
}

#[test]
fn exit_then_remove() {
    let mut notes = NotificationCenter::default();
    let keep = notes.show("garder");
    let gone = notes.show_level("partir", NotificationLevel::Error);

    notes.begin_exit(gone);
    assert_eq!(notes.get(gone).map(|n| n.phase), Some(Phase::Leaving));
    assert_eq!(notes.get(keep).map(|n| n.phase), Some(Phase::Visible));

    notes.remove(gone);
    assert_eq!(notes.len(), 1);
    assert_eq!(notes.active()[0].id, keep);
}

#[test]
fn unknown_ids_are_ignored() {
    let mut notes = NotificationCenter::default();
    let id = notes.show("x");
    notes.remove(id);

    notes.begin_exit(id);
    notes.remove(id);
    assert!(notes.is_empty());
}

#[test]
fn custom_timings() {
    let notes = NotificationCenter::new(Duration::from_millis(100), Duration::from_millis(50));
    assert_eq!(notes.phase_at(Duration::from_millis(120)), Phase::Leaving);
    assert_eq!(notes.phase_at(Duration::from_millis(150)), Phase::Expired);
}

#[test]
fn script_errors_show_generic_message() {
    let mut notes = NotificationCenter::default();

    report_script_error(&mut notes, "TypeError: x is undefined");

    assert_eq!(notes.active()[0].message, SCRIPT_ERROR_MESSAGE);
    assert_eq!(notes.active()[0].level, NotificationLevel::Error);
}
