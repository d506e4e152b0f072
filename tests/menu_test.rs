use portfolio_frontend::menu::{ClickTarget, MenuController};
use pretty_assertions::assert_eq;

fn menus() -> MenuController {
    MenuController::new(["menu-apps", "menu-links"])
}

#[test]
fn toggling_one_sub_menu_closes_the_other() {
    let mut menu = menus();

    assert!(menu.toggle("menu-apps"));
    assert!(menu.toggle("menu-links"));

    assert!(!menu.is_open("menu-apps"));
    assert_eq!(menu.open_menu(), Some("menu-links"));
}

#[test]
fn toggling_open_menu_closes_it() {
    let mut menu = menus();
    menu.toggle("menu-apps");

    assert!(!menu.toggle("menu-apps"));
    assert_eq!(menu.open_menu(), None);
}

#[test]
fn unknown_sub_menu_closes_others_and_reports_closed() {
    let mut menu = menus();
    menu.toggle("menu-apps");

    assert!(!menu.toggle("menu-ghost"));
    assert_eq!(menu.open_menu(), None);
}

#[test]
fn outside_click_closes_nav_and_sub_menus() {
    let mut menu = menus();
    menu.toggle_nav();
    menu.toggle("menu-links");

    menu.click(ClickTarget::outside());

    assert!(!menu.is_nav_open());
    assert_eq!(menu.open_menu(), None);
}

#[test]
fn header_click_keeps_nav_but_closes_sub_menus() {
    let mut menu = menus();
    menu.toggle_nav();
    menu.toggle("menu-apps");

    menu.click(ClickTarget::header());

    assert!(menu.is_nav_open());
    assert_eq!(menu.open_menu(), None);
}

#[test]
fn clicks_inside_nav_buttons_or_sub_menu_keep_everything_open() {
    let mut menu = menus();
    menu.toggle_nav();
    menu.toggle("menu-apps");

    menu.click(ClickTarget::nav_buttons());
    menu.click(ClickTarget::sub_menu());

    assert!(menu.is_nav_open());
    assert_eq!(menu.open_menu(), Some("menu-apps"));
}

#[test]
fn escape_closes_dashboard_only_when_open() {
    let mut menu = menus();
    assert!(!menu.key("Escape"));

    menu.open_dashboard();
    assert!(!menu.key("Enter"));
    assert!(menu.is_dashboard_open());

    assert!(menu.key("Escape"));
    assert!(!menu.is_dashboard_open());
}

#[test]
fn only_backdrop_clicks_close_dashboard() {
    let mut menu = menus();
    menu.open_dashboard();

    menu.dashboard_click(false);
    assert!(menu.is_dashboard_open());

    menu.dashboard_click(true);
    assert!(!menu.is_dashboard_open());
}

#[test]
fn theme_menu_toggles() {
    let mut menu = menus();
    menu.toggle_theme_menu();
    assert!(menu.is_theme_menu_open());
    menu.toggle_theme_menu();
    assert!(!menu.is_theme_menu_open());
}

#[test]
fn sub_menu_ids_keep_order() {
    let menu = menus();
    assert_eq!(menu.sub_menu_ids().collect::<Vec<_>>(), vec!["menu-apps", "menu-links"]);
}
