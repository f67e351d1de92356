//! Keyboard input dispatch: quit chord, then overlay, then global keys,
//! then sub-tab keys while the employment tab is shown.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::{AppState, Overlay};

pub fn handle_key(app: &mut AppState, key: KeyEvent) {
    // Only handle key press events (Windows sends both Press and Release).
    if key.kind != KeyEventKind::Press {
        return;
    }

    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.quit();
        return;
    }

    // 1. Overlay consumes input first.
    if app.overlay == Overlay::Help {
        match key.code {
            KeyCode::Char('q') => app.quit(),
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('?') => app.overlay = Overlay::None,
            _ => {}
        }
        return;
    }

    // 2. Global keys.
    match key.code {
        KeyCode::Char('q') => {
            app.quit();
            return;
        }
        KeyCode::Char('?') => {
            app.toggle_help();
            return;
        }
        KeyCode::Char(c) if c.is_ascii_digit() => {
            select_primary(app, &c.to_string());
            return;
        }
        KeyCode::Tab | KeyCode::Right | KeyCode::Char('l') => {
            if key.modifiers.contains(KeyModifiers::SHIFT) && key.code == KeyCode::Tab {
                app.nav.prev_primary();
            } else {
                app.nav.next_primary();
            }
            primary_changed(app);
            return;
        }
        KeyCode::BackTab | KeyCode::Left | KeyCode::Char('h') => {
            app.nav.prev_primary();
            primary_changed(app);
            return;
        }
        _ => {}
    }

    // 3. Sub-tab keys, only while the sub-tab bar is visible.
    if !app.nav.sub_tabs_visible() {
        return;
    }
    match key.code {
        KeyCode::Char(']') | KeyCode::Char('j') | KeyCode::Down => {
            app.nav.next_secondary();
            secondary_changed(app);
        }
        KeyCode::Char('[') | KeyCode::Char('k') | KeyCode::Up => {
            app.nav.prev_secondary();
            secondary_changed(app);
        }
        _ => {}
    }
}

fn select_primary(app: &mut AppState, input: &str) {
    match app.nav.select_primary(input) {
        Ok(_) => primary_changed(app),
        Err(err) => {
            tracing::debug!(%err, "ignored tab key");
            app.set_warning(err.to_string());
        }
    }
}

fn primary_changed(app: &mut AppState) {
    let tab = app.nav.primary();
    tracing::debug!(tab = %tab, "primary tab changed");
    app.status_message = None;
}

fn secondary_changed(app: &mut AppState) {
    let tab = app.nav.secondary();
    tracing::debug!(sub_tab = %tab, "sub-tab changed");
    app.status_message = None;
}

/// Key bindings help text.
pub fn key_bindings_help() -> Vec<(&'static str, &'static str)> {
    vec![
        ("1-4", "Choisir l'onglet"),
        ("Tab / Shift+Tab", "Onglet suivant / précédent"),
        ("←/h, →/l", "Onglet précédent / suivant"),
        ("] / j, [ / k", "Sous-onglet Emploi suivant / précédent"),
        ("?", "Afficher / masquer l'aide"),
        ("q / Ctrl+C", "Quitter"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::StatusLevel;
    use conjoncture_core::{Dataset, NavigationState, PrimaryTab, SecondaryTab};

    fn app() -> AppState {
        AppState::new(Dataset::bundled(), NavigationState::default())
    }

    fn press(app: &mut AppState, code: KeyCode) {
        handle_key(app, KeyEvent::from(code));
    }

    #[test]
    fn test_quit_on_q() {
        let mut app = app();
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.running);
    }

    #[test]
    fn test_quit_on_ctrl_c_even_in_help() {
        let mut app = app();
        app.overlay = Overlay::Help;
        handle_key(&mut app, KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(!app.running);
    }

    #[test]
    fn test_number_keys_select_tabs() {
        let mut app = app();
        press(&mut app, KeyCode::Char('3'));
        assert_eq!(app.nav.primary(), PrimaryTab::Employment);
        press(&mut app, KeyCode::Char('4'));
        assert_eq!(app.nav.primary(), PrimaryTab::Inflation);
    }

    #[test]
    fn test_out_of_range_digit_warns_and_keeps_tab() {
        let mut app = app();
        press(&mut app, KeyCode::Char('2'));
        press(&mut app, KeyCode::Char('9'));
        assert_eq!(app.nav.primary(), PrimaryTab::Wages);
        let (msg, level) = app.status_message.clone().unwrap();
        assert_eq!(level, StatusLevel::Warning);
        assert!(msg.contains("'9'"));
    }

    #[test]
    fn test_tab_cycles_primary() {
        let mut app = app();
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.nav.primary(), PrimaryTab::Wages);
        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.nav.primary(), PrimaryTab::PurchasingPower);
        press(&mut app, KeyCode::Left);
        assert_eq!(app.nav.primary(), PrimaryTab::Inflation);
        press(&mut app, KeyCode::Char('l'));
        assert_eq!(app.nav.primary(), PrimaryTab::PurchasingPower);
    }

    #[test]
    fn test_sub_tab_keys_only_on_employment() {
        let mut app = app();
        press(&mut app, KeyCode::Char(']'));
        assert_eq!(app.nav.secondary(), SecondaryTab::Unemployment);

        press(&mut app, KeyCode::Char('3'));
        press(&mut app, KeyCode::Char(']'));
        press(&mut app, KeyCode::Char('j'));
        assert_eq!(app.nav.secondary(), SecondaryTab::Contracts);
        press(&mut app, KeyCode::Char('['));
        assert_eq!(app.nav.secondary(), SecondaryTab::Seniors);
    }

    #[test]
    fn test_sub_tab_remembered_across_tabs() {
        let mut app = app();
        press(&mut app, KeyCode::Char('3'));
        for _ in 0..4 {
            press(&mut app, KeyCode::Char(']'));
        }
        assert_eq!(app.nav.secondary(), SecondaryTab::Recruitment);
        press(&mut app, KeyCode::Char('2'));
        press(&mut app, KeyCode::Char('3'));
        assert_eq!(app.nav.secondary(), SecondaryTab::Recruitment);
    }

    #[test]
    fn test_help_overlay_consumes_keys() {
        let mut app = app();
        press(&mut app, KeyCode::Char('?'));
        assert_eq!(app.overlay, Overlay::Help);
        press(&mut app, KeyCode::Char('3'));
        assert_eq!(app.nav.primary(), PrimaryTab::PurchasingPower);
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.overlay, Overlay::None);
    }

    #[test]
    fn test_release_events_ignored() {
        let mut app = app();
        let mut key = KeyEvent::from(KeyCode::Char('q'));
        key.kind = KeyEventKind::Release;
        handle_key(&mut app, key);
        assert!(app.running);
    }

    #[test]
    fn test_key_bindings_help() {
        let bindings = key_bindings_help();
        assert_eq!(bindings.last().unwrap().0, "q / Ctrl+C");
    }
}
