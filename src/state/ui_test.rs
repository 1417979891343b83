use super::*;

#[test]
fn ui_state_default_is_light_site_theme() {
    let state = UiState::default();
    assert_eq!(state.theme, Theme::Light);
    assert_eq!(state.theme_config, ThemeConfig::SITE);
}

#[test]
fn with_theme_keeps_given_values() {
    let state = UiState::with_theme(ThemeConfig::ASSETS, Theme::Dark);
    assert_eq!(state.theme, Theme::Dark);
    assert_eq!(state.theme_config.storage_key, "theme-preference");
}
