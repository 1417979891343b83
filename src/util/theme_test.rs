use super::*;

// =============================================================
// Theme tokens
// =============================================================

#[test]
fn theme_tokens_round_trip_through_parse() {
    assert_eq!(Theme::parse(Theme::Light.as_str()), Some(Theme::Light));
    assert_eq!(Theme::parse(Theme::Dark.as_str()), Some(Theme::Dark));
}

#[test]
fn parse_rejects_unknown_tokens() {
    assert_eq!(Theme::parse(""), None);
    assert_eq!(Theme::parse("Dark"), None);
    assert_eq!(Theme::parse("true"), None);
}

#[test]
fn toggling_twice_restores_original() {
    for theme in [Theme::Light, Theme::Dark] {
        assert_ne!(theme.toggled(), theme);
        assert_eq!(theme.toggled().toggled(), theme);
    }
}

#[test]
fn toggle_icon_shows_the_opposite_mode() {
    assert_eq!(Theme::Dark.toggle_icon(), "🌞");
    assert_eq!(Theme::Light.toggle_icon(), "🌙");
    assert_ne!(Theme::Dark.toggle_label(), Theme::Light.toggle_label());
}

// =============================================================
// ThemeConfig::resolve
// =============================================================

#[test]
fn site_without_stored_value_follows_light_hint() {
    assert_eq!(ThemeConfig::SITE.resolve(None, false), Theme::Light);
}

#[test]
fn site_without_stored_value_follows_dark_hint() {
    assert_eq!(ThemeConfig::SITE.resolve(None, true), Theme::Dark);
}

#[test]
fn assets_defaults_to_dark_unless_light_is_preferred() {
    assert_eq!(ThemeConfig::ASSETS.resolve(None, false), Theme::Dark);
    assert_eq!(ThemeConfig::ASSETS.resolve(None, true), Theme::Light);
}

#[test]
fn stored_token_overrides_system_hint() {
    assert_eq!(ThemeConfig::SITE.resolve(Some("light"), true), Theme::Light);
    assert_eq!(ThemeConfig::SITE.resolve(Some("dark"), false), Theme::Dark);
    assert_eq!(ThemeConfig::ASSETS.resolve(Some("dark"), true), Theme::Dark);
}

#[test]
fn invalid_stored_token_falls_back_to_hint() {
    assert_eq!(ThemeConfig::SITE.resolve(Some("blue"), true), Theme::Dark);
    assert_eq!(ThemeConfig::SITE.resolve(Some("blue"), false), Theme::Light);
}

#[test]
fn default_config_is_site() {
    assert_eq!(ThemeConfig::default(), ThemeConfig::SITE);
}

// =============================================================
// Native (non-browser) behavior
// =============================================================

#[cfg(not(feature = "csr"))]
#[test]
fn read_preference_uses_miss_theme_without_browser() {
    assert_eq!(read_preference(&ThemeConfig::SITE), Theme::Light);
    assert_eq!(read_preference(&ThemeConfig::ASSETS), Theme::Dark);
}

#[cfg(not(feature = "csr"))]
#[test]
fn toggle_flips_and_returns_next_theme() {
    assert_eq!(toggle(&ThemeConfig::SITE, Theme::Light), Theme::Dark);
    assert_eq!(toggle(&ThemeConfig::SITE, Theme::Dark), Theme::Light);
}

#[cfg(not(feature = "csr"))]
#[test]
fn apply_is_noop_but_callable() {
    apply(Theme::Light);
    apply(Theme::Dark);
}
