// SPDX-License-Identifier: MPL-2.0
//! Integration tests to validate style and design token coherence.

#[cfg(test)]
mod tests {
    use art_space::ui::design_tokens::{opacity, palette, spacing, typography};
    use art_space::ui::styles::button;
    use art_space::ui::theming::ThemeMode;
    use iced::Theme;

    #[test]
    fn all_button_styles_compile() {
        let theme = Theme::Dark;

        // Smoke-test all button styles compile and are callable
        let _ = button::primary(&theme, iced::widget::button::Status::Active);
        let _ = button::primary(&theme, iced::widget::button::Status::Disabled);
    }

    #[test]
    fn design_tokens_are_accessible() {
        // Palette
        let _ = palette::PRIMARY_500;
        let _ = palette::WHITE;

        // Spacing
        let _ = spacing::MD;

        // Opacity
        let _ = opacity::SURFACE;

        // Typography
        let _ = typography::TITLE_MD;
    }

    #[test]
    fn explicit_theme_modes_resolve_without_system_lookup() {
        assert!(!ThemeMode::Light.is_dark());
        assert!(ThemeMode::Dark.is_dark());
    }
}
