use super::constants::{
    DARK_BACKGROUND, DARK_LIGHTNESS_MIN, LIGHTNESS_SPAN, LIGHT_BACKGROUND, LIGHT_LIGHTNESS_MIN,
};
use super::notify::Listeners;
use std::ops::Range;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    #[inline]
    pub fn from_prefers_dark(prefers_dark: bool) -> Self {
        if prefers_dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    #[inline]
    pub fn is_dark(self) -> bool {
        matches!(self, Theme::Dark)
    }

    #[inline]
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn background_rgb(self) -> [f32; 3] {
        match self {
            Theme::Dark => DARK_BACKGROUND,
            Theme::Light => LIGHT_BACKGROUND,
        }
    }

    /// Half-open lightness band particle colors are drawn from.
    pub fn particle_lightness_band(self) -> Range<f32> {
        let min = match self {
            Theme::Dark => DARK_LIGHTNESS_MIN,
            Theme::Light => LIGHT_LIGHTNESS_MIN,
        };
        min..min + LIGHTNESS_SPAN
    }

    /// Class put on the document root element.
    pub fn css_class(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }
}

/// Holds the page theme. `toggle` is the only way to change it after startup.
#[derive(Debug)]
pub struct ThemeController {
    theme: Theme,
    listeners: Listeners<Theme>,
}

impl ThemeController {
    pub fn new(prefers_dark: bool) -> Self {
        Self {
            theme: Theme::from_prefers_dark(prefers_dark),
            listeners: Listeners::new(),
        }
    }

    #[inline]
    pub fn theme(&self) -> Theme {
        self.theme
    }

    #[inline]
    pub fn is_dark(&self) -> bool {
        self.theme.is_dark()
    }

    /// Register a callback invoked with the new theme after every toggle.
    pub fn subscribe(&mut self, listener: impl FnMut(&Theme) + 'static) {
        self.listeners.push(listener);
    }

    pub fn toggle(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        let theme = self.theme;
        self.listeners.emit(&theme);
        theme
    }
}
