//! Theme configuration for CLI and player output
//!
//! Centralizes all color definitions. Colors are plain ANSI escape
//! codes; when stdout is not a terminal (or `NO_COLOR` is set) every
//! code collapses to the empty string so piped output stays clean.

/// ANSI escape codes used across the CLI and the preview player.
pub mod ansi {
    pub const RESET: &str = "\x1b[0m";
    pub const WHITE: &str = "\x1b[97m";
    pub const GREY: &str = "\x1b[37m";
    pub const DARK_GREY: &str = "\x1b[90m";
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const CYAN: &str = "\x1b[36m";
}

/// Color roles for themed output.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Primary text color (used for most content)
    pub text_primary: &'static str,
    /// Secondary/dimmed text color
    pub text_secondary: &'static str,
    /// Accent color for keybindings and highlights
    pub accent: &'static str,
    /// On-air live indicator color
    pub live: &'static str,
    /// Behind-live / inactive indicator color
    pub behind: &'static str,
    /// Error color
    pub error: &'static str,
    /// Reset code paired with the colors above
    pub reset: &'static str,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dvrbar()
    }
}

impl Theme {
    /// dvrbar theme - grey text, cyan accents, red on-air dot.
    pub fn dvrbar() -> Self {
        Self {
            text_primary: ansi::GREY,
            text_secondary: ansi::DARK_GREY,
            accent: ansi::CYAN,
            live: ansi::RED,
            behind: ansi::DARK_GREY,
            error: ansi::RED,
            reset: ansi::RESET,
        }
    }

    /// Classic terminal theme - white text, yellow accents.
    pub fn classic() -> Self {
        Self {
            text_primary: ansi::WHITE,
            text_secondary: ansi::DARK_GREY,
            accent: ansi::YELLOW,
            live: ansi::RED,
            behind: ansi::DARK_GREY,
            error: ansi::RED,
            reset: ansi::RESET,
        }
    }

    /// Cyan-forward theme.
    pub fn ocean() -> Self {
        Self {
            text_primary: ansi::CYAN,
            text_secondary: ansi::DARK_GREY,
            accent: ansi::WHITE,
            live: ansi::GREEN,
            behind: ansi::DARK_GREY,
            error: ansi::RED,
            reset: ansi::RESET,
        }
    }

    /// Theme with every code empty, for non-terminal output.
    pub fn plain() -> Self {
        Self {
            text_primary: "",
            text_secondary: "",
            accent: "",
            live: "",
            behind: "",
            error: "",
            reset: "",
        }
    }

    /// Resolve a configured theme name, falling back to the default
    /// for unknown names.
    pub fn by_name(name: &str) -> Self {
        match name {
            "classic" => Self::classic(),
            "ocean" => Self::ocean(),
            _ => Self::dvrbar(),
        }
    }

    // ANSI helpers for CLI output

    /// Format text with the primary color.
    pub fn primary_text(&self, text: &str) -> String {
        format!("{}{}{}", self.text_primary, text, self.reset)
    }

    /// Format text with the secondary color.
    pub fn secondary_text(&self, text: &str) -> String {
        format!("{}{}{}", self.text_secondary, text, self.reset)
    }

    /// Format text with the accent color.
    pub fn accent_text(&self, text: &str) -> String {
        format!("{}{}{}", self.accent, text, self.reset)
    }

    /// Format text with the on-air color.
    pub fn live_text(&self, text: &str) -> String {
        format!("{}{}{}", self.live, text, self.reset)
    }

    /// Format text with the error color.
    pub fn error_text(&self, text: &str) -> String {
        format!("{}{}{}", self.error, text, self.reset)
    }
}

/// Theme for the current process: the configured theme when stdout is
/// a terminal, the plain theme otherwise or when `NO_COLOR` is set.
pub fn current_theme() -> Theme {
    if !atty::is(atty::Stream::Stdout) || std::env::var_os("NO_COLOR").is_some() {
        return Theme::plain();
    }

    match crate::config::Config::load() {
        Ok(config) => Theme::by_name(&config.ui.theme),
        Err(_) => Theme::default(),
    }
}
