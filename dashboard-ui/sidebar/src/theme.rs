use std::fmt;
use std::str::FromStr;

use iced::Color;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while selecting or building a sidebar theme.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ThemeError {
    /// The theme selector is not one of the supported values.
    #[error("unknown theme `{0}`, expected `light` or `dark`")]
    UnknownTheme(String),
    /// A palette entry is not a valid hex color.
    #[error("invalid color `{value}` for `{token}`")]
    InvalidColor { token: &'static str, value: String },
}

/// Required theme selector of the sidebar.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub enum ThemeKind {
    #[default]
    Light,
    Dark,
}

impl ThemeKind {
    /// Selector name as used in token names and settings files.
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeKind::Light => "light",
            ThemeKind::Dark => "dark",
        }
    }
}

impl fmt::Display for ThemeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeKind {
    type Err = ThemeError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "light" => Ok(ThemeKind::Light),
            "dark" => Ok(ThemeKind::Dark),
            other => Err(ThemeError::UnknownTheme(other.to_string())),
        }
    }
}

impl TryFrom<String> for ThemeKind {
    type Error = ThemeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ThemeKind> for String {
    fn from(value: ThemeKind) -> Self {
        value.as_str().to_string()
    }
}

/// Interaction state a token is resolved for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Interaction {
    Default,
    Hover,
    Active,
}

impl Interaction {
    fn as_str(self) -> &'static str {
        match self {
            Interaction::Default => "default",
            Interaction::Hover => "hover",
            Interaction::Active => "active",
        }
    }
}

/// Named style value resolved by theme selector and interaction state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThemeToken {
    SidebarBackground(Interaction),
    ButtonBackground(Interaction),
    Text(Interaction),
    LogoText,
}

impl ThemeToken {
    /// Stylesheet variable name of the token for `kind`.
    ///
    /// ```
    /// use dashboard_ui_sidebar::{Interaction, ThemeKind, ThemeToken};
    ///
    /// let token = ThemeToken::SidebarBackground(Interaction::Hover);
    /// assert_eq!(
    ///     token.variable_name(ThemeKind::Dark),
    ///     "--color-sidebar-background-dark-hover",
    /// );
    /// ```
    pub fn variable_name(self, kind: ThemeKind) -> String {
        let (group, state) = match self {
            ThemeToken::SidebarBackground(state) => {
                ("sidebar-background", state)
            },
            ThemeToken::ButtonBackground(state) => ("button-background", state),
            ThemeToken::Text(state) => ("text", state),
            ThemeToken::LogoText => ("text-logo", Interaction::Default),
        };

        format!("--color-{group}-{kind}-{}", state.as_str())
    }
}

/// Hex color values for every sidebar token of one theme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SidebarPalette {
    pub sidebar_background_default: String,
    pub sidebar_background_hover: String,
    pub sidebar_background_active: String,
    pub button_background_default: String,
    pub button_background_hover: String,
    pub button_background_active: String,
    pub text_default: String,
    pub text_hover: String,
    pub text_active: String,
    pub text_logo: String,
}

impl SidebarPalette {
    /// Built-in palette for `kind`.
    pub fn for_kind(kind: ThemeKind) -> Self {
        match kind {
            ThemeKind::Light => Self::light(),
            ThemeKind::Dark => Self::dark(),
        }
    }

    fn light() -> Self {
        Self {
            sidebar_background_default: String::from("#FFFFFF"),
            sidebar_background_hover: String::from("#F1F4F9"),
            sidebar_background_active: String::from("#E4ECFD"),
            button_background_default: String::from("#E2E8F0"),
            button_background_hover: String::from("#CBD5E1"),
            button_background_active: String::from("#2563EB"),
            text_default: String::from("#5B6579"),
            text_hover: String::from("#0F172A"),
            text_active: String::from("#2563EB"),
            text_logo: String::from("#0F172A"),
        }
    }

    fn dark() -> Self {
        Self {
            sidebar_background_default: String::from("#161822"),
            sidebar_background_hover: String::from("#232530"),
            sidebar_background_active: String::from("#2F638F"),
            button_background_default: String::from("#232530"),
            button_background_hover: String::from("#323644"),
            button_background_active: String::from("#4FA6ED"),
            text_default: String::from("#8B93A7"),
            text_hover: String::from("#ECEFF4"),
            text_active: String::from("#FFFFFF"),
            text_logo: String::from("#ECEFF4"),
        }
    }

    /// Return a copy with every `Some` override applied.
    pub fn with_overrides(mut self, overrides: &PaletteOverrides) -> Self {
        let pairs = [
            (
                &mut self.sidebar_background_default,
                &overrides.sidebar_background_default,
            ),
            (
                &mut self.sidebar_background_hover,
                &overrides.sidebar_background_hover,
            ),
            (
                &mut self.sidebar_background_active,
                &overrides.sidebar_background_active,
            ),
            (
                &mut self.button_background_default,
                &overrides.button_background_default,
            ),
            (
                &mut self.button_background_hover,
                &overrides.button_background_hover,
            ),
            (
                &mut self.button_background_active,
                &overrides.button_background_active,
            ),
            (&mut self.text_default, &overrides.text_default),
            (&mut self.text_hover, &overrides.text_hover),
            (&mut self.text_active, &overrides.text_active),
            (&mut self.text_logo, &overrides.text_logo),
        ];

        for (slot, value) in pairs {
            if let Some(value) = value {
                *slot = value.clone();
            }
        }

        self
    }
}

/// Optional per-token replacements for a built-in palette.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PaletteOverrides {
    pub sidebar_background_default: Option<String>,
    pub sidebar_background_hover: Option<String>,
    pub sidebar_background_active: Option<String>,
    pub button_background_default: Option<String>,
    pub button_background_hover: Option<String>,
    pub button_background_active: Option<String>,
    pub text_default: Option<String>,
    pub text_hover: Option<String>,
    pub text_active: Option<String>,
    pub text_logo: Option<String>,
}

impl PaletteOverrides {
    /// Return whether no token is overridden.
    pub fn is_empty(&self) -> bool {
        self == &PaletteOverrides::default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct ResolvedPalette {
    sidebar_background: [Color; 3],
    button_background: [Color; 3],
    text: [Color; 3],
    text_logo: Color,
}

impl TryFrom<&SidebarPalette> for ResolvedPalette {
    type Error = ThemeError;

    fn try_from(p: &SidebarPalette) -> Result<Self, Self::Error> {
        Ok(Self {
            sidebar_background: [
                parse_token(
                    "sidebar_background_default",
                    &p.sidebar_background_default,
                )?,
                parse_token(
                    "sidebar_background_hover",
                    &p.sidebar_background_hover,
                )?,
                parse_token(
                    "sidebar_background_active",
                    &p.sidebar_background_active,
                )?,
            ],
            button_background: [
                parse_token(
                    "button_background_default",
                    &p.button_background_default,
                )?,
                parse_token(
                    "button_background_hover",
                    &p.button_background_hover,
                )?,
                parse_token(
                    "button_background_active",
                    &p.button_background_active,
                )?,
            ],
            text: [
                parse_token("text_default", &p.text_default)?,
                parse_token("text_hover", &p.text_hover)?,
                parse_token("text_active", &p.text_active)?,
            ],
            text_logo: parse_token("text_logo", &p.text_logo)?,
        })
    }
}

/// Explicit theme configuration injected into the sidebar view.
#[derive(Debug, Clone, PartialEq)]
pub struct SidebarTheme {
    kind: ThemeKind,
    palette: SidebarPalette,
    resolved: ResolvedPalette,
}

impl SidebarTheme {
    /// Build the built-in theme for `kind`.
    pub fn new(kind: ThemeKind) -> Self {
        let palette = SidebarPalette::for_kind(kind);
        let resolved = ResolvedPalette::try_from(&palette)
            .expect("built-in palette is valid");

        Self {
            kind,
            palette,
            resolved,
        }
    }

    /// Build a theme from a custom palette, validating every color.
    pub fn from_palette(
        kind: ThemeKind,
        palette: SidebarPalette,
    ) -> Result<Self, ThemeError> {
        let resolved = ResolvedPalette::try_from(&palette)?;
        Ok(Self {
            kind,
            palette,
            resolved,
        })
    }

    pub fn kind(&self) -> ThemeKind {
        self.kind
    }

    pub fn palette(&self) -> &SidebarPalette {
        &self.palette
    }

    /// Resolve a token to its color for this theme.
    pub fn token(&self, token: ThemeToken) -> Color {
        let p = &self.resolved;
        match token {
            ThemeToken::SidebarBackground(state) => {
                p.sidebar_background[slot(state)]
            },
            ThemeToken::ButtonBackground(state) => {
                p.button_background[slot(state)]
            },
            ThemeToken::Text(state) => p.text[slot(state)],
            ThemeToken::LogoText => p.text_logo,
        }
    }
}

impl Default for SidebarTheme {
    fn default() -> Self {
        Self::new(ThemeKind::default())
    }
}

fn slot(state: Interaction) -> usize {
    match state {
        Interaction::Default => 0,
        Interaction::Hover => 1,
        Interaction::Active => 2,
    }
}

fn parse_token(token: &'static str, value: &str) -> Result<Color, ThemeError> {
    parse_hex_color(value).ok_or_else(|| ThemeError::InvalidColor {
        token,
        value: value.to_string(),
    })
}

/// Parse `#RGB`, `#RGBA`, `#RRGGBB` or `#RRGGBBAA` into a color.
///
/// Input must be `#` followed by ASCII hex digits only; iced's parser slices
/// by byte and is only handed text that passed this check.
pub fn parse_hex_color(value: &str) -> Option<Color> {
    let value = value.trim();
    let hex = value.strip_prefix('#')?;
    if hex.is_empty() || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    value.parse::<Color>().ok()
}
