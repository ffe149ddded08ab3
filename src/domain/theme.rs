//! Light/dark display preference.
//!
//! The preference is an explicit value handed to every rendered page, never
//! ambient global state. Persistence is a cookie owned by the web layer.

use std::fmt;
use std::str::FromStr;

/// Name of the cookie carrying the preference.
pub const THEME_COOKIE: &str = "theme";

/// Display theme for rendered pages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Returns the opposite theme.
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Reads the preference from a raw `Cookie` header value.
    ///
    /// Unknown values and a missing cookie fall back to [`Theme::Light`].
    pub fn from_cookie_header(cookie_header: &str) -> Self {
        Self::find_in_cookie_header(cookie_header).unwrap_or_default()
    }

    /// Returns the theme carried by a `Cookie` header, if it holds a valid
    /// `theme` cookie.
    pub fn find_in_cookie_header(cookie_header: &str) -> Option<Self> {
        cookie_header.split(';').find_map(|cookie| {
            let mut parts = cookie.trim().splitn(2, '=');
            match (parts.next(), parts.next()) {
                (Some(THEME_COOKIE), Some(value)) => value.parse().ok(),
                _ => None,
            }
        })
    }

    /// Formats a `Set-Cookie` value persisting this preference for a year.
    pub fn to_set_cookie(self) -> String {
        format!(
            "{THEME_COOKIE}={}; Path=/; Max-Age=31536000; SameSite=Lax",
            self.as_str()
        )
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for an unrecognized theme name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown theme '{0}'")]
pub struct UnknownTheme(String);

impl FromStr for Theme {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(UnknownTheme(other.to_string())),
        }
    }
}
