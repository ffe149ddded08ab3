//! Render mode selection for an incoming page request.
//!
//! Every non-root path is treated as a short code owned by the backend, so the
//! front end forwards the browser there instead of rendering the form.

/// How a page request is served.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewMode {
    /// Render the shortening form.
    Form,
    /// Forward the browser to `target` and render only a transient indicator.
    Redirect { target: String },
}

impl ViewMode {
    /// Returns the navigation target when in redirect mode.
    pub fn redirect_target(&self) -> Option<&str> {
        match self {
            Self::Form => None,
            Self::Redirect { target } => Some(target),
        }
    }
}

/// Decides the render mode for `path`.
///
/// The only branch condition is `path.len() > 1`: `"/"` (and the empty string)
/// select [`ViewMode::Form`], anything longer selects [`ViewMode::Redirect`]
/// with `api_base + path` as the target. The length is measured in bytes, so a
/// single multi-byte character after the slash still counts as a short code.
///
/// # Examples
///
/// ```
/// use shorturl_web::domain::view_mode::{ViewMode, resolve};
///
/// assert_eq!(resolve("/", "https://api.example.com"), ViewMode::Form);
/// assert_eq!(
///     resolve("/AbC12", "https://api.example.com"),
///     ViewMode::Redirect { target: "https://api.example.com/AbC12".to_string() }
/// );
/// ```
pub fn resolve(path: &str, api_base: &str) -> ViewMode {
    if path.len() > 1 {
        ViewMode::Redirect {
            target: format!("{api_base}{path}"),
        }
    } else {
        ViewMode::Form
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const API: &str = "https://api.example.com";

    #[test]
    fn test_root_selects_form() {
        assert_eq!(resolve("/", API), ViewMode::Form);
        assert_eq!(resolve("/", API).redirect_target(), None);
    }

    #[test]
    fn test_empty_path_selects_form() {
        assert_eq!(resolve("", API), ViewMode::Form);
    }

    #[test]
    fn test_short_code_selects_redirect() {
        let mode = resolve("/AbC12", API);
        assert_eq!(
            mode.redirect_target(),
            Some("https://api.example.com/AbC12")
        );
    }

    #[test]
    fn test_nested_path_is_forwarded_verbatim() {
        let mode = resolve("/a/b/c", API);
        assert_eq!(
            mode.redirect_target(),
            Some("https://api.example.com/a/b/c")
        );
    }

    #[test]
    fn test_trailing_slash_only_path_redirects() {
        // "//" is longer than one byte and is not special-cased
        let mode = resolve("//", API);
        assert_eq!(mode.redirect_target(), Some("https://api.example.com//"));
    }

    #[test]
    fn test_single_multibyte_char_redirects() {
        let mode = resolve("/é", API);
        assert!(matches!(mode, ViewMode::Redirect { .. }));
    }

    #[test]
    fn test_non_slash_single_char_selects_form() {
        assert_eq!(resolve("x", API), ViewMode::Form);
    }
}
