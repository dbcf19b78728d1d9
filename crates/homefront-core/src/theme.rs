//! Design tokens
//!
//! Colors, typography and shape shared by every page. The web shell renders
//! them as CSS custom properties; stylesheets only reference the variables.

use serde::Serialize;
use std::fmt::Write;

/// Color palette
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Palette {
    /// Deep navy for headings and primary buttons
    pub primary: &'static str,
    /// Blue accent for actions and hover states
    pub secondary: &'static str,
    pub background: &'static str,
    pub paper: &'static str,
    pub text_primary: &'static str,
    pub text_secondary: &'static str,
    pub divider: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Typography {
    pub font_family: &'static [&'static str],
    pub h1_weight: u16,
    pub h2_weight: u16,
    pub body_size: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Shape {
    pub border_radius_px: u16,
    pub button_padding: &'static str,
    pub card_radius_px: u16,
    pub card_shadow: &'static str,
}

/// Complete light theme
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Theme {
    pub palette: Palette,
    pub typography: Typography,
    pub shape: Shape,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            palette: Palette {
                primary: "#0f172a",
                secondary: "#0B5FFF",
                background: "#F7F9FB",
                paper: "#ffffff",
                text_primary: "#1f2937",
                text_secondary: "#6b7280",
                divider: "rgba(0, 0, 0, 0.12)",
            },
            typography: Typography {
                font_family: &[
                    "Inter",
                    "-apple-system",
                    "BlinkMacSystemFont",
                    "'Segoe UI'",
                    "Roboto",
                    "'Helvetica Neue'",
                    "Arial",
                    "sans-serif",
                ],
                h1_weight: 700,
                h2_weight: 600,
                body_size: "1rem",
            },
            shape: Shape {
                border_radius_px: 10,
                button_padding: "10px 18px",
                card_radius_px: 12,
                card_shadow: "0 6px 20px rgba(12, 21, 36, 0.08)",
            },
        }
    }
}

impl Theme {
    /// `(name, value)` pairs for every CSS variable
    pub fn tokens(&self) -> Vec<(&'static str, String)> {
        let p = &self.palette;
        let t = &self.typography;
        let s = &self.shape;
        vec![
            ("--color-primary", p.primary.to_string()),
            ("--color-secondary", p.secondary.to_string()),
            ("--color-background", p.background.to_string()),
            ("--color-paper", p.paper.to_string()),
            ("--color-text", p.text_primary.to_string()),
            ("--color-text-secondary", p.text_secondary.to_string()),
            ("--color-divider", p.divider.to_string()),
            ("--font-family", t.font_family.join(",")),
            ("--font-weight-h1", t.h1_weight.to_string()),
            ("--font-weight-h2", t.h2_weight.to_string()),
            ("--font-size-body", t.body_size.to_string()),
            ("--radius", format!("{}px", s.border_radius_px)),
            ("--button-padding", s.button_padding.to_string()),
            ("--card-radius", format!("{}px", s.card_radius_px)),
            ("--card-shadow", s.card_shadow.to_string()),
        ]
    }

    /// `:root { ... }` block
    pub fn css_variables(&self) -> String {
        let mut css = String::from(":root {\n");
        for (name, value) in self.tokens() {
            let _ = writeln!(css, "  {}: {};", name, value);
        }
        css.push('}');
        css
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_css_variables() {
        let css = Theme::default().css_variables();
        assert!(css.starts_with(":root {"));
        assert!(css.contains("  --color-secondary: #0B5FFF;\n"));
        assert!(css.contains("  --radius: 10px;\n"));
        assert!(css.contains("--font-family: Inter,-apple-system,"));
        assert!(css.ends_with('}'));
    }

    #[test]
    fn test_token_names_unique() {
        let tokens = Theme::default().tokens();
        let mut names: Vec<_> = tokens.iter().map(|(n, _)| *n).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), tokens.len());
    }
}
