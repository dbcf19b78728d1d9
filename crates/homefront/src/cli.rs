//! CLI reports: derived header preview and dictionary coverage

use anyhow::{Context, Result};
use comfy_table::{Cell, Color, ContentArrangement, Row, Table};
use homefront_core::{
    AccountArea, HeaderComposer, HeaderView, Locale, NavKey, SiteConfig, StaticSession,
};
use serde_json::json;

/// Inputs for one header preview
#[derive(Debug, Clone)]
pub struct HeaderRequest {
    pub locale: Locale,
    /// Signed-in user name; `None` renders the anonymous header
    pub user: Option<String>,
    pub width: u32,
}

/// Derive the header the front end would render for `request`
pub fn derive_header(config: &SiteConfig, request: &HeaderRequest) -> HeaderView {
    let mut composer = HeaderComposer::from_config(config);
    composer.on_resize(f64::from(request.width));

    let session = match &request.user {
        Some(name) => StaticSession::signed_in(name.as_str()),
        None => StaticSession::anonymous(),
    };
    composer.view(&session, request.locale.dictionary())
}

/// Format the derived header (table or JSON)
pub fn format_header(config: &SiteConfig, request: &HeaderRequest, json: bool) -> Result<String> {
    let view = derive_header(config, request);

    if json {
        return serde_json::to_string_pretty(&view).context("Failed to serialize header");
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        Cell::new("Area").fg(Color::Cyan),
        Cell::new("Label").fg(Color::Cyan),
        Cell::new("Destination").fg(Color::Cyan),
    ]);

    for entry in &view.navigation {
        table.add_row(Row::from(vec![
            "navigation",
            entry.label.as_str(),
            entry.destination.as_str(),
        ]));
    }

    match &view.account {
        AccountArea::Actions(actions) => {
            for action in actions {
                table.add_row(Row::from(vec![
                    "action",
                    action.label.as_str(),
                    action.destination.as_str(),
                ]));
            }
        }
        AccountArea::Member(member) => {
            table.add_row(Row::from(vec!["member", member.welcome.as_str(), "-"]));
            table.add_row(Row::from(vec![
                "member",
                member.profile_label.as_str(),
                member.profile_destination.as_str(),
            ]));
            table.add_row(Row::from(vec!["member", member.logout_label.as_str(), "-"]));
        }
    }

    Ok(format!(
        "Locale: {} ({})   Width: {}px   Mode: {}\n{}",
        request.locale,
        request.locale.direction().as_str(),
        request.width,
        view.mode.as_str(),
        table
    ))
}

/// Header keys each built-in dictionary leaves to the English fallback
pub fn format_locale_report(json: bool) -> Result<String> {
    let report: Vec<(Locale, Vec<NavKey>)> = Locale::ALL
        .iter()
        .map(|&locale| {
            let dict = locale.dictionary();
            let missing = NavKey::ALL
                .iter()
                .copied()
                .filter(|key| dict.lookup(key.path()).is_none_or(|t| t.trim().is_empty()))
                .collect();
            (locale, missing)
        })
        .collect();

    if json {
        let value: Vec<_> = report
            .iter()
            .map(|(locale, missing)| {
                json!({
                    "locale": locale.code(),
                    "missing": missing.iter().map(|k| k.path()).collect::<Vec<_>>(),
                })
            })
            .collect();
        return serde_json::to_string_pretty(&value).context("Failed to serialize locale report");
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        Cell::new("Locale").fg(Color::Cyan),
        Cell::new("Key").fg(Color::Cyan),
        Cell::new("Fallback").fg(Color::Cyan),
        Cell::new("Required").fg(Color::Cyan),
    ]);

    for (locale, missing) in &report {
        for key in missing {
            table.add_row(Row::from(vec![
                locale.code(),
                key.path(),
                key.fallback(),
                if key.is_optional() { "no" } else { "yes" },
            ]));
        }
    }

    if report.iter().all(|(_, missing)| missing.is_empty()) {
        return Ok("All header keys are translated.".to_string());
    }

    Ok(table.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use homefront_core::PresentationMode;

    fn request(width: u32, user: Option<&str>) -> HeaderRequest {
        HeaderRequest {
            locale: Locale::En,
            user: user.map(str::to_string),
            width,
        }
    }

    #[test]
    fn test_derive_header_compact_anonymous() {
        let view = derive_header(&SiteConfig::default(), &request(375, None));
        assert_eq!(view.mode, PresentationMode::Stacked);
        assert_eq!(view.account.actions().len(), 2);
    }

    #[test]
    fn test_derive_header_uses_config_breakpoint() {
        let config = SiteConfig {
            breakpoint_px: 1400,
            ..SiteConfig::default()
        };
        let view = derive_header(&config, &request(1280, Some("Ayman")));
        assert_eq!(view.mode, PresentationMode::Stacked);
        assert!(view.account.member().is_some());
    }

    #[test]
    fn test_format_header_table() {
        let output = format_header(&SiteConfig::default(), &request(1280, None), false).unwrap();
        assert!(output.starts_with("Locale: en (ltr)   Width: 1280px   Mode: inline"));
        assert!(output.contains("/listings?type=rent"));
        assert!(output.contains("Sign Up"));
    }

    #[test]
    fn test_format_header_json() {
        let output =
            format_header(&SiteConfig::default(), &request(1280, Some("Ayman")), true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["account"]["kind"], "member");
        assert_eq!(value["account"]["content"]["welcome"], "Welcome, Ayman");
    }

    #[test]
    fn test_locale_report_lists_arabic_profile() {
        let output = format_locale_report(true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        let ar = value
            .as_array()
            .unwrap()
            .iter()
            .find(|entry| entry["locale"] == "ar")
            .unwrap();
        assert_eq!(ar["missing"], json!(["nav.profile"]));
    }
}
