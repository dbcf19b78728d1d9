//! Locale dictionaries
//!
//! Dictionaries are nested JSON objects addressed with dotted paths
//! (`nav.buy`, `pages.home.hero.title`). Lookups never fail: a missing or
//! empty key resolves to a caller-supplied fallback so the header cannot
//! blank out.

use crate::error::SiteError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::{debug, error};

const EN_JSON: &str = include_str!("../locales/en.json");
const AR_JSON: &str = include_str!("../locales/ar.json");

/// Supported site locales
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Ar,
}

/// Text direction for the document root
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextDirection {
    Ltr,
    Rtl,
}

impl TextDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            TextDirection::Ltr => "ltr",
            TextDirection::Rtl => "rtl",
        }
    }
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Ar];

    pub fn code(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Ar => "ar",
        }
    }

    pub fn direction(&self) -> TextDirection {
        match self {
            Locale::En => TextDirection::Ltr,
            Locale::Ar => TextDirection::Rtl,
        }
    }

    /// Next locale in the language toggle cycle
    pub fn next(&self) -> Locale {
        match self {
            Locale::En => Locale::Ar,
            Locale::Ar => Locale::En,
        }
    }

    /// Built-in dictionary for this locale
    pub fn dictionary(&self) -> &'static LocaleDictionary {
        LocaleDictionary::builtin(*self)
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = SiteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" | "en-us" | "en-gb" => Ok(Locale::En),
            "ar" | "ar-lb" => Ok(Locale::Ar),
            _ => Err(SiteError::UnknownLocale {
                code: s.to_string(),
            }),
        }
    }
}

/// Header label keys under `nav.*`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavKey {
    Buy,
    Sell,
    Rent,
    AboutUs,
    Contact,
    Login,
    Signup,
    Welcome,
    Profile,
    Logout,
    Search,
    OpenMenu,
    CloseMenu,
    UserMenu,
    Language,
}

impl NavKey {
    pub const ALL: [NavKey; 15] = [
        NavKey::Buy,
        NavKey::Sell,
        NavKey::Rent,
        NavKey::AboutUs,
        NavKey::Contact,
        NavKey::Login,
        NavKey::Signup,
        NavKey::Welcome,
        NavKey::Profile,
        NavKey::Logout,
        NavKey::Search,
        NavKey::OpenMenu,
        NavKey::CloseMenu,
        NavKey::UserMenu,
        NavKey::Language,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            NavKey::Buy => "nav.buy",
            NavKey::Sell => "nav.sell",
            NavKey::Rent => "nav.rent",
            NavKey::AboutUs => "nav.aboutUs",
            NavKey::Contact => "nav.contact",
            NavKey::Login => "nav.login",
            NavKey::Signup => "nav.signup",
            NavKey::Welcome => "nav.welcome",
            NavKey::Profile => "nav.profile",
            NavKey::Logout => "nav.logout",
            NavKey::Search => "nav.search",
            NavKey::OpenMenu => "nav.openMenu",
            NavKey::CloseMenu => "nav.closeMenu",
            NavKey::UserMenu => "nav.userMenu",
            NavKey::Language => "nav.language",
        }
    }

    /// Literal used when the active dictionary has no usable value
    pub fn fallback(&self) -> &'static str {
        match self {
            NavKey::Buy => "Buy",
            NavKey::Sell => "Sell",
            NavKey::Rent => "Rent",
            NavKey::AboutUs => "About Us",
            NavKey::Contact => "Contact",
            NavKey::Login => "Login",
            NavKey::Signup => "Sign Up",
            NavKey::Welcome => "Welcome",
            NavKey::Profile => "Profile",
            NavKey::Logout => "Logout",
            NavKey::Search => "Search",
            NavKey::OpenMenu => "Open menu",
            NavKey::CloseMenu => "Close menu",
            NavKey::UserMenu => "Account menu",
            NavKey::Language => "Language",
        }
    }

    /// Keys a dictionary may leave out without being reported
    pub fn is_optional(&self) -> bool {
        matches!(self, NavKey::Profile)
    }
}

/// Nested mapping of label keys to display strings
#[derive(Debug, Clone, PartialEq)]
pub struct LocaleDictionary {
    code: String,
    root: Value,
}

impl LocaleDictionary {
    /// Parse a dictionary from JSON text
    pub fn from_json(code: &str, json: &str) -> Result<Self, SiteError> {
        let root = serde_json::from_str(json).map_err(|source| SiteError::DictionaryParse {
            code: code.to_string(),
            source,
        })?;
        Ok(Self {
            code: code.to_string(),
            root,
        })
    }

    /// Wrap an already-built JSON value
    pub fn from_value(code: &str, root: Value) -> Self {
        Self {
            code: code.to_string(),
            root,
        }
    }

    /// A dictionary with no entries; every lookup falls back
    pub fn empty(code: &str) -> Self {
        Self::from_value(code, Value::Object(Default::default()))
    }

    /// Dictionary shipped with the crate, parsed once per process
    pub fn builtin(locale: Locale) -> &'static LocaleDictionary {
        static EN: OnceLock<LocaleDictionary> = OnceLock::new();
        static AR: OnceLock<LocaleDictionary> = OnceLock::new();

        let (cell, json) = match locale {
            Locale::En => (&EN, EN_JSON),
            Locale::Ar => (&AR, AR_JSON),
        };

        cell.get_or_init(|| {
            Self::from_json(locale.code(), json).unwrap_or_else(|e| {
                error!(locale = locale.code(), error = %e, "Built-in dictionary is malformed");
                Self::empty(locale.code())
            })
        })
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn as_value(&self) -> &Value {
        &self.root
    }

    /// Resolve a dotted path to a string value
    pub fn lookup(&self, path: &str) -> Option<&str> {
        path.split('.')
            .try_fold(&self.root, |node, segment| node.get(segment))
            .and_then(Value::as_str)
    }

    /// Resolve a path, falling back when it is missing or blank
    pub fn text_or(&self, path: &str, fallback: &str) -> String {
        match self.lookup(path) {
            Some(text) if !text.trim().is_empty() => text.to_string(),
            _ => {
                debug!(locale = %self.code, path, fallback, "Missing dictionary key, using fallback");
                fallback.to_string()
            }
        }
    }

    /// Resolve a header label
    pub fn nav(&self, key: NavKey) -> String {
        self.text_or(key.path(), key.fallback())
    }

    /// Paths from `required` that this dictionary does not resolve
    pub fn missing_keys<'a>(&self, required: &[&'a str]) -> Vec<&'a str> {
        required
            .iter()
            .copied()
            .filter(|path| {
                self.lookup(path)
                    .map(|text| text.trim().is_empty())
                    .unwrap_or(true)
            })
            .collect()
    }

    /// Required header keys this dictionary leaves unresolved
    pub fn missing_nav_keys(&self) -> Vec<NavKey> {
        NavKey::ALL
            .iter()
            .copied()
            .filter(|key| !key.is_optional())
            .filter(|key| self.lookup(key.path()).is_none_or(|t| t.trim().is_empty()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_builtin_dictionaries_parse() {
        for locale in Locale::ALL {
            let dict = LocaleDictionary::builtin(locale);
            assert_eq!(dict.code(), locale.code());
            assert!(dict.lookup("nav.buy").is_some(), "{} has no nav.buy", locale);
        }
    }

    #[test]
    fn test_builtin_dictionaries_cover_required_nav_keys() {
        for locale in Locale::ALL {
            assert!(
                locale.dictionary().missing_nav_keys().is_empty(),
                "{} misses nav keys",
                locale
            );
        }
    }

    #[test]
    fn test_lookup_nested_path() {
        let dict = Locale::En.dictionary();
        assert_eq!(dict.lookup("nav.aboutUs"), Some("About Us"));
        assert_eq!(
            dict.lookup("pages.home.locations.beirut"),
            Some("Beirut")
        );
        assert_eq!(dict.lookup("pages.home"), None);
        assert_eq!(dict.lookup("nav.nope"), None);
    }

    #[test]
    fn test_text_or_falls_back_on_missing_and_blank() {
        let dict = LocaleDictionary::from_value("en", json!({"nav": {"buy": "  "}}));
        assert_eq!(dict.text_or("nav.buy", "Buy"), "Buy");
        assert_eq!(dict.text_or("nav.sell", "Sell"), "Sell");
        assert_eq!(dict.nav(NavKey::Profile), "Profile");
    }

    #[test]
    fn test_arabic_profile_falls_back() {
        let dict = Locale::Ar.dictionary();
        assert_eq!(dict.lookup("nav.profile"), None);
        assert_eq!(dict.nav(NavKey::Profile), "Profile");
    }

    #[test]
    fn test_non_string_values_do_not_resolve() {
        let dict = LocaleDictionary::from_value("en", json!({"nav": {"buy": 3}}));
        assert_eq!(dict.lookup("nav.buy"), None);
        assert_eq!(dict.nav(NavKey::Buy), "Buy");
    }

    #[test]
    fn test_missing_keys() {
        let dict = LocaleDictionary::from_value("xx", json!({"nav": {"buy": "Buy"}}));
        let missing = dict.missing_keys(&["nav.buy", "nav.sell", "pages.home.hero.title"]);
        assert_eq!(missing, vec!["nav.sell", "pages.home.hero.title"]);
    }

    #[test]
    fn test_from_json_rejects_malformed() {
        let err = LocaleDictionary::from_json("en", "{ not json").unwrap_err();
        assert!(matches!(err, SiteError::DictionaryParse { .. }));
    }

    #[test]
    fn test_locale_parse_and_cycle() {
        assert_eq!("EN".parse::<Locale>().unwrap(), Locale::En);
        assert_eq!("ar-LB".parse::<Locale>().unwrap(), Locale::Ar);
        assert!("de".parse::<Locale>().is_err());

        assert_eq!(Locale::En.next(), Locale::Ar);
        assert_eq!(Locale::En.next().next(), Locale::En);
        assert_eq!(Locale::Ar.direction().as_str(), "rtl");
    }
}
