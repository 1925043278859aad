//! Locale identifiers: mapping Android `values*` directory names to Apple
//! locale names, walking fallback chains, and report column ordering.

use lazy_static::lazy_static;
use regex::Regex;
use tracing::warn;
use unic_langid::LanguageIdentifier;

use crate::types::BASE_LOCALE;

lazy_static! {
    // Android region qualifiers: `-rTW`, `-r419`.
    static ref REGION_MARKER: Regex = Regex::new(r"-r([A-Z]{2}|[0-9]{3})\b").unwrap();
}

/// Report columns that always come first, in this order.
pub const PINNED_LOCALES: [&str; 2] = [BASE_LOCALE, "en"];

/// A `values*` resource directory and the locale it maps to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleDir {
    /// Directory name as found on disk, e.g. `values-zh-rTW`.
    pub dir_name: String,
    /// Apple locale name, e.g. `zh-Hant`.
    pub locale: String,
    deferred: bool,
}

impl LocaleDir {
    /// Maps a directory name to its locale. Returns `None` for names that are
    /// not resource value directories.
    ///
    /// ```rust
    /// use resbridge::locale::LocaleDir;
    /// assert_eq!(LocaleDir::parse("values").unwrap().locale, "Base");
    /// assert_eq!(LocaleDir::parse("values-pt-rBR").unwrap().locale, "pt-BR");
    /// assert_eq!(LocaleDir::parse("values-zh-rTW").unwrap().locale, "zh-Hant");
    /// assert!(LocaleDir::parse("drawable").is_none());
    /// ```
    pub fn parse(dir_name: &str) -> Option<Self> {
        if dir_name == "values" {
            return Some(Self {
                dir_name: dir_name.to_string(),
                locale: BASE_LOCALE.to_string(),
                deferred: false,
            });
        }

        let tag = dir_name.strip_prefix("values-")?;
        if tag.is_empty() {
            return None;
        }

        let tag = REGION_MARKER.replace_all(tag, "-$1");
        let (locale, deferred) = match tag.as_ref() {
            "zh-TW" => ("zh-Hant".to_string(), false),
            // Hong Kong only fills in when there is no Taiwan translation.
            "zh-HK" => ("zh-Hant".to_string(), true),
            "zh-CN" => ("zh-Hans".to_string(), false),
            other => (other.to_string(), false),
        };

        if locale.parse::<LanguageIdentifier>().is_err() {
            warn!(
                dir = dir_name,
                locale = %locale,
                "directory does not name a valid language identifier"
            );
        }

        Some(Self {
            dir_name: dir_name.to_string(),
            locale,
            deferred,
        })
    }

    /// Whether this directory is only a stand-in for another one that maps
    /// to the same locale.
    pub fn is_deferred(&self) -> bool {
        self.deferred
    }
}

/// Directories order by name, with deferred directories after all others.
/// This is the order in which they are loaded.
impl Ord for LocaleDir {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.deferred
            .cmp(&other.deferred)
            .then_with(|| self.dir_name.cmp(&other.dir_name))
            .then_with(|| self.locale.cmp(&other.locale))
    }
}

impl PartialOrd for LocaleDir {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Returns the next more general locale: `pt-BR` → `pt`, `pt` → `Base`.
pub fn parent_locale(locale: &str) -> &str {
    match locale.rsplit_once('-') {
        Some((head, tail)) if !tail.is_empty() => head,
        _ => BASE_LOCALE,
    }
}

/// Iterator over a locale and all of its ancestors, ending in `Base`.
#[derive(Debug, Clone)]
pub struct FallbackChain<'a> {
    next: Option<&'a str>,
}

impl<'a> Iterator for FallbackChain<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let current = self.next?;
        self.next = if current == BASE_LOCALE {
            None
        } else {
            Some(parent_locale(current))
        };
        Some(current)
    }
}

/// Walks from `locale` towards `Base`.
///
/// ```rust
/// use resbridge::locale::fallback_chain;
/// let chain: Vec<_> = fallback_chain("zh-Hant-TW").collect();
/// assert_eq!(chain, ["zh-Hant-TW", "zh-Hant", "zh", "Base"]);
/// ```
pub fn fallback_chain(locale: &str) -> FallbackChain<'_> {
    FallbackChain { next: Some(locale) }
}

/// Orders `items` with the `pinned` ones first (in pinned order, only if
/// present), followed by all the rest sorted ascending.
pub fn pinned_order<'a, I>(items: I, pinned: &[&str]) -> Vec<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut rest: Vec<&'a str> = items.into_iter().collect();
    rest.sort_unstable();
    rest.dedup();

    let mut out = Vec::with_capacity(rest.len());
    for pin in pinned {
        if let Some(pos) = rest.iter().position(|item| item == pin) {
            out.push(rest.remove(pos));
        }
    }
    out.extend(rest);
    out
}

/// Locales in report column order: `Base`, `en`, then the rest sorted.
pub fn report_order<'a, I>(locales: I) -> Vec<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    pinned_order(locales, &PINNED_LOCALES)
}
