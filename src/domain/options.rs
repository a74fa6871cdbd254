//! Loose `--key=value` option parsing for raw command tails

use std::collections::hash_map;
use std::collections::HashMap;

/// Prefix marking a flag token
const FLAG_PREFIX: &str = "--";

/// Option name to value mapping produced by [`parse_opts`].
///
/// Keys never include the `--` prefix. Values may be empty or contain
/// several space-joined words.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Options {
    values: HashMap<String, String>,
}

impl Options {
    /// Parse a token sequence, see [`parse_opts`]
    pub fn parse<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut values: HashMap<String, String> = HashMap::new();
        let mut key = String::new();

        for token in tokens {
            let token = token.as_ref();

            match token.strip_prefix(FLAG_PREFIX) {
                Some(flag) => {
                    let (name, value) = flag.split_once('=').unwrap_or((flag, ""));
                    key = name.to_string();
                    values.insert(key.clone(), value.to_string());
                }
                None => {
                    let slot = values.entry(key.clone()).or_default();
                    let joined = format!("{} {}", slot, token);
                    *slot = joined.trim().to_string();
                }
            }
        }

        Self { values }
    }

    /// Value for `key`, if the option was present
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Whether the option was present at all
    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> hash_map::Iter<'_, String, String> {
        self.values.iter()
    }

    /// Entries sorted by key, for deterministic output
    pub fn sorted(&self) -> Vec<(&str, &str)> {
        let mut entries: Vec<(&str, &str)> = self
            .values
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        entries.sort_unstable();
        entries
    }

    pub fn into_inner(self) -> HashMap<String, String> {
        self.values
    }
}

impl From<Options> for HashMap<String, String> {
    fn from(options: Options) -> Self {
        options.into_inner()
    }
}

impl<'a> IntoIterator for &'a Options {
    type Item = (&'a String, &'a String);
    type IntoIter = hash_map::Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

/// Convert a flat token sequence into an option mapping.
///
/// Tokens starting with `--` open a new key (an inline `=` splits at its
/// first occurrence). Every other token is appended, space-separated and
/// trimmed, to the value of the most recent key. Tokens seen before any
/// flag collect under the empty key. Never fails.
pub fn parse_opts<I, S>(tokens: I) -> Options
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    Options::parse(tokens)
}
