//! Plugin and record identities.

use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// Plugin file name, e.g. `know_your_enemy.esp`.
///
/// The game treats plugin names case-insensitively, so equality, ordering and
/// hashing all compare ASCII-lowercased bytes. The original spelling is kept
/// for display.
#[derive(Clone, Debug)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct ModKey(Cow<'static, str>);

impl ModKey {
    pub fn new(name: impl Into<String>) -> Self {
        Self(Cow::Owned(name.into()))
    }

    /// Builds a key from a string literal in `const` context.
    pub const fn from_static(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn folded(&self) -> impl Iterator<Item = u8> + '_ {
        self.0.bytes().map(|b| b.to_ascii_lowercase())
    }
}

impl PartialEq for ModKey {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq_ignore_ascii_case(&other.0)
    }
}

impl Eq for ModKey {}

impl Hash for ModKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for byte in self.folded() {
            state.write_u8(byte);
        }
        state.write_u8(0xff);
    }
}

impl PartialOrd for ModKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ModKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.folded().cmp(other.folded())
    }
}

impl fmt::Display for ModKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ModKey {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for ModKey {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

/// Stable record identity: the plugin that first defined the record plus its
/// local id within that plugin.
///
/// Displayed and parsed as `00AA5E:know_your_enemy.esp`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct FormKey {
    pub plugin: ModKey,
    pub id: u32,
}

impl FormKey {
    pub fn new(plugin: impl Into<ModKey>, id: u32) -> Self {
        Self {
            plugin: plugin.into(),
            id,
        }
    }

    pub const fn from_static(plugin: &'static str, id: u32) -> Self {
        Self {
            plugin: ModKey::from_static(plugin),
            id,
        }
    }
}

impl fmt::Display for FormKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:06X}:{}", self.id, self.plugin)
    }
}

/// Errors produced when parsing a [`FormKey`] from text.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FormKeyParseError {
    #[error("form key '{0}' is missing the ':' separator")]
    MissingSeparator(String),

    #[error("form key '{0}' has an invalid hex id")]
    InvalidId(String),

    #[error("form key '{0}' has an empty plugin name")]
    EmptyPlugin(String),
}

impl FromStr for FormKey {
    type Err = FormKeyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (id, plugin) = s
            .split_once(':')
            .ok_or_else(|| FormKeyParseError::MissingSeparator(s.to_string()))?;
        let id = u32::from_str_radix(id.trim_start_matches("0x"), 16)
            .map_err(|_| FormKeyParseError::InvalidId(s.to_string()))?;
        if plugin.is_empty() {
            return Err(FormKeyParseError::EmptyPlugin(s.to_string()));
        }
        Ok(Self::new(plugin, id))
    }
}

impl TryFrom<String> for FormKey {
    type Error = FormKeyParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<FormKey> for String {
    fn from(value: FormKey) -> Self {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn mod_keys_compare_case_insensitively() {
        let a = ModKey::new("Know_Your_Enemy.esp");
        let b = ModKey::from_static("know_your_enemy.esp");
        assert_eq!(a, b);

        let mut set = HashSet::new();
        set.insert(a);
        assert!(set.contains(&b));
        assert_eq!(b.to_string(), "know_your_enemy.esp");
    }

    #[test]
    fn form_key_display_and_parse_agree() {
        let key = FormKey::new("know_your_enemy.esp", 0x00AA5E);
        assert_eq!(key.to_string(), "00AA5E:know_your_enemy.esp");
        assert_eq!("00AA5E:know_your_enemy.esp".parse::<FormKey>(), Ok(key));
    }

    #[test]
    fn form_key_parse_rejects_malformed_input() {
        assert!(matches!(
            "00AA5E".parse::<FormKey>(),
            Err(FormKeyParseError::MissingSeparator(_))
        ));
        assert!(matches!(
            "zz:Skyrim.esm".parse::<FormKey>(),
            Err(FormKeyParseError::InvalidId(_))
        ));
        assert!(matches!(
            "0D205E:".parse::<FormKey>(),
            Err(FormKeyParseError::EmptyPlugin(_))
        ));
    }
}
