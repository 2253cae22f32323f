//! Classification of fields by how their continuation lines are joined.
use std::collections::BTreeMap;

/// Fields whose continuation lines are folded by default.
///
/// These are relationship fields and comma-separated lists, where line breaks
/// only exist for readability.
pub const FOLDED_FIELDS: &[&str] = &[
    "Depends",
    "Pre-Depends",
    "Recommends",
    "Suggests",
    "Enhances",
    "Breaks",
    "Conflicts",
    "Replaces",
    "Provides",
    "Built-Using",
    "Static-Built-Using",
    "Build-Depends",
    "Build-Depends-Indep",
    "Build-Depends-Arch",
    "Build-Conflicts",
    "Build-Conflicts-Indep",
    "Build-Conflicts-Arch",
    "Uploaders",
    "Binary",
    "Tag",
    "Testsuite-Triggers",
];

/// How the continuation lines of a field are joined onto its value.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum FieldMode {
    /// Continuation lines are stripped and concatenated without a separator.
    Folded,

    /// Continuation lines are kept verbatim, each on its own line.
    #[default]
    Multiline,
}

impl std::fmt::Display for FieldMode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(match self {
            FieldMode::Folded => "folded",
            FieldMode::Multiline => "multiline",
        })
    }
}

impl std::str::FromStr for FieldMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "folded" => Ok(FieldMode::Folded),
            "multiline" => Ok(FieldMode::Multiline),
            _ => Err(format!("Invalid field mode: {}", s)),
        }
    }
}

/// Table mapping field names to their [`FieldMode`].
///
/// Lookups are case-sensitive. Fields that are not listed get the fallback
/// mode, which is [`FieldMode::Multiline`] unless changed.
///
/// When deserialized, missing keys are taken from [`FieldModes::default`]: a
/// configuration that only sets `fallback` keeps the standard table, while
/// one that sets `modes` replaces it.
///
/// ```
/// use debcontrol::{FieldMode, FieldModes};
///
/// let modes = FieldModes::default().with("X-Custom-Depends", FieldMode::Folded);
/// assert_eq!(modes.mode("Build-Depends"), FieldMode::Folded);
/// assert_eq!(modes.mode("X-Custom-Depends"), FieldMode::Folded);
/// assert_eq!(modes.mode("Description"), FieldMode::Multiline);
/// ```
#[derive(Debug, PartialEq, Eq, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FieldModes {
    modes: BTreeMap<String, FieldMode>,
    fallback: FieldMode,
}

impl Default for FieldModes {
    /// The standard table: [`FOLDED_FIELDS`] are folded, everything else is multiline.
    fn default() -> Self {
        FOLDED_FIELDS
            .iter()
            .map(|name| (name.to_string(), FieldMode::Folded))
            .collect()
    }
}

impl FieldModes {
    /// Create an empty table, in which every field is multiline.
    pub fn new() -> Self {
        Self {
            modes: BTreeMap::new(),
            fallback: FieldMode::Multiline,
        }
    }

    /// Return the table with `name` classified as `mode`.
    pub fn with(mut self, name: &str, mode: FieldMode) -> Self {
        self.set(name, mode);
        self
    }

    /// Return the table with a different mode for unlisted fields.
    pub fn with_fallback(mut self, mode: FieldMode) -> Self {
        self.fallback = mode;
        self
    }

    /// Classify `name` as `mode`, returning the previous entry if there was one.
    pub fn set(&mut self, name: &str, mode: FieldMode) -> Option<FieldMode> {
        self.modes.insert(name.to_string(), mode)
    }

    /// Remove the entry for `name`, so that it falls back to the default mode.
    pub fn remove(&mut self, name: &str) -> Option<FieldMode> {
        self.modes.remove(name)
    }

    /// Mode of the field called `name`.
    pub fn mode(&self, name: &str) -> FieldMode {
        self.modes.get(name).copied().unwrap_or(self.fallback)
    }

    /// Whether the field called `name` is folded.
    pub fn is_folded(&self, name: &str) -> bool {
        self.mode(name) == FieldMode::Folded
    }

    /// Mode used for fields not in the table.
    pub fn fallback(&self) -> FieldMode {
        self.fallback
    }

    /// Iterate over the explicit entries, ordered by field name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, FieldMode)> {
        self.modes.iter().map(|(name, mode)| (name.as_str(), *mode))
    }
}

impl FromIterator<(String, FieldMode)> for FieldModes {
    fn from_iter<T: IntoIterator<Item = (String, FieldMode)>>(iter: T) -> Self {
        Self {
            modes: iter.into_iter().collect(),
            fallback: FieldMode::Multiline,
        }
    }
}
