//! String tables and the fallback lookup across them.
//!
//! Nested YAML maps are flattened at load time into dotted keys
//! (`mission.vision.title`), so lookups are a single map access.

use std::collections::BTreeMap;
use std::path::Path;

use crate::error::LocaleError;
use crate::language::Language;

const EMBEDDED_EN: &str = include_str!("../locales/en.yaml");
const EMBEDDED_SI: &str = include_str!("../locales/si.yaml");
const EMBEDDED_TA: &str = include_str!("../locales/ta.yaml");

// ─── StringTable ─────────────────────────────────────────────────────

/// One language's strings, keyed by dotted path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringTable {
    language: Language,
    entries: BTreeMap<String, String>,
}

impl StringTable {
    /// Parse a YAML document of nested string maps.
    ///
    /// Numbers and booleans are accepted and stored as text. Sequences,
    /// nulls and non-string keys are rejected.
    pub fn parse(language: Language, yaml: &str) -> Result<Self, LocaleError> {
        let root: serde_yaml::Value =
            serde_yaml::from_str(yaml).map_err(|source| LocaleError::YamlParse { language, source })?;
        let mut entries = BTreeMap::new();
        match root {
            serde_yaml::Value::Null => {}
            serde_yaml::Value::Mapping(map) => flatten(language, "", map, &mut entries)?,
            _ => {
                return Err(LocaleError::InvalidEntry {
                    language,
                    key: String::new(),
                    detail: "top level must be a mapping".to_string(),
                })
            }
        }
        Ok(Self { language, entries })
    }

    /// Language of this table.
    pub fn language(&self) -> Language {
        self.language
    }

    /// Text for `key`, without fallback.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// All keys, sorted.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn flatten(
    language: Language,
    prefix: &str,
    map: serde_yaml::Mapping,
    out: &mut BTreeMap<String, String>,
) -> Result<(), LocaleError> {
    for (k, v) in map {
        let segment = match k {
            serde_yaml::Value::String(s) => s,
            other => {
                return Err(LocaleError::InvalidEntry {
                    language,
                    key: prefix.to_string(),
                    detail: format!("non-string key {other:?}"),
                })
            }
        };
        let key = if prefix.is_empty() {
            segment
        } else {
            format!("{prefix}.{segment}")
        };
        match v {
            serde_yaml::Value::String(s) => {
                out.insert(key, s);
            }
            serde_yaml::Value::Number(n) => {
                out.insert(key, n.to_string());
            }
            serde_yaml::Value::Bool(b) => {
                out.insert(key, b.to_string());
            }
            serde_yaml::Value::Mapping(inner) => flatten(language, &key, inner, out)?,
            other => {
                return Err(LocaleError::InvalidEntry {
                    language,
                    key,
                    detail: format!("expected text or mapping, found {other:?}"),
                })
            }
        }
    }
    Ok(())
}

// ─── Translations ────────────────────────────────────────────────────

/// Every language's table, with English fallback on lookup.
#[derive(Debug, Clone)]
pub struct Translations {
    tables: Vec<StringTable>,
}

impl Translations {
    /// Tables compiled into the binary.
    pub fn embedded() -> Result<Self, LocaleError> {
        Ok(Self {
            tables: vec![
                StringTable::parse(Language::En, EMBEDDED_EN)?,
                StringTable::parse(Language::Si, EMBEDDED_SI)?,
                StringTable::parse(Language::Ta, EMBEDDED_TA)?,
            ],
        })
    }

    /// Embedded tables, with any `{code}.yaml` found in `dir` replacing the
    /// embedded table for that language.
    pub fn load_dir(dir: &Path) -> Result<Self, LocaleError> {
        let mut translations = Self::embedded()?;
        for lang in Language::all() {
            let path = dir.join(format!("{}.yaml", lang.code()));
            if !path.is_file() {
                continue;
            }
            let content = std::fs::read_to_string(&path).map_err(|source| LocaleError::Io {
                path: path.clone(),
                source,
            })?;
            translations.tables[lang.index()] = StringTable::parse(*lang, &content)?;
            tracing::debug!(language = %lang, path = %path.display(), "loaded string table override");
        }
        Ok(translations)
    }

    /// The table for `language`.
    pub fn table(&self, language: Language) -> &StringTable {
        &self.tables[language.index()]
    }

    /// Text for `key` in `language`, falling back to English.
    pub fn lookup(&self, language: Language, key: &str) -> Result<&str, LocaleError> {
        if let Some(text) = self.table(language).get(key) {
            return Ok(text);
        }
        if language != Language::En {
            if let Some(text) = self.table(Language::En).get(key) {
                tracing::trace!(%language, key, "falling back to English");
                return Ok(text);
            }
        }
        Err(LocaleError::MissingKey {
            key: key.to_string(),
        })
    }

    /// Like [`lookup`](Self::lookup), but never fails: a missing key renders
    /// as the key itself.
    pub fn text(&self, language: Language, key: &str) -> String {
        match self.lookup(language, key) {
            Ok(text) => text.to_string(),
            Err(e) => {
                tracing::warn!(%language, "{e}");
                key.to_string()
            }
        }
    }

    /// Look up `key` and substitute `{name}` placeholders from `args`.
    pub fn format(
        &self,
        language: Language,
        key: &str,
        args: &[(&str, &str)],
    ) -> Result<String, LocaleError> {
        let mut text = self.lookup(language, key)?.to_string();
        for (name, value) in args {
            text = text.replace(&format!("{{{name}}}"), value);
        }
        Ok(text)
    }

    /// English keys with no entry in `language`'s own table.
    pub fn missing_keys(&self, language: Language) -> Vec<&str> {
        let table = self.table(language);
        self.table(Language::En)
            .keys()
            .filter(|k| table.get(k).is_none())
            .collect()
    }
}
