//! Keyword-table tagging.
//!
//! A [`TagTable`] is an ordered list of `(tag, patterns)` rules. The
//! [`TagExtractor`] normalizes the input text and emits a rule's tag when any
//! of its patterns occurs anywhere in it. Matching is plain substring
//! containment with no word boundaries, so a pattern can fire inside an
//! unrelated longer word (`"pan"` inside `"panel"`, `"tranquilo"` tagging a
//! sushi bar as `cafe`). Tagging output is part of the indexed documents, so
//! this behaviour is kept as is.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use figment::providers::{Format, Json, Toml};
use figment::Figment;
use localrec_core::{Error, Result, Tagger};
use tracing::debug;

use crate::normalize::normalize;

pub const TAG_TABLE_VERSION: u32 = 1;

const BUILTIN_RULES: &[(&str, &[&str])] = &[
    ("barberia", &["barberia", "peluqueria", "corte de cabello", "cabello", "corte de pelo", "pelo", "barba", "fade", "taper"]),
    ("cafe", &["cafe", "wifi", "postres", "trabajar", "tranquilo", "taza", "barista"]),
    ("restaurante", &["restaurante", "cocina", "comida", "menu", "chef"]),
    ("tacos", &["tacos", "pastor", "bistec", "gringas", "campesina"]),
    ("sushi", &["sushi", "rolls", "ramen", "japonesa"]),
    ("saludable", &["saludable", "vegano", "ensalada", "proteina", "light", "bowl"]),
    ("spa", &["spa", "masaje", "relajacion", "facial", "aromaterapia"]),
    ("reparacion", &["reparacion", "reparar", "celular", "laptop", "diagnostico", "garantia"]),
    ("gym", &["gym", "gimnasio", "pesas", "entrenamiento", "fuerza", "24 horas"]),
    ("farmacia", &["farmacia", "urgencia", "medicamento"]),
    ("entretenimiento", &["cine", "karaoke", "boliche", "entretenimiento", "diversion"]),
    ("panaderia", &["pan", "panaderia", "pan dulce", "horno"]),
    ("postres", &["postre", "helado", "malteada", "dulce"]),
    ("libreria", &["libreria", "libro", "papeleria", "estudio", "leer"]),
    ("servicios", &["servicio", "lavanderia", "para llevar", "express"]),
    ("barato", &["barato", "economico", "accesible", "promo", "descuento"]),
    ("cita", &["cita", "romantico", "pareja"]),
    ("tranquilo", &["tranquilo", "calmado", "relajado"]),
    ("rapido", &["rapido", "expres", "agil"]),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagRule {
    pub tag: String,
    pub patterns: Vec<String>,
}

/// Versioned, serializable keyword table.
///
/// ```toml
/// version = 1
///
/// [[rules]]
/// tag = "sushi"
/// patterns = ["sushi", "rolls", "ramen", "japonesa"]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagTable {
    pub version: u32,
    pub rules: Vec<TagRule>,
}

impl Default for TagTable {
    fn default() -> Self { Self::builtin() }
}

impl TagTable {
    /// The Spanish business-directory table, in matching order.
    pub fn builtin() -> Self {
        let rules = BUILTIN_RULES
            .iter()
            .map(|(tag, patterns)| TagRule {
                tag: (*tag).to_string(),
                patterns: patterns.iter().map(|p| (*p).to_string()).collect(),
            })
            .collect();
        Self { version: TAG_TABLE_VERSION, rules }
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Self::extract(Figment::from(Toml::string(content)))
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        Self::extract(Figment::from(Json::string(content)))
    }

    /// Load a table from disk; `.json` files are read as JSON, anything else as TOML.
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let is_json = path.extension().and_then(|e| e.to_str()).is_some_and(|e| e.eq_ignore_ascii_case("json"));
        let table = if is_json { Self::from_json_str(&content)? } else { Self::from_toml_str(&content)? };
        debug!(path = %path.display(), rules = table.rules.len(), "loaded tag table");
        Ok(table)
    }

    fn extract(figment: Figment) -> Result<Self> {
        let table: Self = figment.extract().map_err(|e| Error::InvalidConfig(format!("tag table: {}", e)))?;
        table.validate()?;
        Ok(table)
    }

    pub fn validate(&self) -> Result<()> {
        if self.version != TAG_TABLE_VERSION {
            return Err(Error::InvalidConfig(format!(
                "tag table version {} is not supported (expected {})",
                self.version, TAG_TABLE_VERSION
            )));
        }
        if self.rules.is_empty() {
            return Err(Error::InvalidConfig("tag table has no rules".into()));
        }
        for (i, rule) in self.rules.iter().enumerate() {
            if rule.tag.trim().is_empty() {
                return Err(Error::InvalidConfig(format!("rule {} has an empty tag", i + 1)));
            }
            if rule.patterns.is_empty() {
                return Err(Error::InvalidConfig(format!("rule '{}' has no patterns", rule.tag)));
            }
            if rule.patterns.iter().any(|p| normalize(p).trim().is_empty()) {
                return Err(Error::InvalidConfig(format!("rule '{}' has a blank pattern", rule.tag)));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
struct CompiledRule {
    tag: String,
    patterns: Vec<String>,
}

/// Tags text with a fixed [`TagTable`].
///
/// Tags come out in table order, each at most once, with spaces replaced by
/// hyphens. The same text always yields the same sequence.
#[derive(Debug, Clone)]
pub struct TagExtractor {
    version: u32,
    rules: Vec<CompiledRule>,
}

impl Default for TagExtractor {
    fn default() -> Self { Self::builtin() }
}

impl TagExtractor {
    pub fn new(table: &TagTable) -> Result<Self> {
        table.validate()?;
        Ok(Self::compile(table))
    }

    pub fn builtin() -> Self { Self::compile(&TagTable::builtin()) }

    fn compile(table: &TagTable) -> Self {
        let rules = table
            .rules
            .iter()
            .map(|rule| CompiledRule {
                tag: rule.tag.trim().replace(' ', "-"),
                patterns: rule.patterns.iter().map(|p| normalize(p)).collect(),
            })
            .collect();
        Self { version: table.version, rules }
    }

    pub fn version(&self) -> u32 { self.version }

    /// Every tag this extractor can emit, in table order (duplicates included).
    pub fn known_tags(&self) -> impl Iterator<Item = &str> {
        self.rules.iter().map(|r| r.tag.as_str())
    }

    pub fn extract_tags(&self, text: &str) -> Vec<String> {
        let text = normalize(text);
        let mut tags: Vec<String> = Vec::new();
        for rule in &self.rules {
            if rule.patterns.iter().any(|p| text.contains(p.as_str())) && !tags.contains(&rule.tag) {
                tags.push(rule.tag.clone());
            }
        }
        tags
    }
}

impl Tagger for TagExtractor {
    fn extract_tags(&self, text: &str) -> Vec<String> { TagExtractor::extract_tags(self, text) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_table_is_valid_and_ordered() {
        let table = TagTable::builtin();
        table.validate().expect("builtin table");
        assert_eq!(table.rules.len(), 19);
        assert_eq!(table.rules[0].tag, "barberia");
        assert_eq!(table.rules[18].tag, "rapido");
    }

    #[test]
    fn tags_follow_table_order_not_text_order() {
        let tags = TagExtractor::builtin().extract_tags("Sushi barato, cerca de la barbería");
        assert_eq!(tags, vec!["barberia", "sushi", "barato"]);
    }

    #[test]
    fn substring_matches_inside_longer_words() {
        // "pan" is a panaderia pattern and fires inside "panel".
        let tags = TagExtractor::builtin().extract_tags("Instalamos panel solar");
        assert_eq!(tags, vec!["panaderia"]);
    }

    #[test]
    fn duplicate_tags_collapse_and_spaces_become_hyphens() {
        let table = TagTable {
            version: TAG_TABLE_VERSION,
            rules: vec![
                TagRule { tag: "comida rapida".into(), patterns: vec!["hamburguesa".into()] },
                TagRule { tag: "comida rapida".into(), patterns: vec!["hot dog".into()] },
                TagRule { tag: "noche".into(), patterns: vec!["Tardé".into()] },
            ],
        };
        let extractor = TagExtractor::new(&table).expect("valid table");
        let tags = extractor.extract_tags("Hamburguesa y hot dog hasta tarde");
        assert_eq!(tags, vec!["comida-rapida", "noche"]);
    }

    #[test]
    fn no_match_is_empty() {
        assert!(TagExtractor::builtin().extract_tags("zzz").is_empty());
        assert!(TagExtractor::builtin().extract_tags("").is_empty());
    }

    #[test]
    fn invalid_tables_are_rejected() {
        let blank = TagTable {
            version: TAG_TABLE_VERSION,
            rules: vec![TagRule { tag: "x".into(), patterns: vec!["  ".into()] }],
        };
        assert!(matches!(TagExtractor::new(&blank), Err(Error::InvalidConfig(_))));

        let wrong_version = TagTable { version: 2, ..TagTable::builtin() };
        assert!(matches!(wrong_version.validate(), Err(Error::InvalidConfig(_))));

        let empty = TagTable { version: TAG_TABLE_VERSION, rules: vec![] };
        assert!(empty.validate().is_err());

        assert!(TagTable::from_toml_str("version = 1\n").is_err(), "rules are required");
    }
}
