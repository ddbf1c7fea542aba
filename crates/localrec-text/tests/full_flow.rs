use std::fs;
use std::path::PathBuf;

use localrec_core::sample::example_catalog;
use localrec_core::{CatalogItem, Error};
use localrec_text::{build_document, TagExtractor, TagTable};
use proptest::prelude::*;

fn shipped_table_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data/tags.toml")
}

#[test]
fn haircut_text_is_tagged_barberia_not_cafe() {
    let tags = TagExtractor::builtin().extract_tags("Corte de cabello y arreglo de barba, fade");
    assert!(tags.contains(&"barberia".to_string()), "tags = {tags:?}");
    assert!(!tags.contains(&"cafe".to_string()), "tags = {tags:?}");
}

#[test]
fn shipped_toml_table_matches_builtin() {
    let table = TagTable::from_path(&shipped_table_path()).expect("load shipped table");
    assert_eq!(table, TagTable::builtin());
}

#[test]
fn json_tables_load_and_accented_patterns_match() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("tags.json");
    fs::write(
        &path,
        r#"{"version": 1, "rules": [{"tag": "panaderia artesanal", "patterns": ["Panadería", "masa madre"]}]}"#,
    )
    .unwrap();
    let table = TagTable::from_path(&path).expect("json table");
    let extractor = TagExtractor::new(&table).expect("extractor");
    assert_eq!(extractor.extract_tags("PANADERÍA del barrio"), vec!["panaderia-artesanal"]);
    assert_eq!(extractor.known_tags().collect::<Vec<_>>(), vec!["panaderia-artesanal"]);
}

#[test]
fn missing_table_file_is_io_error_and_bad_version_is_config_error() {
    let tmp = tempfile::tempdir().unwrap();
    assert!(matches!(TagTable::from_path(&tmp.path().join("nope.toml")), Err(Error::Io(_))));

    let path = tmp.path().join("v9.toml");
    fs::write(&path, "version = 9\n[[rules]]\ntag = \"x\"\npatterns = [\"x\"]\n").unwrap();
    assert!(matches!(TagTable::from_path(&path), Err(Error::InvalidConfig(_))));
}

#[test]
fn sample_catalog_tags_are_stable() {
    let extractor = TagExtractor::builtin();
    let tags: Vec<Vec<String>> = example_catalog()
        .into_iter()
        .map(|r| CatalogItem::derive(r, &extractor).tags().to_vec())
        .collect();
    assert_eq!(tags[0], vec!["cafe", "sushi", "servicios", "barato", "cita", "tranquilo"]);
    assert_eq!(tags[3], vec!["tacos", "servicios", "rapido"], "\"baratas\" does not contain \"barato\"");
}

#[test]
fn documents_start_with_name_and_category() {
    let extractor = TagExtractor::builtin();
    for record in example_catalog() {
        let item = CatalogItem::derive(record, &extractor);
        let doc = build_document(&item);
        assert!(doc.starts_with(&format!("{} {} ", item.name(), item.category())));
        assert!(doc.ends_with(item.description()));
    }
}

proptest! {
    #[test]
    fn extraction_is_deterministic(text in "\\PC{0,80}") {
        let extractor = TagExtractor::builtin();
        prop_assert_eq!(extractor.extract_tags(&text), extractor.extract_tags(&text));
    }

    #[test]
    fn extracted_tags_are_unique_and_known(text in "[a-zA-ZáéíóúñÁÉÍÓÚÑ ,.]{0,120}") {
        let extractor = TagExtractor::builtin();
        let tags = extractor.extract_tags(&text);
        let known: Vec<&str> = extractor.known_tags().collect();
        for (i, tag) in tags.iter().enumerate() {
            prop_assert!(known.contains(&tag.as_str()));
            prop_assert!(!tags[i + 1..].contains(tag));
        }
    }
}
