use std::fs;
use tempfile::TempDir;

use localrec_core::catalog::{records_from_json, JsonCatalog, MAX_DESCRIPTION_CHARS};
use localrec_core::config::Config;
use localrec_core::sample::example_catalog;
use localrec_core::{CatalogItem, CatalogSource, Error, Tagger};

#[test]
fn json_catalog_reads_rows_in_file_order() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("catalog.json");
    fs::write(
        &path,
        r#"[
            {"id": "a1", "name": "Uno", "category": "cafe", "description": "Café tranquilo", "discount": "5%", "city": "Monterrey"},
            {"id": 7, "business_name": "Siete", "category": "spa", "description": "Masajes", "discount": "10%", "city": "Apodaca", "status": "approved"}
        ]"#,
    )
    .unwrap();

    let records = JsonCatalog::new(&path).snapshot().expect("snapshot");
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].id, "a1");
    assert_eq!(records[0].description, "Café tranquilo");
    assert_eq!(records[1].id, "7", "numeric ids are stringified");
    assert_eq!(records[1].name, "Siete", "business_name is accepted as the name");
}

#[test]
fn rejected_rows_are_skipped_and_missing_ids_are_numbered() {
    let records = records_from_json(
        r#"[
            {"name": "Keep", "description": "x"},
            {"id": "gone", "name": "Drop", "status": "Rejected"},
            {"id": "", "name": "Keep too"}
        ]"#,
    )
    .expect("parse");
    let ids: Vec<&str> = records.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["row-1", "row-3"]);
    assert_eq!(records[1].description, "", "missing text fields default to empty");
}

#[test]
fn descriptions_are_sanitized_at_ingestion() {
    let long = "a".repeat(MAX_DESCRIPTION_CHARS + 50);
    let json = format!(
        r#"[{{"id": "x", "name": "<b>Tacos</b> #1", "description": "{}"}}]"#,
        long
    );
    let records = records_from_json(&json).expect("parse");
    assert_eq!(records[0].name, "Tacos 1");
    assert_eq!(records[0].description.chars().count(), MAX_DESCRIPTION_CHARS);
}

#[test]
fn malformed_catalog_is_a_catalog_error() {
    let err = records_from_json(r#"{"not": "an array"}"#).unwrap_err();
    assert!(matches!(err, Error::Catalog(_)), "got {err:?}");

    let missing = JsonCatalog::new("/definitely/not/here.json").snapshot().unwrap_err();
    assert!(matches!(missing, Error::Io(_)), "got {missing:?}");
}

#[test]
fn derived_tags_come_from_the_tagger() {
    struct FirstWord;
    impl Tagger for FirstWord {
        fn extract_tags(&self, text: &str) -> Vec<String> {
            text.split_whitespace().take(1).map(str::to_lowercase).collect()
        }
    }
    let record = example_catalog().remove(0);
    let item = CatalogItem::derive(record.clone(), &FirstWord);
    assert_eq!(item.tags(), ["rolls".to_string()]);
    assert_eq!(item.record(), &record);
}

#[test]
fn config_layers_env_file_over_base_file() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join("config.toml"),
        "[recommend]\ndefault_top_k = 4\n[catalog]\npath = \"data/catalog.json\"\n",
    )
    .unwrap();
    fs::write(tmp.path().join("config.test.toml"), "[recommend]\ndefault_top_k = 7\n").unwrap();

    let config = Config::load_from(tmp.path(), "test").expect("load");
    let settings = config.settings().expect("settings");
    assert_eq!(settings.recommend.default_top_k, 7);
    assert_eq!(settings.analyzer.min_token_chars, 2, "unset keys keep defaults");
    assert_eq!(
        config.resolve(settings.catalog.path.as_deref().unwrap()),
        tmp.path().join("data/catalog.json")
    );
    let k: usize = config.get("recommend.default_top_k").expect("get");
    assert_eq!(k, 7);
}

#[test]
fn config_rejects_zero_top_k_and_prod_without_catalog() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("config.toml"), "[recommend]\ndefault_top_k = 0\n").unwrap();
    assert!(Config::load_from(tmp.path(), "dev").is_err());

    let tmp = TempDir::new().unwrap();
    assert!(Config::load_from(tmp.path(), "prod").is_err(), "prod needs an explicit catalog");
    assert!(Config::load_from(tmp.path(), "dev").is_ok(), "dev falls back to the sample catalog");
}
