use localrec_core::CatalogItem;

/// The text an item is indexed under: name, category, tags, description.
pub fn build_document(item: &CatalogItem) -> String {
    format!(
        "{} {} {} {}",
        item.name(),
        item.category(),
        item.tags().join(" "),
        item.description()
    )
}

#[cfg(test)]
mod tests {
    use super::build_document;
    use crate::tags::TagExtractor;
    use localrec_core::{CatalogItem, CatalogRecord};

    #[test]
    fn concatenates_fields_with_tags_in_order() {
        let record = CatalogRecord::new("t1", "Tacos Lupita", "tacos", "Tacos al pastor, servicio rápido", "10%", "Guadalupe");
        let item = CatalogItem::derive(record, &TagExtractor::builtin());
        assert_eq!(
            build_document(&item),
            "Tacos Lupita tacos tacos servicios rapido Tacos al pastor, servicio rápido"
        );
    }

    #[test]
    fn untagged_item_keeps_both_separators() {
        let record = CatalogRecord::new("t2", "Nada", "misc", "zzz", "", "");
        let item = CatalogItem::derive(record, &TagExtractor::builtin());
        assert_eq!(build_document(&item), "Nada misc  zzz");
    }
}
