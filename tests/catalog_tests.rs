use collectiondb::{Catalog, CatalogConfig, CatalogError, CollectionDraft, ItemDraft, PriceField};
use std::fs;
use tempfile::TempDir;

const SEED: &str = r#"[
    {
        "id": "1",
        "name": "Sneakers",
        "description": "Limited releases",
        "imageURL": "https://example.com/sneakers.png",
        "items": [
            {"id": "s1", "name": "Air Jordan 1", "description": "Chicago 1985", "trendingPrice": 2500,
             "isFavorite": true, "collectionName": "Sneakers", "imageURL": ""},
            {"id": "s2", "name": "Yeezy 350", "description": "Turtle dove", "trendingPrice": 800,
             "collectionName": "Sneakers", "imageURL": "not a url"}
        ]
    },
    {
        "id": "2",
        "name": "Comics",
        "description": "Golden age",
        "imageURL": "",
        "items": [
            {"id": "c1", "name": "Action Comics #1", "description": "First Superman", "trendingPrice": 2500,
             "collectionName": "Comics", "imageURL": ""}
        ]
    }
]"#;

fn seed_dir(body: &str) -> (TempDir, CatalogConfig) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data.json");
    fs::write(&path, body).unwrap();
    let config = CatalogConfig::new(&path);
    (dir, config)
}

#[test]
fn test_open_from_seed_file() {
    let (_dir, config) = seed_dir(SEED);
    let catalog = Catalog::open(&config).unwrap();

    assert_eq!(catalog.store().len(), 2);
    assert_eq!(catalog.directory().len(), 5);

    let summary = catalog.summary();
    assert_eq!(summary.total_value, 5800);
    assert_eq!(summary.most_valuable_item.unwrap().id, "s1");
    assert_eq!(summary.most_active_category.unwrap().name, "Sneakers");

    let favorites = catalog.favorites();
    assert_eq!(favorites.len(), 1);
    assert_eq!(favorites[0].item.id, "s1");
}

#[test]
fn test_open_fails_fast_on_bad_seed() {
    let (_dir, config) = seed_dir(r#"{"not": "an array"}"#);
    assert!(matches!(Catalog::open(&config), Err(CatalogError::SeedParse(_))));

    let missing = CatalogConfig::new("/definitely/not/here/data.json");
    assert!(matches!(Catalog::open(&missing), Err(CatalogError::SeedNotFound(_))));
}

#[test]
fn test_strict_ids_rejects_duplicate_items() {
    let body = SEED.replace("\"id\": \"c1\"", "\"id\": \"s2\"");
    let (_dir, config) = seed_dir(&body);

    assert!(Catalog::open(&config).is_ok());
    let err = Catalog::open(&config.strict_ids(true)).unwrap_err();
    assert!(matches!(err, CatalogError::DuplicateId { kind: "item", .. }));
}

#[test]
fn test_optional_seed_without_default_stores() {
    let config = CatalogConfig::new("/definitely/not/here/data.json")
        .seed_required(false)
        .with_default_stores(false);
    let catalog = Catalog::open(&config).unwrap();
    assert!(catalog.store().is_empty());
    assert!(catalog.directory().is_empty());
}

#[test]
fn test_add_collection_form() {
    let mut catalog = Catalog::from_collections(Vec::new());

    let mut price = PriceField::default();
    price.edit("12x");
    let draft = CollectionDraft {
        name: "Vinyl".into(),
        description: "LPs".into(),
        image_url: String::new(),
        items: vec![ItemDraft::new("Kind of Blue", "1959 mono", price.submit())],
    };

    let index = catalog.add_collection(draft);
    assert_eq!(index, 0);

    let vinyl = catalog.store().get(index).unwrap();
    assert_eq!(vinyl.items[0].trending_price, 0);
    // Items saved with the collection form carry no owner name.
    assert_eq!(vinyl.items[0].collection_name, "");

    catalog
        .store_mut()
        .add_item(index, ItemDraft::new("Blue Train", "1957", 300));
    assert_eq!(catalog.store().get(index).unwrap().items[1].collection_name, "Vinyl");
    assert_eq!(catalog.summary().total_value, 300);
}

#[test]
fn test_toggle_favorite_through_catalog() {
    let (_dir, config) = seed_dir(SEED);
    let mut catalog = Catalog::open(&config).unwrap();

    let (c, i) = catalog.store().find_item("c1").unwrap();
    assert_eq!(catalog.store_mut().toggle_favorite(c, i), Some(true));

    let ids: Vec<_> = catalog.favorites().iter().map(|f| f.item.id.clone()).collect();
    assert_eq!(ids, vec!["s1", "c1"]);
}

#[test]
fn test_add_store_link() {
    let mut catalog = Catalog::from_collections(Vec::new());
    catalog
        .directory_mut()
        .add("Heritage Auctions", "https://www.ha.com")
        .unwrap();
    assert_eq!(catalog.directory().stores().last().unwrap().name, "Heritage Auctions");
}

#[test]
fn test_add_collection_item_ids_unique_across_store() {
    let (_dir, config) = seed_dir(SEED);
    let mut catalog = Catalog::open(&config).unwrap();

    let draft = CollectionDraft {
        name: "Cards".into(),
        items: vec![ItemDraft::new("A", "", 1), ItemDraft::new("B", "", 2), ItemDraft::new("C", "", 3)],
        ..Default::default()
    };
    catalog.add_collection(draft);

    let mut ids: Vec<_> = catalog
        .store()
        .collections()
        .iter()
        .flat_map(|c| c.items.iter().map(|i| i.id.clone()))
        .collect();
    let total = ids.len();
    ids.sort();
    ids.dedup();
    assert_eq!(total, 6);
    assert_eq!(ids.len(), total);
}
