use collectiondb::{ChangeKind, Collection, CollectionStore, ItemDraft};
use std::time::Duration;

#[tokio::test]
async fn test_async_observer_sees_latest_revision() {
    let mut store = CollectionStore::new(vec![Collection::new("a", "Art", "", "")]);
    let mut rx = store.subscribe();

    let watcher = tokio::spawn(async move {
        let mut seen = Vec::new();
        while rx.changed().await.is_ok() {
            let change = *rx.borrow_and_update();
            seen.push(change.revision);
            if change.kind == ChangeKind::Moved {
                break;
            }
        }
        seen
    });

    store.add_item(0, ItemDraft::new("Print", "Warhol", 1200));
    tokio::time::sleep(Duration::from_millis(10)).await;
    store.append(Collection::new("b", "Books", "", ""));
    tokio::time::sleep(Duration::from_millis(10)).await;
    store.move_collections([1], 0);

    let seen = tokio::time::timeout(Duration::from_secs(2), watcher)
        .await
        .expect("watcher timed out")
        .unwrap();

    // watch keeps only the latest value, so intermediate revisions may be skipped.
    assert_eq!(seen.last(), Some(&3));
    assert!(seen.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(store.collections()[0].id, "b");
}

#[tokio::test]
async fn test_dropping_store_closes_subscriptions() {
    let store = CollectionStore::empty();
    let mut rx = store.subscribe();
    drop(store);
    assert!(rx.changed().await.is_err());
}

#[test]
fn test_sync_observer_polls_without_runtime() {
    let mut store = CollectionStore::empty();
    let mut rx = store.subscribe();
    assert!(!rx.has_changed().unwrap());

    store.append(Collection::new("a", "Art", "", ""));
    assert!(rx.has_changed().unwrap());
    assert_eq!(rx.borrow_and_update().revision, 1);
    assert!(!rx.has_changed().unwrap());
}
