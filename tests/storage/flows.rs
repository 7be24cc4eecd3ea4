use thrifty::model::Flow;
use thrifty::storage::{LocalStorage, StorageError};

const ICON: &str = "data:image/svg+xml;base64,PHN2Zy8+";
const OTHER_ICON: &str = "data:image/svg+xml;base64,PHN2ZyB4PSIxIi8+";

async fn storage() -> LocalStorage {
    LocalStorage::in_memory().await.unwrap()
}

#[tokio::test]
async fn test_create_assigns_id_and_round_trips() {
    let storage = storage().await;

    let created = storage
        .create_flow(
            Flow::new("Salary", "monthly", 2500.0)
                .with_icon(ICON)
                .with_tags(["work", "fixed"]),
        )
        .await
        .unwrap();

    let id = created.id.clone().expect("id assigned");
    let fetched = storage.get_flow(&id).await.unwrap().expect("flow stored");

    assert_eq!(fetched.name, "Salary");
    assert_eq!(fetched.description, "monthly");
    assert_eq!(fetched.amount, 2500.0);
    assert_eq!(fetched.icon.as_deref(), Some(ICON));
    assert_eq!(fetched.tags, vec!["fixed", "work"]);
}

#[tokio::test]
async fn test_create_ignores_supplied_id() {
    let storage = storage().await;
    let created = storage
        .create_flow(Flow::new("Rent", "", -900.0).with_id("chosen"))
        .await
        .unwrap();

    assert_ne!(created.id.as_deref(), Some("chosen"));
    assert!(storage.get_flow("chosen").await.unwrap().is_none());
}

#[tokio::test]
async fn test_invalid_flows_are_rejected() {
    let storage = storage().await;

    let unnamed = storage.create_flow(Flow::new("  ", "", 10.0)).await;
    assert!(matches!(unnamed, Err(StorageError::InvalidFlow)));

    let zero = storage.create_flow(Flow::new("Nothing", "", 0.0)).await;
    assert!(matches!(zero, Err(StorageError::InvalidFlow)));

    assert!(!storage.has_data().await.unwrap());
}

#[tokio::test]
async fn test_list_orders_by_amount_then_name() {
    let storage = storage().await;
    for (name, amount) in [("Rent", -900.0), ("Bonus", 300.0), ("Salary", 2500.0), ("Aid", 300.0)] {
        storage.create_flow(Flow::new(name, "", amount)).await.unwrap();
    }

    let names: Vec<String> = storage
        .list_flows()
        .await
        .unwrap()
        .into_iter()
        .map(|flow| flow.name)
        .collect();

    assert_eq!(names, vec!["Salary", "Aid", "Bonus", "Rent"]);
}

#[tokio::test]
async fn test_update_replaces_content() {
    let storage = storage().await;
    let created = storage
        .create_flow(Flow::new("Rent", "flat", -900.0).with_icon(ICON).with_tags(["home"]))
        .await
        .unwrap();
    let id = created.id.unwrap();

    let updated = storage
        .update_flow(&id, Flow::new("Rent", "new flat", -950.0).with_tags(["home", "fixed"]))
        .await
        .unwrap();
    assert_eq!(updated.id.as_deref(), Some(id.as_str()));

    let fetched = storage.get_flow(&id).await.unwrap().unwrap();
    assert_eq!(fetched.description, "new flat");
    assert_eq!(fetched.amount, -950.0);
    assert_eq!(fetched.icon, None);
    assert_eq!(fetched.tags, vec!["fixed", "home"]);
}

#[tokio::test]
async fn test_update_unknown_flow_is_not_found() {
    let storage = storage().await;
    let result = storage.update_flow("missing", Flow::new("Rent", "", -900.0)).await;
    assert!(matches!(result, Err(StorageError::NotFound(id)) if id == "missing"));
}

#[tokio::test]
async fn test_update_validates_before_lookup() {
    let storage = storage().await;
    let result = storage.update_flow("missing", Flow::new("", "", 0.0)).await;
    assert!(matches!(result, Err(StorageError::InvalidFlow)));
}

#[tokio::test]
async fn test_delete_removes_flow() {
    let storage = storage().await;
    let rent = storage.create_flow(Flow::new("Rent", "", -900.0)).await.unwrap();
    storage.create_flow(Flow::new("Salary", "", 2500.0)).await.unwrap();

    storage.delete_flow(rent.id.as_deref().unwrap()).await.unwrap();

    let flows = storage.list_flows().await.unwrap();
    assert_eq!(flows.len(), 1);
    assert_eq!(flows[0].name, "Salary");

    let again = storage.delete_flow(rent.id.as_deref().unwrap()).await;
    assert!(matches!(again, Err(StorageError::NotFound(_))));
}

#[tokio::test]
async fn test_shared_icon_survives_until_last_user_is_gone() {
    let storage = storage().await;
    let first = storage.create_flow(Flow::new("Gym", "", -30.0).with_icon(ICON)).await.unwrap();
    let second = storage.create_flow(Flow::new("Pool", "", -20.0).with_icon(ICON)).await.unwrap();

    storage.delete_flow(first.id.as_deref().unwrap()).await.unwrap();

    let remaining = storage.get_flow(second.id.as_deref().unwrap()).await.unwrap().unwrap();
    assert_eq!(remaining.icon.as_deref(), Some(ICON));
}

#[tokio::test]
async fn test_changing_icon() {
    let storage = storage().await;
    let created = storage.create_flow(Flow::new("Gym", "", -30.0).with_icon(ICON)).await.unwrap();
    let id = created.id.unwrap();

    storage
        .update_flow(&id, Flow::new("Gym", "", -30.0).with_icon(OTHER_ICON))
        .await
        .unwrap();

    let fetched = storage.get_flow(&id).await.unwrap().unwrap();
    assert_eq!(fetched.icon.as_deref(), Some(OTHER_ICON));
}

#[tokio::test]
async fn test_duplicate_and_blank_tags_are_collapsed() {
    let storage = storage().await;
    let created = storage
        .create_flow(Flow::new("Food", "", -200.0).with_tags([" daily ", "daily", "", "needs"]))
        .await
        .unwrap();

    assert_eq!(created.tags, vec!["daily", "needs"]);
    let fetched = storage.get_flow(created.id.as_deref().unwrap()).await.unwrap().unwrap();
    assert_eq!(fetched.tags, vec!["daily", "needs"]);
}

#[tokio::test]
async fn test_total_sums_amounts() {
    let storage = storage().await;
    assert_eq!(storage.total().await.unwrap(), 0.0);

    storage.create_flow(Flow::new("Salary", "", 2500.0)).await.unwrap();
    storage.create_flow(Flow::new("Rent", "", -900.5)).await.unwrap();

    assert_eq!(storage.total().await.unwrap(), 1599.5);
}

#[tokio::test]
async fn test_saved_flow_matches_stored_flow() {
    let storage = storage().await;

    let created = storage
        .create_flow(Flow::new("Rent", "", -900.0).with_tags(["home", "fixed"]))
        .await
        .unwrap();
    let id = created.id.clone().unwrap();
    assert_eq!(storage.get_flow(&id).await.unwrap(), Some(created));

    let updated = storage
        .update_flow(&id, Flow::new("Rent", "", -950.0).with_tags(["utilities", "home", "bills"]))
        .await
        .unwrap();
    assert_eq!(updated.tags, vec!["bills", "home", "utilities"]);
    assert_eq!(storage.get_flow(&id).await.unwrap(), Some(updated));
}
