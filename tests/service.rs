use std::collections::HashSet;

use todolist::constants::DEFAULT_COLOR;
use todolist::service::{Item, ItemError, ItemQuery, ItemService, NewItem, OrderBy, ToDoListService};
use todolist::storage::LocalStorage;
use uuid::Uuid;

async fn service() -> ToDoListService {
    let storage = LocalStorage::in_memory().await.expect("in-memory storage");
    ToDoListService::new(&storage)
}

async fn add_titles(service: &ToDoListService, titles: &[&str]) -> Vec<Item> {
    let mut items = Vec::new();
    for title in titles {
        items.push(service.add(NewItem::new(*title)).await.unwrap());
    }
    items
}

fn titles(items: &[Item]) -> Vec<&str> {
    items.iter().map(|i| i.title.as_str()).collect()
}

#[tokio::test]
async fn test_add_assigns_unique_ids_and_defaults() {
    let service = service().await;

    let mut ids = HashSet::new();
    for i in 0..5 {
        let item = service.add(NewItem::new(format!("Item {}", i))).await.unwrap();
        assert!(!item.id.is_nil());
        assert!(ids.insert(item.id), "id reused: {}", item.id);
        assert!(!item.is_completed);
        assert_eq!(item.color, DEFAULT_COLOR);

        let fetched = service.get_item(item.id).await.unwrap();
        assert_eq!(fetched, item);
    }
}

#[tokio::test]
async fn test_blank_color_gets_default() {
    let service = service().await;
    let item = service.add(NewItem::new("Paint").with_color("   ")).await.unwrap();
    assert_eq!(item.color, DEFAULT_COLOR);
}

#[tokio::test]
async fn test_blank_title_is_rejected_without_mutation() {
    let service = service().await;

    for title in ["", "   ", "\t\n"] {
        let result = service.add(NewItem::new(title)).await;
        assert!(matches!(result, Err(ItemError::Validation(_))));
    }
    assert_eq!(service.count_items(&ItemQuery::default()).await.unwrap(), 0);

    let item = service.add(NewItem::new("Keep me")).await.unwrap();
    let result = service
        .edit(Item {
            title: " ".to_string(),
            ..item.clone()
        })
        .await;
    assert!(matches!(result, Err(ItemError::Validation(_))));
    assert_eq!(service.get_item(item.id).await.unwrap(), item);
}

#[tokio::test]
async fn test_edit_round_trip_is_identity() {
    let service = service().await;
    let added = service
        .add(NewItem::new("Water plants").with_color("#00ff00"))
        .await
        .unwrap();

    service.edit(added.clone()).await.unwrap();
    assert_eq!(service.get_item(added.id).await.unwrap(), added);

    // A second unchanged edit must not trip the concurrency check.
    service.edit(added.clone()).await.unwrap();
    assert_eq!(service.get_item(added.id).await.unwrap(), added);
}

#[tokio::test]
async fn test_edit_missing_item_is_not_found() {
    let service = service().await;
    let id = Uuid::new_v4();
    let result = service
        .edit(Item {
            id,
            title: "Ghost".to_string(),
            is_completed: false,
            color: DEFAULT_COLOR.to_string(),
        })
        .await;
    assert!(matches!(result, Err(ItemError::NotFound(missing)) if missing == id));
}

#[tokio::test]
async fn test_get_missing_item_is_not_found() {
    let service = service().await;
    let id = Uuid::new_v4();
    assert!(matches!(service.get_item(id).await, Err(ItemError::NotFound(missing)) if missing == id));
}

#[tokio::test]
async fn test_second_delete_is_not_found() {
    let service = service().await;
    let item = service.add(NewItem::new("Once")).await.unwrap();

    service.delete(item.id).await.unwrap();
    assert!(matches!(service.delete(item.id).await, Err(ItemError::NotFound(_))));
    assert!(matches!(service.get_item(item.id).await, Err(ItemError::NotFound(_))));
}

#[tokio::test]
async fn test_completed_filter() {
    let service = service().await;
    let items = add_titles(&service, &["a", "b", "c", "d"]).await;
    for item in items.iter().take(2) {
        service
            .edit(Item {
                is_completed: true,
                ..item.clone()
            })
            .await
            .unwrap();
    }

    let done = service.get_items(ItemQuery::new().completed(true)).await.unwrap();
    assert_eq!(done.len(), 2);
    assert!(done.iter().all(|i| i.is_completed));

    let open = service.get_items(ItemQuery::new().completed(false)).await.unwrap();
    assert_eq!(open.len(), 2);
    assert!(open.iter().all(|i| !i.is_completed));

    let all = service.get_items(ItemQuery::new()).await.unwrap();
    assert_eq!(all.len(), 4);
}

#[tokio::test]
async fn test_title_filter_is_case_insensitive_substring() {
    let service = service().await;
    add_titles(&service, &["Note", "note", "Other", "Banana"]).await;

    let query = ItemQuery::new().title("ot").order_by(OrderBy::TitleAsc);
    let found = service.get_items(query).await.unwrap();
    let mut found = titles(&found);
    found.sort();
    assert_eq!(found, vec!["Note", "Other", "note"]);

    let found = service.get_items(ItemQuery::new().title("NOTE")).await.unwrap();
    assert_eq!(found.len(), 2);
}

#[tokio::test]
async fn test_title_filter_folds_non_ascii_case() {
    let service = service().await;
    add_titles(&service, &["Ärger melden", "Éclair kaufen", "Arbeit"]).await;

    let found = service.get_items(ItemQuery::new().title("ärger")).await.unwrap();
    assert_eq!(titles(&found), vec!["Ärger melden"]);

    let found = service.get_items(ItemQuery::new().title("éCLAIR")).await.unwrap();
    assert_eq!(titles(&found), vec!["Éclair kaufen"]);
    assert_eq!(service.count_items(&ItemQuery::new().title("ÄRGER")).await.unwrap(), 1);
}

#[tokio::test]
async fn test_title_filter_matches_wildcards_literally() {
    let service = service().await;
    add_titles(&service, &["100% done", "1000 done", "snake_case", "snakeXcase"]).await;

    let found = service.get_items(ItemQuery::new().title("0%")).await.unwrap();
    assert_eq!(titles(&found), vec!["100% done"]);

    let found = service.get_items(ItemQuery::new().title("e_c")).await.unwrap();
    assert_eq!(titles(&found), vec!["snake_case"]);
}

#[tokio::test]
async fn test_color_filter_is_exact() {
    let service = service().await;
    service.add(NewItem::new("red").with_color("#ff0000")).await.unwrap();
    service.add(NewItem::new("RED").with_color("#FF0000")).await.unwrap();
    service.add(NewItem::new("default")).await.unwrap();

    let found = service.get_items(ItemQuery::new().color("#ff0000")).await.unwrap();
    assert_eq!(titles(&found), vec!["red"]);

    // Blank filters do not restrict.
    let found = service.get_items(ItemQuery::new().color(" ").title("")).await.unwrap();
    assert_eq!(found.len(), 3);
}

#[tokio::test]
async fn test_title_ordering() {
    let service = service().await;
    add_titles(&service, &["Banana", "Apple", "Cherry"]).await;

    let asc = service.get_items(ItemQuery::new().order_by(OrderBy::TitleAsc)).await.unwrap();
    assert_eq!(titles(&asc), vec!["Apple", "Banana", "Cherry"]);

    let desc = service.get_items(ItemQuery::new().order_by(OrderBy::TitleDesc)).await.unwrap();
    assert_eq!(titles(&desc), vec!["Cherry", "Banana", "Apple"]);
}

#[tokio::test]
async fn test_id_ordering() {
    let service = service().await;
    let added = add_titles(&service, &["x", "y", "z", "w"]).await;
    let mut ids: Vec<Uuid> = added.iter().map(|i| i.id).collect();
    ids.sort();

    let asc = service.get_items(ItemQuery::new().order_by(OrderBy::IdAsc)).await.unwrap();
    assert_eq!(asc.iter().map(|i| i.id).collect::<Vec<_>>(), ids);

    ids.reverse();
    let desc = service.get_items(ItemQuery::new().order_by(OrderBy::IdDesc)).await.unwrap();
    assert_eq!(desc.iter().map(|i| i.id).collect::<Vec<_>>(), ids);
}

#[tokio::test]
async fn test_pagination_returns_tail() {
    let service = service().await;
    let names: Vec<String> = (0..15).map(|i| format!("Item {:02}", i)).collect();
    let refs: Vec<&str> = names.iter().map(|s| s.as_str()).collect();
    add_titles(&service, &refs).await;

    let first = service.get_items(ItemQuery::new()).await.unwrap();
    assert_eq!(first.len(), 10);

    let tail = service
        .get_items(ItemQuery::new().order_by(OrderBy::TitleAsc).offset(10).limit(10))
        .await
        .unwrap();
    assert_eq!(titles(&tail), vec!["Item 10", "Item 11", "Item 12", "Item 13", "Item 14"]);
}

#[tokio::test]
async fn test_unbounded_offset_and_limit() {
    let service = service().await;
    add_titles(&service, &["a", "b", "c"]).await;

    let all = service.get_items(ItemQuery::new().limit(u64::MAX)).await.unwrap();
    assert_eq!(all.len(), 3);

    let past_end = service
        .get_items(ItemQuery::new().offset(u64::MAX).limit(u64::MAX))
        .await
        .unwrap();
    assert!(past_end.is_empty());
}

#[tokio::test]
async fn test_filters_apply_before_pagination() {
    let service = service().await;
    for i in 0..12 {
        let item = service.add(NewItem::new(format!("Task {:02}", i))).await.unwrap();
        if i % 2 == 0 {
            service
                .edit(Item {
                    is_completed: true,
                    ..item
                })
                .await
                .unwrap();
        }
    }

    let query = ItemQuery::new().completed(true).order_by(OrderBy::TitleAsc).offset(4).limit(10);
    let page = service.get_items(query.clone()).await.unwrap();
    assert_eq!(titles(&page), vec!["Task 08", "Task 10"]);
    assert_eq!(service.count_items(&query).await.unwrap(), 6);
}

#[tokio::test]
async fn test_buy_milk_scenario() {
    let service = service().await;

    let added = service
        .add(NewItem::new("Buy milk").with_color("#ff0000"))
        .await
        .unwrap();
    assert!(!added.is_completed);

    service
        .edit(Item {
            is_completed: true,
            ..added.clone()
        })
        .await
        .unwrap();

    let fetched = service.get_item(added.id).await.unwrap();
    assert!(fetched.is_completed);
    assert_eq!(fetched.title, "Buy milk");
    assert_eq!(fetched.color, "#ff0000");

    service.delete(added.id).await.unwrap();
    assert!(matches!(service.get_item(added.id).await, Err(ItemError::NotFound(_))));
}
