//! Search, sorting, and filtered-deletion workflow tests.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use roster_core::store::{RtdbClient, StoreConfig};
use roster_core::viewmodel::RosterViewModel;
use serde_json::json;
use wiremock::MockServer;

use super::support::{start_fake_rtdb, SharedTree};

fn client_for(server: &MockServer) -> RtdbClient {
    let config = StoreConfig::new(server.uri()).with_timeout_ms(5_000);
    RtdbClient::new(config).expect("Failed to create client")
}

fn seed(tree: &SharedTree, id: &str, name: &str, age: i64) {
    tree.lock()
        .unwrap()
        .insert(id.to_string(), json!({"id": id, "name": name, "age": age}));
}

#[tokio::test]
async fn test_snapshot_is_sorted_case_insensitively_by_name() {
    let (server, tree) = start_fake_rtdb().await;
    seed(&tree, "1", "zed", 50);
    seed(&tree, "2", "Alice", 30);
    seed(&tree, "3", "bob", 25);

    let mut vm = RosterViewModel::new(client_for(&server));
    vm.fetch_all().await.unwrap();

    let names: Vec<&str> = vm.records().iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Alice", "bob", "zed"]);
}

#[tokio::test]
async fn test_search_narrows_displayed_list() {
    let (server, tree) = start_fake_rtdb().await;
    seed(&tree, "1", "Amy", 25);
    seed(&tree, "2", "Sam", 40);
    seed(&tree, "3", "Zed", 50);

    let mut vm = RosterViewModel::new(client_for(&server));
    vm.fetch_all().await.unwrap();
    vm.search_text = "am".to_string();

    let filtered = vm.filtered_records();
    let names: Vec<&str> = filtered.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Amy", "Sam"]);
}

#[tokio::test]
async fn test_filtered_delete_targets_identity_not_position() {
    let (server, tree) = start_fake_rtdb().await;
    seed(&tree, "id-amy", "Amy", 25);
    seed(&tree, "id-zed", "Zed", 50);

    let mut vm = RosterViewModel::new(client_for(&server));
    vm.fetch_all().await.unwrap();

    // Sorted list is [Amy, Zed]; "ze" filters to [Zed], so filtered index 0
    // names Zed while canonical index 0 is Amy.
    vm.search_text = "ze".to_string();
    let removed = vm.delete_records(&[0]).await.unwrap();

    assert_eq!(removed, 1);
    assert_eq!(vm.records().len(), 1);
    assert_eq!(vm.records()[0].name, "Amy");
    assert!(tree.lock().unwrap().contains_key("id-amy"));
    assert!(!tree.lock().unwrap().contains_key("id-zed"));
}

#[tokio::test]
async fn test_batch_delete_through_filtered_view() {
    let (server, tree) = start_fake_rtdb().await;
    seed(&tree, "1", "Amy", 25);
    seed(&tree, "2", "Sam", 40);
    seed(&tree, "3", "Zed", 50);

    let mut vm = RosterViewModel::new(client_for(&server));
    vm.fetch_all().await.unwrap();
    vm.search_text = "am".to_string();

    // Filtered view is [Amy, Sam]; delete both
    let removed = vm.delete_records(&[0, 1]).await.unwrap();

    assert_eq!(removed, 2);
    assert_eq!(vm.records().len(), 1);
    assert_eq!(vm.records()[0].name, "Zed");
}

#[tokio::test]
async fn test_save_resets_search_to_show_full_list() {
    let (server, tree) = start_fake_rtdb().await;
    seed(&tree, "1", "Zed", 50);

    let mut vm = RosterViewModel::new(client_for(&server));
    vm.fetch_all().await.unwrap();

    vm.search_text = "ze".to_string();
    vm.name_input = "Amy".to_string();
    vm.age_input = "25".to_string();
    assert!(vm.save().await.unwrap());

    assert!(vm.search_text.is_empty());
    assert_eq!(vm.filtered_records().len(), 2);
}
