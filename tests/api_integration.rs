//! End-to-end tests: seeded database served over HTTP and read back by the remote client.

use price_compare::catalog::seed::{seed, seed_products};
use price_compare::catalog::{CatalogSource, RemoteCatalog, SqliteCatalog};
use price_compare::commands::{CompareCommand, ListCommand, ListOptions};
use price_compare::compare::{compare_all, total_savings, CheaperSource};
use price_compare::config::{Config, OutputFormat};
use price_compare::filters::{search, Category};
use price_compare::selection::{Selection, SelectionAction};
use price_compare::server;
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;
use tokio::net::TcpListener;
use tokio::sync::oneshot;

struct Running {
    url: String,
    stop: oneshot::Sender<()>,
    handle: tokio::task::JoinHandle<anyhow::Result<()>>,
    _dir: TempDir,
}

async fn start_seeded_server() -> Running {
    let dir = TempDir::new().unwrap();
    let catalog = SqliteCatalog::create(dir.path().join("products.db")).await.unwrap();
    seed(&catalog).await.unwrap();

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let url = format!("http://{}", listener.local_addr().unwrap());
    let (stop, stopped) = oneshot::channel::<()>();

    let handle = tokio::spawn(server::serve(listener, Arc::new(catalog), async {
        let _ = stopped.await;
    }));

    Running { url, stop, handle, _dir: dir }
}

fn remote(url: &str) -> RemoteCatalog {
    RemoteCatalog::new(url.to_string(), Duration::from_secs(5)).unwrap()
}

#[tokio::test]
async fn test_remote_reads_seeded_catalog() {
    let running = start_seeded_server().await;

    let products = remote(&running.url).all_products().await.unwrap();
    assert_eq!(products, seed_products());

    running.stop.send(()).unwrap();
    running.handle.await.unwrap().unwrap();
}

#[tokio::test]
async fn test_search_and_compare_over_http() {
    let running = start_seeded_server().await;
    let products = remote(&running.url).all_products().await.unwrap();

    let visible = search(&products, "apple");
    assert_eq!(visible.len(), 3);

    let mut selection = Selection::new();
    selection.apply(SelectionAction::Toggle("iphone-15".to_string()));
    selection.apply(SelectionAction::Toggle("ipad-air".to_string()));
    selection.apply(SelectionAction::Toggle("sony-xm5".to_string()));

    let rows = compare_all(&selection.list(&visible));
    let ids: Vec<_> = rows.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["iphone-15", "ipad-air"]);
    assert_eq!(rows[0].cheaper_source, CheaperSource::Flipkart);
    assert_eq!(rows[0].savings, 491.0);
    assert!(total_savings(&rows) >= rows[0].savings);

    running.stop.send(()).unwrap();
    running.handle.await.unwrap().unwrap();
}

#[tokio::test]
async fn test_commands_read_remote_catalog() {
    let running = start_seeded_server().await;
    let config = Config {
        api_url: Some(running.url.clone()),
        format: OutputFormat::Json,
        ..Config::default()
    };

    let options = ListOptions { category: Some(Category::Laptop), ..Default::default() };
    let output = ListCommand::new(config.clone(), options).execute().await.unwrap();
    let laptops: Vec<serde_json::Value> = serde_json::from_str(&output).unwrap();
    assert_eq!(laptops.len(), 2);

    let output = CompareCommand::new(config)
        .execute(&["ps5-slim".to_string()], false, None)
        .await
        .unwrap();
    let rows: Vec<serde_json::Value> = serde_json::from_str(&output).unwrap();
    assert_eq!(rows[0]["cheaperSource"], "FLIPKART");

    running.stop.send(()).unwrap();
    running.handle.await.unwrap().unwrap();
}

#[tokio::test]
async fn test_local_commands_read_seeded_database() {
    let dir = TempDir::new().unwrap();
    let database = dir.path().join("products.db");
    let catalog = SqliteCatalog::create(&database).await.unwrap();
    seed(&catalog).await.unwrap();

    let config = Config { database, format: OutputFormat::Csv, ..Config::default() };
    let options = ListOptions { query: Some("sony".to_string()), ..Default::default() };
    let output = ListCommand::new(config, options).execute().await.unwrap();

    assert_eq!(output.lines().count(), 3);
    assert!(output.contains("sony-xm5"));
    assert!(output.contains("ps5-slim"));
}

#[tokio::test]
async fn test_remote_server_stopped() {
    let running = start_seeded_server().await;
    let url = running.url.clone();

    running.stop.send(()).unwrap();
    running.handle.await.unwrap().unwrap();

    let err = remote(&url).all_products().await.unwrap_err();
    assert!(matches!(err, price_compare::CatalogError::DataUnavailable(_)));
}
