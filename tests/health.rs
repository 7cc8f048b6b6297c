use store_management_api::routes::{health::health_check, info::project_info, info::root};

#[tokio::test]
async fn health_check_returns_ok() {
    let response = health_check().await;
    assert_eq!(response.0.message, "Health check");

    let data = response.0.data.expect("health data");
    assert_eq!(data.status, "ok");
}

#[tokio::test]
async fn info_lists_every_endpoint_group() {
    let response = project_info().await;
    let data = response.0.data.expect("info data");
    assert_eq!(data.endpoints_available.len(), 6);
    assert!(data.key_feature.contains("recalculated"));

    let banner = root().await.0.data.expect("banner");
    assert_eq!(banner.version, env!("CARGO_PKG_VERSION"));
}
