//! Cafe API Tests

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use test_case::test_case;

use cafe_finder::domain::Catalog;

use crate::common::{builtin_len, TestApp};

#[test_case("/cafe" ; "missing city")]
#[test_case("/cafe?city=omsk" ; "unknown city")]
#[test_case("/cafe?city=" ; "empty city")]
#[test_case("/cafe?city=omsk&count=na" ; "unknown city wins over bad count")]
#[tokio::test]
async fn test_unknown_city(uri: &str) {
    let response = TestApp::new().get(uri).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body, "unknown city");
}

#[test_case("/cafe?city=tula&count=na" ; "not a number")]
#[test_case("/cafe?city=tula&count=" ; "empty")]
#[test_case("/cafe?city=tula&count=-1" ; "negative")]
#[test_case("/cafe?city=moscow&count=2.5&search=кофе" ; "fraction with search")]
#[tokio::test]
async fn test_incorrect_count(uri: &str) {
    let response = TestApp::new().get(uri).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body, "incorrect count");
}

#[test_case("/cafe?count=2&city=moscow" ; "count")]
#[test_case("/cafe?city=tula" ; "city only")]
#[test_case("/cafe?city=moscow&search=ложка" ; "search")]
#[tokio::test]
async fn test_ok(uri: &str) {
    let response = TestApp::new().get(uri).await;

    assert_eq!(response.status, StatusCode::OK);
}

#[test_case(0, 0 ; "zero")]
#[test_case(1, 1 ; "one")]
#[test_case(2, 2 ; "two")]
#[test_case(100, builtin_len("moscow") ; "more than available")]
#[tokio::test]
async fn test_count(count: usize, want: usize) {
    let response = TestApp::new()
        .get(&format!("/cafe?city=moscow&count={}", count))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.cafes().len(), want);
}

#[tokio::test]
async fn test_count_preserves_catalog_order() {
    let response = TestApp::new().get("/cafe?city=moscow&count=3").await;

    assert_eq!(response.body, "Мир кофе,Сладкоежка,Кофе и завтраки");
}

#[tokio::test]
async fn test_without_count_returns_all() {
    let response = TestApp::new().get("/cafe?city=moscow").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.cafes().len(), builtin_len("moscow"));
}

#[test_case("фасоль", 0 ; "no match")]
#[test_case("кофе", 2 ; "two matches")]
#[test_case("вилка", 1 ; "one match")]
#[test_case("КоФе", 2 ; "mixed case")]
#[tokio::test]
async fn test_search(search: &str, want: usize) {
    let response = TestApp::new()
        .get(&format!("/cafe?city=moscow&search={}", search))
        .await;

    assert_eq!(response.status, StatusCode::OK);

    let cafes = response.cafes();
    assert_eq!(cafes.len(), want, "number of found cafes mismatch");

    let needle = search.to_lowercase();
    for cafe in cafes {
        assert!(
            cafe.to_lowercase().contains(&needle),
            "cafe '{}' does not contain substring '{}'",
            cafe,
            search
        );
    }
}

#[tokio::test]
async fn test_empty_search_returns_all() {
    let response = TestApp::new().get("/cafe?city=moscow&search=").await;

    assert_eq!(response.cafes().len(), builtin_len("moscow"));
}

#[tokio::test]
async fn test_search_then_count() {
    let app = TestApp::new();

    let response = app.get("/cafe?city=moscow&search=кофе&count=1").await;
    assert_eq!(response.body, "Мир кофе");

    let response = app.get("/cafe?city=moscow&search=кофе&count=0").await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, "");
}

#[tokio::test]
async fn test_percent_encoded_search_term() {
    let response = TestApp::new()
        .get("/cafe?city=moscow&search=%D0%B2%D0%B8%D0%BB%D0%BA%D0%B0")
        .await;

    assert_eq!(response.body, "Вилка и ложка");
}

#[tokio::test]
async fn test_alternate_catalog() {
    let app = TestApp::with_catalog(Catalog::new([("omsk", vec!["Сибирь", "Иртыш"])]));

    let response = app.get("/cafe?city=omsk").await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, "Сибирь,Иртыш");

    let response = app.get("/cafe?city=moscow").await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body, "unknown city");
}

#[test]
fn test_uri_encoding_escapes_only_non_ascii() {
    assert_eq!(
        crate::common::encode_uri("/cafe?city=moscow&search=кофе"),
        "/cafe?city=moscow&search=%D0%BA%D0%BE%D1%84%D0%B5"
    );
    assert_eq!(crate::common::encode_uri("/cafe?city=a b"), "/cafe?city=a%20b");
}
