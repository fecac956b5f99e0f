mod common;

use anyhow::Result;
use axum::http::StatusCode;
use serde_json::json;
use uuid::Uuid;

#[tokio::test]
async fn author_crud_round_trip() -> Result<()> {
    let app = common::test_app().await;
    let token = common::register(&app, "authors@example.com").await;

    // Create
    let author = common::create_author(&app, &token, "George Orwell").await;
    let id = author["id"].as_str().unwrap().to_string();
    assert_eq!(author["name"], "George Orwell");
    assert_eq!(author["dateOfBirth"], "1903-06-25");

    // Read
    let (status, body) = common::send(&app, "GET", &format!("/api/authors/{}", id), Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["id"], id.as_str());

    // List
    let (status, body) = common::send(&app, "GET", "/api/authors", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().unwrap().len(), 1);

    // Full replacement
    let (status, body) = common::send(
        &app,
        "PUT",
        &format!("/api/authors/{}", id),
        Some(&token),
        Some(json!({
            "name": "Eric Arthur Blair",
            "bio": "Pen name George Orwell",
            "dateOfBirth": "1903-06-25"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT, "update failed: {}", body);

    let (_, body) = common::send(&app, "GET", &format!("/api/authors/{}", id), Some(&token), None).await;
    assert_eq!(body["data"]["name"], "Eric Arthur Blair");
    assert_eq!(body["data"]["bio"], "Pen name George Orwell");

    // Delete
    let (status, body) = common::send(&app, "DELETE", &format!("/api/authors/{}", id), Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["booksDeleted"], 0);

    let (status, _) = common::send(&app, "GET", &format!("/api/authors/{}", id), Some(&token), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn create_author_requires_name() -> Result<()> {
    let app = common::test_app().await;
    let token = common::register(&app, "blank@example.com").await;

    let (status, body) = common::send(
        &app,
        "POST",
        "/api/authors",
        Some(&token),
        Some(json!({ "name": "   ", "dateOfBirth": "1903-06-25" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
    assert!(body["field_errors"]["name"].is_string());
    Ok(())
}

#[tokio::test]
async fn create_author_rejects_malformed_date() -> Result<()> {
    let app = common::test_app().await;
    let token = common::register(&app, "baddate@example.com").await;

    let (status, body) = common::send(
        &app,
        "POST",
        "/api/authors",
        Some(&token),
        Some(json!({ "name": "George Orwell", "dateOfBirth": "not-a-date" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INVALID_JSON");
    Ok(())
}

#[tokio::test]
async fn get_unknown_author_is_not_found() -> Result<()> {
    let app = common::test_app().await;
    let token = common::register(&app, "missing@example.com").await;

    let (status, body) =
        common::send(&app, "GET", &format!("/api/authors/{}", Uuid::new_v4()), Some(&token), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");
    Ok(())
}

#[tokio::test]
async fn update_unknown_author_is_not_found() -> Result<()> {
    let app = common::test_app().await;
    let token = common::register(&app, "ghost@example.com").await;

    let (status, _) = common::send(
        &app,
        "PUT",
        &format!("/api/authors/{}", Uuid::new_v4()),
        Some(&token),
        Some(json!({ "name": "Nobody", "dateOfBirth": "1900-01-01" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn update_author_with_mismatched_body_id_is_rejected() -> Result<()> {
    let app = common::test_app().await;
    let token = common::register(&app, "mismatch@example.com").await;

    let author = common::create_author(&app, &token, "George Orwell").await;
    let id = author["id"].as_str().unwrap().to_string();

    let (status, _) = common::send(
        &app,
        "PUT",
        &format!("/api/authors/{}", id),
        Some(&token),
        Some(json!({
            "id": Uuid::new_v4(),
            "name": "Someone Else",
            "dateOfBirth": "1900-01-01"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // Row unchanged
    let (_, body) = common::send(&app, "GET", &format!("/api/authors/{}", id), Some(&token), None).await;
    assert_eq!(body["data"]["name"], "George Orwell");
    Ok(())
}

#[tokio::test]
async fn delete_author_removes_owned_books() -> Result<()> {
    let app = common::test_app().await;
    let token = common::register(&app, "cascade@example.com").await;

    let author = common::create_author(&app, &token, "George Orwell").await;
    let author_id = author["id"].as_str().unwrap().to_string();

    let first = common::create_book(&app, &token, &author_id, "1984").await;
    let second = common::create_book(&app, &token, &author_id, "Animal Farm").await;

    let (status, body) =
        common::send(&app, "DELETE", &format!("/api/authors/{}", author_id), Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["booksDeleted"], 2);

    // Both books are gone
    for book in [&first, &second] {
        let id = book["id"].as_str().unwrap();
        let (status, _) = common::send(&app, "GET", &format!("/api/books/{}", id), Some(&token), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
    Ok(())
}

#[tokio::test]
async fn invalid_uuid_in_path_is_bad_request() -> Result<()> {
    let app = common::test_app().await;
    let token = common::register(&app, "uuid@example.com").await;

    let (status, _) = common::send(&app, "GET", "/api/authors/not-a-uuid", Some(&token), None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    Ok(())
}
