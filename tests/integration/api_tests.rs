//! API integration tests
//!
//! These run against a live server backed by a migrated database:
//! `cargo test --test api_tests -- --ignored`

use reqwest::{Client, RequestBuilder, StatusCode};
use serde_json::{json, Value};

const BASE_URL: &str = "http://localhost:5000";

fn api_key() -> String {
    std::env::var("API_KEY").unwrap_or_else(|_| "change-this-api-key".to_string())
}

fn with_key(request: RequestBuilder) -> RequestBuilder {
    request.header("Api-Key", api_key())
}

/// A phone number unlikely to collide with existing rows
fn unique_phone() -> String {
    let digits: String = uuid::Uuid::new_v4()
        .as_u128()
        .to_string()
        .chars()
        .take(10)
        .collect();
    format!("7{:0>10}", digits)
}

async fn create(client: &Client, path: &str, body: Value, id_field: &str) -> String {
    let response = with_key(client.post(format!("{}{}", BASE_URL, path)))
        .json(&body)
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::CREATED);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "success");
    body[id_field].as_str().expect("No id in response").to_string()
}

async fn get_json(client: &Client, path: &str) -> (StatusCode, Value) {
    let response = with_key(client.get(format!("{}{}", BASE_URL, path)))
        .send()
        .await
        .expect("Failed to send request");
    let status = response.status();
    let body = response.json().await.unwrap_or(Value::Null);
    (status, body)
}

async fn post(client: &Client, path: &str, body: Value) -> StatusCode {
    with_key(client.post(format!("{}{}", BASE_URL, path)))
        .json(&body)
        .send()
        .await
        .expect("Failed to send request")
        .status()
}

/// First element of `rows` whose `key` equals `value`
fn find<'a>(rows: &'a Value, key: &str, value: &str) -> Option<&'a Value> {
    rows.as_array()?.iter().find(|row| row[key] == value)
}

async fn delete(client: &Client, path: &str) -> StatusCode {
    with_key(client.delete(format!("{}{}", BASE_URL, path)))
        .send()
        .await
        .expect("Failed to send request")
        .status()
}

#[tokio::test]
#[ignore] // Run with: cargo test -- --ignored
async fn test_health_check() {
    let client = Client::new();

    let (status, body) = get_json(&client, "/health").await;
    assert!(status.is_success());
    assert_eq!(body["status"], "healthy");

    let (status, _) = get_json(&client, "/ready").await;
    assert!(status.is_success());
}

#[tokio::test]
#[ignore]
async fn test_auth_required() {
    let client = Client::new();

    let response = client
        .get(format!("{}/users", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
#[ignore]
async fn test_user_lifecycle() {
    let client = Client::new();
    let phone = unique_phone();

    let id = create(
        &client,
        "/users",
        json!({
            "full_name": "Ivan Petrov",
            "birth_date": "1990-05-17",
            "address": "Lenina 1",
            "phone_number": phone
        }),
        "id_user",
    )
    .await;

    let (status, body) = get_json(&client, &format!("/users/{}", id)).await;
    assert!(status.is_success());
    assert_eq!(body["user"]["full_name"], "Ivan Petrov");

    let (status, body) = get_json(&client, &format!("/users/phone/{}", phone)).await;
    assert!(status.is_success());
    assert_eq!(body["user"]["id_user"], id.as_str());

    let response = with_key(client.patch(format!("{}/users/{}", BASE_URL, id)))
        .json(&json!({ "address": "Mira 5" }))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());

    let (_, body) = get_json(&client, &format!("/users/{}", id)).await;
    assert_eq!(body["user"]["address"], "Mira 5");
    assert_eq!(body["user"]["full_name"], "Ivan Petrov");

    // An explicit null clears the field
    let response = with_key(client.patch(format!("{}/users/{}", BASE_URL, id)))
        .json(&json!({ "address": null }))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());

    let (_, body) = get_json(&client, &format!("/users/{}", id)).await;
    assert!(body["user"]["address"].is_null());
    assert_eq!(body["user"]["birth_date"], "1990-05-17");

    assert!(delete(&client, &format!("/users/{}", id)).await.is_success());
    let (status, _) = get_json(&client, &format!("/users/{}", id)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore]
async fn test_list_users_paging() {
    let client = Client::new();

    let (status, body) = get_json(&client, "/users?offset=0&limit=1&sort_by=full_name").await;
    assert!(status.is_success());
    assert!(body["users"].is_array());
    assert!(body["total_count"].is_number());
    if body["count"] == 1 {
        assert_eq!(body["next_from"], 1);
    } else {
        assert!(body["next_from"].is_null());
    }
}

#[tokio::test]
#[ignore]
async fn test_duplicate_genre_conflict() {
    let client = Client::new();
    let name = format!("genre-{}", uuid::Uuid::new_v4());

    let id = create(&client, "/genres", json!({ "genre_name": name }), "id_genre").await;

    let response = with_key(client.post(format!("{}/genres", BASE_URL)))
        .json(&json!({ "genre_name": name }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::CONFLICT);

    assert!(delete(&client, &format!("/genres/{}", id)).await.is_success());
}

#[tokio::test]
#[ignore]
async fn test_borrow_and_return_flow() {
    let client = Client::new();

    let author = create(&client, "/authors", json!({ "author_name": "Leo Tolstoy" }), "id_author").await;
    let genre = create(
        &client,
        "/genres",
        json!({ "genre_name": format!("novel-{}", uuid::Uuid::new_v4()) }),
        "id_genre",
    )
    .await;
    let book = create(
        &client,
        "/books",
        json!({ "title": "War and Peace", "author_ids": [author], "genre_ids": [genre] }),
        "id_book",
    )
    .await;
    let user = create(
        &client,
        "/users",
        json!({ "full_name": "Anna Karenina", "phone_number": unique_phone() }),
        "id_user",
    )
    .await;

    let (_, body) = get_json(&client, &format!("/books/{}", book)).await;
    assert_eq!(body["book"]["authors"][0], "Leo Tolstoy");

    let (_, body) = get_json(&client, &format!("/books/{}/status", book)).await;
    assert_eq!(body["book"]["is_available"], true);

    let borrow = json!({
        "id_user": user,
        "book_ids": [book],
        "borrow_date": "2024-03-01",
        "return_date": "2024-03-15"
    });
    let response = with_key(client.post(format!("{}/books/borrows", BASE_URL)))
        .json(&borrow)
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::CREATED);
    let body: Value = response.json().await.expect("Failed to parse response");
    let id_borrow = body["id_borrows"][0].as_str().expect("No borrow id").to_string();

    let (_, body) = get_json(&client, &format!("/books/{}/status", book)).await;
    assert_eq!(body["book"]["is_available"], false);
    assert_eq!(body["book"]["id_user"], user.as_str());

    // Lending the same copy again is refused
    let response = with_key(client.post(format!("{}/books/borrows", BASE_URL)))
        .json(&borrow)
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let (_, body) = get_json(&client, "/reports/borrows/fine").await;
    assert!(body["report"]["borrows"].is_array());

    let response = with_key(client.patch(format!("{}/books/borrows/{}?status=true", BASE_URL, id_borrow)))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());

    let (_, body) = get_json(&client, &format!("/books/{}/status", book)).await;
    assert_eq!(body["book"]["is_available"], true);

    let (_, body) = get_json(&client, &format!("/books/borrows?id_user={}", user)).await;
    assert_eq!(body["count"], 1);
    assert_eq!(body["borrows"][0]["is_returned"], true);

    // Borrow history keeps the user and book referenced
    assert_eq!(delete(&client, &format!("/users/{}", user)).await, StatusCode::BAD_REQUEST);
}

#[tokio::test]
#[ignore]
async fn test_book_update_replaces_links() {
    let client = Client::new();
    let suffix = uuid::Uuid::new_v4();

    let pushkin = create(&client, "/authors", json!({ "author_name": format!("Pushkin {}", suffix) }), "id_author").await;
    let gogol = create(&client, "/authors", json!({ "author_name": format!("Gogol {}", suffix) }), "id_author").await;
    let poetry = create(&client, "/genres", json!({ "genre_name": format!("poetry-{}", suffix) }), "id_genre").await;
    let satire = create(&client, "/genres", json!({ "genre_name": format!("satire-{}", suffix) }), "id_genre").await;

    let book = create(
        &client,
        "/books",
        json!({ "title": "Draft", "author_ids": [pushkin], "genre_ids": [poetry] }),
        "id_book",
    )
    .await;

    let response = with_key(client.put(format!("{}/books/{}", BASE_URL, book)))
        .json(&json!({ "title": "Dead Souls", "author_ids": [gogol], "genre_ids": [satire] }))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());

    let (_, body) = get_json(&client, &format!("/books/{}", book)).await;
    assert_eq!(body["book"]["title"], "Dead Souls");
    assert_eq!(body["book"]["authors"], json!([format!("Gogol {}", suffix)]));
    assert_eq!(body["book"]["genres"], json!([format!("satire-{}", suffix)]));

    for path in [
        format!("/books/{}", book),
        format!("/authors/{}", pushkin),
        format!("/authors/{}", gogol),
        format!("/genres/{}", poetry),
        format!("/genres/{}", satire),
    ] {
        assert!(delete(&client, &path).await.is_success());
        let (status, _) = get_json(&client, &path).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(delete(&client, &path).await, StatusCode::NOT_FOUND);
    }
}

#[tokio::test]
#[ignore]
async fn test_status_listing_and_reports() {
    let client = Client::new();
    let suffix = uuid::Uuid::new_v4();
    let genre_name = format!("report-genre-{}", suffix);
    let title = format!("Report Book {}", suffix);
    let phone = unique_phone();

    let genre = create(&client, "/genres", json!({ "genre_name": genre_name }), "id_genre").await;
    let book = create(
        &client,
        "/books",
        json!({ "title": title, "genre_ids": [genre] }),
        "id_book",
    )
    .await;
    let user = create(
        &client,
        "/users",
        json!({ "full_name": "Report Reader", "address": "Nevsky 10", "phone_number": phone }),
        "id_user",
    )
    .await;

    let response = with_key(client.post(format!("{}/books/borrows", BASE_URL)))
        .json(&json!({
            "id_user": user,
            "book_ids": [book],
            "borrow_date": "2024-03-01",
            "return_date": "2024-03-15"
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::CREATED);
    let body: Value = response.json().await.expect("Failed to parse response");
    let id_borrow = body["id_borrows"][0].as_str().expect("No borrow id").to_string();

    // At least our book is out, so a one-row page is full
    let (status, body) = get_json(&client, "/books/status?status=false&limit=1").await;
    assert!(status.is_success());
    assert_eq!(body["count"], 1);
    assert_eq!(body["next_from"], 1);
    assert_eq!(body["books"][0]["is_available"], false);

    let (_, body) = get_json(&client, "/books/status?status=true&limit=1000").await;
    assert!(find(&body["books"], "id_book", &book).is_none());

    let (_, body) = get_json(&client, "/reports/genres/popular").await;
    let row = find(&body["report"]["genres_top"], "genre_name", &genre_name).expect("genre counted");
    assert_eq!(row["genre_count"], 1);

    let (_, body) = get_json(&client, "/reports/books/users/current").await;
    let row = find(&body["report"]["current_books"], "id_user", &user).expect("current borrower");
    assert_eq!(row["count"], 1);

    let (_, body) = get_json(&client, "/reports/books/users/all").await;
    let row = find(&body["report"]["total_books"], "id_user", &user).expect("borrower total");
    assert_eq!(row["total_count"], 1);

    let (_, body) = get_json(&client, "/reports/visit/last").await;
    let row = find(&body["report"]["visits"], "id_user", &user).expect("last visit");
    assert_eq!(row["date"], "2024-03-01");

    let (_, body) = get_json(&client, "/reports/borrows/fine").await;
    let row = find(&body["report"]["borrows"], "book_title", &title).expect("overdue borrow");
    assert_eq!(row["full_name"], "Report Reader");
    assert_eq!(row["return_date"], "2024-03-15");

    let (_, body) = get_json(&client, "/reports/borrows/geo").await;
    let row = find(&body["report"]["users_geo"], "phone", &phone).expect("borrower address");
    assert_eq!(row["address"], "Nevsky 10");
    assert_eq!(row["book_title"], title.as_str());

    let (_, body) = get_json(&client, "/reports/borrows/geo?limit=1").await;
    assert_eq!(body["report"]["users_geo"].as_array().map(Vec::len), Some(1));

    let response = with_key(client.patch(format!("{}/books/borrows/{}?status=true", BASE_URL, id_borrow)))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());

    let (_, body) = get_json(&client, "/reports/books/users/current").await;
    assert!(find(&body["report"]["current_books"], "id_user", &user).is_none());

    let (_, body) = get_json(&client, "/reports/borrows/fine").await;
    assert!(find(&body["report"]["borrows"], "book_title", &title).is_none());
}

#[tokio::test]
#[ignore]
async fn test_same_book_twice_in_one_lend() {
    let client = Client::new();

    let book = create(&client, "/books", json!({ "title": "Twice Told Tales" }), "id_book").await;
    let user = create(
        &client,
        "/users",
        json!({ "full_name": "Greedy Reader", "phone_number": unique_phone() }),
        "id_user",
    )
    .await;

    let status = post(
        &client,
        "/books/borrows",
        json!({
            "id_user": user,
            "book_ids": [book, book],
            "borrow_date": "2024-03-01",
            "return_date": "2024-03-15"
        }),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    // The whole request rolled back
    let (_, body) = get_json(&client, &format!("/books/borrows?id_book={}", book)).await;
    assert_eq!(body["count"], 0);
    let (_, body) = get_json(&client, &format!("/books/{}/status", book)).await;
    assert_eq!(body["book"]["is_available"], true);
}
