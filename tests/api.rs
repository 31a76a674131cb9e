use std::sync::Arc;

use actix_web::http::{StatusCode, header};
use actix_web::{App, test, web};
use serde_json::{Value, json};

use pushkind_store::media::MediaStore;
use pushkind_store::repository::CartReader;
use pushkind_store::routes::{self, USER_ID_HEADER};
use pushkind_store::services::notifications::{LoggingOrderListener, OrderNotifier};

mod common;

macro_rules! init_app {
    ($test_db:expr) => {
        init_app!($test_db, MediaStore::new(std::env::temp_dir().join("pushkind-store-media")))
    };
    ($test_db:expr, $media:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new($test_db.repo()))
                .app_data(web::Data::new(
                    OrderNotifier::new().with_listener(Arc::new(LoggingOrderListener)),
                ))
                .app_data(web::Data::new($media))
                .configure(routes::configure),
        )
        .await
    };
}

const BOUNDARY: &str = "store-test-boundary";

/// Multipart body with a single file field.
fn multipart_body(field: &str, file_name: &str, bytes: &[u8]) -> Vec<u8> {
    let mut body = format!(
        "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{field}\"; filename=\"{file_name}\"\r\nContent-Type: application/octet-stream\r\n\r\n"
    )
    .into_bytes();
    body.extend_from_slice(bytes);
    body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());
    body
}

fn multipart_content_type() -> (header::HeaderName, String) {
    (
        header::CONTENT_TYPE,
        format!("multipart/form-data; boundary={BOUNDARY}"),
    )
}

#[actix_web::test]
async fn test_catalog_cart_and_checkout_round_trip() {
    let test_db = common::TestDb::new("test_catalog_cart_and_checkout_round_trip.db");
    let app = init_app!(test_db);

    let req = test::TestRequest::post()
        .uri("/api/v1/collections")
        .set_json(json!({ "title": "Stationery" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let collection: Value = test::read_body_json(resp).await;
    let collection_id = collection["id"].as_i64().unwrap();

    let req = test::TestRequest::post()
        .uri("/api/v1/products")
        .set_json(json!({
            "title": "Notebook",
            "unit_price": "10.00",
            "inventory": 25,
            "collection_id": collection_id,
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let notebook: Value = test::read_body_json(resp).await;
    assert_eq!(notebook["unit_price"], "10.00");
    assert_eq!(notebook["price_with_tax"], "11.00");

    let req = test::TestRequest::post()
        .uri("/api/v1/products")
        .set_json(json!({
            "title": "Pencil",
            "unit_price": 5,
            "inventory": 100,
            "collection_id": collection_id,
        }))
        .to_request();
    let pencil: Value = test::call_and_read_body_json(&app, req).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/users")
        .set_json(json!({
            "username": "writer",
            "email": "writer@example.com",
            "first_name": "Wendy",
            "last_name": "Writer",
        }))
        .to_request();
    let user: Value = test::call_and_read_body_json(&app, req).await;
    let user_id = user["id"].as_i64().unwrap();

    let req = test::TestRequest::post()
        .uri("/api/v1/customers")
        .set_json(json!({ "user_id": user_id, "phone": "555-0199" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let req = test::TestRequest::post().uri("/api/v1/carts").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let cart: Value = test::read_body_json(resp).await;
    let cart_id = cart["id"].as_str().unwrap().to_string();

    for (product, quantity) in [(&notebook, 1), (&notebook, 1), (&pencil, 1)] {
        let req = test::TestRequest::post()
            .uri(&format!("/api/v1/carts/{cart_id}/items"))
            .set_json(json!({ "product_id": product["id"], "quantity": quantity }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
    }

    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/carts/{cart_id}"))
        .to_request();
    let cart: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(cart["items"].as_array().unwrap().len(), 2);
    assert_eq!(cart["total_price"], "25.00");

    let req = test::TestRequest::post()
        .uri("/api/v1/orders")
        .set_json(json!({ "cart_id": cart_id }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let req = test::TestRequest::post()
        .uri("/api/v1/orders")
        .insert_header((USER_ID_HEADER, user_id.to_string()))
        .set_json(json!({ "cart_id": cart_id }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let order: Value = test::read_body_json(resp).await;
    assert_eq!(order["items"].as_array().unwrap().len(), 2);
    assert_eq!(order["total_price"], "25.00");
    assert_eq!(order["payment_status"], "pending");

    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/carts/{cart_id}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::get()
        .uri("/api/v1/orders")
        .insert_header((USER_ID_HEADER, user_id.to_string()))
        .to_request();
    let mine: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(mine["items"].as_array().unwrap().len(), 1);

    let req = test::TestRequest::get().uri("/api/v1/orders/all").to_request();
    let all: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(all["items"][0]["customer_name"], "Wendy Writer");

    let req = test::TestRequest::delete()
        .uri(&format!("/api/v1/products/{}", notebook["id"]))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["error"].as_str().unwrap().contains("order item"));

    let req = test::TestRequest::patch()
        .uri(&format!("/api/v1/orders/{}", order["id"]))
        .set_json(json!({ "payment_status": "complete" }))
        .to_request();
    let updated: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(updated["payment_status"], "complete");
}

#[actix_web::test]
async fn test_checkout_errors_are_reported_as_bad_request() {
    let test_db = common::TestDb::new("test_checkout_errors_are_reported_as_bad_request.db");
    let app = init_app!(test_db);

    let req = test::TestRequest::post()
        .uri("/api/v1/orders")
        .insert_header((USER_ID_HEADER, "1"))
        .set_json(json!({ "cart_id": "not-a-uuid" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::post()
        .uri("/api/v1/orders")
        .insert_header((USER_ID_HEADER, "1"))
        .set_json(json!({ "cart_id": "6f1d8c2e-0000-4000-8000-000000000000" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["error"].is_string());
}

#[actix_web::test]
async fn test_current_customer_and_likes_require_identity() {
    let test_db = common::TestDb::new("test_current_customer_and_likes_require_identity.db");
    let repo = test_db.repo();
    let (user, customer) = common::seed_customer(&repo, "reader");
    let app = init_app!(test_db);

    let req = test::TestRequest::get()
        .uri("/api/v1/customers/me")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let req = test::TestRequest::get()
        .uri("/api/v1/customers/me")
        .insert_header((USER_ID_HEADER, user.id.to_string()))
        .to_request();
    let me: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(me["id"], customer.id);

    let req = test::TestRequest::put()
        .uri("/api/v1/customers/me")
        .insert_header((USER_ID_HEADER, user.id.to_string()))
        .set_json(json!({ "membership": "gold" }))
        .to_request();
    let me: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(me["membership"], "gold");

    let req = test::TestRequest::post()
        .uri("/api/v1/likes/product/3")
        .insert_header((USER_ID_HEADER, user.id.to_string()))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let req = test::TestRequest::get()
        .uri("/api/v1/likes/product/3")
        .to_request();
    let likes: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(likes["likes"], 1);

    let req = test::TestRequest::get()
        .uri("/api/v1/likes/planet/3")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_cart_routes_accept_any_uuid_spelling() {
    let test_db = common::TestDb::new("test_cart_routes_accept_any_uuid_spelling.db");
    let repo = test_db.repo();
    let collection = common::seed_collection(&repo, "Garden");
    let seeds = common::seed_product(&repo, collection.id, "Seeds", 400);
    let app = init_app!(test_db);

    let req = test::TestRequest::post().uri("/api/v1/carts").to_request();
    let cart: Value = test::call_and_read_body_json(&app, req).await;
    let cart_id = cart["id"].as_str().unwrap().to_string();
    let upper = cart_id.to_ascii_uppercase();
    let simple = cart_id.replace('-', "");

    let req = test::TestRequest::post()
        .uri(&format!("/api/v1/carts/{upper}/items"))
        .set_json(json!({ "product_id": seeds.id, "quantity": 3 }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/carts/{upper}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let cart: Value = test::read_body_json(resp).await;
    assert_eq!(cart["id"], cart_id.as_str());
    assert_eq!(cart["total_price"], "12.00");

    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/carts/{simple}/items"))
        .to_request();
    let items: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(items.as_array().unwrap().len(), 1);

    let req = test::TestRequest::get()
        .uri("/api/v1/carts/not-a-cart")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::delete()
        .uri(&format!("/api/v1/carts/{upper}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    assert!(!repo.cart_exists(&cart_id).unwrap());
}

#[actix_web::test]
async fn test_product_images_upload_and_delete() {
    let test_db = common::TestDb::new("test_product_images_upload_and_delete.db");
    let repo = test_db.repo();
    let collection = common::seed_collection(&repo, "Decor");
    let vase = common::seed_product(&repo, collection.id, "Vase", 2500);
    let media_root = tempfile::tempdir().unwrap();
    let app = init_app!(test_db, MediaStore::new(media_root.path()));

    let png = b"\x89PNG\r\n\x1a\n\0\0\0\rIHDR";
    let req = test::TestRequest::post()
        .uri(&format!("/api/v1/products/{}/images", vase.id))
        .insert_header(multipart_content_type())
        .set_payload(multipart_body("image", "vase.png", png))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let image: Value = test::read_body_json(resp).await;
    let stored = image["image"].as_str().unwrap().to_string();
    assert!(stored.ends_with(".png"));
    assert_eq!(image["url"], format!("/media/{stored}"));
    assert!(media_root.path().join(&stored).exists());

    let oversized = vec![0u8; 4000 * 1024 + 1];
    let req = test::TestRequest::post()
        .uri(&format!("/api/v1/products/{}/images", vase.id))
        .insert_header(multipart_content_type())
        .set_payload(multipart_body("image", "huge.png", &oversized))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Max size 4000");

    let req = test::TestRequest::post()
        .uri(&format!("/api/v1/products/{}/images", vase.id))
        .insert_header(multipart_content_type())
        .set_payload(multipart_body("image", "notes.txt", b"just text"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/products/{}/images", vase.id))
        .to_request();
    let images: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(images.as_array().unwrap().len(), 1);

    let req = test::TestRequest::delete()
        .uri(&format!("/api/v1/products/{}/images/{}", vase.id, image["id"]))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    assert!(!media_root.path().join(&stored).exists());
}

#[actix_web::test]
async fn test_promotions_and_addresses_round_trip() {
    let test_db = common::TestDb::new("test_promotions_and_addresses_round_trip.db");
    let repo = test_db.repo();
    let collection = common::seed_collection(&repo, "Toys");
    let kite = common::seed_product(&repo, collection.id, "Kite", 1500);
    let (_, customer) = common::seed_customer(&repo, "shopper");
    let app = init_app!(test_db);

    let req = test::TestRequest::post()
        .uri("/api/v1/promotions")
        .set_json(json!({ "description": "Windy days", "discount": 10 }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let promotion: Value = test::read_body_json(resp).await;
    assert_eq!(promotion["discount"], 10.0);

    let req = test::TestRequest::post()
        .uri("/api/v1/promotions")
        .set_json(json!({ "description": "Too good", "discount": 120 }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let attach_uri = format!(
        "/api/v1/products/{}/promotions/{}",
        kite.id, promotion["id"]
    );
    for _ in 0..2 {
        let req = test::TestRequest::put().uri(&attach_uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    }

    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/products/{}/promotions", kite.id))
        .to_request();
    let attached: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(attached.as_array().unwrap().len(), 1);
    assert_eq!(attached[0]["description"], "Windy days");

    let req = test::TestRequest::delete().uri(&attach_uri).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let req = test::TestRequest::post()
        .uri("/api/v1/tags")
        .set_json(json!({ "label": "seasonal" }))
        .to_request();
    let tag: Value = test::call_and_read_body_json(&app, req).await;
    let req = test::TestRequest::post()
        .uri(&format!(
            "/api/v1/tagged/promotion/{}/{}",
            promotion["id"], tag["id"]
        ))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let addresses_uri = format!("/api/v1/customers/{}/addresses", customer.id);
    let req = test::TestRequest::post()
        .uri(&addresses_uri)
        .set_json(json!({ "street": "4 Pier Rd", "city": "Brighton" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let address: Value = test::read_body_json(resp).await;

    let req = test::TestRequest::patch()
        .uri(&format!("{addresses_uri}/{}", address["id"]))
        .set_json(json!({ "city": "Hove" }))
        .to_request();
    let address: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(address["city"], "Hove");

    let req = test::TestRequest::get()
        .uri("/api/v1/customers/9999/addresses")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
