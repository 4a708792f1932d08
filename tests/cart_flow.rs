mod common;

use axum::http::{StatusCode, header};
use common::{Visitor, product, send, spawn_app};
use mx_store::repository::ProductRepository;
use uuid::Uuid;

#[tokio::test]
async fn new_visitor_gets_a_session_cookie() {
    let app = spawn_app(Vec::new());
    let request = axum::http::Request::builder()
        .uri("/cartitems")
        .body(axum::body::Body::empty())
        .unwrap();
    let response = send(&app.router, request).await;
    assert_eq!(response.status, StatusCode::OK);
    let cookie = response
        .headers
        .get(header::SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .expect("session cookie");
    assert!(cookie.starts_with("mx_session="));
    assert!(cookie.contains("HttpOnly"));

    // A visitor that already has a session is not issued a new one.
    let visitor = Visitor::new();
    let response = send(&app.router, visitor.request("GET", "/cartitems")).await;
    assert!(response.headers.get(header::SET_COOKIE).is_none());
}

#[tokio::test]
async fn adding_the_same_product_twice_is_reported_as_duplicate() {
    let lamp = product("Lamp", 1000, "lamp.png");
    let app = spawn_app(vec![lamp.clone()]);
    let visitor = Visitor::new();
    let uri = format!("/addtocart/{}", lamp.id);

    let first = send(&app.router, visitor.request("POST", &uri)).await;
    assert_eq!(first.status, StatusCode::OK);
    assert!(first.body.contains("Lamp successfully added"));
    assert!(first.body.contains("alert-success"));

    let second = send(&app.router, visitor.request("POST", &uri)).await;
    assert_eq!(second.status, StatusCode::OK);
    assert!(second.body.contains("Lamp already exists in cart"));
    assert!(second.body.contains("alert-warning"));

    let cart = app.state.carts.cart(visitor.session()).await;
    let cart = cart.lock().await;
    assert_eq!(cart.len(), 1);
    assert_eq!(cart.quantity_of(lamp.id), Some(1));
}

#[tokio::test]
async fn duplicate_add_is_answered_from_the_cart_after_the_product_is_deleted() {
    let lamp = product("Lamp", 1000, "lamp.png");
    let app = spawn_app(vec![lamp.clone()]);
    let visitor = Visitor::new();
    let uri = format!("/addtocart/{}", lamp.id);

    send(&app.router, visitor.request("POST", &uri)).await;
    assert!(app.repo.delete(lamp.id).await.unwrap().is_some());

    let again = send(&app.router, visitor.request("POST", &uri)).await;
    assert_eq!(again.status, StatusCode::OK, "{}", again.body);
    assert!(again.body.contains("Lamp already exists in cart"));
    assert!(again.body.contains("alert-warning"));

    // Someone else can no longer add it.
    let other = send(&app.router, Visitor::new().request("POST", &uri)).await;
    assert_eq!(other.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn browsing_without_a_cookie_creates_no_carts() {
    let app = spawn_app(vec![product("Lamp", 1000, "lamp.png")]);

    for _ in 0..5 {
        for uri in ["/", "/cartitems", "/gotocart"] {
            let request = axum::http::Request::builder()
                .uri(uri)
                .body(axum::body::Body::empty())
                .unwrap();
            let response = send(&app.router, request).await;
            assert_eq!(response.status, StatusCode::OK);
        }
    }
    assert_eq!(app.state.carts.session_count().await, 0);

    let visitor = Visitor::new();
    let update = send(
        &app.router,
        visitor.request("PUT", &format!("/updateorderitem?product_id={}&action=add", Uuid::new_v4())),
    )
    .await;
    assert_eq!(update.status, StatusCode::NOT_FOUND);
    assert_eq!(update.body, "Product not found in order");
    assert_eq!(app.state.carts.session_count().await, 0);
}

#[tokio::test]
async fn total_reflects_quantities() {
    let a = product("A", 1000, "a.png");
    let b = product("B", 500, "b.png");
    let app = spawn_app(vec![a.clone(), b.clone()]);
    let visitor = Visitor::new();

    send(&app.router, visitor.request("POST", &format!("/addtocart/{}", a.id))).await;
    send(&app.router, visitor.request("POST", &format!("/addtocart/{}", a.id))).await;
    send(&app.router, visitor.request("POST", &format!("/addtocart/{}", b.id))).await;
    for _ in 0..2 {
        let response = send(
            &app.router,
            visitor.request("PUT", &format!("/updateorderitem?product_id={}&action=add", b.id)),
        )
        .await;
        assert_eq!(response.status, StatusCode::OK);
        assert!(!response.body.contains(r#"hx-get="/gotocart""#));
    }

    let cart_view = send(&app.router, visitor.request("GET", "/cartitems")).await;
    assert!(cart_view.body.contains("Total: $25.00"), "{}", cart_view.body);

    let cart = app.state.carts.cart(visitor.session()).await;
    assert_eq!(cart.lock().await.total_cost(), 2500);
}

#[tokio::test]
async fn subtracting_the_last_unit_removes_the_item() {
    let a = product("A", 1000, "a.png");
    let app = spawn_app(vec![a.clone()]);
    let visitor = Visitor::new();
    send(&app.router, visitor.request("POST", &format!("/addtocart/{}", a.id))).await;

    let response = send(
        &app.router,
        visitor.request("PUT", &format!("/updateorderitem?product_id={}&action=subtract", a.id)),
    )
    .await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains(r#"hx-get="/gotocart""#));

    let cart = app.state.carts.cart(visitor.session()).await;
    assert!(cart.lock().await.is_empty());

    let again = send(
        &app.router,
        visitor.request("PUT", &format!("/updateorderitem?product_id={}&action=remove", a.id)),
    )
    .await;
    assert_eq!(again.status, StatusCode::NOT_FOUND);
    assert_eq!(again.body, "Product not found in order");
}

#[tokio::test]
async fn unknown_action_does_not_change_the_cart() {
    let a = product("A", 700, "a.png");
    let app = spawn_app(vec![a.clone()]);
    let visitor = Visitor::new();
    send(&app.router, visitor.request("POST", &format!("/addtocart/{}", a.id))).await;

    let response = send(
        &app.router,
        visitor.request("PUT", &format!("/updateorderitem?product_id={}&action=double", a.id)),
    )
    .await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("Invalid Action"));
    assert!(response.body.contains("alert-info"));

    let cart = app.state.carts.cart(visitor.session()).await;
    assert_eq!(cart.lock().await.quantity_of(a.id), Some(1));
}

#[tokio::test]
async fn malformed_and_unknown_product_ids() {
    let app = spawn_app(Vec::new());
    let visitor = Visitor::new();

    let bad = send(&app.router, visitor.request("POST", "/addtocart/not-a-uuid")).await;
    assert_eq!(bad.status, StatusCode::BAD_REQUEST);
    assert_eq!(bad.body, "Invalid product ID");

    let missing = send(
        &app.router,
        visitor.request("POST", &format!("/addtocart/{}", Uuid::new_v4())),
    )
    .await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);

    let bad_update = send(&app.router, visitor.request("PUT", "/updateorderitem?action=add")).await;
    assert_eq!(bad_update.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn visitors_do_not_share_carts() {
    let a = product("A", 1000, "a.png");
    let app = spawn_app(vec![a.clone()]);
    let alice = Visitor::new();
    let bob = Visitor::new();

    send(&app.router, alice.request("POST", &format!("/addtocart/{}", a.id))).await;

    let bobs_cart = send(&app.router, bob.request("GET", "/cartitems")).await;
    assert!(bobs_cart.body.contains("Total: $0.00"));

    let bob_adds = send(&app.router, bob.request("POST", &format!("/addtocart/{}", a.id))).await;
    assert!(bob_adds.body.contains("A successfully added"));
}

#[tokio::test]
async fn concurrent_adds_from_one_visitor_keep_one_item() {
    let a = product("A", 1000, "a.png");
    let app = spawn_app(vec![a.clone()]);
    let visitor = Visitor::new();
    let uri = format!("/addtocart/{}", a.id);

    let mut handles = Vec::new();
    for _ in 0..16 {
        let router = app.router.clone();
        let request = visitor.request("POST", &uri);
        handles.push(tokio::spawn(async move { send(&router, request).await }));
    }
    for handle in handles {
        assert_eq!(handle.await.unwrap().status, StatusCode::OK);
    }

    let cart = app.state.carts.cart(visitor.session()).await;
    assert_eq!(cart.lock().await.len(), 1);
}

#[tokio::test]
async fn storefront_lists_only_products_with_images() {
    let shown = product("Shown", 100, "shown.png");
    let hidden = product("Hidden", 100, "");
    let app = spawn_app(vec![shown, hidden]);
    let visitor = Visitor::new();

    let response = send(&app.router, visitor.request("GET", "/shoppingitems")).await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("Shown"));
    assert!(!response.body.contains("Hidden"));
}

#[tokio::test]
async fn homepage_and_cart_page_render_cart_contents() {
    let a = product("Teapot", 1999, "teapot.png");
    let app = spawn_app(vec![a.clone()]);
    let visitor = Visitor::new();
    send(&app.router, visitor.request("POST", &format!("/addtocart/{}", a.id))).await;

    let home = send(&app.router, visitor.request("GET", "/")).await;
    assert!(home.body.contains("Cart (1)"));
    assert!(home.body.starts_with("<!DOCTYPE html>"));

    let cart_page = send(&app.router, visitor.request("GET", "/gotocart")).await;
    assert!(cart_page.body.contains("Teapot"));
    assert!(cart_page.body.contains(&format!("quantity-{}", a.id)));
    assert!(cart_page.body.contains("19.99"));
}
