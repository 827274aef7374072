use crate::app;
use wiremock::{
    matchers::{any, body_json, method, path},
    Mock, ResponseTemplate,
};

const VALID_BODY: &str =
    "fullName=Jane%20Doe&email=jane%40example.com&password=hunter22&role=fetcher";

#[actix_web::test]
async fn register_forwards_the_form_as_json() {
    let app = app::spawn_app().await;

    Mock::given(path("/api/register"))
        .and(method("POST"))
        .and(body_json(serde_json::json!({
            "fullName": "Jane Doe",
            "email": "jane@example.com",
            "password": "hunter22",
            "role": "fetcher",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .expect(1)
        .mount(&app.backend_server)
        .await;

    let response = app
        .post_register(VALID_BODY.into())
        .await
        .expect("Failed to execute request");

    assert_eq!(200, response.status().as_u16());
}

#[actix_web::test]
async fn accepted_registration_shows_the_welcome_and_clears_the_form() {
    let app = app::spawn_app().await;

    Mock::given(path("/api/register"))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(serde_json::json!({ "message": "Welcome!" })),
        )
        .mount(&app.backend_server)
        .await;

    let html = app
        .post_register(VALID_BODY.into())
        .await
        .expect("Failed to execute request")
        .text()
        .await
        .unwrap();

    assert!(html.contains(r#"<div class="status-banner success">Welcome!</div>"#));
    assert!(html.contains(r#"name="fullName" value="""#));
    assert!(html.contains(r#"name="email" value="""#));
    // The tab the user registered from stays selected.
    assert!(html.contains(r#"name="role" value="fetcher""#));
}

#[actix_web::test]
async fn rejected_registration_shows_the_backend_message_and_keeps_the_input() {
    let app = app::spawn_app().await;

    Mock::given(path("/api/register"))
        .respond_with(
            ResponseTemplate::new(400)
                .set_body_json(serde_json::json!({ "message": "Email already exists" })),
        )
        .mount(&app.backend_server)
        .await;

    let html = app
        .post_register(VALID_BODY.into())
        .await
        .expect("Failed to execute request")
        .text()
        .await
        .unwrap();

    assert!(html.contains(r#"<div class="status-banner error">Email already exists</div>"#));
    assert!(html.contains(r#"name="fullName" value="Jane Doe""#));
    assert!(html.contains(r#"name="email" value="jane@example.com""#));
}

#[actix_web::test]
async fn broken_backend_shows_the_connection_message() {
    let app = app::spawn_app().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
        .mount(&app.backend_server)
        .await;

    let html = app
        .post_register(VALID_BODY.into())
        .await
        .expect("Failed to execute request")
        .text()
        .await
        .unwrap();

    assert!(html.contains("Failed to connect to the server."));
}

#[actix_web::test]
async fn register_returns_a_400_when_fields_are_missing_or_invalid() {
    let app = app::spawn_app().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.backend_server)
        .await;

    let test_cases = vec![
        (
            "email=jane%40example.com&password=hunter22&role=sender",
            "Full Name is required.",
        ),
        (
            "fullName=Jane%20Doe&email=&password=hunter22&role=sender",
            "Email Address is required.",
        ),
        (
            "fullName=Jane%20Doe&email=jane%40example.com&password=%20&role=sender",
            "Password is required.",
        ),
        (
            "fullName=Jane%20Doe&email=not-an-email&password=hunter22&role=sender",
            "not-an-email is not a valid email address.",
        ),
        (
            "fullName=Jane%20Doe&email=jane%40example.com&password=hunter22&role=courier",
            "Choose whether you want to send or fetch.",
        ),
        (
            "fullName=Jane%20Doe&email=jane%40example.com&password=hunter22",
            "Choose whether you want to send or fetch.",
        ),
    ];

    for (body, message) in test_cases {
        let response = app
            .post_register(body.into())
            .await
            .expect("Failed to execute request");

        assert_eq!(
            400,
            response.status().as_u16(),
            "The API did not fail with 400 Bad Request when the payload was {}.",
            body
        );
        assert!(response.text().await.unwrap().contains(message));
    }
}

#[actix_web::test]
async fn empty_backend_message_shows_the_default_welcome() {
    let app = app::spawn_app().await;

    Mock::given(path("/api/register"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "message": "" })))
        .mount(&app.backend_server)
        .await;

    let html = app
        .post_register(VALID_BODY.into())
        .await
        .expect("Failed to execute request")
        .text()
        .await
        .unwrap();

    assert!(html.contains(r#"<div class="status-banner success">Welcome to Fetchitt!</div>"#));
}
