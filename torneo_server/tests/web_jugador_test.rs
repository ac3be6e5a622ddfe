
use reqwest::{StatusCode, header::LOCATION};
use serde_json::json;

use crate::test_utils::tests::setup_web_app;

#[tokio::test]
async fn test_create_jugador() {
    let app = setup_web_app().await;

    let res = app
        .client
        .post(app.url("/jugadores"))
        .form(&[
            ("id", ""),
            ("apodo", "ana99"),
            ("nombre", "Ana"),
            ("apellido", "García"),
            ("fechaDeNacimiento", "1999-04-30"),
            ("return_to", "/jugadores"),
        ])
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::SEE_OTHER);
    assert_eq!(res.headers()[LOCATION], "/jugadores");
    assert_eq!(
        app.backend.get("jugadors", 1),
        Some(json!({
            "id": 1,
            "apodo": "ana99",
            "nombre": "Ana",
            "apellido": "García",
            "fechaDeNacimiento": "1999-04-30"
        }))
    );
}

#[tokio::test]
async fn test_empty_jugador_is_accepted() {
    let app = setup_web_app().await;

    let res = app
        .client
        .post(app.url("/jugadores"))
        .form(&[("id", ""), ("apodo", ""), ("fechaDeNacimiento", "")])
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::SEE_OTHER);
    assert_eq!(res.headers()[LOCATION], "/jugadores");
    assert_eq!(app.backend.get("jugadors", 1), Some(json!({"id": 1})));
}

#[tokio::test]
async fn test_edit_jugador_loads_and_updates() {
    let app = setup_web_app().await;
    let id = app.backend.seed(
        "jugadors",
        json!({"apodo": "beto", "nombre": "Beto", "fechaDeNacimiento": "2001-01-15"}),
    );

    let res = app
        .client
        .get(app.url(&format!("/jugadores/{}/edit", id)))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let html = res.text().await.unwrap();
    assert!(html.contains(r#"value="beto""#), "form loaded: {}", html);
    assert!(html.contains(r#"value="2001-01-15""#));

    let res = app
        .client
        .post(app.url("/jugadores"))
        .form(&[
            ("id", id.to_string().as_str()),
            ("apodo", "beto"),
            ("nombre", "Roberto"),
            ("fechaDeNacimiento", "2001-01-15"),
        ])
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::SEE_OTHER);
    let stored = app.backend.get("jugadors", id).unwrap();
    assert_eq!(stored["nombre"], "Roberto");
    assert!(stored.get("apellido").is_none());
}

#[tokio::test]
async fn test_jugador_backend_failure() {
    let app = setup_web_app().await;
    app.backend.fail_mutations(true);

    let res = app
        .client
        .post(app.url("/jugadores"))
        .form(&[("apodo", "ana99")])
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::BAD_GATEWAY);
    let html = res.text().await.unwrap();
    assert!(html.contains(r#"value="ana99""#), "input kept: {}", html);
}

#[tokio::test]
async fn test_jugador_list() {
    let app = setup_web_app().await;
    app.backend.seed("jugadors", json!({"apodo": "ana99"}));

    let res = app.client.get(app.url("/jugadores")).send().await.unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let html = res.text().await.unwrap();
    assert!(html.contains("ana99"));
    assert!(html.contains("/jugadores/1/edit"));
}
