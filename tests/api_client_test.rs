// Integration tests for the character API client

use charpick::api::CharacterClient;
use serde_json::json;

fn page_body() -> serde_json::Value {
    json!({
        "info": {"count": 2, "pages": 1, "next": null, "prev": null},
        "results": [
            {
                "id": 1,
                "name": "Rick Sanchez",
                "image": "https://rickandmortyapi.com/api/character/avatar/1.jpeg",
                "episode": [
                    "https://rickandmortyapi.com/api/episode/1",
                    "https://rickandmortyapi.com/api/episode/2"
                ]
            },
            {
                "id": 2,
                "name": "Morty Smith",
                "image": "https://rickandmortyapi.com/api/character/avatar/2.jpeg",
                "episode": [
                    "https://rickandmortyapi.com/api/episode/1"
                ]
            }
        ]
    })
}

#[tokio::test]
async fn search_returns_results_in_order() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/character/")
        .match_query(mockito::Matcher::UrlEncoded("name".into(), "rick".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(page_body().to_string())
        .create_async()
        .await;

    let client = CharacterClient::new(&server.url(), 5).unwrap();
    let results = client.search("rick").await.unwrap();

    let names: Vec<&str> = results.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Rick Sanchez", "Morty Smith"]);
    assert_eq!(results[0].episode_count(), 2);

    mock.assert_async().await;
}

#[tokio::test]
async fn search_url_encodes_the_name_filter() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/character/")
        .match_query(mockito::Matcher::UrlEncoded(
            "name".into(),
            "rick sanchez".into(),
        ))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(page_body().to_string())
        .create_async()
        .await;

    let client = CharacterClient::new(&server.url(), 5).unwrap();
    client.search("rick sanchez").await.unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn search_maps_not_found_status_to_error() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/character/")
        .match_query(mockito::Matcher::Any)
        .with_status(404)
        .with_header("content-type", "application/json")
        .with_body(r#"{"error": "There is nothing here"}"#)
        .create_async()
        .await;

    let client = CharacterClient::new(&server.url(), 5).unwrap();
    let error = client.search("zzz").await.unwrap_err();
    assert!(error.to_string().contains("404"));
}

#[tokio::test]
async fn search_maps_malformed_payload_to_error() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/character/")
        .match_query(mockito::Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("definitely not json")
        .create_async()
        .await;

    let client = CharacterClient::new(&server.url(), 5).unwrap();
    assert!(client.search("rick").await.is_err());
}
