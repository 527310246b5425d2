use std::fs;

use serde_json::json;
use spacetraveling::{
    dump, static_paths, DateFormatter, FeedSession, LoadState, PaginatedFeed, PostMapper,
    ReadingTimeEstimator,
};
use tempfile::TempDir;

fn write_json(dir: &TempDir, name: &str, value: serde_json::Value) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, serde_json::to_string_pretty(&value).unwrap()).unwrap();
    path
}

fn listing_page(page: u32, next_page: Option<&str>, uid: &str) -> serde_json::Value {
    json!({
        "page": page,
        "results_per_page": 1,
        "results_size": 1,
        "total_results_size": 2,
        "total_pages": 2,
        "next_page": next_page,
        "prev_page": null,
        "results": [{
            "id": format!("doc-{}", uid),
            "uid": uid,
            "type": "post-id",
            "href": "https://spacetraveling.cdn.prismic.io/api/v2/documents/search",
            "first_publication_date": "2021-03-15T19:25:28+0000",
            "last_publication_date": "2021-03-15T19:25:28+0000",
            "slugs": [uid],
            "lang": "pt-br",
            "data": {
                "title": format!("Title of {}", uid),
                "subtitle": "Tudo sobre como criar a sua primeira aplicação",
                "author": "Danilo Vieira"
            }
        }]
    })
}

#[test]
fn test_load_more_from_saved_pages() {
    let dir = TempDir::new().unwrap();
    let first = write_json(&dir, "page1.json", listing_page(1, Some("page2.json"), "first-post"));
    write_json(&dir, "page2.json", listing_page(2, None, "second-post"));

    let mapper = PostMapper::default();
    let seed = mapper.map_response(&dump::read_feed_response(&first).unwrap());
    let mut session = FeedSession::new(PaginatedFeed::new(seed));

    while let Some(token) = session.begin_load() {
        let outcome = dump::read_feed_response(&dir.path().join(&token))
            .map(|raw| mapper.map_response(&raw));
        session.finish_load(outcome);
    }

    assert_eq!(session.state(), &LoadState::Exhausted);
    let posts = session.feed().flattened_results();
    let ids: Vec<_> = posts.iter().map(|p| p.id.as_deref().unwrap()).collect();
    assert_eq!(ids, vec!["first-post", "second-post"]);
    assert_eq!(posts[0].publication_date.as_deref(), Some("15/Mar/2021"));
    assert_eq!(posts[1].author, "Danilo Vieira");
}

#[test]
fn test_missing_page_surfaces_failure() {
    let dir = TempDir::new().unwrap();
    let first = write_json(&dir, "page1.json", listing_page(1, Some("gone.json"), "first-post"));

    let mapper = PostMapper::default();
    let seed = mapper.map_response(&dump::read_feed_response(&first).unwrap());
    let mut session = FeedSession::new(PaginatedFeed::new(seed));

    let token = session.begin_load().unwrap();
    let outcome =
        dump::read_feed_response(&dir.path().join(&token)).map(|raw| mapper.map_response(&raw));
    session.finish_load(outcome);

    match session.state() {
        LoadState::Failed(message) => assert!(message.contains("gone.json")),
        other => panic!("unexpected state: {:?}", other),
    }
    assert_eq!(session.feed().len(), 1);
    assert!(session.can_load_more());
}

#[test]
fn test_post_detail_from_saved_response() {
    let dir = TempDir::new().unwrap();
    let paragraph = vec!["palavra"; 230].join(" ");
    let path = write_json(&dir, "post.json", json!({
        "id": "YFn7pxIAACIAeL6O",
        "uid": "criando-um-app-cra-do-zero",
        "first_publication_date": "2021-03-25T19:27:35+0000",
        "data": {
            "title": "Criando um app CRA do zero",
            "banner": { "url": "https://images.prismic.io/criando-app.png" },
            "author": "Danilo Vieira",
            "content": [
                { "heading": "Proin et varius",
                  "body": [ { "type": "paragraph", "text": paragraph, "spans": [] } ] },
                { "heading": "Cras laoreet mi", "body": [] }
            ]
        }
    }));

    let mapper = PostMapper::new(DateFormatter::from_locale_name("pt_BR").unwrap());
    let post = mapper.map_detail(&dump::read_post_detail(&path).unwrap()).unwrap();

    // 230 body words plus 6 heading words
    assert_eq!(post.reading_time(&ReadingTimeEstimator::default()), 2);
    let date = post.formatted_date(mapper.dates()).unwrap();
    assert_eq!(date.as_deref(), Some("25 mar 2021"));
}

#[test]
fn test_paths_from_saved_response() {
    let dir = TempDir::new().unwrap();
    let path = write_json(&dir, "paths.json", json!({
        "results": [
            { "uid": "como-utilizar-hooks", "slugs": ["como-utilizar-hooks"] },
            { "uid": "criando-um-app-cra-do-zero", "slugs": ["criando-um-app-cra-do-zero"] }
        ]
    }));

    let slugs = static_paths(&dump::read_paths_response(&path).unwrap());
    assert_eq!(slugs, vec!["como-utilizar-hooks", "criando-um-app-cra-do-zero"]);
}

#[test]
fn test_invalid_json_reports_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(&path, "{ not json").unwrap();

    let err = dump::read_feed_response(&path).unwrap_err();
    assert!(format!("{:#}", err).contains("broken.json"));
}
