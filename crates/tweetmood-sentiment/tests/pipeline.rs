//! End-to-end: mock search API -> pipeline -> output files.

use serde_json::json;
use tweetmood_core::Credentials;
use tweetmood_search::SearchClient;
use tweetmood_sentiment::{
    run, write_outputs, LexiconAnalyzer, OutputPaths, Sentiment, SentimentSummary,
};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(base_url: &str) -> SearchClient {
    let credentials = Credentials {
        consumer_key: "ck".to_string(),
        consumer_secret: "cs".to_string(),
        access_token: "at".to_string(),
        access_token_secret: "ats".to_string(),
    };
    SearchClient::with_base_url(credentials, 5, "tweetmood-test/0.1", base_url)
        .expect("client construction should not fail")
}

fn page() -> serde_json::Value {
    json!({
        "statuses": [
            {
                "id": 105,
                "full_text": "I love my job! #work",
                "retweet_count": 0
            },
            {
                "id": 104,
                "full_text": "RT @ceo: Our team is the best\nproud of everyone",
                "retweet_count": 40,
                "retweeted_status": {
                    "id": 90,
                    "full_text": "Our team is the best\nproud of everyone",
                    "retweet_count": 40
                }
            },
            {
                "id": 103,
                "full_text": "RT @ceo: Our team is the best\nproud of everyone",
                "retweet_count": 40,
                "retweeted_status": {
                    "id": 90,
                    "full_text": "Our team is the best\nproud of everyone",
                    "retweet_count": 40
                }
            },
            {
                "id": 102,
                "full_text": "Stuck in traffic, late for work again. This is awful @metro https://t.co/x",
                "retweet_count": 0
            }
        ]
    })
}

#[tokio::test]
async fn run_classifies_dedups_and_writes_files() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search/tweets.json"))
        .and(query_param("q", "work"))
        .and(query_param("count", "4"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page()))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let outcome = run(&client, "work", 4, &LexiconAnalyzer).await;

    assert!(outcome.is_complete(), "error: {:?}", outcome.error);
    let texts: Vec<&str> = outcome.posts.iter().map(|p| p.text.as_str()).collect();
    assert_eq!(
        texts,
        vec![
            "I love my job! #work",
            "Our team is the best proud of everyone",
            "Stuck in traffic, late for work again. This is awful @metro https://t.co/x",
        ]
    );
    let sentiments: Vec<Sentiment> = outcome.posts.iter().map(|p| p.sentiment).collect();
    assert_eq!(
        sentiments,
        vec![Sentiment::Positive, Sentiment::Positive, Sentiment::Negative]
    );

    let summary = SentimentSummary::from_posts(&outcome.posts);
    assert_eq!(summary.total, 3);
    assert_eq!(summary.negative, 1);

    let dir = tempfile::tempdir().unwrap();
    let paths = OutputPaths {
        all: dir.path().join("work_tweets.txt"),
        negative: dir.path().join("work_tweets_negative.txt"),
    };
    let written = write_outputs(&paths, &outcome.posts).await.unwrap();
    assert_eq!(written.all_lines, 3);
    assert_eq!(written.negative_lines, 1);

    let negative = std::fs::read_to_string(&paths.negative).unwrap();
    assert_eq!(
        negative,
        "Stuck in traffic, late for work again. This is awful @metro https://t.co/x\n"
    );
}

#[tokio::test]
async fn fetch_failure_after_first_page_keeps_partial_results() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search/tweets.json"))
        .and(query_param("count", "6"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page()))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/search/tweets.json"))
        .and(query_param("max_id", "101"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let outcome = run(&client, "work", 6, &LexiconAnalyzer).await;

    assert!(!outcome.is_complete());
    assert_eq!(outcome.posts.len(), 3);
    let err = outcome.error.expect("fetch failure recorded");
    assert!(!err.is_authentication());
}

#[tokio::test]
async fn rejected_credentials_yield_empty_run() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search/tweets.json"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "errors": [{ "code": 89, "message": "Invalid or expired token." }]
        })))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let outcome = run(&client, "work", 200, &LexiconAnalyzer).await;

    assert!(outcome.posts.is_empty());
    assert!(outcome.error.expect("auth failure recorded").is_authentication());
}
