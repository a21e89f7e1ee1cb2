//! End-to-end search flow against a stubbed ZincSearch server.

use serde_json::json;
use wiremock::matchers::{basic_auth, body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use zq::{AggType, SearchRequest, ZincClient};

const STUB_HITS: &str = r#"{"hits":{"total":0,"hits":[]}}"#;

#[tokio::test]
async fn search_returns_exact_body_from_server() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/202212-ErcotSPP/_search"))
        .and(basic_auth("admin", "r0yalewithcheese"))
        .respond_with(ResponseTemplate::new(200).set_body_string(STUB_HITS))
        .expect(1)
        .mount(&server)
        .await;

    let client = ZincClient::new(server.uri(), "admin", "r0yalewithcheese").unwrap();
    let request = SearchRequest::query_string("LzHouston:>100")
        .sort_by("-@timestamp")
        .page(0, 100)
        .agg("max_SPP", AggType::Max, "LzHouston")
        .agg("min_SPP", AggType::Min, "LzHouston")
        .agg("avg_SPP", AggType::Avg, "LzHouston");

    let resp = client.search("202212-ErcotSPP", &request).await.unwrap();
    assert_eq!(resp.status.as_u16(), 200);
    assert_eq!(resp.body, STUB_HITS);
}

#[tokio::test]
async fn search_sends_documented_wire_shape() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/202212-ErcotSPP/_search"))
        .and(body_partial_json(json!({
            "search_type": "querystring",
            "query": {"term": "LzHouston:>100"},
            "sort_fields": ["-@timestamp"],
            "from": 0,
            "max_results": 100,
            "_source": []
        })))
        .respond_with(ResponseTemplate::new(200).set_body_string(STUB_HITS))
        .expect(1)
        .mount(&server)
        .await;

    let client = ZincClient::new(server.uri(), "admin", "r0yalewithcheese").unwrap();
    let request = SearchRequest::query_string("LzHouston:>100")
        .sort_by("-@timestamp")
        .page(0, 100);

    let resp = client.search("202212-ErcotSPP", &request).await.unwrap();
    assert!(resp.is_success());
}

#[tokio::test]
async fn non_success_status_is_not_an_error() {
    let server = MockServer::start().await;

    let error_body = r#"{"error":"index not found"}"#;
    Mock::given(method("POST"))
        .and(path("/api/missing/_search"))
        .respond_with(ResponseTemplate::new(404).set_body_string(error_body))
        .mount(&server)
        .await;

    let client = ZincClient::new(server.uri(), "admin", "pw").unwrap();
    let request = SearchRequest::query_string("x");

    // The server's error payload is still a body the caller gets to see.
    let resp = client.search("missing", &request).await.unwrap();
    assert_eq!(resp.status.as_u16(), 404);
    assert_eq!(resp.body, error_body);
}

#[tokio::test]
async fn unreachable_server_surfaces_as_error() {
    // Port 1 is never listening.
    let client = ZincClient::new("http://127.0.0.1:1", "admin", "pw").unwrap();
    let request = SearchRequest::query_string("x");
    assert!(client.search("idx", &request).await.is_err());
}

#[tokio::test]
async fn bulk_stamps_monthly_index_prefix() {
    use chrono::Utc;
    use zq::BulkRecord;

    let server = MockServer::start().await;

    let expected_index = zq::monthly_index("ErcotSPP", Utc::now());
    Mock::given(method("POST"))
        .and(path("/api/_bulkv2"))
        .and(basic_auth("admin", "pw"))
        .and(body_partial_json(json!({"index": expected_index})))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(r#"{"message":"bulk data inserted"}"#),
        )
        .expect(1)
        .mount(&server)
        .await;

    let mut record = BulkRecord::new("ErcotSPP");
    record.push(
        json!({"LzHouston": 101.5})
            .as_object()
            .unwrap()
            .clone(),
    );

    let client = ZincClient::new(server.uri(), "admin", "pw").unwrap();
    let resp = client.bulk(&record).await.unwrap();
    assert!(resp.is_success());
}
