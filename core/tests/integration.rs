//! Full item lifecycle against the live mock server.
//!
//! Starts the mock server on a random port, then exercises every client
//! operation over real HTTP using ureq, validating request building and
//! response parsing end-to-end.

use ads_core::{AdsClient, ApiError, CreateItem, HttpMethod, HttpResponse, Statistics};

/// Execute an `HttpRequest` using ureq and return an `HttpResponse`.
///
/// Status codes are returned as data rather than `Err` so the core client
/// does the status interpretation.
fn execute(req: ads_core::HttpRequest) -> HttpResponse {
    let agent = ureq::Agent::config_builder()
        .http_status_as_error(false)
        .build()
        .new_agent();

    let mut response = match (req.method, req.body) {
        (HttpMethod::Get, _) => agent.get(&req.url).call(),
        (HttpMethod::Delete, _) => agent.delete(&req.url).call(),
        (HttpMethod::Post, Some(body)) => {
            agent.post(&req.url).content_type("application/json").send(body.as_bytes())
        }
        (HttpMethod::Post, None) => agent.post(&req.url).send_empty(),
    }
    .expect("HTTP transport error");

    let status = response.status().as_u16();
    let body = response.body_mut().read_to_string().unwrap_or_default();

    HttpResponse {
        status,
        headers: Vec::new(),
        body,
    }
}

fn start_mock_server() -> std::net::SocketAddr {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            ads_mock_server::run(listener).await
        })
        .unwrap();
    });

    addr
}

#[test]
fn item_lifecycle() {
    let addr = start_mock_server();
    let client = AdsClient::new(&format!("http://{addr}"));
    let seller_id = 234567;

    // Step 1: seller has no items yet.
    let req = client.build_seller_items(seller_id);
    let items = client.parse_seller_items(execute(req)).unwrap();
    assert!(items.is_empty(), "expected empty listing");

    // Step 2: create an item.
    let input = CreateItem {
        seller_id,
        name: "X".to_string(),
        price: 99,
        statistics: Statistics::new(1, 1, 1),
    };
    let req = client.build_create_item(&input).unwrap();
    let created = client.parse_create_item(execute(req)).unwrap();
    assert!(!created.status.is_empty());

    // Step 3: find it in the seller listing.
    let req = client.build_seller_items(seller_id);
    let items = client.parse_seller_items(execute(req)).unwrap();
    assert_eq!(items.len(), 1);
    let item = items.into_iter().next().unwrap();
    assert_eq!(item.name, "X");
    assert_eq!(item.price, 99);

    // Step 4: get by id.
    let req = client.build_get_item(&item.id);
    let fetched = client.parse_get_item(execute(req)).unwrap();
    assert_eq!(fetched, vec![item.clone()]);

    // Step 5: statistics.
    let req = client.build_get_statistic(&item.id);
    let stats = client.parse_get_statistic(execute(req)).unwrap();
    assert_eq!(stats, vec![Statistics::new(1, 1, 1)]);

    // Step 6: delete.
    let req = client.build_delete_item(&item.id);
    client.parse_delete_item(execute(req)).unwrap();

    // Step 7: get after delete is NotFound.
    let req = client.build_get_item(&item.id);
    let err = client.parse_get_item(execute(req)).unwrap_err();
    assert!(matches!(err, ApiError::NotFound));

    // Step 8: delete again is NotFound.
    let req = client.build_delete_item(&item.id);
    let err = client.parse_delete_item(execute(req)).unwrap_err();
    assert!(matches!(err, ApiError::NotFound));
}

#[test]
fn malformed_ids_are_bad_requests() {
    let addr = start_mock_server();
    let client = AdsClient::new(&format!("http://{addr}"));

    let err = client.parse_get_item(execute(client.build_get_item("abcde"))).unwrap_err();
    assert!(matches!(err, ApiError::BadRequest { .. }));

    let err = client
        .parse_seller_items(execute(client.build_seller_items("abc")))
        .unwrap_err();
    assert!(matches!(err, ApiError::BadRequest { .. }));

    let err = client
        .parse_create_item(execute(client.build_create_item_raw(&serde_json::json!({}))))
        .unwrap_err();
    assert!(matches!(err, ApiError::BadRequest { .. }));
}
