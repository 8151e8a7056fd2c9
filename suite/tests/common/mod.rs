#![allow(dead_code)]

use std::net::SocketAddr;

use ads_suite::{Harness, SuiteConfig};
use axum::Router;

pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new("ads_suite=debug"))
        .with_test_writer()
        .try_init();
}

/// Serve `app` on a random local port from a background thread.
pub fn start_server(app: Router) -> SocketAddr {
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
            axum::serve(listener, app).await
        })
        .unwrap();
    });

    addr
}

pub fn config_for(addr: SocketAddr) -> SuiteConfig {
    SuiteConfig::default().with_base_url(format!("http://{addr}"))
}

/// Harness pointed at a fresh in-process mock service.
pub fn mock_harness() -> Harness {
    init_logging();
    Harness::new(config_for(start_server(ads_mock_server::app())))
}
