#![cfg(test)]
use std::sync::Arc;
use std::time::{Duration, Instant};

use macfind_common::vendors::{Resolution, Source, UNRESOLVABLE, VendorRecord};
use macfind_core::{LookupError, VendorSearch};

use crate::utils::{self, MockEndpoint, Reply};

const TIMEOUT: Duration = Duration::from_secs(5);

/// A local hit must be answered without touching the network.
#[tokio::test]
async fn local_match_makes_no_remote_request() {
    let endpoint = MockEndpoint::start(Reply::ok("Remote Corp")).await.unwrap();
    let db = utils::local_db(&["FC:F1:CD\tOptex-Fa\tOptex-Fa Co.,Ltd.", "FC:FB:FB\tExample Inc."]);
    let service = VendorSearch::from_config(&utils::config(db.path(), &endpoint, TIMEOUT)).unwrap();

    let res = service.search("FC:FB:FB:01:FA:21").await.unwrap();

    assert_eq!(
        res,
        Resolution::new(VendorRecord::Vendor("Example Inc.".to_string()), Source::LocalDb)
    );
    assert_eq!(endpoint.request_count(), 0);
}

#[tokio::test]
async fn local_miss_returns_sentinel_without_remote_request() {
    let endpoint = MockEndpoint::start(Reply::ok("Remote Corp")).await.unwrap();
    let db = utils::local_db(&["FC:FB:FB\tExample Inc."]);
    let service = VendorSearch::from_config(&utils::config(db.path(), &endpoint, TIMEOUT)).unwrap();

    let res = service.search("6A:D5:DC:A5:F9:1B").await.unwrap();

    assert_eq!(res, Resolution::new(VendorRecord::Unresolvable, Source::LocalDb));
    assert_eq!(endpoint.request_count(), 0);
}

#[tokio::test]
async fn remote_vendor_when_local_db_is_missing() {
    let endpoint = MockEndpoint::start(Reply::ok("Acme Corp")).await.unwrap();
    let (_dir, db_path) = utils::missing_db();
    let service = VendorSearch::from_config(&utils::config(&db_path, &endpoint, TIMEOUT)).unwrap();

    let res = service.search("FC:FB:FB:01:FA:21").await.unwrap();

    assert_eq!(
        res,
        Resolution::new(VendorRecord::Vendor("Acme Corp".to_string()), Source::RemoteApi)
    );
    assert_eq!(endpoint.paths(), vec!["/FC%3AFB%3AFB%3A01%3AFA%3A21".to_string()]);
}

#[tokio::test]
async fn remote_not_found_is_unresolvable() {
    let endpoint = MockEndpoint::start(Reply::not_found()).await.unwrap();
    let (_dir, db_path) = utils::missing_db();
    let service = VendorSearch::from_config(&utils::config(&db_path, &endpoint, TIMEOUT)).unwrap();

    let res = service.search("6A:D5:DC:A5:F9:1B").await.unwrap();

    assert_eq!(res, Resolution::new(VendorRecord::Unresolvable, Source::RemoteApi));
    assert_eq!(res.record.to_string(), UNRESOLVABLE);
    assert_eq!(endpoint.request_count(), 1);
}

/// The database existed at startup but is gone by the time of the search.
#[tokio::test]
async fn unreadable_local_db_falls_back_to_remote() {
    let endpoint = MockEndpoint::start(Reply::ok("Acme Corp")).await.unwrap();
    let db = utils::local_db(&["FC:FB:FB\tExample Inc."]);
    let cfg = utils::config(db.path(), &endpoint, TIMEOUT);
    let service = VendorSearch::from_config(&cfg).unwrap();
    assert!(service.has_local_db());

    db.close().unwrap();
    let res = service.search("FC:FB:FB:01:FA:21").await.unwrap();

    assert_eq!(
        res,
        Resolution::new(VendorRecord::Vendor("Acme Corp".to_string()), Source::RemoteApi)
    );
    assert_eq!(endpoint.request_count(), 1);
}

#[tokio::test]
async fn slow_remote_times_out_before_it_answers() {
    let endpoint = MockEndpoint::start(Reply::ok("Too Late Inc.").delayed(Duration::from_secs(10)))
        .await
        .unwrap();
    let (_dir, db_path) = utils::missing_db();
    let limit = Duration::from_millis(300);
    let service = VendorSearch::from_config(&utils::config(&db_path, &endpoint, limit)).unwrap();

    let started = Instant::now();
    let err = service.search("FC:FB:FB:01:FA:21").await.unwrap_err();
    let elapsed = started.elapsed();

    assert!(matches!(err, LookupError::Timeout(d) if d == limit), "{err:?}");
    assert!(elapsed >= limit, "returned after {elapsed:?}");
    assert!(elapsed < Duration::from_secs(3), "returned after {elapsed:?}");
}

#[tokio::test]
async fn unexpected_status_is_reported() {
    let endpoint = MockEndpoint::start(Reply::status(500, "Internal Server Error").with_body("boom"))
        .await
        .unwrap();
    let (_dir, db_path) = utils::missing_db();
    let service = VendorSearch::from_config(&utils::config(&db_path, &endpoint, TIMEOUT)).unwrap();

    let err = service.search("FC:FB:FB:01:FA:21").await.unwrap_err();

    match err {
        LookupError::RemoteStatus { code, ref reason } => {
            assert_eq!(code, 500);
            assert_eq!(reason, "Internal Server Error");
        }
        other => panic!("expected status error, got {other:?}"),
    }
    assert_eq!(err.to_string(), "status code error: 500 Internal Server Error");
}

#[tokio::test]
async fn rate_limited_status_is_an_error() {
    let endpoint = MockEndpoint::start(Reply::status(429, "Too Many Requests")).await.unwrap();
    let (_dir, db_path) = utils::missing_db();
    let service = VendorSearch::from_config(&utils::config(&db_path, &endpoint, TIMEOUT)).unwrap();

    let err = service.search("FC:FB:FB:01:FA:21").await.unwrap_err();

    assert!(matches!(err, LookupError::RemoteStatus { code: 429, .. }), "{err:?}");
}

#[tokio::test]
async fn truncated_body_is_a_read_error() {
    let endpoint = MockEndpoint::start(Reply::ok("Acme").truncated()).await.unwrap();
    let (_dir, db_path) = utils::missing_db();
    let service = VendorSearch::from_config(&utils::config(&db_path, &endpoint, TIMEOUT)).unwrap();

    let err = service.search("FC:FB:FB:01:FA:21").await.unwrap_err();

    assert!(matches!(err, LookupError::RemoteRead(_)), "{err:?}");
}

#[tokio::test]
async fn malformed_address_never_reaches_a_repository() {
    let endpoint = MockEndpoint::start(Reply::ok("Acme Corp")).await.unwrap();
    let (_dir, db_path) = utils::missing_db();
    let service = VendorSearch::from_config(&utils::config(&db_path, &endpoint, TIMEOUT)).unwrap();

    let err = service.search("6A:D5:DC:Avv:F9:1B:1B").await.unwrap_err();

    assert!(matches!(err, LookupError::Validation(_)), "{err:?}");
    assert_eq!(err.to_string(), "invalid MAC address: 6A:D5:DC:Avv:F9:1B:1B");
    assert_eq!(endpoint.request_count(), 0);
}

#[tokio::test]
async fn concurrent_searches_share_one_service() {
    let endpoint = MockEndpoint::start(Reply::ok("Acme Corp")).await.unwrap();
    let db = utils::local_db(&["FC:FB:FB\tExample Inc."]);
    let service = Arc::new(
        VendorSearch::from_config(&utils::config(db.path(), &endpoint, TIMEOUT)).unwrap(),
    );

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let service = service.clone();
            tokio::spawn(async move {
                let mac = format!("FC:FB:FB:01:FA:{i:02X}");
                service.search(&mac).await
            })
        })
        .collect();

    for handle in handles {
        let res = handle.await.unwrap().unwrap();
        assert_eq!(res.record.vendor(), Some("Example Inc."));
    }
    assert_eq!(endpoint.request_count(), 0);
}
