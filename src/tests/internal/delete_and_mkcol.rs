use reqwest::StatusCode;

use crate::tests::{MockTransport, Reply, mock_client, with_account};
use crate::webdav::enums::WebDavMethod;

#[tokio::test]
async fn delete_returns_raw_status_without_raising() {
    for code in [204, 404, 423, 500] {
        let transport = MockTransport::new(move |_, _| Reply::body(code, b"body"));
        let client = mock_client("http://host/dav/", with_account(), &transport);

        let response = client.delete_file("old.txt").await.unwrap();
        assert_eq!(response.status().as_u16(), code);
        assert_eq!(&response.bytes().await.unwrap()[..], b"body");
    }
}

#[tokio::test]
async fn delete_is_authenticated_and_not_retried() {
    let transport = MockTransport::always(500);
    let client = mock_client("http://host/dav/", with_account(), &transport);

    client.delete_file("old.txt").await.unwrap();

    let requests = transport.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, WebDavMethod::DELETE);
    assert_eq!(requests[0].path, "/dav/old.txt");
    assert!(requests[0].authenticated);
}

#[tokio::test]
async fn make_directory_returns_raw_status() {
    for code in [201, 405, 409, 404] {
        let transport = MockTransport::always(code);
        let client = mock_client("http://host/", with_account(), &transport);

        let response = client.make_directory("/new/dir").await.unwrap();
        assert_eq!(response.status(), StatusCode::from_u16(code).unwrap());
    }
}

#[tokio::test]
async fn make_directory_is_a_single_authenticated_mkcol() {
    let transport = MockTransport::always(201);
    let client = mock_client("http://host/", with_account(), &transport);

    client.make_directory("/new/dir").await.unwrap();

    let requests = transport.requests();
    assert_eq!(transport.lines(), vec!["MKCOL /new/dir"]);
    assert!(requests[0].authenticated);
}
