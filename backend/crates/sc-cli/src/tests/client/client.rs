use crate::Client;

use std::time::Duration;

#[test]
fn test_base_url_trailing_slash_trimmed() {
    let client = Client::new("http://localhost:8000/", Duration::from_secs(5)).unwrap();
    assert_eq!(client.base_url, "http://localhost:8000");
}

#[test]
fn test_base_url_no_trailing_slash() {
    let client = Client::new("http://localhost:8000", Duration::from_secs(5)).unwrap();
    assert_eq!(client.base_url, "http://localhost:8000");
}

#[test]
fn test_timeout_stored() {
    let client = Client::new("http://localhost:8000", Duration::from_secs(12)).unwrap();
    assert_eq!(client.timeout, Duration::from_secs(12));
}
