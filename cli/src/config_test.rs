use super::*;

#[test]
fn trailing_slashes_are_trimmed() {
    let cfg = ServiceConfig::new("http://localhost:5000//", ServiceTimeouts::default()).unwrap();
    assert_eq!(cfg.base_url, "http://localhost:5000");
}

#[test]
fn https_is_accepted() {
    let cfg = ServiceConfig::new("https://render.example.com", ServiceTimeouts::default()).unwrap();
    assert_eq!(cfg.base_url, "https://render.example.com");
}

#[test]
fn non_http_scheme_is_rejected() {
    let err = ServiceConfig::new("ftp://host", ServiceTimeouts::default()).unwrap_err();
    assert!(matches!(err, CliError::InvalidBaseUrl(url) if url == "ftp://host"));
}

#[test]
fn missing_host_is_rejected() {
    assert!(ServiceConfig::new("http://", ServiceTimeouts::default()).is_err());
    assert!(ServiceConfig::new("localhost:5000", ServiceTimeouts::default()).is_err());
}

#[test]
fn url_joins_paths() {
    let cfg = ServiceConfig::new(DEFAULT_BASE_URL, ServiceTimeouts::default()).unwrap();
    assert_eq!(cfg.url("/upload_csv"), "http://127.0.0.1:5000/upload_csv");
    assert_eq!(cfg.url("static/previews/a.png"), "http://127.0.0.1:5000/static/previews/a.png");
    assert_eq!(cfg.url("https://cdn.example.com/a.png"), "https://cdn.example.com/a.png");
}

#[test]
fn default_timeouts() {
    let t = ServiceTimeouts::default();
    assert_eq!(t.request(), Duration::from_secs(120));
    assert_eq!(t.connect(), Duration::from_secs(10));
}
