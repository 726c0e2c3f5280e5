use ghprofile::util::browser::normalize_url;

#[test]
fn test_scheme_is_preserved() {
    assert_eq!(
        normalize_url("https://github.com/octocat"),
        "https://github.com/octocat"
    );
    assert_eq!(normalize_url("http://example.com"), "http://example.com");
}

#[test]
fn test_schemeless_website_defaults_to_https() {
    assert_eq!(normalize_url("octocat.example"), "https://octocat.example");
}
