use crate::WebdavError;
use crate::webdav::structs::WebdavUrl;

fn paths(urls: Vec<url::Url>) -> Vec<String> {
    urls.iter().map(|u| u.path().to_string()).collect()
}

#[test]
fn host_keeps_explicit_port_only() {
    let url = WebdavUrl::parse("https://example.com:8443/dav/").unwrap();
    assert_eq!(url.host(), "https://example.com:8443");

    let url = WebdavUrl::parse("http://example.com/dav/").unwrap();
    assert_eq!(url.host(), "http://example.com");

    // 默认端口会被 url 解析器规范化掉
    let url = WebdavUrl::parse("http://example.com:80/dav/").unwrap();
    assert_eq!(url.host(), "http://example.com");
}

#[test]
fn base_url_drops_user_info_query_and_fragment() {
    let url =
        WebdavUrl::parse("http://u:p@example.com/a/b?x=1#frag").unwrap();
    assert_eq!(url.base_url().as_str(), "http://example.com/a/b");
}

#[test]
fn relative_path_replaces_last_segment() {
    let url = WebdavUrl::parse("http://host/a/b").unwrap();
    assert_eq!(url.resolve("c").unwrap().as_str(), "http://host/a/c");
}

#[test]
fn absolute_path_replaces_whole_path() {
    let url = WebdavUrl::parse("http://host/a/b").unwrap();
    assert_eq!(url.resolve("/x/y").unwrap().as_str(), "http://host/x/y");
}

#[test]
fn trailing_slash_base_appends() {
    let url = WebdavUrl::parse("http://host/dav/").unwrap();
    assert_eq!(
        url.resolve("docs/a.txt").unwrap().as_str(),
        "http://host/dav/docs/a.txt"
    );
}

#[test]
fn ancestors_exclude_the_leaf() {
    let url = WebdavUrl::parse("http://host/").unwrap();
    let ancestors = url.ancestor_urls("/a/b/c/file.txt").unwrap();
    assert_eq!(paths(ancestors), vec!["/a", "/a/b", "/a/b/c"]);
}

#[test]
fn ancestors_of_top_level_resource_are_empty() {
    let url = WebdavUrl::parse("http://host/").unwrap();
    assert!(url.ancestor_urls("/file.txt").unwrap().is_empty());
}

#[test]
fn ancestors_follow_base_path_and_keep_host() {
    let url = WebdavUrl::parse("https://host:8443/dav/").unwrap();
    let ancestors = url.ancestor_urls("x/y/z.bin").unwrap();
    assert_eq!(
        ancestors.iter().map(|u| u.as_str()).collect::<Vec<_>>(),
        vec![
            "https://host:8443/dav",
            "https://host:8443/dav/x",
            "https://host:8443/dav/x/y",
        ]
    );
}

#[test]
fn eager_ancestors_skip_dotted_segments() {
    let url = WebdavUrl::parse("http://host/").unwrap();
    let ancestors = url.eager_ancestor_urls("/a/v1.2/c/file.txt").unwrap();
    // v1.2 被当作文件跳过，其子级仍保留
    assert_eq!(paths(ancestors), vec!["/a", "/a/v1.2/c"]);
}

#[test]
fn rejects_empty_and_hostless_urls() {
    assert!(matches!(
        WebdavUrl::parse(""),
        Err(WebdavError::InvalidBaseUrl(_))
    ));
    assert!(matches!(
        WebdavUrl::parse("not a url"),
        Err(WebdavError::InvalidBaseUrl(_))
    ));
    assert!(matches!(
        WebdavUrl::parse("mailto:someone@example.com"),
        Err(WebdavError::InvalidBaseUrl(_))
    ));
}
