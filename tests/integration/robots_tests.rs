//! Integration tests for robots.txt parsing and verdicts
//!
//! These tests run realistic robots.txt files through the public API, from
//! raw text to allow/disallow answers.

use robots_rep::config::parse_config;
use robots_rep::{ParseError, Parser, RobotsTxt, UserAgentGroup};

const SITE_ROBOTS: &str = "\
# robots.txt for www.example.com
User-agent: *
Disallow: /search
Disallow: /*?sessionid=
Disallow: /*.pdf$
Allow: /search/about

User-agent: NewsBot
User-agent: news-archiver
Disallow: /
Allow: /news/
Allow: /news/*/print$

User-agent: BadBot # misbehaving
Disallow: /

Crawl-delay: 10
Sitemap: https://www.example.com/sitemap.xml
Sitemap: https://www.example.com/news-sitemap.xml
";

fn site() -> RobotsTxt {
    RobotsTxt::parse(SITE_ROBOTS).expect("Failed to parse site robots.txt")
}

#[test]
fn test_parse_site_structure() {
    let robots = site();

    assert_eq!(robots.groups().len(), 3);
    assert_eq!(robots.groups()[1].user_agents(), ["NewsBot", "news-archiver"]);
    assert_eq!(robots.groups()[2].user_agents(), ["BadBot"]);
    assert_eq!(
        robots.sitemaps(),
        [
            "https://www.example.com/sitemap.xml",
            "https://www.example.com/news-sitemap.xml",
        ]
    );
}

#[test]
fn test_generic_crawler_verdicts() {
    let robots = site();
    let agent = "GenericBot";

    assert!(robots.is_allowed("https://www.example.com/", agent).unwrap());
    assert!(robots.is_allowed("https://www.example.com/products/1", agent).unwrap());
    assert!(!robots.is_allowed("https://www.example.com/search?q=x", agent).unwrap());
    assert!(robots.is_allowed("https://www.example.com/search/about", agent).unwrap());
    assert!(!robots.is_allowed("/cart?sessionid=42", agent).unwrap());
    assert!(!robots.is_allowed("/files/manual.pdf", agent).unwrap());
    assert!(robots.is_allowed("/files/manual.pdf?view=1", agent).unwrap());
}

#[test]
fn test_named_and_wildcard_groups_are_pooled() {
    let robots = site();

    // NewsBot is covered by its own group and by `*`
    assert!(robots.is_allowed("/news/2024/budget", "NewsBot").unwrap());
    assert!(robots.is_allowed("/news/2024/print", "newsbot").unwrap());
    assert!(!robots.is_allowed("/about", "NewsBot").unwrap());
    // Rules from the wildcard group still apply to named agents
    assert!(!robots.is_allowed("/search", "news-archiver").unwrap());
}

#[test]
fn test_explicit_disallow_reporting() {
    let robots = site();

    assert!(robots.is_explicitly_not_allowed_for("/about", "BadBot").unwrap());
    assert!(robots.is_explicitly_not_allowed_for("/about", "NewsBot").unwrap());
    assert!(!robots.is_explicitly_not_allowed_for("/news/today", "NewsBot").unwrap());
    // Only the wildcard group disallows /search for GenericBot
    assert!(!robots.is_explicitly_not_allowed_for("/search", "GenericBot").unwrap());
    assert!(!robots.is_allowed("/search", "GenericBot").unwrap());
}

#[test]
fn test_percent_encoding_equivalence() {
    let robots = RobotsTxt::parse("User-agent: *\nDisallow: /%7Ejoe/private\n").unwrap();

    assert!(!robots.is_allowed("/~joe/private/notes", "AnyBot").unwrap());
    assert!(!robots.is_allowed("/%7ejoe/private", "AnyBot").unwrap());
    assert!(robots.is_allowed("/~joe/public", "AnyBot").unwrap());
}

#[test]
fn test_rule_before_group_is_rejected() {
    let result = RobotsTxt::parse("Allow: /\nUser-agent: *\nDisallow: /x\n");
    assert_eq!(result.unwrap_err(), ParseError::RuleBeforeUserAgent { line: 1 });
}

#[test]
fn test_unparsable_url_is_reported() {
    let robots = site();
    assert!(robots.is_allowed("https://[::1/", "GenericBot").is_err());
}

#[test]
fn test_document_built_by_hand() {
    let robots = RobotsTxt::new(
        vec![
            UserAgentGroup::builder(["FooBot"]).disallow("/foo").build(),
            UserAgentGroup::builder(["*"]).allow("/foo/bar").build(),
        ],
        vec!["https://example.com/sitemap.xml".to_string()],
    );

    assert!(robots.is_allowed("/foo/bar", "FooBot").unwrap());
    assert!(!robots.is_allowed("/foo/baz", "FooBot").unwrap());
    assert_eq!(robots.sitemaps().len(), 1);
}

#[test]
fn test_parser_from_config() {
    let config = parse_config("[parser]\ntrim-characters = [\" \", \"\\n\", \"\\r\", \"\\t\"]\n")
        .expect("Failed to parse config");
    let parser = Parser::with_config(&config.parser);

    // Without the BOM in the trim set the first line is not a user-agent line
    let result = parser.parse("\u{feff}User-agent: *\nDisallow: /\n");
    assert!(result.is_err());

    let robots = Parser::new()
        .parse("\u{feff}User-agent: *\nDisallow: /\n")
        .unwrap();
    assert!(!robots.is_allowed("/x", "AnyBot").unwrap());
}

#[test]
fn test_shared_across_threads() {
    let robots = std::sync::Arc::new(site());

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let robots = std::sync::Arc::clone(&robots);
            std::thread::spawn(move || {
                robots
                    .is_allowed(&format!("/search/{}", i), "GenericBot")
                    .unwrap()
            })
        })
        .collect();

    for handle in handles {
        assert!(!handle.join().unwrap());
    }
}
