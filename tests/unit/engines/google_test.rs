// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use dorkrs::{new_google, Engine, Google, QueryParameters};

#[test]
fn test_google_to_url() {
    let url = new_google().site("example.com").to_request_url();
    assert_eq!(url, "https://www.google.com/search?q=site%3Aexample.com");
}

#[test]
fn test_google_display() {
    let mut dork = new_google();
    dork.site("example.com");
    assert_eq!(format!("{}", dork), "site:example.com");
}

#[test]
fn test_google_single_operators() {
    let cases: Vec<(String, &str)> = vec![
        (new_google().site("example.com").to_string(), "site:example.com"),
        (new_google().in_text("text").to_string(), "intext:\"text\""),
        (new_google().in_url("index.php").to_string(), "inurl:\"index.php\""),
        (new_google().file_type("pdf").to_string(), "filetype:\"pdf\""),
        (new_google().cache("www.google.com").to_string(), "cache:\"www.google.com\""),
        (new_google().related("www.google.com").to_string(), "related:\"www.google.com\""),
        (
            new_google().ext("(doc | pdf | xls | txt | xml)").to_string(),
            "ext:(doc | pdf | xls | txt | xml)",
        ),
        (new_google().in_title("jordan").to_string(), "intitle:\"jordan\""),
        (new_google().book("test").to_string(), "book:\"test\""),
        (new_google().ip("8.8.8.8").to_string(), "ip:8.8.8.8"),
        (new_google().maps("france").to_string(), "maps:france"),
        (new_google().all_in_text("test").to_string(), "allintext:\"test\""),
        (
            new_google().info("https://google.com/").to_string(),
            "info:\"https://google.com/\"",
        ),
        (new_google().in_anchor("test").to_string(), "inanchor:\"test\""),
    ];

    for (actual, expected) in cases {
        assert_eq!(actual, expected);
    }
}

#[test]
fn test_google_exclude() {
    let result = new_google()
        .exclude(new_google().plain("html"))
        .exclude(new_google().plain("htm"))
        .exclude(new_google().plain("php"))
        .exclude(new_google().plain("md5sums"))
        .to_string();

    assert_eq!(result, "-html -htm -php -md5sums");
}

#[test]
fn test_google_or() {
    let result = new_google()
        .site("facebook.com")
        .or()
        .site("twitter.com")
        .to_string();

    assert_eq!(result, "site:facebook.com | site:twitter.com");
}

#[test]
fn test_google_and() {
    let result = new_google()
        .in_title("facebook")
        .and()
        .in_title("twitter")
        .to_string();

    assert_eq!(result, "intitle:\"facebook\" + intitle:\"twitter\"");
}

#[test]
fn test_google_group() {
    let result = new_google()
        .site("linkedin.com")
        .group(new_google().in_text("1").or().in_text("2"))
        .to_string();

    assert_eq!(result, "site:linkedin.com (intext:\"1\" | intext:\"2\")");

    let result = new_google()
        .site("linkedin.com")
        .group(new_google().in_text("1").or().in_text("2"))
        .in_title("jordan")
        .to_string();

    assert_eq!(
        result,
        "site:linkedin.com (intext:\"1\" | intext:\"2\") intitle:\"jordan\""
    );
}

#[test]
fn test_google_query_parameters() {
    let params = new_google()
        .site("linkedin.com")
        .group(new_google().in_text("1").or().in_text("2"))
        .in_title("jordan")
        .query_parameters();

    assert_eq!(
        params,
        QueryParameters::new("site:linkedin.com (intext:\"1\" | intext:\"2\") intitle:\"jordan\"")
    );
}

#[test]
fn test_google_empty_values() {
    let result = new_google().in_text("").site("").to_string();
    assert_eq!(result, "intext:\"\" site:");
}

#[test]
fn test_google_named_lookup_matches_methods() {
    let mut named = new_google();
    named
        .apply_named("site", "example.com")
        .unwrap()
        .apply_named("filetype", "pdf")
        .unwrap();

    let mut typed = new_google();
    typed.site("example.com").file_type("pdf");

    assert_eq!(named, typed);
    assert!(Google::operator("region").is_none());
}
