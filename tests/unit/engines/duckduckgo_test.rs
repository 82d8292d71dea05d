// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use dorkrs::{new_duckduckgo, DuckDuckGo, Engine};

#[test]
fn test_duckduckgo_to_url() {
    let url = new_duckduckgo().site("example.com").to_request_url();
    assert_eq!(url, "https://duckduckgo.com/?q=site%3Aexample.com");
}

#[test]
fn test_duckduckgo_operators() {
    assert_eq!(new_duckduckgo().site("example.com").to_string(), "site:example.com");
    assert_eq!(new_duckduckgo().in_text("text").to_string(), "intext:\"text\"");
    assert_eq!(new_duckduckgo().in_url("index.php").to_string(), "inurl:\"index.php\"");
    assert_eq!(new_duckduckgo().file_type("pdf").to_string(), "filetype:\"pdf\"");
    assert_eq!(new_duckduckgo().all_in_url("test").to_string(), "allinurl:\"test\"");
    assert_eq!(new_duckduckgo().region("fr").to_string(), "region:fr");
    assert_eq!(new_duckduckgo().feed("rss").to_string(), "feed:rss");
    assert_eq!(
        new_duckduckgo()
            .has_feed("https://sundaypapers.libsyn.com/rss")
            .to_string(),
        "hasfeed:\"https://sundaypapers.libsyn.com/rss\""
    );
    assert_eq!(new_duckduckgo().language("zh").to_string(), "language:zh");
    assert_eq!(new_duckduckgo().all_in_title("test").to_string(), "allintitle:\"test\"");
    assert_eq!(
        new_duckduckgo().ext("(doc | pdf | xls | txt | xml)").to_string(),
        "ext:(doc | pdf | xls | txt | xml)"
    );
}

#[test]
fn test_duckduckgo_boolean_and_grouping() {
    let result = new_duckduckgo()
        .site("facebook.com")
        .or()
        .site("twitter.com")
        .to_string();
    assert_eq!(result, "site:facebook.com | site:twitter.com");

    let result = new_duckduckgo()
        .in_title("facebook")
        .and()
        .in_title("twitter")
        .to_string();
    assert_eq!(result, "intitle:\"facebook\" + intitle:\"twitter\"");

    let result = new_duckduckgo()
        .site("linkedin.com")
        .group(new_duckduckgo().in_text("1").or().in_text("2"))
        .in_title("jordan")
        .to_string();
    assert_eq!(
        result,
        "site:linkedin.com (intext:\"1\" | intext:\"2\") intitle:\"jordan\""
    );
}

#[test]
fn test_duckduckgo_exclude() {
    let result = new_duckduckgo()
        .exclude(new_duckduckgo().plain("html"))
        .exclude_term("php")
        .to_string();
    assert_eq!(result, "-html -php");
}

#[test]
fn test_duckduckgo_vocabulary() {
    assert!(DuckDuckGo::operator("region").is_some());
    assert!(DuckDuckGo::operator("cache").is_none());
    assert_eq!(DuckDuckGo::and_literal(), Some("+"));
}
