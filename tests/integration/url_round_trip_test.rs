// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use dorkrs::{new_google, Dork, Engine, Google, QueryParameters};
use url::Url;

fn decoded_q<E: Engine>(dork: &Dork<E>) -> String {
    let url = Url::parse(&dork.to_request_url()).unwrap();
    url.query_pairs()
        .find(|(key, _)| key == "q")
        .map(|(_, value)| value.into_owned())
        .unwrap()
}

#[test]
fn test_url_round_trip_reproduces_query_string() {
    let mut dork = new_google();
    dork.site("example.com")
        .group(new_google().in_text("a & b").or().in_title("100% \"real\""))
        .exclude_term("é?#")
        .ext("(doc | pdf)");

    assert_eq!(decoded_q(&dork), dork.to_string());
    assert_eq!(
        QueryParameters::from_query(Url::parse(&dork.to_request_url()).unwrap().query().unwrap())
            .unwrap(),
        dork.query_parameters()
    );
}

#[test]
fn test_url_escapes_reserved_characters() {
    let mut dork = Dork::<Google>::new();
    dork.in_text("a b").plain("c:d");

    let url = dork.to_request_url();
    assert_eq!(url, "https://www.google.com/search?q=intext%3A%22a+b%22+c%3Ad");
    assert!(url.starts_with(Google::SEARCH_URL));
}
