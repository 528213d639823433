// Utils module tests.

use scraper::Html;

use crate::utils::srcset::{decode_ampersands, density_2x_url, last_candidate_url};
use crate::utils::{absolute_url, collapse_whitespace, element_text, last_path_segment};
use crate::utils::{parse_selector_unsafe, parse_selector_with_fallback};

#[test]
fn test_collapse_whitespace() {
    assert_eq!(collapse_whitespace("  Acme \n\t Show  12 "), "Acme Show 12");
    assert_eq!(collapse_whitespace(""), "");
}

#[test]
fn test_element_text_nested() {
    let html = Html::parse_fragment("<h1>Acme <span>Show</span>\n 12</h1>");
    let selector = parse_selector_unsafe("h1", "test");
    let element = html.select(&selector).next().unwrap();
    assert_eq!(element_text(&element), "Acme Show 12");
}

#[test]
fn test_parse_selector_with_fallback_invalid() {
    let selector = parse_selector_with_fallback("img[alt*=", "test");
    let html = Html::parse_fragment("<img alt='x'>");
    assert_eq!(html.select(&selector).count(), 0);
}

#[test]
fn test_absolute_url_relative() {
    assert_eq!(
        absolute_url("https://www.vixen.com", "/videos/some-scene"),
        "https://www.vixen.com/videos/some-scene"
    );
}

#[test]
fn test_absolute_url_already_absolute() {
    assert_eq!(
        absolute_url("https://www.vixen.com", "https://cdn.example.com/a.jpg"),
        "https://cdn.example.com/a.jpg"
    );
}

#[test]
fn test_absolute_url_base_with_port() {
    assert_eq!(
        absolute_url("http://127.0.0.1:8080", "/models/jane-doe"),
        "http://127.0.0.1:8080/models/jane-doe"
    );
}

#[test]
fn test_last_path_segment() {
    assert_eq!(
        last_path_segment("https://www.vixen.com/videos/some-scene"),
        "some-scene"
    );
    assert_eq!(
        last_path_segment("https://www.vixen.com/videos/some-scene/?t=1"),
        "some-scene"
    );
    assert_eq!(last_path_segment("/models/jane-doe"), "jane-doe");
    assert_eq!(last_path_segment("https://www.vixen.com/"), "");
}

#[test]
fn test_last_candidate_url() {
    assert_eq!(
        last_candidate_url("a.jpg 1x, b.jpg 2x").as_deref(),
        Some("b.jpg")
    );
    assert_eq!(
        last_candidate_url("small.jpg 320w, large.jpg 1280w").as_deref(),
        Some("large.jpg")
    );
    assert_eq!(last_candidate_url("only.jpg").as_deref(), Some("only.jpg"));
    assert_eq!(last_candidate_url("   "), None);
}

#[test]
fn test_density_2x_url_multiple_candidates() {
    assert_eq!(
        density_2x_url("https://x/a.jpg?w=1 1x, https://x/b.jpg?w=2 2x").as_deref(),
        Some("https://x/b.jpg?w=2")
    );
}

#[test]
fn test_density_2x_url_not_last() {
    assert_eq!(
        density_2x_url("a.jpg 1x, b.jpg 2x, c.jpg 3x").as_deref(),
        Some("b.jpg")
    );
}

#[test]
fn test_density_2x_url_single_candidate() {
    assert_eq!(density_2x_url("b.jpg 2x").as_deref(), Some("b.jpg"));
}

#[test]
fn test_density_2x_url_absent() {
    assert_eq!(density_2x_url("a.jpg 320w, b.jpg 640w"), None);
    assert_eq!(density_2x_url(""), None);
}

#[test]
fn test_decode_ampersands() {
    assert_eq!(
        decode_ampersands("https://x/a.jpg?w=1&amp;h=2"),
        "https://x/a.jpg?w=1&h=2"
    );
}
