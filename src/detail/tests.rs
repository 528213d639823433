// Detail module tests.

use chrono::NaiveDate;

use super::*;
use crate::config::HostCapabilities;
use crate::error_handling::FieldParseError;

const BASE: &str = "https://www.vixen.com";
const URL: &str = "https://www.vixen.com/videos/acme-show-12";

const FULL_PAGE: &str = r#"
<html><body>
  <h1 data-test-component="VideoTitle">Acme Show 12</h1>
  <div data-test-component="VideoModels">
    <a href="/models/jane-doe">Jane Doe</a>,
    <a href="https://www.vixen.com/models/john-roe"> John  Roe </a>
  </div>
  <span data-test-component="ReleaseDateFormatted">January 05, 2024</span>
  <span data-test-component="DirectorText">Dee Rector</span>
  <div class="PlaybackContent__StyledDescription-sc-56y4pr-15">
    <p>A long day ends well.</p>
    <p>Second paragraph.</p>
  </div>
  <span data-test-component="RunLengthFormatted">32:45</span>
  <span data-test-component="RatingNumber">8.4</span>
  <img class="ProgressiveImage__StyledImg-ptxr6s-2"
       src="https://cdn.example.com/poster-small.jpg"
       srcset="https://cdn.example.com/poster-640.jpg 640w, https://cdn.example.com/poster-1920.jpg 1920w">
</body></html>
"#;

fn record_for(html: &str) -> MetadataRecord {
    let config = ProviderConfig::default();
    let page = parse_detail_page(html, BASE);
    let performers = page
        .performers
        .clone()
        .into_iter()
        .map(|link| performer(link, None, &config))
        .collect();
    assemble_record(page, performers, URL, Some("de"), &config)
}

#[test]
fn test_parse_detail_page_full() {
    let page = parse_detail_page(FULL_PAGE, BASE);
    assert_eq!(page.title.as_deref(), Some("Acme Show 12"));
    assert_eq!(
        page.performers,
        vec![
            PerformerLink {
                name: "Jane Doe".to_string(),
                profile_url: Some("https://www.vixen.com/models/jane-doe".to_string()),
            },
            PerformerLink {
                name: "John Roe".to_string(),
                profile_url: Some("https://www.vixen.com/models/john-roe".to_string()),
            },
        ]
    );
    assert_eq!(page.director.as_deref(), Some("Dee Rector"));
    assert_eq!(page.plot.as_deref(), Some("A long day ends well."));
    assert_eq!(page.release_date.as_deref(), Some("January 05, 2024"));
    assert_eq!(page.runtime.as_deref(), Some("32:45"));
    assert_eq!(page.rating.as_deref(), Some("8.4"));
    assert_eq!(
        page.artwork_url.as_deref(),
        Some("https://cdn.example.com/poster-1920.jpg")
    );
}

#[test]
fn test_assemble_record_full() {
    let record = record_for(FULL_PAGE);
    assert_eq!(record.title, "Acme Show 12");
    assert_eq!(record.original_title, "Acme Show 12");
    assert_eq!(record.collection_name.as_deref(), Some("Acme Show"));
    assert_eq!(record.external_id, "acme-show-12");
    assert_eq!(
        record.release_date,
        Some(NaiveDate::from_ymd_opt(2024, 1, 5).unwrap())
    );
    assert_eq!(record.year, Some(2024));
    assert_eq!(record.plot.as_deref(), Some("A long day ends well."));
    assert_eq!(record.runtime_minutes, 33);
    assert_eq!(record.rating, RatingValue::new(8.4, 1));
    assert_eq!(record.rating.max_value, 10);
    assert_eq!(record.genre, "Erotic");
    assert_eq!(record.language, "en");
    assert_eq!(record.certification, "US_NC17");

    assert_eq!(record.artwork.len(), 1);
    assert_eq!(record.artwork[0].kind, ArtworkKind::Poster);
    assert_eq!(record.artwork[0].language.as_deref(), Some("de"));

    let roles: Vec<_> = record.cast.iter().map(|c| (c.name.as_str(), c.role)).collect();
    assert_eq!(
        roles,
        vec![
            ("Jane Doe", CastRole::Performer),
            ("John Roe", CastRole::Performer),
            ("Dee Rector", CastRole::Director),
        ]
    );
    assert_eq!(record.director.as_ref().map(|d| d.name.as_str()), Some("Dee Rector"));
}

#[test]
fn test_assemble_record_empty_page_uses_defaults() {
    let record = record_for("<html><body><p>Nothing here</p></body></html>");
    assert_eq!(record.title, "");
    assert_eq!(record.collection_name, None);
    assert!(record.cast.is_empty());
    assert!(record.director.is_none());
    assert!(record.release_date.is_none());
    assert!(record.year.is_none());
    assert!(record.plot.is_none());
    assert_eq!(record.runtime_minutes, 35);
    assert_eq!(record.rating, RatingValue::new(7.5, 1));
    assert!(record.artwork.is_empty());
}

#[test]
fn test_assemble_record_malformed_fields_use_defaults() {
    let html = r#"
        <h1 data-test-component="VideoTitle">Sunset Drive</h1>
        <span data-test-component="ReleaseDateFormatted">sometime soon</span>
        <span data-test-component="RunLengthFormatted">about half an hour</span>
        <span data-test-component="RatingNumber">n/a</span>
    "#;
    let record = record_for(html);
    assert_eq!(record.collection_name, None);
    assert!(record.release_date.is_none());
    assert!(record.year.is_none());
    assert_eq!(record.runtime_minutes, 35);
    assert_eq!(record.rating, RatingValue::new(7.5, 1));
}

#[test]
fn test_assemble_record_oversized_runtime_uses_default() {
    let html = r#"
        <h1 data-test-component="VideoTitle">Sunset Drive</h1>
        <span data-test-component="RunLengthFormatted">4294967295:59</span>
    "#;
    let record = record_for(html);
    assert_eq!(record.runtime_minutes, 35);
}

#[test]
fn test_artwork_falls_back_to_src() {
    let html = r#"<img class="ProgressiveImage__StyledImg-ptxr6s-2" src="https://cdn.example.com/p.jpg">"#;
    let page = parse_detail_page(html, BASE);
    assert_eq!(page.artwork_url.as_deref(), Some("https://cdn.example.com/p.jpg"));
}

#[test]
fn test_artwork_absent_without_urls() {
    let html = r#"<img class="ProgressiveImage__StyledImg-ptxr6s-2">"#;
    assert_eq!(parse_detail_page(html, BASE).artwork_url, None);
}

#[test]
fn test_performer_photo_and_capabilities() {
    let config = ProviderConfig {
        capabilities: HostCapabilities {
            actor_photo_auto_update: true,
            ..Default::default()
        },
        ..Default::default()
    };
    let link = PerformerLink {
        name: "Jane Doe".to_string(),
        profile_url: Some("https://www.vixen.com/models/jane-doe".to_string()),
    };
    let member = performer(link.clone(), Some("https://cdn/x.jpg".to_string()), &config);
    assert_eq!(member.photo_url.as_deref(), Some("https://cdn/x.jpg"));
    assert!(member.auto_update_photo);

    let member = performer(link, Some(String::new()), &ProviderConfig::default());
    assert_eq!(member.photo_url, None);
    assert!(!member.auto_update_photo);
}

#[test]
fn test_performer_links_without_name_or_target() {
    let html = r#"
        <div data-test-component="VideoModels">
          <a href="/models/x"><img src="x.jpg"></a>
          <a>No Link</a>
        </div>
    "#;
    let page = parse_detail_page(html, BASE);
    assert_eq!(
        page.performers,
        vec![PerformerLink {
            name: "No Link".to_string(),
            profile_url: None,
        }]
    );
}

#[test]
fn test_split_collection_name() {
    assert_eq!(split_collection_name("Acme Show 12").as_deref(), Some("Acme Show"));
    assert_eq!(split_collection_name("Acme Show12").as_deref(), Some("Acme Show"));
    assert_eq!(split_collection_name("Acme Show"), None);
    assert_eq!(split_collection_name("2024"), None);
    assert_eq!(split_collection_name(""), None);
}

#[test]
fn test_parse_release_date() {
    assert_eq!(
        parse_release_date("January 05, 2024"),
        Ok(NaiveDate::from_ymd_opt(2024, 1, 5).unwrap())
    );
    assert_eq!(
        parse_release_date(" December 31, 2023 "),
        Ok(NaiveDate::from_ymd_opt(2023, 12, 31).unwrap())
    );
    assert_eq!(
        parse_release_date("2024-01-05"),
        Err(FieldParseError::ReleaseDate("2024-01-05".to_string()))
    );
}

#[test]
fn test_parse_runtime() {
    assert_eq!(parse_runtime("32:45"), Ok(33));
    assert_eq!(parse_runtime("32:10"), Ok(32));
    assert_eq!(parse_runtime("32:30"), Ok(33));
    assert_eq!(parse_runtime("32:29"), Ok(32));
    assert_eq!(parse_runtime(" 7:05 "), Ok(7));
}

#[test]
fn test_parse_runtime_malformed() {
    assert!(parse_runtime("32").is_err());
    assert!(parse_runtime("").is_err());
    assert!(parse_runtime("aa:10").is_err());
    assert!(parse_runtime("32:xx").is_err());
    // Rounding up would overflow the minute count
    assert!(parse_runtime("4294967295:45").is_err());
    assert_eq!(parse_runtime("4294967295:10"), Ok(u32::MAX));
}

#[test]
fn test_parse_rating() {
    assert_eq!(parse_rating("8.4"), Ok(8.4));
    assert_eq!(parse_rating(" 9 "), Ok(9.0));
    assert!(parse_rating("n/a").is_err());
    assert!(parse_rating("NaN").is_err());
    assert!(parse_rating("").is_err());
}
