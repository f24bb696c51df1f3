use wiki_discography::{scrape, scrape_with_options, Album, Options};

use crate::fixture;

fn album(slug: &str, title: &str) -> Album {
    Album {
        url: Some(format!("https://en.wikipedia.org//wiki/{slug}")),
        id: Some(title.to_string()),
        ..Album::default()
    }
}

#[test]
fn test_legacy_heading_markup() {
    let html = fixture("legacy_headings.html");
    let result = scrape(&html).expect("scrape succeeds");

    assert_eq!(result.tables, 1);
    assert!(result.warnings.is_empty(), "{:?}", result.warnings);

    let expected = vec![
        Album {
            released: Some("14 April 1980".to_string()),
            recorded: Some("January 1980 at Kingsway Studios".to_string()),
            label: Some("EMI".to_string()),
            ..album("Iron_Maiden_(album)", "Iron Maiden (album)")
        },
        Album {
            released: Some("2 February 1981".to_string()),
            label: Some("EMI, Harvest".to_string()),
            ..album("Killers_(Iron_Maiden_album)", "Killers (Iron Maiden album)")
        },
        Album {
            released: Some("22 March 1982".to_string()),
            recorded: Some("January – February 1982 at Battery Studios".to_string()),
            label: Some("EMI".to_string()),
            ..album("The_Number_of_the_Beast_(album)", "The Number of the Beast (album)")
        },
    ];
    assert_eq!(result.albums, expected);
}

#[test]
fn test_legacy_markup_other_subsection() {
    let html = fixture("legacy_headings.html");
    let options = Options {
        section_id: "Live_albums".to_string(),
        ..Options::default()
    };
    let result = scrape_with_options(&html, &options).expect("scrape succeeds");

    assert_eq!(result.albums.len(), 1);
    assert_eq!(result.albums[0].id.as_deref(), Some("Live After Death"));
    assert_eq!(result.albums[0].released.as_deref(), Some("14 October 1985"));
}

#[test]
fn test_wrapped_heading_markup() {
    let html = fixture("wrapped_headings.html");
    let result = scrape(&html).expect("scrape succeeds");

    assert_eq!(result.tables, 1);
    assert!(result.warnings.is_empty(), "{:?}", result.warnings);

    let expected = vec![
        Album {
            released: Some("3 May 2001".to_string()),
            label: Some("Self-released".to_string()),
            ..album(
                "First_Light_(Example_Band_album)",
                "First Light (Example Band album)",
            )
        },
        Album {
            released: Some("9 September 2004".to_string()),
            recorded: Some("2003".to_string()),
            label: Some("Sub Pop".to_string()),
            ..album("Second_Wind_(album)", "Second Wind (album)")
        },
    ];
    assert_eq!(result.albums, expected);
}

#[test]
fn test_wrapped_markup_last_subsection() {
    let html = fixture("wrapped_headings.html");
    let options = Options {
        section_id: "Compilation_albums".to_string(),
        page_url: Some("https://en.wikipedia.org/wiki/Example_Band_discography".to_string()),
        ..Options::default()
    };
    let result = scrape_with_options(&html, &options).expect("scrape succeeds");

    assert_eq!(result.albums.len(), 1);
    assert_eq!(result.albums[0].id.as_deref(), Some("Best Of"));
    assert_eq!(result.source_url, options.page_url);
}

#[test]
fn test_json_output_shape() {
    let html = fixture("wrapped_headings.html");
    let result = scrape(&html).expect("scrape succeeds");

    let json = wiki_discography::sink::albums_to_json(&result.albums, false).expect("serializes");
    assert!(json.starts_with(r#"[{"url":"https://en.wikipedia.org//wiki/First_Light_(Example_Band_album)","id":"First Light (Example Band album)","released":"3 May 2001","label":"Self-released"}"#));
    assert!(!json.contains("null"));
}
