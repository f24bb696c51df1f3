use wiki_discography::{dom, locate_studio_album_tables, scrape, scrape_with_options, Options, Warning};

use crate::fixture;

#[test]
fn test_toc_heading_is_not_a_boundary() {
    // The contents box nests its own h2; only direct children count
    let html = fixture("legacy_headings.html");
    let doc = dom::parse(&html);
    let container = dom::first_match(&doc, ".mw-parser-output").expect("container present");

    let nested_h2 = dom::first_descendant(&container, "h2").expect("toc heading present");
    assert_eq!(dom::id(&nested_h2).as_deref(), Some("mw-toc-heading"));
    assert!(!dom::real_children(&container)
        .iter()
        .any(|child| dom::id(child).as_deref() == Some("mw-toc-heading")));

    assert_eq!(locate_studio_album_tables(&doc, &Options::default()).len(), 1);
}

#[test]
fn test_drop_trailing_node_keeps_closed_sections() {
    let html = fixture("legacy_headings.html");
    let options = Options {
        drop_trailing_node: true,
        ..Options::default()
    };
    let result = scrape_with_options(&html, &options).expect("scrape succeeds");
    assert_eq!(result.albums.len(), 3);
}

#[test]
fn test_drop_trailing_node_on_last_section() {
    let html = fixture("wrapped_headings.html");
    let options = Options {
        section_id: "Compilation_albums".to_string(),
        drop_trailing_node: true,
        ..Options::default()
    };
    let result = scrape_with_options(&html, &options).expect("scrape succeeds");
    assert_eq!(result.tables, 0);
    assert!(result.albums.is_empty());
    assert!(result.warnings.is_empty());
}

#[test]
fn test_unknown_section_in_real_page() {
    let html = fixture("wrapped_headings.html");
    let options = Options {
        section_id: "Video_albums".to_string(),
        ..Options::default()
    };
    let result = scrape_with_options(&html, &options).expect("scrape succeeds");

    assert!(result.albums.is_empty());
    assert_eq!(
        result.warnings,
        vec![Warning::SectionNotFound {
            id: "Video_albums".to_string()
        }]
    );
}

#[test]
fn test_mixed_heading_markup() {
    // Legacy sub-heading closed by a wrapped one
    let html = r#"<div class="mw-parser-output">
<div class="mw-heading mw-heading2"><h2 id="Albums">Albums</h2></div>
<h3><span class="mw-headline" id="Studio_albums">Studio albums</span></h3>
<table><tr><th>Title</th><th>Details</th></tr>
<tr><th><a href="/wiki/A" title="A">A</a></th><td><ul><li>Released: 1</li></ul></td></tr></table>
<div class="mw-heading mw-heading3"><h3 id="Live_albums">Live albums</h3></div>
<table><tr><th>Title</th><th>Details</th></tr>
<tr><th><a href="/wiki/B" title="B">B</a></th><td><ul><li>Released: 2</li></ul></td></tr></table>
</div>"#;

    let result = scrape(html).expect("scrape succeeds");
    assert_eq!(result.albums.len(), 1);
    assert_eq!(result.albums[0].id.as_deref(), Some("A"));
}
