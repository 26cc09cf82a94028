use mangafox_source::{dom, Error, Mangafox, Options, Page};

const READER_HTML: &str = r#"
<html>
<head><title>Onepunch-Man 1 - Read Onepunch-Man Chapter 1 Online - Page 1</title></head>
<body>
  <div id="top_center_bar">
    <form id="top_bar">
      <div class="l">
        <select onchange="change_page(this)" class="m">
          <option value="1" selected="selected">1</option>
          <option value="2">2</option>
          <option value="3">3</option>
          <option value="0">Comments</option>
        </select> of 3
      </div>
    </form>
  </div>
  <div class="read_img">
    <a href="2.html"><img src="http://h.mfcdn.net/store/manga/11362/01-001.0/compressed/k001.jpg" width="728" id="image" alt="Onepunch-Man 1 Page 1"></a>
  </div>
  <div id="bottom_bar">
    <select onchange="change_page(this)" class="m">
      <option value="1" selected="selected">1</option>
      <option value="2">2</option>
      <option value="3">3</option>
      <option value="0">Comments</option>
    </select>
  </div>
</body>
</html>
"#;

const LOCATION: &str = "http://mangafox.me/manga/onepunch_man/v01/c001/1.html";

#[test]
fn page_list_excludes_comments_option() {
    let source = Mangafox::new();
    let pages = match source.resolve_pages(&dom::parse(READER_HTML), LOCATION) {
        Ok(pages) => pages,
        Err(err) => panic!("expected Ok(_), got Err({err:?})"),
    };

    assert_eq!(
        pages,
        vec![
            Page { index: 0, url: "http://mangafox.me/manga/onepunch_man/v01/c001/1.html".to_string() },
            Page { index: 1, url: "http://mangafox.me/manga/onepunch_man/v01/c001/2.html".to_string() },
            Page { index: 2, url: "http://mangafox.me/manga/onepunch_man/v01/c001/3.html".to_string() },
        ]
    );
}

#[test]
fn page_list_follows_document_location() {
    let source = Mangafox::new();
    let location = "http://mangafox.me/manga/onepunch_man/v01/c001/3.html";
    let urls: Vec<String> = match source.resolve_pages(&dom::parse(READER_HTML), location) {
        Ok(pages) => pages.into_iter().map(|p| p.url).collect(),
        Err(err) => panic!("expected Ok(_), got Err({err:?})"),
    };

    assert!(urls.iter().all(|u| u.starts_with("http://mangafox.me/manga/onepunch_man/v01/c001/")));
}

#[test]
fn page_list_requires_selector() {
    let source = Mangafox::new();
    let result = source.resolve_pages(&dom::parse("<html><body></body></html>"), LOCATION);
    assert!(matches!(result, Err(Error::MissingElement { selector: "select.m" })));
}

#[test]
fn image_url_is_returned() {
    let source = Mangafox::new();
    let image = source.resolve_image(&dom::parse(READER_HTML));
    assert_eq!(
        image.ok().as_deref(),
        Some("http://h.mfcdn.net/store/manga/11362/01-001.0/compressed/k001.jpg")
    );
}

#[test]
fn gated_image_becomes_placeholder() {
    let html = r#"<img id="image" src="http://mangafox.me/media/compressed?token=8f3e&ttl=1500000000">"#;
    let source = Mangafox::new();

    assert_eq!(
        source.resolve_image(&dom::parse(html)).ok().as_deref(),
        Some("http://mangafox.me/media/logo.png")
    );
}

#[test]
fn placeholder_is_configurable() {
    let options = Options {
        image_placeholder_url: "https://example.com/blank.png".to_string(),
        ..Options::default()
    };
    let source = match Mangafox::with_options(options) {
        Ok(source) => source,
        Err(err) => panic!("expected Ok(_), got Err({err:?})"),
    };

    let html = r#"<img id="image" src="http://x/compressed?token=1">"#;
    assert_eq!(
        source.resolve_image(&dom::parse(html)).ok().as_deref(),
        Some("https://example.com/blank.png")
    );
}
