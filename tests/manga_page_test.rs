use chrono::{FixedOffset, TimeZone};

use mangafox_source::{dom, Error, Mangafox, MangaStatus};

const MANGA_HTML: &str = r#"
<html>
<head><title>Onepunch-Man Manga - Read Onepunch-Man Manga Online for Free</title></head>
<body>
  <div id="title">
    <h1>ONEPUNCH-MAN</h1>
    <table>
      <tbody>
        <tr><th>Released:</th><th>Author(s):</th><th>Artist(s):</th><th>Genre(s):</th></tr>
        <tr>
          <td valign="top"><a href="/directory/2009/">2009</a></td>
          <td valign="top"><a href="/search/author/ONE/">ONE</a></td>
          <td valign="top"><a href="/search/artist/Murata+Yuusuke/">MURATA Yuusuke</a></td>
          <td valign="top">
            <a href="/directory/action/">Action</a>,
            <a href="/directory/comedy/">Comedy</a>,
            <a href="/directory/seinen/">Seinen</a>
          </td>
        </tr>
      </tbody>
    </table>
    <p class="summary">Every time a promising villain appears, Saitama beats
      the snot out of 'em with one punch!</p>
  </div>
  <div id="series_info">
    <div class="cover"><img width="200" src="http://l.mfcdn.net/store/manga/11362/cover.jpg?v=1" onerror="this.src='x'" /></div>
    <div class="data">
      <h5>Status:</h5>
      <span>
        Ongoing, Onepunch-Man 130 is coming next...
      </span>
    </div>
  </div>
  <div id="chapters">
    <h3 class="volume">Volume 01</h3>
    <ul class="chlist">
      <li>
        <div>
          <h3>
            <a href="http://mangafox.me/manga/onepunch_man/vTBD/c131/1.html" title="Onepunch-Man 131" class="tips">Onepunch-Man 131</a>
            <span class="title nowrap">Kaijin Association</span>
          </h3>
          <span class="date">5 hours ago</span>
        </div>
      </li>
      <li>
        <div>
          <h3><a href="http://mangafox.me/manga/onepunch_man/vTBD/c130/1.html" class="tips">Onepunch-Man 130</a></h3>
          <span class="date">Yesterday</span>
        </div>
      </li>
      <li>
        <div>
          <h3><a href="http://mangafox.me/manga/onepunch_man/v01/c001/1.html" class="tips">Onepunch-Man 1</a></h3>
          <span class="date">Jun 14, 2012</span>
        </div>
      </li>
    </ul>
  </div>
</body>
</html>
"#;

fn tokyo() -> FixedOffset {
    match FixedOffset::east_opt(9 * 3600) {
        Some(offset) => offset,
        None => panic!("valid offset"),
    }
}

fn midnight_millis(y: i32, m: u32, d: u32) -> i64 {
    match tokyo().with_ymd_and_hms(y, m, d, 0, 0, 0).single() {
        Some(dt) => dt.timestamp_millis(),
        None => panic!("valid date"),
    }
}

#[test]
fn details_from_full_page() {
    let source = Mangafox::new();
    let details = match source.extract_details(&dom::parse(MANGA_HTML)) {
        Ok(details) => details,
        Err(err) => panic!("expected Ok(_), got Err({err:?})"),
    };

    assert_eq!(details.author.as_deref(), Some("ONE"));
    assert_eq!(details.artist.as_deref(), Some("MURATA Yuusuke"));
    assert_eq!(details.genres.as_deref(), Some("Action, Comedy, Seinen"));
    assert_eq!(
        details.description.as_deref(),
        Some("Every time a promising villain appears, Saitama beats the snot out of 'em with one punch!")
    );
    assert_eq!(details.status, MangaStatus::Ongoing);
    assert_eq!(
        details.thumbnail_url.as_deref(),
        Some("http://l.mfcdn.net/store/manga/11362/cover.jpg?v=1")
    );
}

#[test]
fn details_require_the_info_block() {
    let source = Mangafox::new();
    let result = source.extract_details(&dom::parse("<html><body><p>Not found</p></body></html>"));
    assert!(matches!(result, Err(Error::MissingElement { .. })));
}

#[test]
fn chapters_from_full_page() {
    let source = Mangafox::new();
    let now = match tokyo().with_ymd_and_hms(2017, 10, 20, 23, 30, 0).single() {
        Some(now) => now,
        None => panic!("valid timestamp"),
    };

    let chapters = source.extract_chapters_at(&dom::parse(MANGA_HTML), &now);
    assert_eq!(chapters.len(), 3);

    assert_eq!(chapters[0].url, "/manga/onepunch_man/vTBD/c131/1.html");
    assert_eq!(chapters[0].name, "Onepunch-Man 131");
    assert_eq!(chapters[0].date_upload, midnight_millis(2017, 10, 20));

    assert_eq!(chapters[1].date_upload, midnight_millis(2017, 10, 19));

    assert_eq!(chapters[2].url, "/manga/onepunch_man/v01/c001/1.html");
    assert_eq!(chapters[2].date_upload, midnight_millis(2012, 6, 14));
}

#[test]
fn chapter_links_build_page_list_requests() {
    let source = Mangafox::new();
    let chapters = source.extract_chapters(&dom::parse(MANGA_HTML));

    let request = source.build_page_list_request(&chapters[2].url);
    match request {
        Ok(request) => assert_eq!(
            request.url.as_str(),
            "http://mangafox.me/manga/onepunch_man/v01/c001/1.html"
        ),
        Err(err) => panic!("expected Ok(_), got Err({err:?})"),
    }
}
