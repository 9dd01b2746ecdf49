//! Display text for feast and season links.

use tridentine_core::Link;
use url::Url;

/// The text shown for `link`: its own description, or one derived from the
/// URL, or `fallback`, followed by the site name in parentheses when the host
/// is a known reference site.
///
/// `https://en.wikipedia.org/wiki/Saturnin` becomes "Saturnin (Wikipedia)".
pub fn link_text(link: &Link, fallback: &str) -> String {
  let url = Url::parse(&link.url).ok();
  let site = url.as_ref().and_then(site_name);
  let text = match (&link.description, site) {
    (Some(description), _) => description.clone(),
    (None, Some(WIKIPEDIA)) => url
      .as_ref()
      .and_then(wikipedia_title)
      .unwrap_or_else(|| fallback.to_owned()),
    (None, _) => fallback.to_owned(),
  };
  match site {
    Some(site) => format!("{text} ({site})"),
    None => text,
  }
}

/// `link` as an HTML anchor, `<a href=URL>TEXT</a>`.
pub fn href(link: &Link, fallback: &str) -> String {
  format!("<a href={}>{}</a>", link.url, link_text(link, fallback))
}

const WIKIPEDIA: &str = "Wikipedia";

/// `host_str` is already lowercased for http(s) URLs.
fn site_name(url: &Url) -> Option<&'static str> {
  match url.host_str()? {
    "en.wikipedia.org" => Some(WIKIPEDIA),
    "www.newadvent.org" => Some("New Advent"),
    "fisheaters.com" | "www.fisheaters.com" => Some("Fish Eaters"),
    _ => None,
  }
}

/// The last path segment with underscores as spaces, percent-decoded.
fn wikipedia_title(url: &Url) -> Option<String> {
  let segment = url.path_segments()?.next_back().filter(|s| !s.is_empty())?;
  let title = match urlencoding::decode(segment) {
    Ok(decoded) => decoded.into_owned(),
    Err(_) => segment.to_owned(),
  };
  Some(title.replace('_', " "))
}
