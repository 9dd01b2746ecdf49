//! Human-readable SUMMARY and DESCRIPTION text for assembled events.
//!
//! Every sentence is derived from core fields (name, rank, color, season and
//! position in the day's precedence order); the core never pre-renders text.

use tridentine_core::{
  Event, FeastDates, Link, Rank, Season, SeasonTable, season::feria_name,
};

use crate::links::{href, link_text};

/// Prefix for a liturgical event outranked on its day.
pub const OUTRANKED_PREFIX: &str = "› ";
/// Prefix for an event with no liturgy of its own.
pub const INFORMATIONAL_PREFIX: &str = "» ";

/// Renders descriptions against one calendar's feast dates and seasons.
#[derive(Clone, Copy)]
pub struct Describer<'a> {
  dates:   &'a FeastDates,
  seasons: &'a SeasonTable,
  html:    bool,
}

impl<'a> Describer<'a> {
  /// `html` selects `<a href>` anchors over bare URLs in link lists.
  pub fn new(dates: &'a FeastDates, seasons: &'a SeasonTable, html: bool) -> Self {
    Self { dates, seasons, html }
  }

  /// SUMMARY and DESCRIPTION for `events[i]`, where `events` is one day in
  /// precedence order.
  pub fn entry(&self, events: &[Event], i: usize) -> (String, String) {
    let event = &events[i];
    let mut summary = String::new();
    let mut description = String::new();

    if i > 0 && event.liturgical && !event.addition {
      let ranking = &events[0];
      summary.push_str(OUTRANKED_PREFIX);
      if ranking.is_fixed() && event.is_fixed() {
        description.push_str(&format!(
          "{} is outranked by {}.",
          event.full_name(true),
          ranking.full_name(false)
        ));
      } else {
        description.push_str(&format!(
          "This year {} is outranked by {}.",
          event.full_name(false),
          ranking.full_name(false)
        ));
      }
    }
    if !event.liturgical {
      summary.push_str(INFORMATIONAL_PREFIX);
    }
    summary.push_str(&event.name);

    let body = self.describe(event, i == 0);
    if body.starts_with("More information about") {
      description.push_str("\n\n");
    } else if description.ends_with('.') {
      description.push_str("  ");
    }
    description.push_str(&body);

    (summary, description.trim().to_owned())
  }

  /// The description of `event` alone. `ranking` marks the first event of
  /// its day, which also carries the color and Lent notices.
  pub fn describe(&self, event: &Event, ranking: bool) -> String {
    let mut sentences = Vec::new();

    if event.holy_day {
      sentences.push(format!("{} is a Holy Day of Obligation.", event.full_name(true)));
    }

    let kind = if event.feast { "feast" } else { "feria" };
    match (event.liturgical, event.rank) {
      (true, Some(rank)) if rank != Rank::IV => {
        let subject = if !ranking || event.holy_day {
          format!("This {kind}")
        } else {
          event.full_name(true)
        };
        sentences.push(format!("{subject} is a Class {} {kind}.", rank.roman()));
      }
      (true, Some(Rank::IV)) if ranking => {
        sentences.push("Today is a commemoration.".to_owned());
      }
      (false, _) => {
        sentences.push(format!("{} has no special liturgy.", event.full_name(true)));
      }
      _ => {}
    }

    if ranking
      && event.season.is_lenten()
      && event.liturgical
      && event.feast
      && matches!(event.rank, Some(Rank::II | Rank::III))
    {
      sentences.push(format!(
        "Since {} falls during Lent it will ordinarily be celebrated only as a \
         commemoration during the mass of {}.",
        event.full_name(false),
        feria_name(event.date, self.dates)
      ));
    }

    if ranking {
      sentences.push(format!(
        "The liturgical color is {}.",
        event.color.as_str().to_lowercase()
      ));
    }

    let mut out = sentences.join("  ");
    if !out.is_empty() {
      out.push_str("\n\n");
    }
    if !event.links.is_empty() {
      self.link_list(&mut out, &event.full_name(false), &event.links, &event.name);
      out.push('\n');
    }
    self.season_links(&mut out, event.season);

    out.trim_end().to_owned()
  }

  fn season_links(&self, out: &mut String, season: Season) {
    self.link_list(out, &season.full_name(false), self.seasons.links(season), season.name());
  }

  fn link_list(&self, out: &mut String, subject: &str, links: &[Link], fallback: &str) {
    out.push_str(&format!("More information about {subject}:\n"));
    for link in links {
      out.push_str("• ");
      if self.html {
        out.push_str(&href(link, fallback));
      } else {
        out.push_str(&link.url);
      }
      out.push('\n');
    }
  }
}
