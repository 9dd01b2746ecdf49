//! A small but complete metadata source for unit tests.

use crate::{
  feast::MOVABLE_FEASTS,
  season::Season,
  source::{Color, FeastRecord, MemorySource, Rank, SeasonRecord},
};

/// Every movable feast and season, with no fixed-date records.
pub(crate) fn sample_source() -> MemorySource {
  let mut source = MemorySource::new();

  for spec in &MOVABLE_FEASTS {
    let record = match spec.name {
      "Plough Monday" | "Fat Thursday" | "Shrove Monday" | "Mardi Gras"
      | "Peter's Pence" => FeastRecord::informational(spec.name),
      "Gaudete Sunday" | "Laetare Sunday" => FeastRecord {
        color: Some(Color::Rose),
        ..FeastRecord::new(spec.name, Rank::I)
      },
      "Major Rogation" | "Minor Rogation" => FeastRecord {
        addition: true,
        feast: false,
        color: Some(Color::Violet),
        ..FeastRecord::new(spec.name, Rank::II)
      },
      "Septuagesima" | "Sexagesima" | "Quinquagesima" | "The Holy Family"
      | "The Holy Name" | "Jubilate Sunday" | "Misericordia Sunday"
      | "Cantate Sunday" => FeastRecord::new(spec.name, Rank::II),
      "The Seven Sorrows" => FeastRecord::new(spec.name, Rank::IV),
      "St. Gabriel of Our Lady of Sorrows" => FeastRecord::new(spec.name, Rank::III),
      _ => FeastRecord::new(spec.name, Rank::I),
    };
    source.insert_movable(spec.name, record);
  }

  for season in Season::ALL {
    let record = match season {
      Season::Advent
      | Season::Septuagesima
      | Season::Lent => SeasonRecord { color: Some(Color::Violet), ..Default::default() },
      Season::Christmastide | Season::Eastertide => {
        SeasonRecord { color: Some(Color::White), ..Default::default() }
      }
      Season::TimeAfterEpiphany | Season::TimeAfterPentecost => {
        SeasonRecord { color: Some(Color::Green), ..Default::default() }
      }
      Season::Shrovetide => parent(Season::Septuagesima),
      Season::Passiontide => parent(Season::Lent),
      Season::HolyWeek => parent(Season::Passiontide),
      Season::PaschalTriduum => parent(Season::HolyWeek),
      Season::Hallowtide => parent(Season::TimeAfterPentecost),
    };
    source.insert_season(season, record);
  }

  source
}

fn parent(season: Season) -> SeasonRecord {
  SeasonRecord { parent: Some(season), ..Default::default() }
}
