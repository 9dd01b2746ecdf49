//! English ordinal words ("First", "Twenty-third") used to name Sundays.

const UNITS: [&str; 20] = [
  "", "First", "Second", "Third", "Fourth", "Fifth", "Sixth", "Seventh",
  "Eighth", "Ninth", "Tenth", "Eleventh", "Twelfth", "Thirteenth",
  "Fourteenth", "Fifteenth", "Sixteenth", "Seventeenth", "Eighteenth",
  "Nineteenth",
];

const TENS: [(&str, &str); 8] = [
  ("Twenty", "Twentieth"),
  ("Thirty", "Thirtieth"),
  ("Forty", "Fortieth"),
  ("Fifty", "Fiftieth"),
  ("Sixty", "Sixtieth"),
  ("Seventy", "Seventieth"),
  ("Eighty", "Eightieth"),
  ("Ninety", "Ninetieth"),
];

/// The capitalised ordinal word for `n`. Numbers outside `1..=99` fall back
/// to digits.
pub fn ordinal(n: u32) -> String {
  match n {
    1..=19 => UNITS[n as usize].to_owned(),
    20..=99 => {
      let (cardinal, ordinal) = TENS[(n / 10 - 2) as usize];
      match n % 10 {
        0 => ordinal.to_owned(),
        unit => format!("{cardinal}-{}", UNITS[unit as usize].to_lowercase()),
      }
    }
    _ => format!("{n}th"),
  }
}

/// Whether `word` is an ordinal word as produced by [`ordinal`].
pub fn is_ordinal_word(word: &str) -> bool {
  (1..=99).any(|n| ordinal(n) == word)
}
