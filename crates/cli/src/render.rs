//! Plain text views of the vocabulary.

use itertools::Itertools;
use vocab_core::{TagUsage, Vocabulary};

const HEADER: [&str; 4] = ["Word", "English", "Farsi", "Tags"];

fn width(text: &str) -> usize {
    text.chars().count()
}

fn pad(text: &str, width: usize) -> String {
    let padding = width.saturating_sub(self::width(text));
    format!("{text}{}", " ".repeat(padding))
}

/// Renders the records as a table with one row per word.
pub fn vocabulary_table(records: &[&Vocabulary]) -> String {
    if records.is_empty() {
        return "No vocabulary".to_string();
    }

    let rows = records
        .iter()
        .map(|r| {
            [
                r.word.clone(),
                r.translation_english.clone(),
                r.translation_farsi.clone(),
                r.tags.join(", "),
            ]
        })
        .collect::<Vec<_>>();
    let mut widths = HEADER.map(width);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(self::width(cell));
        }
    }

    let line = |cells: [&str; 4]| {
        cells
            .iter()
            .zip(widths)
            .map(|(cell, width)| pad(cell, width))
            .join(" | ")
            .trim_end()
            .to_string()
    };
    std::iter::once(line(HEADER))
        .chain(rows.iter().map(|[word, english, farsi, tags]| {
            line([word.as_str(), english.as_str(), farsi.as_str(), tags.as_str()])
        }))
        .join("\n")
}

/// Renders each tag with the number of words using it.
pub fn tag_summary(summary: &[TagUsage<'_>]) -> String {
    if summary.is_empty() {
        return "No tags".to_string();
    }

    let tag_width = summary.iter().map(|t| width(t.tag)).max().unwrap_or_default();
    summary
        .iter()
        .map(|t| format!("{}  {}", pad(t.tag, tag_width), t.count))
        .join("\n")
}

#[cfg(test)]
mod test {
    use super::*;
    use vocab_core::Tags;

    #[test]
    fn renders_aligned_table() {
        let sky = Vocabulary::new("sky", "sky", "آسمان", Tags::parse_list("nature"));
        let book = Vocabulary::new("book", "book", "کتاب", Tags::parse_list("object,nature"));
        let table = vocabulary_table(&[&sky, &book]);
        let lines = table.lines().collect::<Vec<_>>();
        assert_eq!(lines[0], "Word | English | Farsi | Tags");
        assert_eq!(lines[1], "sky  | sky     | آسمان | nature");
        assert_eq!(lines[2], "book | book    | کتاب  | nature, object");
    }

    #[test]
    fn renders_empty_table() {
        assert_eq!(vocabulary_table(&[]), "No vocabulary");
    }

    #[test]
    fn renders_tag_summary() {
        let summary = [
            TagUsage {
                tag: "nature",
                count: 2,
            },
            TagUsage {
                tag: "object",
                count: 1,
            },
        ];
        assert_eq!(tag_summary(&summary), "nature  2\nobject  1");
        assert_eq!(tag_summary(&[]), "No tags");
    }
}
