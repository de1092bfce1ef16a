//! Reading-list manifest parsing.
//!
//! The manifest is plain UTF-8 text. Entries are blocks separated by blank
//! lines; the first line of a block is the title, and each following line is
//! classified by the first matching rule:
//!
//! 1. A kind name (`paper`, `book`, `web`, `video`, case-insensitive)
//! 2. The `read` marker
//! 3. The `local` marker
//! 4. A reference — starts with `http`, or (after `local`) ends with `.pdf`,
//!    both matched case-insensitively; the line is stored as written
//! 5. Anything else is a comma-separated tag list
//!
//! ```text
//! Attention Is All You Need
//! paper
//! https://arxiv.org/pdf/1706.03762
//! read
//! transformers, nlp
//! ```
//!
//! Classification is order-sensitive and line-exclusive: a line satisfies
//! exactly one rule, so a tag that spells a kind name cannot be expressed.
//! That limitation is part of the format and is deliberately not papered
//! over here.
//!
//! A block missing a kind or a reference is rejected; rejections are
//! collected alongside the parsed entries so the pipeline can report them
//! without aborting the run.

use std::fmt;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum BlockError {
    #[error("no type")]
    NoKind,
    #[error("no url/path")]
    NoReference,
    #[error("empty block")]
    Empty,
}

/// What kind of thing an entry points at. Drives thumbnail production and
/// the `data-kind` filter attribute in the rendered page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Paper,
    Book,
    Web,
    Video,
}

impl Kind {
    /// Case-insensitive match against the fixed kind set.
    pub fn parse(s: &str) -> Option<Kind> {
        match s.to_lowercase().as_str() {
            "paper" => Some(Kind::Paper),
            "book" => Some(Kind::Book),
            "web" => Some(Kind::Web),
            "video" => Some(Kind::Video),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Kind::Paper => "paper",
            Kind::Book => "book",
            Kind::Web => "web",
            Kind::Video => "video",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where the reference points: a URL on the web, or a path on disk
/// (resolved relative to the manifest's directory).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    Web,
    Local,
}

/// One parsed reading-list entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub title: String,
    pub source: Source,
    pub reference: String,
    pub kind: Kind,
    pub tags: Vec<String>,
    pub read: bool,
}

/// A block that failed to parse, kept for reporting.
#[derive(Debug, PartialEq, Eq)]
pub struct Rejection {
    pub title: String,
    pub reason: BlockError,
}

/// Parse result: valid entries in manifest order, plus rejected blocks.
#[derive(Debug, Default)]
pub struct ParsedManifest {
    pub entries: Vec<Entry>,
    pub rejected: Vec<Rejection>,
}

/// Parse a whole manifest. Never fails: malformed blocks land in
/// `rejected` and the rest of the manifest is still used.
pub fn parse(raw: &str) -> ParsedManifest {
    let mut result = ParsedManifest::default();

    for block in raw.split("\n\n").map(str::trim).filter(|b| !b.is_empty()) {
        match parse_block(block) {
            Ok(entry) => result.entries.push(entry),
            Err(BlockError::Empty) => {}
            Err(reason) => {
                let title = block.lines().next().unwrap_or("").trim().to_string();
                result.rejected.push(Rejection { title, reason });
            }
        }
    }

    result
}

/// Parse a single blank-line-delimited block into an entry.
pub fn parse_block(block: &str) -> Result<Entry, BlockError> {
    let lines: Vec<&str> = block
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();

    let Some((&title, rest)) = lines.split_first() else {
        return Err(BlockError::Empty);
    };

    let mut kind = None;
    let mut read = false;
    let mut local = false;
    let mut reference = None;
    let mut tags = Vec::new();

    for &line in rest {
        let lower = line.to_lowercase();
        if let Some(k) = Kind::parse(line) {
            kind = Some(k);
        } else if lower == "read" {
            read = true;
        } else if lower == "local" {
            local = true;
        } else if lower.starts_with("http") || (local && lower.ends_with(".pdf")) {
            reference = Some(line.to_string());
        } else if line.contains(',')
            || (Kind::parse(line).is_none()
                && lower != "read"
                && lower != "local"
                && !lower.starts_with("http"))
        {
            tags = line
                .split(',')
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .map(str::to_string)
                .collect();
        }
    }

    let kind = kind.ok_or(BlockError::NoKind)?;
    let reference = reference.ok_or(BlockError::NoReference)?;

    Ok(Entry {
        title: title.to_string(),
        source: if local { Source::Local } else { Source::Web },
        reference,
        kind,
        tags,
        read,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_paper_block() {
        let entry = parse_block(
            "Attention Is All You Need\npaper\nhttps://arxiv.org/pdf/1706.03762\nread\ntransformers, nlp",
        )
        .unwrap();

        assert_eq!(entry.title, "Attention Is All You Need");
        assert_eq!(entry.kind, Kind::Paper);
        assert_eq!(entry.source, Source::Web);
        assert_eq!(entry.reference, "https://arxiv.org/pdf/1706.03762");
        assert!(entry.read);
        assert_eq!(entry.tags, vec!["transformers", "nlp"]);
    }

    #[test]
    fn rejects_block_without_kind() {
        let err = parse_block("Some Notes\nlocal\nnotes/some.pdf").unwrap_err();
        assert_eq!(err, BlockError::NoKind);
    }

    #[test]
    fn rejects_block_without_reference() {
        let err = parse_block("Dangling Title\nbook\nhistory, rome").unwrap_err();
        assert_eq!(err, BlockError::NoReference);
    }

    #[test]
    fn local_pdf_path_becomes_reference() {
        let entry = parse_block("SICP\nbook\nlocal\nbooks/sicp.pdf").unwrap();
        assert_eq!(entry.source, Source::Local);
        assert_eq!(entry.reference, "books/sicp.pdf");
    }

    #[test]
    fn local_pdf_before_local_marker_is_a_tag_line() {
        // Rule order matters: a .pdf path only counts as a reference once
        // the local marker has been seen.
        let err = parse_block("SICP\nbook\nbooks/sicp.pdf\nlocal").unwrap_err();
        assert_eq!(err, BlockError::NoReference);
    }

    #[test]
    fn kind_match_is_case_insensitive() {
        let entry = parse_block("T\nPAPER\nhttps://example.com/x.pdf").unwrap();
        assert_eq!(entry.kind, Kind::Paper);
        let entry = parse_block("T\nVideo\nhttps://youtube.com/watch?v=abc").unwrap();
        assert_eq!(entry.kind, Kind::Video);
    }

    #[test]
    fn reference_match_is_case_insensitive() {
        // Matching is lowercased but the stored reference is not.
        let entry = parse_block("T\npaper\nHTTP://EXAMPLE.COM/A.PDF").unwrap();
        assert_eq!(entry.reference, "HTTP://EXAMPLE.COM/A.PDF");

        let entry = parse_block("T\nbook\nlocal\nbooks/SICP.PDF").unwrap();
        assert_eq!(entry.source, Source::Local);
        assert_eq!(entry.reference, "books/SICP.PDF");
    }

    #[test]
    fn read_defaults_to_false() {
        let entry = parse_block("T\nweb\nhttps://example.com").unwrap();
        assert!(!entry.read);
    }

    #[test]
    fn source_defaults_to_web() {
        let entry = parse_block("T\npaper\nhttps://example.com/a.pdf").unwrap();
        assert_eq!(entry.source, Source::Web);
    }

    #[test]
    fn tags_are_trimmed_and_empties_dropped() {
        let entry = parse_block("T\nweb\nhttps://example.com\n a , , b ,").unwrap();
        assert_eq!(entry.tags, vec!["a", "b"]);
    }

    #[test]
    fn single_word_line_becomes_one_tag() {
        // Known surface limitation of the format: any non-keyword word is a
        // one-item tag list.
        let entry = parse_block("T\nweb\nhttps://example.com\nrust").unwrap();
        assert_eq!(entry.tags, vec!["rust"]);
    }

    #[test]
    fn later_lines_overwrite_earlier_ones() {
        let entry = parse_block(
            "T\npaper\nbook\nhttps://a.example/1.pdf\nhttps://b.example/2.pdf",
        )
        .unwrap();
        assert_eq!(entry.kind, Kind::Book);
        assert_eq!(entry.reference, "https://b.example/2.pdf");
    }

    #[test]
    fn parse_splits_on_blank_lines() {
        let parsed = parse(
            "First\npaper\nhttps://a.example/1.pdf\n\nSecond\nbook\nhttps://b.example/2.pdf\n",
        );
        assert_eq!(parsed.entries.len(), 2);
        assert!(parsed.rejected.is_empty());
        assert_eq!(parsed.entries[0].title, "First");
        assert_eq!(parsed.entries[1].title, "Second");
    }

    #[test]
    fn parse_collects_rejections_with_titles() {
        let parsed = parse("Good\nweb\nhttps://a.example\n\nNo Type\nlocal\nx.pdf\n\nNo Ref\nbook");
        assert_eq!(parsed.entries.len(), 1);
        assert_eq!(
            parsed.rejected,
            vec![
                Rejection {
                    title: "No Type".into(),
                    reason: BlockError::NoKind
                },
                Rejection {
                    title: "No Ref".into(),
                    reason: BlockError::NoReference
                },
            ]
        );
    }

    #[test]
    fn parse_ignores_extra_blank_lines() {
        let parsed = parse("\n\n\nOnly\nweb\nhttps://a.example\n\n\n");
        assert_eq!(parsed.entries.len(), 1);
        assert!(parsed.rejected.is_empty());
    }
}
