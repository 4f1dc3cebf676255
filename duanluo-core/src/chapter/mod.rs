//! Chapter splitting for whole-novel texts
//!
//! Two modes are supported:
//!
//! - [`SplitMode::Inline`] searches headings anywhere in the text; a chapter
//!   runs from its heading to the next heading and is whitespace-trimmed.
//!   A user pattern that finds nothing is retried with
//!   [`pattern::INLINE_DEFAULT`].
//! - [`SplitMode::Line`] tests each line; a matching line opens a new chapter
//!   and becomes its title.
//!
//! Text before the first heading is returned as the preface.

pub mod numeral;
pub mod pattern;

pub use pattern::ChapterPattern;

use std::sync::LazyLock;

use regex::{Captures, Regex};

static NUMBER_IN_TITLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"第(.{0,5}?)[回章]").expect("title number pattern should always compile")
});

/// How headings are located
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SplitMode {
    /// Headings are matched anywhere in the text
    #[default]
    Inline,
    /// Headings are whole lines
    Line,
}

/// Output file naming for chapters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NamingStyle {
    /// `012.txt`
    #[default]
    Number,
    /// `012_第十二回 标题.txt`
    NumberTitle,
}

/// A single chapter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chapter {
    /// 1-based position in the source
    pub index: usize,
    /// Parsed chapter number, or `index` when the heading has none
    pub number: u32,
    /// Heading text
    pub title: String,
    /// Chapter text, heading included
    pub content: String,
}

impl Chapter {
    /// File name for this chapter
    pub fn file_name(&self, style: NamingStyle) -> String {
        match style {
            NamingStyle::Number => format!("{:03}.txt", self.number),
            NamingStyle::NumberTitle => {
                let title = self
                    .title
                    .trim()
                    .replace('\t', " ")
                    .replace(['/', '\\'], "_");
                format!("{:03}_{}.txt", self.number, title)
            }
        }
    }
}

/// Result of splitting a text into chapters
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SplitResult {
    /// Chapters in source order
    pub chapters: Vec<Chapter>,
    /// Non-blank text before the first heading
    pub preface: Option<String>,
    /// The built-in inline pattern replaced a pattern that matched nothing
    pub used_fallback: bool,
}

/// Splits novel text into chapters
#[derive(Debug, Clone)]
pub struct ChapterSplitter {
    pattern: ChapterPattern,
    mode: SplitMode,
}

impl ChapterSplitter {
    /// Create a splitter with an explicit pattern and mode
    pub fn new(pattern: ChapterPattern, mode: SplitMode) -> Self {
        Self { pattern, mode }
    }

    /// Splitter using the default pattern for `mode`
    pub fn with_mode(mode: SplitMode) -> Self {
        let pattern = match mode {
            SplitMode::Inline => ChapterPattern::inline_default(),
            SplitMode::Line => ChapterPattern::line_default(),
        };
        Self::new(pattern, mode)
    }

    /// Active heading pattern
    pub fn pattern(&self) -> &ChapterPattern {
        &self.pattern
    }

    /// Active split mode
    pub fn mode(&self) -> SplitMode {
        self.mode
    }

    /// Split `text` into chapters
    pub fn split(&self, text: &str) -> SplitResult {
        match self.mode {
            SplitMode::Inline => self.split_inline(text),
            SplitMode::Line => self.split_lines(text),
        }
    }

    fn split_inline(&self, text: &str) -> SplitResult {
        let mut used_fallback = false;
        let mut chapters = split_inline_with(&self.pattern, text);

        if chapters.is_empty() && self.pattern.as_str() != pattern::INLINE_DEFAULT {
            chapters = split_inline_with(&ChapterPattern::inline_default(), text);
            used_fallback = !chapters.is_empty();
        }

        let preface_end = chapters.first().map_or(text.len(), |(start, _)| *start);
        SplitResult {
            chapters: chapters.into_iter().map(|(_, chapter)| chapter).collect(),
            preface: non_blank(&text[..preface_end]),
            used_fallback,
        }
    }

    fn split_lines(&self, text: &str) -> SplitResult {
        let regex = self.pattern.regex();
        let mut chapters: Vec<Chapter> = Vec::new();
        let mut preface = Vec::new();
        let mut current: Option<(Chapter, Vec<&str>)> = None;

        for line in text.lines().map(|l| l.trim_end_matches('\r')) {
            if let Some(caps) = regex.captures(line) {
                if let Some((mut chapter, lines)) = current.take() {
                    chapter.content = lines.join("\n");
                    chapters.push(chapter);
                }
                let index = chapters.len() + 1;
                let chapter = Chapter {
                    index,
                    number: chapter_number(&self.pattern, &caps, line, index),
                    title: line.to_string(),
                    content: String::new(),
                };
                current = Some((chapter, vec![line]));
            } else if let Some((_, lines)) = current.as_mut() {
                lines.push(line);
            } else {
                preface.push(line);
            }
        }

        if let Some((mut chapter, lines)) = current {
            chapter.content = lines.join("\n");
            chapters.push(chapter);
        }

        SplitResult {
            chapters,
            preface: non_blank(&preface.join("\n")),
            used_fallback: false,
        }
    }
}

impl Default for ChapterSplitter {
    fn default() -> Self {
        Self::with_mode(SplitMode::default())
    }
}

/// Returns `(heading_start, chapter)` pairs
fn split_inline_with(pattern: &ChapterPattern, text: &str) -> Vec<(usize, Chapter)> {
    let headings: Vec<Captures<'_>> = pattern.regex().captures_iter(text).collect();

    headings
        .iter()
        .enumerate()
        .filter_map(|(i, caps)| {
            let heading = caps.get(0)?;
            let end = headings
                .get(i + 1)
                .and_then(|next| next.get(0))
                .map_or(text.len(), |m| m.start());
            let index = i + 1;

            Some((
                heading.start(),
                Chapter {
                    index,
                    number: chapter_number(pattern, caps, heading.as_str(), index),
                    title: heading.as_str().to_string(),
                    content: text[heading.start()..end].trim().to_string(),
                },
            ))
        })
        .collect()
}

fn chapter_number(pattern: &ChapterPattern, caps: &Captures<'_>, title: &str, index: usize) -> u32 {
    let raw = if pattern.captures_number() {
        caps.get(1).map(|m| m.as_str())
    } else {
        NUMBER_IN_TITLE
            .captures(title)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str())
    };

    raw.and_then(numeral::parse)
        .unwrap_or_else(|| u32::try_from(index).unwrap_or(u32::MAX))
}

fn non_blank(text: &str) -> Option<String> {
    let trimmed = text.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const WATER_MARGIN: &str = "水浒全传\n引首\n\n第一回 张天师祈禳瘟疫 洪太尉误走妖魔\n话说大宋仁宗天子在位。\n\n第二回 王教头私走延安府 九纹龙大闹史家村\n却说高俅。\n";

    #[test]
    fn test_inline_split_ranges() {
        let result = ChapterSplitter::default().split(WATER_MARGIN);

        assert_eq!(result.chapters.len(), 2);
        assert!(!result.used_fallback);
        assert_eq!(result.preface.as_deref(), Some("水浒全传\n引首"));

        let first = &result.chapters[0];
        assert_eq!(first.index, 1);
        assert_eq!(first.number, 1);
        assert_eq!(first.title, "第一回");
        assert_eq!(
            first.content,
            "第一回 张天师祈禳瘟疫 洪太尉误走妖魔\n话说大宋仁宗天子在位。"
        );

        let second = &result.chapters[1];
        assert_eq!(second.number, 2);
        assert!(second.content.ends_with("却说高俅。"));
    }

    #[test]
    fn test_inline_fallback_when_pattern_finds_nothing() {
        let pattern = ChapterPattern::new(r"Chapter \d+").unwrap();
        let result = ChapterSplitter::new(pattern, SplitMode::Inline).split(WATER_MARGIN);

        assert!(result.used_fallback);
        assert_eq!(result.chapters.len(), 2);
    }

    #[test]
    fn test_no_headings() {
        let result = ChapterSplitter::default().split("  只有正文，没有回目。 ");
        assert!(result.chapters.is_empty());
        assert!(!result.used_fallback);
        assert_eq!(result.preface.as_deref(), Some("只有正文，没有回目。"));
    }

    #[test]
    fn test_line_split() {
        let text = "红楼梦\r\n第一回 甄士隐梦幻识通灵\r\n此书开卷。\r\n（第一回完）\r\n第二回 贾夫人仙逝扬州城\r\n诗云。";
        let result = ChapterSplitter::with_mode(SplitMode::Line).split(text);

        assert_eq!(result.preface.as_deref(), Some("红楼梦"));
        assert_eq!(result.chapters.len(), 2);

        let first = &result.chapters[0];
        assert_eq!(first.number, 1);
        assert_eq!(first.title, "第一回 甄士隐梦幻识通灵");
        assert_eq!(
            first.content,
            "第一回 甄士隐梦幻识通灵\n此书开卷。\n（第一回完）"
        );
        assert_eq!(result.chapters[1].content, "第二回 贾夫人仙逝扬州城\n诗云。");
    }

    #[test]
    fn test_number_falls_back_to_index() {
        let pattern = ChapterPattern::new(r"卷[上下]").unwrap();
        let result = ChapterSplitter::new(pattern, SplitMode::Inline).split("卷上 甲。卷下 乙。");

        let numbers: Vec<_> = result.chapters.iter().map(|c| c.number).collect();
        assert_eq!(numbers, vec![1, 2]);
    }

    #[test]
    fn test_number_from_title_without_group() {
        let pattern = ChapterPattern::new(r"第.{1,5}?章").unwrap();
        let result = ChapterSplitter::new(pattern, SplitMode::Inline).split("第一百零八章 终");
        assert_eq!(result.chapters[0].number, 108);
    }

    #[test]
    fn test_file_names() {
        let chapter = Chapter {
            index: 3,
            number: 12,
            title: "第十二回\t林冲/风雪山神庙".to_string(),
            content: String::new(),
        };

        assert_eq!(chapter.file_name(NamingStyle::Number), "012.txt");
        assert_eq!(
            chapter.file_name(NamingStyle::NumberTitle),
            "012_第十二回 林冲_风雪山神庙.txt"
        );
    }
}
