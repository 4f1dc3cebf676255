//! Chapter heading patterns

use regex::Regex;

use crate::error::Result;

/// Heading searched anywhere in the text: `第十二回`, `第120回`, ...
pub const INLINE_DEFAULT: &str = r"第[一二三四五六七八九十百千零〇○两\d]+回";

/// Whole-line heading that skips `（第X回完）` style closing lines
pub const LINE_DEFAULT: &str = r"^[^（]*第([○〇零一二三四五六七八九十百千万两\d]+)回[^）]*$";

/// Compiled chapter heading pattern
#[derive(Debug, Clone)]
pub struct ChapterPattern {
    regex: Regex,
}

impl ChapterPattern {
    /// Compile a user-supplied heading pattern
    pub fn new(pattern: &str) -> Result<Self> {
        Ok(Self {
            regex: Regex::new(pattern)?,
        })
    }

    /// Default pattern for [`SplitMode::Inline`](super::SplitMode::Inline)
    pub fn inline_default() -> Self {
        Self::new(INLINE_DEFAULT).expect("built-in inline pattern should always compile")
    }

    /// Default pattern for [`SplitMode::Line`](super::SplitMode::Line)
    pub fn line_default() -> Self {
        Self::new(LINE_DEFAULT).expect("built-in line pattern should always compile")
    }

    /// Pattern source text
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    /// True when the pattern captures the chapter number in group 1
    pub fn captures_number(&self) -> bool {
        self.regex.captures_len() > 1
    }

    pub(crate) fn regex(&self) -> &Regex {
        &self.regex
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inline_default_matches() {
        let pattern = ChapterPattern::inline_default();
        let found: Vec<_> = pattern
            .regex()
            .find_iter("第一回 张天师祈禳瘟疫 第120回 燕青秋林渡")
            .map(|m| m.as_str())
            .collect();
        assert_eq!(found, vec!["第一回", "第120回"]);
        assert!(!pattern.captures_number());
    }

    #[test]
    fn test_line_default_skips_closing_marker() {
        let pattern = ChapterPattern::line_default();
        assert!(pattern.regex().is_match("第三回 托内兄如海荐西宾"));
        assert!(!pattern.regex().is_match("（第三回完）"));
        assert!(!pattern.regex().is_match("第三章 开端"));
        assert!(pattern.captures_number());
    }

    #[test]
    fn test_invalid_pattern() {
        assert!(ChapterPattern::new("第(").is_err());
    }
}
