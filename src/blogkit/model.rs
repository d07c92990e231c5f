use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Where rewritten image URLs should point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HostTarget {
    Gitee,
    GitHub,
    Blog,
}

impl HostTarget {
    /// Maps the positional selector to a host: `1` is gitee, `2` is github,
    /// anything else (including no selector) is the blog itself.
    pub fn from_selector(selector: Option<&str>) -> Self {
        match selector {
            Some("1") => HostTarget::Gitee,
            Some("2") => HostTarget::GitHub,
            _ => HostTarget::Blog,
        }
    }
}

/// The leading YAML block of a post. Only the fields the tools act on are kept.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FrontMatter {
    #[serde(default)]
    pub cover: Option<serde_yaml::Value>,
}

impl FrontMatter {
    /// Extracts the front matter from a post, if it has a well-formed one.
    ///
    /// The block must open on the very first line with `---` and close with a
    /// line holding only `---` or `...`. Anything else, including YAML that does
    /// not parse, yields `None`.
    pub fn parse(content: &str) -> Option<Self> {
        let content = content.strip_prefix('\u{feff}').unwrap_or(content);
        let mut lines = content.lines();
        if lines.next()?.trim_end() != "---" {
            return None;
        }

        let mut block = Vec::new();
        for line in lines {
            let trimmed = line.trim_end();
            if trimmed == "---" || trimmed == "..." {
                let yaml = block.join("\n");
                if yaml.trim().is_empty() {
                    return Some(Self::default());
                }
                return serde_yaml::from_str(&yaml).ok();
            }
            block.push(line);
        }
        None
    }

    /// The declared cover path. Empty or non-string values count as absent.
    pub fn cover(&self) -> Option<&str> {
        match &self.cover {
            Some(serde_yaml::Value::String(s)) if !s.is_empty() => Some(s.as_str()),
            _ => None,
        }
    }
}

/// Everything needed to turn one flat post into a post bundle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostMigration {
    pub source: PathBuf,
    pub cover: String,
    pub dest_dir: PathBuf,
    pub dest_index: PathBuf,
    pub cover_source: PathBuf,
    pub cover_dest: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selector_mapping() {
        assert_eq!(HostTarget::from_selector(Some("1")), HostTarget::Gitee);
        assert_eq!(HostTarget::from_selector(Some("2")), HostTarget::GitHub);
        assert_eq!(HostTarget::from_selector(Some("3")), HostTarget::Blog);
        assert_eq!(HostTarget::from_selector(Some("")), HostTarget::Blog);
        assert_eq!(HostTarget::from_selector(None), HostTarget::Blog);
    }

    #[test]
    fn test_parse_cover() {
        let content = "---\ntitle: Hello\ncover: /feature.png\n---\n\nBody";
        let fm = FrontMatter::parse(content).unwrap();
        assert_eq!(fm.cover(), Some("/feature.png"));
    }

    #[test]
    fn test_parse_without_cover() {
        let fm = FrontMatter::parse("---\ntitle: Hello\n---\nBody").unwrap();
        assert_eq!(fm.cover(), None);
    }

    #[test]
    fn test_no_front_matter() {
        assert!(FrontMatter::parse("# Title\n\ncover: /x.png").is_none());
        assert!(FrontMatter::parse("").is_none());
    }

    #[test]
    fn test_unterminated_front_matter() {
        assert!(FrontMatter::parse("---\ncover: /x.png\nno closing fence").is_none());
    }

    #[test]
    fn test_malformed_yaml_is_ignored() {
        assert!(FrontMatter::parse("---\ncover: [unclosed\n---\n").is_none());
    }

    #[test]
    fn test_non_string_cover_is_absent() {
        let fm = FrontMatter::parse("---\ncover: 42\n---\n").unwrap();
        assert_eq!(fm.cover(), None);

        let fm = FrontMatter::parse("---\ncover: \"\"\n---\n").unwrap();
        assert_eq!(fm.cover(), None);
    }

    #[test]
    fn test_crlf_front_matter() {
        let fm = FrontMatter::parse("---\r\ncover: a.png\r\n---\r\nBody").unwrap();
        assert_eq!(fm.cover(), Some("a.png"));
    }
}
