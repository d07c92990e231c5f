use crate::error::{BlogError, Result};
use crate::model::HostTarget;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILENAME: &str = "blogkit.json";
const DEFAULT_POSTS_DIR: &str = "content/post";
const DEFAULT_ASSETS_DIR: &str = "assets";
const DEFAULT_TAB_WIDTH: usize = 2;

/// Base URLs under which the blog's static assets are published.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HostConfig {
    #[serde(default = "default_gitee")]
    pub gitee: String,

    #[serde(default = "default_github")]
    pub github: String,

    #[serde(default = "default_blog")]
    pub blog: String,
}

fn default_gitee() -> String {
    "https://gitee.com/zcong1993/blog/raw/master/static".to_string()
}

fn default_github() -> String {
    "https://github.com/zcong1993/blog/raw/master/static".to_string()
}

fn default_blog() -> String {
    "https://blog.cong.moe".to_string()
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            gitee: default_gitee(),
            github: default_github(),
            blog: default_blog(),
        }
    }
}

impl HostConfig {
    pub fn base_url(&self, target: HostTarget) -> &str {
        match target {
            HostTarget::Gitee => &self.gitee,
            HostTarget::GitHub => &self.github,
            HostTarget::Blog => &self.blog,
        }
    }
}

/// Configuration for blogkit, optionally stored as `blogkit.json` in the blog root
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BlogConfig {
    /// Directory holding flat posts, relative to the blog root
    #[serde(default = "default_posts_dir")]
    pub posts_dir: PathBuf,

    /// Directory cover images are resolved against, relative to the blog root
    #[serde(default = "default_assets_dir")]
    pub assets_dir: PathBuf,

    #[serde(default)]
    pub hosts: HostConfig,

    /// Number of spaces a tab expands to
    #[serde(default = "default_tab_width")]
    pub tab_width: usize,
}

fn default_posts_dir() -> PathBuf {
    PathBuf::from(DEFAULT_POSTS_DIR)
}

fn default_assets_dir() -> PathBuf {
    PathBuf::from(DEFAULT_ASSETS_DIR)
}

fn default_tab_width() -> usize {
    DEFAULT_TAB_WIDTH
}

impl Default for BlogConfig {
    fn default() -> Self {
        Self {
            posts_dir: default_posts_dir(),
            assets_dir: default_assets_dir(),
            hosts: HostConfig::default(),
            tab_width: DEFAULT_TAB_WIDTH,
        }
    }
}

impl BlogConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(root: P) -> Result<Self> {
        Self::load_file(root.as_ref().join(CONFIG_FILENAME))
    }

    /// Load config from an explicit file, or return defaults if it does not exist
    pub fn load_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|source| BlogError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: BlogConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    pub fn posts_path(&self, root: &Path) -> PathBuf {
        root.join(&self.posts_dir)
    }

    pub fn assets_path(&self, root: &Path) -> PathBuf {
        root.join(&self.assets_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = BlogConfig::default();
        assert_eq!(config.posts_dir, PathBuf::from("content/post"));
        assert_eq!(config.assets_dir, PathBuf::from("assets"));
        assert_eq!(config.tab_width, 2);
        assert_eq!(config.hosts.base_url(HostTarget::Blog), "https://blog.cong.moe");
    }

    #[test]
    fn test_host_urls() {
        let hosts = HostConfig::default();
        assert_eq!(
            hosts.base_url(HostTarget::Gitee),
            "https://gitee.com/zcong1993/blog/raw/master/static"
        );
        assert_eq!(
            hosts.base_url(HostTarget::GitHub),
            "https://github.com/zcong1993/blog/raw/master/static"
        );
    }

    #[test]
    fn test_load_missing_config() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config = BlogConfig::load(temp_dir.path()).unwrap();
        assert_eq!(config, BlogConfig::default());
    }

    #[test]
    fn test_load_from_root() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(
            temp_dir.path().join(CONFIG_FILENAME),
            r#"{ "posts_dir": "posts", "tab_width": 4 }"#,
        )
        .unwrap();

        let loaded = BlogConfig::load(temp_dir.path()).unwrap();
        assert_eq!(loaded.posts_dir, PathBuf::from("posts"));
        assert_eq!(loaded.tab_width, 4);
        assert_eq!(loaded.hosts, HostConfig::default());
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let json = r#"{ "hosts": { "blog": "https://cdn.example.com" } }"#;
        let config: BlogConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.hosts.blog, "https://cdn.example.com");
        assert_eq!(config.hosts.gitee, default_gitee());
        assert_eq!(config.assets_dir, PathBuf::from("assets"));
    }

    #[test]
    fn test_invalid_config_is_an_error() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(temp_dir.path().join(CONFIG_FILENAME), "{ not json").unwrap();
        assert!(matches!(
            BlogConfig::load(temp_dir.path()),
            Err(BlogError::Serialization(_))
        ));
    }
}
