use crate::hash::utils;
use anyhow::{Context, Result};
use image::imageops::FilterType;
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Deserialize, Debug, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub hash: HashConfig,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct HashConfig {
    /// Resampling filter used to reach the 8x8 grid. Hashes produced with
    /// different filters are not comparable.
    pub resize_filter: ResizeFilter,
    /// Hashes closer than this many differing bits are treated as similar.
    pub similarity_threshold: u32,
}

impl Default for HashConfig {
    fn default() -> Self {
        Self {
            resize_filter: ResizeFilter::Nearest,
            similarity_threshold: 10,
        }
    }
}

impl HashConfig {
    /// Whether two hashes differ in fewer bits than `similarity_threshold`.
    pub fn is_similar(&self, hash1: u64, hash2: u64) -> bool {
        utils::is_similar(hash1, hash2, self.similarity_threshold)
    }
}

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ResizeFilter {
    #[default]
    Nearest,
    Triangle,
    CatmullRom,
    Gaussian,
    Lanczos3,
}

impl From<ResizeFilter> for FilterType {
    fn from(filter: ResizeFilter) -> Self {
        match filter {
            ResizeFilter::Nearest => FilterType::Nearest,
            ResizeFilter::Triangle => FilterType::Triangle,
            ResizeFilter::CatmullRom => FilterType::CatmullRom,
            ResizeFilter::Gaussian => FilterType::Gaussian,
            ResizeFilter::Lanczos3 => FilterType::Lanczos3,
        }
    }
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path).context("Failed to read config file")?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content).context("Failed to parse config file")?;

        // A 64-bit hash can never differ in more than 64 bits
        if config.hash.similarity_threshold > u64::BITS {
            return Err(anyhow::anyhow!(
                "similarity_threshold shall not exceed {}",
                u64::BITS
            ));
        }
        Ok(config)
    }

    pub fn default_config() -> Self {
        Self {
            hash: HashConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full() {
        let config = Config::parse(
            r#"
            [hash]
            resize_filter = "catmullrom"
            similarity_threshold = 5
            "#,
        )
        .unwrap();
        assert_eq!(config.hash.resize_filter, ResizeFilter::CatmullRom);
        assert_eq!(config.hash.similarity_threshold, 5);
    }

    #[test]
    fn test_parse_defaults() {
        let config = Config::parse("").unwrap();
        assert_eq!(config.hash.resize_filter, ResizeFilter::Nearest);
        assert_eq!(config.hash.similarity_threshold, 10);

        let config = Config::parse("[hash]\nsimilarity_threshold = 3\n").unwrap();
        assert_eq!(config.hash.resize_filter, ResizeFilter::Nearest);
    }

    #[test]
    fn test_is_similar_uses_threshold() {
        let config = Config::parse("[hash]\nsimilarity_threshold = 3\n").unwrap();
        assert!(config.hash.is_similar(0b011, 0));
        assert!(!config.hash.is_similar(0b111, 0));

        let defaults = HashConfig::default();
        assert!(defaults.is_similar(0x1FF, 0));
        assert!(!defaults.is_similar(0x3FF, 0));
    }

    #[test]
    fn test_parse_rejects_threshold() {
        let err = Config::parse("[hash]\nsimilarity_threshold = 65\n").unwrap_err();
        assert!(err.to_string().contains("similarity_threshold"));
    }

    #[test]
    fn test_parse_rejects_unknown_filter() {
        assert!(Config::parse("[hash]\nresize_filter = \"bicubic\"\n").is_err());
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("imghash-config-{}.toml", std::process::id()));
        fs::write(&path, "[hash]\nresize_filter = \"lanczos3\"\n").unwrap();
        let config = Config::load_from_file(&path).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(
            FilterType::from(config.hash.resize_filter),
            FilterType::Lanczos3
        );
    }

    #[test]
    fn test_load_missing_file() {
        let err = Config::load_from_file("/nonexistent/imghash.toml").unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
