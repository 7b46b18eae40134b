//! Configuration management for Extrato Server

use serde::Deserialize;
use std::env;
use std::path::PathBuf;

use crate::engine::PdfPipelineOptions;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub pipeline: PipelineConfig,
    pub spool: SpoolConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Converter pipeline settings. Defaults mirror the production pipeline:
/// page images on at 2x scale, table structure on, OCR off.
#[derive(Debug, Clone, Deserialize)]
pub struct PipelineConfig {
    pub generate_picture_images: bool,
    pub images_scale: f32,
    pub do_table_structure: bool,
    pub do_ocr: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SpoolConfig {
    /// Directory for staged uploads. `None` uses the system temp dir.
    pub dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 8000,
            },
            pipeline: PipelineConfig {
                generate_picture_images: true,
                images_scale: 2.0,
                do_table_structure: true,
                do_ocr: false,
            },
            spool: SpoolConfig { dir: None },
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Config {
            server: ServerConfig {
                host: env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: env::var("SERVER_PORT")
                    .unwrap_or_else(|_| "8000".to_string())
                    .parse()
                    .unwrap_or(8000),
            },
            pipeline: PipelineConfig {
                generate_picture_images: env_flag("PIPELINE_PICTURE_IMAGES", true),
                images_scale: env::var("PIPELINE_IMAGES_SCALE")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(2.0),
                do_table_structure: env_flag("PIPELINE_TABLE_STRUCTURE", true),
                do_ocr: env_flag("PIPELINE_OCR", false),
            },
            spool: SpoolConfig {
                dir: env::var("SPOOL_DIR").ok().map(PathBuf::from),
            },
        }
    }
}

impl PipelineConfig {
    pub fn options(&self) -> PdfPipelineOptions {
        PdfPipelineOptions {
            generate_picture_images: self.generate_picture_images,
            images_scale: self.images_scale,
            do_table_structure: self.do_table_structure,
            do_ocr: self.do_ocr,
        }
    }
}

fn env_flag(name: &str, default: bool) -> bool {
    env::var(name)
        .map(|v| parse_flag(&v))
        .unwrap_or(default)
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8000);
        assert!(config.pipeline.generate_picture_images);
        assert_eq!(config.pipeline.images_scale, 2.0);
        assert!(config.pipeline.do_table_structure);
        assert!(!config.pipeline.do_ocr);
        assert!(config.spool.dir.is_none());
    }

    #[test]
    fn test_parse_flag() {
        assert!(parse_flag("1"));
        assert!(parse_flag("true"));
        assert!(parse_flag("TRUE"));
        assert!(parse_flag("yes"));
        assert!(parse_flag(" on "));
        assert!(!parse_flag("0"));
        assert!(!parse_flag("false"));
        assert!(!parse_flag("off"));
        assert!(!parse_flag(""));
    }

    #[test]
    fn test_pipeline_options_from_config() {
        let config = Config::default();
        let options = config.pipeline.options();
        assert!(options.generate_picture_images);
        assert_eq!(options.images_scale, 2.0);
        assert!(options.do_table_structure);
        assert!(!options.do_ocr);
    }
}
