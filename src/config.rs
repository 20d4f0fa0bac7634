//! Widget configuration read from the container's data attributes.
//!
//! `data-frame` names the overlay image and is required. `data-options` may
//! carry a JSON object overriding [`FrameOptions`] defaults, e.g.
//! `{"display_size": 400, "device_scale": 2, "file_name": "framed.png"}`.
//!
//! The widget replaces whatever the container holds, so page wording for the
//! download button goes through `download_label`.

use serde::Deserialize;

use crate::error::{FrameError, FrameResult};

pub const DEFAULT_DISPLAY_SIZE: u32 = 500;
pub const DEFAULT_DEVICE_SCALE: u32 = 3;
pub const DEFAULT_FILE_NAME: &str = "mobadra-frame.png";
pub const DEFAULT_DOWNLOAD_LABEL: &str = "Download";
/// Upper bound on the backing canvas side, in pixels.
pub const MAX_SURFACE_SIDE: u32 = 8192;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FrameOptions {
    /// Canvas side in CSS pixels.
    pub display_size: u32,
    /// Backing pixels per CSS pixel.
    pub device_scale: u32,
    /// Name of the downloaded PNG.
    pub file_name: String,
    /// Text of the download button.
    pub download_label: String,
}

impl Default for FrameOptions {
    fn default() -> Self {
        Self {
            display_size: DEFAULT_DISPLAY_SIZE,
            device_scale: DEFAULT_DEVICE_SCALE,
            file_name: DEFAULT_FILE_NAME.to_string(),
            download_label: DEFAULT_DOWNLOAD_LABEL.to_string(),
        }
    }
}

impl FrameOptions {
    pub fn from_json(raw: &str) -> FrameResult<Self> {
        let options: FrameOptions = serde_json::from_str(raw)?;
        options.validate()?;
        Ok(options)
    }

    fn validate(&self) -> FrameResult<()> {
        if self.display_size == 0 {
            return Err(FrameError::invalid_options("display_size must be positive"));
        }
        if self.device_scale == 0 {
            return Err(FrameError::invalid_options("device_scale must be positive"));
        }
        let side = self.display_size.checked_mul(self.device_scale);
        if side.is_none_or(|side| side > MAX_SURFACE_SIDE) {
            return Err(FrameError::invalid_options(format!(
                "surface side exceeds {MAX_SURFACE_SIDE}px"
            )));
        }
        if self.file_name.trim().is_empty() {
            return Err(FrameError::invalid_options("file_name must not be empty"));
        }
        if self.download_label.trim().is_empty() {
            return Err(FrameError::invalid_options("download_label must not be empty"));
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameConfig {
    pub frame_src: String,
    pub options: FrameOptions,
}

impl FrameConfig {
    /// Builds the config from the raw `data-frame` and `data-options` values.
    pub fn from_dataset(frame: Option<String>, options: Option<String>) -> FrameResult<Self> {
        let frame_src = frame
            .map(|src| src.trim().to_string())
            .filter(|src| !src.is_empty())
            .ok_or(FrameError::MissingFrameSource)?;
        let options = match options.as_deref().map(str::trim) {
            Some(raw) if !raw.is_empty() => FrameOptions::from_json(raw)?,
            _ => FrameOptions::default(),
        };
        Ok(Self { frame_src, options })
    }

    /// Backing canvas side in pixels.
    pub fn surface_side(&self) -> u32 {
        self.options.display_size * self.options.device_scale
    }

    pub fn device_scale(&self) -> f64 {
        self.options.device_scale as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_stock_widget() {
        let cfg = FrameConfig::from_dataset(Some("frame.png".into()), None).unwrap();
        assert_eq!(cfg.frame_src, "frame.png");
        assert_eq!(cfg.options, FrameOptions::default());
        assert_eq!(cfg.surface_side(), 1500);
        assert_eq!(cfg.device_scale(), 3.0);
        assert_eq!(cfg.options.file_name, "mobadra-frame.png");
        assert_eq!(cfg.options.download_label, "Download");
    }

    #[test]
    fn download_label_carries_page_wording() {
        let cfg = FrameConfig::from_dataset(
            Some("f.png".into()),
            Some(r#"{"download_label": "تحميل"}"#.into()),
        )
        .unwrap();
        assert_eq!(cfg.options.download_label, "تحميل");
        assert_eq!(cfg.options.file_name, DEFAULT_FILE_NAME);
    }

    #[test]
    fn missing_or_blank_frame_is_rejected() {
        assert!(matches!(
            FrameConfig::from_dataset(None, None),
            Err(FrameError::MissingFrameSource)
        ));
        assert!(matches!(
            FrameConfig::from_dataset(Some("   ".into()), None),
            Err(FrameError::MissingFrameSource)
        ));
    }

    #[test]
    fn partial_options_keep_other_defaults() {
        let cfg = FrameConfig::from_dataset(
            Some("assets/gold.png".into()),
            Some(r#"{"device_scale": 2}"#.into()),
        )
        .unwrap();
        assert_eq!(cfg.options.device_scale, 2);
        assert_eq!(cfg.options.display_size, DEFAULT_DISPLAY_SIZE);
        assert_eq!(cfg.surface_side(), 1000);
    }

    #[test]
    fn blank_options_fall_back_to_defaults() {
        let cfg = FrameConfig::from_dataset(Some("f.png".into()), Some("  ".into())).unwrap();
        assert_eq!(cfg.options, FrameOptions::default());
    }

    #[test]
    fn invalid_options_are_rejected() {
        let bad = [
            "{",
            r#"{"display_size": 0}"#,
            r#"{"device_scale": 0}"#,
            r#"{"display_size": 5000, "device_scale": 3}"#,
            r#"{"file_name": " "}"#,
            r#"{"download_label": ""}"#,
            r#"{"colour": "red"}"#,
        ];
        for raw in bad {
            let result = FrameConfig::from_dataset(Some("f.png".into()), Some(raw.into()));
            assert!(
                matches!(result, Err(FrameError::InvalidOptions(_))),
                "accepted {raw}"
            );
        }
    }
}
