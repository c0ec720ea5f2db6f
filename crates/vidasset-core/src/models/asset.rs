use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::error::AssetError;

/// Fields of the video asset descriptor, addressed by wire name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetField {
    DisplayName,
    DateAdded,
    Url,
    FileSize,
    PortableUrl,
}

impl AssetField {
    /// All fields, in declaration order.
    pub const ALL: [AssetField; 5] = [
        AssetField::DisplayName,
        AssetField::DateAdded,
        AssetField::Url,
        AssetField::FileSize,
        AssetField::PortableUrl,
    ];

    /// Wire name of this field.
    pub fn name(&self) -> &'static str {
        match self {
            AssetField::DisplayName => "display_name",
            AssetField::DateAdded => "date_added",
            AssetField::Url => "url",
            AssetField::FileSize => "file_size",
            AssetField::PortableUrl => "portable_url",
        }
    }
}

impl Display for AssetField {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.name())
    }
}

impl FromStr for AssetField {
    type Err = AssetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "display_name" => Ok(AssetField::DisplayName),
            "date_added" => Ok(AssetField::DateAdded),
            "url" => Ok(AssetField::Url),
            "file_size" => Ok(AssetField::FileSize),
            "portable_url" => Ok(AssetField::PortableUrl),
            other => Err(AssetError::UnknownField(other.to_string())),
        }
    }
}

/// One uploaded media asset, as listed in an asset library.
///
/// Every field is optional at construction; omissions take the defaults
/// below. `date_added` is display text with no fixed format, `file_size`
/// is raw bytes, and `portable_url` is the fallback location for the same
/// asset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VideoAsset {
    pub display_name: String,
    pub date_added: String,
    pub url: String,
    pub file_size: i64,
    pub portable_url: String,
}

impl Default for VideoAsset {
    fn default() -> Self {
        VideoAsset {
            display_name: String::new(),
            date_added: String::new(),
            url: String::new(),
            file_size: 0,
            portable_url: String::new(),
        }
    }
}

impl VideoAsset {
    /// Build a descriptor from defaults plus the supplied fields.
    pub fn from_patch(patch: AssetPatch) -> Self {
        let mut asset = VideoAsset::default();
        asset.apply(patch);
        asset
    }

    /// Apply a partial update, returning the fields whose stored values
    /// changed. Supplying a field with its current value reports no
    /// change.
    pub fn apply(&mut self, patch: AssetPatch) -> Vec<AssetField> {
        let mut changed = Vec::new();
        if let Some(display_name) = patch.display_name {
            if self.display_name != display_name {
                self.display_name = display_name;
                changed.push(AssetField::DisplayName);
            }
        }
        if let Some(date_added) = patch.date_added {
            if self.date_added != date_added {
                self.date_added = date_added;
                changed.push(AssetField::DateAdded);
            }
        }
        if let Some(url) = patch.url {
            if self.url != url {
                self.url = url;
                changed.push(AssetField::Url);
            }
        }
        if let Some(file_size) = patch.file_size {
            if self.file_size != file_size {
                self.file_size = file_size;
                changed.push(AssetField::FileSize);
            }
        }
        if let Some(portable_url) = patch.portable_url {
            if self.portable_url != portable_url {
                self.portable_url = portable_url;
                changed.push(AssetField::PortableUrl);
            }
        }
        changed
    }

    /// Current value of a field as dynamic JSON.
    pub fn attr(&self, field: AssetField) -> JsonValue {
        match field {
            AssetField::DisplayName => JsonValue::String(self.display_name.clone()),
            AssetField::DateAdded => JsonValue::String(self.date_added.clone()),
            AssetField::Url => JsonValue::String(self.url.clone()),
            AssetField::FileSize => JsonValue::from(self.file_size),
            AssetField::PortableUrl => JsonValue::String(self.portable_url.clone()),
        }
    }

    /// Type-checked dynamic write. Returns whether the stored value
    /// changed; a mismatched value type leaves the record untouched.
    pub fn set_attr(&mut self, field: AssetField, value: JsonValue) -> Result<bool, AssetError> {
        match field {
            AssetField::DisplayName => set_text(&mut self.display_name, field, value),
            AssetField::DateAdded => set_text(&mut self.date_added, field, value),
            AssetField::Url => set_text(&mut self.url, field, value),
            AssetField::PortableUrl => set_text(&mut self.portable_url, field, value),
            AssetField::FileSize => {
                let size = value.as_i64().ok_or(AssetError::WrongType {
                    field,
                    expected: "integer",
                })?;
                if self.file_size == size {
                    Ok(false)
                } else {
                    self.file_size = size;
                    Ok(true)
                }
            }
        }
    }

    /// Decode a descriptor from a JSON attribute map. Missing keys take
    /// the defaults; unknown keys are ignored.
    pub fn from_json(raw: &str) -> Result<Self, AssetError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Full attribute map, all five keys always present.
    pub fn to_json_value(&self) -> JsonValue {
        serde_json::to_value(self).unwrap_or_default()
    }
}

fn set_text(slot: &mut String, field: AssetField, value: JsonValue) -> Result<bool, AssetError> {
    match value {
        JsonValue::String(text) => {
            if *slot == text {
                Ok(false)
            } else {
                *slot = text;
                Ok(true)
            }
        }
        _ => Err(AssetError::WrongType {
            field,
            expected: "string",
        }),
    }
}

/// Partial descriptor for construction and updates; `None` leaves a
/// field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetPatch {
    pub display_name: Option<String>,
    pub date_added: Option<String>,
    pub url: Option<String>,
    pub file_size: Option<i64>,
    pub portable_url: Option<String>,
}

impl AssetPatch {
    pub fn is_empty(&self) -> bool {
        self.display_name.is_none()
            && self.date_added.is_none()
            && self.url.is_none()
            && self.file_size.is_none()
            && self.portable_url.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_shape() {
        let asset = VideoAsset::default();
        assert_eq!(asset.display_name, "");
        assert_eq!(asset.date_added, "");
        assert_eq!(asset.url, "");
        assert_eq!(asset.file_size, 0);
        assert_eq!(asset.portable_url, "");
    }

    #[test]
    fn test_reads_are_idempotent() {
        let asset = VideoAsset::from_patch(AssetPatch {
            display_name: Some("Intro".to_string()),
            ..AssetPatch::default()
        });
        assert_eq!(asset.display_name, "Intro");
        assert_eq!(asset.attr(AssetField::DisplayName), json!("Intro"));
        assert_eq!(asset.attr(AssetField::DisplayName), json!("Intro"));
        assert_eq!(asset.attr(AssetField::FileSize), json!(0));
        assert_eq!(asset.attr(AssetField::FileSize), json!(0));
    }

    #[test]
    fn test_from_patch_overrides_only_supplied_fields() {
        let asset = VideoAsset::from_patch(AssetPatch {
            display_name: Some("Intro".to_string()),
            file_size: Some(2048),
            ..AssetPatch::default()
        });
        assert_eq!(asset.display_name, "Intro");
        assert_eq!(asset.date_added, "");
        assert_eq!(asset.url, "");
        assert_eq!(asset.file_size, 2048);
        assert_eq!(asset.portable_url, "");
    }

    #[test]
    fn test_from_patch_empty_is_default() {
        assert_eq!(
            VideoAsset::from_patch(AssetPatch::default()),
            VideoAsset::default()
        );
        assert!(AssetPatch::default().is_empty());
    }

    #[test]
    fn test_apply_reports_changed_fields() {
        let mut asset = VideoAsset::default();
        let changed = asset.apply(AssetPatch {
            display_name: Some("Lecture 1".to_string()),
            url: Some("https://cdn.example.com/lecture1.mp4".to_string()),
            ..AssetPatch::default()
        });
        assert_eq!(changed, vec![AssetField::DisplayName, AssetField::Url]);
        assert_eq!(asset.display_name, "Lecture 1");
        assert_eq!(asset.url, "https://cdn.example.com/lecture1.mp4");
    }

    #[test]
    fn test_apply_same_value_reports_no_change() {
        let mut asset = VideoAsset::from_patch(AssetPatch {
            display_name: Some("Lecture 1".to_string()),
            ..AssetPatch::default()
        });
        let changed = asset.apply(AssetPatch {
            display_name: Some("Lecture 1".to_string()),
            file_size: Some(0),
            ..AssetPatch::default()
        });
        assert!(changed.is_empty());
    }

    #[test]
    fn test_field_name_round_trip() {
        for field in AssetField::ALL {
            assert_eq!(field.name().parse::<AssetField>().unwrap(), field);
            assert_eq!(field.to_string(), field.name());
        }
    }

    #[test]
    fn test_field_from_str_unknown() {
        let err = "thumbnail_url".parse::<AssetField>().unwrap_err();
        assert!(matches!(err, AssetError::UnknownField(name) if name == "thumbnail_url"));
    }

    #[test]
    fn test_set_attr_changes_value() {
        let mut asset = VideoAsset::default();
        assert!(asset
            .set_attr(AssetField::DisplayName, json!("Intro"))
            .unwrap());
        assert!(asset.set_attr(AssetField::FileSize, json!(2048)).unwrap());
        assert_eq!(asset.display_name, "Intro");
        assert_eq!(asset.file_size, 2048);

        // Writing the same values again is a no-op.
        assert!(!asset
            .set_attr(AssetField::DisplayName, json!("Intro"))
            .unwrap());
        assert!(!asset.set_attr(AssetField::FileSize, json!(2048)).unwrap());
    }

    #[test]
    fn test_set_attr_wrong_type_leaves_record_untouched() {
        let mut asset = VideoAsset::from_patch(AssetPatch {
            file_size: Some(2048),
            ..AssetPatch::default()
        });
        let err = asset
            .set_attr(AssetField::FileSize, json!("2048"))
            .unwrap_err();
        assert!(matches!(
            err,
            AssetError::WrongType {
                field: AssetField::FileSize,
                expected: "integer"
            }
        ));
        assert_eq!(asset.file_size, 2048);

        let err = asset.set_attr(AssetField::Url, json!(42)).unwrap_err();
        assert!(matches!(
            err,
            AssetError::WrongType {
                field: AssetField::Url,
                expected: "string"
            }
        ));
        assert_eq!(asset.url, "");
    }

    #[test]
    fn test_from_json_missing_keys_take_defaults() {
        let asset = VideoAsset::from_json(r#"{"display_name": "Intro", "file_size": 2048}"#)
            .unwrap();
        assert_eq!(asset.display_name, "Intro");
        assert_eq!(asset.date_added, "");
        assert_eq!(asset.url, "");
        assert_eq!(asset.file_size, 2048);
        assert_eq!(asset.portable_url, "");
    }

    #[test]
    fn test_from_json_empty_object_is_default() {
        assert_eq!(VideoAsset::from_json("{}").unwrap(), VideoAsset::default());
    }

    #[test]
    fn test_from_json_ignores_unknown_keys() {
        let asset =
            VideoAsset::from_json(r#"{"display_name": "Intro", "thumbnail": "t.png"}"#).unwrap();
        assert_eq!(asset.display_name, "Intro");
    }

    #[test]
    fn test_from_json_malformed_fails() {
        assert!(matches!(
            VideoAsset::from_json("not json"),
            Err(AssetError::Json(_))
        ));
    }

    #[test]
    fn test_to_json_value_has_all_keys() {
        let value = VideoAsset::default().to_json_value();
        let map = value.as_object().unwrap();
        assert_eq!(map.len(), AssetField::ALL.len());
        for field in AssetField::ALL {
            assert!(map.contains_key(field.name()));
        }
        assert_eq!(map["file_size"], json!(0));
    }

    #[test]
    fn test_json_round_trip() {
        let asset = VideoAsset {
            display_name: "Week 2 recap".to_string(),
            date_added: "Apr 14, 2014 at 17:48 UTC".to_string(),
            url: "https://cdn.example.com/recap.mp4".to_string(),
            file_size: 104_857_600,
            portable_url: "/static/recap.mp4".to_string(),
        };
        let decoded = VideoAsset::from_json(&asset.to_json_value().to_string()).unwrap();
        assert_eq!(decoded, asset);
    }

    #[test]
    fn test_patch_from_json() {
        let patch: AssetPatch =
            serde_json::from_str(r#"{"display_name": "Intro"}"#).unwrap();
        assert_eq!(patch.display_name.as_deref(), Some("Intro"));
        assert!(patch.file_size.is_none());
        assert!(!patch.is_empty());
    }
}
