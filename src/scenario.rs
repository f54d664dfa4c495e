use crate::error::FeedError;
use crate::host::FeedHost;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tabfeed_layout::LayoutConfig;
use tabfeed_sections::Section;
use tabfeed_traits::{SpacingTable, Surface};
use tabfeed_types::Rect;

/// A complete feed description: surface, layout configuration, spacing and sections.
///
/// ```json
/// {
///   "surface": { "bounds": { "width": 390, "height": 844 }, "safeArea": { "top": 47, "bottom": 34 } },
///   "config": { "gapSection": 2, "gapHeightReserve": 50 },
///   "spacing": { "fallback": { "insets": { "left": 16, "right": 16 } } },
///   "sections": [ { "kind": "spacer", "minHeight": 0 } ]
/// }
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scenario {
    #[serde(default)]
    pub name: Option<String>,
    /// Absent means the feed is not hosted yet.
    #[serde(default)]
    pub surface: Option<Surface>,
    #[serde(default)]
    pub config: LayoutConfig,
    #[serde(default)]
    pub spacing: SpacingTable,
    pub sections: Vec<Section>,
}

impl Scenario {
    pub fn from_json(json: &str) -> Result<Self, FeedError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, FeedError> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn into_host(self) -> FeedHost {
        let host = FeedHost::new(self.sections)
            .with_config(self.config)
            .with_spacing(self.spacing);
        match self.surface {
            Some(surface) => host.with_surface(surface),
            None => host,
        }
    }
}

/// Parses `x,y,width,height` into a region.
pub fn parse_region(arg: &str) -> Result<Rect, FeedError> {
    let values = arg
        .split(',')
        .map(|part| part.trim().parse::<f32>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|_| FeedError::InvalidRegion(arg.to_string()))?;

    match values.as_slice() {
        &[x, y, width, height] if width >= 0.0 && height >= 0.0 => {
            Ok(Rect::new(x, y, width, height))
        }
        _ => Err(FeedError::InvalidRegion(arg.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_region() {
        assert_eq!(
            parse_region("0, 100,340,200").unwrap(),
            Rect::new(0.0, 100.0, 340.0, 200.0)
        );
        assert!(matches!(
            parse_region("0,0,10"),
            Err(FeedError::InvalidRegion(_))
        ));
        assert!(parse_region("0,0,-1,10").is_err());
        assert!(parse_region("a,b,c,d").is_err());
    }

    #[test]
    fn test_minimal_scenario_has_no_surface() {
        let scenario = Scenario::from_json(r#"{ "sections": [] }"#).unwrap();
        assert!(scenario.surface.is_none());
        assert_eq!(scenario.config, LayoutConfig::default());
    }

    #[test]
    fn test_malformed_scenario_is_a_json_error() {
        assert!(matches!(
            Scenario::from_json(r#"{ "sections": [ { "kind": "poster" } ] }"#),
            Err(FeedError::Json(_))
        ));
    }
}
