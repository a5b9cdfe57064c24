//! Geological layers published by the BGS 1:50,000 WMS
//!
//! Maps the friendly names used by the tool surface onto the technical WMS
//! layer identifiers.

use crate::error::{Error, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A geological data layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GeologyLayer {
    Bedrock,
    SuperficialDeposits,
    ArtificialGround,
    MassMovement,
    LinearFeatures,
}

impl GeologyLayer {
    /// All layers, in the order the service documents them
    pub const ALL: [GeologyLayer; 5] = [
        GeologyLayer::Bedrock,
        GeologyLayer::SuperficialDeposits,
        GeologyLayer::ArtificialGround,
        GeologyLayer::MassMovement,
        GeologyLayer::LinearFeatures,
    ];

    /// Friendly name used in tool arguments
    pub fn name(&self) -> &'static str {
        match self {
            GeologyLayer::Bedrock => "bedrock",
            GeologyLayer::SuperficialDeposits => "superficial_deposits",
            GeologyLayer::ArtificialGround => "artificial_ground",
            GeologyLayer::MassMovement => "mass_movement",
            GeologyLayer::LinearFeatures => "linear_features",
        }
    }

    /// WMS layer identifier
    pub fn wms_name(&self) -> &'static str {
        match self {
            GeologyLayer::Bedrock => "BGS.50k.Bedrock",
            GeologyLayer::SuperficialDeposits => "BGS.50k.Superficial.deposits",
            GeologyLayer::ArtificialGround => "BGS.50k.Artificial.ground",
            GeologyLayer::MassMovement => "BGS.50k.Mass.movement",
            GeologyLayer::LinearFeatures => "BGS.50k.Linear.features",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            GeologyLayer::Bedrock => "Bedrock geology - solid rocks beneath superficial deposits",
            GeologyLayer::SuperficialDeposits => {
                "Superficial deposits - unconsolidated sediments above bedrock"
            }
            GeologyLayer::ArtificialGround => {
                "Artificial ground - made ground, worked ground, infilled ground"
            }
            GeologyLayer::MassMovement => {
                "Mass movement deposits - landslides, rockfall, debris flows"
            }
            GeologyLayer::LinearFeatures => {
                "Linear geological features - faults, dykes, mineral veins"
            }
        }
    }

    /// Look up a layer by its WMS identifier
    pub fn from_wms_name(wms_name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|l| l.wms_name() == wms_name)
    }

    /// Resolve a tool argument that may be a friendly name or a WMS identifier
    pub fn resolve(name: &str) -> Result<Self> {
        name.parse()
            .or_else(|err| Self::from_wms_name(name.trim()).ok_or(err))
    }

    /// Comma-separated friendly names, for error messages
    pub fn available_names() -> String {
        Self::ALL
            .iter()
            .map(|l| l.name())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for GeologyLayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for GeologyLayer {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|l| l.name() == wanted)
            .ok_or_else(|| {
                Error::UnknownLayer(format!(
                    "'{}'. Available: {}",
                    s,
                    Self::available_names()
                ))
            })
    }
}

/// One entry of the layer catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayerInfo {
    /// WMS layer identifier
    pub layer_name: String,
    pub description: String,
}

/// Friendly name -> layer details, in [`GeologyLayer::ALL`] order
pub type LayerCatalog = IndexMap<String, LayerInfo>;

/// Build the catalog of all layers
pub fn layer_catalog() -> LayerCatalog {
    GeologyLayer::ALL
        .iter()
        .map(|layer| {
            (
                layer.name().to_string(),
                LayerInfo {
                    layer_name: layer.wms_name().to_string(),
                    description: layer.description().to_string(),
                },
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolver_table() {
        let expected = [
            ("bedrock", "BGS.50k.Bedrock"),
            ("superficial_deposits", "BGS.50k.Superficial.deposits"),
            ("artificial_ground", "BGS.50k.Artificial.ground"),
            ("mass_movement", "BGS.50k.Mass.movement"),
            ("linear_features", "BGS.50k.Linear.features"),
        ];

        for (name, wms) in expected {
            let layer: GeologyLayer = name.parse().unwrap();
            assert_eq!(layer.wms_name(), wms);
            assert_eq!(layer.name(), name);
        }
    }

    #[test]
    fn test_unknown_layer() {
        for name in ["", "granite", "Bedrock", "BGS.50k.Bedrock", "bedrock_"] {
            let result = name.parse::<GeologyLayer>();
            assert!(
                matches!(result, Err(Error::UnknownLayer(_))),
                "'{}' should be unknown",
                name
            );
        }
    }

    #[test]
    fn test_unknown_layer_lists_available() {
        let err = "granite".parse::<GeologyLayer>().unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("granite"));
        assert!(msg.contains("bedrock, superficial_deposits"));
    }

    #[test]
    fn test_from_wms_name() {
        assert_eq!(
            GeologyLayer::from_wms_name("BGS.50k.Mass.movement"),
            Some(GeologyLayer::MassMovement)
        );
        assert_eq!(GeologyLayer::from_wms_name("mass_movement"), None);
    }

    #[test]
    fn test_resolve_accepts_both_forms() {
        assert_eq!(
            GeologyLayer::resolve("bedrock").unwrap(),
            GeologyLayer::Bedrock
        );
        assert_eq!(
            GeologyLayer::resolve("BGS.50k.Superficial.deposits").unwrap(),
            GeologyLayer::SuperficialDeposits
        );
        assert!(matches!(
            GeologyLayer::resolve("BGS.50k.Granite"),
            Err(Error::UnknownLayer(_))
        ));
    }

    #[test]
    fn test_catalog() {
        let catalog = layer_catalog();
        assert_eq!(catalog.len(), 5);
        assert_eq!(catalog["bedrock"].layer_name, "BGS.50k.Bedrock");
        assert!(catalog["linear_features"].description.contains("faults"));
    }

    #[test]
    fn test_catalog_keeps_layer_order() {
        let catalog = layer_catalog();
        let names: Vec<&str> = catalog.keys().map(String::as_str).collect();
        let expected: Vec<&str> = GeologyLayer::ALL.iter().map(|l| l.name()).collect();
        assert_eq!(names, expected);
        assert_eq!(names[0], "bedrock");
    }

    #[test]
    fn test_serde_name_matches_friendly_name() {
        for layer in GeologyLayer::ALL {
            let json = serde_json::to_string(&layer).unwrap();
            assert_eq!(json, format!("\"{}\"", layer.name()));
        }
    }
}
