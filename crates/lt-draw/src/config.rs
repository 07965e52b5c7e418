//! Draw configuration

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use lt_core::{ContainerKind, LtError, LtResult};

use crate::edition::Edition;
use crate::selector::SelectionMode;
use crate::tier::{PrizeTier, validate_tiers};

/// Everything needed to run one draw
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawConfig {
    /// Tickets issued and sold
    pub edition: Edition,

    /// Prize tiers, in assignment order
    pub tiers: Vec<PrizeTier>,

    /// Container family used for tickets and winners
    #[serde(default)]
    pub container: ContainerKind,

    /// How the sold-ticket budget is spent during selection
    #[serde(default)]
    pub selection: SelectionMode,

    /// Random seed for reproducibility (None = OS entropy)
    #[serde(default)]
    pub seed: Option<u64>,
}

impl DrawConfig {
    /// Tiers used by both presets: one 4, two 3s, three 2s, four 1s
    pub fn standard_tiers() -> Vec<PrizeTier> {
        vec![
            PrizeTier::new(1, 4),
            PrizeTier::new(2, 3),
            PrizeTier::new(3, 2),
            PrizeTier::new(4, 1),
        ]
    }

    /// Full-size edition: 25M tickets, 20M sold
    pub fn classic() -> Self {
        Self {
            edition: Edition::preset(25_000_000, 20_000_000),
            tiers: Self::standard_tiers(),
            container: ContainerKind::Vector,
            selection: SelectionMode::WinnersOnly,
            seed: None,
        }
    }

    /// Small edition for quick runs and tests
    pub fn small() -> Self {
        Self {
            edition: Edition::preset(1_000, 800),
            ..Self::classic()
        }
    }

    /// Builder: set seed for reproducibility
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Builder: set container family
    pub fn with_container(mut self, container: ContainerKind) -> Self {
        self.container = container;
        self
    }

    /// Builder: set edition
    pub fn with_edition(mut self, edition: Edition) -> Self {
        self.edition = edition;
        self
    }

    /// Builder: set prize tiers
    pub fn with_tiers(mut self, tiers: Vec<PrizeTier>) -> Self {
        self.tiers = tiers;
        self
    }

    /// Builder: set selection mode
    pub fn with_selection(mut self, selection: SelectionMode) -> Self {
        self.selection = selection;
        self
    }

    /// Check edition and tiers together
    pub fn validate(&self) -> LtResult<()> {
        self.edition.validate()?;
        if self.edition.sold_tickets() == 0 {
            return Err(LtError::invalid("a draw needs at least one sold ticket"));
        }
        validate_tiers(&self.tiers, self.edition.total_tickets() as u32)?;
        Ok(())
    }

    /// Serialize to pretty JSON
    pub fn to_json(&self) -> LtResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| LtError::Config(e.to_string()))
    }

    /// Parse and validate JSON
    pub fn from_json(json: &str) -> LtResult<Self> {
        let config: Self = serde_json::from_str(json).map_err(|e| LtError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a JSON file
    pub fn load(path: impl AsRef<Path>) -> LtResult<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::debug!("Loaded draw config from {}", path.display());
        Ok(config)
    }

    /// Save as a JSON file
    pub fn save(&self, path: impl AsRef<Path>) -> LtResult<()> {
        fs::write(path, self.to_json()?)?;
        Ok(())
    }
}

impl Default for DrawConfig {
    fn default() -> Self {
        Self::small()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = DrawConfig::default();
        assert_eq!(config.edition.total_tickets(), 1_000);
        assert_eq!(config.tiers.len(), 4);
        assert_eq!(config.container, ContainerKind::Vector);
        assert!(config.seed.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_classic_preset() {
        let config = DrawConfig::classic();
        assert_eq!(config.edition.total_tickets(), 25_000_000);
        assert_eq!(config.edition.sold_tickets(), 20_000_000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = DrawConfig::default()
            .with_seed(42)
            .with_container(ContainerKind::Stack)
            .with_selection(SelectionMode::FirstSold)
            .with_tiers(vec![PrizeTier::new(2, 100)]);

        assert_eq!(config.seed, Some(42));
        assert_eq!(config.container, ContainerKind::Stack);
        assert_eq!(config.selection, SelectionMode::FirstSold);
        assert_eq!(config.tiers, vec![PrizeTier::new(2, 100)]);
    }

    #[test]
    fn test_validate_rejects_bad_configs() {
        let too_many = DrawConfig::default()
            .with_edition(Edition::new(3, 3).unwrap())
            .with_tiers(vec![PrizeTier::new(4, 1)]);
        assert!(too_many.validate().unwrap_err().is_invalid_argument());

        let unsold = DrawConfig::default().with_edition(Edition::new(10, 0).unwrap());
        assert!(unsold.validate().is_err());

        let no_tiers = DrawConfig::default().with_tiers(Vec::new());
        assert!(no_tiers.validate().is_err());
    }

    #[test]
    fn test_json_roundtrip_and_defaults() {
        let config = DrawConfig::default()
            .with_seed(7)
            .with_container(ContainerKind::ForwardList);
        let parsed = DrawConfig::from_json(&config.to_json().unwrap()).unwrap();
        assert_eq!(parsed, config);

        let minimal = r#"{
            "edition": { "total_tickets": 10, "sold_tickets": 10 },
            "tiers": [ { "count": 2, "value": 100 } ]
        }"#;
        let parsed = DrawConfig::from_json(minimal).unwrap();
        assert_eq!(parsed.container, ContainerKind::Vector);
        assert_eq!(parsed.selection, SelectionMode::WinnersOnly);
        assert_eq!(parsed.seed, None);
    }

    #[test]
    fn test_from_json_errors() {
        assert!(matches!(
            DrawConfig::from_json("{ not json"),
            Err(LtError::Config(_))
        ));
        let invalid = r#"{
            "edition": { "total_tickets": -5, "sold_tickets": 0 },
            "tiers": [ { "count": 1, "value": 1 } ]
        }"#;
        assert!(DrawConfig::from_json(invalid).unwrap_err().is_invalid_argument());
    }

    #[test]
    fn test_file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("draw.json");

        let config = DrawConfig::default().with_seed(99);
        config.save(&path).unwrap();
        assert_eq!(DrawConfig::load(&path).unwrap(), config);

        let missing = dir.path().join("missing.json");
        assert!(matches!(DrawConfig::load(missing), Err(LtError::Io(_))));
    }
}
