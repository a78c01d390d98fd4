use std::fmt;

use once_cell::sync::Lazy;
use rand::Rng;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::constants::{DISCOUNT_RANGE, FALLBACK_DISCOUNT};

static DISCOUNT_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d+)%").unwrap());

/// A single wheel segment.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Prize {
    #[serde(default)]
    pub id: i64,
    pub name: String,
    pub color: String,
    /// Selection weight in `[0, 1]`. Serialized as `probability` to match the embed payload.
    #[serde(rename = "probability", alias = "weight")]
    pub weight: f64,
}

impl Prize {
    pub fn new(id: i64, name: impl Into<String>, color: impl Into<String>, weight: f64) -> Self {
        Self {
            id,
            name: name.into(),
            color: color.into(),
            weight,
        }
    }

    /// First `NN%` found in the prize name.
    pub fn discount_percent(&self) -> Option<u32> {
        DISCOUNT_PATTERN
            .captures(&self.name)
            .and_then(|caps| caps.get(1))
            .and_then(|m| m.as_str().parse().ok())
    }

    /// Discount carried into the lead form. Prizes without a percent in
    /// their name claim [`FALLBACK_DISCOUNT`].
    pub fn claimed_discount(&self) -> String {
        self.discount_percent()
            .map(|percent| percent.to_string())
            .unwrap_or_else(|| FALLBACK_DISCOUNT.to_string())
    }

    /// "25% Discount" -> "25%"
    pub fn short_label(&self) -> String {
        self.name.replace("% Discount", "%")
    }

    /// Color present, weight in `[0, 1]`, and any `NN%` in the name inside
    /// [`DISCOUNT_RANGE`] so the lead form will accept the claim.
    pub fn is_valid(&self) -> bool {
        let discount_ok = if DISCOUNT_PATTERN.is_match(&self.name) {
            self.discount_percent().map_or(false, |percent| DISCOUNT_RANGE.contains(&percent))
        } else {
            true
        };

        discount_ok && !self.color.trim().is_empty() && self.weight.is_finite() && (0.0..=1.0).contains(&self.weight)
    }
}

/// Raw entry as returned by the remote prize endpoint.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ApiPrize {
    pub id: i64,
    pub hex_color: String,
    pub discount_percent: f64,
    pub probability: f64,
}

impl ApiPrize {
    /// `discount_percent` is a fraction; `0.125` becomes "13% Discount".
    fn into_prize(self) -> Option<Prize> {
        if !self.discount_percent.is_finite() || self.discount_percent < 0.0 {
            return None;
        }
        let percent = (self.discount_percent * 100.0).round() as i64;
        Some(Prize {
            id: self.id,
            name: format!("{}% Discount", percent),
            color: self.hex_color.trim().to_string(),
            weight: self.probability,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum CatalogError {
    Empty,
    Malformed(String),
    Status(u16),
    Network(String),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Empty => write!(f, "prize catalog is empty"),
            CatalogError::Malformed(e) => write!(f, "malformed prize response: {}", e),
            CatalogError::Status(code) => write!(f, "prize endpoint returned status {}", code),
            CatalogError::Network(e) => write!(f, "network error fetching prizes: {}", e),
        }
    }
}

impl std::error::Error for CatalogError {}

/// Ordered, non-empty list of prizes shown on the wheel.
#[derive(Debug, Clone, PartialEq)]
pub struct PrizeCatalog {
    prizes: Vec<Prize>,
}

impl Default for PrizeCatalog {
    fn default() -> Self {
        Self {
            prizes: vec![
                Prize::new(1, "25% Discount", "#FF5733", 0.04),
                Prize::new(2, "5% Discount", "#33FF57", 0.8),
                Prize::new(3, "15% Discount", "#3357FF", 0.1),
                Prize::new(4, "50% Discount", "#F333FF", 0.001),
                Prize::new(5, "1% Discount", "#FFC300", 0.05),
            ],
        }
    }
}

impl PrizeCatalog {
    pub fn new(prizes: Vec<Prize>) -> Result<Self, CatalogError> {
        if prizes.is_empty() {
            return Err(CatalogError::Empty);
        }
        Ok(Self { prizes })
    }

    /// Keeps the well-formed entries, in order.
    pub fn from_api(entries: Vec<ApiPrize>) -> Result<Self, CatalogError> {
        let prizes = entries
            .into_iter()
            .filter_map(|entry| {
                let id = entry.id;
                let prize = entry.into_prize();
                if prize.is_none() {
                    log::warn!("Dropping malformed prize entry {}", id);
                }
                prize
            })
            .collect();
        Self::from_prizes(prizes)
    }

    /// Keeps the prizes that pass [`Prize::is_valid`], in order. Entries
    /// without an id are numbered by their position in the input.
    pub fn from_prizes(prizes: Vec<Prize>) -> Result<Self, CatalogError> {
        let prizes = prizes
            .into_iter()
            .enumerate()
            .filter_map(|(index, mut prize)| {
                if !prize.is_valid() {
                    log::warn!("Dropping malformed prize '{}'", prize.name);
                    return None;
                }
                prize.color = prize.color.trim().to_string();
                if prize.id == 0 {
                    prize.id = index as i64 + 1;
                }
                Some(prize)
            })
            .collect();
        Self::new(prizes)
    }

    /// Parses a JSON array body. Entries that fail to deserialize are dropped
    /// individually instead of failing the whole response.
    pub fn from_api_json(body: &str) -> Result<Self, CatalogError> {
        let values: Vec<serde_json::Value> =
            serde_json::from_str(body).map_err(|e| CatalogError::Malformed(e.to_string()))?;

        let entries = values
            .into_iter()
            .filter_map(|value| match serde_json::from_value::<ApiPrize>(value) {
                Ok(entry) => Some(entry),
                Err(e) => {
                    log::warn!("Skipping unreadable prize entry: {}", e);
                    None
                }
            })
            .collect();

        Self::from_api(entries)
    }

    /// Resolves any fetch or parse outcome into a usable catalog.
    pub fn or_default(result: Result<Self, CatalogError>) -> Self {
        result.unwrap_or_else(|e| {
            log::warn!("Failed to load wheel prizes ({}), using defaults", e);
            Self::default()
        })
    }

    pub fn prizes(&self) -> &[Prize] {
        &self.prizes
    }

    pub fn len(&self) -> usize {
        self.prizes.len()
    }

    /// Never true for a constructed catalog.
    pub fn is_empty(&self) -> bool {
        self.prizes.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Prize> {
        self.prizes.get(index)
    }

    /// Degrees covered by each segment.
    pub fn segment_degrees(&self) -> f64 {
        360.0 / self.prizes.len() as f64
    }

    pub fn weights(&self) -> Vec<f64> {
        self.prizes.iter().map(|p| p.weight).collect()
    }

    pub fn choose_weighted<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        choose_weighted_index(&self.weights(), rng).unwrap_or(0)
    }
}

/// Picks an index proportionally to `weights`.
///
/// Weights are normalized by their sum, so they need not add up to 1.
/// Negative or non-finite weights count as zero. When nothing carries
/// weight the pick is uniform over all positions.
pub fn choose_weighted_index<R: Rng + ?Sized>(weights: &[f64], rng: &mut R) -> Option<usize> {
    if weights.is_empty() {
        return None;
    }

    let clean = |w: f64| if w.is_finite() && w > 0.0 { w } else { 0.0 };
    let total: f64 = weights.iter().copied().map(clean).sum();
    if total <= 0.0 {
        return Some(rng.gen_range(0..weights.len()));
    }

    let target = rng.gen::<f64>() * total;
    let mut cumulative = 0.0;
    let mut last_weighted = 0;
    for (i, w) in weights.iter().copied().map(clean).enumerate() {
        if w == 0.0 {
            continue;
        }
        cumulative += w;
        last_weighted = i;
        if target < cumulative {
            return Some(i);
        }
    }

    // Float rounding can leave `target` a hair past the final sum.
    Some(last_weighted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_default_catalog() {
        let catalog = PrizeCatalog::default();
        assert_eq!(catalog.len(), 5);
        assert_eq!(catalog.get(0).unwrap().name, "25% Discount");
        assert_eq!(catalog.segment_degrees(), 72.0);
    }

    #[test]
    fn test_empty_catalog_rejected() {
        assert_eq!(PrizeCatalog::new(vec![]), Err(CatalogError::Empty));
        assert_eq!(PrizeCatalog::from_api_json("[]"), Err(CatalogError::Empty));
        assert_eq!(
            PrizeCatalog::or_default(PrizeCatalog::from_api_json("[]")),
            PrizeCatalog::default()
        );
    }

    #[test]
    fn test_failed_fetch_falls_back_to_defaults() {
        let catalog = PrizeCatalog::or_default(Err(CatalogError::Status(500)));
        assert_eq!(catalog, PrizeCatalog::default());
    }

    #[test]
    fn test_api_entries_are_normalized() {
        let body = r##"[
            {"id": 7, "hex_color": "#123456", "discount_percent": 0.2, "probability": 0.5},
            {"id": 8, "hex_color": "#abcdef", "discount_percent": 0.125, "probability": 0.5}
        ]"##;
        let catalog = PrizeCatalog::from_api_json(body).unwrap();
        assert_eq!(catalog.prizes()[0], Prize::new(7, "20% Discount", "#123456", 0.5));
        assert_eq!(catalog.prizes()[1].name, "13% Discount");
    }

    #[test]
    fn test_malformed_entries_dropped_individually() {
        let body = r##"[
            {"id": 1, "hex_color": "", "discount_percent": 0.1, "probability": 0.2},
            {"id": 2, "hex_color": "#000", "discount_percent": 0.1, "probability": 1.5},
            {"id": 3, "discount_percent": 0.1, "probability": 0.2},
            {"id": 4, "hex_color": "#fff", "discount_percent": 0.3, "probability": 0.2}
        ]"##;
        let catalog = PrizeCatalog::from_api_json(body).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.prizes()[0].id, 4);
    }

    #[test]
    fn test_non_array_body_is_malformed() {
        assert!(matches!(
            PrizeCatalog::from_api_json(r#"{"error": "nope"}"#),
            Err(CatalogError::Malformed(_))
        ));
    }

    #[test]
    fn test_discount_parsing() {
        let prize = Prize::new(1, "15% Discount", "#000", 0.1);
        assert_eq!(prize.discount_percent(), Some(15));
        assert_eq!(prize.short_label(), "15%");
        assert_eq!(Prize::new(2, "Free shipping", "#000", 0.1).discount_percent(), None);
    }

    #[test]
    fn test_claimed_discount_falls_back_without_percent() {
        assert_eq!(Prize::new(1, "15% Discount", "#000", 0.1).claimed_discount(), "15");
        assert_eq!(Prize::new(2, "Free shipping", "#000", 0.1).claimed_discount(), "5");
    }

    #[test]
    fn test_api_discounts_outside_form_range_dropped() {
        let body = r##"[
            {"id": 1, "hex_color": "#111", "discount_percent": 0.0, "probability": 0.2},
            {"id": 2, "hex_color": "#222", "discount_percent": 0.004, "probability": 0.2},
            {"id": 3, "hex_color": "#333", "discount_percent": 1.5, "probability": 0.2},
            {"id": 4, "hex_color": "#444", "discount_percent": -0.5, "probability": 0.2},
            {"id": 5, "hex_color": "#555", "discount_percent": 0.01, "probability": 0.2},
            {"id": 6, "hex_color": "#666", "discount_percent": 1.0, "probability": 0.2}
        ]"##;
        let catalog = PrizeCatalog::from_api_json(body).unwrap();
        let ids: Vec<i64> = catalog.prizes().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![5, 6]);
        assert_eq!(catalog.prizes()[0].name, "1% Discount");
        assert_eq!(catalog.prizes()[1].name, "100% Discount");
        for prize in catalog.prizes() {
            assert!(crate::lead::validate_discount(&prize.claimed_discount()).is_ok());
        }
    }

    #[test]
    fn test_override_prizes_are_validated() {
        let prizes: Vec<Prize> = serde_json::from_str(
            r##"[
                {"name": "10% Discount", "color": "", "probability": -3.0},
                {"name": "20% Discount", "color": "   ", "probability": 7.5},
                {"name": "0% Discount", "color": "#000", "probability": 0.2},
                {"name": "150% Discount", "color": "#000", "probability": 0.2},
                {"name": "30% Discount", "color": " #abc ", "probability": 0.5},
                {"id": 42, "name": "Free shipping", "color": "#def", "weight": 0.5}
            ]"##,
        )
        .unwrap();
        let catalog = PrizeCatalog::from_prizes(prizes).unwrap();
        assert_eq!(
            catalog.prizes().to_vec(),
            vec![
                Prize::new(5, "30% Discount", "#abc", 0.5),
                Prize::new(42, "Free shipping", "#def", 0.5),
            ]
        );

        let all_bad = vec![Prize::new(1, "10% Discount", "", 0.5)];
        assert_eq!(PrizeCatalog::from_prizes(all_bad), Err(CatalogError::Empty));
    }

    #[test]
    fn test_prize_serializes_weight_as_probability() {
        let json = serde_json::to_value(Prize::new(1, "5% Discount", "#33FF57", 0.8)).unwrap();
        assert_eq!(json["probability"], 0.8);
        assert!(json.get("weight").is_none());
    }

    #[test]
    fn test_weighted_choice_skips_zero_weights() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let index = choose_weighted_index(&[0.0, 1.0, 0.0], &mut rng).unwrap();
            assert_eq!(index, 1);
        }
    }

    #[test]
    fn test_weighted_choice_without_weight_is_uniform_in_range() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut seen = [false; 4];
        for _ in 0..400 {
            let index = choose_weighted_index(&[0.0; 4], &mut rng).unwrap();
            seen[index] = true;
        }
        assert!(seen.iter().all(|s| *s));
        assert_eq!(choose_weighted_index(&[], &mut rng), None);
    }

    #[test]
    fn test_weighted_choice_follows_weights() {
        let mut rng = StdRng::seed_from_u64(3);
        let catalog = PrizeCatalog::default();
        let mut counts = [0usize; 5];
        for _ in 0..10_000 {
            counts[catalog.choose_weighted(&mut rng)] += 1;
        }
        // "5% Discount" carries 0.8 of ~0.991 total weight.
        assert!(counts[1] > 7_500);
        assert!(counts[3] < 100);
    }
}
