use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Pricing category of a catalog item.
///
/// Encoded on the wire (JSON and URL) as its integer discriminant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum PricingOption {
    Paid = 0,
    Free = 1,
    ViewOnly = 2,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unknown pricing option {0}")]
pub struct UnknownPricingOption(pub u8);

impl PricingOption {
    pub const ALL: [PricingOption; 3] = [Self::Paid, Self::Free, Self::ViewOnly];

    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Paid => "Paid",
            Self::Free => "Free",
            Self::ViewOnly => "View Only",
        }
    }
}

impl TryFrom<u8> for PricingOption {
    type Error = UnknownPricingOption;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Self::Paid),
            1 => Ok(Self::Free),
            2 => Ok(Self::ViewOnly),
            other => Err(UnknownPricingOption(other)),
        }
    }
}

impl From<PricingOption> for u8 {
    fn from(option: PricingOption) -> Self {
        option.code()
    }
}

/// A single catalog entry as returned by the remote API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: String,
    pub creator: String,
    pub title: String,
    pub pricing_option: PricingOption,
    pub image_path: String,
    /// Only meaningful when `pricing_option` is `Paid`.
    #[serde(default)]
    pub price: f64,
}

impl Item {
    pub fn is_paid(&self) -> bool {
        self.pricing_option == PricingOption::Paid
    }

    /// Text shown in the price slot of a card.
    pub fn price_label(&self) -> String {
        match self.pricing_option {
            PricingOption::Free => "FREE".to_string(),
            PricingOption::ViewOnly => "View Only".to_string(),
            PricingOption::Paid => format!("$ {}", self.price),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pricing_option_decodes_from_integer() {
        let option: PricingOption = serde_json::from_str("2").unwrap();
        assert_eq!(option, PricingOption::ViewOnly);
        assert!(serde_json::from_str::<PricingOption>("7").is_err());
    }

    #[test]
    fn item_uses_camel_case_fields() {
        let json = r#"{
            "id": "a1",
            "creator": "Ann",
            "title": "Hat",
            "pricingOption": 0,
            "imagePath": "https://img.example/hat.png",
            "price": 42.5
        }"#;
        let item: Item = serde_json::from_str(json).unwrap();
        assert_eq!(item.pricing_option, PricingOption::Paid);
        assert_eq!(item.image_path, "https://img.example/hat.png");
        assert_eq!(item.price_label(), "$ 42.5");
    }

    #[test]
    fn missing_price_defaults_to_zero() {
        let json = r#"{"id":"b","creator":"c","title":"t","pricingOption":1,"imagePath":""}"#;
        let item: Item = serde_json::from_str(json).unwrap();
        assert_eq!(item.price, 0.0);
        assert_eq!(item.price_label(), "FREE");
    }
}
