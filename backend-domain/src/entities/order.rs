// Order and placement records joined for the weight/volume summary

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(default)]
    pub status_id: Option<i64>,
    #[serde(default)]
    pub products: Vec<OrderProduct>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderProduct {
    pub parameter_product_id: String,
    #[serde(default)]
    pub amount: i64,
}

/// Physical attributes of a product. Dimensions and weight are stored
/// pre-scaled by 100 (hundredths of a meter / kilogram).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacementParameter {
    pub product_id: String,
    #[serde(default)]
    pub width: Option<f64>,
    #[serde(default)]
    pub length: Option<f64>,
    #[serde(default)]
    pub height: Option<f64>,
    #[serde(default)]
    pub weight: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderSummary {
    pub total_orders: u64,
    pub total_products: i64,
    pub total_weight_kg: f64,
    pub total_volume_m3: f64,
    /// Order line items whose parameterProductId had no placement record.
    pub unjoined_products: u64,
}
