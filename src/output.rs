use serde::{Deserialize, Serialize};

/// How the platform combines discounts when more than one applies.
///
/// Names this crate does not know are kept as they are in `Other`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DiscountApplicationStrategy {
    #[default]
    First,
    Maximum,
    #[serde(untagged)]
    Other(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TargetType {
    OrderSubtotal,
    ProductVariant,
}

/// The document a discount function writes to stdout.
///
/// The default value is the response of a function with nothing to discount:
/// no discounts, applied with the `FIRST` strategy.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionResult {
    pub discounts: Vec<Discount>,
    pub discount_application_strategy: DiscountApplicationStrategy,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Discount {
    pub message: Option<String>,
    pub conditions: Option<Vec<Condition>>,
    pub targets: Vec<Target>,
    pub value: DiscountValue,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Target {
    pub product_variant: Option<ProductVariantTarget>,
    pub order_subtotal: Option<OrderSubtotalTarget>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductVariantTarget {
    pub id: String,
    pub quantity: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderSubtotalTarget {
    pub excluded_variant_ids: Vec<String>,
}

/// Exactly one of the two is expected to be set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscountValue {
    pub percentage: Option<Percentage>,
    pub fixed_amount: Option<FixedAmount>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Percentage {
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FixedAmount {
    pub value: f64,
    pub applies_to_each_item: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Condition {
    pub product_minimum_quantity: Option<ProductMinimumQuantity>,
    pub product_minimum_subtotal: Option<ProductMinimumSubtotal>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductMinimumQuantity {
    pub ids: Vec<String>,
    pub minimum_quantity: i64,
    pub target_type: TargetType,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductMinimumSubtotal {
    pub ids: Vec<String>,
    pub minimum_amount: f64,
    pub target_type: TargetType,
}
