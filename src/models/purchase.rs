use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// PurchaseDetail — One line of a customer's purchase history
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseDetail {
    pub date: String,
    pub quantity: u32,
    pub product: String,
    pub price: f64,
    pub img_src: String,
}
