use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// PriceBucketStat — Purchases aggregated over one price range
// ---------------------------------------------------------------------------

/// One bar of the purchase frequency chart.
///
/// `range` is `"<min> - <max>"` in won, as produced by the backend
/// aggregation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceBucketStat {
    pub range: String,
    pub count: u64,
    #[serde(default)]
    pub revenue: f64,
}
