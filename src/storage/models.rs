use serde::{Deserialize, Serialize};

/// 挂单方向：求购或出售
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListingKind {
    Buy,
    Sell,
}

impl ListingKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ListingKind::Buy => "buy",
            ListingKind::Sell => "sell",
        }
    }
}

impl std::fmt::Display for ListingKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ListingKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "buy" => Ok(ListingKind::Buy),
            "sell" => Ok(ListingKind::Sell),
            _ => Err(format!("Invalid listing type: '{}'. Valid: buy, sell", s)),
        }
    }
}

/// 一条买/卖挂单记录
///
/// `views` 与 `clicks` 只增不减；评分不落库，读取时由
/// `services::rating` 现算。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub id: String,
    pub kind: ListingKind,
    pub category: String,
    pub details: String,
    pub rate: f64,
    pub unit: String,
    pub city: String,
    pub user_name: String,
    #[serde(default)]
    pub views: usize,
    #[serde(default)]
    pub clicks: usize,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
