//! Fixed-income holding records as delivered by the portfolio API.
//!
//! A [`Holding`] groups three projections that the viewer renders side
//! by side: product identity, position figures, and due-date figures.
//! The viewer never mutates holdings; it only derives filtered, sorted
//! and sliced views of an externally owned list.

/// Stable identifier for a portfolio product, used as the render key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ProductId(u64);

impl ProductId {
    pub fn new(id: u64) -> Self {
        ProductId(id)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ProductId {
    fn from(id: u64) -> Self {
        ProductId(id)
    }
}

/// Identity group of a holding: what the product is.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct FixedIncome {
    pub portfolio_product_id: ProductId,
    pub name: String,
    pub bond_type: String,
}

/// Position group of a holding: how much is in it and how it performs.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Position {
    pub value_applied: f64,
    pub equity: f64,
    pub profitability: f64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub portfolio_percentage: f64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub indexer_label: String,
}

impl Position {
    /// Indexer label for display, or a placeholder when the API
    /// omits it.
    pub fn indexer_display(&self) -> &str {
        if self.indexer_label.is_empty() {
            "-"
        } else {
            &self.indexer_label
        }
    }
}

/// Due group of a holding: when it matures.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Due {
    /// Maturity date as a unix timestamp, seconds.
    #[cfg_attr(feature = "serde", serde(default))]
    pub date: i64,
    pub days_until_expiration: i64,
}

/// One fixed-income investment position held by the user.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Holding {
    pub fixed_income: FixedIncome,
    pub position: Position,
    pub due: Due,
}

impl Holding {
    /// Whether this holding survives the current search text.
    ///
    /// An empty query matches everything; otherwise the product name
    /// must contain the query as a case-insensitive substring. No
    /// trimming and no diacritic folding, so "Imoveis" will not match
    /// "Imóveis".
    pub fn matches_search(&self, query: &str) -> bool {
        query.is_empty()
            || self
                .fixed_income
                .name
                .to_lowercase()
                .contains(&query.to_lowercase())
    }

    /// Render key for this holding.
    pub fn id(&self) -> ProductId {
        self.fixed_income.portfolio_product_id
    }

    /// Reject records the viewer cannot render meaningfully.
    ///
    /// The API occasionally ships partial snapshots; a holding with no
    /// name cannot be searched and non-finite money fields would poison
    /// the sorted order.
    pub fn validate(&self) -> crate::error::Result<()> {
        use crate::error::ModelError;

        if self.fixed_income.name.is_empty() {
            return Err(ModelError::InvalidHolding(format!(
                "product {} has an empty name",
                self.fixed_income.portfolio_product_id
            )));
        }
        for (field, value) in [
            ("valueApplied", self.position.value_applied),
            ("equity", self.position.equity),
            ("profitability", self.position.profitability),
        ] {
            if !value.is_finite() {
                return Err(ModelError::InvalidHolding(format!(
                    "product {} has a non-finite {field}",
                    self.fixed_income.portfolio_product_id
                )));
            }
        }
        Ok(())
    }
}
