//! User-selectable sort keys for the holdings list.

use std::cmp::Ordering;
use std::fmt;

use crate::holding::Holding;

/// One column of the holdings list that the user can sort by.
///
/// Each key carries a fixed direction: the textual keys sort
/// ascending, the money/return keys sort descending (largest position
/// first), and days-until-expiration sorts ascending (nearest maturity
/// first). There is no direction toggle; the directions are part of
/// the key's meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Name,
    BondType,
    ValueApplied,
    Equity,
    Profitability,
    DaysUntilExpiration,
}

impl SortKey {
    pub fn all() -> &'static [SortKey] {
        use SortKey::*;
        &[
            Name,
            BondType,
            ValueApplied,
            Equity,
            Profitability,
            DaysUntilExpiration,
        ]
    }

    /// Display label for the sort picker.
    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Name => "Nome",
            SortKey::BondType => "Classe",
            SortKey::ValueApplied => "Valor Investido",
            SortKey::Equity => "Saldo Bruto",
            SortKey::Profitability => "Rentabilidade",
            SortKey::DaysUntilExpiration => "Dias até Vencimento",
        }
    }

    /// Compare two holdings under this key.
    ///
    /// Float fields use `partial_cmp` with an `Equal` fallback so a
    /// NaN coming out of the API cannot panic the sort.
    pub fn compare(&self, a: &Holding, b: &Holding) -> Ordering {
        match self {
            SortKey::Name => {
                compare_text(&a.fixed_income.name, &b.fixed_income.name)
            }
            SortKey::BondType => compare_text(
                &a.fixed_income.bond_type,
                &b.fixed_income.bond_type,
            ),
            // Descending: biggest invested amount first
            SortKey::ValueApplied => b
                .position
                .value_applied
                .partial_cmp(&a.position.value_applied)
                .unwrap_or(Ordering::Equal),
            // Descending: biggest gross balance first
            SortKey::Equity => b
                .position
                .equity
                .partial_cmp(&a.position.equity)
                .unwrap_or(Ordering::Equal),
            // Descending: best return first
            SortKey::Profitability => b
                .position
                .profitability
                .partial_cmp(&a.position.profitability)
                .unwrap_or(Ordering::Equal),
            // Ascending: nearest maturity first
            SortKey::DaysUntilExpiration => a
                .due
                .days_until_expiration
                .cmp(&b.due.days_until_expiration),
        }
    }
}

/// Collation for the textual sort keys.
///
/// Case folds before comparing so "acme" sorts before "Zeta", the
/// order users get from locale-aware collation; raw code-point order
/// breaks ties so equal-folding names still compare deterministically.
fn compare_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
