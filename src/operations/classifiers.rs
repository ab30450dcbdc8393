// Single-criterion classifiers over a stash snapshot
use crate::models::{Action, Item, Recommendation, StashItem};
use crate::operations::recycle_value::{deep_recycle_value, RecycleTable};
use crate::v_debug;
use std::collections::HashMap;

/// Stack-level sell and recycle values for one stash entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StackValues {
    pub sell_value: u64,
    pub recycle_value: u64,
}

impl StackValues {
    pub fn of(stash_item: &StashItem, item: &Item, recycle_table: &RecycleTable) -> Self {
        let quantity = u64::from(stash_item.quantity);
        Self {
            sell_value: item.value.saturating_mul(quantity),
            recycle_value: deep_recycle_value(recycle_table, &stash_item.item_id).saturating_mul(quantity),
        }
    }

    /// sell - recycle, clamped to the i64 range
    pub fn margin(&self) -> i64 {
        let margin = i128::from(self.sell_value) - i128::from(self.recycle_value);
        i64::try_from(margin).unwrap_or(if margin > 0 { i64::MAX } else { i64::MIN })
    }

    pub fn margin_magnitude(&self) -> u64 {
        self.sell_value.abs_diff(self.recycle_value)
    }
}

pub(crate) fn build_recommendation(
    stash_item: &StashItem,
    item: &Item,
    values: StackValues,
    action: Action,
) -> Recommendation {
    let name = item.english_name().unwrap_or(stash_item.name.as_str()).to_string();

    Recommendation {
        item_id: stash_item.item_id.clone(),
        name,
        quantity: stash_item.quantity,
        sell_value: values.sell_value,
        recycle_value: values.recycle_value,
        margin: values.margin(),
        action,
    }
}

/// Stacks that fetch more credits sold than recycled, highest sell value first.
///
/// Zero-value items (cosmetics, trinkets) never appear.
pub fn analyze_sell(
    stash: &[StashItem],
    items: &HashMap<String, Item>,
    recycle_table: &RecycleTable,
) -> Vec<Recommendation> {
    let mut recommendations: Vec<Recommendation> = stash
        .iter()
        .filter_map(|stash_item| {
            let item = items.get(&stash_item.item_id)?;
            if item.value == 0 {
                return None;
            }
            let values = StackValues::of(stash_item, item, recycle_table);
            (values.sell_value > values.recycle_value)
                .then(|| build_recommendation(stash_item, item, values, Action::Sell))
        })
        .collect();

    recommendations.sort_by(|a, b| b.sell_value.cmp(&a.sell_value));
    v_debug!("💰 Sell analysis: {} of {} stacks", recommendations.len(), stash.len());
    recommendations
}

/// Stacks worth more recycled than sold, biggest recycle advantage first.
pub fn analyze_recycle(
    stash: &[StashItem],
    items: &HashMap<String, Item>,
    recycle_table: &RecycleTable,
) -> Vec<Recommendation> {
    let mut recommendations: Vec<Recommendation> = stash
        .iter()
        .filter_map(|stash_item| {
            let item = items.get(&stash_item.item_id)?;
            if item.is_base_material() {
                return None;
            }
            let values = StackValues::of(stash_item, item, recycle_table);
            (values.recycle_value > values.sell_value)
                .then(|| build_recommendation(stash_item, item, values, Action::Recycle))
        })
        .collect();

    recommendations.sort_by_key(|rec| rec.margin);
    v_debug!("♻️ Recycle analysis: {} of {} stacks", recommendations.len(), stash.len());
    recommendations
}
