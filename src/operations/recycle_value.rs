// Recycle valuation - credit value of recycling items down to base materials
use crate::models::Item;
use crate::v_debug;
use std::collections::{HashMap, HashSet};

/// item_id -> deep recycle value of a single unit
pub type RecycleTable = HashMap<String, u64>;

/// Resolve every catalog item's recycle chain and record its per-unit value.
///
/// At each material the better of selling it outright or recycling it further
/// is taken, multiplied by the yield and summed. Base materials resolve to 0:
/// their own sell value lives in `Item::value`, not in this table.
///
/// A recycle loop is cut where it re-enters the item being valued, so an
/// item's value never depends on which catalog entry was resolved first.
/// Only values computed without a cut are reused by other parents.
pub fn build_deep_recycle_table(items: &HashMap<String, Item>) -> RecycleTable {
    let mut memo = RecycleTable::with_capacity(items.len());
    let mut table = RecycleTable::with_capacity(items.len());
    let mut in_progress = HashSet::new();

    for item_id in items.keys() {
        let resolved = resolve(item_id, items, &mut memo, &mut in_progress);
        table.insert(item_id.clone(), resolved.value);
    }

    v_debug!("♻️ Resolved deep recycle values for {} items", table.len());
    table
}

/// Deep value of a single unit, or 0 for ids missing from the table
pub fn deep_recycle_value(table: &RecycleTable, item_id: &str) -> u64 {
    table.get(item_id).copied().unwrap_or(0)
}

#[derive(Debug, Clone, Copy)]
struct Resolved {
    value: u64,
    /// A recycle loop was cut somewhere below, so the value depends on the path taken
    cut: bool,
}

fn resolve(
    item_id: &str,
    items: &HashMap<String, Item>,
    memo: &mut RecycleTable,
    in_progress: &mut HashSet<String>,
) -> Resolved {
    if let Some(&value) = memo.get(item_id) {
        return Resolved { value, cut: false };
    }

    let item = match items.get(item_id) {
        Some(item) if !item.is_base_material() => item,
        _ => {
            memo.insert(item_id.to_string(), 0);
            return Resolved { value: 0, cut: false };
        }
    };

    // A recycle loop back into an item still being resolved adds nothing
    if !in_progress.insert(item_id.to_string()) {
        return Resolved { value: 0, cut: true };
    }

    let mut total: u64 = 0;
    let mut cut = false;
    for (material_id, &quantity) in &item.recycles_into {
        let Some(material) = items.get(material_id) else {
            continue;
        };
        let material_deep = resolve(material_id, items, memo, in_progress);
        cut |= material_deep.cut;
        let per_unit = material.value.max(material_deep.value);
        total = total.saturating_add(per_unit.saturating_mul(u64::from(quantity)));
    }

    in_progress.remove(item_id);
    if !cut {
        memo.insert(item_id.to_string(), total);
    }
    Resolved { value: total, cut }
}
