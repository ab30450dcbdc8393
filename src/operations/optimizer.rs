// Stash optimizer - one greedy pass assigning every stack to sell, recycle or hold
use crate::models::{Action, Item, OptimizeParams, OptimizeResult, Quest, StashItem};
use crate::operations::classifiers::{build_recommendation, StackValues};
use crate::operations::quest_holds::{build_quest_hold_set_with, ObjectiveTextMatcher, QuestNeedMatcher};
use crate::operations::recycle_value::RecycleTable;
use crate::v_debug;
use std::collections::{HashMap, HashSet};

/// Greedy optimizer over the whole stash.
///
/// 1. quest-needed stacks are held, regardless of profit threshold
/// 2. stacks whose |sell - recycle| is under `min_profit_threshold` are dropped
/// 3. the rest go to whichever action pays more; ties go to sell
///
/// Stacks whose item is missing from the catalog produce no row.
pub fn analyze_optimize(
    stash: &[StashItem],
    items: &HashMap<String, Item>,
    recycle_table: &RecycleTable,
    quests: &HashMap<String, Quest>,
    params: &OptimizeParams,
) -> OptimizeResult {
    analyze_optimize_with(stash, items, recycle_table, quests, params, &ObjectiveTextMatcher)
}

/// Same as [`analyze_optimize`] with a caller-supplied quest need matcher.
pub fn analyze_optimize_with(
    stash: &[StashItem],
    items: &HashMap<String, Item>,
    recycle_table: &RecycleTable,
    quests: &HashMap<String, Quest>,
    params: &OptimizeParams,
    matcher: &dyn QuestNeedMatcher,
) -> OptimizeResult {
    // include_hideout / include_projects have no hold rules yet
    let hold_set = if params.quest_aware {
        build_quest_hold_set_with(quests, items, matcher)
    } else {
        HashSet::new()
    };

    let mut result = OptimizeResult::default();
    let mut dropped = 0usize;

    for stash_item in stash {
        let Some(item) = items.get(&stash_item.item_id) else {
            continue;
        };
        let values = StackValues::of(stash_item, item, recycle_table);

        if hold_set.contains(&stash_item.item_id) {
            result.hold.push(build_recommendation(stash_item, item, values, Action::Hold));
            continue;
        }

        if values.margin_magnitude() < params.min_profit_threshold {
            dropped += 1;
            continue;
        }

        if values.recycle_value > values.sell_value {
            result.total_recycle_value = result.total_recycle_value.saturating_add(values.recycle_value);
            result.recycle.push(build_recommendation(stash_item, item, values, Action::Recycle));
        } else {
            result.total_sell_value = result.total_sell_value.saturating_add(values.sell_value);
            result.sell.push(build_recommendation(stash_item, item, values, Action::Sell));
        }
    }

    result.sell.sort_by(|a, b| b.sell_value.cmp(&a.sell_value));
    result.recycle.sort_by_key(|rec| rec.margin);
    result.hold.sort_by(|a, b| a.name.cmp(&b.name));
    result.total_hold_count = result.hold.len();

    v_debug!(
        "🧮 Optimize: {} sell, {} recycle, {} hold, {} under threshold",
        result.sell.len(),
        result.recycle.len(),
        result.hold.len(),
        dropped
    );
    result
}
