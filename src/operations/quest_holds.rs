// Quest hold set - items that must not be liquidated while quests need them
use crate::models::{english, Item, Quest};
use crate::v_debug;
use std::collections::{HashMap, HashSet};

/// Finds items a quest needs beyond its structured reward/granted lists.
pub trait QuestNeedMatcher {
    fn needed_items(&self, quests: &HashMap<String, Quest>, items: &HashMap<String, Item>) -> HashSet<String>;
}

/// Heuristic matcher: an item is needed when its lower-cased English name
/// appears inside the lower-cased English text of any quest objective.
///
/// False positives (a common name inside unrelated text) and false negatives
/// (objectives that paraphrase the item) are both possible.
#[derive(Debug, Clone, Copy, Default)]
pub struct ObjectiveTextMatcher;

impl QuestNeedMatcher for ObjectiveTextMatcher {
    fn needed_items(&self, quests: &HashMap<String, Quest>, items: &HashMap<String, Item>) -> HashSet<String> {
        let names: Vec<(&str, String)> = items
            .iter()
            .filter_map(|(id, item)| {
                let name = item.english_name()?.to_lowercase();
                (!name.is_empty()).then_some((id.as_str(), name))
            })
            .collect();

        let mut needed = HashSet::new();
        for quest in quests.values() {
            for objective in &quest.objectives {
                let text = english(objective).unwrap_or_default().to_lowercase();
                if text.is_empty() {
                    continue;
                }
                for (id, name) in &names {
                    if text.contains(name.as_str()) {
                        needed.insert((*id).to_string());
                    }
                }
            }
        }
        needed
    }
}

/// Item ids to hold back for quests, using the objective text heuristic.
///
/// Every quest passed in is treated as incomplete; callers drop finished
/// quests before calling.
pub fn build_quest_hold_set(quests: &HashMap<String, Quest>, items: &HashMap<String, Item>) -> HashSet<String> {
    build_quest_hold_set_with(quests, items, &ObjectiveTextMatcher)
}

pub fn build_quest_hold_set_with(
    quests: &HashMap<String, Quest>,
    items: &HashMap<String, Item>,
    matcher: &dyn QuestNeedMatcher,
) -> HashSet<String> {
    let mut hold_set: HashSet<String> = quests
        .values()
        .flat_map(|quest| quest.granted_item_ids.iter().chain(&quest.reward_item_ids))
        .map(|entry| entry.item_id.clone())
        .collect();

    hold_set.extend(matcher.needed_items(quests, items));

    v_debug!("📌 Quest hold set: {} items across {} quests", hold_set.len(), quests.len());
    hold_set
}
