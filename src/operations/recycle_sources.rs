// Recycle source finder - which stash items recycle (transitively) into a target
use crate::models::{Item, RecycleSource, StashItem};
use crate::{v_debug, v_trace};
use std::collections::{HashMap, HashSet, VecDeque};

/// material_id -> [(producer_id, units of material per producer unit)]
pub type ReverseRecycleMap = HashMap<String, Vec<(String, u32)>>;

/// Result of a source search: the resolved target and its stash sources
#[derive(Debug, Clone)]
pub struct RecycleSearch<'a> {
    pub target: &'a Item,
    pub sources: Vec<RecycleSource>,
}

/// Resolve free text to a catalog item by English name.
///
/// Case-insensitive and trimmed. An exact name match wins; otherwise the
/// shortest name containing the query is taken as the most specific match.
/// Equal candidates are broken by name, then id, so the result is stable.
pub fn resolve_item_by_name<'a>(query: &str, items: &'a HashMap<String, Item>) -> Option<&'a Item> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return None;
    }

    let mut exact: Option<&Item> = None;
    let mut best: Option<(usize, String, &Item)> = None;

    for item in items.values() {
        let Some(name) = item.english_name() else {
            continue;
        };
        let lowered = name.to_lowercase();

        if lowered == query {
            if exact.is_none_or(|current| item.id < current.id) {
                exact = Some(item);
            }
            continue;
        }

        if lowered.contains(&query) {
            let key = (name.chars().count(), lowered);
            let better = match &best {
                None => true,
                Some((len, best_name, best_item)) => {
                    (key.0, &key.1, &item.id) < (*len, best_name, &best_item.id)
                }
            };
            if better {
                best = Some((key.0, key.1, item));
            }
        }
    }

    exact.or(best.map(|(_, _, item)| item))
}

/// Invert every `recycles_into` edge. Producer lists are ordered by id.
pub fn build_reverse_recycle_map(items: &HashMap<String, Item>) -> ReverseRecycleMap {
    let mut reverse = ReverseRecycleMap::new();
    for (item_id, item) in items {
        for (material_id, &quantity) in &item.recycles_into {
            reverse
                .entry(material_id.clone())
                .or_default()
                .push((item_id.clone(), quantity));
        }
    }
    for producers in reverse.values_mut() {
        producers.sort();
    }
    reverse
}

/// Find every stash item that recycles into the item named by `target_query`.
///
/// Walks the reverse recycle graph breadth-first from the target. Each
/// producer is visited once, so its yield follows the first (fewest-hop)
/// path found; a longer path with a higher yield is not considered.
/// Sources are sorted by total yield, highest first.
pub fn find_recycle_sources<'a>(
    target_query: &str,
    stash: &[StashItem],
    items: &'a HashMap<String, Item>,
) -> Option<RecycleSearch<'a>> {
    let target = resolve_item_by_name(target_query, items)?;
    let target_name = target.display_name().to_string();
    v_debug!("🔍 Resolved \"{}\" to {} ({})", target_query.trim(), target_name, target.id);

    let reverse = build_reverse_recycle_map(items);

    // item_id -> (units of target per unit, chain of names down to the target)
    let mut found: HashMap<&str, (u64, Vec<String>)> = HashMap::new();
    found.insert(target.id.as_str(), (1, vec![target_name]));
    let mut visited: HashSet<&str> = HashSet::from([target.id.as_str()]);
    let mut queue: VecDeque<&str> = VecDeque::from([target.id.as_str()]);

    while let Some(current) = queue.pop_front() {
        let Some(producers) = reverse.get(current) else {
            continue;
        };
        let (current_yield, current_chain) = found[current].clone();

        for (producer_id, quantity) in producers {
            let Some((producer_key, producer)) = items.get_key_value(producer_id) else {
                continue;
            };
            if !visited.insert(producer_key.as_str()) {
                continue;
            }

            let mut chain = Vec::with_capacity(current_chain.len() + 1);
            chain.push(producer.display_name().to_string());
            chain.extend_from_slice(&current_chain);
            v_trace!("   ↳ {} ({} step(s))", producer.display_name(), current_chain.len());

            let producer_yield = u64::from(*quantity).saturating_mul(current_yield);
            found.insert(producer_key.as_str(), (producer_yield, chain));
            queue.push_back(producer_key.as_str());
        }
    }
    found.remove(target.id.as_str());

    // item_id -> (units across all stacks, name reported by the first stack)
    let mut owned: HashMap<&str, (u32, &str)> = HashMap::new();
    for stash_item in stash {
        let entry = owned
            .entry(stash_item.item_id.as_str())
            .or_insert((0, stash_item.name.as_str()));
        entry.0 = entry.0.saturating_add(stash_item.quantity);
    }

    let mut sources: Vec<RecycleSource> = found
        .into_iter()
        .filter_map(|(item_id, (yield_per_unit, chain))| {
            let &(quantity, stash_name) = owned.get(item_id)?;
            let name = items
                .get(item_id)
                .and_then(Item::english_name)
                .unwrap_or(stash_name)
                .to_string();
            Some(RecycleSource {
                item_id: item_id.to_string(),
                name,
                quantity,
                yield_per_unit,
                total_yield: yield_per_unit.saturating_mul(u64::from(quantity)),
                depth: chain.len() - 1,
                chain,
            })
        })
        .collect();

    sources.sort_by(|a, b| b.total_yield.cmp(&a.total_yield).then_with(|| a.item_id.cmp(&b.item_id)));
    v_debug!("🔍 {} stash sources for {}", sources.len(), target.display_name());

    Some(RecycleSearch { target, sources })
}
