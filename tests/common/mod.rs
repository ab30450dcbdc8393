// Shared fixtures for the engine tests
#![allow(dead_code)]

use arc_stash::{Item, ItemQuantity, Quest, StashItem};
use std::collections::HashMap;

pub fn make_item(id: &str, name_en: &str, value: u64, recycles_into: &[(&str, u32)]) -> Item {
    Item {
        id: id.to_string(),
        name: HashMap::from([("en".to_string(), name_en.to_string())]),
        description: HashMap::from([("en".to_string(), format!("test item: {}", name_en))]),
        item_type: "material".to_string(),
        rarity: "common".to_string(),
        value,
        weight_kg: 1.0,
        stack_size: 100,
        recycles_into: recycles_into.iter().map(|(m, q)| (m.to_string(), *q)).collect(),
        ..Item::default()
    }
}

pub fn catalog(items: Vec<Item>) -> HashMap<String, Item> {
    items.into_iter().map(|item| (item.id.clone(), item)).collect()
}

pub fn stash_item(item_id: &str, quantity: u32) -> StashItem {
    StashItem {
        item_id: item_id.to_string(),
        name: format!("stash {}", item_id),
        quantity,
        slot_index: 0,
    }
}

pub fn quest(id: &str, objectives: &[&str], rewards: &[&str], granted: &[&str]) -> Quest {
    let quantities = |ids: &[&str]| {
        ids.iter()
            .map(|id| ItemQuantity { item_id: id.to_string(), quantity: 1 })
            .collect::<Vec<_>>()
    };
    Quest {
        id: id.to_string(),
        name: HashMap::from([("en".to_string(), format!("Quest {}", id))]),
        objectives: objectives
            .iter()
            .map(|text| HashMap::from([("en".to_string(), text.to_string())]))
            .collect(),
        reward_item_ids: quantities(rewards),
        granted_item_ids: quantities(granted),
        ..Quest::default()
    }
}

pub fn quests(list: Vec<Quest>) -> HashMap<String, Quest> {
    list.into_iter().map(|quest| (quest.id.clone(), quest)).collect()
}

/// weapon -> 5 mech_comp -> (3 metal, 2 rubber)
pub fn weapon_catalog() -> HashMap<String, Item> {
    catalog(vec![
        make_item("weapon", "Anvil Rifle", 5000, &[("mech_comp", 5)]),
        make_item("mech_comp", "Mechanical Components", 640, &[("metal", 3), ("rubber", 2)]),
        make_item("metal", "Metal Parts", 75, &[]),
        make_item("rubber", "Rubber Parts", 50, &[]),
    ])
}
