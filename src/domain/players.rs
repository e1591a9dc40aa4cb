use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::models::{PlayerId, PlayerRecord};

/// Player records of one loaded snapshot, keyed by id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerStore {
    records: BTreeMap<PlayerId, PlayerRecord>,
}

impl PlayerStore {
    /// Returns the stored record, inserting a zeroed one on first reference.
    pub fn get_or_create(&mut self, id: &PlayerId) -> PlayerRecord {
        self.records
            .entry(id.clone())
            .or_insert_with(|| PlayerRecord::new(id.clone()))
            .clone()
    }

    pub fn save(&mut self, record: PlayerRecord) {
        self.records.insert(record.id.clone(), record);
    }

    pub fn get(&self, id: &PlayerId) -> Option<&PlayerRecord> {
        self.records.get(id)
    }

    /// Highest points first; equal totals ordered by id.
    pub fn ranked(&self) -> Vec<PlayerRecord> {
        let mut records: Vec<PlayerRecord> = self.records.values().cloned().collect();
        records.sort_by(|a, b| b.points.cmp(&a.points).then_with(|| a.id.cmp(&b.id)));
        records
    }

    pub fn iter(&self) -> impl Iterator<Item = &PlayerRecord> {
        self.records.values()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_or_create_is_idempotent() {
        let mut store = PlayerStore::default();
        let id = PlayerId::from("newcomer");

        let first = store.get_or_create(&id);
        let second = store.get_or_create(&id);

        assert_eq!(first, second);
        assert_eq!(first, PlayerRecord::new(id));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn get_or_create_keeps_existing_points() {
        let mut store = PlayerStore::default();
        let id = PlayerId::from("veteran");
        let mut record = store.get_or_create(&id);
        record.points = 12;
        store.save(record);

        assert_eq!(store.get_or_create(&id).points, 12);
    }

    #[test]
    fn save_replaces_record() {
        let mut store = PlayerStore::default();
        let id = PlayerId::from("p");
        let mut record = PlayerRecord::new(id.clone());
        record.points = 4;
        record.promotion_challenge = true;
        store.save(record.clone());

        record.points = 5;
        record.promotion_challenge = false;
        store.save(record.clone());

        assert_eq!(store.get(&id), Some(&record));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn ranked_orders_by_points_then_id() {
        let mut store = PlayerStore::default();
        for (id, points) in [("carol", 3), ("alice", 7), ("bob", 3)] {
            let mut record = PlayerRecord::new(PlayerId::from(id));
            record.points = points;
            store.save(record);
        }

        let order: Vec<String> = store.ranked().into_iter().map(|r| r.id.to_string()).collect();
        assert_eq!(order, vec!["alice", "bob", "carol"]);
    }
}
