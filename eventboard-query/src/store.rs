use chrono::NaiveDate;

use crate::{Event, NewEvent, QueryError, QueryResult, SEED_EVENTS};

/// Storage for events. Views only read from it; writes are here so that real
/// persistence can sit behind the same interface.
pub trait EventStore {
    fn all(&self) -> &[Event];

    fn get(&self, id: u32) -> Option<&Event>;

    /// Stores `event` under a fresh id and returns the stored record.
    fn insert(&mut self, event: NewEvent, created: NaiveDate) -> QueryResult<&Event>;

    /// Replaces the editable fields of event `id`, keeping its id and
    /// creation date.
    fn update(&mut self, id: u32, event: NewEvent) -> QueryResult<&Event>;

    fn remove(&mut self, id: u32) -> QueryResult<Event>;
}

/// Vec-backed store. Ids grow monotonically and are never handed out twice,
/// even after a removal.
#[derive(Debug, Clone)]
pub struct MemoryStore {
    events: Vec<Event>,
    /// `None` once `u32::MAX` has been handed out.
    next_id: Option<u32>,
}

impl MemoryStore {
    pub fn new(events: Vec<Event>) -> Self {
        let next_id = match events.iter().map(|e| e.id).max() {
            Some(max) => max.checked_add(1),
            None => Some(1),
        };
        Self { events, next_id }
    }

    pub fn seeded() -> Self {
        Self::new(SEED_EVENTS.clone())
    }

    fn position(&self, id: u32) -> QueryResult<usize> {
        self.events
            .iter()
            .position(|e| e.id == id)
            .ok_or(QueryError::NotFound(id))
    }
}

impl EventStore for MemoryStore {
    fn all(&self) -> &[Event] {
        &self.events
    }

    fn get(&self, id: u32) -> Option<&Event> {
        self.events.iter().find(|e| e.id == id)
    }

    fn insert(&mut self, event: NewEvent, created: NaiveDate) -> QueryResult<&Event> {
        let id = self.next_id.ok_or(QueryError::IdsExhausted)?;
        self.next_id = id.checked_add(1);

        log::debug!("storing event {id} `{}`", event.name);
        self.events.push(event.into_event(id, created));
        Ok(&self.events[self.events.len() - 1])
    }

    fn update(&mut self, id: u32, event: NewEvent) -> QueryResult<&Event> {
        let index = self.position(id)?;
        let stored = &mut self.events[index];

        let created = std::mem::take(&mut stored.created_date);
        let mut updated = event.into_event(id, NaiveDate::MIN);
        updated.created_date = created;
        *stored = updated;

        Ok(&*stored)
    }

    fn remove(&mut self, id: u32) -> QueryResult<Event> {
        let index = self.position(id)?;
        Ok(self.events.remove(index))
    }
}
