use bookstore_core::types::DbId;

/// Ids of books the user marked as favorite, in the order they were liked.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Favorites {
    ids: Vec<DbId>,
}

impl Favorites {
    pub fn ids(&self) -> &[DbId] {
        &self.ids
    }

    pub fn contains(&self, id: DbId) -> bool {
        self.ids.contains(&id)
    }

    /// Flip membership of `id`. Returns `true` if it is a favorite afterwards.
    pub fn toggle(&mut self, id: DbId) -> bool {
        if self.contains(id) {
            self.remove(id);
            false
        } else {
            self.ids.push(id);
            true
        }
    }

    pub fn remove(&mut self, id: DbId) {
        self.ids.retain(|fav| *fav != id);
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
