//! Insertion-ordered storage for drawing objects.
//!
//! Draw order doubles as stacking order: later objects occlude earlier ones,
//! so hit-testing walks the store in reverse. Ids come from a monotonic
//! counter that survives undo/redo snapshot swaps, so an id is never reused
//! within a session.

use crate::canvas::DrawingObject;

#[derive(Debug, Clone)]
pub struct ShapeStore {
    objects: Vec<DrawingObject>,
    next_id: u64,
}

impl Default for ShapeStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ShapeStore {
    pub fn new() -> Self {
        Self {
            objects: Vec::new(),
            next_id: 1,
        }
    }

    /// Returns a fresh, never-before-issued id.
    pub fn generate_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Appends an object on top of the stack.
    pub fn insert(&mut self, obj: DrawingObject) {
        self.objects.push(obj);
    }

    pub fn get(&self, id: u64) -> Option<&DrawingObject> {
        self.objects.iter().find(|o| o.id == id)
    }

    pub fn get_mut(&mut self, id: u64) -> Option<&mut DrawingObject> {
        self.objects.iter_mut().find(|o| o.id == id)
    }

    pub fn contains(&self, id: u64) -> bool {
        self.objects.iter().any(|o| o.id == id)
    }

    pub fn remove(&mut self, id: u64) -> Option<DrawingObject> {
        let idx = self.objects.iter().position(|o| o.id == id)?;
        Some(self.objects.remove(idx))
    }

    /// Iterates in draw order (bottom to top).
    pub fn iter(&self) -> std::slice::Iter<'_, DrawingObject> {
        self.objects.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, DrawingObject> {
        self.objects.iter_mut()
    }

    pub fn clear(&mut self) {
        self.objects.clear();
    }

    /// Full-collection snapshot for the undo/redo stacks.
    pub fn snapshot(&self) -> Vec<DrawingObject> {
        self.objects.clone()
    }

    /// Replaces the collection with a snapshot. The id counter keeps
    /// counting forward so restored ids are never reissued.
    pub fn restore(&mut self, snapshot: Vec<DrawingObject>) {
        let max_id = snapshot.iter().map(|o| o.id).max().unwrap_or(0);
        self.next_id = self.next_id.max(max_id + 1);
        self.objects = snapshot;
    }
}
