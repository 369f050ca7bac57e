//! Repository layer: one zero-sized struct per table, async associated
//! functions taking the pool by reference.

pub mod note_repo;

pub use note_repo::NoteRepo;
