// Adapters layer: concrete implementations for external systems (roster file, civic API, templates, storage).

pub mod civic;
pub mod roster;
pub mod storage;
pub mod template;
