//! Diesel schema for task document storage.

diesel::table! {
    /// Task document bodies grouped by collection.
    task_documents (collection, id) {
        /// Collection name (`activeTasks`, `ongoingTasks`, `completedTasks`).
        #[max_length = 64]
        collection -> Varchar,
        /// Task document identifier.
        #[max_length = 255]
        id -> Varchar,
        /// Document body.
        body -> Jsonb,
        /// Time of the last write to this document.
        updated_at -> Timestamptz,
    }
}
