//! Diesel schema for task persistence.

diesel::table! {
    /// Planned to-do items.
    tasks (id) {
        /// Storage-assigned task identifier.
        id -> Int8,
        /// Task title; length limits are enforced by validation.
        title -> Text,
        /// Free-form task description.
        description -> Text,
        /// Calendar date the task is planned for.
        planning_date -> Date,
        /// Completion flag.
        status -> Bool,
    }
}
