//! Diesel schema for task lifecycle persistence.

diesel::table! {
    /// Task records keyed by identifier and foreign-keyed to their owner.
    tasks (id) {
        /// Task identifier.
        id -> Uuid,
        /// Owning principal identifier.
        owner_id -> Uuid,
        /// Task title.
        #[max_length = 255]
        title -> Varchar,
        /// Optional free-text description.
        description -> Nullable<Text>,
        /// Priority level.
        #[max_length = 50]
        priority -> Varchar,
        /// Lifecycle status.
        #[max_length = 50]
        status -> Varchar,
        /// Optional due date.
        due_date -> Nullable<Timestamptz>,
        /// Estimated effort in hours.
        estimated_hours -> Float8,
        /// Recorded effort in hours.
        actual_hours -> Float8,
        /// Tag labels as a JSON array.
        tags -> Jsonb,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last mutation timestamp.
        updated_at -> Timestamptz,
        /// Completion timestamp, present while the status is completed.
        completed_at -> Nullable<Timestamptz>,
    }
}
