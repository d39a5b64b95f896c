diesel::table! {
    tasks (id) {
        id -> Uuid,
        title -> Text,
        description -> Text,
        completed -> Bool,
        priority -> Text,
        due_date -> Nullable<Timestamptz>,
        created_at -> Timestamptz,
    }
}
