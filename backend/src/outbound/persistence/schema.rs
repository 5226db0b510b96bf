//! Diesel table definitions mirroring `backend/migrations`.

diesel::table! {
    feedback (id) {
        id -> Int8,
        name -> Nullable<Varchar>,
        email -> Nullable<Varchar>,
        #[max_length = 1000]
        message -> Nullable<Varchar>,
    }
}
