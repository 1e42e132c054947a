///////////////////////////////////////////////////////////////////////
// Users
///////////////////////////////////////////////////////////////////////

table! {
    users (rowid) {
        rowid -> BigInt,
        id -> Text,
        email -> Text,
        display_name -> Nullable<Text>,
        password -> Text,
    }
}

///////////////////////////////////////////////////////////////////////
// Reviews
///////////////////////////////////////////////////////////////////////

table! {
    reviews (rowid) {
        rowid -> BigInt,
        id -> Text,
        user_rowid -> BigInt,
        user_name -> Text,
        item_type -> Text,
        item_id -> BigInt,
        rating -> SmallInt,
        comment -> Text,
        created_at -> BigInt,
    }
}

joinable!(reviews -> users (user_rowid));

///////////////////////////////////////////////////////////////////////

allow_tables_to_appear_in_same_query!(reviews, users,);
