diesel::table! {
    titles (id) {
        id -> Integer,
        external_id -> Nullable<Text>,
        name -> Text,
        author -> Text,
        current_price -> Nullable<Text>,
        rating -> Nullable<Text>,
        rating_count -> Integer,
        page_count -> Nullable<Integer>,
        category -> Text,
        publisher -> Nullable<Text>,
        published_date -> Nullable<Text>,
        added_at -> Text,
        updated_at -> Text,
    }
}

diesel::table! {
    snapshots (id) {
        id -> Integer,
        title_id -> Integer,
        price -> Nullable<Text>,
        rating -> Nullable<Text>,
        rating_count -> Integer,
        captured_at -> Text,
    }
}

diesel::table! {
    notifications (id) {
        id -> Integer,
        title_id -> Integer,
        message -> Text,
        kind -> Text,
        is_read -> Bool,
        created_at -> Text,
    }
}

diesel::table! {
    watchlists (id) {
        id -> Integer,
        name -> Text,
        description -> Text,
        created_at -> Text,
    }
}

diesel::table! {
    watchlist_titles (watchlist_id, title_id) {
        watchlist_id -> Integer,
        title_id -> Integer,
        added_at -> Text,
    }
}

diesel::joinable!(snapshots -> titles (title_id));
diesel::joinable!(notifications -> titles (title_id));
diesel::joinable!(watchlist_titles -> titles (title_id));
diesel::joinable!(watchlist_titles -> watchlists (watchlist_id));

diesel::allow_tables_to_appear_in_same_query!(
    titles,
    snapshots,
    notifications,
    watchlists,
    watchlist_titles,
);
