diesel::table! {
    blogs (seq) {
        seq -> BigInt,
        id -> Text,
        title -> Text,
        author -> Nullable<Text>,
        url -> Text,
        likes -> BigInt,
        created -> BigInt,
    }
}
