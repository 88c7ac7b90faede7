diesel::table! {
    bookings (id) {
        id -> Int8,
        name -> Text,
        email -> Text,
        phone -> Text,
        date -> Text,
        time -> Text,
        duration -> Int4,
        guests -> Int4,
    }
}

/// `date` and `time` use the byte-wise collation so `ORDER BY` matches a plain
/// string comparison regardless of the server locale.
pub const CREATE_BOOKINGS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS bookings (
    id BIGSERIAL PRIMARY KEY,
    name TEXT NOT NULL,
    email TEXT NOT NULL,
    phone TEXT NOT NULL,
    date TEXT COLLATE "C" NOT NULL,
    time TEXT COLLATE "C" NOT NULL,
    duration INTEGER NOT NULL DEFAULT 2,
    guests INTEGER NOT NULL
)"#;
