use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::schema::bookings;

#[derive(Queryable, Selectable, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[diesel(table_name = bookings)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Booking {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub date: String,
    pub time: String,
    pub duration: i32,
    pub guests: i32,
}

/// A validated booking that has not been assigned an id yet.
#[derive(Insertable, Debug, Clone, PartialEq, Eq)]
#[diesel(table_name = bookings)]
pub struct NewBooking {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub date: String,
    pub time: String,
    pub duration: i32,
    pub guests: i32,
}

impl NewBooking {
    #[must_use]
    pub fn with_id(self, id: i64) -> Booking {
        Booking {
            id,
            name: self.name,
            email: self.email,
            phone: self.phone,
            date: self.date,
            time: self.time,
            duration: self.duration,
            guests: self.guests,
        }
    }
}
