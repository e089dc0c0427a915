//! Core types: booking references, routes, triggers and intents, tracing

pub mod booking;
pub mod intent;
pub mod routes;
pub mod tracing;

pub use booking::{BookingRef, FormVisibility, PARTY_SIZES, PeopleCount};
pub use intent::{Intent, Trigger};
pub use routes::{DEFAULT_BASE_PATH, Routes};
pub use self::tracing::{TracingConfig, TracingError, init_tracing};
