pub use vg_entities::{
    email::*, favorite::*, geo::*, id::*, item::*, location::*, password::*, price::*,
    recommendation::*, review::*, route::*, time::*, user::*, weather::*,
};
