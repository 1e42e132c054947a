use super::schema::*;

#[derive(Insertable)]
#[diesel(table_name = users)]
pub struct NewUser<'a> {
    pub id: &'a str,
    pub email: &'a str,
    pub display_name: Option<&'a str>,
    pub password: &'a str,
}

#[derive(Queryable)]
pub struct UserEntity {
    pub rowid: i64,
    pub id: String,
    pub email: String,
    pub display_name: Option<String>,
    pub password: String,
}

#[derive(Insertable)]
#[diesel(table_name = reviews)]
pub struct NewReview<'a> {
    pub id: &'a str,
    pub user_rowid: i64,
    pub user_name: &'a str,
    pub item_type: &'a str,
    pub item_id: i64,
    pub rating: i16,
    pub comment: &'a str,
    pub created_at: i64,
}

#[derive(Queryable)]
pub struct JoinedReview {
    pub id: String,
    pub user_name: String,
    pub item_type: String,
    pub item_id: i64,
    pub rating: i16,
    pub comment: String,
    pub created_at: i64,
    // Joined columns
    pub user_id: String,
}
