use super::*;

impl From<models::UserEntity> for User {
    fn from(from: models::UserEntity) -> Self {
        let models::UserEntity {
            rowid: _,
            id,
            email,
            display_name,
            password,
        } = from;
        Self {
            id: id.into(),
            email: EmailAddress::new_unchecked(email),
            display_name,
            password: password.into(),
        }
    }
}

impl<'a> From<&'a User> for models::NewUser<'a> {
    fn from(from: &'a User) -> Self {
        let User {
            id,
            email,
            display_name,
            password,
        } = from;
        Self {
            id: id.as_str(),
            email: email.as_str(),
            display_name: display_name.as_deref(),
            password: password.as_ref(),
        }
    }
}

macro_rules! impl_user_repo {
    ($($db:ty),+) => {
        $(
            impl UserRepo for $db {
                fn create_user(&self, user: &User) -> Result<()> {
                    self.write(|conn| create_user(conn, user))
                }

                fn get_user(&self, id: &Id) -> Result<User> {
                    self.read(|conn| get_user(conn, id))
                }
                fn try_get_user_by_email(&self, email: &EmailAddress) -> Result<Option<User>> {
                    self.read(|conn| try_get_user_by_email(conn, email))
                }

                fn count_users(&self) -> Result<usize> {
                    self.read(count_users)
                }
            }
        )+
    };
}

impl_user_repo!(DbReadOnly<'_>, DbReadWrite<'_>, DbConnection<'_>);

fn create_user(conn: &mut SqliteConnection, u: &User) -> Result<()> {
    let new_user = models::NewUser::from(u);
    diesel::insert_into(schema::users::table)
        .values(&new_user)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn get_user(conn: &mut SqliteConnection, id: &Id) -> Result<User> {
    use schema::users::dsl;
    Ok(dsl::users
        .filter(dsl::id.eq(id.as_str()))
        .first::<models::UserEntity>(conn)
        .map_err(from_diesel_err)?
        .into())
}

fn try_get_user_by_email(
    conn: &mut SqliteConnection,
    email: &EmailAddress,
) -> Result<Option<User>> {
    use schema::users::dsl;
    Ok(dsl::users
        .filter(dsl::email.eq(email.as_str()))
        .first::<models::UserEntity>(conn)
        .optional()
        .map_err(from_diesel_err)?
        .map(Into::into))
}

fn count_users(conn: &mut SqliteConnection) -> Result<usize> {
    use schema::users::dsl;
    Ok(dsl::users
        .select(diesel::dsl::count(dsl::rowid))
        .first::<i64>(conn)
        .map_err(from_diesel_err)? as usize)
}
