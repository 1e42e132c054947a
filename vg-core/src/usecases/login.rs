use super::prelude::*;

pub struct Credentials<'a> {
    pub email: &'a EmailAddress,
    pub password: &'a str,
}

pub fn login_with_email<R>(repo: &R, login: &Credentials) -> Result<User>
where
    R: UserRepo,
{
    match repo.try_get_user_by_email(login.email)? {
        Some(user) if user.password.verify(login.password) => Ok(user),
        _ => Err(Error::Credentials),
    }
}

#[cfg(test)]
mod tests {
    use super::{
        super::{create_new_user, tests::MockDb, NewUser},
        *,
    };

    #[test]
    fn login_with_valid_and_invalid_credentials() {
        let db = MockDb::default();
        let user = create_new_user(
            &db,
            NewUser {
                email: "doge@venezia.it".into(),
                password: "serenissima".into(),
                display_name: None,
            },
        )
        .unwrap();
        let email = "doge@venezia.it".parse().unwrap();
        let logged_in = login_with_email(
            &db,
            &Credentials {
                email: &email,
                password: "serenissima",
            },
        )
        .unwrap();
        assert_eq!(user.id, logged_in.id);
        assert!(matches!(
            login_with_email(
                &db,
                &Credentials {
                    email: &email,
                    password: "wrong password",
                }
            ),
            Err(Error::Credentials)
        ));
        let unknown = "nobody@venezia.it".parse().unwrap();
        assert!(matches!(
            login_with_email(
                &db,
                &Credentials {
                    email: &unknown,
                    password: "serenissima",
                }
            ),
            Err(Error::Credentials)
        ));
    }
}
