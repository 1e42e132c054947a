use super::prelude::*;
use crate::util::validate;

#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub password: String,
    pub display_name: Option<String>,
}

pub fn create_new_user<R: UserRepo>(repo: &R, u: NewUser) -> Result<User> {
    if !validate::is_valid_email(u.email.trim()) {
        return Err(Error::Email);
    }
    let email = u.email.parse::<EmailAddress>()?;
    let password = u.password.parse::<Password>()?;
    if repo.try_get_user_by_email(&email)?.is_some() {
        return Err(Error::UserExists);
    }
    let display_name = u
        .display_name
        .map(|name| name.trim().to_owned())
        .filter(|name| !name.is_empty());
    let new_user = User {
        id: Id::new(),
        email,
        display_name,
        password,
    };
    log::debug!("Creating new user: email = {}", new_user.email);
    repo.create_user(&new_user)?;
    Ok(new_user)
}

#[cfg(test)]
mod tests {
    use super::{super::tests::MockDb, *};

    fn new_user(email: &str, password: &str) -> NewUser {
        NewUser {
            email: email.into(),
            password: password.into(),
            display_name: None,
        }
    }

    #[test]
    fn create_two_users() {
        let db = MockDb::default();
        assert!(create_new_user(&db, new_user("foo@bar.de", "secret1")).is_ok());
        assert!(db
            .get_user_by_email(&EmailAddress::new_unchecked("foo@bar.de".to_string()))
            .is_ok());
        assert!(db
            .try_get_user_by_email(&EmailAddress::new_unchecked("baz@bar.de".to_string()))
            .unwrap()
            .is_none());
        assert!(create_new_user(&db, new_user("baz@bar.de", "secret2")).is_ok());
        assert_eq!(2, db.count_users().unwrap());
    }

    #[test]
    fn create_user_with_invalid_password() {
        let db = MockDb::default();
        assert!(matches!(
            create_new_user(&db, new_user("foo@baz.io", "hello")),
            Err(Error::Password)
        ));
        assert!(create_new_user(&db, new_user("foo@baz.io", "valid pass")).is_ok());
    }

    #[test]
    fn create_user_with_invalid_email() {
        let db = MockDb::default();
        for email in ["", "fooo@", "no-at-sign"] {
            assert!(matches!(
                create_new_user(&db, new_user(email, "secret")),
                Err(Error::Email)
            ));
        }
        assert!(create_new_user(&db, new_user("fooo@bar.io", "secret")).is_ok());
    }

    #[test]
    fn create_user_with_existing_email() {
        let db = MockDb::default();
        create_new_user(&db, new_user("baz@foo.bar", "secret")).unwrap();
        match create_new_user(&db, new_user("BAZ@foo.bar", "secret")).err().unwrap() {
            Error::UserExists => {
                // ok
            }
            _ => panic!("invalid error"),
        }
    }

    #[test]
    fn encrypt_user_password() {
        let db = MockDb::default();
        create_new_user(&db, new_user("foo@bar.io", "secret")).unwrap();
        assert!(db.users.borrow()[0].password.as_ref() != "secret");
        assert!(db.users.borrow()[0].password.verify("secret"));
    }

    #[test]
    fn blank_display_name_is_dropped() {
        let db = MockDb::default();
        let user = create_new_user(
            &db,
            NewUser {
                display_name: Some("  ".into()),
                ..new_user("foo@bar.io", "secret")
            },
        )
        .unwrap();
        assert_eq!(None, user.display_name);
        assert_eq!("Anonymous", user.public_name());
        let user = create_new_user(
            &db,
            NewUser {
                display_name: Some(" Marco ".into()),
                ..new_user("marco@polo.it", "secret")
            },
        )
        .unwrap();
        assert_eq!("Marco", user.public_name());
    }
}
