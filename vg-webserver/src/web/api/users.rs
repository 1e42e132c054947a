use super::*;
use rocket::http::SameSite;
use vg_core::entities::Id;

#[post("/users", format = "application/json", data = "<new_user>")]
pub fn post_user(
    db: sqlite::Connections,
    new_user: JsonResult<json::NewUser>,
) -> Result<json::User> {
    let json::NewUser {
        email,
        password,
        display_name,
    } = new_user?.into_inner();
    let user = db.exclusive()?.transaction(|conn| {
        usecases::create_new_user(
            conn,
            usecases::NewUser {
                email,
                password,
                display_name,
            },
        )
    })?;
    debug!("Signed up user {}", user.id);
    Ok(Json(user.into()))
}

#[post("/login", format = "application/json", data = "<login>")]
pub fn post_login(
    db: sqlite::Connections,
    cookies: &CookieJar<'_>,
    login: JsonResult<json::Credentials>,
    tokens: &State<jwt::SessionTokens>,
) -> Result<Option<json::JwtToken>> {
    let json::Credentials { email, password } = login?.into_inner();
    let credentials = usecases::Credentials {
        email: &email.parse()?,
        password: &password,
    };
    let user = usecases::login_with_email(&db.shared()?, &credentials)
        .inspect_err(|err| debug!("Sign-in of '{email}' rejected: {err}"))?;
    start_session(&user.id, cookies, tokens)
}

fn start_session(
    user_id: &Id,
    cookies: &CookieJar<'_>,
    tokens: &jwt::SessionTokens,
) -> Result<Option<json::JwtToken>> {
    if cfg!(feature = "cookies") {
        let cookie = Cookie::build((COOKIE_USER_KEY, user_id.to_string())).same_site(SameSite::Lax);
        cookies.add_private(cookie);
    }
    let token = if cfg!(feature = "jwt") {
        Some(json::JwtToken {
            token: tokens.issue(user_id)?,
        })
    } else {
        None
    };
    Ok(Json(token))
}

#[post("/logout", format = "application/json")]
pub fn post_logout(
    auth: Auth,
    cookies: &CookieJar<'_>,
    tokens: &State<jwt::SessionTokens>,
) -> Json<()> {
    cookies.remove_private(COOKIE_USER_KEY);
    auth.bearer_tokens()
        .iter()
        .for_each(|token| tokens.revoke(token));
    Json(())
}

#[get("/users/current")]
pub fn get_current_user(db: sqlite::Connections, account: Account) -> Result<json::User> {
    let user = usecases::get_user(&db.shared()?, account.user_id())?;
    Ok(Json(user.into()))
}
