use super::*;

fn favorite_status(kind: ItemKind, id: ItemId, is_favorite: bool) -> json::FavoriteStatus {
    json::FavoriteStatus {
        kind: kind.into(),
        id: id.into(),
        is_favorite,
    }
}

#[get("/favorites?<kind>")]
pub fn get_favorites(
    storage: &State<LocalStorage>,
    client_id: ClientId,
    kind: Option<&str>,
) -> Result<Vec<json::FavoriteItem>> {
    let kind = kind.map(parse_item_kind).transpose()?;
    let items = usecases::list_favorites(storage.inner(), &client_id, kind)?;
    Ok(Json(items.into_iter().map(Into::into).collect()))
}

#[get("/favorites/count")]
pub fn get_favorites_count(
    storage: &State<LocalStorage>,
    client_id: ClientId,
) -> Result<json::FavoritesCount> {
    let count = usecases::count_favorites(storage.inner(), &client_id)?;
    Ok(Json(json::FavoritesCount { count }))
}

#[get("/favorites/<kind>/<id>")]
pub fn get_favorite_status(
    storage: &State<LocalStorage>,
    client_id: ClientId,
    kind: &str,
    id: u32,
) -> Result<json::FavoriteStatus> {
    let kind = parse_item_kind(kind)?;
    let id = ItemId::from(id);
    let is_favorite = usecases::is_favorite(storage.inner(), &client_id, kind, id)?;
    Ok(Json(favorite_status(kind, id, is_favorite)))
}

#[post("/favorites/<kind>/<id>/toggle")]
pub fn post_toggle_favorite(
    storage: &State<LocalStorage>,
    catalog: &State<StaticCatalog>,
    client_id: ClientId,
    kind: &str,
    id: u32,
) -> Result<json::FavoriteStatus> {
    let kind = parse_item_kind(kind)?;
    let id = ItemId::from(id);
    let is_favorite =
        usecases::toggle_favorite(storage.inner(), catalog.inner(), &client_id, kind, id)?;
    Ok(Json(favorite_status(kind, id, is_favorite)))
}

#[put("/favorites/<kind>/<id>")]
pub fn put_favorite(
    storage: &State<LocalStorage>,
    catalog: &State<StaticCatalog>,
    client_id: ClientId,
    kind: &str,
    id: u32,
) -> Result<json::FavoriteStatus> {
    let kind = parse_item_kind(kind)?;
    let id = ItemId::from(id);
    usecases::add_favorite(storage.inner(), catalog.inner(), &client_id, kind, id)?;
    Ok(Json(favorite_status(kind, id, true)))
}

#[delete("/favorites/<kind>/<id>")]
pub fn delete_favorite(
    storage: &State<LocalStorage>,
    client_id: ClientId,
    kind: &str,
    id: u32,
) -> Result<json::FavoriteStatus> {
    let kind = parse_item_kind(kind)?;
    let id = ItemId::from(id);
    usecases::remove_favorite(storage.inner(), &client_id, kind, id)?;
    Ok(Json(favorite_status(kind, id, false)))
}

#[delete("/favorites")]
pub fn delete_all_favorites(storage: &State<LocalStorage>, client_id: ClientId) -> Result<()> {
    usecases::clear_favorites(storage.inner(), &client_id)?;
    Ok(Json(()))
}

#[get("/install-prompt")]
pub fn get_install_prompt(
    storage: &State<LocalStorage>,
    client_id: ClientId,
) -> Result<json::InstallPrompt> {
    let show = usecases::should_show_install_prompt(storage.inner(), &client_id)?;
    Ok(Json(json::InstallPrompt { show }))
}

#[post("/install-prompt/dismiss")]
pub fn post_dismiss_install_prompt(
    storage: &State<LocalStorage>,
    client_id: ClientId,
) -> Result<()> {
    usecases::dismiss_install_prompt(storage.inner(), &client_id)?;
    Ok(Json(()))
}
