use super::prelude::*;
use crate::usecases::catalog_item;

pub fn load_favorites<R: FavoritesRepo>(repo: &R, client_id: &Id) -> Result<Favorites> {
    Ok(repo.load_favorites(client_id)?)
}

pub fn list_favorites<R: FavoritesRepo>(
    repo: &R,
    client_id: &Id,
    kind: Option<ItemKind>,
) -> Result<Vec<FavoriteItem>> {
    Ok(repo.load_favorites(client_id)?.items(kind))
}

pub fn count_favorites<R: FavoritesRepo>(repo: &R, client_id: &Id) -> Result<usize> {
    Ok(repo.load_favorites(client_id)?.count())
}

pub fn is_favorite<R: FavoritesRepo>(
    repo: &R,
    client_id: &Id,
    kind: ItemKind,
    id: ItemId,
) -> Result<bool> {
    Ok(repo.load_favorites(client_id)?.contains(kind, id))
}

/// Adds or removes the item and returns whether it is a favorite afterwards.
pub fn toggle_favorite<R, C>(
    repo: &R,
    catalog: &C,
    client_id: &Id,
    kind: ItemKind,
    id: ItemId,
) -> Result<bool>
where
    R: FavoritesRepo,
    C: CatalogRepo,
{
    let mut favorites = repo.load_favorites(client_id)?;
    let is_favorite = if favorites.remove(kind, id) {
        false
    } else {
        favorites.add(catalog_item(catalog, kind, id)?)
    };
    log::debug!("Toggled favorite {kind} {id} of client {client_id}: {is_favorite}");
    repo.save_favorites(client_id, &favorites)?;
    Ok(is_favorite)
}

pub fn add_favorite<R, C>(
    repo: &R,
    catalog: &C,
    client_id: &Id,
    kind: ItemKind,
    id: ItemId,
) -> Result<()>
where
    R: FavoritesRepo,
    C: CatalogRepo,
{
    let mut favorites = repo.load_favorites(client_id)?;
    if favorites.contains(kind, id) {
        return Ok(());
    }
    favorites.add(catalog_item(catalog, kind, id)?);
    log::debug!("Added favorite {kind} {id} of client {client_id}");
    repo.save_favorites(client_id, &favorites)?;
    Ok(())
}

pub fn remove_favorite<R: FavoritesRepo>(
    repo: &R,
    client_id: &Id,
    kind: ItemKind,
    id: ItemId,
) -> Result<()> {
    let mut favorites = repo.load_favorites(client_id)?;
    if favorites.remove(kind, id) {
        log::debug!("Removed favorite {kind} {id} of client {client_id}");
        repo.save_favorites(client_id, &favorites)?;
    }
    Ok(())
}

pub fn clear_favorites<R: FavoritesRepo>(repo: &R, client_id: &Id) -> Result<()> {
    let mut favorites = repo.load_favorites(client_id)?;
    favorites.clear();
    repo.save_favorites(client_id, &favorites)?;
    Ok(())
}
