//! A per-client key/value storage of strings, persisted as JSON files.
//!
//! Every client owns a single file named after its client id.

use std::{collections::BTreeMap, io, path::Path, sync::Arc};

use jfs::Store;
use vg_boundary as json;
use vg_core::{
    entities::*,
    repositories::{Error as RepoError, FavoritesRepo, InstallPromptRepo},
};

pub const FAVORITES_KEY: &str = "veniceFavorites";
pub const INSTALL_PROMPT_DISMISSED_KEY: &str = "pwaInstallDismissed";

type Items = BTreeMap<String, String>;

#[derive(Clone)]
pub struct LocalStorage {
    json_store: Arc<Store>,
}

fn is_valid_client_id(client_id: &Id) -> bool {
    let id = client_id.as_str();
    !id.is_empty() && id.len() <= 64 && id.chars().all(|c| c.is_ascii_alphanumeric())
}

fn check_client_id(client_id: &Id) -> io::Result<()> {
    if is_valid_client_id(client_id) {
        Ok(())
    } else {
        Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("Invalid client id: {client_id}"),
        ))
    }
}

impl LocalStorage {
    pub fn try_new<P: AsRef<Path>>(directory: P) -> io::Result<Self> {
        let json_store = Arc::new(Store::new(directory)?);
        Ok(Self { json_store })
    }

    pub fn path(&self) -> &Path {
        self.json_store.path()
    }

    fn load_items(&self, client_id: &Id) -> io::Result<Items> {
        check_client_id(client_id)?;
        match self.json_store.get::<Items>(client_id.as_str()) {
            Ok(items) => Ok(items),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(Items::default()),
            Err(err) => {
                log::warn!("Discarding unreadable local storage of client {client_id}: {err}");
                Ok(Items::default())
            }
        }
    }

    fn save_items(&self, client_id: &Id, items: &Items) -> io::Result<()> {
        check_client_id(client_id)?;
        self.json_store.save_with_id(items, client_id.as_str())?;
        Ok(())
    }

    pub fn get_item(&self, client_id: &Id, key: &str) -> io::Result<Option<String>> {
        Ok(self.load_items(client_id)?.remove(key))
    }

    pub fn set_item(&self, client_id: &Id, key: &str, value: String) -> io::Result<()> {
        let mut items = self.load_items(client_id)?;
        items.insert(key.to_owned(), value);
        self.save_items(client_id, &items)
    }

    pub fn remove_item(&self, client_id: &Id, key: &str) -> io::Result<()> {
        let mut items = self.load_items(client_id)?;
        if items.remove(key).is_some() {
            self.save_items(client_id, &items)?;
        }
        Ok(())
    }
}

fn parse_favorites(value: &str) -> anyhow::Result<Favorites> {
    let favorites: json::Favorites = serde_json::from_str(value)?;
    Ok(favorites.try_into()?)
}

impl FavoritesRepo for LocalStorage {
    fn load_favorites(&self, client_id: &Id) -> Result<Favorites, RepoError> {
        let Some(value) = self.get_item(client_id, FAVORITES_KEY)? else {
            return Ok(Favorites::default());
        };
        let favorites = parse_favorites(&value).unwrap_or_else(|err| {
            log::warn!("Ignoring malformed favorites of client {client_id}: {err}");
            Favorites::default()
        });
        Ok(favorites)
    }

    fn save_favorites(&self, client_id: &Id, favorites: &Favorites) -> Result<(), RepoError> {
        let value = serde_json::to_string(&json::Favorites::from(favorites.clone()))
            .map_err(anyhow::Error::from)?;
        self.set_item(client_id, FAVORITES_KEY, value)?;
        Ok(())
    }
}

impl InstallPromptRepo for LocalStorage {
    fn is_install_prompt_dismissed(&self, client_id: &Id) -> Result<bool, RepoError> {
        Ok(self
            .get_item(client_id, INSTALL_PROMPT_DISMISSED_KEY)?
            .is_some_and(|value| value == "true"))
    }

    fn dismiss_install_prompt(&self, client_id: &Id) -> Result<(), RepoError> {
        self.set_item(client_id, INSTALL_PROMPT_DISMISSED_KEY, "true".into())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use vg_core::usecases;

    fn storage() -> (tempfile::TempDir, LocalStorage) {
        let dir = tempfile::tempdir().unwrap();
        let storage = LocalStorage::try_new(dir.path()).unwrap();
        (dir, storage)
    }

    fn location(id: u32) -> Location {
        Location {
            id: id.into(),
            name: "Scala Contarini del Bovolo".into(),
            category: "landmark".into(),
            price: PriceTier::Budget,
            pos: MapPoint::from_lat_lng_deg(45.4351, 12.3332),
            description: "A spiral staircase".into(),
            tips: None,
            image: None,
        }
    }

    #[test]
    fn persist_favorites() {
        let (_dir, storage) = storage();
        let client = Id::new();
        assert!(storage.load_favorites(&client).unwrap().is_empty());
        let mut favorites = Favorites::default();
        favorites.add(location(3).into());
        storage.save_favorites(&client, &favorites).unwrap();

        let reopened = LocalStorage::try_new(storage.path()).unwrap();
        assert_eq!(favorites, reopened.load_favorites(&client).unwrap());
        assert!(reopened.load_favorites(&Id::new()).unwrap().is_empty());
    }

    #[test]
    fn favorites_are_stored_under_their_key() {
        let (_dir, storage) = storage();
        let client = Id::new();
        let mut favorites = Favorites::default();
        favorites.add(location(1).into());
        storage.save_favorites(&client, &favorites).unwrap();
        let value = storage.get_item(&client, FAVORITES_KEY).unwrap().unwrap();
        let value: serde_json::Value = serde_json::from_str(&value).unwrap();
        assert_eq!(1, value["locations"][0]["id"]);
        assert!(value["routes"].as_array().unwrap().is_empty());
        assert!(value["recommendations"].as_array().unwrap().is_empty());
    }

    #[test]
    fn malformed_favorites_are_ignored() {
        let (_dir, storage) = storage();
        let client = Id::new();
        storage
            .set_item(&client, FAVORITES_KEY, "{not json".into())
            .unwrap();
        assert!(storage.load_favorites(&client).unwrap().is_empty());
        storage
            .set_item(&client, FAVORITES_KEY, r#"{"locations": 42}"#.into())
            .unwrap();
        assert!(storage.load_favorites(&client).unwrap().is_empty());
        // The install prompt flag is not affected
        storage.dismiss_install_prompt(&client).unwrap();
        assert!(storage.is_install_prompt_dismissed(&client).unwrap());
        assert!(storage.load_favorites(&client).unwrap().is_empty());
    }

    #[test]
    fn unreadable_storage_file_is_discarded() {
        let (dir, storage) = storage();
        let client = Id::new();
        storage.dismiss_install_prompt(&client).unwrap();
        let file = dir.path().join(format!("{client}.json"));
        assert!(file.exists());
        fs::write(&file, "garbage").unwrap();
        assert!(!storage.is_install_prompt_dismissed(&client).unwrap());
    }

    #[test]
    fn install_prompt_flag() {
        let (_dir, storage) = storage();
        let client = Id::new();
        assert!(!storage.is_install_prompt_dismissed(&client).unwrap());
        storage
            .set_item(&client, INSTALL_PROMPT_DISMISSED_KEY, "false".into())
            .unwrap();
        assert!(!storage.is_install_prompt_dismissed(&client).unwrap());
        storage.dismiss_install_prompt(&client).unwrap();
        assert_eq!(
            Some("true".to_string()),
            storage
                .get_item(&client, INSTALL_PROMPT_DISMISSED_KEY)
                .unwrap()
        );
        storage
            .remove_item(&client, INSTALL_PROMPT_DISMISSED_KEY)
            .unwrap();
        assert!(!storage.is_install_prompt_dismissed(&client).unwrap());
    }

    #[test]
    fn reject_client_ids_that_are_no_file_names() {
        let (_dir, storage) = storage();
        for id in ["", "../escape", "a/b", "a.json"] {
            assert!(storage.get_item(&Id::from(id), FAVORITES_KEY).is_err());
        }
    }

    #[test]
    fn toggle_favorites_through_use_cases() {
        struct Catalog(Vec<Location>);
        impl vg_core::repositories::CatalogRepo for Catalog {
            fn all_locations(&self) -> &[Location] {
                &self.0
            }
            fn all_routes(&self) -> &[Route] {
                &[]
            }
            fn all_recommendations(&self) -> &[Recommendation] {
                &[]
            }
        }
        let (_dir, storage) = storage();
        let catalog = Catalog(vec![location(5)]);
        let client = Id::new();
        let kind = ItemKind::Location;
        assert!(usecases::toggle_favorite(&storage, &catalog, &client, kind, 5.into()).unwrap());
        assert_eq!(1, usecases::count_favorites(&storage, &client).unwrap());
        assert!(!usecases::toggle_favorite(&storage, &catalog, &client, kind, 5.into()).unwrap());
        assert_eq!(0, usecases::count_favorites(&storage, &client).unwrap());
    }
}
