// Low-level data access traits.
// Each repository is responsible for a single entity.
// Related entities are only referenced by their id and
// never modified or loaded by another repository.

use crate::entities::*;
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The requested object could not be found")]
    NotFound,
    #[error("The object already exists")]
    AlreadyExists,
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

type Result<T> = std::result::Result<T, Error>;

/// Read-only access to the static catalogs.
pub trait CatalogRepo {
    fn all_locations(&self) -> &[Location];
    fn all_routes(&self) -> &[Route];
    fn all_recommendations(&self) -> &[Recommendation];

    fn get_location(&self, id: ItemId) -> Result<&Location> {
        find_by_id(self.all_locations(), id)
    }
    fn get_route(&self, id: ItemId) -> Result<&Route> {
        find_by_id(self.all_routes(), id)
    }
    fn get_recommendation(&self, id: ItemId) -> Result<&Recommendation> {
        find_by_id(self.all_recommendations(), id)
    }
}

fn find_by_id<T: CatalogItem>(items: &[T], id: ItemId) -> Result<&T> {
    items.iter().find(|x| x.id() == id).ok_or(Error::NotFound)
}

pub trait UserRepo {
    fn create_user(&self, user: &User) -> Result<()>;

    fn get_user(&self, id: &Id) -> Result<User>;
    fn try_get_user_by_email(&self, email: &EmailAddress) -> Result<Option<User>>;
    fn get_user_by_email(&self, email: &EmailAddress) -> Result<User> {
        self.try_get_user_by_email(email)?.ok_or(Error::NotFound)
    }

    fn count_users(&self) -> Result<usize>;
}

pub trait ReviewRepo {
    fn create_review(&self, review: &Review) -> Result<()>;

    fn get_review(&self, id: &Id) -> Result<Review>;

    // Newest first
    fn load_reviews_of_item(&self, kind: ItemKind, id: ItemId) -> Result<Vec<Review>>;

    fn delete_review(&self, id: &Id) -> Result<()>;
}

/// Per-client state that a browser would keep in its local storage.
pub trait FavoritesRepo {
    // Missing or unreadable favorites are returned as empty favorites.
    fn load_favorites(&self, client_id: &Id) -> Result<Favorites>;
    fn save_favorites(&self, client_id: &Id, favorites: &Favorites) -> Result<()>;
}

pub trait InstallPromptRepo {
    fn is_install_prompt_dismissed(&self, client_id: &Id) -> Result<bool>;
    fn dismiss_install_prompt(&self, client_id: &Id) -> Result<()>;
}
