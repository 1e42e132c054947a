use std::{
    cell::RefCell,
    collections::{HashMap, HashSet},
};

use super::prelude::*;

type RepoResult<T> = std::result::Result<T, RepoError>;
type RepoError = crate::repositories::Error;

#[derive(Default)]
pub struct MockDb {
    pub users: RefCell<Vec<User>>,
    pub reviews: RefCell<Vec<Review>>,
    pub favorites: RefCell<HashMap<Id, Favorites>>,
    pub dismissed_install_prompts: RefCell<HashSet<Id>>,
}

#[derive(Default)]
pub struct MockCatalog {
    pub locations: Vec<Location>,
    pub routes: Vec<Route>,
    pub recommendations: Vec<Recommendation>,
}

impl CatalogRepo for MockCatalog {
    fn all_locations(&self) -> &[Location] {
        &self.locations
    }
    fn all_routes(&self) -> &[Route] {
        &self.routes
    }
    fn all_recommendations(&self) -> &[Recommendation] {
        &self.recommendations
    }
}

impl UserRepo for MockDb {
    fn create_user(&self, user: &User) -> RepoResult<()> {
        let mut users = self.users.borrow_mut();
        if users.iter().any(|u| u.id == user.id || u.email == user.email) {
            return Err(RepoError::AlreadyExists);
        }
        users.push(user.clone());
        Ok(())
    }

    fn get_user(&self, id: &Id) -> RepoResult<User> {
        self.users
            .borrow()
            .iter()
            .find(|u| &u.id == id)
            .cloned()
            .ok_or(RepoError::NotFound)
    }

    fn try_get_user_by_email(&self, email: &EmailAddress) -> RepoResult<Option<User>> {
        Ok(self
            .users
            .borrow()
            .iter()
            .find(|u| &u.email == email)
            .cloned())
    }

    fn count_users(&self) -> RepoResult<usize> {
        Ok(self.users.borrow().len())
    }
}

impl ReviewRepo for MockDb {
    fn create_review(&self, review: &Review) -> RepoResult<()> {
        let mut reviews = self.reviews.borrow_mut();
        if reviews.iter().any(|r| r.id == review.id) {
            return Err(RepoError::AlreadyExists);
        }
        reviews.push(review.clone());
        Ok(())
    }

    fn get_review(&self, id: &Id) -> RepoResult<Review> {
        self.reviews
            .borrow()
            .iter()
            .find(|r| &r.id == id)
            .cloned()
            .ok_or(RepoError::NotFound)
    }

    fn load_reviews_of_item(&self, kind: ItemKind, id: ItemId) -> RepoResult<Vec<Review>> {
        let mut reviews: Vec<_> = self
            .reviews
            .borrow()
            .iter()
            .filter(|r| r.is_about(kind, id))
            .cloned()
            .collect();
        reviews.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(reviews)
    }

    fn delete_review(&self, id: &Id) -> RepoResult<()> {
        let mut reviews = self.reviews.borrow_mut();
        let len_before = reviews.len();
        reviews.retain(|r| &r.id != id);
        if reviews.len() == len_before {
            return Err(RepoError::NotFound);
        }
        Ok(())
    }
}

impl FavoritesRepo for MockDb {
    fn load_favorites(&self, client_id: &Id) -> RepoResult<Favorites> {
        Ok(self
            .favorites
            .borrow()
            .get(client_id)
            .cloned()
            .unwrap_or_default())
    }

    fn save_favorites(&self, client_id: &Id, favorites: &Favorites) -> RepoResult<()> {
        self.favorites
            .borrow_mut()
            .insert(client_id.clone(), favorites.clone());
        Ok(())
    }
}

impl InstallPromptRepo for MockDb {
    fn is_install_prompt_dismissed(&self, client_id: &Id) -> RepoResult<bool> {
        Ok(self.dismissed_install_prompts.borrow().contains(client_id))
    }

    fn dismiss_install_prompt(&self, client_id: &Id) -> RepoResult<()> {
        self.dismissed_install_prompts
            .borrow_mut()
            .insert(client_id.clone());
        Ok(())
    }
}
