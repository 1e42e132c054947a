use super::prelude::*;
use crate::{rating::Rated, usecases::item_exists, util::validate};

#[derive(Debug, Clone)]
pub struct NewReview {
    pub item_kind: ItemKind,
    pub item_id: ItemId,
    pub rating: u8,
    pub comment: String,
}

pub fn create_review<R, C>(
    repo: &R,
    catalog: &C,
    author: Option<&User>,
    new_review: NewReview,
) -> Result<Review>
where
    R: ReviewRepo,
    C: CatalogRepo,
{
    let author = author.ok_or(Error::Unauthorized)?;
    let NewReview {
        item_kind,
        item_id,
        rating,
        comment,
    } = new_review;
    let rating = ReviewRating::try_from(rating)?;
    if !validate::is_valid_comment(&comment) {
        return Err(Error::CommentTooShort {
            min_len: validate::MIN_COMMENT_LEN,
        });
    }
    if !item_exists(catalog, item_kind, item_id) {
        return Err(RepoError::NotFound.into());
    }
    let review = Review {
        id: Id::new(),
        user_id: author.id.clone(),
        user_name: author.public_name().to_owned(),
        item_kind,
        item_id,
        rating,
        comment: comment.trim().to_owned(),
        created_at: Timestamp::now(),
    };
    log::debug!(
        "Creating review {} of {item_kind} {item_id} by user {}",
        review.id,
        author.id
    );
    repo.create_review(&review)?;
    Ok(review)
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListedReview {
    pub review: Review,
    /// Only the author may delete a review.
    pub deletable: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReviewList {
    pub stats: ReviewStats,
    /// Newest first
    pub reviews: Vec<ListedReview>,
}

/// All reviews of an item together with their summary.
///
/// The summary is recomputed from the loaded reviews.
pub fn load_reviews<R, C>(
    repo: &R,
    catalog: &C,
    kind: ItemKind,
    id: ItemId,
    viewer: Option<&Id>,
) -> Result<ReviewList>
where
    R: ReviewRepo,
    C: CatalogRepo,
{
    let reviews = repo.load_reviews_of_item(kind, id)?;
    let stats = match kind {
        ItemKind::Location => catalog.get_location(id)?.review_stats(&reviews),
        ItemKind::Route => catalog.get_route(id)?.review_stats(&reviews),
        ItemKind::Recommendation => catalog.get_recommendation(id)?.review_stats(&reviews),
    };
    let reviews = reviews
        .into_iter()
        .map(|review| ListedReview {
            deletable: viewer.is_some_and(|user_id| review.is_owned_by(user_id)),
            review,
        })
        .collect();
    Ok(ReviewList { stats, reviews })
}

pub fn delete_review<R: ReviewRepo>(repo: &R, user: Option<&User>, review_id: &Id) -> Result<()> {
    let user = user.ok_or(Error::Unauthorized)?;
    let review = repo.get_review(review_id)?;
    if !review.is_owned_by(&user.id) {
        return Err(Error::Forbidden);
    }
    log::debug!("Deleting review {review_id} of user {}", user.id);
    repo.delete_review(review_id)?;
    Ok(())
}

type RepoError = crate::repositories::Error;

#[cfg(test)]
mod tests {
    use super::{
        super::tests::{MockCatalog, MockDb},
        *,
    };
    use vg_entities::builders::*;

    fn catalog() -> MockCatalog {
        MockCatalog {
            locations: vec![Location::build().id(1).name("Teatro La Fenice").finish()],
            routes: vec![Route::build().id(1).title("Murano and Burano").finish()],
            recommendations: vec![],
        }
    }

    fn user(display_name: Option<&str>) -> User {
        User {
            id: Id::new(),
            email: EmailAddress::new_unchecked("visitor@example.com".into()),
            display_name: display_name.map(Into::into),
            password: Password::from("hash".to_string()),
        }
    }

    fn new_review(kind: ItemKind, id: u32, rating: u8, comment: &str) -> NewReview {
        NewReview {
            item_kind: kind,
            item_id: id.into(),
            rating,
            comment: comment.into(),
        }
    }

    #[test]
    fn create_review_requires_a_user() {
        let db = MockDb::default();
        let review = new_review(ItemKind::Location, 1, 5, "An unforgettable evening");
        assert!(matches!(
            create_review(&db, &catalog(), None, review),
            Err(Error::Unauthorized)
        ));
        assert!(db.reviews.borrow().is_empty());
    }

    #[test]
    fn create_review_with_invalid_rating() {
        let db = MockDb::default();
        let user = user(None);
        for rating in [0, 6] {
            let review = new_review(ItemKind::Location, 1, rating, "An unforgettable evening");
            assert!(matches!(
                create_review(&db, &catalog(), Some(&user), review),
                Err(Error::RatingValue)
            ));
        }
    }

    #[test]
    fn comment_is_trimmed_before_validation() {
        let db = MockDb::default();
        let user = user(Some("Marco"));
        let review = new_review(ItemKind::Route, 1, 4, "   too short    ");
        assert!(matches!(
            create_review(&db, &catalog(), Some(&user), review),
            Err(Error::CommentTooShort { min_len: 10 })
        ));
        let review = new_review(ItemKind::Route, 1, 4, "  Lovely colors!  ");
        let review = create_review(&db, &catalog(), Some(&user), review).unwrap();
        assert_eq!("Lovely colors!", review.comment);
        assert_eq!("Marco", review.user_name);
        assert_eq!(user.id, review.user_id);
    }

    #[test]
    fn anonymous_user_name() {
        let db = MockDb::default();
        let user = user(None);
        let review = new_review(ItemKind::Location, 1, 3, "Good acoustics");
        let review = create_review(&db, &catalog(), Some(&user), review).unwrap();
        assert_eq!("Anonymous", review.user_name);
    }

    #[test]
    fn review_unknown_item() {
        let db = MockDb::default();
        let user = user(None);
        let review = new_review(ItemKind::Recommendation, 1, 3, "Does not exist");
        assert!(matches!(
            create_review(&db, &catalog(), Some(&user), review),
            Err(Error::Repo(RepoError::NotFound))
        ));
    }

    #[test]
    fn list_reviews_newest_first_with_summary() {
        let db = MockDb::default();
        let author = user(Some("Author"));
        let other = user(Some("Other"));
        for (i, rating) in [5, 4, 3].into_iter().enumerate() {
            db.reviews.borrow_mut().push(
                Review::build()
                    .user_id(author.id.as_str())
                    .item(ItemKind::Location, 1)
                    .rating(rating)
                    .comment("Worth every euro")
                    .created_at(Timestamp::from_secs(i as i64))
                    .finish(),
            );
        }
        db.reviews.borrow_mut().push(
            Review::build()
                .user_id(other.id.as_str())
                .item(ItemKind::Route, 1)
                .rating(1)
                .comment("Way too crowded")
                .finish(),
        );

        let list = load_reviews(&db, &catalog(), ItemKind::Location, 1.into(), None).unwrap();
        assert_eq!(3, list.stats.count);
        assert_eq!(4.0, f64::from(list.stats.average));
        let ratings: Vec<_> = list
            .reviews
            .iter()
            .map(|r| r.review.rating.to_u8())
            .collect();
        assert_eq!(vec![3, 4, 5], ratings);
        assert!(list.reviews.iter().all(|r| !r.deletable));

        let list =
            load_reviews(&db, &catalog(), ItemKind::Location, 1.into(), Some(&author.id)).unwrap();
        assert!(list.reviews.iter().all(|r| r.deletable));
        let list =
            load_reviews(&db, &catalog(), ItemKind::Location, 1.into(), Some(&other.id)).unwrap();
        assert!(list.reviews.iter().all(|r| !r.deletable));
    }

    #[test]
    fn list_reviews_without_reviews() {
        let db = MockDb::default();
        let list = load_reviews(&db, &catalog(), ItemKind::Route, 1.into(), None).unwrap();
        assert_eq!(0, list.stats.count);
        assert_eq!(0.0, f64::from(list.stats.average));
        assert!(list.reviews.is_empty());
    }

    #[test]
    fn only_the_author_can_delete_a_review() {
        let db = MockDb::default();
        let author = user(None);
        let other = user(None);
        let review = new_review(ItemKind::Location, 1, 5, "An unforgettable evening");
        let review = create_review(&db, &catalog(), Some(&author), review).unwrap();
        assert!(matches!(
            delete_review(&db, None, &review.id),
            Err(Error::Unauthorized)
        ));
        assert!(matches!(
            delete_review(&db, Some(&other), &review.id),
            Err(Error::Forbidden)
        ));
        assert_eq!(1, db.reviews.borrow().len());
        delete_review(&db, Some(&author), &review.id).unwrap();
        assert!(db.reviews.borrow().is_empty());
        assert!(matches!(
            delete_review(&db, Some(&author), &review.id),
            Err(Error::Repo(RepoError::NotFound))
        ));
    }
}
