use crate::{id::*, item::*, time::*};

/// Star rating of a review.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ReviewRating(u8);

impl ReviewRating {
    pub const fn min() -> Self {
        Self(1)
    }

    pub const fn max() -> Self {
        Self(5)
    }

    pub fn is_valid(self) -> bool {
        self >= Self::min() && self <= Self::max()
    }

    pub const fn to_u8(self) -> u8 {
        self.0
    }
}

impl Default for ReviewRating {
    fn default() -> Self {
        Self::max()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("Rating out of range")]
pub struct ReviewRatingOutOfRange;

impl TryFrom<u8> for ReviewRating {
    type Error = ReviewRatingOutOfRange;
    fn try_from(from: u8) -> Result<Self, Self::Error> {
        let rating = Self(from);
        if rating.is_valid() {
            Ok(rating)
        } else {
            Err(ReviewRatingOutOfRange)
        }
    }
}

impl From<ReviewRating> for u8 {
    fn from(from: ReviewRating) -> Self {
        from.0
    }
}

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Review {
    pub id         : Id,
    pub user_id    : Id,
    pub user_name  : String,
    pub item_kind  : ItemKind,
    pub item_id    : ItemId,
    pub rating     : ReviewRating,
    pub comment    : String,
    pub created_at : Timestamp,
}

impl Review {
    pub fn is_owned_by(&self, user_id: &Id) -> bool {
        &self.user_id == user_id
    }

    pub fn is_about(&self, kind: ItemKind, id: ItemId) -> bool {
        self.item_kind == kind && self.item_id == id
    }
}

/// Mean of all ratings, rounded to one decimal.
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd)]
pub struct AvgReviewRating(f64);

impl AvgReviewRating {
    /// Number of filled stars.
    pub fn stars(self) -> u8 {
        self.0.round() as u8
    }
}

impl From<AvgReviewRating> for f64 {
    fn from(from: AvgReviewRating) -> Self {
        from.0
    }
}

#[derive(Debug, Default, Clone)]
pub struct AvgReviewRatingBuilder {
    acc: u64,
    cnt: usize,
}

impl AvgReviewRatingBuilder {
    pub fn add(&mut self, rating: ReviewRating) {
        debug_assert!(rating.is_valid());
        self.acc += u64::from(rating.0);
        self.cnt += 1;
    }

    pub fn count(&self) -> usize {
        self.cnt
    }

    pub fn build(self) -> AvgReviewRating {
        if self.cnt > 0 {
            let avg = self.acc as f64 / self.cnt as f64;
            AvgReviewRating((avg * 10.0).round() / 10.0)
        } else {
            Default::default()
        }
    }
}

impl std::ops::AddAssign<ReviewRating> for AvgReviewRatingBuilder {
    fn add_assign(&mut self, rhs: ReviewRating) {
        self.add(rhs);
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct ReviewStats {
    pub count: usize,
    pub average: AvgReviewRating,
}
