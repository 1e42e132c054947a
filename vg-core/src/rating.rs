use vg_entities::{item::*, review::*};

pub trait Rated {
    fn review_stats(&self, _: &[Review]) -> ReviewStats;
}

impl<T> Rated for T
where
    T: CatalogItem,
{
    fn review_stats(&self, reviews: &[Review]) -> ReviewStats {
        debug_assert_eq!(
            reviews.len(),
            reviews
                .iter()
                .filter(|r| r.is_about(T::KIND, self.id()))
                .count()
        );
        let builder = reviews
            .iter()
            .fold(AvgReviewRatingBuilder::default(), |mut acc, r| {
                acc += r.rating;
                acc
            });
        ReviewStats {
            count: builder.count(),
            average: builder.build(),
        }
    }
}
