pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::{
    location_builder::*, recommendation_builder::*, review_builder::*, route_builder::*,
};

pub mod location_builder {

    use super::*;
    use crate::{geo::*, location::*, price::*};

    #[derive(Debug)]
    pub struct LocationBuild {
        location: Location,
    }

    impl LocationBuild {
        pub fn id(mut self, id: u32) -> Self {
            self.location.id = id.into();
            self
        }
        pub fn name(mut self, name: &str) -> Self {
            self.location.name = name.into();
            self
        }
        pub fn category(mut self, category: &str) -> Self {
            self.location.category = category.into();
            self
        }
        pub fn price(mut self, price: PriceTier) -> Self {
            self.location.price = price;
            self
        }
        pub fn pos(mut self, pos: MapPoint) -> Self {
            self.location.pos = pos;
            self
        }
        pub fn description(mut self, desc: &str) -> Self {
            self.location.description = desc.into();
            self
        }
        pub fn finish(self) -> Location {
            self.location
        }
    }

    impl Builder for Location {
        type Build = LocationBuild;
        fn build() -> LocationBuild {
            LocationBuild {
                location: Location {
                    id: Default::default(),
                    name: "".into(),
                    category: "".into(),
                    price: PriceTier::Free,
                    pos: VENICE_CENTER,
                    description: "".into(),
                    tips: None,
                    image: None,
                },
            }
        }
    }
}

pub mod route_builder {

    use super::*;
    use crate::{price::*, route::*};

    #[derive(Debug)]
    pub struct RouteBuild {
        route: Route,
    }

    impl RouteBuild {
        pub fn id(mut self, id: u32) -> Self {
            self.route.id = id.into();
            self
        }
        pub fn title(mut self, title: &str) -> Self {
            self.route.title = title.into();
            self
        }
        pub fn description(mut self, desc: &str) -> Self {
            self.route.description = desc.into();
            self
        }
        pub fn category(mut self, category: &str) -> Self {
            self.route.category = category.into();
            self
        }
        pub fn stops(mut self, stops: Vec<Stop>) -> Self {
            self.route.stops = stops;
            self
        }
        pub fn finish(self) -> Route {
            self.route
        }
    }

    impl Builder for Route {
        type Build = RouteBuild;
        fn build() -> RouteBuild {
            RouteBuild {
                route: Route {
                    id: Default::default(),
                    title: "".into(),
                    description: "".into(),
                    category: "".into(),
                    difficulty: Difficulty::Easy,
                    duration: "".into(),
                    price: PriceTier::Free,
                    image: None,
                    highlights: vec![],
                    stops: vec![],
                },
            }
        }
    }
}

pub mod recommendation_builder {

    use super::*;
    use crate::{price::*, recommendation::*};

    #[derive(Debug)]
    pub struct RecommendationBuild {
        recommendation: Recommendation,
    }

    impl RecommendationBuild {
        pub fn id(mut self, id: u32) -> Self {
            self.recommendation.id = id.into();
            self
        }
        pub fn name(mut self, name: &str) -> Self {
            self.recommendation.name = name.into();
            self
        }
        pub fn description(mut self, desc: &str) -> Self {
            self.recommendation.description = desc.into();
            self
        }
        pub fn category(mut self, category: &str) -> Self {
            self.recommendation.category = category.into();
            self
        }
        pub fn price(mut self, price: PriceTier) -> Self {
            self.recommendation.price = price;
            self
        }
        pub fn finish(self) -> Recommendation {
            self.recommendation
        }
    }

    impl Builder for Recommendation {
        type Build = RecommendationBuild;
        fn build() -> RecommendationBuild {
            RecommendationBuild {
                recommendation: Recommendation {
                    id: Default::default(),
                    name: "".into(),
                    category: "".into(),
                    subcategory: "".into(),
                    price: PriceTier::Free,
                    rating: 0.0,
                    description: "".into(),
                    address: None,
                    pos: None,
                    image: None,
                    highlights: vec![],
                    tips: None,
                },
            }
        }
    }
}

pub mod review_builder {

    use super::*;
    use crate::{id::*, item::*, review::*, time::*};

    #[derive(Debug)]
    pub struct ReviewBuild {
        review: Review,
    }

    impl ReviewBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.review.id = id.into();
            self
        }
        pub fn user_id(mut self, user_id: &str) -> Self {
            self.review.user_id = user_id.into();
            self
        }
        pub fn user_name(mut self, user_name: &str) -> Self {
            self.review.user_name = user_name.into();
            self
        }
        pub fn item(mut self, kind: ItemKind, id: u32) -> Self {
            self.review.item_kind = kind;
            self.review.item_id = id.into();
            self
        }
        pub fn rating(mut self, rating: u8) -> Self {
            self.review.rating = ReviewRating::try_from(rating).unwrap();
            self
        }
        pub fn comment(mut self, comment: &str) -> Self {
            self.review.comment = comment.into();
            self
        }
        pub fn created_at(mut self, created_at: Timestamp) -> Self {
            self.review.created_at = created_at;
            self
        }
        pub fn finish(self) -> Review {
            self.review
        }
    }

    impl Builder for Review {
        type Build = ReviewBuild;
        fn build() -> ReviewBuild {
            ReviewBuild {
                review: Review {
                    id: Id::new(),
                    user_id: Id::new(),
                    user_name: "".into(),
                    item_kind: ItemKind::Location,
                    item_id: Default::default(),
                    rating: ReviewRating::default(),
                    comment: "".into(),
                    created_at: Timestamp::now(),
                },
            }
        }
    }
}
