use super::*;
use vg_core::entities::Id;

#[get("/reviews/<kind>/<id>")]
pub fn get_reviews(
    db: sqlite::Connections,
    catalog: &State<StaticCatalog>,
    auth: Auth,
    kind: &str,
    id: u32,
) -> Result<json::ReviewList> {
    let kind = parse_item_kind(kind)?;
    let usecases::ReviewList { stats, reviews } = usecases::load_reviews(
        &db.shared()?,
        catalog.inner(),
        kind,
        ItemId::from(id),
        auth.try_user_id(),
    )?;
    Ok(Json(json::ReviewList {
        summary: stats.into(),
        reviews: reviews
            .into_iter()
            .map(|usecases::ListedReview { review, deletable }| {
                json::Review::from_entity(review, deletable)
            })
            .collect(),
    }))
}

#[post("/reviews/<kind>/<id>", format = "application/json", data = "<review>")]
pub fn post_review(
    db: sqlite::Connections,
    catalog: &State<StaticCatalog>,
    auth: Auth,
    kind: &str,
    id: u32,
    review: JsonResult<json::NewReview>,
) -> Result<json::Review> {
    let json::NewReview { rating, comment } = review?.into_inner();
    let new_review = usecases::NewReview {
        item_kind: parse_item_kind(kind)?,
        item_id: ItemId::from(id),
        rating,
        comment,
    };
    let review = {
        let db = db.exclusive()?;
        let author = auth.user(&db)?;
        usecases::create_review(&db, catalog.inner(), author.as_ref(), new_review)?
    };
    Ok(Json(json::Review::from_entity(review, true)))
}

#[delete("/reviews/<review_id>")]
pub fn delete_review(db: sqlite::Connections, auth: Auth, review_id: &str) -> Result<()> {
    let db = db.exclusive()?;
    let user = auth.user(&db)?;
    usecases::delete_review(&db, user.as_ref(), &Id::from(review_id))?;
    Ok(Json(()))
}
