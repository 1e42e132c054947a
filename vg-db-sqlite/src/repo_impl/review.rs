use super::*;

fn load_review(review: models::JoinedReview) -> Result<Review> {
    let models::JoinedReview {
        id,
        user_name,
        item_type,
        item_id,
        rating,
        comment,
        created_at,
        user_id,
    } = review;
    let item_kind = item_type
        .parse::<ItemKind>()
        .map_err(|_| anyhow!("Invalid item type: {item_type}"))?;
    let item_id = u32::try_from(item_id)
        .map_err(|_| anyhow!("Invalid item id: {item_id}"))?
        .into();
    let rating = u8::try_from(rating)
        .ok()
        .and_then(|r| ReviewRating::try_from(r).ok())
        .ok_or_else(|| anyhow!("Invalid rating: {rating}"))?;
    Ok(Review {
        id: id.into(),
        user_id: user_id.into(),
        user_name,
        item_kind,
        item_id,
        rating,
        comment,
        created_at: Timestamp::from_millis(created_at),
    })
}

macro_rules! impl_review_repo {
    ($($db:ty),+) => {
        $(
            impl ReviewRepo for $db {
                fn create_review(&self, review: &Review) -> Result<()> {
                    self.write(|conn| create_review(conn, review))
                }

                fn get_review(&self, id: &Id) -> Result<Review> {
                    self.read(|conn| get_review(conn, id))
                }
                fn load_reviews_of_item(&self, kind: ItemKind, id: ItemId) -> Result<Vec<Review>> {
                    self.read(|conn| load_reviews_of_item(conn, kind, id))
                }

                fn delete_review(&self, id: &Id) -> Result<()> {
                    self.write(|conn| delete_review(conn, id))
                }
            }
        )+
    };
}

impl_review_repo!(DbReadOnly<'_>, DbReadWrite<'_>, DbConnection<'_>);

fn create_review(conn: &mut SqliteConnection, review: &Review) -> Result<()> {
    let user_rowid = resolve_user_rowid(conn, &review.user_id)?;
    let item_type: &'static str = review.item_kind.into();
    let new_review = models::NewReview {
        id: review.id.as_str(),
        user_rowid,
        user_name: &review.user_name,
        item_type,
        item_id: review.item_id.to_u32().into(),
        rating: review.rating.to_u8().into(),
        comment: &review.comment,
        created_at: review.created_at.as_millis(),
    };
    diesel::insert_into(schema::reviews::table)
        .values(&new_review)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn delete_review(conn: &mut SqliteConnection, id: &Id) -> Result<()> {
    use schema::reviews::dsl;
    let count = diesel::delete(dsl::reviews.filter(dsl::id.eq(id.as_str())))
        .execute(conn)
        .map_err(from_diesel_err)?;
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    debug_assert_eq!(1, count);
    Ok(())
}

macro_rules! joined_reviews {
    () => {{
        use schema::{reviews::dsl as r, users::dsl as u};
        schema::reviews::table
            .inner_join(schema::users::table)
            .select((
                r::id,
                r::user_name,
                r::item_type,
                r::item_id,
                r::rating,
                r::comment,
                r::created_at,
                u::id,
            ))
    }};
}

fn get_review(conn: &mut SqliteConnection, id: &Id) -> Result<Review> {
    use schema::reviews::dsl;
    let review = joined_reviews!()
        .filter(dsl::id.eq(id.as_str()))
        .first::<models::JoinedReview>(conn)
        .map_err(from_diesel_err)?;
    load_review(review)
}

fn load_reviews_of_item(
    conn: &mut SqliteConnection,
    kind: ItemKind,
    id: ItemId,
) -> Result<Vec<Review>> {
    use schema::reviews::dsl;
    let item_type: &'static str = kind.into();
    joined_reviews!()
        .filter(dsl::item_type.eq(item_type))
        .filter(dsl::item_id.eq(i64::from(id.to_u32())))
        .order_by(dsl::created_at.desc())
        .then_order_by(dsl::rowid.desc())
        .load::<models::JoinedReview>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(load_review)
        .collect()
}
