use diesel::prelude::*;

use crate::{
    domain::review::{
        NewReview as DomainNewReview, Review as DomainReview, UpdateReview as DomainUpdateReview,
    },
    models::review::{
        NewReview as DbNewReview, Review as DbReview, UpdateReview as DbUpdateReview,
    },
    repository::{DieselRepository, RepositoryError, RepositoryResult, ReviewReader, ReviewWriter},
    schema::reviews,
};

impl ReviewReader for DieselRepository {
    fn get_review(&self, product_id: i32, review_id: i32) -> RepositoryResult<Option<DomainReview>> {
        let mut conn = self.conn()?;

        let review = reviews::table
            .filter(reviews::id.eq(review_id))
            .filter(reviews::product_id.eq(product_id))
            .first::<DbReview>(&mut conn)
            .optional()?;

        Ok(review.map(Into::into))
    }

    fn list_reviews(&self, product_id: i32) -> RepositoryResult<Vec<DomainReview>> {
        let mut conn = self.conn()?;

        let items = reviews::table
            .filter(reviews::product_id.eq(product_id))
            .order((reviews::date.desc(), reviews::id.desc()))
            .load::<DbReview>(&mut conn)?;

        Ok(items.into_iter().map(Into::into).collect())
    }
}

impl ReviewWriter for DieselRepository {
    fn create_review(&self, new_review: &DomainNewReview) -> RepositoryResult<DomainReview> {
        let mut conn = self.conn()?;
        let db_new = DbNewReview::from(new_review);

        let created = diesel::insert_into(reviews::table)
            .values(&db_new)
            .get_result::<DbReview>(&mut conn)?;

        Ok(created.into())
    }

    fn update_review(
        &self,
        product_id: i32,
        review_id: i32,
        updates: &DomainUpdateReview,
    ) -> RepositoryResult<DomainReview> {
        let mut conn = self.conn()?;

        let target = reviews::table
            .filter(reviews::id.eq(review_id))
            .filter(reviews::product_id.eq(product_id));

        // An empty changeset is rejected by diesel, so return the stored row.
        if updates.name.is_none() && updates.description.is_none() && updates.date.is_none() {
            return target
                .first::<DbReview>(&mut conn)
                .map(Into::into)
                .map_err(RepositoryError::from);
        }

        let db_updates = DbUpdateReview::from(updates);
        let updated = diesel::update(target)
            .set(&db_updates)
            .get_result::<DbReview>(&mut conn)?;

        Ok(updated.into())
    }

    fn delete_review(&self, product_id: i32, review_id: i32) -> RepositoryResult<()> {
        let mut conn = self.conn()?;

        let deleted = diesel::delete(
            reviews::table
                .filter(reviews::id.eq(review_id))
                .filter(reviews::product_id.eq(product_id)),
        )
        .execute(&mut conn)?;

        if deleted == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
