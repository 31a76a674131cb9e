use diesel::prelude::*;

use crate::{
    domain::promotion::{
        NewPromotion as DomainNewPromotion, Promotion as DomainPromotion,
        UpdatePromotion as DomainUpdatePromotion,
    },
    models::promotion::{
        NewProductPromotion as DbNewProductPromotion, NewPromotion as DbNewPromotion,
        Promotion as DbPromotion, UpdatePromotion as DbUpdatePromotion,
    },
    repository::{
        DieselRepository, PromotionReader, PromotionWriter, RepositoryError, RepositoryResult,
    },
    schema::{product_promotions, products, promotions},
};

impl PromotionReader for DieselRepository {
    fn get_promotion_by_id(&self, id: i32) -> RepositoryResult<Option<DomainPromotion>> {
        let mut conn = self.conn()?;

        let promotion = promotions::table
            .filter(promotions::id.eq(id))
            .first::<DbPromotion>(&mut conn)
            .optional()?;

        Ok(promotion.map(Into::into))
    }

    fn list_promotions(&self) -> RepositoryResult<Vec<DomainPromotion>> {
        let mut conn = self.conn()?;

        let items = promotions::table
            .order(promotions::id.asc())
            .load::<DbPromotion>(&mut conn)?;

        Ok(items.into_iter().map(Into::into).collect())
    }

    fn list_product_promotions(&self, product_id: i32) -> RepositoryResult<Vec<DomainPromotion>> {
        let mut conn = self.conn()?;

        let items = product_promotions::table
            .inner_join(promotions::table)
            .filter(product_promotions::product_id.eq(product_id))
            .order(promotions::id.asc())
            .select(DbPromotion::as_select())
            .load::<DbPromotion>(&mut conn)?;

        Ok(items.into_iter().map(Into::into).collect())
    }
}

impl PromotionWriter for DieselRepository {
    fn create_promotion(
        &self,
        new_promotion: &DomainNewPromotion,
    ) -> RepositoryResult<DomainPromotion> {
        let mut conn = self.conn()?;
        let db_new = DbNewPromotion::from(new_promotion);

        let created = diesel::insert_into(promotions::table)
            .values(&db_new)
            .get_result::<DbPromotion>(&mut conn)?;

        Ok(created.into())
    }

    fn update_promotion(
        &self,
        promotion_id: i32,
        updates: &DomainUpdatePromotion,
    ) -> RepositoryResult<DomainPromotion> {
        let mut conn = self.conn()?;

        let target = promotions::table.filter(promotions::id.eq(promotion_id));

        if updates.is_empty() {
            return target
                .first::<DbPromotion>(&mut conn)
                .map(Into::into)
                .map_err(RepositoryError::from);
        }

        let db_updates = DbUpdatePromotion::from(updates);
        let updated = diesel::update(target)
            .set(&db_updates)
            .get_result::<DbPromotion>(&mut conn)?;

        Ok(updated.into())
    }

    fn delete_promotion(&self, promotion_id: i32) -> RepositoryResult<()> {
        let mut conn = self.conn()?;

        let deleted = diesel::delete(promotions::table.filter(promotions::id.eq(promotion_id)))
            .execute(&mut conn)?;

        if deleted == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }

    fn attach_promotion(&self, product_id: i32, promotion_id: i32) -> RepositoryResult<()> {
        let mut conn = self.conn()?;

        conn.immediate_transaction::<(), RepositoryError, _>(|conn| {
            let product_found = diesel::select(diesel::dsl::exists(
                products::table.filter(products::id.eq(product_id)),
            ))
            .get_result::<bool>(conn)?;
            let promotion_found = diesel::select(diesel::dsl::exists(
                promotions::table.filter(promotions::id.eq(promotion_id)),
            ))
            .get_result::<bool>(conn)?;

            if !product_found || !promotion_found {
                return Err(RepositoryError::NotFound);
            }

            let attached = diesel::select(diesel::dsl::exists(
                product_promotions::table
                    .filter(product_promotions::product_id.eq(product_id))
                    .filter(product_promotions::promotion_id.eq(promotion_id)),
            ))
            .get_result::<bool>(conn)?;

            if !attached {
                diesel::insert_into(product_promotions::table)
                    .values(&DbNewProductPromotion {
                        product_id,
                        promotion_id,
                    })
                    .execute(conn)?;
            }

            Ok(())
        })
    }

    fn detach_promotion(&self, product_id: i32, promotion_id: i32) -> RepositoryResult<()> {
        let mut conn = self.conn()?;

        let deleted = diesel::delete(
            product_promotions::table
                .filter(product_promotions::product_id.eq(product_id))
                .filter(product_promotions::promotion_id.eq(promotion_id)),
        )
        .execute(&mut conn)?;

        if deleted == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
