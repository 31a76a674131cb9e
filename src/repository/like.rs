use diesel::prelude::*;

use crate::{
    domain::content_type::ContentType,
    domain::like::{LikedItem as DomainLikedItem, NewLikedItem as DomainNewLikedItem},
    models::like::{LikedItem as DbLikedItem, NewLikedItem as DbNewLikedItem},
    repository::{DieselRepository, LikeReader, LikeWriter, RepositoryError, RepositoryResult},
    schema::liked_items,
};

impl LikeReader for DieselRepository {
    fn count_likes(&self, content_type: ContentType, object_id: i32) -> RepositoryResult<usize> {
        let mut conn = self.conn()?;

        let total = liked_items::table
            .filter(liked_items::content_type.eq(content_type.as_str()))
            .filter(liked_items::object_id.eq(object_id))
            .count()
            .get_result::<i64>(&mut conn)?;

        Ok(total as usize)
    }
}

impl LikeWriter for DieselRepository {
    fn like_object(&self, new_like: &DomainNewLikedItem) -> RepositoryResult<DomainLikedItem> {
        let mut conn = self.conn()?;
        let db_new = DbNewLikedItem::from(new_like);

        conn.immediate_transaction::<DomainLikedItem, RepositoryError, _>(|conn| {
            let existing = liked_items::table
                .filter(liked_items::user_id.eq(db_new.user_id))
                .filter(liked_items::content_type.eq(db_new.content_type))
                .filter(liked_items::object_id.eq(db_new.object_id))
                .first::<DbLikedItem>(conn)
                .optional()?;

            let item = match existing {
                Some(item) => item,
                None => diesel::insert_into(liked_items::table)
                    .values(&db_new)
                    .get_result::<DbLikedItem>(conn)?,
            };

            Ok(DomainLikedItem::try_from(item)?)
        })
    }

    fn unlike_object(
        &self,
        user_id: i32,
        content_type: ContentType,
        object_id: i32,
    ) -> RepositoryResult<()> {
        let mut conn = self.conn()?;

        let deleted = diesel::delete(
            liked_items::table
                .filter(liked_items::user_id.eq(user_id))
                .filter(liked_items::content_type.eq(content_type.as_str()))
                .filter(liked_items::object_id.eq(object_id)),
        )
        .execute(&mut conn)?;

        if deleted == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
