use diesel::prelude::*;
use diesel::sqlite::Sqlite;

use crate::{
    domain::content_type::ContentType,
    domain::tag::{
        NewTag as DomainNewTag, NewTaggedItem as DomainNewTaggedItem, Tag as DomainTag,
        TagListQuery, TaggedItem as DomainTaggedItem,
    },
    models::tag::{
        NewTag as DbNewTag, NewTaggedItem as DbNewTaggedItem, Tag as DbTag,
        TaggedItem as DbTaggedItem,
    },
    repository::{
        DieselRepository, LIKE_ESCAPE, RepositoryError, RepositoryResult, TagReader, TagWriter,
        escape_like,
    },
    schema::{tagged_items, tags},
};

fn filtered_tags(query: &TagListQuery) -> tags::BoxedQuery<'_, Sqlite> {
    let mut items = tags::table.into_boxed::<Sqlite>();

    if let Some(term) = query.search.as_ref() {
        items = items.filter(
            tags::label
                .like(format!("%{}%", escape_like(term)))
                .escape(LIKE_ESCAPE),
        );
    }

    items
}

impl TagReader for DieselRepository {
    fn get_tag_by_id(&self, id: i32) -> RepositoryResult<Option<DomainTag>> {
        let mut conn = self.conn()?;
        let tag = tags::table
            .filter(tags::id.eq(id))
            .first::<DbTag>(&mut conn)
            .optional()?;

        Ok(tag.map(Into::into))
    }

    fn list_tags(&self, query: TagListQuery) -> RepositoryResult<(usize, Vec<DomainTag>)> {
        let mut conn = self.conn()?;

        let total = filtered_tags(&query)
            .count()
            .get_result::<i64>(&mut conn)? as usize;

        let mut items = filtered_tags(&query).order(tags::label.asc());

        if let Some(pagination) = &query.pagination {
            items = items
                .offset(pagination.offset())
                .limit(pagination.limit());
        }

        let db_tags = items.load::<DbTag>(&mut conn)?;

        Ok((total, db_tags.into_iter().map(Into::into).collect()))
    }

    fn list_tags_for(
        &self,
        content_type: ContentType,
        object_id: i32,
    ) -> RepositoryResult<Vec<DomainTag>> {
        let mut conn = self.conn()?;

        let db_tags = tagged_items::table
            .inner_join(tags::table)
            .filter(tagged_items::content_type.eq(content_type.as_str()))
            .filter(tagged_items::object_id.eq(object_id))
            .order(tags::label.asc())
            .select(DbTag::as_select())
            .load::<DbTag>(&mut conn)?;

        Ok(db_tags.into_iter().map(Into::into).collect())
    }
}

impl TagWriter for DieselRepository {
    fn create_tag(&self, new_tag: &DomainNewTag) -> RepositoryResult<DomainTag> {
        let mut conn = self.conn()?;
        let db_new = DbNewTag::from(new_tag);

        let created = diesel::insert_into(tags::table)
            .values(&db_new)
            .get_result::<DbTag>(&mut conn)?;

        Ok(created.into())
    }

    fn delete_tag(&self, tag_id: i32) -> RepositoryResult<()> {
        let mut conn = self.conn()?;

        let deleted = diesel::delete(tags::table.filter(tags::id.eq(tag_id))).execute(&mut conn)?;

        if deleted == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }

    fn tag_object(&self, new_item: &DomainNewTaggedItem) -> RepositoryResult<DomainTaggedItem> {
        let mut conn = self.conn()?;
        let db_new = DbNewTaggedItem::from(new_item);

        conn.immediate_transaction::<DomainTaggedItem, RepositoryError, _>(|conn| {
            let tag_found =
                diesel::select(diesel::dsl::exists(tags::table.filter(tags::id.eq(db_new.tag_id))))
                    .get_result::<bool>(conn)?;

            if !tag_found {
                return Err(RepositoryError::NotFound);
            }

            let existing = tagged_items::table
                .filter(tagged_items::tag_id.eq(db_new.tag_id))
                .filter(tagged_items::content_type.eq(db_new.content_type))
                .filter(tagged_items::object_id.eq(db_new.object_id))
                .first::<DbTaggedItem>(conn)
                .optional()?;

            let item = match existing {
                Some(item) => item,
                None => diesel::insert_into(tagged_items::table)
                    .values(&db_new)
                    .get_result::<DbTaggedItem>(conn)?,
            };

            Ok(DomainTaggedItem::try_from(item)?)
        })
    }

    fn untag_object(
        &self,
        tag_id: i32,
        content_type: ContentType,
        object_id: i32,
    ) -> RepositoryResult<()> {
        let mut conn = self.conn()?;

        let deleted = diesel::delete(
            tagged_items::table
                .filter(tagged_items::tag_id.eq(tag_id))
                .filter(tagged_items::content_type.eq(content_type.as_str()))
                .filter(tagged_items::object_id.eq(object_id)),
        )
        .execute(&mut conn)?;

        if deleted == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
