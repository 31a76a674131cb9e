use serde::Deserialize;

use crate::domain::tag::{NewTaggedItem, Tag, TagListQuery, TaggedItem};
use crate::forms::empty_string_as_none;
use crate::forms::tags::AddTagForm;
use crate::pagination::{DEFAULT_ITEMS_PER_PAGE, Paginated};
use crate::repository::{TagReader, TagWriter};
use crate::services::{ServiceError, ServiceResult, parse_content_type};

/// Query parameters accepted by the tag listing.
#[derive(Debug, Default, Deserialize)]
pub struct TagsQuery {
    /// Optional case-insensitive search applied to tag labels.
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub search: Option<String>,
    /// Page number requested by the client (1-based).
    pub page: Option<usize>,
}

/// Fetches a page of tags ordered by label.
pub fn load_tags<R>(repo: &R, query: TagsQuery) -> ServiceResult<Paginated<Tag>>
where
    R: TagReader + ?Sized,
{
    let TagsQuery { search, page } = query;
    let page = page.unwrap_or(1).max(1);

    let mut list_query = TagListQuery::new();

    if let Some(term) = search.as_ref() {
        list_query = list_query.search(term.trim());
    }

    list_query = list_query.paginate(page, DEFAULT_ITEMS_PER_PAGE);

    let (total, tags) = repo.list_tags(list_query).map_err(ServiceError::from)?;
    let total_pages = total.div_ceil(DEFAULT_ITEMS_PER_PAGE);

    Ok(Paginated::new(tags, page, total_pages))
}

/// Creates a new tag; labels are unique.
pub fn create_tag<R>(repo: &R, form: AddTagForm) -> ServiceResult<Tag>
where
    R: TagWriter + ?Sized,
{
    let new_tag = form
        .into_new_tag()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    repo.create_tag(&new_tag).map_err(ServiceError::from)
}

/// Deletes a tag along with all of its associations.
pub fn remove_tag<R>(repo: &R, tag_id: i32) -> ServiceResult<()>
where
    R: TagWriter + ?Sized,
{
    repo.delete_tag(tag_id).map_err(ServiceError::from)
}

/// Attaches a tag to an object. Repeating the call is a no-op.
pub fn tag_object<R>(
    repo: &R,
    tag_id: i32,
    content_type: &str,
    object_id: i32,
) -> ServiceResult<TaggedItem>
where
    R: TagWriter + ?Sized,
{
    let content_type = parse_content_type(content_type)?;

    repo.tag_object(&NewTaggedItem {
        tag_id,
        content_type,
        object_id,
    })
    .map_err(ServiceError::from)
}

pub fn untag_object<R>(
    repo: &R,
    tag_id: i32,
    content_type: &str,
    object_id: i32,
) -> ServiceResult<()>
where
    R: TagWriter + ?Sized,
{
    let content_type = parse_content_type(content_type)?;

    repo.untag_object(tag_id, content_type, object_id)
        .map_err(ServiceError::from)
}

/// Tags attached to an object, ordered by label.
pub fn load_tags_for<R>(repo: &R, content_type: &str, object_id: i32) -> ServiceResult<Vec<Tag>>
where
    R: TagReader + ?Sized,
{
    let content_type = parse_content_type(content_type)?;

    repo.list_tags_for(content_type, object_id)
        .map_err(ServiceError::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::domain::content_type::ContentType;
    use crate::repository::RepositoryError;
    use crate::repository::mock::MockStore;

    fn sample_tag(id: i32, label: &str) -> Tag {
        Tag {
            id,
            label: label.to_string(),
        }
    }

    #[test]
    fn load_tags_returns_paginated_tags() {
        let mut repo = MockStore::new();
        repo.expect_list_tags()
            .times(1)
            .withf(|query| {
                query.search.as_deref() == Some("org")
                    && query
                        .pagination
                        .is_some_and(|p| p.page == 2 && p.per_page == DEFAULT_ITEMS_PER_PAGE)
            })
            .returning(|_| Ok((12, vec![sample_tag(1, "organic")])));

        let query = TagsQuery {
            search: Some("org".to_string()),
            page: Some(2),
        };

        let page = load_tags(&repo, query).expect("expected tags");

        assert_eq!(page.page, 2);
        assert_eq!(page.total_pages, 2);
        assert_eq!(page.items[0].label, "organic");
    }

    #[test]
    fn create_tag_surfaces_conflict() {
        let mut repo = MockStore::new();
        repo.expect_create_tag()
            .times(1)
            .returning(|_| Err(RepositoryError::Conflict));

        let form = AddTagForm {
            label: "organic".to_string(),
        };

        assert!(matches!(create_tag(&repo, form), Err(ServiceError::Conflict)));
    }

    #[test]
    fn create_tag_rejects_invalid_form() {
        let mut repo = MockStore::new();
        repo.expect_create_tag().times(0);

        let form = AddTagForm {
            label: "   ".to_string(),
        };

        assert!(matches!(create_tag(&repo, form), Err(ServiceError::Form(_))));
    }

    #[test]
    fn tag_object_parses_content_type() {
        let mut repo = MockStore::new();
        repo.expect_tag_object()
            .times(1)
            .withf(|item| {
                item.tag_id == 3
                    && item.content_type == ContentType::Product
                    && item.object_id == 9
            })
            .returning(|item| {
                Ok(TaggedItem {
                    id: 1,
                    tag_id: item.tag_id,
                    content_type: item.content_type,
                    object_id: item.object_id,
                })
            });

        let tagged = tag_object(&repo, 3, "product", 9).expect("expected association");

        assert_eq!(tagged.content_type, ContentType::Product);
    }

    #[test]
    fn unknown_content_type_is_a_form_error() {
        let mut repo = MockStore::new();
        repo.expect_list_tags_for().times(0);

        assert!(matches!(
            load_tags_for(&repo, "planet", 1),
            Err(ServiceError::Form(_))
        ));
    }

    #[test]
    fn untag_missing_association_is_not_found() {
        let mut repo = MockStore::new();
        repo.expect_untag_object()
            .times(1)
            .returning(|_, _, _| Err(RepositoryError::NotFound));

        assert!(matches!(
            untag_object(&repo, 3, "collection", 2),
            Err(ServiceError::NotFound)
        ));
    }
}
