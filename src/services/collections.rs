use crate::domain::collection::Collection;
use crate::forms::collections::{AddCollectionForm, EditCollectionForm};
use crate::repository::{CollectionReader, CollectionWriter, ProductReader};
use crate::services::{ServiceError, ServiceResult};

fn ensure_featured_product_exists<R>(repo: &R, product_id: Option<i32>) -> ServiceResult<()>
where
    R: ProductReader + ?Sized,
{
    let Some(product_id) = product_id else {
        return Ok(());
    };

    match repo.get_product_by_id(product_id).map_err(ServiceError::from)? {
        Some(_) => Ok(()),
        None => Err(ServiceError::Validation(format!(
            "No product with the ID {product_id} was found."
        ))),
    }
}

/// Lists all collections with their product counts.
pub fn load_collections<R>(repo: &R) -> ServiceResult<Vec<Collection>>
where
    R: CollectionReader + ?Sized,
{
    repo.list_collections().map_err(ServiceError::from)
}

pub fn load_collection<R>(repo: &R, collection_id: i32) -> ServiceResult<Collection>
where
    R: CollectionReader + ?Sized,
{
    repo.get_collection_by_id(collection_id)
        .map_err(ServiceError::from)?
        .ok_or(ServiceError::NotFound)
}

pub fn create_collection<R>(repo: &R, form: AddCollectionForm) -> ServiceResult<Collection>
where
    R: CollectionWriter + ProductReader + ?Sized,
{
    let new_collection = form
        .into_new_collection()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    ensure_featured_product_exists(repo, new_collection.featured_product_id)?;

    repo.create_collection(&new_collection)
        .map_err(ServiceError::from)
}

pub fn modify_collection<R>(
    repo: &R,
    collection_id: i32,
    form: EditCollectionForm,
) -> ServiceResult<Collection>
where
    R: CollectionWriter + ProductReader + ?Sized,
{
    let updates = form
        .into_update_collection()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    if let Some(featured) = updates.featured_product_id {
        ensure_featured_product_exists(repo, featured)?;
    }

    repo.update_collection(collection_id, &updates)
        .map_err(ServiceError::from)
}

/// Deletes an empty collection.
pub fn remove_collection<R>(repo: &R, collection_id: i32) -> ServiceResult<()>
where
    R: CollectionWriter + ?Sized,
{
    repo.delete_collection(collection_id)
        .map_err(ServiceError::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    use crate::repository::RepositoryError;
    use crate::repository::mock::MockStore;

    fn sample_collection(id: i32, title: &str, products_count: i64) -> Collection {
        Collection {
            id,
            title: title.to_string(),
            featured_product_id: None,
            products_count,
            created_at: NaiveDateTime::default(),
            updated_at: NaiveDateTime::default(),
        }
    }

    #[test]
    fn create_collection_rejects_unknown_featured_product() {
        let mut repo = MockStore::new();
        repo.expect_get_product_by_id()
            .times(1)
            .withf(|id| *id == 99)
            .returning(|_| Ok(None));
        repo.expect_create_collection().times(0);

        let form = AddCollectionForm {
            title: "Snacks".to_string(),
            featured_product_id: Some(99),
        };

        let result = create_collection(&repo, form);

        assert!(matches!(result, Err(ServiceError::Validation(_))));
    }

    #[test]
    fn create_collection_without_featured_product_skips_lookup() {
        let mut repo = MockStore::new();
        repo.expect_get_product_by_id().times(0);
        repo.expect_create_collection()
            .times(1)
            .withf(|new| new.title == "Snacks" && new.featured_product_id.is_none())
            .returning(|new| Ok(sample_collection(3, &new.title, 0)));

        let form = AddCollectionForm {
            title: " Snacks ".to_string(),
            featured_product_id: None,
        };

        let collection = create_collection(&repo, form).expect("expected collection");

        assert_eq!(collection.id, 3);
        assert_eq!(collection.products_count, 0);
    }

    #[test]
    fn clearing_featured_product_needs_no_lookup() {
        let mut repo = MockStore::new();
        repo.expect_get_product_by_id().times(0);
        repo.expect_update_collection()
            .times(1)
            .withf(|id, updates| *id == 2 && updates.featured_product_id == Some(None))
            .returning(|id, _| Ok(sample_collection(id, "Snacks", 4)));

        let form = EditCollectionForm {
            title: None,
            featured_product_id: Some(None),
        };

        let collection = modify_collection(&repo, 2, form).expect("expected update");

        assert_eq!(collection.products_count, 4);
    }

    #[test]
    fn remove_collection_with_products_is_not_allowed() {
        let mut repo = MockStore::new();
        repo.expect_delete_collection().times(1).returning(|_| {
            Err(RepositoryError::InUse(
                "Collection cannot be deleted because it includes one or more products."
                    .to_string(),
            ))
        });

        assert!(matches!(
            remove_collection(&repo, 1),
            Err(ServiceError::NotAllowed(_))
        ));
    }

    #[test]
    fn load_collection_returns_not_found() {
        let mut repo = MockStore::new();
        repo.expect_get_collection_by_id().returning(|_| Ok(None));

        assert!(matches!(
            load_collection(&repo, 5),
            Err(ServiceError::NotFound)
        ));
    }
}
