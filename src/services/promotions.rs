use crate::domain::promotion::Promotion;
use crate::forms::promotions::{AddPromotionForm, EditPromotionForm};
use crate::repository::{ProductReader, PromotionReader, PromotionWriter};
use crate::services::products::ensure_product_exists;
use crate::services::{ServiceError, ServiceResult};

pub fn load_promotions<R>(repo: &R) -> ServiceResult<Vec<Promotion>>
where
    R: PromotionReader + ?Sized,
{
    repo.list_promotions().map_err(ServiceError::from)
}

pub fn load_promotion<R>(repo: &R, promotion_id: i32) -> ServiceResult<Promotion>
where
    R: PromotionReader + ?Sized,
{
    repo.get_promotion_by_id(promotion_id)
        .map_err(ServiceError::from)?
        .ok_or(ServiceError::NotFound)
}

pub fn create_promotion<R>(repo: &R, form: AddPromotionForm) -> ServiceResult<Promotion>
where
    R: PromotionWriter + ?Sized,
{
    let new_promotion = form
        .into_new_promotion()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    repo.create_promotion(&new_promotion)
        .map_err(ServiceError::from)
}

pub fn modify_promotion<R>(
    repo: &R,
    promotion_id: i32,
    form: EditPromotionForm,
) -> ServiceResult<Promotion>
where
    R: PromotionWriter + ?Sized,
{
    let updates = form
        .into_update_promotion()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    repo.update_promotion(promotion_id, &updates)
        .map_err(ServiceError::from)
}

pub fn remove_promotion<R>(repo: &R, promotion_id: i32) -> ServiceResult<()>
where
    R: PromotionWriter + ?Sized,
{
    repo.delete_promotion(promotion_id)
        .map_err(ServiceError::from)
}

/// Promotions a product currently takes part in.
pub fn load_product_promotions<R>(repo: &R, product_id: i32) -> ServiceResult<Vec<Promotion>>
where
    R: ProductReader + PromotionReader + ?Sized,
{
    ensure_product_exists(repo, product_id)?;
    repo.list_product_promotions(product_id)
        .map_err(ServiceError::from)
}

pub fn attach_promotion<R>(repo: &R, product_id: i32, promotion_id: i32) -> ServiceResult<()>
where
    R: PromotionWriter + ?Sized,
{
    repo.attach_promotion(product_id, promotion_id)
        .map_err(ServiceError::from)?;

    log::info!("Promotion {promotion_id} attached to product {product_id}");

    Ok(())
}

pub fn detach_promotion<R>(repo: &R, product_id: i32, promotion_id: i32) -> ServiceResult<()>
where
    R: PromotionWriter + ?Sized,
{
    repo.detach_promotion(product_id, promotion_id)
        .map_err(ServiceError::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::domain::promotion::NewPromotion;
    use crate::repository::RepositoryError;
    use crate::repository::mock::MockStore;

    #[test]
    fn create_promotion_rejects_out_of_range_discount() {
        let mut repo = MockStore::new();
        repo.expect_create_promotion().times(0);

        let form = AddPromotionForm {
            description: "Clearance".to_string(),
            discount: 150.0,
        };

        assert!(matches!(
            create_promotion(&repo, form),
            Err(ServiceError::Form(_))
        ));
    }

    #[test]
    fn create_promotion_stores_sanitized_payload() {
        let mut repo = MockStore::new();
        repo.expect_create_promotion()
            .times(1)
            .withf(|promotion| *promotion == NewPromotion::new("Clearance", 30.0))
            .returning(|promotion| {
                Ok(Promotion {
                    id: 2,
                    description: promotion.description.clone(),
                    discount: promotion.discount,
                })
            });

        let form = AddPromotionForm {
            description: "  Clearance ".to_string(),
            discount: 30.0,
        };

        let promotion = create_promotion(&repo, form).expect("expected promotion");

        assert_eq!(promotion.id, 2);
        assert_eq!(promotion.description, "Clearance");
    }

    #[test]
    fn load_product_promotions_for_unknown_product_is_not_found() {
        let mut repo = MockStore::new();
        repo.expect_get_product_by_id().returning(|_| Ok(None));
        repo.expect_list_product_promotions().times(0);

        assert!(matches!(
            load_product_promotions(&repo, 12),
            Err(ServiceError::NotFound)
        ));
    }

    #[test]
    fn attach_promotion_reports_missing_records() {
        let mut repo = MockStore::new();
        repo.expect_attach_promotion()
            .times(1)
            .withf(|product_id, promotion_id| *product_id == 4 && *promotion_id == 9)
            .returning(|_, _| Err(RepositoryError::NotFound));

        assert!(matches!(
            attach_promotion(&repo, 4, 9),
            Err(ServiceError::NotFound)
        ));
    }
}
