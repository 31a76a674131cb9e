use diesel::prelude::*;

use crate::{
    domain::product_image::{
        NewProductImage as DomainNewProductImage, ProductImage as DomainProductImage,
    },
    models::product_image::{NewProductImage as DbNewProductImage, ProductImage as DbProductImage},
    repository::{DieselRepository, ProductImageReader, ProductImageWriter, RepositoryResult},
    schema::product_images,
};

impl ProductImageReader for DieselRepository {
    fn get_product_image(
        &self,
        product_id: i32,
        image_id: i32,
    ) -> RepositoryResult<Option<DomainProductImage>> {
        let mut conn = self.conn()?;

        let image = product_images::table
            .filter(product_images::id.eq(image_id))
            .filter(product_images::product_id.eq(product_id))
            .first::<DbProductImage>(&mut conn)
            .optional()?;

        Ok(image.map(Into::into))
    }

    fn list_product_images(&self, product_id: i32) -> RepositoryResult<Vec<DomainProductImage>> {
        let mut conn = self.conn()?;

        let items = product_images::table
            .filter(product_images::product_id.eq(product_id))
            .order(product_images::id.asc())
            .load::<DbProductImage>(&mut conn)?;

        Ok(items.into_iter().map(Into::into).collect())
    }
}

impl ProductImageWriter for DieselRepository {
    fn create_product_image(
        &self,
        new_image: &DomainNewProductImage,
    ) -> RepositoryResult<DomainProductImage> {
        let mut conn = self.conn()?;
        let db_new = DbNewProductImage::from(new_image);

        let created = diesel::insert_into(product_images::table)
            .values(&db_new)
            .get_result::<DbProductImage>(&mut conn)?;

        Ok(created.into())
    }

    fn delete_product_image(
        &self,
        product_id: i32,
        image_id: i32,
    ) -> RepositoryResult<DomainProductImage> {
        let mut conn = self.conn()?;

        // Yields `NotFound` when no row matched.
        let deleted = diesel::delete(
            product_images::table
                .filter(product_images::id.eq(image_id))
                .filter(product_images::product_id.eq(product_id)),
        )
        .get_result::<DbProductImage>(&mut conn)?;

        Ok(deleted.into())
    }
}
