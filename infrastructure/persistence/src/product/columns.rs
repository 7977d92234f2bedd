use business::domain::product::value_objects::ProductSortField;
use business::domain::shared::pagination::SortDirection;

/// Columns of the `products` table that queries may order by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::IntoStaticStr, strum_macros::Display)]
#[strum(serialize_all = "snake_case")]
pub enum ProductColumn {
    Id,
    Name,
    Price,
    CategoryId,
    UserId,
    CreatedAt,
    UpdatedAt,
}

impl From<ProductSortField> for ProductColumn {
    fn from(field: ProductSortField) -> Self {
        match field {
            ProductSortField::Id => ProductColumn::Id,
            ProductSortField::Name => ProductColumn::Name,
            ProductSortField::Price => ProductColumn::Price,
            ProductSortField::CategoryId => ProductColumn::CategoryId,
            ProductSortField::UserId => ProductColumn::UserId,
            ProductSortField::CreatedAt => ProductColumn::CreatedAt,
            ProductSortField::UpdatedAt => ProductColumn::UpdatedAt,
        }
    }
}

impl ProductColumn {
    /// SQL expression to order by. Names order case-insensitively by code
    /// point, matching `ProductSortField::compare`.
    pub fn order_expression(self) -> &'static str {
        match self {
            ProductColumn::Name => r#"lower(name) COLLATE "C""#,
            other => other.into(),
        }
    }
}

pub fn sql_direction(direction: SortDirection) -> &'static str {
    match direction {
        SortDirection::Asc => "ASC",
        SortDirection::Desc => "DESC",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_render_snake_case_column_names() {
        let column: &'static str = ProductColumn::from(ProductSortField::CreatedAt).into();
        assert_eq!(column, "created_at");
        assert_eq!(ProductColumn::CategoryId.to_string(), "category_id");
    }

    #[test]
    fn should_order_names_case_insensitively() {
        assert_eq!(
            ProductColumn::Name.order_expression(),
            r#"lower(name) COLLATE "C""#
        );
        assert_eq!(ProductColumn::Price.order_expression(), "price");
    }
}
