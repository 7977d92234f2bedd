use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use super::errors::ProductError;
use super::model::Product;
use crate::domain::shared::pagination::{PageRequest, SortDirection, SortOrder};
use crate::domain::shared::value_objects::{CategoryId, UserId};

/// Fields a product listing may be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ProductSortField {
    Id,
    Name,
    Price,
    CategoryId,
    UserId,
    CreatedAt,
    UpdatedAt,
}

impl std::fmt::Display for ProductSortField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProductSortField::Id => write!(f, "id"),
            ProductSortField::Name => write!(f, "name"),
            ProductSortField::Price => write!(f, "price"),
            ProductSortField::CategoryId => write!(f, "categoryId"),
            ProductSortField::UserId => write!(f, "userId"),
            ProductSortField::CreatedAt => write!(f, "createdAt"),
            ProductSortField::UpdatedAt => write!(f, "updatedAt"),
        }
    }
}

impl std::str::FromStr for ProductSortField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "id" => Ok(ProductSortField::Id),
            "name" => Ok(ProductSortField::Name),
            "price" => Ok(ProductSortField::Price),
            "categoryId" | "category_id" => Ok(ProductSortField::CategoryId),
            "userId" | "user_id" => Ok(ProductSortField::UserId),
            "createdAt" | "created_at" => Ok(ProductSortField::CreatedAt),
            "updatedAt" | "updated_at" => Ok(ProductSortField::UpdatedAt),
            _ => Err(format!("Invalid product sort field: {}", s)),
        }
    }
}

impl ProductSortField {
    /// Names compare case-insensitively; exact ties fall to later sort orders.
    pub fn compare(&self, a: &Product, b: &Product) -> Ordering {
        match self {
            ProductSortField::Id => a.id.cmp(&b.id),
            ProductSortField::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
            ProductSortField::Price => a.price.total_cmp(&b.price),
            ProductSortField::CategoryId => a.category_id.cmp(&b.category_id),
            ProductSortField::UserId => a.user_id.cmp(&b.user_id),
            ProductSortField::CreatedAt => a.created_at.cmp(&b.created_at),
            ProductSortField::UpdatedAt => a.updated_at.cmp(&b.updated_at),
        }
    }
}

pub type ProductSortOrder = SortOrder<ProductSortField>;
pub type ProductPageRequest = PageRequest<ProductSortField>;

/// Sort orders to apply for a request: the requested ones, then `id`
/// ascending as the final tie-break so that paging is stable.
pub fn effective_sort(request: &ProductPageRequest) -> Vec<ProductSortOrder> {
    let mut orders = request.sort().to_vec();
    if !orders
        .iter()
        .any(|order| order.field == ProductSortField::Id)
    {
        orders.push(SortOrder::asc(ProductSortField::Id));
    }
    orders
}

/// Compares two products under a list of sort orders.
pub fn compare_products(orders: &[ProductSortOrder], a: &Product, b: &Product) -> Ordering {
    orders
        .iter()
        .map(|order| {
            let ordering = order.field.compare(a, b);
            match order.direction {
                SortDirection::Asc => ordering,
                SortDirection::Desc => ordering.reverse(),
            }
        })
        .find(|ordering| *ordering != Ordering::Equal)
        .unwrap_or(Ordering::Equal)
}

/// Optional restrictions on a product query, combined with logical AND.
///
/// Name matching is a case-insensitive substring match. Price bounds are
/// inclusive.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductFilter {
    pub name: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub category_id: Option<CategoryId>,
    pub user_id: Option<UserId>,
}

impl ProductFilter {
    pub fn new(
        name: Option<String>,
        min_price: Option<f64>,
        max_price: Option<f64>,
        category_id: Option<CategoryId>,
    ) -> Result<Self, ProductError> {
        for bound in [min_price, max_price].into_iter().flatten() {
            if !bound.is_finite() || bound < 0.0 {
                return Err(ProductError::InvalidPriceRange);
            }
        }
        if let (Some(min), Some(max)) = (min_price, max_price)
            && min > max
        {
            return Err(ProductError::InvalidPriceRange);
        }

        let name = name
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty());

        Ok(Self {
            name,
            min_price,
            max_price,
            category_id,
            user_id: None,
        })
    }

    pub fn owned_by(mut self, user_id: UserId) -> Self {
        self.user_id = Some(user_id);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.min_price.is_none()
            && self.max_price.is_none()
            && self.category_id.is_none()
            && self.user_id.is_none()
    }

    pub fn matches(&self, product: &Product) -> bool {
        if let Some(name) = &self.name
            && !product.name.to_lowercase().contains(&name.to_lowercase())
        {
            return false;
        }
        if let Some(min) = self.min_price
            && product.price < min
        {
            return false;
        }
        if let Some(max) = self.max_price
            && product.price > max
        {
            return false;
        }
        if let Some(category_id) = self.category_id
            && product.category_id != category_id
        {
            return false;
        }
        if let Some(user_id) = self.user_id
            && product.user_id != user_id
        {
            return false;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn product(id: i64, name: &str, price: f64, category: i64, user: i64) -> Product {
        let now = Utc::now();
        Product::from_repository(
            id,
            UserId::new(user),
            CategoryId::new(category),
            name.to_string(),
            None,
            price,
            now,
            now,
        )
    }

    #[test]
    fn should_parse_camel_and_snake_case_sort_fields() {
        assert_eq!(
            "categoryId".parse::<ProductSortField>(),
            Ok(ProductSortField::CategoryId)
        );
        assert_eq!(
            "created_at".parse::<ProductSortField>(),
            Ok(ProductSortField::CreatedAt)
        );
        assert!("password".parse::<ProductSortField>().is_err());
    }

    #[test]
    fn should_append_id_tie_break_when_missing() {
        let request = ProductPageRequest::new(0, 10, vec![SortOrder::desc(ProductSortField::Price)])
            .unwrap();
        let orders = effective_sort(&request);
        assert_eq!(
            orders,
            vec![
                SortOrder::desc(ProductSortField::Price),
                SortOrder::asc(ProductSortField::Id)
            ]
        );
    }

    #[test]
    fn should_keep_requested_id_direction() {
        let request =
            ProductPageRequest::new(0, 10, vec![SortOrder::desc(ProductSortField::Id)]).unwrap();
        assert_eq!(
            effective_sort(&request),
            vec![SortOrder::desc(ProductSortField::Id)]
        );
    }

    #[test]
    fn should_break_ties_left_to_right() {
        let orders = vec![
            SortOrder::asc(ProductSortField::Price),
            SortOrder::desc(ProductSortField::Name),
        ];
        let mut products = vec![
            product(1, "A", 10.0, 1, 1),
            product(2, "B", 10.0, 1, 1),
            product(3, "C", 5.0, 1, 1),
        ];
        products.sort_by(|a, b| compare_products(&orders, a, b));

        let ids: Vec<i64> = products.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![3, 2, 1]);
    }

    #[test]
    fn should_sort_names_ignoring_case() {
        let orders = vec![SortOrder::asc(ProductSortField::Name)];
        let mut products = vec![
            product(1, "Zeta", 1.0, 1, 1),
            product(2, "alpha", 1.0, 1, 1),
            product(3, "Beta", 1.0, 1, 1),
        ];
        products.sort_by(|a, b| compare_products(&orders, a, b));

        let names: Vec<&str> = products.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["alpha", "Beta", "Zeta"]);
    }

    #[test]
    fn should_match_name_case_insensitively() {
        let filter = ProductFilter::new(Some("laptop".to_string()), None, None, None).unwrap();
        assert!(filter.matches(&product(1, "Gaming LAPTOP Max", 10.0, 1, 1)));
        assert!(!filter.matches(&product(2, "Mouse Lite", 10.0, 1, 1)));
    }

    #[test]
    fn should_treat_price_bounds_as_inclusive() {
        let filter = ProductFilter::new(None, Some(10.0), Some(20.0), None).unwrap();
        assert!(filter.matches(&product(1, "A", 10.0, 1, 1)));
        assert!(filter.matches(&product(2, "B", 20.0, 1, 1)));
        assert!(!filter.matches(&product(3, "C", 5.0, 1, 1)));
        assert!(!filter.matches(&product(4, "D", 25.0, 1, 1)));
    }

    #[test]
    fn should_combine_filters_with_and() {
        let filter = ProductFilter::new(None, None, None, Some(CategoryId::new(2)))
            .unwrap()
            .owned_by(UserId::new(7));
        assert!(filter.matches(&product(1, "A", 1.0, 2, 7)));
        assert!(!filter.matches(&product(2, "B", 1.0, 2, 8)));
        assert!(!filter.matches(&product(3, "C", 1.0, 3, 7)));
    }

    #[test]
    fn should_ignore_blank_name_filter() {
        let filter = ProductFilter::new(Some("   ".to_string()), None, None, None).unwrap();
        assert!(filter.is_empty());
    }

    #[test]
    fn should_reject_inverted_or_negative_price_bounds() {
        assert!(matches!(
            ProductFilter::new(None, Some(20.0), Some(10.0), None).unwrap_err(),
            ProductError::InvalidPriceRange
        ));
        assert!(matches!(
            ProductFilter::new(None, Some(-1.0), None, None).unwrap_err(),
            ProductError::InvalidPriceRange
        ));
    }
}
