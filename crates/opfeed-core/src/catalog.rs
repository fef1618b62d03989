//! Product identifiers and the fixed catalog they are drawn from.

use std::fmt;

/// Default number of product groups.
pub const DEFAULT_GROUPS: u8 = 10;

/// Default number of products in each group.
pub const DEFAULT_PRODUCTS_PER_GROUP: u8 = 20;

/// A product identifier, rendered as `grXX.prYY`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProductId {
    /// Group number (`XX`)
    pub group: u8,
    /// Product number within the group (`YY`)
    pub product: u8,
}

impl ProductId {
    pub fn new(group: u8, product: u8) -> Self {
        Self { group, product }
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "gr{:02}.pr{:02}", self.group, self.product)
    }
}

/// Immutable, ordered lookup table of product identifiers.
///
/// Built once as the Cartesian product of groups and products, ordered
/// group-major then product-minor, and indexed by position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    products_per_group: u8,
    products: Vec<ProductId>,
}

impl Catalog {
    /// Build the catalog for `groups` x `products_per_group` identifiers.
    pub fn new(groups: u8, products_per_group: u8) -> Self {
        let products = (0..groups)
            .flat_map(|group| (0..products_per_group).map(move |p| ProductId::new(group, p)))
            .collect();

        Self {
            products_per_group,
            products,
        }
    }

    /// Identifier at `index`, if it lies inside the catalog.
    pub fn get(&self, index: usize) -> Option<&ProductId> {
        self.products.get(index)
    }

    /// Map an identifier back to its catalog index.
    pub fn index_of(&self, id: &ProductId) -> Option<usize> {
        if id.product >= self.products_per_group {
            return None;
        }
        let index = id.group as usize * self.products_per_group as usize + id.product as usize;
        (index < self.products.len()).then_some(index)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ProductId> {
        self.products.iter()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new(DEFAULT_GROUPS, DEFAULT_PRODUCTS_PER_GROUP)
    }
}

impl std::ops::Index<usize> for Catalog {
    type Output = ProductId;

    fn index(&self, index: usize) -> &Self::Output {
        &self.products[index]
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a ProductId;
    type IntoIter = std::slice::Iter<'a, ProductId>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_product_id_display_is_zero_padded() {
        assert_eq!(ProductId::new(0, 0).to_string(), "gr00.pr00");
        assert_eq!(ProductId::new(3, 7).to_string(), "gr03.pr07");
        assert_eq!(ProductId::new(9, 19).to_string(), "gr09.pr19");
    }

    #[test]
    fn test_default_catalog_has_200_distinct_ids() {
        let catalog = Catalog::default();
        assert_eq!(catalog.len(), 200);

        let rendered: HashSet<String> = catalog.iter().map(|p| p.to_string()).collect();
        assert_eq!(rendered.len(), 200);
        for id in &rendered {
            assert_eq!(id.len(), 9);
            assert!(id.starts_with("gr") && &id[4..7] == ".pr");
        }
    }

    #[test]
    fn test_catalog_is_group_major() {
        let catalog = Catalog::default();

        assert_eq!(catalog.get(0), Some(&ProductId::new(0, 0)));
        assert_eq!(catalog.get(19), Some(&ProductId::new(0, 19)));
        assert_eq!(catalog.get(20), Some(&ProductId::new(1, 0)));
        assert_eq!(catalog.get(199), Some(&ProductId::new(9, 19)));
        assert_eq!(catalog.get(200), None);

        let ordered: Vec<_> = catalog.iter().copied().collect();
        let mut sorted = ordered.clone();
        sorted.sort();
        assert_eq!(ordered, sorted);
    }

    #[test]
    fn test_index_of_inverts_get() {
        let catalog = Catalog::default();
        for (index, id) in catalog.iter().enumerate() {
            assert_eq!(catalog.index_of(id), Some(index));
        }
    }

    #[test]
    fn test_index_of_outside_catalog() {
        let catalog = Catalog::default();
        assert_eq!(catalog.index_of(&ProductId::new(10, 0)), None);
        assert_eq!(catalog.index_of(&ProductId::new(0, 20)), None);
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = Catalog::new(0, 20);
        assert!(catalog.is_empty());
        assert_eq!(catalog.index_of(&ProductId::new(0, 0)), None);
    }
}
