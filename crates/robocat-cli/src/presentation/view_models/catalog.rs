use serde::Serialize;
use std::fmt;

use crate::presentation::formatters::text;

// Display constants
const NAME_COL: usize = 18;
const BRAND_COL: usize = 12;
const CATEGORY_COL: usize = 20;
const SUMMARY_MAX_LENGTH: usize = 48;

// --------------------------------------------------------
// Brand list
// --------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct BrandListViewModel {
    pub brands: Vec<BrandEntry>,
    pub total_products: usize,
}

#[derive(Debug, Serialize)]
pub struct BrandEntry {
    pub id: String,
    pub name: String,
    pub category_count: usize,
    pub product_count: usize,
}

impl fmt::Display for BrandListViewModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.brands.is_empty() {
            writeln!(f, "No brands in catalog.")?;
            return Ok(());
        }

        writeln!(
            f,
            "{:<name$}  {:<brand$}  {:>10}  {:>8}",
            "BRAND",
            "ID",
            "CATEGORIES",
            "PRODUCTS",
            name = NAME_COL,
            brand = BRAND_COL,
        )?;
        writeln!(f, "{}", "-".repeat(NAME_COL + BRAND_COL + 24))?;

        for brand in &self.brands {
            writeln!(
                f,
                "{:<name$}  {:<brand$}  {:>10}  {:>8}",
                brand.name,
                brand.id,
                brand.category_count,
                brand.product_count,
                name = NAME_COL,
                brand = BRAND_COL,
            )?;
        }

        writeln!(f)?;
        writeln!(
            f,
            "{} brand(s), {} product(s) total",
            self.brands.len(),
            self.total_products
        )?;
        Ok(())
    }
}

// --------------------------------------------------------
// Category list
// --------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct CategoryListViewModel {
    /// Brand name when the list is brand-scoped; None for the
    /// cross-brand merged view
    pub brand_scope: Option<String>,
    pub categories: Vec<CategoryEntry>,
}

#[derive(Debug, Serialize)]
pub struct CategoryEntry {
    pub key: String,
    pub name: String,
    pub product_count: usize,
    pub brands: Vec<String>,
}

impl fmt::Display for CategoryListViewModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.brand_scope {
            Some(brand) => writeln!(f, "Categories of {}:", brand)?,
            None => writeln!(f, "Categories across all brands (merged by name):")?,
        }
        writeln!(f)?;

        if self.categories.is_empty() {
            writeln!(f, "No categories found.")?;
            return Ok(());
        }

        writeln!(
            f,
            "{:<cat$}  {:>8}  BRANDS",
            "CATEGORY",
            "PRODUCTS",
            cat = CATEGORY_COL,
        )?;
        writeln!(f, "{}", "-".repeat(CATEGORY_COL + 40))?;

        for category in &self.categories {
            writeln!(
                f,
                "{:<cat$}  {:>8}  {}",
                category.name,
                category.product_count,
                category.brands.join(", "),
                cat = CATEGORY_COL,
            )?;
        }
        Ok(())
    }
}

// --------------------------------------------------------
// Product list
// --------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct ProductListViewModel {
    pub products: Vec<ProductEntry>,
    pub total_count: usize,
    pub applied_filters: FilterSummary,
}

#[derive(Debug, Serialize)]
pub struct ProductEntry {
    pub id: String,
    pub name: String,
    /// Stable navigation route for this product
    pub route: String,
    pub brand: String,
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct FilterSummary {
    pub brand_filter: Option<String>,
    pub category_filter: Option<String>,
}

impl FilterSummary {
    fn is_empty(&self) -> bool {
        self.brand_filter.is_none() && self.category_filter.is_none()
    }
}

impl fmt::Display for ProductListViewModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.products.is_empty() {
            // Empty result is a normal state, not an error
            writeln!(f, "No products found.")?;
            if let Some(ref brand) = self.applied_filters.brand_filter {
                writeln!(f, "Brand filter: {}", brand)?;
            }
            if let Some(ref category) = self.applied_filters.category_filter {
                writeln!(f, "Category filter: {}", category)?;
            }
            return Ok(());
        }

        writeln!(
            f,
            "{:<name$}  {:<brand$}  {:<cat$}  ROUTE",
            "NAME",
            "BRAND",
            "CATEGORY",
            name = NAME_COL,
            brand = BRAND_COL,
            cat = CATEGORY_COL,
        )?;
        writeln!(f, "{}", "-".repeat(NAME_COL + BRAND_COL + CATEGORY_COL + 30))?;

        for product in &self.products {
            writeln!(
                f,
                "{:<name$}  {:<brand$}  {:<cat$}  {}",
                product.name,
                product.brand,
                text::truncate(&product.category, CATEGORY_COL),
                product.route,
                name = NAME_COL,
                brand = BRAND_COL,
                cat = CATEGORY_COL,
            )?;
        }

        writeln!(f)?;
        write!(f, "{} product(s)", self.total_count)?;

        if !self.applied_filters.is_empty() {
            write!(f, " matching")?;
            if let Some(ref brand) = self.applied_filters.brand_filter {
                write!(f, " brand={}", brand)?;
            }
            if let Some(ref category) = self.applied_filters.category_filter {
                write!(f, " category={}", category)?;
            }
        }
        writeln!(f)?;
        Ok(())
    }
}

// --------------------------------------------------------
// Product detail
// --------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct ProductDetailViewModel {
    pub id: String,
    pub name: String,
    pub route: String,
    pub brand: String,
    pub category: String,
    pub image: String,
    pub description_lines: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    pub tabs: Vec<SpecTab>,
}

#[derive(Debug, Serialize)]
pub struct SpecTab {
    pub name: String,
    pub specs: Vec<SpecRow>,
}

#[derive(Debug, Serialize)]
pub struct SpecRow {
    pub name: String,
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

impl SpecRow {
    /// "600 kg" or just "600" when the spec carries no unit
    pub fn value_with_unit(&self) -> String {
        match &self.unit {
            Some(unit) => format!("{} {}", self.value, unit),
            None => self.value.clone(),
        }
    }
}

impl fmt::Display for ProductDetailViewModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{}", self.name)?;
        writeln!(f, "{} - {}", self.brand, self.category)?;
        writeln!(f, "Route: {}", self.route)?;
        writeln!(f, "Image: {}", self.image)?;

        if !self.description_lines.is_empty() {
            writeln!(f)?;
            for line in &self.description_lines {
                writeln!(f, "{}", line)?;
            }
        }

        if let Some(ref detail) = self.detail {
            writeln!(f)?;
            writeln!(f, "{}", detail)?;
        }

        for tab in &self.tabs {
            writeln!(f)?;
            writeln!(f, "[{}]", tab.name)?;
            for spec in &tab.specs {
                writeln!(f, "  {:<24} {}", spec.name, spec.value_with_unit())?;
            }
        }
        Ok(())
    }
}

// Keep the summary column useful in narrow terminals
pub(crate) fn summarize_description(line1: &str) -> String {
    text::truncate(line1, SUMMARY_MAX_LENGTH)
}
