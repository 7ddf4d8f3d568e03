use core::fmt;
use core::str::FromStr;

use stockroom_core::{DomainError, DomainResult, Entity, ProductId, ValueObject};

/// Unit price of a product. Always finite and strictly positive.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct Price(f64);

impl Price {
    pub fn new(value: f64) -> DomainResult<Self> {
        if !value.is_finite() || value <= 0.0 {
            return Err(DomainError::validation("price must be a positive number"));
        }
        Ok(Self(value))
    }

    /// Parse a price typed by the user.
    pub fn parse(raw: &str) -> DomainResult<Self> {
        let value: f64 = raw
            .trim()
            .parse()
            .map_err(|_| DomainError::validation(format!("price must be a valid number, got {raw:?}")))?;
        Self::new(value)
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl ValueObject for Price {}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${:.2}", self.0)
    }
}

/// Units in stock. Never negative.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Stock(i64);

impl Stock {
    pub fn new(value: i64) -> DomainResult<Self> {
        if value < 0 {
            return Err(DomainError::validation("stock must be a non-negative whole number"));
        }
        Ok(Self(value))
    }

    /// Parse a stock count typed by the user.
    pub fn parse(raw: &str) -> DomainResult<Self> {
        let value: i64 = raw
            .trim()
            .parse()
            .map_err(|_| DomainError::validation(format!("stock must be a whole number, got {raw:?}")))?;
        Self::new(value)
    }

    pub fn value(self) -> i64 {
        self.0
    }
}

impl ValueObject for Stock {}

impl fmt::Display for Stock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// How a food product is sold.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum UnitForm {
    Unit,
    Dozen,
    Kilo,
}

impl UnitForm {
    pub const ALL: [UnitForm; 3] = [UnitForm::Unit, UnitForm::Dozen, UnitForm::Kilo];

    /// Token written to the catalog file.
    pub fn as_str(self) -> &'static str {
        match self {
            UnitForm::Unit => "unidad",
            UnitForm::Dozen => "docena",
            UnitForm::Kilo => "kilo",
        }
    }
}

impl ValueObject for UnitForm {}

impl FromStr for UnitForm {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "unit" | "unidad" => Ok(UnitForm::Unit),
            "dozen" | "docena" => Ok(UnitForm::Dozen),
            "kilo" => Ok(UnitForm::Kilo),
            _ => Err(DomainError::validation(
                "unit form must be one of: unit, dozen, kilo",
            )),
        }
    }
}

impl fmt::Display for UnitForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Clothing size.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Size {
    Xs,
    S,
    M,
    L,
    Xl,
    Xxl,
}

impl Size {
    pub const ALL: [Size; 6] = [Size::Xs, Size::S, Size::M, Size::L, Size::Xl, Size::Xxl];

    pub fn as_str(self) -> &'static str {
        match self {
            Size::Xs => "xs",
            Size::S => "s",
            Size::M => "m",
            Size::L => "l",
            Size::Xl => "xl",
            Size::Xxl => "xxl",
        }
    }
}

impl ValueObject for Size {}

impl FromStr for Size {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim().to_lowercase();
        Size::ALL
            .into_iter()
            .find(|size| size.as_str() == token)
            .ok_or_else(|| DomainError::validation("size must be one of: XS, S, M, L, XL, XXL"))
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_str().to_uppercase())
    }
}

/// Category-specific part of a product.
#[derive(Debug, Clone, PartialEq)]
pub enum Category {
    /// Plain product with no category fields.
    General,
    Electronic {
        brand: String,
    },
    Food {
        /// Free text, not parsed (e.g. `"31/12/2025"`).
        expiration_date: String,
        unit_form: UnitForm,
    },
    Clothing {
        brand_name: String,
        size: Size,
    },
}

impl Category {
    /// Human-readable category name.
    pub fn label(&self) -> &'static str {
        match self {
            Category::General => "Product",
            Category::Electronic { .. } => "Electronic",
            Category::Food { .. } => "Food",
            Category::Clothing { .. } => "Clothing",
        }
    }
}

/// A catalog product.
///
/// Fields are validated at construction. Afterwards only the price can be
/// changed, through [`Product::set_price`], which re-runs price validation.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    id: ProductId,
    name: String,
    price: Price,
    stock: Stock,
    category: Category,
}

impl Product {
    /// Build a product from raw values, validating every field.
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        price: f64,
        stock: i64,
        category: Category,
    ) -> DomainResult<Self> {
        Self::from_parts(id, name, Price::new(price)?, Stock::new(stock)?, category)
    }

    /// Build a product from already-validated value objects.
    pub fn from_parts(
        id: ProductId,
        name: impl Into<String>,
        price: Price,
        stock: Stock,
        category: Category,
    ) -> DomainResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }

        Ok(Self {
            id,
            name,
            price,
            stock,
            category,
        })
    }

    pub fn electronic(
        id: ProductId,
        name: impl Into<String>,
        price: f64,
        stock: i64,
        brand: impl Into<String>,
    ) -> DomainResult<Self> {
        Self::new(id, name, price, stock, Category::Electronic { brand: brand.into() })
    }

    pub fn food(
        id: ProductId,
        name: impl Into<String>,
        price: f64,
        stock: i64,
        expiration_date: impl Into<String>,
        unit_form: &str,
    ) -> DomainResult<Self> {
        let unit_form = unit_form.parse::<UnitForm>()?;
        Self::new(
            id,
            name,
            price,
            stock,
            Category::Food {
                expiration_date: expiration_date.into(),
                unit_form,
            },
        )
    }

    pub fn clothing(
        id: ProductId,
        name: impl Into<String>,
        price: f64,
        stock: i64,
        brand_name: impl Into<String>,
        size: &str,
    ) -> DomainResult<Self> {
        let size = size.parse::<Size>()?;
        Self::new(
            id,
            name,
            price,
            stock,
            Category::Clothing {
                brand_name: brand_name.into(),
                size,
            },
        )
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Price {
        self.price
    }

    pub fn stock(&self) -> Stock {
        self.stock
    }

    pub fn category(&self) -> &Category {
        &self.category
    }

    /// Reassign the price. Fails without touching the product on invalid input.
    pub fn set_price(&mut self, price: f64) -> DomainResult<()> {
        self.price = Price::new(price)?;
        Ok(())
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let base = format!("{} - Price: {} - Stock: {}", self.name, self.price, self.stock);
        match &self.category {
            Category::General => f.write_str(&base),
            Category::Electronic { brand } => {
                write!(f, "Electronic >> {base} - Brand: {brand}")
            }
            Category::Food {
                expiration_date,
                unit_form,
            } => write!(
                f,
                "Food >> {base} - Sold by: {unit_form} - Expires: {expiration_date}"
            ),
            Category::Clothing { brand_name, size } => {
                write!(f, "Clothing >> {base} - Brand: {brand_name} - Size: {size}")
            }
        }
    }
}
