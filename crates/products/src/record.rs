//! On-disk shape of catalog entries.
//!
//! A [`ProductRecord`] is the flat JSON object stored for each product:
//!
//! ```text
//! { "id", "nombre", "precio", "stock", ...category fields..., "tipo" }
//! ```
//!
//! Records are plain data. Turning one back into a [`Product`] goes through
//! the same validating constructors used at creation time.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use stockroom_core::{DomainError, DomainResult, Entity, ProductId};

use crate::product::{Category, Price, Product, Size, Stock, UnitForm};

/// The whole catalog, keyed by product id.
pub type Catalog = BTreeMap<ProductId, ProductRecord>;

/// Discriminator written in the `tipo` field.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RecordKind {
    General,
    Electronic,
    Food,
    Clothing,
}

impl RecordKind {
    pub const ELECTRONIC_TAG: &'static str = "Electronico";
    pub const FOOD_TAG: &'static str = "Alimenticio";
    pub const CLOTHING_TAG: &'static str = "Indumentaria";

    /// Tag stored in `tipo`. Plain products carry none.
    pub fn tag(self) -> Option<&'static str> {
        match self {
            RecordKind::General => None,
            RecordKind::Electronic => Some(Self::ELECTRONIC_TAG),
            RecordKind::Food => Some(Self::FOOD_TAG),
            RecordKind::Clothing => Some(Self::CLOTHING_TAG),
        }
    }

    pub fn from_tag(tag: &str) -> DomainResult<Self> {
        match tag {
            Self::ELECTRONIC_TAG => Ok(RecordKind::Electronic),
            Self::FOOD_TAG => Ok(RecordKind::Food),
            Self::CLOTHING_TAG => Ok(RecordKind::Clothing),
            other => Err(DomainError::validation(format!("unknown product type {other:?}"))),
        }
    }

    pub fn of(category: &Category) -> Self {
        match category {
            Category::General => RecordKind::General,
            Category::Electronic { .. } => RecordKind::Electronic,
            Category::Food { .. } => RecordKind::Food,
            Category::Clothing { .. } => RecordKind::Clothing,
        }
    }
}

/// Serialized product as stored in the catalog file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub id: ProductId,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "precio")]
    pub price: f64,
    pub stock: i64,
    #[serde(rename = "marca", default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(rename = "fecha_caducidad", default, skip_serializing_if = "Option::is_none")]
    pub expiration_date: Option<String>,
    #[serde(rename = "forma", default, skip_serializing_if = "Option::is_none")]
    pub unit_form: Option<String>,
    #[serde(rename = "nombre_marca", default, skip_serializing_if = "Option::is_none")]
    pub brand_name: Option<String>,
    #[serde(rename = "talle", default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    #[serde(rename = "tipo", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

impl ProductRecord {
    /// Category of this record.
    ///
    /// Uses `tipo` when present. Records written without it (plain products
    /// and older files) are classified by which category fields they carry:
    /// any one field of a category is enough, so a half-filled record is
    /// rejected during reconstruction instead of losing the fields it has.
    /// Fields from more than one category make the record ambiguous.
    pub fn record_kind(&self) -> DomainResult<RecordKind> {
        if let Some(tag) = self.kind.as_deref() {
            return RecordKind::from_tag(tag);
        }

        let candidates = [
            (RecordKind::Electronic, self.brand.is_some()),
            (
                RecordKind::Food,
                self.expiration_date.is_some() || self.unit_form.is_some(),
            ),
            (
                RecordKind::Clothing,
                self.brand_name.is_some() || self.size.is_some(),
            ),
        ];
        let mut present = candidates
            .into_iter()
            .filter_map(|(kind, has_fields)| has_fields.then_some(kind));

        match (present.next(), present.next()) {
            (None, _) => Ok(RecordKind::General),
            (Some(kind), None) => Ok(kind),
            (Some(_), Some(_)) => Err(DomainError::validation(
                "untagged record mixes fields of several product types",
            )),
        }
    }
}

fn required<'a>(value: &'a Option<String>, field: &str, kind: &str) -> DomainResult<&'a str> {
    value
        .as_deref()
        .ok_or_else(|| DomainError::validation(format!("{kind} record is missing {field:?}")))
}

impl From<&Product> for ProductRecord {
    fn from(product: &Product) -> Self {
        let mut record = ProductRecord {
            id: product.id().clone(),
            name: product.name().to_string(),
            price: product.price().value(),
            stock: product.stock().value(),
            brand: None,
            expiration_date: None,
            unit_form: None,
            brand_name: None,
            size: None,
            kind: RecordKind::of(product.category()).tag().map(str::to_string),
        };

        match product.category() {
            Category::General => {}
            Category::Electronic { brand } => {
                record.brand = Some(brand.clone());
            }
            Category::Food {
                expiration_date,
                unit_form,
            } => {
                record.expiration_date = Some(expiration_date.clone());
                record.unit_form = Some(unit_form.as_str().to_string());
            }
            Category::Clothing { brand_name, size } => {
                record.brand_name = Some(brand_name.clone());
                record.size = Some(size.as_str().to_string());
            }
        }

        record
    }
}

impl TryFrom<&ProductRecord> for Product {
    type Error = DomainError;

    fn try_from(record: &ProductRecord) -> Result<Self, Self::Error> {
        let category = match record.record_kind()? {
            RecordKind::General => Category::General,
            RecordKind::Electronic => Category::Electronic {
                brand: required(&record.brand, "marca", "electronic")?.to_string(),
            },
            RecordKind::Food => Category::Food {
                expiration_date: required(&record.expiration_date, "fecha_caducidad", "food")?
                    .to_string(),
                unit_form: required(&record.unit_form, "forma", "food")?.parse::<UnitForm>()?,
            },
            RecordKind::Clothing => Category::Clothing {
                brand_name: required(&record.brand_name, "nombre_marca", "clothing")?.to_string(),
                size: required(&record.size, "talle", "clothing")?.parse::<Size>()?,
            },
        };

        Product::from_parts(
            record.id.clone(),
            record.name.clone(),
            Price::new(record.price)?,
            Stock::new(record.stock)?,
            category,
        )
    }
}

impl TryFrom<ProductRecord> for Product {
    type Error = DomainError;

    fn try_from(record: ProductRecord) -> Result<Self, Self::Error> {
        Product::try_from(&record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    fn id(raw: &str) -> ProductId {
        ProductId::new(raw).unwrap()
    }

    #[test]
    fn electronic_record_has_expected_shape() {
        let tv = Product::electronic(id("1"), "TV", 500.0, 3, "Sony").unwrap();
        let value = serde_json::to_value(ProductRecord::from(&tv)).unwrap();
        assert_eq!(
            value,
            json!({
                "id": 1,
                "nombre": "TV",
                "precio": 500.0,
                "stock": 3,
                "marca": "Sony",
                "tipo": "Electronico"
            })
        );
    }

    #[test]
    fn food_and_clothing_records_use_wire_tokens() {
        let eggs = Product::food(id("2"), "Eggs", 3.5, 12, "01/02/2030", "Dozen").unwrap();
        let record = ProductRecord::from(&eggs);
        assert_eq!(record.unit_form.as_deref(), Some("docena"));
        assert_eq!(record.kind.as_deref(), Some("Alimenticio"));

        let shirt = Product::clothing(id("3"), "Shirt", 20.0, 4, "Acme", "XL").unwrap();
        let record = ProductRecord::from(&shirt);
        assert_eq!(record.size.as_deref(), Some("xl"));
        assert_eq!(record.brand_name.as_deref(), Some("Acme"));
        assert_eq!(record.kind.as_deref(), Some("Indumentaria"));
    }

    #[test]
    fn plain_product_has_no_tag() {
        let p = Product::new(id("9"), "Box", 1.0, 0, Category::General).unwrap();
        let value = serde_json::to_value(ProductRecord::from(&p)).unwrap();
        assert!(value.get("tipo").is_none());
    }

    #[test]
    fn clothing_record_is_rebuilt_as_clothing() {
        let value = json!({
            "id": 3,
            "nombre": "Shirt",
            "precio": 20.0,
            "stock": 4,
            "nombre_marca": "Acme",
            "talle": "m",
            "tipo": "Indumentaria"
        });
        let record: ProductRecord = serde_json::from_value(value).unwrap();
        let product = Product::try_from(&record).unwrap();
        assert_eq!(
            product.category(),
            &Category::Clothing {
                brand_name: "Acme".to_string(),
                size: Size::M
            }
        );
    }

    fn untagged(value: serde_json::Value) -> ProductRecord {
        let mut base = json!({ "id": "7", "nombre": "Thing", "precio": 2, "stock": 1 });
        if let (Some(base), Some(extra)) = (base.as_object_mut(), value.as_object()) {
            base.extend(extra.clone());
        }
        serde_json::from_value(base).unwrap()
    }

    #[test]
    fn untagged_records_fall_back_to_field_presence() {
        let cases = [
            (json!({}), RecordKind::General),
            (json!({ "marca": "Sony" }), RecordKind::Electronic),
            (
                json!({ "fecha_caducidad": "2031", "forma": "kilo" }),
                RecordKind::Food,
            ),
            (
                json!({ "nombre_marca": "Acme", "talle": "xl" }),
                RecordKind::Clothing,
            ),
        ];
        for (fields, expected) in cases {
            let record = untagged(fields.clone());
            assert_eq!(record.record_kind().unwrap(), expected, "{fields}");
            assert!(Product::try_from(&record).is_ok(), "{fields}");
        }
    }

    #[test]
    fn untagged_record_with_partial_fields_is_rejected_not_flattened() {
        let record = untagged(json!({ "nombre_marca": "Acme" }));
        assert_eq!(record.record_kind().unwrap(), RecordKind::Clothing);
        assert!(Product::try_from(&record).unwrap_err().to_string().contains("talle"));

        let record = untagged(json!({ "fecha_caducidad": "2031" }));
        assert_eq!(record.record_kind().unwrap(), RecordKind::Food);
        assert!(Product::try_from(&record).unwrap_err().to_string().contains("forma"));
    }

    #[test]
    fn untagged_record_mixing_categories_is_rejected() {
        let record = untagged(json!({ "marca": "Sony", "talle": "m" }));
        assert!(record.record_kind().is_err());
        assert!(Product::try_from(&record).is_err());
    }

    #[test]
    fn invalid_stored_values_fail_reconstruction() {
        let record: ProductRecord = serde_json::from_value(json!({
            "id": 1, "nombre": "TV", "precio": -3.0, "stock": 1,
            "marca": "Sony", "tipo": "Electronico"
        }))
        .unwrap();
        assert!(matches!(Product::try_from(&record), Err(DomainError::Validation(_))));

        let record: ProductRecord = serde_json::from_value(json!({
            "id": 1, "nombre": "TV", "precio": 3.0, "stock": 1, "tipo": "Juguete"
        }))
        .unwrap();
        let err = Product::try_from(&record).unwrap_err();
        assert!(err.to_string().contains("Juguete"));
    }

    #[test]
    fn tagged_record_missing_its_fields_is_rejected() {
        let record: ProductRecord = serde_json::from_value(json!({
            "id": 1, "nombre": "TV", "precio": 3.0, "stock": 1, "tipo": "Electronico"
        }))
        .unwrap();
        let err = Product::try_from(&record).unwrap_err();
        assert!(err.to_string().contains("marca"));
    }

    fn category_strategy() -> impl Strategy<Value = Category> {
        prop_oneof![
            Just(Category::General),
            "[A-Za-z ]{0,12}".prop_map(|brand| Category::Electronic { brand }),
            ("[0-9/]{0,10}", prop::sample::select(UnitForm::ALL.to_vec())).prop_map(
                |(expiration_date, unit_form)| Category::Food {
                    expiration_date,
                    unit_form
                }
            ),
            ("[A-Za-z]{0,12}", prop::sample::select(Size::ALL.to_vec()))
                .prop_map(|(brand_name, size)| Category::Clothing { brand_name, size }),
        ]
    }

    proptest! {
        #[test]
        fn records_rebuild_the_same_product(
            raw_id in "[A-Za-z0-9-]{1,8}",
            name in "[A-Za-z][A-Za-z ]{0,15}",
            price in 0.01f64..1e7f64,
            stock in 0i64..1_000_000i64,
            category in category_strategy(),
        ) {
            let product = Product::new(id(&raw_id), name, price, stock, category).unwrap();
            let json = serde_json::to_string(&ProductRecord::from(&product)).unwrap();
            let record: ProductRecord = serde_json::from_str(&json).unwrap();
            prop_assert_eq!(Product::try_from(record).unwrap(), product);
        }
    }
}
