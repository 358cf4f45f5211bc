use contracts::domain::a001_product::aggregate::{Product, ProductDto, ProductId, RestockRequest};

const INVALID_PRODUCT: &str = "Please enter valid product details";

/// Raw text of the add/edit form
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProductFormState {
    pub editing: Option<ProductId>,
    pub name: String,
    pub sku: String,
    pub price: String,
    pub stock: String,
}

impl ProductFormState {
    pub fn for_edit(product: &Product) -> Self {
        Self {
            editing: Some(product.id),
            name: product.name.clone(),
            sku: product.sku.clone(),
            price: product.price.to_string(),
            stock: product.stock.to_string(),
        }
    }

    pub fn to_dto(&self) -> Result<ProductDto, String> {
        let price = self
            .price
            .trim()
            .parse::<f64>()
            .map_err(|_| INVALID_PRODUCT.to_string())?;
        let stock = match self.stock.trim() {
            "" => 0,
            raw => raw.parse::<i64>().map_err(|_| INVALID_PRODUCT.to_string())?,
        };
        let dto = ProductDto {
            name: self.name.trim().to_string(),
            sku: self.sku.trim().to_string(),
            price,
            stock,
        };
        dto.validate()?;
        Ok(dto)
    }
}

pub fn parse_restock(raw: &str) -> Result<RestockRequest, String> {
    let quantity = raw
        .trim()
        .parse::<i64>()
        .map_err(|_| "Enter a whole number of units".to_string())?;
    let request = RestockRequest { quantity };
    request.validate()?;
    Ok(request)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: &str, sku: &str, price: &str, stock: &str) -> ProductFormState {
        ProductFormState {
            editing: None,
            name: name.into(),
            sku: sku.into(),
            price: price.into(),
            stock: stock.into(),
        }
    }

    #[test]
    fn test_valid_form_is_trimmed() {
        let dto = form(" Tea ", "TEA-1 ", "12.5", "3").to_dto().unwrap();
        assert_eq!(dto.name, "Tea");
        assert_eq!(dto.sku, "TEA-1");
        assert_eq!(dto.price, 12.5);
        assert_eq!(dto.stock, 3);
    }

    #[test]
    fn test_blank_stock_defaults_to_zero() {
        assert_eq!(form("Tea", "T", "1", " ").to_dto().unwrap().stock, 0);
    }

    #[test]
    fn test_invalid_forms() {
        for f in [
            form("", "T", "1", "0"),
            form("Tea", "", "1", "0"),
            form("Tea", "T", "abc", "0"),
            form("Tea", "T", "0", "0"),
            form("Tea", "T", "1", "-2"),
            form("Tea", "T", "1", "1.5"),
        ] {
            assert_eq!(f.to_dto(), Err(INVALID_PRODUCT.to_string()), "{:?}", f);
        }
    }

    #[test]
    fn test_edit_prefills_from_product() {
        let product = Product {
            id: ProductId(4),
            name: "Ghee".into(),
            sku: "GHE-5".into(),
            price: 320.0,
            stock: 2,
        };
        let state = ProductFormState::for_edit(&product);
        assert_eq!(state.editing, Some(ProductId(4)));
        assert_eq!(state.price, "320");
        assert_eq!(state.to_dto().unwrap().price, 320.0);
    }

    #[test]
    fn test_parse_restock() {
        assert_eq!(parse_restock(" 5 "), Ok(RestockRequest { quantity: 5 }));
        assert!(parse_restock("0").is_err());
        assert!(parse_restock("-1").is_err());
        assert!(parse_restock("x").is_err());
    }
}
