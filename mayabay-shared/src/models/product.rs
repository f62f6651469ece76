use serde::{Deserialize, Serialize};

/// A catalog product as served by the backend.
///
/// Products are created server-side and fetched in bulk; the client never
/// mutates one except through the admin create/delete endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique identifier, assigned by the server.
    pub id: i64,

    /// Display name shown on cards and cart lines.
    pub name: String,

    /// Price in BRL. Size selection never changes it.
    pub price: f64,

    /// Top-level category (e.g. "Feminino").
    pub category: String,

    /// Secondary category used by the admin form.
    pub sub_category: String,

    /// Image location for cards and the product modal.
    pub image_url: String,
}

/// Payload for the admin create-product endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewProduct {
    /// Display name.
    pub name: String,

    /// Price in BRL.
    pub price: f64,

    /// Top-level category.
    pub category: String,

    /// Secondary category.
    pub sub_category: String,

    /// Image location.
    pub image_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_serialization() {
        let product = Product {
            id: 7,
            name: "Vestido Linho".to_string(),
            price: 189.9,
            category: "Feminino".to_string(),
            sub_category: "Vestidos".to_string(),
            image_url: "https://cdn.example.com/vestido.jpg".to_string(),
        };

        let serialized = serde_json::to_string(&product).unwrap();
        let deserialized: Product = serde_json::from_str(&serialized).unwrap();

        assert_eq!(deserialized, product);
        assert_eq!(deserialized.id, 7);
        assert_eq!(deserialized.category, "Feminino");
    }

    #[test]
    fn test_product_deserializes_backend_shape() {
        let body = r#"{
            "id": 1,
            "name": "Camisa Oxford",
            "price": 120.0,
            "category": "Masculino",
            "sub_category": "Camisas",
            "image_url": "https://cdn.example.com/oxford.jpg"
        }"#;

        let product: Product = serde_json::from_str(body).unwrap();
        assert_eq!(product.name, "Camisa Oxford");
        assert_eq!(product.price, 120.0);
    }

    #[test]
    fn test_new_product_serializes_without_id() {
        let new_product = NewProduct {
            name: "Bolsa Palha".to_string(),
            price: 89.0,
            category: "Acessórios".to_string(),
            sub_category: "Bolsas".to_string(),
            image_url: "https://cdn.example.com/bolsa.jpg".to_string(),
        };

        let value = serde_json::to_value(&new_product).unwrap();
        assert!(value.get("id").is_none());
        assert_eq!(value["name"], "Bolsa Palha");
    }
}
