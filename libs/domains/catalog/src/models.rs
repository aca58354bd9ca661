use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// A book listing.
///
/// Field names on the wire follow the storefront's camelCase contract.
/// `price` is kept as the submitted string, not parsed into a number.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Item {
    /// Unique identifier (stored as _id in MongoDB)
    #[serde(rename = "_id", alias = "id")]
    pub id: Uuid,
    /// Public path of the uploaded cover image, when one was provided
    #[serde(rename = "itemImage", default, skip_serializing_if = "Option::is_none")]
    pub item_image: Option<String>,
    pub title: String,
    pub author: String,
    pub genre: String,
    pub description: String,
    pub price: String,
    /// Seller who listed the book
    #[serde(rename = "userId")]
    pub user_id: Uuid,
    #[serde(rename = "userName")]
    pub user_name: String,
}

impl Item {
    pub fn new(input: CreateItem) -> Self {
        Self {
            id: Uuid::now_v7(),
            item_image: input.item_image,
            title: input.title,
            author: input.author,
            genre: input.genre,
            description: input.description,
            price: input.price,
            user_id: input.user_id,
            user_name: input.user_name,
        }
    }
}

/// Input assembled from the multipart create form.
#[derive(Debug, Clone, ToSchema)]
pub struct CreateItem {
    pub item_image: Option<String>,
    pub title: String,
    pub author: String,
    pub genre: String,
    pub description: String,
    pub price: String,
    pub user_id: Uuid,
    pub user_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_input() -> CreateItem {
        CreateItem {
            item_image: None,
            title: "Dune".into(),
            author: "Frank Herbert".into(),
            genre: "Sci-Fi".into(),
            description: "Desert planet".into(),
            price: "250".into(),
            user_id: Uuid::new_v4(),
            user_name: "Seller".into(),
        }
    }

    #[test]
    fn test_item_serializes_camel_case_wire_names() {
        let mut input = create_input();
        input.item_image = Some("uploads/1-cover.png".into());
        let doc = serde_json::to_value(Item::new(input)).unwrap();

        assert!(doc.get("_id").is_some());
        assert_eq!(doc["itemImage"], "uploads/1-cover.png");
        assert!(doc.get("userId").is_some());
        assert!(doc.get("userName").is_some());
        assert!(doc.get("user_id").is_none());
    }

    #[test]
    fn test_item_without_image_omits_the_field() {
        let doc = serde_json::to_value(Item::new(create_input())).unwrap();
        assert!(doc.get("itemImage").is_none());
    }

    #[test]
    fn test_price_stays_a_string() {
        let doc = serde_json::to_value(Item::new(create_input())).unwrap();
        assert_eq!(doc["price"], "250");
    }
}
