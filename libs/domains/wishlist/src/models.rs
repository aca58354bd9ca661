use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// A wishlisted listing: a denormalized snapshot of the listing plus the
/// buyer who saved it.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct WishlistItem {
    /// Unique identifier (stored as _id in MongoDB)
    #[serde(rename = "_id", alias = "id")]
    pub id: Uuid,
    /// The wishlisted listing
    #[serde(rename = "itemId")]
    pub item_id: Uuid,
    pub title: String,
    #[serde(rename = "itemImage", default, skip_serializing_if = "Option::is_none")]
    pub item_image: Option<String>,
    /// Buyer who saved it
    #[serde(rename = "userId")]
    pub user_id: Uuid,
    #[serde(rename = "userName")]
    pub user_name: String,
}

impl WishlistItem {
    pub fn new(input: AddWishlistItem) -> Self {
        Self {
            id: Uuid::now_v7(),
            item_id: input.item_id,
            title: input.title,
            item_image: input.item_image,
            user_id: input.user_id,
            user_name: input.user_name,
        }
    }
}

/// Add request body
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct AddWishlistItem {
    #[serde(rename = "itemId")]
    pub item_id: Uuid,
    pub title: String,
    #[serde(rename = "itemImage", default)]
    pub item_image: Option<String>,
    #[serde(rename = "userId")]
    pub user_id: Uuid,
    #[serde(rename = "userName")]
    pub user_name: String,
}

/// Remove request body. Only the listing id matters.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct RemoveWishlistItem {
    #[serde(rename = "itemId")]
    pub item_id: Uuid,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_add_body_uses_camel_case_names() {
        let item_id = Uuid::new_v4();
        let user_id = Uuid::new_v4();

        let input: AddWishlistItem = serde_json::from_value(json!({
            "itemId": item_id,
            "title": "Dune",
            "itemImage": "uploads/1-cover.png",
            "userId": user_id,
            "userName": "Buyer"
        }))
        .unwrap();

        assert_eq!(input.item_id, item_id);
        assert_eq!(input.user_id, user_id);

        let doc = serde_json::to_value(WishlistItem::new(input)).unwrap();
        assert!(doc.get("_id").is_some());
        assert_eq!(doc["itemId"], item_id.to_string());
        assert_eq!(doc["itemImage"], "uploads/1-cover.png");
    }

    #[test]
    fn test_remove_body_only_needs_item_id() {
        let input: RemoveWishlistItem =
            serde_json::from_value(json!({"itemId": Uuid::new_v4()})).unwrap();
        let _ = input.item_id;
    }
}
