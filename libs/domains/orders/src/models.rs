use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// A purchase order.
///
/// Everything except the party ids is a verbatim string snapshot of what
/// the storefront submitted at checkout; amounts and pincodes are not
/// parsed into numbers. The mixed-case wire names (`BookingDate`,
/// `Delivery`) are part of the legacy contract.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Order {
    /// Unique identifier (stored as _id in MongoDB)
    #[serde(rename = "_id", alias = "id")]
    pub id: Uuid,
    pub flatno: String,
    pub city: String,
    pub state: String,
    pub pincode: String,
    #[serde(rename = "totalamount")]
    pub total_amount: String,
    /// Seller display name
    pub seller: String,
    #[serde(rename = "sellerId")]
    pub seller_id: Uuid,
    #[serde(rename = "BookingDate")]
    pub booking_date: String,
    pub description: String,
    #[serde(rename = "Delivery")]
    pub delivery: String,
    /// Buyer who placed the order
    #[serde(rename = "userId")]
    pub user_id: Uuid,
    #[serde(rename = "userName")]
    pub user_name: String,
    #[serde(rename = "booktitle")]
    pub book_title: String,
    #[serde(rename = "bookauthor")]
    pub book_author: String,
    #[serde(rename = "bookgenre")]
    pub book_genre: String,
    #[serde(rename = "itemImage", default, skip_serializing_if = "Option::is_none")]
    pub item_image: Option<String>,
}

impl Order {
    pub fn new(input: CreateOrder) -> Self {
        Self {
            id: Uuid::now_v7(),
            flatno: input.flatno,
            city: input.city,
            state: input.state,
            pincode: input.pincode,
            total_amount: input.total_amount,
            seller: input.seller,
            seller_id: input.seller_id,
            booking_date: input.booking_date,
            description: input.description,
            delivery: input.delivery,
            user_id: input.user_id,
            user_name: input.user_name,
            book_title: input.book_title,
            book_author: input.book_author,
            book_genre: input.book_genre,
            item_image: input.item_image,
        }
    }
}

/// Checkout request body
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateOrder {
    pub flatno: String,
    pub city: String,
    pub state: String,
    pub pincode: String,
    #[serde(rename = "totalamount")]
    pub total_amount: String,
    pub seller: String,
    #[serde(rename = "sellerId")]
    pub seller_id: Uuid,
    #[serde(rename = "BookingDate")]
    pub booking_date: String,
    pub description: String,
    #[serde(rename = "Delivery")]
    pub delivery: String,
    #[serde(rename = "userId")]
    pub user_id: Uuid,
    #[serde(rename = "userName")]
    pub user_name: String,
    #[serde(rename = "booktitle")]
    pub book_title: String,
    #[serde(rename = "bookauthor")]
    pub book_author: String,
    #[serde(rename = "bookgenre")]
    pub book_genre: String,
    #[serde(rename = "itemImage", default)]
    pub item_image: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn checkout_body(seller_id: Uuid, user_id: Uuid) -> serde_json::Value {
        json!({
            "flatno": "12B",
            "city": "Pune",
            "state": "MH",
            "pincode": "411001",
            "totalamount": "499",
            "seller": "Book Seller",
            "sellerId": seller_id,
            "BookingDate": "2024-08-01",
            "description": "Leave at door",
            "Delivery": "2024-08-05",
            "userId": user_id,
            "userName": "Buyer",
            "booktitle": "Dune",
            "bookauthor": "Frank Herbert",
            "bookgenre": "Sci-Fi",
            "itemImage": "uploads/1-cover.png"
        })
    }

    #[test]
    fn test_create_order_accepts_legacy_wire_names() {
        let seller_id = Uuid::new_v4();
        let user_id = Uuid::new_v4();
        let input: CreateOrder =
            serde_json::from_value(checkout_body(seller_id, user_id)).unwrap();

        assert_eq!(input.total_amount, "499");
        assert_eq!(input.booking_date, "2024-08-01");
        assert_eq!(input.delivery, "2024-08-05");
        assert_eq!(input.seller_id, seller_id);
        assert_eq!(input.user_id, user_id);
    }

    #[test]
    fn test_order_round_trips_mixed_case_names() {
        let input: CreateOrder =
            serde_json::from_value(checkout_body(Uuid::new_v4(), Uuid::new_v4())).unwrap();
        let doc = serde_json::to_value(Order::new(input)).unwrap();

        assert!(doc.get("_id").is_some());
        assert_eq!(doc["BookingDate"], "2024-08-01");
        assert_eq!(doc["Delivery"], "2024-08-05");
        assert_eq!(doc["totalamount"], "499");
        assert_eq!(doc["booktitle"], "Dune");
        assert!(doc.get("total_amount").is_none());
    }

    #[test]
    fn test_item_image_is_optional() {
        let mut body = checkout_body(Uuid::new_v4(), Uuid::new_v4());
        body.as_object_mut().unwrap().remove("itemImage");

        let input: CreateOrder = serde_json::from_value(body).unwrap();
        assert!(input.item_image.is_none());

        let doc = serde_json::to_value(Order::new(input)).unwrap();
        assert!(doc.get("itemImage").is_none());
    }
}
