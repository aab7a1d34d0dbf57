use storefront_tauri::catalog::{CustomizationRules, CustomizationType, Product};
use storefront_tauri::order::{
    place_order, validate_order, CustomerInfo, CustomizationPayload, OrderLog, OrderRequest,
    OrderStatus,
};
use storefront_tauri::StorefrontError;
use tempfile::TempDir;

fn names_product(max_names: u32, max_chars_per_name: u32) -> Product {
    Product {
        id: "p-names".to_string(),
        barcode: "RD-ORN-001".to_string(),
        name: "Family Name Ornament".to_string(),
        description: None,
        price: 24.99,
        image_filename: None,
        customization_type: CustomizationType::Names,
        customization_rules: Some(CustomizationRules {
            max_names: Some(max_names),
            max_chars_per_name: Some(max_chars_per_name),
            ..Default::default()
        }),
        active: true,
        created_at: "2025-10-01T16:00:00Z".to_string(),
        updated_at: "2025-10-01T16:00:00Z".to_string(),
    }
}

fn text_product() -> Product {
    Product {
        id: "p-text".to_string(),
        barcode: "RD-SGN-003".to_string(),
        name: "Welcome Sign".to_string(),
        customization_type: CustomizationType::Text,
        customization_rules: None,
        ..names_product(1, 20)
    }
}

fn plain_product() -> Product {
    Product {
        id: "p-plain".to_string(),
        customization_type: CustomizationType::None,
        customization_rules: None,
        ..names_product(1, 20)
    }
}

fn customer() -> CustomerInfo {
    CustomerInfo {
        name: "Dana Reyes".to_string(),
        email: "dana@example.com".to_string(),
        phone: "(619) 555-1234".to_string(),
    }
}

fn request(product: &Product, customization: Option<CustomizationPayload>) -> OrderRequest {
    OrderRequest {
        product_id: product.id.clone(),
        customer: customer(),
        customization,
        pickup_confirmed: true,
    }
}

fn names(list: &[&str]) -> Option<CustomizationPayload> {
    Some(CustomizationPayload::Names {
        names: list.iter().map(|s| s.to_string()).collect(),
        font: "Dancing Script".to_string(),
    })
}

fn fields(product: &Product, request: &OrderRequest) -> Vec<&'static str> {
    validate_order(product, request)
        .into_iter()
        .map(|issue| issue.field)
        .collect()
}

#[test]
fn test_valid_names_order_has_no_issues() {
    let product = names_product(2, 5);
    assert!(validate_order(&product, &request(&product, names(&["Alexa", "Bo"]))).is_empty());
}

#[test]
fn test_every_customer_problem_is_reported() {
    let product = plain_product();
    let mut req = request(&product, None);
    req.customer = CustomerInfo {
        name: "   ".to_string(),
        email: "dana@example".to_string(),
        phone: "(619) 555".to_string(),
    };
    req.pickup_confirmed = false;

    assert_eq!(
        fields(&product, &req),
        vec!["name", "email", "phone", "pickup_confirmed"]
    );
}

#[test]
fn test_names_over_limits_are_rejected() {
    let product = names_product(2, 5);

    let too_many = request(&product, names(&["Al", "Bo", "Cy"]));
    assert_eq!(fields(&product, &too_many), vec!["customization"]);

    let too_long = request(&product, names(&["Alexandria"]));
    let issues = validate_order(&product, &too_long);
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].message, "Names must be 5 characters or fewer");
}

#[test]
fn test_names_product_requires_names_payload() {
    let product = names_product(2, 5);
    assert_eq!(fields(&product, &request(&product, None)), vec!["customization"]);

    let wrong_kind = request(
        &product,
        Some(CustomizationPayload::Text {
            text: "Hello".to_string(),
        }),
    );
    assert_eq!(fields(&product, &wrong_kind), vec!["customization"]);

    assert_eq!(
        fields(&product, &request(&product, names(&[]))),
        vec!["customization"]
    );
}

#[test]
fn test_blank_name_entry_rejected() {
    let product = names_product(2, 5);
    let req = request(&product, names(&["   ", "Bob"]));

    let issues = validate_order(&product, &req);
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].field, "customization");
    assert_eq!(issues[0].message, "Names cannot be blank");

    let dir = TempDir::new().unwrap();
    let log = OrderLog::new(&dir.path().join("orders.db")).unwrap();
    assert!(place_order(&log, &product, &req).is_err());
    assert!(log.list_recent(10).unwrap().is_empty());
}

#[test]
fn test_unknown_font_rejected() {
    let product = names_product(1, 20);
    let req = request(
        &product,
        Some(CustomizationPayload::Names {
            names: vec!["Ana".to_string()],
            font: "Comic Sans".to_string(),
        }),
    );
    assert_eq!(fields(&product, &req), vec!["customization"]);
}

#[test]
fn test_text_counts_characters_not_bytes() {
    let product = text_product();
    let fifty_accents = "é".repeat(50);
    let req = request(
        &product,
        Some(CustomizationPayload::Text {
            text: fifty_accents,
        }),
    );
    assert!(validate_order(&product, &req).is_empty());

    let req = request(
        &product,
        Some(CustomizationPayload::Text {
            text: "x".repeat(51),
        }),
    );
    assert_eq!(fields(&product, &req), vec!["customization"]);

    let blank = request(
        &product,
        Some(CustomizationPayload::Text {
            text: "  ".to_string(),
        }),
    );
    assert_eq!(fields(&product, &blank), vec!["customization"]);
}

#[test]
fn test_plain_product_ignores_customization() {
    let product = plain_product();
    let req = request(&product, names(&["Ignored"]));
    assert!(validate_order(&product, &req).is_empty());
}

#[test]
fn test_place_order_records_pending() {
    let dir = TempDir::new().unwrap();
    let log = OrderLog::new(&dir.path().join("orders.db")).unwrap();
    let product = names_product(2, 5);

    let receipt = place_order(&log, &product, &request(&product, names(&["Alexa"]))).unwrap();
    assert!(receipt.order_number.starts_with("RD-"));
    assert_eq!(receipt.order_number.len(), "RD-YYYYMMDD-XXXXXX".len());
    assert_eq!(receipt.product_name, "Family Name Ornament");
    assert_eq!(receipt.total_price, 24.99);
    assert_eq!(receipt.status, OrderStatus::Pending);
    assert!(!receipt.payment_available);

    let recent = log.list_recent(10).unwrap();
    assert_eq!(recent.len(), 1);
    assert_eq!(recent[0].order_number, receipt.order_number);
    assert_eq!(recent[0].customization, names(&["Alexa"]));
    assert!(recent[0].payment_status.is_none());
}

#[test]
fn test_place_order_drops_customization_for_plain_product() {
    let dir = TempDir::new().unwrap();
    let log = OrderLog::new(&dir.path().join("orders.db")).unwrap();
    let product = plain_product();

    place_order(&log, &product, &request(&product, names(&["Ignored"]))).unwrap();
    assert!(log.list_recent(1).unwrap()[0].customization.is_none());
}

#[test]
fn test_rejected_order_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let log = OrderLog::new(&dir.path().join("orders.db")).unwrap();
    let product = names_product(2, 5);
    let mut req = request(&product, None);
    req.pickup_confirmed = false;

    let err = place_order(&log, &product, &req).unwrap_err();
    match &err {
        StorefrontError::Validation(issues) => assert_eq!(issues.len(), 2),
        other => panic!("expected validation error, got {:?}", other),
    }
    assert!(String::from(err).contains("; "));
    assert!(log.list_recent(10).unwrap().is_empty());
}
